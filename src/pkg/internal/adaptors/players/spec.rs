use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::errors::ScoutingError;
use crate::pkg::internal::scoring;
use crate::prelude::Result;

/// Column set of the player table. The order must match the field order of
/// [`PlayerRecord`]; the store writes this header when creating the file.
pub const TABLE_HEADER: [&str; 32] = [
    "id",
    "created_at",
    "name",
    "age",
    "birth_year",
    "nationality",
    "height_cm",
    "foot",
    "primary_position",
    "secondary_position",
    "current_club",
    "league",
    "contract_until",
    "agent",
    "agent_phone",
    "general_description",
    "performance",
    "potential",
    "adaptability",
    "technical",
    "tactical",
    "physical",
    "mental",
    "technical_notes",
    "tactical_notes",
    "physical_notes",
    "mental_notes",
    "references",
    "injury_history",
    "injury_status",
    "verdict",
    "photo_path",
];

/// Preferred foot, stored under its form label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Foot {
    #[serde(rename = "Derecho")]
    Right,
    #[serde(rename = "Izquierdo")]
    Left,
    #[serde(rename = "Ambidiestro")]
    Both,
}

impl Foot {
    pub const ALL: [Foot; 3] = [Foot::Right, Foot::Left, Foot::Both];

    pub fn label(&self) -> &'static str {
        match self {
            Foot::Right => "Derecho",
            Foot::Left => "Izquierdo",
            Foot::Both => "Ambidiestro",
        }
    }

    pub fn from_label(label: &str) -> Option<Foot> {
        Foot::ALL.iter().copied().find(|f| f.label() == label)
    }
}

impl fmt::Display for Foot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Injury situation at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjuryStatus {
    #[serde(rename = "NO")]
    Clean,
    #[serde(rename = "REVISAR")]
    Review,
    #[serde(rename = "ÚLTIMOS 3 AÑOS LESIONES RELEVANTES")]
    RecentRelevant,
}

impl InjuryStatus {
    pub const ALL: [InjuryStatus; 3] = [
        InjuryStatus::Clean,
        InjuryStatus::Review,
        InjuryStatus::RecentRelevant,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InjuryStatus::Clean => "NO",
            InjuryStatus::Review => "REVISAR",
            InjuryStatus::RecentRelevant => "ÚLTIMOS 3 AÑOS LESIONES RELEVANTES",
        }
    }

    pub fn from_label(label: &str) -> Option<InjuryStatus> {
        InjuryStatus::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl Default for InjuryStatus {
    fn default() -> Self {
        InjuryStatus::Clean
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final outcome of an evaluation, one of four fixed labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "FIRMAR – Mejora plantilla")]
    Sign,
    #[serde(rename = "SEGUIR DE CERCA – Nivel de plantilla")]
    FollowClosely,
    #[serde(rename = "SEGUIR – Complemento de plantilla")]
    Follow,
    #[serde(rename = "NO INTERESA – No cumple con los requisitos")]
    NotInterested,
}

impl Verdict {
    pub const ALL: [Verdict; 4] = [
        Verdict::Sign,
        Verdict::FollowClosely,
        Verdict::Follow,
        Verdict::NotInterested,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Sign => "FIRMAR – Mejora plantilla",
            Verdict::FollowClosely => "SEGUIR DE CERCA – Nivel de plantilla",
            Verdict::Follow => "SEGUIR – Complemento de plantilla",
            Verdict::NotInterested => "NO INTERESA – No cumple con los requisitos",
        }
    }

    pub fn from_label(label: &str) -> Option<Verdict> {
        Verdict::ALL.iter().copied().find(|v| v.label() == label)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One stored scouting evaluation. Rows are append-only: records are created
/// once and never updated or deleted. Optional text fields keep the empty
/// string as their missing marker so the table round-trips without nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    #[serde(deserialize_with = "deserialize_lenient_u8")]
    pub age: u8,
    pub birth_year: u16,
    pub nationality: String,
    pub height_cm: u16,
    pub foot: Foot,
    pub primary_position: String,
    #[serde(default)]
    pub secondary_position: String,
    pub current_club: String,
    pub league: String,
    pub contract_until: u16,
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub agent_phone: String,
    #[serde(default)]
    pub general_description: String,
    #[serde(deserialize_with = "deserialize_lenient_u8")]
    pub performance: u8,
    #[serde(deserialize_with = "deserialize_lenient_u8")]
    pub potential: u8,
    #[serde(deserialize_with = "deserialize_lenient_u8")]
    pub adaptability: u8,
    #[serde(deserialize_with = "deserialize_lenient_u8")]
    pub technical: u8,
    #[serde(deserialize_with = "deserialize_lenient_u8")]
    pub tactical: u8,
    #[serde(deserialize_with = "deserialize_lenient_u8")]
    pub physical: u8,
    #[serde(deserialize_with = "deserialize_lenient_u8")]
    pub mental: u8,
    #[serde(default)]
    pub technical_notes: String,
    #[serde(default)]
    pub tactical_notes: String,
    #[serde(default)]
    pub physical_notes: String,
    #[serde(default)]
    pub mental_notes: String,
    #[serde(default)]
    pub references: String,
    #[serde(default)]
    pub injury_history: String,
    pub injury_status: InjuryStatus,
    pub verdict: Verdict,
    #[serde(default)]
    pub photo_path: String,
}

/// Score cells may arrive blank from hand-edited tables; a blank reads as 0,
/// which downstream scoring treats as "not scored".
fn deserialize_lenient_u8<'de, D>(deserializer: D) -> core::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(serde::de::Error::custom)
}

impl PlayerRecord {
    /// Composite evaluation on the 0-10 scale.
    pub fn composite(&self) -> f64 {
        scoring::composite_score(
            self.performance as f64,
            self.potential as f64,
            self.adaptability as f64,
        )
    }

    pub fn photo(&self) -> Option<&str> {
        let trimmed = self.photo_path.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// A submitted evaluation before it is stamped and persisted.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub age: u8,
    pub birth_year: u16,
    pub nationality: String,
    pub height_cm: u16,
    pub foot: Foot,
    pub primary_position: String,
    pub secondary_position: String,
    pub current_club: String,
    pub league: String,
    pub contract_until: u16,
    pub agent: String,
    pub agent_phone: String,
    pub general_description: String,
    pub performance: u8,
    pub potential: u8,
    pub adaptability: u8,
    pub technical: u8,
    pub tactical: u8,
    pub physical: u8,
    pub mental: u8,
    pub technical_notes: String,
    pub tactical_notes: String,
    pub physical_notes: String,
    pub mental_notes: String,
    pub references: String,
    pub injury_history: String,
    pub injury_status: InjuryStatus,
    pub verdict: Verdict,
    pub photo_path: Option<String>,
}

fn field<'a>(fields: &'a HashMap<String, String>, key: &str) -> &'a str {
    fields.get(key).map(String::as_str).unwrap_or("").trim()
}

fn parse_number<T>(fields: &HashMap<String, String>, key: &str, label: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    field(fields, key)
        .parse()
        .map_err(|_| ScoutingError::Validation(format!("{label}: valor numérico inválido")))
}

/// Sliders submit 1 by default; a missing score falls back to that minimum
/// instead of failing the whole submission.
fn parse_score(fields: &HashMap<String, String>, key: &str, label: &str) -> Result<u8> {
    let raw = field(fields, key);
    if raw.is_empty() {
        return Ok(1);
    }
    let value: u8 = raw
        .parse()
        .map_err(|_| ScoutingError::Validation(format!("{label}: valor numérico inválido")))?;
    if !(1..=6).contains(&value) {
        return Err(ScoutingError::Validation(format!(
            "{label}: fuera del rango 1-6"
        )));
    }
    Ok(value)
}

impl NewPlayer {
    /// Builds a draft from submitted form fields. Required-field presence is
    /// checked by the handler beforehand; this reports per-field parse
    /// problems under the same labels the form shows.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<NewPlayer> {
        let secondary = field(fields, "secondary_position");
        let secondary = if secondary == "No especificada" {
            String::new()
        } else {
            secondary.to_string()
        };

        let injury_status = match field(fields, "injury_status") {
            "" => InjuryStatus::default(),
            label => InjuryStatus::from_label(label).ok_or_else(|| {
                ScoutingError::Validation("Estado de lesiones: opción inválida".into())
            })?,
        };

        Ok(NewPlayer {
            name: field(fields, "name").to_string(),
            age: parse_number(fields, "age", "Edad")?,
            birth_year: parse_number(fields, "birth_year", "Año nacimiento")?,
            nationality: field(fields, "nationality").to_string(),
            height_cm: parse_number(fields, "height_cm", "Talla")?,
            foot: Foot::from_label(field(fields, "foot"))
                .ok_or_else(|| ScoutingError::Validation("Pie hábil: opción inválida".into()))?,
            primary_position: field(fields, "primary_position").to_string(),
            secondary_position: secondary,
            current_club: field(fields, "current_club").to_string(),
            league: field(fields, "league").to_string(),
            contract_until: parse_number(fields, "contract_until", "Año fin contrato")?,
            agent: field(fields, "agent").to_string(),
            agent_phone: field(fields, "agent_phone").to_string(),
            general_description: field(fields, "general_description").to_string(),
            performance: parse_score(fields, "performance", "Rendimiento actual")?,
            potential: parse_score(fields, "potential", "Potencial de crecimiento")?,
            adaptability: parse_score(fields, "adaptability", "Adaptabilidad al equipo")?,
            technical: parse_score(fields, "technical", "Técnica")?,
            tactical: parse_score(fields, "tactical", "Táctica")?,
            physical: parse_score(fields, "physical", "Físico")?,
            mental: parse_score(fields, "mental", "Mental")?,
            technical_notes: field(fields, "technical_notes").to_string(),
            tactical_notes: field(fields, "tactical_notes").to_string(),
            physical_notes: field(fields, "physical_notes").to_string(),
            mental_notes: field(fields, "mental_notes").to_string(),
            references: field(fields, "references").to_string(),
            injury_history: field(fields, "injury_history").to_string(),
            injury_status,
            verdict: Verdict::from_label(field(fields, "verdict"))
                .ok_or_else(|| ScoutingError::Validation("Veredicto final: opción inválida".into()))?,
            photo_path: None,
        })
    }

    /// Creation-time invariants: required identity/club/position fields are
    /// non-empty and every bounded score lies in 1-6.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("Nombre del jugador", &self.name),
            ("Nacionalidad", &self.nationality),
            ("Posición principal", &self.primary_position),
            ("Club actual", &self.current_club),
            ("Liga", &self.league),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| *label)
            .collect();
        if !missing.is_empty() {
            return Err(ScoutingError::Validation(format!(
                "Por favor complete los siguientes campos obligatorios: {}",
                missing.join(", ")
            )));
        }

        let scores = [
            ("Rendimiento actual", self.performance),
            ("Potencial de crecimiento", self.potential),
            ("Adaptabilidad al equipo", self.adaptability),
            ("Técnica", self.technical),
            ("Táctica", self.tactical),
            ("Físico", self.physical),
            ("Mental", self.mental),
        ];
        let out_of_range: Vec<&str> = scores
            .iter()
            .filter(|(_, value)| !(1..=6).contains(value))
            .map(|(label, _)| *label)
            .collect();
        if !out_of_range.is_empty() {
            return Err(ScoutingError::Validation(format!(
                "Puntuaciones fuera del rango 1-6: {}",
                out_of_range.join(", ")
            )));
        }
        Ok(())
    }
}

/// Fully-populated record for tests across the crate.
#[cfg(test)]
pub(crate) fn sample_record(name: &str) -> PlayerRecord {
    use chrono::TimeZone;

    PlayerRecord {
        id: Uuid::new_v4(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap(),
        name: name.to_string(),
        age: 21,
        birth_year: 2004,
        nationality: "Chile".into(),
        height_cm: 178,
        foot: Foot::Left,
        primary_position: "Extremo Izquierdo".into(),
        secondary_position: "Mediapunta".into(),
        current_club: "Audax Italiano".into(),
        league: "Primera División".into(),
        contract_until: 2026,
        agent: "R. Soto".into(),
        agent_phone: "+56 9 1234 5678".into(),
        general_description: "Extremo rápido, buen uno contra uno.".into(),
        performance: 4,
        potential: 5,
        adaptability: 3,
        technical: 5,
        tactical: 3,
        physical: 4,
        mental: 4,
        technical_notes: "Gran golpeo con la zurda".into(),
        tactical_notes: String::new(),
        physical_notes: String::new(),
        mental_notes: "Compite bien bajo presión".into(),
        references: String::new(),
        injury_history: String::new(),
        injury_status: InjuryStatus::Clean,
        verdict: Verdict::FollowClosely,
        photo_path: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_fields() -> HashMap<String, String> {
        let pairs = [
            ("name", "Juan Pérez"),
            ("age", "22"),
            ("birth_year", "2003"),
            ("nationality", "Chile"),
            ("height_cm", "182"),
            ("foot", "Derecho"),
            ("primary_position", "Delantero Centro"),
            ("secondary_position", "No especificada"),
            ("current_club", "Audax Italiano"),
            ("league", "Primera División"),
            ("contract_until", "2027"),
            ("performance", "4"),
            ("potential", "5"),
            ("adaptability", "3"),
            ("technical", "4"),
            ("tactical", "4"),
            ("physical", "5"),
            ("mental", "4"),
            ("injury_status", "NO"),
            ("verdict", "FIRMAR – Mejora plantilla"),
        ];
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn form_fields_build_a_valid_draft() {
        let draft = NewPlayer::from_form(&base_fields()).unwrap();
        assert_eq!(draft.name, "Juan Pérez");
        assert_eq!(draft.foot, Foot::Right);
        assert_eq!(draft.secondary_position, "");
        assert_eq!(draft.verdict, Verdict::Sign);
        draft.validate().unwrap();
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let mut fields = base_fields();
        fields.insert("performance".into(), "9".into());
        let err = NewPlayer::from_form(&fields).unwrap_err();
        assert!(err.to_string().contains("Rendimiento actual"));
    }

    #[test]
    fn missing_scores_fall_back_to_slider_minimum() {
        let mut fields = base_fields();
        fields.remove("mental");
        let draft = NewPlayer::from_form(&fields).unwrap();
        assert_eq!(draft.mental, 1);
    }

    #[test]
    fn validate_lists_every_empty_required_field() {
        let mut fields = base_fields();
        fields.insert("current_club".into(), "  ".into());
        fields.insert("league".into(), String::new());
        let draft = NewPlayer::from_form(&fields).unwrap();
        let err = draft.validate().unwrap_err().to_string();
        assert!(err.contains("Club actual"));
        assert!(err.contains("Liga"));
    }

    #[test]
    fn labels_round_trip() {
        for verdict in Verdict::ALL {
            assert_eq!(Verdict::from_label(verdict.label()), Some(verdict));
        }
        for foot in Foot::ALL {
            assert_eq!(Foot::from_label(foot.label()), Some(foot));
        }
        for status in InjuryStatus::ALL {
            assert_eq!(InjuryStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(Foot::from_label("Zurdo"), None);
    }

    #[test]
    fn header_has_one_column_per_field() {
        assert_eq!(TABLE_HEADER.len(), 32);
    }
}
