use askama::Template;
use uuid::Uuid;

use crate::pkg::internal::adaptors::players::selectors::{
    FilterOptions, PlayerFilter, PlayerSelector,
};
use crate::pkg::internal::adaptors::players::spec::{
    Foot, InjuryStatus, PlayerRecord, Verdict,
};
use crate::pkg::internal::assets::PhotoStore;
use crate::pkg::internal::report;
use crate::pkg::internal::scoring::{self, Axis};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage<'a> {
    pub service: &'a str,
}

#[derive(Template)]
#[template(path = "new_report.html")]
pub struct NewReportPage<'a> {
    pub positions: &'a [String],
    pub feet: Vec<&'static str>,
    pub injury_states: Vec<&'static str>,
    pub verdicts: Vec<&'static str>,
}

impl<'a> NewReportPage<'a> {
    pub fn new(positions: &'a [String]) -> Self {
        NewReportPage {
            positions,
            feet: Foot::ALL.iter().map(|f| f.label()).collect(),
            injury_states: InjuryStatus::ALL.iter().map(|s| s.label()).collect(),
            verdicts: Verdict::ALL.iter().map(|v| v.label()).collect(),
        }
    }
}

pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

fn select_options(values: Vec<String>, current: Option<&str>) -> Vec<SelectOption> {
    values
        .into_iter()
        .map(|value| SelectOption {
            selected: current == Some(value.as_str()),
            value,
        })
        .collect()
}

/// Current filter inputs plus the dropdown options extracted from the table.
pub struct FilterPanel {
    pub leagues: Vec<SelectOption>,
    pub clubs: Vec<SelectOption>,
    pub positions: Vec<SelectOption>,
    pub nationalities: Vec<SelectOption>,
    pub name: String,
}

impl FilterPanel {
    fn build(options: FilterOptions, filter: &PlayerFilter) -> FilterPanel {
        FilterPanel {
            leagues: select_options(options.leagues, filter.league.as_deref()),
            clubs: select_options(options.clubs, filter.club.as_deref()),
            positions: select_options(options.positions, filter.position.as_deref()),
            nationalities: select_options(options.nationalities, filter.nationality.as_deref()),
            name: filter.name.clone().unwrap_or_default(),
        }
    }
}

pub struct PlayerOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

pub struct MetricView {
    pub title: &'static str,
    pub value: u8,
    pub description: &'static str,
}

pub struct EvalView {
    pub title: &'static str,
    pub value: u8,
    pub percent: u8,
    pub notes: String,
    pub has_notes: bool,
}

impl EvalView {
    fn new(title: &'static str, value: u8, notes: &str) -> EvalView {
        let trimmed = notes.trim();
        let has_notes = !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("nan");
        EvalView {
            title,
            value,
            percent: (value as f32 / 6.0 * 100.0).round() as u8,
            notes: trimmed.to_string(),
            has_notes,
        }
    }
}

/// Everything the dashboard shows for the selected player, precomputed so
/// the template stays declarative.
pub struct PlayerView {
    pub record: PlayerRecord,
    pub verdict_label: &'static str,
    pub verdict_class: &'static str,
    pub foot_label: &'static str,
    pub injury_status_label: &'static str,
    pub secondary_position: String,
    pub agent: String,
    pub agent_phone: String,
    pub photo_url: String,
    pub has_photo: bool,
    pub composite: String,
    pub composite_percent: u8,
    pub formula: String,
    pub metrics: Vec<MetricView>,
    pub evaluations: Vec<EvalView>,
    pub description: String,
    pub injuries: String,
    pub references: String,
    pub pdf_url: String,
}

fn short_field(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

impl PlayerView {
    pub fn build(record: PlayerRecord, photos: &PhotoStore) -> PlayerView {
        let composite = record.composite();
        let metrics = vec![
            MetricView {
                title: "RENDIMIENTO",
                value: record.performance,
                description: scoring::level_description(Axis::Performance, record.performance as f64),
            },
            MetricView {
                title: "POTENCIAL",
                value: record.potential,
                description: scoring::level_description(Axis::Potential, record.potential as f64),
            },
            MetricView {
                title: "ADAPTABILIDAD",
                value: record.adaptability,
                description: scoring::level_description(
                    Axis::Adaptability,
                    record.adaptability as f64,
                ),
            },
        ];
        let evaluations = vec![
            EvalView::new("Técnica", record.technical, &record.technical_notes),
            EvalView::new("Táctica", record.tactical, &record.tactical_notes),
            EvalView::new("Física", record.physical, &record.physical_notes),
            EvalView::new("Mental", record.mental, &record.mental_notes),
        ];

        let photo_url = record
            .photo()
            .and_then(|relative| photos.resolve(relative))
            .and_then(|path| {
                path.file_name()
                    .and_then(|f| f.to_str())
                    .map(|f| format!("/photos/{f}"))
            })
            .unwrap_or_default();

        PlayerView {
            verdict_label: record.verdict.label(),
            verdict_class: match record.verdict {
                Verdict::Sign => "success",
                Verdict::FollowClosely => "info",
                Verdict::Follow => "warning",
                Verdict::NotInterested => "danger",
            },
            foot_label: record.foot.label(),
            injury_status_label: record.injury_status.label(),
            secondary_position: short_field(&record.secondary_position, "No especificada"),
            agent: short_field(&record.agent, "No especificado"),
            agent_phone: short_field(&record.agent_phone, "No especificado"),
            has_photo: !photo_url.is_empty(),
            photo_url,
            composite: format!("{composite:.1}"),
            composite_percent: (composite * 10.0).round() as u8,
            formula: format!(
                "(({} + {} + {}) / 18) × 10 = {:.1}",
                record.performance, record.potential, record.adaptability, composite
            ),
            metrics,
            evaluations,
            description: report::conclusion_text(&record.general_description),
            injuries: report::conclusion_text(&record.injury_history),
            references: report::conclusion_text(&record.references),
            pdf_url: format!("/players/{}/report.pdf", record.id),
            record,
        }
    }
}

#[derive(Template)]
#[template(path = "database.html")]
pub struct DatabasePage {
    pub filters: FilterPanel,
    pub players: Vec<PlayerOption>,
    pub total: usize,
    pub selected: Option<PlayerView>,
}

impl DatabasePage {
    /// Applies the filter to populate the selector; the selected player is
    /// still looked up in the full table, exactly like the dashboard it
    /// replaces.
    pub fn build(
        rows: Vec<PlayerRecord>,
        filter: &PlayerFilter,
        selected_id: Option<Uuid>,
        photos: &PhotoStore,
    ) -> DatabasePage {
        let options = PlayerSelector::facets(&rows);
        let visible: Vec<&PlayerRecord> = rows.iter().filter(|r| filter.matches(r)).collect();
        let players = visible
            .iter()
            .map(|r| PlayerOption {
                id: r.id.to_string(),
                name: r.name.clone(),
                selected: selected_id == Some(r.id),
            })
            .collect();
        let selected = selected_id
            .and_then(|id| rows.iter().find(|r| r.id == id))
            .map(|r| PlayerView::build(r.clone(), photos));
        DatabasePage {
            filters: FilterPanel::build(options, filter),
            total: visible.len(),
            players,
            selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::players::spec::sample_record;
    use crate::pkg::internal::report::NO_INFO;

    #[test]
    fn view_precomputes_composite_and_fallbacks() {
        let dir = tempfile::tempdir().unwrap();
        let photos = PhotoStore::new(dir.path());
        let mut record = sample_record("Juan Pérez");
        record.references = String::new();
        record.agent = String::new();
        let view = PlayerView::build(record, &photos);
        // (4 + 5 + 3) / 18 * 10 = 6.666...
        assert_eq!(view.composite, "6.7");
        assert_eq!(view.composite_percent, 67);
        assert_eq!(view.references, NO_INFO);
        assert_eq!(view.agent, "No especificado");
        assert_eq!(view.verdict_class, "info");
        assert!(!view.has_photo);
    }

    #[test]
    fn selector_marks_only_the_selected_player() {
        let dir = tempfile::tempdir().unwrap();
        let photos = PhotoStore::new(dir.path());
        let rows = vec![sample_record("A"), sample_record("B")];
        let chosen = rows[1].id;
        let page = DatabasePage::build(rows, &PlayerFilter::default(), Some(chosen), &photos);
        assert_eq!(page.players.len(), 2);
        assert!(!page.players[0].selected);
        assert!(page.players[1].selected);
        assert_eq!(page.selected.as_ref().unwrap().record.name, "B");
    }

    #[test]
    fn filtered_out_selection_still_renders_from_the_full_table() {
        let dir = tempfile::tempdir().unwrap();
        let photos = PhotoStore::new(dir.path());
        let rows = vec![sample_record("A")];
        let chosen = rows[0].id;
        let filter = PlayerFilter {
            club: Some("Otro Club".into()),
            ..Default::default()
        };
        let page = DatabasePage::build(rows, &filter, Some(chosen), &photos);
        assert_eq!(page.total, 0);
        assert!(page.players.is_empty());
        assert!(page.selected.is_some());
    }
}
