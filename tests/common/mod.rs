use chrono::{TimeZone, Utc};
use uuid::Uuid;

use scoutdesk::pkg::internal::adaptors::players::spec::{
    Foot, InjuryStatus, PlayerRecord, Verdict,
};

pub fn record(name: &str) -> PlayerRecord {
    PlayerRecord {
        id: Uuid::new_v4(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap(),
        name: name.to_string(),
        age: 23,
        birth_year: 2002,
        nationality: "Argentina".into(),
        height_cm: 183,
        foot: Foot::Right,
        primary_position: "Mediocentro Ofensivo".into(),
        secondary_position: String::new(),
        current_club: "Banfield".into(),
        league: "Liga Profesional".into(),
        contract_until: 2027,
        agent: String::new(),
        agent_phone: String::new(),
        general_description: String::new(),
        performance: 5,
        potential: 4,
        adaptability: 5,
        technical: 5,
        tactical: 4,
        physical: 3,
        mental: 5,
        technical_notes: String::new(),
        tactical_notes: String::new(),
        physical_notes: String::new(),
        mental_notes: String::new(),
        references: String::new(),
        injury_history: String::new(),
        injury_status: InjuryStatus::Clean,
        verdict: Verdict::Sign,
        photo_path: String::new(),
    }
}
