use chrono::Utc;
use uuid::Uuid;

use crate::pkg::internal::adaptors::players::spec::{NewPlayer, PlayerRecord};
use crate::pkg::internal::store::RecordStore;
use crate::prelude::Result;

pub struct PlayerMutator<'a> {
    store: &'a RecordStore,
}

impl<'a> PlayerMutator<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        PlayerMutator { store }
    }

    /// Validates the draft, stamps identity and creation time, and appends
    /// the row. Nothing is persisted when validation fails.
    pub fn create(&self, draft: NewPlayer) -> Result<PlayerRecord> {
        draft.validate()?;
        let record = PlayerRecord {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: draft.name,
            age: draft.age,
            birth_year: draft.birth_year,
            nationality: draft.nationality,
            height_cm: draft.height_cm,
            foot: draft.foot,
            primary_position: draft.primary_position,
            secondary_position: draft.secondary_position,
            current_club: draft.current_club,
            league: draft.league,
            contract_until: draft.contract_until,
            agent: draft.agent,
            agent_phone: draft.agent_phone,
            general_description: draft.general_description,
            performance: draft.performance,
            potential: draft.potential,
            adaptability: draft.adaptability,
            technical: draft.technical,
            tactical: draft.tactical,
            physical: draft.physical,
            mental: draft.mental,
            technical_notes: draft.technical_notes,
            tactical_notes: draft.tactical_notes,
            physical_notes: draft.physical_notes,
            mental_notes: draft.mental_notes,
            references: draft.references,
            injury_history: draft.injury_history,
            injury_status: draft.injury_status,
            verdict: draft.verdict,
            photo_path: draft.photo_path.unwrap_or_default(),
        };
        self.store.append(&record)?;
        Ok(record)
    }
}
