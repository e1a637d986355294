use uuid::Uuid;

use crate::pkg::internal::adaptors::players::spec::PlayerRecord;
use crate::pkg::internal::store::RecordStore;
use crate::prelude::Result;

/// Search predicates combined by logical AND. `None` means "no restriction".
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub league: Option<String>,
    pub club: Option<String>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub name: Option<String>,
}

impl PlayerFilter {
    pub fn matches(&self, record: &PlayerRecord) -> bool {
        if let Some(league) = &self.league {
            if &record.league != league {
                return false;
            }
        }
        if let Some(club) = &self.club {
            if &record.current_club != club {
                return false;
            }
        }
        if let Some(position) = &self.position {
            if &record.primary_position != position && &record.secondary_position != position {
                return false;
            }
        }
        if let Some(nationality) = &self.nationality {
            if &record.nationality != nationality {
                return false;
            }
        }
        if let Some(needle) = &self.name {
            if !record
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Distinct values backing the filter dropdowns.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub leagues: Vec<String>,
    pub clubs: Vec<String>,
    pub positions: Vec<String>,
    pub nationalities: Vec<String>,
}

pub struct PlayerSelector<'a> {
    store: &'a RecordStore,
}

impl<'a> PlayerSelector<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        PlayerSelector { store }
    }

    pub fn all(&self) -> Result<Vec<PlayerRecord>> {
        self.store.load_all()
    }

    pub fn filtered(&self, filter: &PlayerFilter) -> Result<Vec<PlayerRecord>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect())
    }

    pub fn by_id(&self, id: Uuid) -> Result<Option<PlayerRecord>> {
        Ok(self.all()?.into_iter().find(|record| record.id == id))
    }

    /// First row with that exact name; duplicate names are not disambiguated.
    pub fn by_name(&self, name: &str) -> Result<Option<PlayerRecord>> {
        Ok(self.all()?.into_iter().find(|record| record.name == name))
    }

    /// Distinct, sorted dropdown values over a loaded table. Positions pool
    /// primary and secondary columns.
    pub fn facets(rows: &[PlayerRecord]) -> FilterOptions {
        fn distinct<'r>(values: impl Iterator<Item = &'r str>) -> Vec<String> {
            let mut out: Vec<String> = values
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
                .collect();
            out.sort();
            out.dedup();
            out
        }

        FilterOptions {
            leagues: distinct(rows.iter().map(|r| r.league.as_str())),
            clubs: distinct(rows.iter().map(|r| r.current_club.as_str())),
            positions: distinct(
                rows.iter()
                    .flat_map(|r| [r.primary_position.as_str(), r.secondary_position.as_str()]),
            ),
            nationalities: distinct(rows.iter().map(|r| r.nationality.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::players::spec::sample_record;

    fn roster() -> Vec<PlayerRecord> {
        let mut a = sample_record("Juan Pérez");
        a.league = "Primera División".into();
        a.current_club = "Audax Italiano".into();
        a.primary_position = "Extremo Izquierdo".into();
        a.secondary_position = "Mediapunta".into();
        a.nationality = "Chile".into();

        let mut b = sample_record("João Silva");
        b.league = "Brasileirão".into();
        b.current_club = "Bahía".into();
        b.primary_position = "Delantero Centro".into();
        b.secondary_position = String::new();
        b.nationality = "Brasil".into();

        let mut c = sample_record("Pedro Juárez");
        c.league = "Primera División".into();
        c.current_club = "Cobreloa".into();
        c.primary_position = "Portero".into();
        c.secondary_position = String::new();
        c.nationality = "Chile".into();

        vec![a, b, c]
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = PlayerFilter::default();
        assert!(roster().iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn predicates_combine_with_and() {
        let filter = PlayerFilter {
            league: Some("Primera División".into()),
            nationality: Some("Chile".into()),
            ..Default::default()
        };
        let hits = roster().iter().filter(|r| filter.matches(r)).count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn position_matches_primary_or_secondary() {
        let filter = PlayerFilter {
            position: Some("Mediapunta".into()),
            ..Default::default()
        };
        let rows = roster();
        let hits: Vec<&str> = rows
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(hits, ["Juan Pérez"]);
    }

    #[test]
    fn name_search_is_case_insensitive_substring() {
        let filter = PlayerFilter {
            name: Some("juÁ".into()),
            ..Default::default()
        };
        let rows = roster();
        let hits: Vec<&str> = rows
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(hits, ["Pedro Juárez"]);
    }

    #[test]
    fn unmatched_filter_yields_empty_not_error() {
        let filter = PlayerFilter {
            club: Some("Colo-Colo".into()),
            ..Default::default()
        };
        assert!(!roster().iter().any(|r| filter.matches(r)));
    }

    #[test]
    fn facets_are_distinct_and_sorted() {
        let rows = roster();
        let options = PlayerSelector::facets(&rows);
        assert_eq!(options.leagues, ["Brasileirão", "Primera División"]);
        assert_eq!(options.nationalities, ["Brasil", "Chile"]);
        assert!(options.positions.contains(&"Mediapunta".to_string()));
        // empty secondary positions never show up
        assert!(!options.positions.iter().any(|p| p.is_empty()));
    }
}
