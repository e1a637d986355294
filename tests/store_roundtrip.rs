mod common;

use scoutdesk::pkg::internal::adaptors::players::selectors::{PlayerFilter, PlayerSelector};
use scoutdesk::pkg::internal::adaptors::players::spec::TABLE_HEADER;
use scoutdesk::pkg::internal::store::RecordStore;

#[test]
fn table_grows_append_only_and_reads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path().join("scouting_database.csv"));

    let first = common::record("Lucas Ocampo");
    let mut second = common::record("Iván Morales");
    second.general_description = "Delantero de área, buen juego aéreo.".into();
    second.photo_path = "jugadores_img/Iván_Morales_1748850000.png".into();

    store.append(&first).unwrap();
    store.append(&second).unwrap();

    let rows = store.load_all().unwrap();
    assert_eq!(rows, vec![first, second]);

    // the file itself carries the fixed header exactly once
    let content = std::fs::read_to_string(store.path()).unwrap();
    let headers: Vec<&str> = content
        .lines()
        .filter(|line| line.starts_with("id,created_at,"))
        .collect();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0], TABLE_HEADER.join(","));
}

#[test]
fn selector_scans_resolve_ids_and_first_name_match() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path().join("scouting_database.csv"));

    let a = common::record("Diego Ruiz");
    let mut duplicate = common::record("Diego Ruiz");
    duplicate.current_club = "Otro Club".into();
    store.append(&a).unwrap();
    store.append(&duplicate).unwrap();

    let selector = PlayerSelector::new(&store);
    assert_eq!(selector.by_id(duplicate.id).unwrap().unwrap().current_club, "Otro Club");
    // duplicate names resolve to the first stored row
    assert_eq!(selector.by_name("Diego Ruiz").unwrap().unwrap().id, a.id);
    assert!(selector.by_name("Nadie").unwrap().is_none());
}

#[test]
fn filters_reduce_the_view_without_touching_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path().join("scouting_database.csv"));

    let mut chilean = common::record("Matías Vidal");
    chilean.nationality = "Chile".into();
    store.append(&common::record("Lucas Ocampo")).unwrap();
    store.append(&chilean).unwrap();

    let selector = PlayerSelector::new(&store);
    let filter = PlayerFilter {
        nationality: Some("Chile".into()),
        ..Default::default()
    };
    let hits = selector.filtered(&filter).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Matías Vidal");

    let none = PlayerFilter {
        nationality: Some("Islandia".into()),
        ..Default::default()
    };
    assert!(selector.filtered(&none).unwrap().is_empty());
    assert_eq!(selector.all().unwrap().len(), 2);
}
