mod common;

use scoutdesk::pkg::internal::assets::PhotoStore;
use scoutdesk::pkg::internal::report::{conclusion_text, render_report, report_filename, NO_INFO};

#[test]
fn missing_photo_degrades_to_a_placeholder_report() {
    let dir = tempfile::tempdir().unwrap();
    let photos = PhotoStore::new(dir.path().join("jugadores_img"));
    let mut record = common::record("Iván Morales");
    record.photo_path = "jugadores_img/borrada.png".into();

    let bytes = render_report(&record, &photos).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    let tail = &bytes[bytes.len().saturating_sub(16)..];
    assert!(tail.windows(5).any(|w| w == b"%%EOF"));
}

#[test]
fn empty_narrative_fields_show_the_fixed_fallback() {
    let record = common::record("Lucas Ocampo");
    assert_eq!(conclusion_text(&record.general_description), NO_INFO);
    assert_eq!(conclusion_text(&record.injury_history), NO_INFO);
    assert_eq!(conclusion_text(&record.references), NO_INFO);

    // and the empty-record report still renders
    let dir = tempfile::tempdir().unwrap();
    let photos = PhotoStore::new(dir.path().join("jugadores_img"));
    let bytes = render_report(&record, &photos).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn stored_photo_is_embedded_into_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let photos = PhotoStore::new(dir.path().join("jugadores_img"));

    let mut png = Vec::new();
    let pixels = image::RgbImage::from_pixel(12, 16, image::Rgb([10, 80, 160]));
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let mut record = common::record("Iván Morales");
    record.photo_path = photos.save(&record.name, "foto.png", &png).unwrap();

    let with_photo = render_report(&record, &photos).unwrap();
    assert!(with_photo.starts_with(b"%PDF"));

    // the embedded image makes the document measurably larger than the
    // placeholder variant of the same record
    let mut bare = record.clone();
    bare.photo_path = String::new();
    let without_photo = render_report(&bare, &photos).unwrap();
    assert!(with_photo.len() > without_photo.len());
}

#[test]
fn download_name_is_derived_from_the_player() {
    let record = common::record("Iván Morales");
    assert_eq!(report_filename(&record), "Informe_Iván_Morales.pdf");
}
