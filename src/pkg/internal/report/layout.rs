//! Fixed two-page layout of the player report.
//!
//! Page 1: header band, three info columns (personal data + photo, club and
//! contract, positions + composite score), metric cards and the technical
//! evaluation bars. Page 2: three word-wrapped conclusion columns and the
//! scout signature footer. All coordinates are millimetres on A4.

use chrono::Utc;
use lopdf::{dictionary, Stream};

use crate::errors::ScoutingError;
use crate::pkg::internal::adaptors::players::spec::PlayerRecord;
use crate::pkg::internal::assets::PhotoStore;
use crate::pkg::internal::report::canvas::{Align, Color, PageCanvas, PAGE_WIDTH};
use crate::pkg::internal::report::fonts::{self, FontStyle};
use crate::pkg::internal::report::text;
use crate::prelude::Result;

pub const NO_INFO: &str = "Sin información disponible";
pub(crate) const PHOTO_RESOURCE: &str = "Im1";

const MARGIN: f32 = 20.0;
const GAP: f32 = 10.0;
const COLUMN_WIDTH: f32 = (PAGE_WIDTH - 2.0 * MARGIN - 2.0 * GAP) / 3.0;

const HEADER_GREEN: Color = Color(200, 230, 200);
const RULE_GREEN: Color = Color(0, 100, 0);
const BAR_BLUE: Color = Color(70, 130, 180);
const BAR_BORDER: Color = Color(200, 200, 200);
const CARD_GRAY: Color = Color(245, 245, 245);
const BLACK: Color = Color(0, 0, 0);
const GRAY: Color = Color(102, 102, 102);
const WHITE: Color = Color(255, 255, 255);

const PHOTO_TOP: f32 = 50.0;
const PHOTO_MAX_W: f32 = 50.0;
const PHOTO_MAX_H: f32 = 60.0;
const PHOTO_MAX_PX: u32 = 480;

/// Decoded, downscaled photo ready to be registered as an image XObject.
pub(crate) struct PhotoImage {
    pub stream: Stream,
    pub width: u32,
    pub height: u32,
}

/// Loads and downscales the record's photo entirely in memory. Any failure
/// (no path, missing file, undecodable image) surfaces as an error the
/// renderer converts into the placeholder branch.
pub(crate) fn load_photo(record: &PlayerRecord, photos: &PhotoStore) -> Result<PhotoImage> {
    let relative = record
        .photo()
        .ok_or_else(|| ScoutingError::Asset("record has no photo".into()))?;
    let path = photos
        .resolve(relative)
        .ok_or_else(|| ScoutingError::Asset(format!("photo file missing: {relative}")))?;
    let bytes = std::fs::read(&path)?;
    let decoded = image::load_from_memory(&bytes)?;
    let thumb = decoded.thumbnail(PHOTO_MAX_PX, PHOTO_MAX_PX);
    let rgb = thumb.to_rgb8();
    let (width, height) = rgb.dimensions();
    let stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb.into_raw(),
    );
    Ok(PhotoImage {
        stream,
        width,
        height,
    })
}

fn fit_box(width: f32, height: f32, max_w: f32, max_h: f32) -> (f32, f32) {
    let scale = (max_w / width).min(max_h / height);
    (width * scale, height * scale)
}

pub(crate) fn place_photo(canvas: &mut PageCanvas, photo: &PhotoImage) {
    let (w, h) = fit_box(
        photo.width as f32,
        photo.height as f32,
        PHOTO_MAX_W,
        PHOTO_MAX_H,
    );
    let x = MARGIN + (COLUMN_WIDTH - w) / 2.0;
    canvas.image(PHOTO_RESOURCE, x, PHOTO_TOP, w, h);
}

pub(crate) fn photo_placeholder(canvas: &mut PageCanvas) {
    let x = MARGIN + (COLUMN_WIDTH - 40.0) / 2.0;
    canvas.stroke_rect(x, PHOTO_TOP, 40.0, 50.0, BAR_BORDER, 0.3);
    canvas.text_aligned(
        x,
        40.0,
        PHOTO_TOP + 27.0,
        FontStyle::Regular,
        10.0,
        GRAY,
        Align::Center,
        "👤",
    );
}

pub(crate) fn header_band(canvas: &mut PageCanvas, record: &PlayerRecord) {
    canvas.fill_rect(0.0, 0.0, PAGE_WIDTH, 40.0, HEADER_GREEN);
    let title = format!("{} - {}", record.name, record.verdict.label());
    canvas.text_aligned(
        0.0,
        PAGE_WIDTH,
        20.0,
        FontStyle::Bold,
        16.0,
        BLACK,
        Align::Center,
        &title,
    );
    canvas.line(MARGIN, 30.0, PAGE_WIDTH - MARGIN, 30.0, RULE_GREEN, 0.5);
}

/// Short-field fallback used in the info columns; the long conclusions use
/// [`NO_INFO`].
fn value_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

pub(crate) fn personal_info(canvas: &mut PageCanvas, record: &PlayerRecord) {
    let items = [
        format!("📅 Edad: {} años", record.age),
        format!("📅 Año nacimiento: {}", record.birth_year),
        format!("🌍 Nacionalidad: {}", record.nationality),
        format!("⚽ Pie hábil: {}", record.foot.label()),
        format!("📏 Talla: {} cm", record.height_cm),
    ];
    let mut y = 118.0;
    for item in items {
        canvas.text(MARGIN, y, FontStyle::Regular, 10.0, BLACK, &item);
        y += 7.0;
    }
}

pub(crate) fn club_info(canvas: &mut PageCanvas, record: &PlayerRecord) {
    let x = MARGIN + COLUMN_WIDTH + GAP;
    canvas.text(x, 55.0, FontStyle::Bold, 12.0, BLACK, "Club y Contrato");
    let items = [
        format!("👕 Club actual: {}", record.current_club),
        format!("🏆 Liga: {}", record.league),
        format!("📅 Fin de contrato: {}", record.contract_until),
        format!("👤 Agente: {}", value_or(&record.agent, "No especificado")),
        format!(
            "📞 Teléfono: {}",
            value_or(&record.agent_phone, "No especificado")
        ),
    ];
    let mut y = 63.0;
    for item in items {
        y = canvas.paragraph(x, y, COLUMN_WIDTH, 5.0, FontStyle::Regular, 10.0, BLACK, &item)
            + 2.0;
    }
}

pub(crate) fn positions_block(canvas: &mut PageCanvas, record: &PlayerRecord) {
    let x = MARGIN + (COLUMN_WIDTH + GAP) * 2.0;
    canvas.text(x, 55.0, FontStyle::Bold, 12.0, BLACK, "Posiciones");
    let mut y = 63.0;
    y = canvas.paragraph(
        x,
        y,
        COLUMN_WIDTH,
        5.0,
        FontStyle::Regular,
        10.0,
        BLACK,
        &format!("⭐ Principal: {}", record.primary_position),
    ) + 2.0;
    canvas.paragraph(
        x,
        y,
        COLUMN_WIDTH,
        5.0,
        FontStyle::Regular,
        10.0,
        BLACK,
        &format!(
            "🔷 Secundaria: {}",
            value_or(&record.secondary_position, "No especificada")
        ),
    );

    let composite = record.composite();
    canvas.text(x, 100.0, FontStyle::Bold, 12.0, BLACK, "Evaluación AUDAX");
    canvas.text(
        x,
        108.0,
        FontStyle::Regular,
        10.0,
        BLACK,
        &format!("Puntuación: {composite:.1}/10"),
    );
    progress_bar(
        canvas,
        x,
        112.0,
        COLUMN_WIDTH,
        8.0,
        (composite * 10.0) as f32,
        BAR_BLUE,
        &format!("{composite:.1}"),
    );
}

pub(crate) fn metrics_block(canvas: &mut PageCanvas, record: &PlayerRecord) {
    canvas.text_aligned(
        0.0,
        PAGE_WIDTH,
        158.0,
        FontStyle::Bold,
        14.0,
        BLACK,
        Align::Center,
        "Métricas Principales",
    );
    let top = 162.0;
    let metrics = [
        ("RENDIMIENTO", record.performance),
        ("POTENCIAL", record.potential),
        ("ADAPTABILIDAD", record.adaptability),
    ];
    for (i, (title, value)) in metrics.into_iter().enumerate() {
        let x = MARGIN + (COLUMN_WIDTH + GAP) * i as f32;
        canvas.fill_rect(x, top, COLUMN_WIDTH, 40.0, CARD_GRAY);
        canvas.text_aligned(
            x,
            COLUMN_WIDTH,
            top + 9.0,
            FontStyle::Bold,
            10.0,
            BLACK,
            Align::Center,
            title,
        );
        canvas.text_aligned(
            x,
            COLUMN_WIDTH,
            top + 20.0,
            FontStyle::Bold,
            16.0,
            BLACK,
            Align::Center,
            &format!("{value}/6"),
        );
        let percentage = value as f32 / 6.0 * 100.0;
        progress_bar(
            canvas,
            x + 10.0,
            top + 25.0,
            COLUMN_WIDTH - 20.0,
            8.0,
            percentage,
            BAR_BLUE,
            &format!("{percentage:.0}%"),
        );
    }
}

pub(crate) fn technical_block(canvas: &mut PageCanvas, record: &PlayerRecord) {
    canvas.text_aligned(
        0.0,
        PAGE_WIDTH,
        212.0,
        FontStyle::Bold,
        14.0,
        BLACK,
        Align::Center,
        "Evaluaciones Técnicas",
    );
    let rows = [
        ("Técnica", record.technical, &record.technical_notes),
        ("Táctica", record.tactical, &record.tactical_notes),
        ("Física", record.physical, &record.physical_notes),
        ("Mental", record.mental, &record.mental_notes),
    ];
    for (i, (label, value, notes)) in rows.into_iter().enumerate() {
        let y = 220.0 + i as f32 * 19.0;
        canvas.text(MARGIN, y, FontStyle::Regular, 10.0, BLACK, label);
        canvas.text_aligned(
            MARGIN + 40.0,
            15.0,
            y,
            FontStyle::Regular,
            10.0,
            BLACK,
            Align::Right,
            &format!("{value}/6"),
        );
        let percentage = value as f32 / 6.0 * 100.0;
        progress_bar(
            canvas,
            MARGIN + 65.0,
            y - 4.5,
            100.0,
            8.0,
            percentage,
            BAR_BLUE,
            &format!("{percentage:.0}%"),
        );
        let notes = notes.trim();
        if !notes.is_empty() && !notes.eq_ignore_ascii_case("nan") {
            // two lines at most; longer notes belong on the dashboard
            let prepared = text::sanitize(notes);
            let wrapped = fonts::wrap(&prepared, FontStyle::Oblique, 8.0, 165.0);
            for (j, line) in wrapped.iter().take(2).enumerate() {
                canvas.text(
                    MARGIN + 5.0,
                    y + 5.5 + j as f32 * 4.0,
                    FontStyle::Oblique,
                    8.0,
                    GRAY,
                    line,
                );
            }
        }
    }
}

/// Bordered bar with a proportional fill and a centered label, the same
/// construction for the composite, the metric cards and the axis rows.
#[allow(clippy::too_many_arguments)]
fn progress_bar(
    canvas: &mut PageCanvas,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    percentage: f32,
    color: Color,
    label: &str,
) {
    let pct = percentage.clamp(0.0, 100.0);
    canvas.stroke_rect(x, y, w, h, BAR_BORDER, 0.3);
    let fill = w * pct / 100.0;
    if fill > 0.0 {
        canvas.fill_rect(x, y, fill, h, color);
    }
    canvas.text_aligned(
        x,
        w,
        y + h / 2.0 + 1.2,
        FontStyle::Bold,
        8.0,
        WHITE,
        Align::Center,
        label,
    );
}

/// Missing narrative fields render as the fixed no-information string.
pub fn conclusion_text(value: &str) -> String {
    value_or(value, NO_INFO)
}

pub(crate) fn conclusions(canvas: &mut PageCanvas, record: &PlayerRecord) {
    canvas.text_aligned(
        0.0,
        PAGE_WIDTH,
        25.0,
        FontStyle::Bold,
        14.0,
        BLACK,
        Align::Center,
        "Conclusiones",
    );
    let sections = [
        (
            "Descripción General",
            conclusion_text(&record.general_description),
        ),
        ("Historial Médico", conclusion_text(&record.injury_history)),
        ("Referencias Adicionales", conclusion_text(&record.references)),
    ];
    for (i, (title, body)) in sections.into_iter().enumerate() {
        let x = MARGIN + (COLUMN_WIDTH + GAP) * i as f32;
        canvas.text(x, 40.0, FontStyle::Bold, 10.0, BLACK, title);
        canvas.line(x, 42.0, x + COLUMN_WIDTH, 42.0, BLACK, 0.2);
        let mut y = 48.0;
        if i == 1 {
            canvas.text(
                x,
                y,
                FontStyle::Oblique,
                8.0,
                GRAY,
                &format!("Estado: {}", record.injury_status.label()),
            );
            y += 6.0;
        }
        canvas.paragraph(x, y, COLUMN_WIDTH, 5.0, FontStyle::Regular, 9.0, BLACK, &body);
    }
}

pub(crate) fn signature_footer(canvas: &mut PageCanvas) {
    canvas.text(
        MARGIN,
        260.0,
        FontStyle::Oblique,
        8.0,
        BLACK,
        "Firma del ojeador: __________________________",
    );
    canvas.text(
        MARGIN,
        266.0,
        FontStyle::Oblique,
        8.0,
        BLACK,
        &format!("Fecha: {}", Utc::now().format("%d/%m/%Y")),
    );
}
