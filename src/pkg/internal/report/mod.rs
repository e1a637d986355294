//! Printable player report.
//!
//! Builds a fixed-layout two-page A4 PDF for one record, entirely in memory:
//! no partial file can ever be observed by a caller. The photo is best-effort;
//! when it cannot be loaded the report carries a placeholder instead.

pub mod canvas;
pub mod fonts;
mod layout;
pub mod text;

use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

pub use layout::{conclusion_text, NO_INFO};

use crate::pkg::internal::adaptors::players::spec::PlayerRecord;
use crate::pkg::internal::assets::{self, PhotoStore};
use crate::pkg::internal::report::canvas::PageCanvas;
use crate::pkg::internal::report::fonts::FontStyle;
use crate::prelude::Result;

/// Download name offered for a record's report.
pub fn report_filename(record: &PlayerRecord) -> String {
    let mut stem = assets::sanitize_player_name(&record.name);
    if stem.is_empty() {
        stem = "jugador".into();
    }
    format!("Informe_{stem}.pdf")
}

fn font_dict(style: FontStyle) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => style.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(595.28),
        Object::Real(841.89),
    ]
}

/// Renders the two-page report and returns the finished PDF bytes.
pub fn render_report(record: &PlayerRecord, photos: &PhotoStore) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(font_dict(FontStyle::Regular));
    let font_bold = doc.add_object(font_dict(FontStyle::Bold));
    let font_oblique = doc.add_object(font_dict(FontStyle::Oblique));
    let font_resources = dictionary! {
        FontStyle::Regular.resource_name() => font_regular,
        FontStyle::Bold.resource_name() => font_bold,
        FontStyle::Oblique.resource_name() => font_oblique,
    };

    // page 1: header, info columns, metric cards, technical bars
    let mut page1 = PageCanvas::new();
    layout::header_band(&mut page1, record);
    let photo = if record.photo().is_some() {
        match layout::load_photo(record, photos) {
            Ok(photo) => {
                layout::place_photo(&mut page1, &photo);
                Some(photo)
            }
            Err(e) => {
                tracing::warn!("photo unavailable, rendering placeholder: {e}");
                layout::photo_placeholder(&mut page1);
                None
            }
        }
    } else {
        layout::photo_placeholder(&mut page1);
        None
    };
    layout::personal_info(&mut page1, record);
    layout::club_info(&mut page1, record);
    layout::positions_block(&mut page1, record);
    layout::metrics_block(&mut page1, record);
    layout::technical_block(&mut page1, record);

    // page 2: conclusions and signature
    let mut page2 = PageCanvas::new();
    layout::conclusions(&mut page2, record);
    layout::signature_footer(&mut page2);

    let mut resources1 = dictionary! { "Font" => font_resources.clone() };
    if let Some(photo) = photo {
        let image_id = doc.add_object(photo.stream);
        resources1.set(
            "XObject",
            dictionary! { layout::PHOTO_RESOURCE => image_id },
        );
    }
    let resources1_id = doc.add_object(resources1);
    let resources2_id = doc.add_object(dictionary! { "Font" => font_resources });

    let page1_id = add_page(&mut doc, pages_id, resources1_id, page1.into_content())?;
    let page2_id = add_page(&mut doc, pages_id, resources2_id, page2.into_content())?;

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page1_id), Object::Reference(page2_id)],
        "Count" => 2,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

fn add_page(
    doc: &mut Document,
    pages_id: lopdf::ObjectId,
    resources_id: lopdf::ObjectId,
    content: Content,
) -> Result<lopdf::ObjectId> {
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => media_box(),
    }))
}
