//! Drawing surface for one A4 page.
//!
//! Coordinates are millimetres measured from the top-left corner, the way
//! the layout is specified; conversion to PDF user space (points, bottom-left
//! origin) happens at the operation boundary.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

use crate::pkg::internal::report::fonts::{self, FontStyle};
use crate::pkg::internal::report::text;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    fn components(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

fn name(value: &str) -> Object {
    Object::Name(value.as_bytes().to_vec())
}

pub struct PageCanvas {
    ops: Vec<Operation>,
}

impl Default for PageCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCanvas {
    pub fn new() -> Self {
        PageCanvas { ops: Vec::new() }
    }

    fn pt_x(x: f32) -> f32 {
        x * PT_PER_MM
    }

    /// Flips the vertical axis into PDF user space.
    fn pt_y(y: f32) -> f32 {
        (PAGE_HEIGHT - y) * PT_PER_MM
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let (r, g, b) = color.components();
        self.ops
            .push(Operation::new("rg", vec![real(r), real(g), real(b)]));
        self.ops.push(Operation::new(
            "re",
            vec![
                real(Self::pt_x(x)),
                real(Self::pt_y(y + h)),
                real(w * PT_PER_MM),
                real(h * PT_PER_MM),
            ],
        ));
        self.ops.push(Operation::new("f", vec![]));
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, width: f32) {
        let (r, g, b) = color.components();
        self.ops
            .push(Operation::new("RG", vec![real(r), real(g), real(b)]));
        self.ops
            .push(Operation::new("w", vec![real(width * PT_PER_MM)]));
        self.ops.push(Operation::new(
            "re",
            vec![
                real(Self::pt_x(x)),
                real(Self::pt_y(y + h)),
                real(w * PT_PER_MM),
                real(h * PT_PER_MM),
            ],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        let (r, g, b) = color.components();
        self.ops
            .push(Operation::new("RG", vec![real(r), real(g), real(b)]));
        self.ops
            .push(Operation::new("w", vec![real(width * PT_PER_MM)]));
        self.ops.push(Operation::new(
            "m",
            vec![real(Self::pt_x(x1)), real(Self::pt_y(y1))],
        ));
        self.ops.push(Operation::new(
            "l",
            vec![real(Self::pt_x(x2)), real(Self::pt_y(y2))],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    /// Draws a single line of text with its baseline at `baseline` (mm from
    /// the page top). Symbolic glyphs are tag-substituted before drawing.
    pub fn text(
        &mut self,
        x: f32,
        baseline: f32,
        style: FontStyle,
        size: f32,
        color: Color,
        raw: &str,
    ) {
        let prepared = text::sanitize(raw);
        self.text_prepared(x, baseline, style, size, color, &prepared);
    }

    /// Places one line inside the horizontal band `[x, x + width]`.
    #[allow(clippy::too_many_arguments)]
    pub fn text_aligned(
        &mut self,
        x: f32,
        width: f32,
        baseline: f32,
        style: FontStyle,
        size: f32,
        color: Color,
        align: Align,
        raw: &str,
    ) {
        let prepared = text::sanitize(raw);
        let text_width = fonts::text_width_mm(&prepared, style, size);
        let tx = match align {
            Align::Left => x,
            Align::Center => x + (width - text_width) / 2.0,
            Align::Right => x + width - text_width,
        };
        self.text_prepared(tx, baseline, style, size, color, &prepared);
    }

    /// Writes wrapped text starting at the given baseline; returns the
    /// baseline that would follow the last line.
    #[allow(clippy::too_many_arguments)]
    pub fn paragraph(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        line_height: f32,
        style: FontStyle,
        size: f32,
        color: Color,
        raw: &str,
    ) -> f32 {
        let prepared = text::sanitize(raw);
        let mut baseline = y;
        for line in fonts::wrap(&prepared, style, size, width) {
            self.text_prepared(x, baseline, style, size, color, &line);
            baseline += line_height;
        }
        baseline
    }

    fn text_prepared(
        &mut self,
        x: f32,
        baseline: f32,
        style: FontStyle,
        size: f32,
        color: Color,
        prepared: &str,
    ) {
        let (r, g, b) = color.components();
        let bytes = text::encode_winansi(prepared);
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("rg", vec![real(r), real(g), real(b)]));
        self.ops.push(Operation::new(
            "Tf",
            vec![name(style.resource_name()), real(size)],
        ));
        self.ops.push(Operation::new(
            "Td",
            vec![real(Self::pt_x(x)), real(Self::pt_y(baseline))],
        ));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(bytes, StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Places a registered image XObject into the given box.
    pub fn image(&mut self, resource: &str, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![
                real(w * PT_PER_MM),
                real(0.0),
                real(0.0),
                real(h * PT_PER_MM),
                real(Self::pt_x(x)),
                real(Self::pt_y(y + h)),
            ],
        ));
        self.ops.push(Operation::new("Do", vec![name(resource)]));
        self.ops.push(Operation::new("Q", vec![]));
    }

    pub fn into_content(self) -> Content {
        Content {
            operations: self.ops,
        }
    }
}
