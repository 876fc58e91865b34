use crate::{
    color::rgb::{Paint, Rgb},
    foundation::core::{Canvas, Point},
};

/// Primary sans-serif stack.
pub const SANS_FAMILY: &str = "Inter, sans-serif";
/// Monospace stack for numeric captions.
pub const MONO_FAMILY: &str = "'SF Mono', Menlo, 'Courier New', monospace";

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    /// Alphabetic baseline.
    Auto,
    /// Vertically centered.
    Middle,
}

/// One styled run inside a [`TextBlock`]. Unset fields inherit from the block.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    /// Raw (unescaped) text.
    pub text: String,
    /// Fill override.
    pub fill: Option<Paint>,
    /// Font family override.
    pub font_family: Option<String>,
    /// Font weight override.
    pub font_weight: Option<u16>,
}

impl TextSpan {
    /// Span inheriting every style from its block.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: None,
            font_family: None,
            font_weight: None,
        }
    }
}

/// A line of text made of one or more runs sharing a baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    /// Anchor point.
    pub position: Point,
    /// Font size in document units.
    pub font_size: f64,
    /// Font family stack.
    pub font_family: String,
    /// Font weight (100..=900).
    pub font_weight: u16,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: Baseline,
    /// Default fill.
    pub fill: Paint,
    /// Runs, in drawing order.
    pub spans: Vec<TextSpan>,
}

impl TextBlock {
    /// Single-run text centered on `position`.
    pub fn centered(
        position: Point,
        text: impl Into<String>,
        font_size: f64,
        font_weight: u16,
        fill: Paint,
    ) -> Self {
        Self {
            position,
            font_size,
            font_family: SANS_FAMILY.to_owned(),
            font_weight,
            anchor: TextAnchor::Middle,
            baseline: Baseline::Middle,
            fill,
            spans: vec![TextSpan::plain(text)],
        }
    }

    /// Concatenated text of every run.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Drawing primitive with absolute geometry and resolved colors.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Filled rectangle.
    Rect {
        /// Top-left x.
        x: f64,
        /// Top-left y.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Fill.
        fill: Paint,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill.
        fill: Paint,
    },
    /// Unfilled full circle outline.
    Ring {
        /// Center.
        center: Point,
        /// Radius of the stroke's center line.
        radius: f64,
        /// Stroke color.
        stroke: Paint,
        /// Stroke width.
        stroke_width: f64,
    },
    /// Stroked arc with round caps. Angles are degrees clockwise from 12 o'clock.
    Arc {
        /// Center.
        center: Point,
        /// Radius of the stroke's center line.
        radius: f64,
        /// Start angle.
        start_deg: f64,
        /// Clockwise sweep; `>= 360` draws the full circle.
        sweep_deg: f64,
        /// Stroke color.
        stroke: Paint,
        /// Stroke width.
        stroke_width: f64,
    },
    /// Text line.
    Text(TextBlock),
}

/// Finished, immutable drawing: the canvas plus primitives in painter's order.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualizationDocument {
    canvas: Canvas,
    primitives: Vec<Primitive>,
}

impl VisualizationDocument {
    /// Output size; also the document's coordinate space.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Primitives in painter's order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// All text blocks, in order.
    pub fn texts(&self) -> impl Iterator<Item = &TextBlock> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }
}

/// Accumulates primitives; the only way to build a [`VisualizationDocument`].
#[derive(Debug)]
pub(crate) struct DocumentBuilder {
    canvas: Canvas,
    primitives: Vec<Primitive>,
}

impl DocumentBuilder {
    /// Start a document whose first primitive is a full-canvas background.
    pub(crate) fn new(canvas: Canvas, background: Rgb) -> Self {
        let background = Primitive::Rect {
            x: 0.0,
            y: 0.0,
            width: canvas.w(),
            height: canvas.h(),
            fill: Paint::opaque(background),
        };
        Self {
            canvas,
            primitives: vec![background],
        }
    }

    pub(crate) fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.primitives.reserve(additional);
    }

    pub(crate) fn finish(self) -> VisualizationDocument {
        VisualizationDocument {
            canvas: self.canvas,
            primitives: self.primitives,
        }
    }
}
