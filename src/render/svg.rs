use std::fmt;

use crate::{
    color::rgb::Paint,
    foundation::{
        core::Point,
        error::{LifeGridError, LifeGridResult},
        math::fmt_num,
    },
    scene::document::{
        Baseline, Primitive, TextAnchor, TextBlock, TextSpan, VisualizationDocument,
    },
};

/// Serialize `doc` as a standalone SVG 1.1 document sized to its canvas.
///
/// Output is byte-stable: the same document always yields the same string.
pub fn to_svg(doc: &VisualizationDocument) -> LifeGridResult<String> {
    let mut out = String::with_capacity(256 + doc.primitives().len() * 96);
    write_svg(&mut out, doc).map_err(|e| LifeGridError::render(format!("serialize svg: {e}")))?;
    Ok(out)
}

/// Streaming form of [`to_svg`].
pub fn write_svg<W: fmt::Write>(out: &mut W, doc: &VisualizationDocument) -> fmt::Result {
    let canvas = doc.canvas();
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    )?;
    for primitive in doc.primitives() {
        write_primitive(out, primitive)?;
    }
    writeln!(out, "</svg>")
}

fn write_primitive<W: fmt::Write>(out: &mut W, primitive: &Primitive) -> fmt::Result {
    match primitive {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
            )?;
            write_paint(out, "fill", *fill)?;
            writeln!(out, "/>")
        }
        Primitive::Circle {
            center,
            radius,
            fill,
        } => {
            write_circle_head(out, *center, *radius)?;
            write_paint(out, "fill", *fill)?;
            writeln!(out, "/>")
        }
        Primitive::Ring {
            center,
            radius,
            stroke,
            stroke_width,
        } => write_ring(out, *center, *radius, *stroke, *stroke_width, false),
        Primitive::Arc {
            center,
            radius,
            start_deg,
            sweep_deg,
            stroke,
            stroke_width,
        } => {
            if *sweep_deg <= 0.0 {
                return Ok(());
            }
            if *sweep_deg >= 360.0 {
                // A single arc command cannot close on itself.
                return write_ring(out, *center, *radius, *stroke, *stroke_width, true);
            }
            let start = point_on_circle(*center, *radius, *start_deg);
            let end = point_on_circle(*center, *radius, start_deg + sweep_deg);
            let large_arc = u8::from(*sweep_deg > 180.0);
            write!(
                out,
                r#"<path d="M {} {} A {r} {r} 0 {large_arc} 1 {} {}" fill="none""#,
                fmt_num(start.x),
                fmt_num(start.y),
                fmt_num(end.x),
                fmt_num(end.y),
                r = fmt_num(*radius),
            )?;
            write_paint(out, "stroke", *stroke)?;
            writeln!(
                out,
                r#" stroke-width="{}" stroke-linecap="round"/>"#,
                fmt_num(*stroke_width)
            )
        }
        Primitive::Text(block) => write_text(out, block),
    }
}

fn write_circle_head<W: fmt::Write>(out: &mut W, center: Point, radius: f64) -> fmt::Result {
    write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}""#,
        fmt_num(center.x),
        fmt_num(center.y),
        fmt_num(radius),
    )
}

fn write_ring<W: fmt::Write>(
    out: &mut W,
    center: Point,
    radius: f64,
    stroke: Paint,
    stroke_width: f64,
    round_caps: bool,
) -> fmt::Result {
    write_circle_head(out, center, radius)?;
    write!(out, r#" fill="none""#)?;
    write_paint(out, "stroke", stroke)?;
    write!(out, r#" stroke-width="{}""#, fmt_num(stroke_width))?;
    if round_caps {
        write!(out, r#" stroke-linecap="round""#)?;
    }
    writeln!(out, "/>")
}

/// Point at `deg` degrees clockwise from 12 o'clock.
fn point_on_circle(center: Point, radius: f64, deg: f64) -> Point {
    let rad = deg.to_radians();
    Point::new(center.x + radius * rad.sin(), center.y - radius * rad.cos())
}

fn write_paint<W: fmt::Write>(out: &mut W, attr: &str, paint: Paint) -> fmt::Result {
    write!(out, r#" {attr}="{}""#, paint.rgb)?;
    if !paint.is_opaque() {
        write!(out, r#" {attr}-opacity="{}""#, fmt_num(paint.alpha))?;
    }
    Ok(())
}

fn write_text<W: fmt::Write>(out: &mut W, block: &TextBlock) -> fmt::Result {
    let anchor = match block.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    write!(
        out,
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="{anchor}""#,
        fmt_num(block.position.x),
        fmt_num(block.position.y),
        escape(&block.font_family),
        fmt_num(block.font_size),
        block.font_weight,
    )?;
    if block.baseline == Baseline::Middle {
        write!(out, r#" dominant-baseline="middle""#)?;
    }
    write_paint(out, "fill", block.fill)?;
    write!(out, r#" xml:space="preserve">"#)?;
    for span in &block.spans {
        write_span(out, span)?;
    }
    writeln!(out, "</text>")
}

fn write_span<W: fmt::Write>(out: &mut W, span: &TextSpan) -> fmt::Result {
    let styled = span.fill.is_some() || span.font_family.is_some() || span.font_weight.is_some();
    if !styled {
        return write!(out, "{}", escape(&span.text));
    }
    write!(out, "<tspan")?;
    if let Some(family) = &span.font_family {
        write!(out, r#" font-family="{}""#, escape(family))?;
    }
    if let Some(weight) = span.font_weight {
        write!(out, r#" font-weight="{weight}""#)?;
    }
    if let Some(fill) = span.fill {
        write_paint(out, "fill", fill)?;
    }
    write!(out, ">{}</tspan>", escape(&span.text))
}

/// Escape XML-special characters for element content and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
