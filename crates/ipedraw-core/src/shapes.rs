//! Shape emitters.
//!
//! Each function turns one shape into a self-contained markup fragment. Fragments never depend
//! on each other and can be concatenated in any order between the style sheet and the document
//! end (see [`crate::document`]).
//!
//! Path-based shapes share the same opening tag, `<path stroke=".." pen=".." dash="..">`,
//! followed by Ipe's path operators: `m` (move), `l` (line), `h` (close), `e` (ellipse),
//! `a` (arc), `s` (spline) and `u` (closed spline).

use crate::error::{Error, Result};
use crate::geom::{Point, PointSequence, distance, midpoint};
use crate::number::{fmt_point_into, fmt_radius};
use crate::style::{MarkStyle, StrokeStyle, TextStyle};
use std::borrow::Cow;
use std::fmt::Write as _;

fn open_path(out: &mut String, style: &StrokeStyle) {
    let _ = write!(
        out,
        r#"<path stroke="{}" pen="{}" dash="{}">"#,
        style.color, style.pen, style.dash
    );
}

/// Writes `\n x y`, the separator Ipe path data uses between coordinate pairs.
fn push_vertex(out: &mut String, p: Point) {
    out.push_str("\n ");
    fmt_point_into(out, p.x, p.y);
}

/// A mark symbol centered on `at`.
///
/// The symbol is always referenced with the `(sx)` suffix, whatever the shape.
pub fn mark(at: Point, style: &MarkStyle) -> String {
    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<use name="mark/{shape}(sx)" pos="{x} {y}" size="{size}" stroke="{color}"/>"#,
        shape = style.shape,
        x = at.x,
        y = at.y,
        size = style.size,
        color = style.color,
    );
    out
}

/// An axis-aligned rectangle spanned by two opposite corners.
///
/// The outline starts at `(x1, y2)` and visits `(x1, y1)`, `(x2, y1)`, `(x2, y2)` before
/// closing, so the winding follows the order the corners are given in.
pub fn rectangle(corner: Point, opposite: Point, style: &StrokeStyle) -> String {
    let (x1, y1) = (corner.x, corner.y);
    let (x2, y2) = (opposite.x, opposite.y);

    let mut out = String::new();
    open_path(&mut out, style);
    let _ = write!(
        &mut out,
        "\n {x1} {y2} m\n {x1} {y1} l\n {x2} {y1} l\n {x2} {y2} l\n h\n</path>\n"
    );
    out
}

/// An open polyline through `points`, in order.
pub fn path(points: &PointSequence, style: &StrokeStyle) -> String {
    let mut out = String::new();
    open_path(&mut out, style);
    push_vertex(&mut out, points.first());
    out.push_str(" m\n ");
    for p in points.rest() {
        fmt_point_into(&mut out, p.x, p.y);
        out.push_str(" l\n ");
    }
    out.push_str("</path>\n");
    out
}

/// Like [`path`], for callers holding a plain slice.
pub fn path_from_points(points: &[Point], style: &StrokeStyle) -> Result<String> {
    let points = PointSequence::try_from(points)?;
    Ok(path(&points, style))
}

/// A straight segment; identical to a two-point [`path`].
pub fn edge(from: Point, to: Point, style: &StrokeStyle) -> String {
    path(&PointSequence::pair(from, to), style)
}

/// Like [`edge`], validating that exactly two points were given.
pub fn edge_from_points(points: &[Point], style: &StrokeStyle) -> Result<String> {
    match points {
        [from, to] => Ok(edge(*from, *to, style)),
        _ => Err(Error::geometry(
            "edge",
            format!("expected exactly 2 points, got {}", points.len()),
        )),
    }
}

/// A full circle, drawn with Ipe's ellipse operator using the same radius on both axes.
pub fn circle(center: Point, radius: f64, style: &StrokeStyle) -> Result<String> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(Error::geometry(
            "circle",
            format!("radius must be finite and non-negative, got {radius}"),
        ));
    }

    let r = fmt_radius(radius);
    let mut out = String::new();
    open_path(&mut out, style);
    let _ = write!(
        &mut out,
        "\n {r} 0 0 {r} {x} {y} e\n</path>\n",
        x = center.x,
        y = center.y
    );
    Ok(out)
}

/// A counter-clockwise arc around `center` from `start` to `end`.
///
/// The radius is the distance from `center` to `start`. `end` is not checked to lie on that
/// circle; Ipe interprets mismatched parameters however it sees fit.
pub fn circular_arc(center: Point, start: Point, end: Point, style: &StrokeStyle) -> String {
    let r = fmt_radius(distance(start, center));

    let mut out = String::new();
    open_path(&mut out, style);
    push_vertex(&mut out, start);
    let _ = write!(
        &mut out,
        " m\n {r} 0 0 {r} {cx} {cy} {ex} {ey} a\n</path>\n",
        cx = center.x,
        cy = center.y,
        ex = end.x,
        ey = end.y
    );
    out
}

/// A counter-clockwise half circle from `start` to `end`, centered on their integer midpoint.
pub fn semicircle(start: Point, end: Point, style: &StrokeStyle) -> String {
    circular_arc(midpoint(start, end), start, end, style)
}

fn push_spline_points(out: &mut String, points: &PointSequence, first_op: &str) {
    push_vertex(out, points.first());
    out.push_str(first_op);
    for &p in points.rest() {
        push_vertex(out, p);
    }
}

/// An open spline with `points` as control points.
pub fn spline(points: &PointSequence, style: &StrokeStyle) -> String {
    let mut out = String::new();
    open_path(&mut out, style);
    push_spline_points(&mut out, points, " m");
    out.push_str(" s\n</path>\n");
    out
}

/// A closed spline (splinegon) through the control points, wrapping back to the first.
pub fn splinegon(points: &PointSequence, style: &StrokeStyle) -> String {
    let mut out = String::new();
    open_path(&mut out, style);
    push_spline_points(&mut out, points, "");
    out.push_str(" u\n</path>\n");
    out
}

/// A text label with its baseline anchored at `at`.
///
/// `text` is embedded verbatim: XML-significant characters must already be escaped (see
/// [`escape_text`]). The fragment carries no trailing newline.
pub fn text(text: &str, at: Point, style: &TextStyle) -> String {
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<text transformations="translations" pos="{x} {y}" stroke="{color}" type="label" width="190" height="10" depth="0" valign="baseline" size="{size}">{text}</text>"#,
        x = at.x,
        y = at.y,
        color = style.color,
        size = style.size,
    );
    out
}

/// Escapes `&`, `<` and `>` so `text` can be used as label content.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
