use crate::error::Result;
use crate::geom::{Point, PointSequence};
use crate::shapes;
use crate::style::{Color, MarkStyle, StrokeStyle, TextSize, TextStyle};
use serde::{Deserialize, Serialize};

/// A text label: content, anchor position, color and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub position: Point,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub size: TextSize,
}

impl TextLabel {
    pub fn new(text: impl Into<String>, position: Point) -> Self {
        Self {
            text: text.into(),
            position,
            color: Color::default(),
            size: TextSize::default(),
        }
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<TextSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn style(&self) -> TextStyle {
        TextStyle {
            color: self.color.clone(),
            size: self.size.clone(),
        }
    }

    pub fn to_markup(&self) -> String {
        shapes::text(&self.text, self.position, &self.style())
    }
}

/// Every shape the emitters can draw, as plain data.
///
/// Serialized with a `kind` tag, e.g.
/// `{"kind": "edge", "from": [0, 0], "to": [10, 10], "style": {"dash": "dashed"}}`.
/// Omitted styles fall back to the defaults field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Mark {
        at: Point,
        #[serde(default)]
        style: MarkStyle,
    },
    Rectangle {
        corner: Point,
        opposite: Point,
        #[serde(default)]
        style: StrokeStyle,
    },
    Path {
        points: PointSequence,
        #[serde(default)]
        style: StrokeStyle,
    },
    Edge {
        from: Point,
        to: Point,
        #[serde(default)]
        style: StrokeStyle,
    },
    Circle {
        center: Point,
        radius: f64,
        #[serde(default)]
        style: StrokeStyle,
    },
    CircularArc {
        center: Point,
        start: Point,
        end: Point,
        #[serde(default)]
        style: StrokeStyle,
    },
    Semicircle {
        start: Point,
        end: Point,
        #[serde(default)]
        style: StrokeStyle,
    },
    Spline {
        points: PointSequence,
        #[serde(default)]
        style: StrokeStyle,
    },
    Splinegon {
        points: PointSequence,
        #[serde(default)]
        style: StrokeStyle,
    },
    Text(TextLabel),
}

impl Shape {
    /// The shape's kind as it appears in the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Mark { .. } => "mark",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Path { .. } => "path",
            Shape::Edge { .. } => "edge",
            Shape::Circle { .. } => "circle",
            Shape::CircularArc { .. } => "circular_arc",
            Shape::Semicircle { .. } => "semicircle",
            Shape::Spline { .. } => "spline",
            Shape::Splinegon { .. } => "splinegon",
            Shape::Text(_) => "text",
        }
    }

    pub fn to_markup(&self) -> Result<String> {
        let fragment = match self {
            Shape::Mark { at, style } => shapes::mark(*at, style),
            Shape::Rectangle {
                corner,
                opposite,
                style,
            } => shapes::rectangle(*corner, *opposite, style),
            Shape::Path { points, style } => shapes::path(points, style),
            Shape::Edge { from, to, style } => shapes::edge(*from, *to, style),
            Shape::Circle {
                center,
                radius,
                style,
            } => shapes::circle(*center, *radius, style)?,
            Shape::CircularArc {
                center,
                start,
                end,
                style,
            } => shapes::circular_arc(*center, *start, *end, style),
            Shape::Semicircle { start, end, style } => shapes::semicircle(*start, *end, style),
            Shape::Spline { points, style } => shapes::spline(points, style),
            Shape::Splinegon { points, style } => shapes::splinegon(points, style),
            Shape::Text(label) => label.to_markup(),
        };
        Ok(fragment)
    }
}

impl From<TextLabel> for Shape {
    fn from(label: TextLabel) -> Self {
        Shape::Text(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;
    use crate::style::{Dash, MarkShape};
    use serde_json::json;

    #[test]
    fn shapes_deserialize_with_default_styles() {
        let shape: Shape = serde_json::from_value(json!({
            "kind": "edge",
            "from": [0, 0],
            "to": [10, 10],
            "style": { "dash": "dashed" }
        }))
        .unwrap();
        assert_eq!(
            shape,
            Shape::Edge {
                from: point(0, 0),
                to: point(10, 10),
                style: StrokeStyle::new().with_dash(Dash::Dashed),
            }
        );

        let shape: Shape =
            serde_json::from_value(json!({ "kind": "mark", "at": [5, 5] })).unwrap();
        assert_eq!(
            shape.to_markup().unwrap(),
            shapes::mark(point(5, 5), &MarkStyle::default())
        );
    }

    #[test]
    fn empty_point_lists_fail_to_deserialize() {
        let err = serde_json::from_value::<Shape>(json!({ "kind": "spline", "points": [] }))
            .unwrap_err()
            .to_string();
        assert!(err.contains("at least one point"), "{err}");
    }

    #[test]
    fn text_shapes_flatten_the_label() {
        let shape: Shape = serde_json::from_value(json!({
            "kind": "text",
            "text": "v1",
            "position": [3, 4],
            "size": "Large"
        }))
        .unwrap();
        assert_eq!(shape.kind(), "text");
        assert_eq!(
            shape,
            Shape::Text(TextLabel::new("v1", point(3, 4)).with_size(TextSize::Large2))
        );
    }

    #[test]
    fn to_markup_dispatches_to_the_emitters() {
        let style = StrokeStyle::default();
        let shape = Shape::Semicircle {
            start: point(0, 0),
            end: point(4, 0),
            style: style.clone(),
        };
        assert_eq!(
            shape.to_markup().unwrap(),
            shapes::circular_arc(point(2, 0), point(0, 0), point(4, 0), &style)
        );

        let bad = Shape::Circle {
            center: point(0, 0),
            radius: -2.0,
            style,
        };
        assert!(bad.to_markup().is_err());

        let mark = Shape::Mark {
            at: point(1, 1),
            style: MarkStyle::new().with_shape(MarkShape::Cross),
        };
        assert!(mark.to_markup().unwrap().contains("mark/cross(sx)"));
    }
}
