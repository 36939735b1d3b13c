//! Style vocabulary.
//!
//! Every style dimension Ipe understands (stroke color, pen width, dash pattern, mark shape,
//! mark size, text size) is an open enumeration: the named members cover the tokens defined by
//! the basic style sheet, and `Custom` carries any other token verbatim. Tokens are substituted
//! into the markup exactly as spelled, so a custom token must be something the document's
//! style sheet (or Ipe itself) can resolve.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! style_token {
    (
        $(#[$meta:meta])*
        $name:ident, $dimension:literal, default = $default:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Any other token, emitted as-is.
            Custom(String),
        }

        impl $name {
            /// The recognized members, in style-sheet order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $token,)+
                    $name::Custom(token) => token.as_str(),
                }
            }

            /// Accepts only the recognized tokens.
            pub fn parse_strict(token: &str) -> Result<Self> {
                match Self::from(token) {
                    $name::Custom(token) => Err(Error::UnrecognizedToken {
                        dimension: $dimension,
                        token,
                    }),
                    known => Ok(known),
                }
            }

            pub fn is_custom(&self) -> bool {
                matches!(self, $name::Custom(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                match token {
                    $($token => $name::$variant,)+
                    other => $name::Custom(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                match $name::from(token.as_str()) {
                    $name::Custom(_) => $name::Custom(token),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Custom(token) => token,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }
    };
}

style_token! {
    /// Stroke color. Named colors are the ones the basic style sheet defines, plus Ipe's
    /// built-in `black`.
    Color, "color", default = Black {
        Black => "black",
        Red => "red",
        Green => "green",
        Blue => "blue",
        Yellow => "yellow",
        Orange => "orange",
        Gold => "gold",
        Purple => "purple",
        Gray => "gray",
        Brown => "brown",
        Navy => "navy",
        Pink => "pink",
        SeaGreen => "seagreen",
        Turquoise => "turquoise",
        Violet => "violet",
        DarkBlue => "darkblue",
        DarkCyan => "darkcyan",
        DarkGray => "darkgray",
        DarkGreen => "darkgreen",
        DarkMagenta => "darkmagenta",
        DarkOrange => "darkorange",
        DarkRed => "darkred",
        LightBlue => "lightblue",
        LightCyan => "lightcyan",
        LightGray => "lightgray",
        LightGreen => "lightgreen",
        LightYellow => "lightyellow",
    }
}

style_token! {
    /// Pen width.
    Pen, "pen", default = Normal {
        Normal => "normal",
        Heavier => "heavier",
        Fat => "fat",
        UltraFat => "ultrafat",
    }
}

style_token! {
    /// Dash pattern.
    Dash, "dash", default = Normal {
        Normal => "normal",
        Dashed => "dashed",
        Dotted => "dotted",
        DashDotted => "dash dotted",
        DashDotDotted => "dash dot dotted",
    }
}

style_token! {
    MarkShape, "mark shape", default = Disk {
        Disk => "disk",
        FDisk => "fdisk",
        Circle => "circle",
        Box => "box",
        Square => "square",
        FSquare => "fsquare",
        Cross => "cross",
    }
}

style_token! {
    MarkSize, "mark size", default = Normal {
        Tiny => "tiny",
        Small => "small",
        Normal => "normal",
        Large => "large",
    }
}

style_token! {
    /// Text size. Ipe's symbolic sizes are case sensitive (`large`, `Large` and `LARGE` differ).
    TextSize, "text size", default = Normal {
        Tiny => "tiny",
        Small => "small",
        Footnote => "footnote",
        Normal => "normal",
        /// `large`
        Large => "large",
        /// `Large`, one step above `large`.
        Large2 => "Large",
        /// `LARGE`
        Large3 => "LARGE",
        /// `huge`
        Huge => "huge",
        /// `Huge`, one step above `huge`.
        Huge2 => "Huge",
    }
}

/// Stroke attributes shared by every path-based shape.
///
/// Each field defaults independently (`black` / `normal` / `normal`), both through
/// [`Default`] and when deserializing a partial record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Color,
    pub pen: Pen,
    pub dash: Dash,
}

impl StrokeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_pen(mut self, pen: impl Into<Pen>) -> Self {
        self.pen = pen.into();
        self
    }

    pub fn with_dash(mut self, dash: impl Into<Dash>) -> Self {
        self.dash = dash.into();
        self
    }
}

/// Attributes of a mark: `disk` / `black` / `normal` unless overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkStyle {
    pub shape: MarkShape,
    pub color: Color,
    pub size: MarkSize,
}

impl MarkStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: impl Into<MarkShape>) -> Self {
        self.shape = shape.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<MarkSize>) -> Self {
        self.size = size.into();
        self
    }
}

/// Attributes of a text label: `black` / `normal` unless overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: Color,
    pub size: TextSize,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<TextSize>) -> Self {
        self.size = size.into();
        self
    }
}
