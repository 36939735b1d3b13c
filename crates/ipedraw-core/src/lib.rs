#![forbid(unsafe_code)]

//! Markup generator for the native file format of the Ipe drawing editor.
//!
//! The crate turns typed shape descriptions into Ipe XML fragments and brackets them with the
//! fixed document header, style sheet and page markers:
//!
//! - [`style`]: the style vocabulary (colors, pens, dashes, marks, text sizes)
//! - [`number`]: coordinate and radius formatting
//! - [`shapes`]: one emitter per shape kind
//! - [`model`]: shapes as serializable data
//! - [`document`]: document assembly with a typestate builder
//!
//! Everything is pure string building; writing the result somewhere is left to the caller.

pub mod document;
pub mod error;
pub mod geom;
pub mod model;
pub mod number;
pub mod shapes;
pub mod style;
mod stylesheet;

pub use document::{DocumentBuilder, InDocument, IpeDocument, NotStarted, Preamble};
pub use error::{Error, Result};
pub use geom::{Point, PointSequence, point};
pub use model::{Shape, TextLabel};
pub use style::{
    Color, Dash, MarkShape, MarkSize, MarkStyle, Pen, StrokeStyle, TextSize, TextStyle,
};

#[cfg(test)]
mod tests;
