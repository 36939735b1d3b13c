//! Document assembly.
//!
//! An Ipe document is the preamble, the style sheet (which also opens the first page), any
//! number of page blocks holding shape fragments, and the closing markers. The free functions
//! return those fixed pieces for callers that concatenate text themselves; [`DocumentBuilder`]
//! does the same bookkeeping with the call order checked by the type system:
//!
//! ```
//! use ipedraw_core::document::DocumentBuilder;
//! use ipedraw_core::geom::point;
//! use ipedraw_core::style::{MarkStyle, StrokeStyle};
//!
//! let mut doc = DocumentBuilder::start();
//! doc.edge(point(0, 0), point(100, 100), &StrokeStyle::default());
//! doc.new_page();
//! doc.mark(point(50, 50), &MarkStyle::default());
//! let doc = doc.close();
//! assert_eq!(doc.page_count(), 2);
//! ```
//!
//! A `DocumentBuilder<NotStarted>` has no shape methods and a `DocumentBuilder<InDocument>` has
//! no `preamble`, so emitting out of order does not compile. Closing consumes the builder.

use crate::error::Result;
use crate::geom::{Point, PointSequence};
use crate::model::{Shape, TextLabel};
use crate::shapes;
use crate::style::{MarkStyle, StrokeStyle, TextStyle};
use crate::stylesheet;
use std::fmt;
use std::io;
use std::marker::PhantomData;

/// The XML header of every document.
pub fn preamble() -> &'static str {
    stylesheet::PREAMBLE
}

/// The `basic` style sheet, followed by the opening of the first page.
pub fn style_sheet() -> &'static str {
    stylesheet::STYLE_SHEET
}

/// Closes the current page and opens a new one.
pub fn new_page() -> &'static str {
    stylesheet::PAGE_BREAK
}

/// Closes the last page and the document.
pub fn end() -> &'static str {
    stylesheet::END
}

/// Nothing written yet.
#[derive(Debug)]
pub enum NotStarted {}

/// Preamble written; the style sheet comes next.
#[derive(Debug)]
pub enum Preamble {}

/// Inside a page: shapes may be added.
#[derive(Debug)]
pub enum InDocument {}

/// Accumulates one document. Not meant to be shared between threads while being written.
#[derive(Debug)]
pub struct DocumentBuilder<S> {
    out: String,
    pages: usize,
    fragments: usize,
    _state: PhantomData<S>,
}

impl DocumentBuilder<NotStarted> {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            pages: 0,
            fragments: 0,
            _state: PhantomData,
        }
    }

    /// Writes the preamble and the style sheet, leaving the first page open.
    pub fn start() -> DocumentBuilder<InDocument> {
        Self::new().preamble().style_sheet()
    }

    pub fn preamble(mut self) -> DocumentBuilder<Preamble> {
        self.out.push_str(preamble());
        self.transition()
    }
}

impl Default for DocumentBuilder<NotStarted> {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder<Preamble> {
    pub fn style_sheet(mut self) -> DocumentBuilder<InDocument> {
        self.out.push_str(style_sheet());
        self.pages = 1;
        tracing::trace!(page = self.pages, "opened page");
        self.transition()
    }
}

impl<S> DocumentBuilder<S> {
    fn transition<T>(self) -> DocumentBuilder<T> {
        DocumentBuilder {
            out: self.out,
            pages: self.pages,
            fragments: self.fragments,
            _state: PhantomData,
        }
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }
}

impl DocumentBuilder<InDocument> {
    /// Number of pages opened so far, including the current one.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Number of fragments added so far, over all pages.
    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    /// Appends an already rendered fragment to the current page.
    pub fn push_fragment(&mut self, fragment: &str) -> &mut Self {
        self.out.push_str(fragment);
        self.fragments += 1;
        self
    }

    pub fn new_page(&mut self) -> &mut Self {
        self.out.push_str(new_page());
        self.pages += 1;
        tracing::trace!(page = self.pages, "opened page");
        self
    }

    pub fn draw(&mut self, shape: &Shape) -> Result<&mut Self> {
        let fragment = shape.to_markup()?;
        Ok(self.push_fragment(&fragment))
    }

    pub fn mark(&mut self, at: Point, style: &MarkStyle) -> &mut Self {
        self.push_fragment(&shapes::mark(at, style))
    }

    pub fn rectangle(&mut self, corner: Point, opposite: Point, style: &StrokeStyle) -> &mut Self {
        self.push_fragment(&shapes::rectangle(corner, opposite, style))
    }

    pub fn path(&mut self, points: &PointSequence, style: &StrokeStyle) -> &mut Self {
        self.push_fragment(&shapes::path(points, style))
    }

    pub fn edge(&mut self, from: Point, to: Point, style: &StrokeStyle) -> &mut Self {
        self.push_fragment(&shapes::edge(from, to, style))
    }

    pub fn circle(
        &mut self,
        center: Point,
        radius: f64,
        style: &StrokeStyle,
    ) -> Result<&mut Self> {
        let fragment = shapes::circle(center, radius, style)?;
        Ok(self.push_fragment(&fragment))
    }

    pub fn circular_arc(
        &mut self,
        center: Point,
        start: Point,
        end: Point,
        style: &StrokeStyle,
    ) -> &mut Self {
        self.push_fragment(&shapes::circular_arc(center, start, end, style))
    }

    pub fn semicircle(&mut self, start: Point, end: Point, style: &StrokeStyle) -> &mut Self {
        self.push_fragment(&shapes::semicircle(start, end, style))
    }

    pub fn spline(&mut self, points: &PointSequence, style: &StrokeStyle) -> &mut Self {
        self.push_fragment(&shapes::spline(points, style))
    }

    pub fn splinegon(&mut self, points: &PointSequence, style: &StrokeStyle) -> &mut Self {
        self.push_fragment(&shapes::splinegon(points, style))
    }

    pub fn text(&mut self, text: &str, at: Point, style: &TextStyle) -> &mut Self {
        self.push_fragment(&shapes::text(text, at, style))
    }

    pub fn label(&mut self, label: &TextLabel) -> &mut Self {
        self.push_fragment(&label.to_markup())
    }

    /// Writes the closing markers and hands out the finished document.
    pub fn close(mut self) -> IpeDocument {
        self.out.push_str(end());
        tracing::debug!(
            pages = self.pages,
            fragments = self.fragments,
            bytes = self.out.len(),
            "closed ipe document"
        );
        IpeDocument {
            text: self.out,
            pages: self.pages,
        }
    }
}

/// A finished document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpeDocument {
    text: String,
    pages: usize,
}

impl IpeDocument {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.text.as_bytes())
    }
}

impl fmt::Display for IpeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for IpeDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<IpeDocument> for String {
    fn from(doc: IpeDocument) -> Self {
        doc.text
    }
}
