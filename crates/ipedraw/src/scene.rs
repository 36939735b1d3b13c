//! Drawings described as data.
//!
//! A [`Scene`] is a list of pages, each a list of [`Shape`]s, and can be loaded from JSON or
//! YAML:
//!
//! ```yaml
//! pages:
//!   - shapes:
//!       - kind: mark
//!         at: [10, 10]
//!         style: { shape: cross, color: blue }
//!       - kind: text
//!         text: "$v_1$"
//!         position: [14, 10]
//! ```
//!
//! Shapes are emitted in order; every page after the first starts with a page break.

use crate::{SceneError, SceneResult};
use ipedraw_core::{DocumentBuilder, IpeDocument, Shape};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub pages: Vec<ScenePage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenePage {
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn from_json_str(text: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml_str(text: &str) -> SceneResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn render(&self) -> SceneResult<IpeDocument> {
        render_scene(self)
    }
}

impl From<Vec<Shape>> for ScenePage {
    fn from(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

/// Renders every page of `scene` into one document.
///
/// A scene without pages still yields a valid document with a single empty page.
pub fn render_scene(scene: &Scene) -> SceneResult<IpeDocument> {
    let mut doc = DocumentBuilder::start();
    for (page_idx, page) in scene.pages.iter().enumerate() {
        if page_idx > 0 {
            doc.new_page();
        }
        for (index, shape) in page.shapes.iter().enumerate() {
            let fragment = shape.to_markup().map_err(|source| SceneError::Shape {
                page: page_idx + 1,
                index,
                kind: shape.kind(),
                source,
            })?;
            doc.push_fragment(&fragment);
        }
        tracing::debug!(
            page = page_idx + 1,
            shapes = page.shapes.len(),
            "rendered scene page"
        );
    }
    Ok(doc.close())
}

pub fn render_json(text: &str) -> SceneResult<IpeDocument> {
    render_scene(&Scene::from_json_str(text)?)
}

pub fn render_yaml(text: &str) -> SceneResult<IpeDocument> {
    render_scene(&Scene::from_yaml_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipedraw_core::document::{end, preamble, style_sheet};

    #[test]
    fn empty_scene_renders_the_minimal_document() {
        let doc = render_scene(&Scene::default()).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(
            doc.as_str(),
            format!("{}{}{}", preamble(), style_sheet(), end())
        );
    }

    #[test]
    fn page_breaks_go_between_pages_only() {
        let scene = Scene {
            pages: vec![ScenePage::default(), ScenePage::default(), ScenePage::default()],
        };
        let doc = scene.render().unwrap();
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.as_str().matches("</page>\n<page>").count(), 2);
    }

    #[test]
    fn shape_errors_name_their_location() {
        let err = render_json(
            r#"{"pages": [{"shapes": []}, {"shapes": [
                {"kind": "mark", "at": [0, 0]},
                {"kind": "circle", "center": [0, 0], "radius": -1}
            ]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SceneError::Shape {
                page: 2,
                index: 1,
                kind: "circle",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "shape 1 on page 2 (circle): Invalid geometry (circle): radius must be finite and non-negative, got -1"
        );
    }

    #[test]
    fn malformed_json_is_reported_as_json() {
        assert!(matches!(
            render_json("{\"pages\": [").unwrap_err(),
            SceneError::Json(_)
        ));
    }
}
