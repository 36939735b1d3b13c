#![forbid(unsafe_code)]

//! `ipedraw` generates documents in the native XML format of the Ipe drawing editor.
//!
//! The building blocks live in `ipedraw-core` and are re-exported here: the style vocabulary,
//! one emitter per shape, and a typestate [`DocumentBuilder`] that only lets shapes be added
//! between the style sheet and the end of the document. On top of that, [`scene`] describes a
//! whole drawing as data (JSON or YAML) and renders it in one call.
//!
//! ```
//! let doc = ipedraw::render_json(r#"{
//!     "pages": [
//!         { "shapes": [
//!             { "kind": "rectangle", "corner": [0, 0], "opposite": [100, 50] },
//!             { "kind": "circle", "center": [50, 25], "radius": 10, "style": { "color": "red" } }
//!         ] }
//!     ]
//! }"#)?;
//! assert_eq!(doc.page_count(), 1);
//! # Ok::<(), ipedraw::SceneError>(())
//! ```

pub use ipedraw_core::*;

pub mod scene;

pub use scene::{Scene, ScenePage, render_json, render_scene, render_yaml};

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error(transparent)]
    Draw(#[from] ipedraw_core::Error),
    #[error("scene JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scene YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("shape {index} on page {page} ({kind}): {source}")]
    Shape {
        page: usize,
        index: usize,
        kind: &'static str,
        #[source]
        source: ipedraw_core::Error,
    },
}

pub type SceneResult<T> = std::result::Result<T, SceneError>;
