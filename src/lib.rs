#![forbid(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod document;
pub mod emit;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod transform;

pub use aggregate::group_into_frames;
pub use config::CanvasConfig;
pub use document::load_document;
pub use emit::{scene_identifier, write_script};
pub use error::{ScenecastError, ScenecastResult};
pub use model::{Element, Frame, FrameObject, ShapeKind};
pub use pipeline::{Conversion, convert};
pub use transform::{Placed, frame_scale, to_canvas};
