//! Input records as Excalidraw stores them, plus the derived frame model the
//! rest of the pipeline works with.

/// Top-level shape of an Excalidraw document. Everything except `elements` is
/// ignored.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Document {
    pub elements: Vec<Element>,
}

/// One raw shape record. Every field is optional in the source format, so all
/// of them carry defaults.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Element {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    #[serde(rename = "frameId")]
    pub frame_id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    #[serde(rename = "fontSize")]
    pub font_size: f64,
    pub name: String,
}

/// Closed set of shape types the emitter knows how to draw. Anything else in
/// the input deserializes to `Unknown` and is skipped at emit time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Text,
    #[serde(other)]
    #[default]
    Unknown,
}

/// A frame reinterpreted as a container: its own geometry plus the shapes
/// that reference it, in input encounter order. Derived during aggregation,
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct Frame {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub objects: Vec<FrameObject>,
}

/// A member shape of a frame, still in frame-local coordinates.
#[derive(Clone, Debug)]
pub struct FrameObject {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    pub font_size: f64,
}
