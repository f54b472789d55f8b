//! Frame-local → canvas-local geometry.
//!
//! Each frame gets one uniform scale factor chosen so its bounding box fits
//! the canvas (letterboxed on whichever axis has slack), and every member
//! shape is translated so the frame's center lands at canvas (0, 0). The
//! input coordinate system has Y increasing downward; the canvas has Y
//! increasing upward, hence the sign flip on `y`.

use crate::{
    config::CanvasConfig,
    error::{ScenecastError, ScenecastResult},
    model::{Frame, FrameObject},
};

/// An object's geometry after mapping into canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placed {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Uniform scale factor for `frame`: `min(Cw / W, Ch / H)`.
///
/// A zero-dimension frame is an input-data defect and fails with
/// [`ScenecastError::ZeroDimension`] rather than producing an infinite scale.
pub fn frame_scale(frame: &Frame, canvas: &CanvasConfig) -> ScenecastResult<f64> {
    if frame.width == 0.0 || frame.height == 0.0 {
        return Err(ScenecastError::zero_dimension(if frame.name.is_empty() {
            frame.id.clone()
        } else {
            frame.name.clone()
        }));
    }
    let scale_x = canvas.frame_width / frame.width;
    let scale_y = canvas.frame_height / frame.height;
    Ok(scale_x.min(scale_y))
}

/// Map one member shape into canvas space using the frame's scale factor.
/// No clamping: an object outside the frame's bounding box maps outside the
/// canvas.
pub fn to_canvas(obj: &FrameObject, frame: &Frame, scale: f64) -> Placed {
    Placed {
        x: (obj.x - frame.x - frame.width / 2.0 + obj.width / 2.0) * scale,
        y: -(obj.y - frame.y - frame.height / 2.0 + obj.height / 2.0) * scale,
        width: obj.width * scale,
        height: obj.height * scale,
    }
}
