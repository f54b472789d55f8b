//! Frame aggregation: group raw elements under the frame that owns them.
//!
//! Frames are not a distinct record in the input. A frame is itself an
//! element, referenced by other elements through `frameId`, so aggregation
//! runs in two phases: index every element by id, then dereference each
//! `frameId` through that index. Frame geometry is read once, from the frame
//! element itself; members only contribute to `objects`.

use std::collections::HashMap;

use crate::{
    error::{ScenecastError, ScenecastResult},
    model::{Element, Frame, FrameObject},
};

/// Group every element carrying a `frameId` under its owning frame.
///
/// Elements without a `frameId` are ignored (the frame elements themselves
/// usually fall in this bucket). The returned frames are in first-encounter
/// order of each `frameId`, and each frame's `objects` preserve input order.
/// A `frameId` that matches no element id fails with
/// [`ScenecastError::MissingFrame`].
pub fn group_into_frames(elements: &[Element]) -> ScenecastResult<Vec<Frame>> {
    // First occurrence wins on duplicate ids.
    let mut by_id: HashMap<&str, &Element> = HashMap::new();
    for el in elements {
        if let Some(id) = el.id.as_deref() {
            by_id.entry(id).or_insert(el);
        }
    }

    let mut frames: Vec<Frame> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();

    for el in elements {
        let Some(frame_id) = el.frame_id.as_deref() else {
            continue;
        };

        let idx = match index_of.get(frame_id) {
            Some(&idx) => idx,
            None => {
                let owner = by_id
                    .get(frame_id)
                    .ok_or_else(|| ScenecastError::missing_frame(frame_id))?;
                frames.push(Frame {
                    id: frame_id.to_string(),
                    name: owner.name.clone(),
                    x: owner.x,
                    y: owner.y,
                    width: owner.width,
                    height: owner.height,
                    objects: Vec::new(),
                });
                index_of.insert(frame_id.to_string(), frames.len() - 1);
                frames.len() - 1
            }
        };

        frames[idx].objects.push(FrameObject {
            kind: el.kind,
            x: el.x,
            y: el.y,
            width: el.width,
            height: el.height,
            text: el.text.clone(),
            font_size: el.font_size,
        });
    }

    Ok(frames)
}
