//! The whole converter: load → group → transform → emit.

use std::{fs::File, io::BufWriter, path::Path};

use crate::{
    aggregate::group_into_frames, config::CanvasConfig, document::load_document,
    emit::write_script, error::ScenecastResult,
};

/// What a conversion run produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    /// The input had no elements; no output file was created.
    Empty,
    /// The script was written, with this many scenes.
    Written { scenes: usize },
}

/// Convert `input` into a Manim script at `output`.
///
/// An input without elements is a successful no-op that leaves `output`
/// untouched. A failure partway through emission may leave a truncated
/// output file behind; no cleanup is attempted.
#[tracing::instrument(skip(canvas))]
pub fn convert(input: &Path, output: &Path, canvas: &CanvasConfig) -> ScenecastResult<Conversion> {
    let elements = load_document(input)?;
    if elements.is_empty() {
        return Ok(Conversion::Empty);
    }

    let frames = group_into_frames(&elements)?;

    let file = File::create(output)?;
    let mut out = BufWriter::new(file);
    write_script(&mut out, &frames, canvas)?;

    Ok(Conversion::Written {
        scenes: frames.len(),
    })
}
