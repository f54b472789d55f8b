//! Document loading: input file → raw element records.

use std::{fs::File, io::BufReader, path::Path};

use crate::{
    error::{ScenecastError, ScenecastResult},
    model::{Document, Element},
};

/// Read an Excalidraw JSON document and return its `elements` array. The
/// array may be empty; callers treat that as a successful no-op, not an
/// error.
pub fn load_document(path: &Path) -> ScenecastResult<Vec<Element>> {
    let file = File::open(path)
        .map_err(|err| ScenecastError::document(format!("open '{}': {err}", path.display())))?;
    let doc: Document = serde_json::from_reader(BufReader::new(file))
        .map_err(|err| ScenecastError::document(format!("parse '{}': {err}", path.display())))?;
    Ok(doc.elements)
}
