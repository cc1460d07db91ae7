use crate::error::{Error, Result};
use crate::schema::ProfileDocument;
use std::fs;
use std::path::Path;

/// Default location the consuming application loads the table from.
pub const DEFAULT_OUTPUT: &str = "resources/profiles.json";

/// Serialize a document pretty-printed and write it atomically:
/// the JSON lands in a sibling temp file which is then renamed over
/// the destination, so a crashed run never leaves a half-written table.
pub fn write_document(doc: &ProfileDocument, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(doc)?;
    json.push('\n');

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| Error::Write {
        path: tmp.clone(),
        source: e,
    })?;
    fs::rename(&tmp, path).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a previously generated document, for validation.
pub fn load_document(path: &Path) -> Result<ProfileDocument> {
    let data = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&data).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
