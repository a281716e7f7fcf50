use std::path::Path;

use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Table export (File → Export)
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serializing JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("serializing CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Write any record slice as a pretty-printed JSON array.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<(), ExportError> {
    let text = serde_json::to_string_pretty(records)?;
    std::fs::write(path, text).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Write any record slice as CSV with a header row derived from the record's
/// serialized field names.
pub fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<(), ExportError> {
    let bytes = csv_bytes(records)?;
    std::fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn csv_bytes<T: Serialize>(records: &[T]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Io {
            path: "<buffer>".to_string(),
            source: e.into_error(),
        })
}

/// Dispatch on the chosen file extension; anything that is not `.csv` is
/// written as JSON (the save dialog offers only the two).
pub fn write_table<T: Serialize>(path: &Path, records: &[T]) -> Result<(), ExportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => write_csv(path, records),
        _ => write_json(path, records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples::{cold_start_scenarios, model_performance};

    #[test]
    fn csv_carries_field_names_and_labels() {
        let bytes = csv_bytes(&model_performance()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "model,auc_roc,f1_score,precision,recall,category"
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("Random Forest,0.87,"));
        assert!(first.ends_with(",Traditional"));
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains(",GNN"));
    }

    #[test]
    fn json_spells_gnn_uppercase() {
        let value = serde_json::to_value(cold_start_scenarios()).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1]["category"], "GNN");
        assert_eq!(rows[1]["success_rate"], 78);
    }
}
