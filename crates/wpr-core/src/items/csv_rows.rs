//! CSV row loading for the account list.

use std::fs;
use std::path::Path;

use super::{with_suffix, ItemsError};

/// Reads all rows of a header-less CSV file. Rows may have any field count;
/// fields are decoded lossily. When `path` is not a file, `<path>.csv` is read.
pub fn open_csv_rows(path: &Path) -> Result<Vec<Vec<String>>, ItemsError> {
    let path = if path.is_file() {
        path.to_path_buf()
    } else {
        with_suffix(path, ".csv")
    };
    let data = fs::read(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ItemsError::NotFound(path.clone())
        } else {
            ItemsError::io(&path, e)
        }
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|source| ItemsError::Csv {
            path: path.clone(),
            source,
        })?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }
    Ok(rows)
}
