//! Reader
//!
//! Loads comma-separated data files into [`Dataset`]s.
//!
//! The layout mirrors the classic ID3 training files: a header row naming
//! every column, then one row of 0/1 integers per example with the class
//! label in the last column. The class column's name is dropped from the
//! attribute list.
use crate::data::Dataset;
use crate::errors::ArbolError;
use std::path::Path;

/// Read a data file into a validated [`Dataset`].
///
/// * `path` - Path of a CSV file with a header row.
///
/// I/O and malformed-CSV failures surface as
/// [`ArbolError::UnableToRead`]; a field that is not an integer as
/// [`ArbolError::ParseValue`]; integers outside {0, 1} as the dataset's
/// own contract errors.
pub fn read_data_file<P: AsRef<Path>>(path: P) -> Result<Dataset, ArbolError> {
    let mut reader = match csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
    {
        Ok(r) => Ok(r),
        Err(e) => Err(ArbolError::UnableToRead(e.to_string())),
    }?;

    let headers = match reader.headers() {
        Ok(h) => Ok(h.clone()),
        Err(e) => Err(ArbolError::UnableToRead(e.to_string())),
    }?;
    let mut attribute_names = headers.iter().map(String::from).collect::<Vec<String>>();
    if attribute_names.pop().is_none() {
        return Err(ArbolError::UnableToRead(format!(
            "{}: header row is empty",
            path.as_ref().display()
        )));
    }

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = match record {
            Ok(r) => Ok(r),
            Err(e) => Err(ArbolError::UnableToRead(e.to_string())),
        }?;
        let mut row = Vec::with_capacity(record.len());
        for (j, field) in record.iter().enumerate() {
            let value = match field.parse::<u8>() {
                Ok(v) => Ok(v),
                Err(_) => Err(ArbolError::ParseValue {
                    value: field.to_string(),
                    row: i,
                    column: j,
                }),
            }?;
            row.push(value);
        }
        rows.push(row);
    }

    Dataset::from_rows(rows, attribute_names)
}
