//! Dataset
//!
//! The validated, immutable table of binary rows every other module works
//! against. Construction is the single enforcement point of the data
//! contract: every row carries the attribute values followed by the class
//! label, and every value is exactly 0 or 1.
use crate::errors::ArbolError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A row-major table of binary attribute values with a trailing class label
/// per row, plus the attribute names.
///
/// Rows are immutable once loaded; the tree builder only ever reads them
/// through index subsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
    attribute_names: Vec<String>,
}

impl Dataset {
    /// Build a dataset from parsed rows, validating the data contract.
    ///
    /// * `rows` - Rows of `attribute_names.len() + 1` values each, the last
    ///   value being the class label.
    /// * `attribute_names` - One name per attribute column, in column order.
    ///
    /// Fails on the first row whose length differs from the attribute count
    /// plus one, or whose values fall outside {0, 1}.
    pub fn from_rows(rows: Vec<Vec<u8>>, attribute_names: Vec<String>) -> Result<Self, ArbolError> {
        let cols = attribute_names.len() + 1;
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ArbolError::RowLength {
                    row: i,
                    found: row.len(),
                    expected: cols,
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(ArbolError::NonBinaryValue {
                        value,
                        row: i,
                        column: j,
                    });
                }
                data.push(value);
            }
        }
        Ok(Dataset {
            data,
            rows: rows.len(),
            cols,
            attribute_names,
        })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of attribute columns, the class column excluded.
    pub fn n_attributes(&self) -> usize {
        self.cols - 1
    }

    /// The attribute names, in column order.
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    /// Get a single value.
    ///
    /// * `row` - The row of the value to get.
    /// * `column` - The column of the value to get.
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.data[row * self.cols + column]
    }

    /// The class label of a row.
    pub fn label(&self, row: usize) -> bool {
        self.get(row, self.cols - 1) == 1
    }

    /// One full row, attribute values followed by the class label.
    pub fn get_row(&self, row: usize) -> &[u8] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Every row index, the root subset for fitting.
    pub(crate) fn full_subset(&self) -> Vec<usize> {
        (0..self.rows).collect()
    }
}

impl Display for Dataset {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut val = String::new();
        for i in 0..self.rows {
            for j in 0..self.cols {
                val.push_str(self.get(i, j).to_string().as_str());
                if j == (self.cols - 1) {
                    val.push('\n');
                } else {
                    val.push(' ');
                }
            }
        }
        write!(f, "{}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dataset_get() {
        let d = Dataset::from_rows(
            vec![vec![1, 1, 1], vec![1, 0, 1], vec![0, 1, 0]],
            names(&["A", "B"]),
        )
        .unwrap();
        assert_eq!(d.n_rows(), 3);
        assert_eq!(d.n_attributes(), 2);
        assert_eq!(d.get(0, 0), 1);
        assert_eq!(d.get(1, 1), 0);
        assert_eq!(d.get_row(2), &[0, 1, 0]);
        assert!(d.label(1));
        assert!(!d.label(2));
    }

    #[test]
    fn test_dataset_rejects_ragged_row() {
        let err = Dataset::from_rows(
            vec![vec![1, 0, 1], vec![1, 0]],
            names(&["A", "B"]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ArbolError::RowLength {
                row: 1,
                found: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_dataset_rejects_non_binary_value() {
        let err = Dataset::from_rows(
            vec![vec![1, 0, 1], vec![0, 2, 0]],
            names(&["A", "B"]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ArbolError::NonBinaryValue {
                value: 2,
                row: 1,
                column: 1
            }
        ));
    }

    #[test]
    fn test_dataset_display() {
        let d = Dataset::from_rows(vec![vec![1, 0, 1]], names(&["A", "B"])).unwrap();
        assert_eq!(d.to_string(), "1 0 1\n");
    }
}
