//! Obligor book loading.
//!
//! Books are plain CSV files with a header row:
//!
//! ```csv
//! id,exposure,default_probability
//! OBL001,250000.0,0.003
//! OBL002,480000.0,0.012
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crp_core::{Obligor, ObligorId};
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// One row of an obligor book file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObligorRecord {
    /// Obligor identifier, unique within the book
    pub id: String,
    /// Exposure at default in currency units
    pub exposure: f64,
    /// Annual probability of default
    pub default_probability: f64,
}

impl ObligorRecord {
    fn into_obligor(self, row: usize) -> Result<Obligor> {
        Obligor::new(ObligorId::new(self.id), self.exposure, self.default_probability).map_err(
            |source| CliError::InvalidRecord {
                row,
                message: source.to_string(),
            },
        )
    }
}

/// Load an obligor book from a CSV file.
pub fn load_obligors<P: AsRef<Path>>(path: P) -> Result<Vec<Obligor>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    read_obligors(File::open(path)?)
}

/// Read an obligor book from any CSV source.
///
/// Rows are validated as they are parsed; the first invalid row aborts
/// the load with its 1-indexed position in the error.
pub fn read_obligors<R: Read>(reader: R) -> Result<Vec<Obligor>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut obligors = Vec::new();

    for (idx, result) in reader.deserialize::<ObligorRecord>().enumerate() {
        let record = result?;
        obligors.push(record.into_obligor(idx + 1)?);
    }

    Ok(obligors)
}
