use super::types::{Department, Town};

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Department dataset file name inside the data directory.
pub const DEPARTMENTS_FILE: &str = "departments.json";
/// Town dataset file name inside the data directory.
pub const TOWNS_FILE: &str = "towns.json";

/// Failure to produce a dataset. No partial result is ever returned.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the static reference datasets and builds lookup structures.
///
/// Each call re-reads its file, so results always reflect the current file
/// contents.
pub struct ReferenceLoader {
    data_dir: PathBuf,
}

impl ReferenceLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The full ordered department list.
    pub async fn departments(&self) -> Result<Vec<Department>, ReferenceError> {
        self.read_json(DEPARTMENTS_FILE).await
    }

    /// The full ordered town list.
    pub async fn towns(&self) -> Result<Vec<Town>, ReferenceError> {
        self.read_json(TOWNS_FILE).await
    }

    /// Department code -> display name. Last entry wins on duplicate codes.
    pub async fn department_names(&self) -> Result<HashMap<String, String>, ReferenceError> {
        let departments = self.departments().await?;
        Ok(departments
            .into_iter()
            .map(|department| (department.code, department.name))
            .collect())
    }

    /// Town code -> display name. Last entry wins on duplicate codes.
    pub async fn town_names(&self) -> Result<HashMap<String, String>, ReferenceError> {
        let towns = self.towns().await?;
        Ok(towns
            .into_iter()
            .map(|town| (town.code, town.name))
            .collect())
    }

    /// Towns whose `department` field equals `department_code`, in source
    /// order. An unknown code yields an empty list, not an error.
    pub async fn towns_in(&self, department_code: &str) -> Result<Vec<Town>, ReferenceError> {
        let towns = self.towns().await?;
        Ok(towns
            .into_iter()
            .filter(|town| town.department == department_code)
            .collect())
    }

    async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, ReferenceError> {
        let path = self.data_dir.join(file_name);
        let json = read_file(&path).await?;

        serde_json::from_str(&json).map_err(|source| ReferenceError::Parse { path, source })
    }
}

async fn read_file(path: &Path) -> Result<String, ReferenceError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReferenceError::Read {
            path: path.to_path_buf(),
            source,
        })
}
