use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stored entry pairing a date with a department/town location.
///
/// `department` and `town` hold the raw codes; names are resolved at display
/// time so the stored record never goes stale against the reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: u64,
    pub date: String,
    pub department: String,
    pub town: String,
}

/// Form body for creating a record.
///
/// Fields default to empty strings so an absent field and an empty one take
/// the same validation path.
#[derive(Debug, Deserialize)]
pub struct NewRecordForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub town: String,
}

impl NewRecordForm {
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.department.is_empty() && !self.town.is_empty()
    }
}

/// A record enriched with display names for rendering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayRecord {
    pub id: u64,
    pub date: String,
    pub department: String,
    pub town: String,
    pub department_name: String,
    pub town_name: String,
}

impl DisplayRecord {
    /// Joins a record's codes against the name maps. A code missing from its
    /// map falls back to the raw code.
    pub fn resolve(
        record: Record,
        department_names: &HashMap<String, String>,
        town_names: &HashMap<String, String>,
    ) -> Self {
        let department_name = department_names
            .get(&record.department)
            .cloned()
            .unwrap_or_else(|| record.department.clone());
        let town_name = town_names
            .get(&record.town)
            .cloned()
            .unwrap_or_else(|| record.town.clone());

        Self {
            id: record.id,
            date: record.date,
            department: record.department,
            town: record.town,
            department_name,
            town_name,
        }
    }
}
