use serde::{Deserialize, Serialize};

/// Top-level administrative region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub code: String,
    pub name: String,
}

/// Second-level administrative unit.
///
/// `department` is a soft reference to a [`Department`] code; the loader does
/// not enforce that the referenced department exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Town {
    pub code: String,
    pub name: String,
    pub department: String,
}
