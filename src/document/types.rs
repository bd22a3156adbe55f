//! Capability data types

use serde::{Deserialize, Serialize};

/// One text-bearing content item of a page, in reading order
///
/// The item boundary is whatever the engine reports (a line for MuPDF).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
}

impl TextItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
