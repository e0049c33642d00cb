use serde::{Deserialize, Serialize};

/// Static content for the compare and contact panels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panels {
    /// Comparison table rows; the first row is the header
    #[serde(default)]
    pub compare: Vec<Vec<String>>,
    /// Lines shown in the contact panel
    #[serde(default)]
    pub contact: Vec<String>,
}

impl Panels {
    /// Widest row of the comparison table
    pub fn compare_columns(&self) -> usize {
        self.compare.iter().map(Vec::len).max().unwrap_or(0)
    }
}
