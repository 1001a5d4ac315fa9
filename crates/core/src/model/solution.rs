use serde::{Deserialize, Serialize};

/// One named solution strategy with its own complexity and code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approach {
    pub name: String,
    pub description: String,
    /// Free-text complexity expressions (e.g. "O(n log n)"); not machine-checked.
    pub time_complexity: String,
    pub space_complexity: String,
    pub code: String,
}

/// Ordered list of approaches, typically brute force first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub approaches: Vec<Approach>,
}

impl Solution {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.approaches.is_empty()
    }
}
