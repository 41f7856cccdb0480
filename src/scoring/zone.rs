use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Zone desirability table: location label to weight.
///
/// Labels are matched case-insensitively; keys are lowercased on
/// construction so mixed-case config entries and query labels both resolve.
/// An unknown label scores 0.0 -- absence is the defined default, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, f64>", into = "HashMap<String, f64>")]
pub struct ZoneTable {
    weights: HashMap<String, f64>,
}

impl ZoneTable {
    pub fn new(weights: HashMap<String, f64>) -> Self {
        Self {
            weights: weights
                .into_iter()
                .map(|(label, weight)| (label.to_lowercase(), weight))
                .collect(),
        }
    }

    pub fn score_for(&self, label: &str) -> f64 {
        self.weights
            .get(&label.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights
            .iter()
            .map(|(label, weight)| (label.as_str(), *weight))
    }
}

impl From<HashMap<String, f64>> for ZoneTable {
    fn from(weights: HashMap<String, f64>) -> Self {
        Self::new(weights)
    }
}

impl From<ZoneTable> for HashMap<String, f64> {
    fn from(table: ZoneTable) -> Self {
        table.weights
    }
}
