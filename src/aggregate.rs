use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::country_codes::country_code;
use crate::dataset::FinalRecord;

/// Titles per winning country, derived once from the finals table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCount {
    pub country: String,
    pub wins: u32,
    /// Absent when the country has no map code; such entries stay in the
    /// aggregate but are omitted from the choropleth.
    pub code: Option<String>,
}

/// One entry per distinct winner, order unspecified. Callers sort for
/// display when they care.
pub fn build_win_counts(records: &[FinalRecord]) -> Vec<WinCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for record in records {
        *counts.entry(record.winner.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(country, wins)| WinCount {
            country: country.to_string(),
            wins,
            code: country_code(country).map(|c| c.to_string()),
        })
        .collect()
}
