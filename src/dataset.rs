use std::collections::HashSet;

use anyhow::{Result, bail};

/// One World Cup final, as it appears in the record book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalRecord {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
    pub score: String,
}

// Final results 1930-2022, one row per edition. Scores are kept verbatim,
// including extra-time and penalty-shootout annotations.
const FINALS: &[(u16, &str, &str, &str)] = &[
    (1930, "Uruguay", "Argentina", "4-2"),
    (1934, "Italy", "Czechoslovakia", "2-1 (a.e.t.)"),
    (1938, "Italy", "Hungary", "4-2"),
    (1950, "Uruguay", "Brazil", "2-1"),
    (1954, "West Germany", "Hungary", "3-2"),
    (1958, "Brazil", "Sweden", "5-2"),
    (1962, "Brazil", "Czechoslovakia", "3-1"),
    (1966, "England", "West Germany", "4-2 (a.e.t.)"),
    (1970, "Brazil", "Italy", "4-1"),
    (1974, "West Germany", "Netherlands", "2-1"),
    (1978, "Argentina", "Netherlands", "3-1 (a.e.t.)"),
    (1982, "Italy", "West Germany", "3-1"),
    (1986, "Argentina", "West Germany", "3-2"),
    (1990, "West Germany", "Argentina", "1-0"),
    (1994, "Brazil", "Italy", "0-0 (a.e.t.) (3-2 p.)"),
    (1998, "France", "Brazil", "3-0"),
    (2002, "Brazil", "Germany", "2-0"),
    (2006, "Italy", "France", "1-1 (a.e.t.) (5-3 p.)"),
    (2010, "Spain", "Netherlands", "1-0 (a.e.t.)"),
    (2014, "Germany", "Argentina", "1-0 (a.e.t.)"),
    (2018, "France", "Croatia", "4-2"),
    (2022, "Argentina", "France", "3-3 (a.e.t.) (4-2 p.)"),
];

// West Germany results count toward Germany (national continuity). No other
// historical renames are applied.
fn normalize_country(name: &str) -> &str {
    if name == "West Germany" { "Germany" } else { name }
}

/// The full finals table, normalization applied. Built once at startup and
/// treated as immutable afterwards.
pub fn world_cup_finals() -> Vec<FinalRecord> {
    FINALS
        .iter()
        .map(|&(year, winner, runner_up, score)| FinalRecord {
            year,
            winner: normalize_country(winner).to_string(),
            runner_up: normalize_country(runner_up).to_string(),
            score: score.to_string(),
        })
        .collect()
}

/// The dataset is compiled in, so a malformed entry is a programming error:
/// refuse to start rather than serve a broken aggregate.
pub fn validate_finals(records: &[FinalRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.year) {
            bail!("duplicate final year {} in dataset", record.year);
        }
        if record.winner.is_empty() || record.runner_up.is_empty() {
            bail!("final {} has an empty finalist name", record.year);
        }
    }
    Ok(())
}
