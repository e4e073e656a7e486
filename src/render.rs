use serde::{Deserialize, Serialize};

use crate::aggregate::WinCount;
use crate::dataset::FinalRecord;

/// The two dashboard filters. Independent: picking a year does not narrow
/// the country list and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Selection {
    pub country: Option<String>,
    pub year: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRegion {
    pub code: String,
    pub country: String,
    pub wins: u32,
}

/// Choropleth input: the full aggregate layer, plus an optional fixed-color
/// overlay for the selected country. The overlay is visual emphasis only and
/// never feeds the color scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDescription {
    pub choropleth: Vec<MapRegion>,
    pub highlight: Option<MapRegion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPanel {
    pub country: String,
    pub total_wins: u32,
    pub years: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPanel {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub map: MapDescription,
    pub country_panel: Option<CountryPanel>,
    pub year_panel: Option<YearPanel>,
}

/// Pure function from (finals table, aggregate, selection) to the three
/// dashboard outputs. Every lookup miss degrades to omission: an unknown
/// country or year leaves its panel empty, an unresolvable code drops the
/// overlay. Never errors.
pub fn render(records: &[FinalRecord], win_counts: &[WinCount], selection: &Selection) -> RenderOutput {
    let mut choropleth: Vec<MapRegion> = win_counts
        .iter()
        .filter_map(|wc| {
            let code = wc.code.clone()?;
            Some(MapRegion {
                code,
                country: wc.country.clone(),
                wins: wc.wins,
            })
        })
        .collect();
    // Stable output order for the map layer; the aggregate itself is unordered.
    choropleth.sort_by(|a, b| a.country.cmp(&b.country));

    let highlight = selection.country.as_deref().and_then(|country| {
        win_counts
            .iter()
            .find(|wc| wc.country == country)
            .and_then(|wc| {
                let code = wc.code.clone()?;
                Some(MapRegion {
                    code,
                    country: wc.country.clone(),
                    wins: wc.wins,
                })
            })
    });

    let country_panel = selection.country.as_deref().and_then(|country| {
        let mut years: Vec<u16> = records
            .iter()
            .filter(|r| r.winner == country)
            .map(|r| r.year)
            .collect();
        if years.is_empty() {
            // Dropdown is populated from winners only, but stay defensive.
            return None;
        }
        years.sort_unstable();
        Some(CountryPanel {
            country: country.to_string(),
            total_wins: years.len() as u32,
            years,
        })
    });

    let year_panel = selection.year.and_then(|year| {
        records.iter().find(|r| r.year == year).map(|r| YearPanel {
            year: r.year,
            winner: r.winner.clone(),
            runner_up: r.runner_up.clone(),
            score: r.score.clone(),
        })
    });

    RenderOutput {
        map: MapDescription {
            choropleth,
            highlight,
        },
        country_panel,
        year_panel,
    }
}
