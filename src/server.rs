use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::aggregate::WinCount;
use crate::dataset::FinalRecord;
use crate::render::{RenderOutput, Selection, render};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Built once at startup, read-only for the life of the process.
#[derive(Debug)]
pub struct AppState {
    pub records: Vec<FinalRecord>,
    pub win_counts: Vec<WinCount>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/options", get(dropdown_options))
        .route("/api/render", get(render_view))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Debug, Deserialize)]
pub struct RenderParams {
    pub country: Option<String>,
    pub year: Option<String>,
}

impl RenderParams {
    // Cleared dropdowns arrive as absent or empty params; a year that does
    // not parse is treated the same as no year at all.
    fn into_selection(self) -> Selection {
        Selection {
            country: self.country.filter(|c| !c.is_empty()),
            year: self.year.as_deref().and_then(|y| y.trim().parse().ok()),
        }
    }
}

async fn render_view(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RenderParams>,
) -> Json<RenderOutput> {
    let selection = params.into_selection();
    tracing::debug!(?selection, "render request");
    Json(render(&state.records, &state.win_counts, &selection))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DropdownOptions {
    /// Distinct winners, alphabetical.
    pub countries: Vec<String>,
    /// All final years, newest first.
    pub years: Vec<u16>,
}

async fn dropdown_options(State(state): State<Arc<AppState>>) -> Json<DropdownOptions> {
    let mut countries: Vec<String> = state
        .win_counts
        .iter()
        .map(|wc| wc.country.clone())
        .collect();
    countries.sort();

    let mut years: Vec<u16> = state.records.iter().map(|r| r.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));

    Json(DropdownOptions { countries, years })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(country: Option<&str>, year: Option<&str>) -> RenderParams {
        RenderParams {
            country: country.map(|c| c.to_string()),
            year: year.map(|y| y.to_string()),
        }
    }

    #[test]
    fn empty_params_clear_the_selection() {
        let sel = params(Some(""), Some("")).into_selection();
        assert_eq!(sel, Selection::default());
    }

    #[test]
    fn unparseable_year_is_dropped() {
        let sel = params(Some("Brazil"), Some("MCMXCIV")).into_selection();
        assert_eq!(sel.country.as_deref(), Some("Brazil"));
        assert_eq!(sel.year, None);
    }

    #[test]
    fn year_parses_with_whitespace() {
        let sel = params(None, Some(" 1994 ")).into_selection();
        assert_eq!(sel.year, Some(1994));
    }
}
