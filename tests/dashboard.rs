use wc_finals_dashboard::aggregate::{WinCount, build_win_counts};
use wc_finals_dashboard::dataset::{FinalRecord, world_cup_finals};
use wc_finals_dashboard::render::{Selection, render};

fn base() -> (Vec<FinalRecord>, Vec<WinCount>) {
    let records = world_cup_finals();
    let win_counts = build_win_counts(&records);
    (records, win_counts)
}

#[test]
fn country_panel_agrees_with_aggregate_for_every_winner() {
    let (records, win_counts) = base();

    for wc in &win_counts {
        let selection = Selection {
            country: Some(wc.country.clone()),
            year: None,
        };
        let out = render(&records, &win_counts, &selection);
        let panel = out.country_panel.expect("every winner has a panel");

        assert_eq!(panel.total_wins, wc.wins, "{}", wc.country);
        assert_eq!(panel.years.len() as u32, wc.wins, "{}", wc.country);
        assert!(
            panel.years.windows(2).all(|w| w[0] < w[1]),
            "{} years not strictly ascending",
            wc.country
        );
    }
}

#[test]
fn aggregate_covers_all_records() {
    let (records, win_counts) = base();
    let total: u32 = win_counts.iter().map(|wc| wc.wins).sum();
    assert_eq!(total, 22);
    assert_eq!(records.len(), 22);
}

#[test]
fn year_panel_reproduces_every_final_verbatim() {
    let (records, win_counts) = base();

    for record in &records {
        let selection = Selection {
            country: None,
            year: Some(record.year),
        };
        let out = render(&records, &win_counts, &selection);
        let panel = out.year_panel.expect("every dataset year has a panel");

        assert_eq!(panel.winner, record.winner);
        assert_eq!(panel.runner_up, record.runner_up);
        assert_eq!(panel.score, record.score);
    }
}

#[test]
fn both_filters_apply_independently() {
    let (records, win_counts) = base();
    let selection = Selection {
        country: Some("Uruguay".to_string()),
        year: Some(2018),
    };
    let out = render(&records, &win_counts, &selection);

    // Selecting France's 2018 final does not constrain the Uruguay panel.
    let country = out.country_panel.unwrap();
    assert_eq!(country.years, vec![1930, 1950]);
    let year = out.year_panel.unwrap();
    assert_eq!(year.winner, "France");
    assert_eq!(out.map.highlight.unwrap().code, "URY");
}
