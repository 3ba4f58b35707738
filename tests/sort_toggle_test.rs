//! Sort behavior of the result view
//!
//! The header arrows in the UI reflect this state machine: sorting a new
//! column starts ascending, sorting the same column again flips the
//! direction, and the user's page position survives a re-sort. Records
//! with a missing field sort as the empty string, so they group at one
//! end instead of panicking or vanishing.

use startlist::api::{HeatNumber, Lauf, ResultRecord};
use startlist::logic::columns::Column;
use startlist::model::results::ResultsView;

fn record(vorname: &str, nachname: &str, verein: &str) -> ResultRecord {
    ResultRecord {
        vorname: Some(vorname.to_string()),
        nachname: Some(nachname.to_string()),
        verein: Some(verein.to_string()),
        ..ResultRecord::default()
    }
}

fn vereine(view: &ResultsView) -> Vec<&str> {
    view.all_results
        .iter()
        .map(|r| r.verein.as_deref().unwrap_or(""))
        .collect()
}

#[test]
fn test_new_column_sorts_ascending() {
    let mut view = ResultsView::loading();
    view.set_results(vec![
        record("Anna", "Zimmer", "SV Neptun"),
        record("Ben", "Adler", "SG Delphin"),
    ]);

    view.sort(Column::Nachname);

    assert_eq!(view.sort_column, Some(Column::Nachname));
    assert!(view.sort_ascending);
    assert_eq!(view.all_results[0].nachname.as_deref(), Some("Adler"));
}

#[test]
fn test_same_column_toggles_direction() {
    let mut view = ResultsView::loading();
    view.set_results(vec![
        record("Anna", "Zimmer", "SV Neptun"),
        record("Ben", "Adler", "SG Delphin"),
    ]);

    view.sort(Column::Nachname);
    view.sort(Column::Nachname);

    assert!(!view.sort_ascending);
    assert_eq!(view.all_results[0].nachname.as_deref(), Some("Zimmer"));

    // A third press flips back
    view.sort(Column::Nachname);
    assert!(view.sort_ascending);
    assert_eq!(view.all_results[0].nachname.as_deref(), Some("Adler"));
}

#[test]
fn test_switching_column_resets_to_ascending() {
    let mut view = ResultsView::loading();
    view.set_results(vec![
        record("Anna", "Zimmer", "SV Neptun"),
        record("Ben", "Adler", "SG Delphin"),
    ]);

    view.sort(Column::Nachname);
    view.sort(Column::Nachname);
    assert!(!view.sort_ascending);

    view.sort(Column::Verein);
    assert!(view.sort_ascending);
    assert_eq!(vereine(&view), vec!["SG Delphin", "SV Neptun"]);
}

#[test]
fn test_sort_is_case_insensitive() {
    let mut view = ResultsView::loading();
    view.set_results(vec![
        record("a", "x", "sv neptun"),
        record("b", "y", "SG Delphin"),
    ]);

    view.sort(Column::Verein);
    assert_eq!(vereine(&view), vec!["SG Delphin", "sv neptun"]);
}

#[test]
fn test_numeric_runs_sort_naturally() {
    // "10" must come after "9", not between "1" and "2"
    let mut view = ResultsView::loading();
    view.set_results(
        ["10", "2", "9", "1"]
            .iter()
            .map(|n| ResultRecord {
                bahn: Some(n.to_string()),
                ..ResultRecord::default()
            })
            .collect(),
    );

    view.sort(Column::Bahn);
    let bahnen: Vec<&str> = view
        .all_results
        .iter()
        .map(|r| r.bahn.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(bahnen, vec!["1", "2", "9", "10"]);
}

#[test]
fn test_missing_fields_sort_as_empty() {
    let mut view = ResultsView::loading();
    view.set_results(vec![
        record("Anna", "Zimmer", "SV Neptun"),
        ResultRecord::default(),
        record("Ben", "Adler", "SG Delphin"),
    ]);

    view.sort(Column::Verein);
    assert_eq!(vereine(&view), vec!["", "SG Delphin", "SV Neptun"]);

    view.sort(Column::Verein);
    assert_eq!(vereine(&view), vec!["SV Neptun", "SG Delphin", ""]);
}

#[test]
fn test_stable_sort_keeps_equal_rows_in_order() {
    let mut view = ResultsView::loading();
    view.set_results(vec![
        record("Anna", "Adler", "SV Neptun"),
        record("Ben", "Adler", "SV Neptun"),
        record("Carla", "Adler", "SV Neptun"),
    ]);

    view.sort(Column::Nachname);
    let vornamen: Vec<&str> = view
        .all_results
        .iter()
        .map(|r| r.vorname.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(vornamen, vec!["Anna", "Ben", "Carla"]);
}

#[test]
fn test_sorting_the_heat_column_uses_the_composite_label() {
    let heat = |nr: i64, gesamt: i64| ResultRecord {
        lauf: Some(Lauf {
            lauf_nr: Some(HeatNumber::Int(nr)),
            lauf_gesamt: Some(HeatNumber::Int(gesamt)),
        }),
        ..ResultRecord::default()
    };

    let mut view = ResultsView::loading();
    view.set_results(vec![heat(3, 4), heat(1, 4), heat(2, 4)]);

    view.sort(Column::Lauf);
    let labels: Vec<String> = view
        .all_results
        .iter()
        .map(|r| Column::Lauf.display_value(r))
        .collect();
    assert_eq!(labels, vec!["1/4", "2/4", "3/4"]);
}

#[test]
fn test_resorting_does_not_move_the_user_off_their_page() {
    let mut view = ResultsView::loading();
    view.set_results(
        (0..45)
            .map(|i| record(&format!("V{i:02}"), "N", "SV"))
            .collect(),
    );

    view.next_page();
    view.next_page();
    assert_eq!(view.current_page, 3);

    view.sort(Column::Vorname);
    assert_eq!(view.current_page, 3);
    assert_eq!(view.visible_rows().len(), 5);
}
