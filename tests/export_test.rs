//! Export behavior
//!
//! Every exporter serializes the complete result store in its current
//! sort order, never the visible page, and the temporary "show all rows"
//! table swap is undone even when the export fails halfway. CSV uses the
//! semicolon convention of German spreadsheet locales; the HTML handed
//! to the PDF converter must never contain unescaped cell text.

use startlist::api::{Abschnitt, HeatNumber, Lauf, ResultRecord};
use startlist::export::{self, csv::export_csv, pdf::export_pdf};
use startlist::model::results::ResultsView;
use startlist::table::TableDoc;

fn record(nachname: &str, verein: &str) -> ResultRecord {
    ResultRecord {
        nachname: Some(nachname.to_string()),
        verein: Some(verein.to_string()),
        ..ResultRecord::default()
    }
}

#[test]
fn test_csv_exports_every_page_not_just_the_visible_one() {
    let dir = tempfile::tempdir().unwrap();

    let mut view = ResultsView::loading();
    view.set_results((0..45).map(|i| record(&format!("N{i:03}"), "SV")).collect());
    view.next_page();
    assert_eq!(view.visible_rows().len(), 20);

    let path = export::with_full_table(&mut view, |records| {
        assert_eq!(records.len(), 45);
        export_csv(records, dir.path())
    })
    .unwrap();

    let text = std::fs::read_to_string(path).unwrap();
    // header + 45 rows, regardless of the page the user was on
    assert_eq!(text.lines().count(), 46);
    assert_eq!(view.current_page, 2);
    assert!(!view.show_all_rows);
}

#[test]
fn test_csv_export_follows_the_current_sort_order() {
    let dir = tempfile::tempdir().unwrap();

    let mut view = ResultsView::loading();
    view.set_results(vec![record("Zimmer", "SV"), record("Adler", "SV")]);
    view.sort(startlist::logic::columns::Column::Nachname);

    let path = export::with_full_table(&mut view, |records| export_csv(records, dir.path()))
        .unwrap();

    let text = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[1].contains("Adler"));
    assert!(lines[2].contains("Zimmer"));
}

#[test]
fn test_csv_uses_semicolons_and_quotes_every_field() {
    let dir = tempfile::tempdir().unwrap();

    let mut rec = record("Adler", "SV \"Neptun\"");
    rec.abschnitt = Some(Abschnitt {
        datum: Some("2026-06-14".to_string()),
        nummer: Some("1".to_string()),
    });

    let path = export_csv(&[rec], dir.path()).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("\"Verein\";\"Nachname\";\"Vorname\""));
    // embedded quotes double, the field stays quoted
    assert!(lines[1].contains("\"SV \"\"Neptun\"\"\""));
    assert!(lines[1].contains("\"2026-06-14\""));
}

#[test]
fn test_csv_renders_missing_fields_as_empty_strings() {
    let dir = tempfile::tempdir().unwrap();

    let path = export_csv(&[ResultRecord::default()], dir.path()).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[1], "\"\";\"\";\"\";\"\";\"\";\"\";\"\";\"\";\"\";\"\"");
}

#[test]
fn test_heat_label_appears_only_when_both_parts_present() {
    let full = ResultRecord {
        lauf: Some(Lauf {
            lauf_nr: Some(HeatNumber::Int(2)),
            lauf_gesamt: Some(HeatNumber::Int(4)),
        }),
        ..ResultRecord::default()
    };
    let half = ResultRecord {
        lauf: Some(Lauf {
            lauf_nr: Some(HeatNumber::Int(2)),
            lauf_gesamt: Some(HeatNumber::Int(0)),
        }),
        ..ResultRecord::default()
    };

    let doc = TableDoc::from_records("Suchergebnisse", &[full, half]);
    assert_eq!(doc.rows[0][6], "2/4");
    assert_eq!(doc.rows[1][6], "");
}

#[test]
fn test_html_export_escapes_cell_text() {
    let rec = record("<script>alert('x')</script>", "A & B \"Club\"");

    let doc = TableDoc::from_records("Suchergebnisse", &[rec]);
    let html = doc.to_html();

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
    assert!(html.contains("A &amp; B &quot;Club&quot;"));
}

#[test]
fn test_failed_pdf_conversion_restores_the_table() {
    let dir = tempfile::tempdir().unwrap();

    let mut view = ResultsView::loading();
    view.set_results(vec![record("Adler", "SV"); 3]);

    let outcome = export::with_full_table(&mut view, |records| {
        export_pdf(records, dir.path(), "converter-that-does-not-exist")
    });

    assert!(outcome.is_err());
    assert!(!view.show_all_rows);
    assert_eq!(view.visible_rows().len(), 3);
}

#[test]
fn test_table_swap_is_visible_during_the_export() {
    let mut view = ResultsView::loading();
    view.set_results((0..45).map(|i| record(&format!("N{i:03}"), "SV")).collect());

    export::with_full_table(&mut view, |records| {
        // while the exporter runs the renderer would show everything
        assert_eq!(records.len(), 45);
        Ok(())
    })
    .unwrap();
    assert!(!view.show_all_rows);
}
