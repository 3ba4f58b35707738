//! Result table columns
//!
//! The ten display columns, their fixed order, and null-tolerant value
//! extraction from a record. Sorting, rendering and all three exporters
//! go through `display_value` so that a missing field is an empty string
//! everywhere.

use crate::api::ResultRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Verein,
    Nachname,
    Vorname,
    Datum,
    Abschnitt,
    Wettkampf,
    Lauf,
    Bahn,
    Jahrgang,
    Meldezeit,
}

impl Column {
    /// Display order; indices 0..9 are part of the sort contract.
    pub const ALL: [Column; 10] = [
        Column::Verein,
        Column::Nachname,
        Column::Vorname,
        Column::Datum,
        Column::Abschnitt,
        Column::Wettkampf,
        Column::Lauf,
        Column::Bahn,
        Column::Jahrgang,
        Column::Meldezeit,
    ];

    pub fn from_index(index: usize) -> Option<Column> {
        Column::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        Column::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Column::Verein => "Verein",
            Column::Nachname => "Nachname",
            Column::Vorname => "Vorname",
            Column::Datum => "Datum",
            Column::Abschnitt => "Abschnitt",
            Column::Wettkampf => "Wettkampf",
            Column::Lauf => "Lauf",
            Column::Bahn => "Bahn",
            Column::Jahrgang => "Jahrgang",
            Column::Meldezeit => "Meldezeit",
        }
    }

    /// The cell text for this column, empty string when the field (or its
    /// containing object) is absent.
    pub fn display_value(&self, record: &ResultRecord) -> String {
        let value = match self {
            Column::Verein => record.verein.clone(),
            Column::Nachname => record.nachname.clone(),
            Column::Vorname => record.vorname.clone(),
            Column::Datum => record.abschnitt.as_ref().and_then(|a| a.datum.clone()),
            Column::Abschnitt => record.abschnitt.as_ref().and_then(|a| a.nummer.clone()),
            Column::Wettkampf => record.wettkampf.as_ref().and_then(|w| w.nummer.clone()),
            Column::Lauf => record.lauf.as_ref().and_then(|l| l.label()),
            Column::Bahn => record.bahn.clone(),
            Column::Jahrgang => record.jahrgang.clone(),
            Column::Meldezeit => record.meldezeit.clone(),
        };
        value.unwrap_or_default()
    }

    /// Case-folded key used by the sort comparator.
    pub fn sort_key(&self, record: &ResultRecord) -> String {
        self.display_value(record).to_lowercase()
    }
}

/// One full display row in column order.
pub fn record_row(record: &ResultRecord) -> Vec<String> {
    Column::ALL.iter().map(|c| c.display_value(record)).collect()
}

/// Header labels in column order.
pub fn header_row() -> Vec<String> {
    Column::ALL.iter().map(|c| c.label().to_string()).collect()
}
