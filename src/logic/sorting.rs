//! Sorting comparison logic
//!
//! Pure comparator for result records. Keys are case-folded and compared
//! with natural ordering so that digit runs ("2/4" vs "10/4", entry
//! times, years) order the way a reader expects instead of bytewise.
//! Ties keep their relative order; callers sort with the stable
//! `sort_by`.

use crate::api::ResultRecord;
use crate::logic::columns::Column;
use std::cmp::Ordering;

/// Compare two records by the given column and direction.
pub fn compare_records(
    a: &ResultRecord,
    b: &ResultRecord,
    column: Column,
    ascending: bool,
) -> Ordering {
    let key_a = column.sort_key(a);
    let key_b = column.sort_key(b);

    let result = natord::compare(&key_a, &key_b);

    if ascending {
        result
    } else {
        result.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(verein: &str, nachname: &str) -> ResultRecord {
        ResultRecord {
            verein: Some(verein.to_string()),
            nachname: Some(nachname.to_string()),
            ..ResultRecord::default()
        }
    }

    #[test]
    fn ascending_orders_by_key() {
        let a = record("Aachen", "X");
        let b = record("Berlin", "Y");
        assert_eq!(compare_records(&a, &b, Column::Verein, true), Ordering::Less);
        assert_eq!(
            compare_records(&b, &a, Column::Verein, true),
            Ordering::Greater
        );
    }

    #[test]
    fn descending_reverses() {
        let a = record("Aachen", "X");
        let b = record("Berlin", "Y");
        assert_eq!(
            compare_records(&a, &b, Column::Verein, false),
            Ordering::Greater
        );
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let a = record("aachen", "X");
        let b = record("AACHEN", "Y");
        assert_eq!(
            compare_records(&a, &b, Column::Verein, true),
            Ordering::Equal
        );
    }

    #[test]
    fn missing_fields_sort_as_empty_string() {
        let a = ResultRecord::default();
        let b = record("Berlin", "Y");
        assert_eq!(compare_records(&a, &b, Column::Verein, true), Ordering::Less);
        assert_eq!(
            compare_records(&a, &ResultRecord::default(), Column::Verein, true),
            Ordering::Equal
        );
    }

    #[test]
    fn digit_runs_order_numerically() {
        let mut a = ResultRecord::default();
        a.jahrgang = Some("9".to_string());
        let mut b = ResultRecord::default();
        b.jahrgang = Some("10".to_string());
        assert_eq!(
            compare_records(&a, &b, Column::Jahrgang, true),
            Ordering::Less
        );
    }
}
