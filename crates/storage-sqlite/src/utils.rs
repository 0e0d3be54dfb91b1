//! Helpers shared by the repositories.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use daybook_core::journal::parse_amount;

/// Upper bound of bound parameters per `IN (...)` list.
///
/// SQLite rejects statements with more than `SQLITE_MAX_VARIABLE_NUMBER`
/// parameters (999 on older builds); the remaining headroom is left for the
/// other filters of the query.
pub const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

/// Splits `items` into slices small enough for one `IN (...)` query each.
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_PARAMS_CHUNK)
}

/// Amounts are stored as TEXT to keep their exact decimal representation.
pub fn amount_to_db(value: Option<Decimal>) -> Option<String> {
    value.map(|v| v.normalize().to_string())
}

/// Unreadable stored amounts are treated as not recorded.
pub fn amount_from_db(value: Option<&str>) -> Option<Decimal> {
    value.and_then(parse_amount)
}

pub fn date_from_db(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_chunk_for_sqlite_splits_at_limit() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(chunk_for_sqlite(&empty).count(), 0);

        let items: Vec<u32> = (0..(SQLITE_MAX_PARAMS_CHUNK as u32 * 2 + 1)).collect();
        let sizes: Vec<usize> = chunk_for_sqlite(&items).map(|c| c.len()).collect();
        assert_eq!(sizes, vec![SQLITE_MAX_PARAMS_CHUNK, SQLITE_MAX_PARAMS_CHUNK, 1]);
    }

    #[test]
    fn test_amount_text_round_trip() {
        assert_eq!(amount_to_db(Some(dec!(1500.50))), Some("1500.5".to_string()));
        assert_eq!(amount_from_db(Some("1500.5")), Some(dec!(1500.5)));
        assert_eq!(amount_from_db(Some("garbage")), None);
        assert_eq!(amount_to_db(None), None);
    }

    #[test]
    fn test_date_from_db() {
        assert_eq!(date_from_db("2026-01-05"), NaiveDate::from_ymd_opt(2026, 1, 5));
        assert_eq!(date_from_db("05/01/2026"), None);
    }
}
