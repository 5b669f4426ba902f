use chrono::DateTime;

use crate::model::ReleaseDate;

/// Semantic columns read out of a row's `data-sort` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Price,
    Rating,
    Released,
    PeakPlayers,
}

/// Position of each field counted from the end of the value list. Rows may
/// carry extra columns in front (discount, etc.) but never behind.
pub const FIELD_OFFSETS: [(Field, usize); 4] = [
    (Field::Price, 6),
    (Field::Rating, 5),
    (Field::Released, 4),
    (Field::PeakPlayers, 1),
];

/// Rows with fewer values than this are skipped.
pub const MIN_VALUES: usize = 6;

pub fn offset_from_end(field: Field) -> usize {
    FIELD_OFFSETS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, off)| *off)
        .unwrap_or(MIN_VALUES)
}

pub fn value_at<'a>(values: &[&'a str], field: Field) -> Option<&'a str> {
    let idx = values.len().checked_sub(offset_from_end(field))?;
    values.get(idx).copied()
}

/// Raw price is in cents.
pub fn parse_price(raw: &str) -> Option<f64> {
    parse_non_negative(raw).map(|cents| round2(cents / 100.0))
}

pub fn parse_rating(raw: &str) -> Option<f64> {
    parse_non_negative(raw)
}

pub fn parse_peak_players(raw: &str) -> Option<f64> {
    parse_non_negative(raw)
}

/// Epoch seconds to a UTC calendar date.
pub fn parse_release(raw: &str) -> ReleaseDate {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| ReleaseDate::Released(dt.date_naive()))
        .unwrap_or(ReleaseDate::Unreleased)
}

pub fn revenue_estimate(cost: Option<f64>, peak_players: Option<f64>) -> Option<f64> {
    match (cost, peak_players) {
        (Some(c), Some(p)) if c >= 0.0 && p >= 0.0 => Some(round2(c * p)),
        _ => None,
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn parse_non_negative(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() || t == "-" {
        return None;
    }
    t.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn offsets_read_from_the_end() {
        let six = ["1", "2", "3", "4", "5", "6"];
        assert_eq!(value_at(&six, Field::Price), Some("1"));
        assert_eq!(value_at(&six, Field::Rating), Some("2"));
        assert_eq!(value_at(&six, Field::Released), Some("3"));
        assert_eq!(value_at(&six, Field::PeakPlayers), Some("6"));

        let eight = ["x", "y", "1", "2", "3", "4", "5", "6"];
        assert_eq!(value_at(&eight, Field::Price), Some("1"));
        assert_eq!(value_at(&eight, Field::PeakPlayers), Some("6"));
    }

    #[test]
    fn too_few_values_has_no_price() {
        assert_eq!(value_at(&["1", "2"], Field::Price), None);
    }

    #[test]
    fn price_is_cents() {
        assert_eq!(parse_price("1999"), Some(19.99));
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price("250"), Some(2.5));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("-"), None);
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price("-100"), None);
        assert_eq!(parse_price("NaN"), None);
    }

    #[test]
    fn rating_passes_through_above_100() {
        assert_eq!(parse_rating("87"), Some(87.0));
        assert_eq!(parse_rating("104.2"), Some(104.2));
        assert_eq!(parse_rating("-1"), None);
        assert_eq!(parse_rating(" - "), None);
    }

    #[test]
    fn release_epoch() {
        assert_eq!(
            parse_release("1609459200"),
            ReleaseDate::Released(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
        );
        assert_eq!(parse_release("-"), ReleaseDate::Unreleased);
        assert_eq!(parse_release("1609459200.5"), ReleaseDate::Unreleased);
        assert_eq!(parse_release(""), ReleaseDate::Unreleased);
        assert_eq!(parse_release("99999999999999999"), ReleaseDate::Unreleased);
    }

    #[test]
    fn revenue_needs_both() {
        assert_eq!(revenue_estimate(Some(19.99), Some(500.0)), Some(9995.0));
        assert_eq!(revenue_estimate(Some(0.0), Some(500.0)), Some(0.0));
        assert_eq!(revenue_estimate(None, Some(500.0)), None);
        assert_eq!(revenue_estimate(Some(1.0), None), None);
    }
}
