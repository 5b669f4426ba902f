use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::parser::fields::{self, Field};

/// Release date of a game, or the literal `Unreleased` when the row carried
/// no usable timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDate {
    Released(NaiveDate),
    Unreleased,
}

impl ReleaseDate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            ReleaseDate::Released(d) => Some(*d),
            ReleaseDate::Unreleased => None,
        }
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseDate::Released(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            ReleaseDate::Unreleased => f.write_str("Unreleased"),
        }
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One game row. Numeric fields are `None` when the source value was missing
/// or unparseable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub cost: Option<f64>,
    pub rating: Option<f64>,
    pub release_date: ReleaseDate,
    pub peak_players: Option<f64>,
    pub revenue_estimate: Option<f64>,
}

impl GameRecord {
    /// Build a record from a row's collected `data-sort` values.
    ///
    /// Returns `None` when the row has fewer values than the field table
    /// needs. Individual field failures never reject the row.
    pub fn from_values(id: &str, title: &str, values: &[&str]) -> Option<GameRecord> {
        if values.len() < fields::MIN_VALUES {
            return None;
        }

        let cost = fields::value_at(values, Field::Price).and_then(fields::parse_price);
        let rating = fields::value_at(values, Field::Rating).and_then(fields::parse_rating);
        let release_date = fields::value_at(values, Field::Released)
            .map(fields::parse_release)
            .unwrap_or(ReleaseDate::Unreleased);
        let peak_players =
            fields::value_at(values, Field::PeakPlayers).and_then(fields::parse_peak_players);

        Some(GameRecord {
            id: id.to_string(),
            title: title.to_string(),
            cost,
            rating,
            release_date,
            peak_players,
            revenue_estimate: fields::revenue_estimate(cost, peak_players),
        })
    }
}

/// Records extracted from one document, keyed by the page's listing name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub name: String,
    pub records: Vec<GameRecord>,
}
