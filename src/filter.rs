use chrono::Datelike;

use crate::model::GameRecord;

/// Inclusive rating bounds. Built through [`RatingRange::new`] so `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

impl RatingRange {
    pub fn new(a: f64, b: f64) -> Self {
        if a > b {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }
}

/// Inclusive release-year bounds; `None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearRange {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

/// Inclusive price bounds in dollars; no upper bound when `max` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

/// Conjunction of the active filters. A record with an absent value for a
/// filtered field never matches that filter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameFilter {
    pub rating: Option<RatingRange>,
    pub release: Option<YearRange>,
    pub price: Option<PriceRange>,
}

impl GameFilter {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.release.is_none() && self.price.is_none()
    }

    pub fn matches(&self, game: &GameRecord) -> bool {
        if let Some(r) = self.rating {
            match game.rating {
                Some(v) if v >= r.min && v <= r.max => {}
                _ => return false,
            }
        }

        if let Some(p) = self.price {
            match game.cost {
                Some(v) if v >= p.min && p.max.map_or(true, |max| v <= max) => {}
                _ => return false,
            }
        }

        if let Some(y) = self.release {
            let Some(date) = game.release_date.date() else {
                return false;
            };
            let year = date.year();
            if y.from.is_some_and(|from| year < from) || y.to.is_some_and(|to| year > to) {
                return false;
            }
        }

        true
    }

    /// One-line description of the active filters, e.g.
    /// `rating 80–100, release years 2015–+∞`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(r) = self.rating {
            parts.push(format!("rating {}–{}", r.min, r.max));
        }
        if let Some(y) = self.release {
            let from = y.from.map(|v| v.to_string()).unwrap_or_else(|| "-∞".into());
            let to = y.to.map(|v| v.to_string()).unwrap_or_else(|| "+∞".into());
            parts.push(format!("release years {}–{}", from, to));
        }
        if let Some(p) = self.price {
            let max = p.max.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "∞".into());
            parts.push(format!("price {:.2}–{}", p.min, max));
        }
        parts.join(", ")
    }
}
