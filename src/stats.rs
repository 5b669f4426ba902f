use serde::Serialize;

use crate::model::GameRecord;

/// Average and maximum over the usable values of one field. `None` means no
/// record had a usable value, which is distinct from a real zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl Summary {
    pub fn from_values(values: impl IntoIterator<Item = Option<f64>>) -> Summary {
        let usable: Vec<f64> = values
            .into_iter()
            .flatten()
            .filter(|v| *v >= 0.0)
            .collect();
        if usable.is_empty() {
            return Summary::default();
        }
        let sum: f64 = usable.iter().sum();
        Summary {
            avg: Some(sum / usable.len() as f64),
            max: usable.iter().copied().reduce(f64::max),
        }
    }

    pub fn get(&self, kind: StatKind) -> Option<f64> {
        match kind {
            StatKind::Avg => self.avg,
            StatKind::Max => self.max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cost,
    Rating,
    PeakPlayers,
    Revenue,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Cost,
        Metric::Rating,
        Metric::PeakPlayers,
        Metric::Revenue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Cost => "price",
            Metric::Rating => "rating",
            Metric::PeakPlayers => "peak players",
            Metric::Revenue => "est. revenue",
        }
    }

    pub fn is_money(self) -> bool {
        matches!(self, Metric::Cost | Metric::Revenue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatKind {
    #[default]
    Avg,
    Max,
}

impl StatKind {
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Avg => "Average",
            StatKind::Max => "Max",
        }
    }
}

/// Per-listing summary, recomputed on demand from the records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingStats {
    pub name: String,
    /// Raw record count, including records with absent fields.
    pub count: usize,
    pub cost: Summary,
    pub rating: Summary,
    pub peak_players: Summary,
    pub revenue: Summary,
}

impl ListingStats {
    pub fn compute(name: &str, records: &[GameRecord]) -> ListingStats {
        ListingStats {
            name: name.to_string(),
            count: records.len(),
            cost: Summary::from_values(records.iter().map(|r| r.cost)),
            rating: Summary::from_values(records.iter().map(|r| r.rating)),
            peak_players: Summary::from_values(records.iter().map(|r| r.peak_players)),
            revenue: Summary::from_values(records.iter().map(|r| r.revenue_estimate)),
        }
    }

    pub fn summary(&self, metric: Metric) -> &Summary {
        match metric {
            Metric::Cost => &self.cost,
            Metric::Rating => &self.rating,
            Metric::PeakPlayers => &self.peak_players,
            Metric::Revenue => &self.revenue,
        }
    }

    pub fn value(&self, metric: Metric, kind: StatKind) -> Option<f64> {
        self.summary(metric).get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReleaseDate;

    fn game(cost: Option<f64>, rating: Option<f64>, peak: Option<f64>) -> GameRecord {
        GameRecord {
            id: "1".into(),
            title: "t".into(),
            cost,
            rating,
            release_date: ReleaseDate::Unreleased,
            peak_players: peak,
            revenue_estimate: crate::parser::fields::revenue_estimate(cost, peak),
        }
    }

    #[test]
    fn averages_skip_absent_values() {
        let games = vec![
            game(Some(10.0), Some(80.0), Some(100.0)),
            game(None, Some(90.0), Some(300.0)),
            game(Some(20.0), None, None),
        ];
        let s = ListingStats::compute("Engine", &games);
        assert_eq!(s.count, 3);
        assert_eq!(s.cost.avg, Some(15.0));
        assert_eq!(s.cost.max, Some(20.0));
        assert_eq!(s.rating.avg, Some(85.0));
        assert_eq!(s.peak_players.max, Some(300.0));
        assert_eq!(s.revenue.avg, Some(1000.0));
        assert_eq!(s.revenue.max, Some(1000.0));
    }

    #[test]
    fn all_costs_absent_is_unknown_not_zero() {
        let games = vec![game(None, Some(50.0), Some(1.0)), game(None, None, None)];
        let s = ListingStats::compute("Engine", &games);
        assert_eq!(s.count, 2);
        assert_eq!(s.cost, Summary { avg: None, max: None });
        assert_eq!(s.revenue.avg, None);
    }

    #[test]
    fn zero_is_a_real_value() {
        let s = ListingStats::compute("Free", &[game(Some(0.0), None, Some(0.0))]);
        assert_eq!(s.cost.avg, Some(0.0));
        assert_eq!(s.revenue.max, Some(0.0));
    }

    #[test]
    fn empty_listing() {
        let s = ListingStats::compute("Nothing", &[]);
        assert_eq!(s.count, 0);
        for m in Metric::ALL {
            assert_eq!(s.value(m, StatKind::Avg), None);
            assert_eq!(s.value(m, StatKind::Max), None);
        }
    }

    #[test]
    fn negative_values_are_filtered() {
        let s = Summary::from_values([Some(-1.0), Some(4.0)]);
        assert_eq!(s.avg, Some(4.0));
    }
}
