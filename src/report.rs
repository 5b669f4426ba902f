use std::fmt::Write;

use crate::filter::GameFilter;
use crate::model::GameRecord;
use crate::stats::{ListingStats, Metric, StatKind};

const NAME_WIDTH: usize = 25;
const PREVIEW_NAMES: usize = 10;

/// `N/A` for absent values, otherwise `1,234.50` (or `$1,234.50`).
pub fn fmt_value(value: Option<f64>, money: bool) -> String {
    match value {
        Some(v) if v >= 0.0 => {
            let body = group_thousands(&format!("{:.2}", v));
            if money {
                format!("${}", body)
            } else {
                body
            }
        }
        _ => "N/A".to_string(),
    }
}

fn group_thousands(fixed: &str) -> String {
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed, ""));
    let mut out = String::with_capacity(fixed.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

pub fn render_listing_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    let mut out = format!("Loaded {} engines.\n", names.len());
    for name in names.iter().take(PREVIEW_NAMES) {
        let _ = writeln!(out, "  - {}", name);
    }
    if names.len() > PREVIEW_NAMES {
        out.push_str("  ...\n");
    }
    out
}

pub fn render_stats(stats: &ListingStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Engine: {}", stats.name);
    let _ = writeln!(out, "Games counted: {}\n", stats.count);

    for (i, metric) in Metric::ALL.iter().enumerate() {
        let s = stats.summary(*metric);
        let money = metric.is_money();
        let label = metric.label();
        let _ = writeln!(out, "{:<18}{}", format!("Avg {}:", label), fmt_value(s.avg, money));
        let _ = writeln!(out, "{:<18}{}", format!("Max {}:", label), fmt_value(s.max, money));
        if i + 1 < Metric::ALL.len() {
            out.push('\n');
        }
    }
    out
}

pub fn render_comparison(stats: &[ListingStats], kind: StatKind) -> String {
    let prefix = kind.label();
    let rule = "-".repeat(95);
    let mut out = String::new();

    let _ = writeln!(out, "Engine comparison ({} values):", prefix.to_lowercase());
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "{:<25} {:>6} {:>10} {:>12} {:>14} {:>18}",
        "Engine",
        "Games",
        format!("{} $", prefix),
        format!("{} Rating", prefix),
        format!("{} Players", prefix),
        format!("{} Revenue", prefix),
    );
    let _ = writeln!(out, "{}", rule);

    for s in stats {
        let _ = writeln!(
            out,
            "{:<25} {:>6} {:>10} {:>12} {:>14} {:>18}",
            truncate(&s.name, NAME_WIDTH),
            s.count,
            fmt_value(s.value(Metric::Cost, kind), true),
            fmt_value(s.value(Metric::Rating, kind), false),
            fmt_value(s.value(Metric::PeakPlayers, kind), false),
            fmt_value(s.value(Metric::Revenue, kind), true),
        );
    }
    out
}

pub fn render_filtered(filter: &GameFilter, hits: &[(&str, &GameRecord)]) -> String {
    if filter.is_empty() {
        return "No active filters. Set a rating, release year, or price filter.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Active filters: {}", filter.describe());
    let _ = writeln!(out, "{}", "-".repeat(80));

    if hits.is_empty() {
        out.push_str("No games found matching the current filter combination.\n");
        return out;
    }

    for (listing, g) in hits {
        let _ = writeln!(
            out,
            "[{}] {} (ID {}) – rating {}, price {}, release {}",
            listing,
            g.title.trim(),
            g.id,
            fmt_value(g.rating, false),
            fmt_value(g.cost, true),
            g.release_date,
        );
    }
    out
}

pub fn render_games(name: &str, games: &[GameRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} games)", name, games.len());
    let _ = writeln!(
        out,
        "{:>9} | {:<30} | {:>9} | {:>7} | {:<10} | {:>10}",
        "ID", "Title", "Price", "Rating", "Release", "Peak"
    );
    let _ = writeln!(out, "{}", "-".repeat(92));
    for g in games {
        let _ = writeln!(
            out,
            "{:>9} | {:<30} | {:>9} | {:>7} | {:<10} | {:>10}",
            g.id,
            truncate(&g.title, 30),
            fmt_value(g.cost, true),
            fmt_value(g.rating, false),
            g.release_date.to_string(),
            fmt_value(g.peak_players, false),
        );
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PriceRange;
    use crate::model::ReleaseDate;
    use crate::stats::Summary;

    #[test]
    fn formats_values() {
        assert_eq!(fmt_value(None, false), "N/A");
        assert_eq!(fmt_value(Some(-1.0), true), "N/A");
        assert_eq!(fmt_value(Some(0.0), true), "$0.00");
        assert_eq!(fmt_value(Some(9995.0), true), "$9,995.00");
        assert_eq!(fmt_value(Some(1234567.891), false), "1,234,567.89");
        assert_eq!(fmt_value(Some(87.0), false), "87.00");
    }

    #[test]
    fn stats_block_shows_unknowns() {
        let s = ListingStats {
            name: "Godot Engine".into(),
            count: 3,
            cost: Summary::default(),
            rating: Summary { avg: Some(90.0), max: Some(96.12) },
            peak_players: Summary::default(),
            revenue: Summary::default(),
        };
        let text = render_stats(&s);
        assert!(text.starts_with("Engine: Godot Engine\nGames counted: 3\n"));
        assert!(text.contains("Avg price:        N/A"));
        assert!(text.contains("Max rating:       96.12"));
    }

    #[test]
    fn comparison_truncates_long_names() {
        let s = ListingStats::compute(&"X".repeat(40), &[]);
        let table = render_comparison(&[s], StatKind::Max);
        assert!(table.starts_with("Engine comparison (max values):"));
        assert!(table.contains(&"X".repeat(25)));
        assert!(!table.contains(&"X".repeat(26)));
    }

    #[test]
    fn filtered_messages() {
        assert!(render_filtered(&GameFilter::default(), &[]).starts_with("No active filters"));

        let f = GameFilter {
            price: Some(PriceRange { min: 1.0, max: None }),
            ..Default::default()
        };
        assert!(render_filtered(&f, &[]).contains("No games found"));

        let g = GameRecord {
            id: "42".into(),
            title: "Answer".into(),
            cost: Some(4.2),
            rating: None,
            release_date: ReleaseDate::Unreleased,
            peak_players: None,
            revenue_estimate: None,
        };
        let text = render_filtered(&f, &[("Engine", &g)]);
        assert!(text.contains("[Engine] Answer (ID 42) – rating N/A, price $4.20, release Unreleased"));
    }

    #[test]
    fn name_preview_elides_after_ten() {
        let names: Vec<String> = (0..12).map(|i| format!("E{}", i)).collect();
        let text = render_listing_names(names.iter().map(String::as_str));
        assert!(text.starts_with("Loaded 12 engines."));
        assert!(text.ends_with("  ...\n"));
        assert!(!text.contains("E10"));
    }
}
