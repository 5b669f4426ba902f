use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use engine_catalog::filter::{GameFilter, PriceRange, RatingRange, YearRange};
use engine_catalog::stats::StatKind;
use engine_catalog::{report, settings, source, GameRecord, ListingCatalog};

#[derive(Parser)]
#[command(
    name = "engine_catalog",
    about = "Game statistics per engine from saved SteamDB technology pages"
)]
struct Cli {
    /// Folder with saved .htm/.html pages (overrides ENGINE_CATALOG_DATA_DIR)
    #[arg(short, long, global = true)]
    dir: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List loaded engines
    List,
    /// Averages and maxima for one engine
    Stats {
        name: String,
    },
    /// Side-by-side stats for several engines
    Compare {
        #[arg(required = true)]
        names: Vec<String>,
        /// Compare max values instead of averages
        #[arg(long)]
        max: bool,
    },
    /// Games across all engines matching rating / release year / price bounds
    Filter {
        #[arg(long, requires = "rating_max")]
        rating_min: Option<f64>,
        #[arg(long, requires = "rating_min")]
        rating_max: Option<f64>,
        #[arg(long)]
        year_from: Option<i32>,
        #[arg(long)]
        year_to: Option<i32>,
        #[arg(long)]
        price_min: Option<f64>,
        #[arg(long)]
        price_max: Option<f64>,
    },
    /// Every game of one engine, in page order
    Games {
        name: String,
    },
}

#[derive(Serialize)]
struct FilterHit<'a> {
    engine: &'a str,
    #[serde(flatten)]
    game: &'a GameRecord,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = settings::load()?;

    let dir: PathBuf = match cli.dir.as_deref() {
        Some(raw) => source::clean_dir_arg(raw),
        None => settings.data_dir.clone(),
    };
    let catalog = source::load_dir(&dir, settings.progress)?;
    if catalog.is_empty() {
        println!("{}", empty_catalog_output(&cli.command, cli.json, &dir));
        return Ok(());
    }

    let result = match cli.command {
        Commands::List => {
            if cli.json {
                print_json(&catalog.names().collect::<Vec<_>>())
            } else {
                print!("{}", report::render_listing_names(catalog.names()));
                Ok(())
            }
        }
        Commands::Stats { name } => match catalog.stats(&name) {
            Some(stats) if cli.json => print_json(&stats),
            Some(stats) => {
                print!("{}", report::render_stats(&stats));
                Ok(())
            }
            None => not_found(&name, cli.json),
        },
        Commands::Compare { names, max } => {
            if names.len() > settings.compare_limit && !cli.json {
                println!("Using first {} selected engines.", settings.compare_limit);
            }
            let stats = catalog.compare(&names, settings.compare_limit);
            if stats.is_empty() && !cli.json {
                println!("None of the selected engines were found.");
                return Ok(());
            }
            let kind = if max { StatKind::Max } else { StatKind::Avg };
            if cli.json {
                print_json(&stats)
            } else {
                print!("{}", report::render_comparison(&stats, kind));
                Ok(())
            }
        }
        Commands::Filter {
            rating_min,
            rating_max,
            year_from,
            year_to,
            price_min,
            price_max,
        } => {
            let filter = GameFilter {
                rating: rating_min.zip(rating_max).map(|(a, b)| RatingRange::new(a, b)),
                release: (year_from.is_some() || year_to.is_some()).then_some(YearRange {
                    from: year_from,
                    to: year_to,
                }),
                price: (price_min.is_some() || price_max.is_some()).then(|| PriceRange {
                    min: price_min.unwrap_or(0.0),
                    max: price_max,
                }),
            };
            run_filter(&catalog, &filter, cli.json)
        }
        Commands::Games { name } => match catalog.get(&name) {
            Some(games) if cli.json => print_json(&games),
            Some(games) => {
                print!("{}", report::render_games(&name, games));
                Ok(())
            }
            None => not_found(&name, cli.json),
        },
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn run_filter(catalog: &ListingCatalog, filter: &GameFilter, json: bool) -> Result<()> {
    let hits = catalog.filter(filter);
    if json {
        let rows: Vec<FilterHit> = hits
            .iter()
            .map(|&(engine, game)| FilterHit { engine, game })
            .collect();
        return print_json(&rows);
    }
    print!("{}", report::render_filtered(filter, &hits));
    Ok(())
}

/// What to print when the data folder holds no listing pages. JSON mode
/// prints the empty value of the command's normal output.
fn empty_catalog_output(command: &Commands, json: bool, dir: &Path) -> String {
    match (json, command) {
        (false, _) => format!("No engines found in {}.", dir.display()),
        (true, Commands::Stats { .. }) => "null".to_string(),
        (true, _) => "[]".to_string(),
    }
}

fn not_found(name: &str, json: bool) -> Result<()> {
    if json {
        println!("null");
    } else {
        println!("No engine named '{}'. Run 'list' to see loaded engines.", name);
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
