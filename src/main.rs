//! Forklore - Restaurant Rating Aggregation
//!
//! Looks a place up on every configured review site and prints one rating
//! card per site.

use anyhow::{bail, Result};
use clap::Parser;
use forklore::card::{self, ScoreColor, SegmentFill};
use forklore::config::Config;
use forklore::loader::{self, RatingOutcome};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Place to search for
    query: String,

    /// Search location as "lat,lon"
    #[arg(short, long, default_value = "40.7306,-73.9866")]
    location: String,

    /// Override the default (reference) provider
    #[arg(short, long)]
    provider: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_location(location: &str) -> Result<(f64, f64)> {
    let Some((lat, lon)) = location.split_once(',') else {
        bail!("Location must look like \"40.7306,-73.9866\"");
    };
    Ok((lat.trim().parse()?, lon.trim().parse()?))
}

/// Render one rating card as terminal text.
fn render_card(outcome: &RatingOutcome) -> String {
    let mut lines = Vec::new();
    lines.push(format!("── {} ──", outcome.info.name));

    let Some(place) = &outcome.place else {
        lines.push(outcome.message.clone());
        return lines.join("\n");
    };

    match place.score {
        Some(score) => {
            let percentage =
                card::score_percentage(place, &outcome.info).unwrap_or_default();
            lines.push(format!(
                "{} {:.1}/{}  {}",
                color_glyph(card::score_color(percentage)),
                score,
                outcome.info.total_score,
                render_bar(percentage)
            ));
        }
        None => lines.push("Unrated".to_string()),
    }

    if let Some(tier) = place.price {
        lines.push(card::price_label(tier));
    }
    if let Some(n) = place.num_of_scores {
        lines.push(format!("{} {}", card::reviewer_label(n), outcome.info.name));
    }
    if let Some(distance) = card::formatted_distance(place.distance) {
        lines.push(distance);
    }
    if let Some(url) = &place.url {
        lines.push(url.clone());
    }

    lines.join("\n")
}

fn render_bar(percentage: f64) -> String {
    card::bar_segments(percentage)
        .iter()
        .map(|fill| match fill {
            SegmentFill::Full => '█',
            SegmentFill::Partial(f) if *f >= 0.5 => '▌',
            _ => '░',
        })
        .collect()
}

fn color_glyph(color: ScoreColor) -> &'static str {
    match color {
        ScoreColor::Red => "🔴",
        ScoreColor::Orange => "🟠",
        ScoreColor::Yellow => "🟡",
        ScoreColor::Green => "🟢",
        ScoreColor::Gray => "⚪",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🍴 Forklore v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load()?;
    if let Some(provider) = args.provider {
        config.default_provider = provider;
    }

    let (latitude, longitude) = parse_location(&args.location)?;
    let outcomes = loader::fetch_ratings(&config, &args.query, latitude, longitude).await?;

    for outcome in &outcomes {
        println!("{}\n", render_card(outcome));
    }

    Ok(())
}
