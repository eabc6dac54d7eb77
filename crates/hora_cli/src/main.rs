//! Command-line front end for Vimshottari dasha timelines.

use clap::{Parser, Subcommand};

use hora_dasha::nakshatra::nakshatra_from_longitude;
use hora_dasha::report::{date_string, natural_duration, snapshot_report, timeline_report};
use hora_dasha::vimshottari::{
    DashaSnapshot, DashaTimeline, TimelineConfig, birth_balance, graha_years, snapshot_for_birth,
    timeline_for_birth,
};
use hora_time::UtcTime;

#[derive(Parser)]
#[command(name = "hora", about = "Vimshottari dasha timelines from birth data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate a sidereal longitude on the 27-nakshatra wheel
    Nakshatra {
        /// Sidereal longitude in degrees
        #[arg(long)]
        lon: f64,
    },
    /// Opening Mahadasha balance for the Moon's longitude at birth
    Balance {
        /// Moon's sidereal longitude at birth, degrees
        #[arg(long)]
        lon: f64,
    },
    /// Full dasha timeline for a birth
    Timeline {
        /// Birth instant, UTC (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Moon's sidereal longitude at birth, degrees
        #[arg(long)]
        moon: f64,
        /// Levels to build: 1 Mahadasha, 2 Antardasha, 3 Pratyantardasha
        #[arg(long, default_value = "3")]
        depth: u8,
        /// Number of 120-year cycles to chain
        #[arg(long, default_value = "1")]
        cycles: u8,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Periods active at a given instant
    Snapshot {
        /// Birth instant, UTC (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Moon's sidereal longitude at birth, degrees
        #[arg(long)]
        moon: f64,
        /// Query instant, UTC (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        at: String,
        /// Levels to resolve: 1 Mahadasha, 2 Antardasha, 3 Pratyantardasha
        #[arg(long, default_value = "3")]
        depth: u8,
        /// Number of 120-year cycles to search
        #[arg(long, default_value = "1")]
        cycles: u8,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Nakshatra { lon } => {
            if !lon.is_finite() {
                eprintln!("Error: longitude must be finite");
                std::process::exit(1);
            }
            let info = nakshatra_from_longitude(lon);
            println!("{} (nakshatra {}), pada {}", info.nakshatra.name(), info.number, info.pada);
            println!(
                "  {:.4} deg into the nakshatra, {:.1}% traversed",
                info.degrees_in_nakshatra,
                info.fraction * 100.0
            );
        }
        Commands::Balance { lon } => {
            let bal = birth_balance(lon).unwrap_or_else(|err| {
                eprintln!("Error: {err}");
                std::process::exit(1);
            });
            println!(
                "Moon in {} pada {}: {} mahadasha, {:.4} of {} years remaining ({:.1} days)",
                bal.nakshatra.name(),
                bal.pada,
                bal.lord.name(),
                bal.balance_years,
                graha_years(bal.lord),
                bal.balance_days()
            );
        }
        Commands::Timeline { birth, moon, depth, cycles, json } => {
            let birth_utc = parse_utc(&birth).unwrap_or_else(|err| {
                eprintln!("Error: {err}");
                std::process::exit(1);
            });
            let config = TimelineConfig { depth, cycles };
            let timeline = timeline_for_birth(&birth_utc, moon, &config).unwrap_or_else(|err| {
                eprintln!("Error: {err}");
                std::process::exit(1);
            });
            if json {
                print_json(&timeline_report(&timeline));
            } else {
                print_timeline(&timeline, &config);
            }
        }
        Commands::Snapshot { birth, moon, at, depth, cycles, json } => {
            let birth_utc = parse_utc(&birth).unwrap_or_else(|err| {
                eprintln!("Error: {err}");
                std::process::exit(1);
            });
            let query_utc = parse_utc(&at).unwrap_or_else(|err| {
                eprintln!("Error: {err}");
                std::process::exit(1);
            });
            let config = TimelineConfig { depth, cycles };
            let snapshot = snapshot_for_birth(&birth_utc, moon, &config, &query_utc)
                .unwrap_or_else(|err| {
                    eprintln!("Error: {err}");
                    std::process::exit(1);
                });
            if json {
                print_json(&snapshot_report(&snapshot));
            } else {
                print_snapshot(&snapshot);
            }
        }
    }
}

/// Parse `YYYY-MM-DD` or `YYYY-MM-DDThh:mm:ss[Z]` into a validated UTC instant.
fn parse_utc(s: &str) -> Result<UtcTime, String> {
    let s = s.trim();
    let (date_part, time_part) = match s.split_once('T') {
        Some((date, time)) => (date, time.trim_end_matches('Z')),
        None => (s, "00:00:00"),
    };

    let date_fields: Vec<&str> = date_part.split('-').collect();
    if date_fields.len() != 3 {
        return Err(format!("invalid date '{date_part}', expected YYYY-MM-DD"));
    }
    let time_fields: Vec<&str> = time_part.split(':').collect();
    if time_fields.len() != 3 {
        return Err(format!("invalid time '{time_part}', expected hh:mm:ss"));
    }

    let year: i32 =
        date_fields[0].parse().map_err(|_| format!("invalid year '{}'", date_fields[0]))?;
    let month: u32 =
        date_fields[1].parse().map_err(|_| format!("invalid month '{}'", date_fields[1]))?;
    let day: u32 =
        date_fields[2].parse().map_err(|_| format!("invalid day '{}'", date_fields[2]))?;
    let hour: u32 =
        time_fields[0].parse().map_err(|_| format!("invalid hour '{}'", time_fields[0]))?;
    let minute: u32 =
        time_fields[1].parse().map_err(|_| format!("invalid minute '{}'", time_fields[1]))?;
    let second: f64 =
        time_fields[2].parse().map_err(|_| format!("invalid second '{}'", time_fields[2]))?;

    let utc = UtcTime::new(year, month, day, hour, minute, second);
    utc.validate().map_err(|err| err.to_string())?;
    Ok(utc)
}

fn print_timeline(timeline: &DashaTimeline, config: &TimelineConfig) {
    println!(
        "Vimshottari timeline: birth {} (moon {:.4} deg, depth {}, {} cycle(s))",
        date_string(timeline.birth_jd),
        timeline.moon_longitude,
        config.depth,
        config.cycles
    );

    for level in &timeline.levels {
        let Some(first) = level.first() else { continue };
        println!();
        println!("{} ({} periods):", first.level.name(), level.len());

        let display_count = level.len().min(50);
        for period in &level[..display_count] {
            let (duration, unit) = natural_duration(period);
            println!(
                "  [{:>3}] {:<8} {} to {}  ({:.2} {})",
                period.order,
                period.graha.name(),
                date_string(period.start_jd),
                date_string(period.end_jd),
                duration,
                unit
            );
        }
        if level.len() > display_count {
            println!("  ... and {} more periods", level.len() - display_count);
        }
    }
}

fn print_snapshot(snapshot: &DashaSnapshot) {
    println!("Active periods at {}:", date_string(snapshot.query_jd));
    for (i, period) in snapshot.periods.iter().enumerate() {
        let (duration, unit) = natural_duration(period);
        println!(
            "{}{} {}: {} to {} ({:.2} {})",
            "  ".repeat(i + 1),
            period.graha.name(),
            period.level.name(),
            date_string(period.start_jd),
            date_string(period.end_jd),
            duration,
            unit
        );
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("Error: failed to serialize report: {err}");
            std::process::exit(1);
        }
    }
}
