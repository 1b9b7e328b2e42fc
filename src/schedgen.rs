//! Demo schedule generator.
//!
//! Writes a deterministic, seeded demo schedule to a JSON file that the
//! agenda viewer can open.

use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::env;
use std::path::PathBuf;

use ragenda::{demo_schedule, save_schedule, Schedule};

struct Config {
    seed: u64,
    week_start: NaiveDate,
    weeks: u32,
    output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let today = Local::now().date_naive();
        let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        Config {
            seed: 42,
            week_start: monday,
            weeks: 1,
            output_file: PathBuf::from("schedule.json"),
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-start" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-start requires a YYYY-MM-DD argument");
                }
                config.week_start = args[i].parse()?;
            }
            "-weeks" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-weeks requires an argument");
                }
                config.weeks = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = PathBuf::from(&args[i]);
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                anyhow::bail!("Unknown argument: {other} (use -help for usage)");
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("agenda-schedgen - generate a demo schedule file");
    println!();
    println!("Usage: agenda-schedgen [options]");
    println!();
    println!("Options:");
    println!("  -seed N        PRNG seed (default 42)");
    println!("  -start DATE    first week's Monday, YYYY-MM-DD (default: current week)");
    println!("  -weeks N       number of weeks to generate (default 1)");
    println!("  -out FILE      output path (default schedule.json)");
}

/// Merges per-week generated schedules, reassigning ids so they stay unique.
fn generate(config: &Config) -> Schedule {
    let mut combined = Schedule::new(Some("Demo schedule".to_string()));
    let mut next_id: u64 = 1;

    for week in 0..config.weeks {
        let start = config.week_start + Duration::weeks(week as i64);
        let mut weekly = demo_schedule(config.seed.wrapping_add(week as u64), start);
        for event in &mut weekly.events {
            event.id = next_id;
            next_id += 1;
        }
        combined.events.extend(weekly.events);
    }

    combined
}

fn main() -> Result<()> {
    env_logger::init();

    let config = parse_args()?;
    let schedule = generate(&config);

    save_schedule(&config.output_file, &schedule)?;
    log::info!(
        "Wrote {} events to {}",
        schedule.events.len(),
        config.output_file.display()
    );
    println!(
        "Generated {} events covering {} week(s) starting {} -> {}",
        schedule.events.len(),
        config.weeks,
        config.week_start,
        config.output_file.display()
    );

    Ok(())
}
