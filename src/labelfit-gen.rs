use labelfit::{fit_timeline, FitConfig, FixedAdvanceMeasurer, SampleGenerator, Timeline};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_BOX_WIDTH: f32 = 160.0;

struct Config {
    num_events: usize,
    seed: u64,
    start_date: NaiveDate,
    output_file: Option<String>,
    share_url: Option<String>,
    preview_box_width: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_events: 20,
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
            output_file: None,
            share_url: None,
            preview_box_width: None,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-num_events" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-num_events requires an argument");
                }
                config.num_events = args[i].parse()?;
            }
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
                config.start_date = NaiveDate::parse_from_str(&args[i], "%Y-%m-%d")
                    .with_context(|| format!("Invalid start date: {}", args[i]))?;
            }
            "-share" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-share requires a URL argument");
                }
                config.share_url = Some(args[i].clone());
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-preview" => {
                // Optional box width
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    if let Ok(width) = args[i + 1].parse::<f32>() {
                        i += 1;
                        config.preview_box_width = Some(width);
                    } else {
                        config.preview_box_width = Some(DEFAULT_BOX_WIDTH);
                    }
                } else {
                    config.preview_box_width = Some(DEFAULT_BOX_WIDTH);
                }
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                tracing::warn!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Sample Timeline Generator");
    println!("Usage: labelfit-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -num_events <N>        Number of events (default: 20)");
    println!("  -seed <S>              Random seed (default: 42)");
    println!("  -start <YYYY-MM-DD>    Date of the first event (default: 2026-01-01)");
    println!("  -share <URL>           Share link stored with the timeline");
    println!("  -out <FILE>            Output file path (default: timeline.json)");
    println!("  -preview [WIDTH]       Print fitted labels for boxes of WIDTH px (default: 160)");
    println!("  -h, -help, --help      Show this help message");
}

fn print_preview(timeline: &Timeline, box_width: f32) {
    let measurer = FixedAdvanceMeasurer::default();
    let fit_config = FitConfig::default();
    let labels = fit_timeline(timeline, box_width, &measurer, &fit_config);

    for (event, label) in timeline.events.iter().zip(labels.iter()) {
        println!("{:>7}  {:<40} {}", event.date_marker(), label.display_text(), label.full_text());
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = parse_args()?;
    let mut generator =
        SampleGenerator::with_config(config.num_events, config.seed, config.start_date);
    if let Some(share_url) = &config.share_url {
        generator = generator.with_share_url(share_url.clone());
    }
    let timeline = generator.generate();

    let output_path = config
        .output_file
        .clone()
        .unwrap_or_else(|| "timeline.json".to_string());
    timeline.save(Path::new(&output_path))?;

    if config.output_file.is_none() {
        println!("Timeline written to: {}", output_path);
    }

    if let Some(box_width) = config.preview_box_width {
        print_preview(&timeline, box_width);
    }

    Ok(())
}
