use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use regatta_scorer::{event, output, pipeline, ScoringError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_SCORING: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score each race and print the results
    Race {
        /// Event file (YAML, or JSON with a .json extension)
        event: PathBuf,
    },
    /// Score every race and print series standings
    Series {
        /// Event file (YAML, or JSON with a .json extension)
        event: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "regatta-scorer")]
#[command(about = "PHRF race results and low-point series standings", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print tab-separated values instead of a table
    #[arg(long, global = true, conflicts_with = "json")]
    tsv: bool,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();

    let path = match &cli.command {
        Commands::Race { event } | Commands::Series { event } => event.clone(),
    };

    let config = match event::load_event(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    debug!(
        races = config.races.len(),
        formula = ?config.scoring.formula,
        one_design = config.scoring.one_design,
        "loaded event"
    );

    if let Err(errors) = event::validate_event(&config) {
        eprintln!("Event errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = !cli.tsv && !cli.json && output::should_use_colors();

    let printed = match cli.command {
        Commands::Race { .. } => pipeline::score_event(&config).and_then(|races| {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&races)?);
            } else if cli.tsv {
                for race in &races {
                    println!("{}", output::format_race_tsv(race));
                }
            } else {
                let tables: Vec<String> = races
                    .iter()
                    .map(|race| output::format_race_table(race, use_colors))
                    .collect();
                println!("{}", tables.join("\n\n"));
            }
            Ok(())
        }),
        Commands::Series { .. } => pipeline::score_series(&config).and_then(|(_, standings)| {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else if cli.tsv {
                println!("{}", output::format_standings_tsv(&standings));
            } else {
                if let Some(name) = &config.name {
                    println!("{}", name);
                }
                println!("{}", output::format_standings_table(&standings, use_colors));
            }
            Ok(())
        }),
    };

    if let Err(e) = printed {
        if e.downcast_ref::<ScoringError>().is_some() {
            eprintln!("Scoring error: {:#}", e);
            std::process::exit(EXIT_SCORING);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_CONFIG);
    }

    debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
