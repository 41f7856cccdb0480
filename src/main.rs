use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_EMPTY: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank listings from a JSON records file
    Rank {
        /// Path to the extracted listing records (JSON array)
        file: PathBuf,

        /// How many listings to show (defaults to the configured rank_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Emit the top listings' normalized vectors as JSON for chart rendering
    Vectors {
        /// Path to the extracted listing records (JSON array)
        file: PathBuf,

        /// How many listings to include (defaults to the configured chart_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "flatrank")]
#[command(about = "Real-estate listing ranking CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/flatrank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { force } = &cli.command {
        match flatrank::config::write_default_config(config_path.clone(), *force) {
            Ok(path) => {
                println!("Config written to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config = match flatrank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = flatrank::scoring::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let (file, limit, as_vectors) = match cli.command {
        Commands::Rank { file, limit } => (file, limit.unwrap_or(config.rank_limit), false),
        Commands::Vectors { file, limit } => (file, limit.unwrap_or(config.chart_limit), true),
        Commands::Init { .. } => unreachable!("handled above"),
    };

    // Load the extracted records
    let records = match flatrank::input::load_records(&file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.verbose {
        eprintln!("Loaded {} records from {}", records.len(), file.display());
    }

    // Assemble the batch; bad records are dropped and reported
    let listings = flatrank::input::assemble(&records, &config);

    if cli.verbose {
        eprintln!(
            "Assembled {} of {} records into the batch",
            listings.len(),
            records.len()
        );
    }

    // Normalize and rank
    let set = match flatrank::scoring::ListingSet::new(listings) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Nothing to rank: {}", e);
            std::process::exit(EXIT_EMPTY);
        }
    };

    if as_vectors {
        let series = set.top_for_presentation(limit);
        match flatrank::output::format_vectors_json(&series) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        let use_colors = flatrank::output::should_use_colors();

        if cli.verbose {
            // Verbose mode: detailed per-listing output
            for listing in set.top(limit) {
                println!(
                    "{}",
                    flatrank::output::format_listing_detail(listing, use_colors)
                );
                println!();
            }
        } else {
            // Normal mode: ranked table
            let output = flatrank::output::format_ranked_table(&set.rank(limit), use_colors);
            println!("{}", output);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
