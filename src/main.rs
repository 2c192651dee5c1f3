//! Quotery main entry point
//!
//! This is the command-line interface for the Quotery quotes crawler.

use clap::Parser;
use quotery::config::load_config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quotery: a two-phase crawler for paginated quote sites
///
/// Quotery walks a site's listing pages one by one, then fetches every
/// discovered author profile concurrently. Results are exported as JSON
/// files that can be seeded into a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "quotery")]
#[command(version = "0.1.0")]
#[command(about = "A two-phase crawler for paginated quote sites", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching anything
    #[arg(long, conflicts_with_all = ["seed", "stats"])]
    dry_run: bool,

    /// Seed the database from previously exported JSON files and exit
    #[arg(long, conflicts_with_all = ["dry_run", "stats"])]
    seed: bool,

    /// Show record counts from the database and exit
    #[arg(long, conflicts_with_all = ["dry_run", "seed"])]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config)?;
    } else if cli.seed {
        handle_seed(&config)?;
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_crawl(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quotery=info,warn"),
            1 => EnvFilter::new("quotery=debug,info"),
            2 => EnvFilter::new("quotery=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &quotery::config::Config) -> anyhow::Result<()> {
    use quotery::crawl::DEFAULT_USER_AGENT;

    println!("=== Quotery Dry Run ===\n");

    println!("Crawl Target:");
    println!("  Base URL: {}", config.crawl.base_url);
    println!("  Author base URL: {}", config.crawl.author_base_url);
    println!(
        "  User agent: {}",
        config
            .crawl
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT)
    );

    println!("\nOutput:");
    println!("  Quotes: {}", config.output.quotes_path);
    println!("  Authors: {}", config.output.authors_path);
    println!("  Database: {}", config.output.database_path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would start pagination at {}", config.crawl.base_url);

    Ok(())
}

/// Handles the --seed mode: loads the JSON exports into the database
fn handle_seed(config: &quotery::config::Config) -> anyhow::Result<()> {
    use quotery::storage::{open_store, seed_store};
    use std::path::Path;

    println!("Database: {}\n", config.output.database_path);

    let mut store = open_store(Path::new(&config.output.database_path))?;
    let report = seed_store(
        &mut store,
        Path::new(&config.output.quotes_path),
        Path::new(&config.output.authors_path),
    )?;

    println!(
        "✓ Seeded {} authors and {} quotes",
        report.authors_inserted, report.quotes_inserted
    );
    if report.quotes_unlinked > 0 {
        println!(
            "  {} quotes have no matching author",
            report.quotes_unlinked
        );
    }

    Ok(())
}

/// Handles the --stats mode: shows record counts from the database
fn handle_stats(config: &quotery::config::Config) -> anyhow::Result<()> {
    use quotery::output::{load_store_stats, print_store_stats};
    use quotery::storage::open_store;
    use std::path::Path;

    println!("Database: {}\n", config.output.database_path);

    // Open the database
    let store = open_store(Path::new(&config.output.database_path))?;

    // Load statistics
    let stats = load_store_stats(&store)?;

    // Print statistics
    print_store_stats(&stats);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &quotery::config::Config) -> anyhow::Result<()> {
    use quotery::crawl::run_crawl;
    use quotery::output::write_records;
    use std::path::Path;

    match run_crawl(config).await {
        Ok(report) => {
            write_records(Path::new(&config.output.quotes_path), &report.quotes)?;
            tracing::info!(
                "Saved {} quotes to {}",
                report.quotes.len(),
                config.output.quotes_path
            );

            write_records(Path::new(&config.output.authors_path), &report.authors)?;
            tracing::info!(
                "Saved {} authors to {}",
                report.authors.len(),
                config.output.authors_path
            );

            tracing::info!("Execution time: {:?}", report.elapsed);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
