use clap::{Parser, Subcommand};
use simple_docs::content::{CmarkConverter, FrontMatterParser};
use simple_docs::{config, generate, output, scan};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simple-docs")]
#[command(about = "Static site generator for documentation")]
#[command(long_about = "\
Static site generator for documentation

Your filesystem is the data source. Top-level directories become sidebar
sections, nested directories become collapsible groups, and markdown files
become pages.

Source structure:

  docs-src/
  ├── config.toml                  # Site config (optional)
  ├── assets/                      # Copied verbatim to the output root
  ├── getting-started/             # Section
  │   ├── install.md               # Page
  │   └── quickstart.md
  ├── guides/
  │   ├── faq.md
  │   └── setup/                   # Subsection (nested sidebar group)
  │       ├── basic.md
  │       └── advanced.md
  ├── resources/
  │   └── github.md                # URL-only body → external sidebar link
  └── .drafts/                     # Hidden = ignored

Front matter (optional):

  ---
  title: Installation              # Default: from filename (install → \"Install\")
  order: 1                         # Default: after every ordered page
  ---

Run 'simple-docs gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Documentation source directory
    #[arg(long, default_value = "docs-src", global = true)]
    source: PathBuf,

    /// Output directory (emptied on build)
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log progress at debug level (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the source tree and generate the HTML site
    Build,
    /// Validate the source tree without writing anything
    Check,
    /// Print the scanned documents and navigation model as JSON
    Scan,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build => {
            let site_config = scan::load_site_config(&cli.source)?;
            init_thread_pool(&site_config.processing);

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let site = scan::scan_with(
                &cli.source,
                site_config,
                &FrontMatterParser,
                &CmarkConverter,
            )?;
            output::print_scan_output(&site, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let summary = generate::generate(&site, &cli.source, &cli.output)?;
            output::print_generate_output(&summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = scan::scan(&cli.source)?;
            output::print_scan_output(&site, &cli.source);
            println!("==> Content is valid");
        }
        Command::Scan => {
            let site = scan::scan(&cli.source)?;
            println!("{}", serde_json::to_string_pretty(&site)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; config can only lower it.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    tracing::debug!(threads, "render workers");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
