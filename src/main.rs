use clap::{Parser, Subcommand, ValueEnum};
use proscenium::catalog::{Catalog, CatalogItem};
use proscenium::filter::{self, Criteria, Criterion};
use proscenium::generate::{self, BuildOptions};
use proscenium::logging::{self, LogConfig, LogFormat};
use proscenium::{config, output, site, types};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "proscenium")]
#[command(about = "Static site generator for theatre collectives")]
#[command(long_about = "\
Static site generator for theatre collectives

Events, gallery photos and featured performances are authored as TOML
catalogs. Every filter and every open detail view becomes its own page.

Content structure:

  content/
  ├── config.toml     # Site config (optional, unset keys keep stock values)
  ├── home.md         # About section of the home page (optional)
  ├── events.toml     # categories = [...] and [[items]] events
  ├── gallery.toml    # categories = [...] and [[items]] photos
  ├── videos.toml     # categories = [...] and [[items]] performances
  └── assets/         # Copied verbatim to the output root

Run 'proscenium gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Diagnostic log format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Collection {
    Events,
    Gallery,
    Videos,
}

impl Collection {
    fn name(self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Gallery => "gallery",
            Collection::Videos => "videos",
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Validate the content directory and print its inventory
    Check,
    /// Render every page into the output directory
    Build {
        /// Disable the page cache and rewrite every page
        #[arg(long)]
        no_cache: bool,
    },
    /// Run the filter engine over one catalog
    Query {
        collection: Collection,
        /// Category label or slug, or "All"
        #[arg(long, default_value = filter::ALL_LABEL)]
        category: String,
        /// Status label (Upcoming, Ongoing, Past), or "All"
        #[arg(long, default_value = filter::ALL_LABEL)]
        status: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(
        &LogConfig::from_verbosity(cli.verbose)
            .with_format(cli.log_format)
            .with_ansi(std::io::stderr().is_terminal()),
    )?;

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = site::load(&cli.source)?;
            output::print_load_output(&site);
            println!("==> Content is valid");
        }
        Command::Build { no_cache } => {
            println!("==> Loading {}", cli.source.display());
            let site = site::load(&cli.source)?;
            init_thread_pool(&site.config.processing);

            println!("==> Generating HTML → {}", cli.output.display());
            let options = BuildOptions {
                use_cache: !no_cache,
            };
            let report = generate::build(&site, &cli.source, &cli.output, options)?;
            output::print_generate_output(&report, &cli.output);
        }
        Command::Query {
            collection,
            category,
            status,
        } => {
            let site = site::load(&cli.source)?;
            let status = Criterion::status(&status)?;
            match collection {
                Collection::Events => run_query(collection, &site.events, &category, status),
                Collection::Gallery => run_query(collection, &site.gallery, &category, status),
                Collection::Videos => run_query(collection, &site.videos, &category, status),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn run_query<T: CatalogItem>(
    collection: Collection,
    catalog: &Catalog<T>,
    category: &str,
    status: Criterion<types::Status>,
) {
    let criteria = Criteria::all()
        .with_category(Criterion::category_in(catalog, category))
        .with_status(status);
    info!(?criteria, "querying {}", collection.name());
    let reset = format!("proscenium query {}", collection.name());
    let matches = filter::apply(catalog.items(), &criteria);
    output::print_query_output(&criteria, &matches, catalog.len(), &reset);
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores. The user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
