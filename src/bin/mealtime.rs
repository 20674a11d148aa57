use clap::{Parser, Subcommand};
use mealtime::Catalog;
use mealtime::config::Config;
use mealtime::credentials::Credentials;
use mealtime::errors::CatalogError;
use mealtime::query::Pager;
use mealtime::recipe::Recipe;
use mealtime::transport::{check_credentials, login_failure_message};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mealtime", about = "Recipe catalogue client for the Atlas Data API")]
struct Cli {
    /// Explicit config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level: error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Probe the backend with the configured credentials.
    Check,
    /// List the distinct values of a field.
    Distinct { field: String },
    /// Browse recipes by exact field match; no field means all recipes.
    Browse {
        #[arg(long, default_value = "")]
        field: String,
        #[arg(long, default_value = "")]
        value: String,
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// Full-text search across all fields.
    Search {
        term: String,
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// Insert a recipe from a JSON file.
    Insert { file: PathBuf },
    /// Update an existing recipe from a JSON file.
    Update { id: String, file: PathBuf },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let level = cli.log_level.parse().unwrap_or(log::LevelFilter::Warn);
    if let Err(e) = mealtime::logger::init(level) {
        eprintln!("logger init failed: {e}");
    }
    let config = Config::load_from(cli.config.as_deref());
    if let Err(e) = run(cli.command, &config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// The password never comes from a file; see `config` module docs.
fn session_credentials(config: &Config) -> Result<Credentials, CatalogError> {
    let password = std::env::var("MEALTIME_PASSWORD").unwrap_or_default();
    config.credentials(&password).ok_or(CatalogError::NotConfigured)
}

async fn run(command: Command, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Check => {
            let credentials = session_credentials(config)?;
            let status =
                check_credentials(&credentials, &config.base_url, config.timeout_secs).await?;
            if status.is_success() {
                println!("Login OK");
            } else {
                println!("{}", login_failure_message(status));
            }
        }
        Command::Distinct { field } => {
            let catalog = Catalog::with_config(session_credentials(config)?, config)?;
            for value in catalog.distinct_values(&field).await? {
                println!("{value}");
            }
        }
        Command::Browse { field, value, page } => {
            let catalog = Catalog::with_config(session_credentials(config)?, config)?;
            let mut pager = Pager::new(catalog, config.results_per_page);
            pager.navigate(&field, &value).await?;
            if page > 1 {
                pager.go_to_page(page).await?;
            }
            print_page(&pager);
        }
        Command::Search { term, page } => {
            let catalog = Catalog::with_config(session_credentials(config)?, config)?;
            let mut pager = Pager::new(catalog, config.results_per_page);
            if pager.search(&term).await?.is_none() {
                println!("empty search term");
                return Ok(());
            }
            if page > 1 {
                pager.go_to_page(page).await?;
            }
            print_page(&pager);
        }
        Command::Insert { file } => {
            let recipe: Recipe = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            let catalog = Catalog::with_config(session_credentials(config)?, config)?;
            let id = catalog.insert(&recipe).await?;
            println!("inserted {id}");
        }
        Command::Update { id, file } => {
            let recipe: Recipe = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            let catalog = Catalog::with_config(session_credentials(config)?, config)?;
            catalog.update(&recipe, &id).await?;
            println!("updated {id}");
        }
    }
    Ok(())
}

fn print_page<S>(pager: &Pager<S>) {
    let page = pager.current();
    for recipe in &page.recipes {
        println!("{} [{} / {}]", recipe.title, recipe.category, recipe.country);
        for (i, ingredient) in recipe.ingredients.iter().enumerate() {
            println!("  {}. {}", i + 1, ingredient.summary());
        }
    }
    println!("page {} of {} ({} matches)", pager.current_page(), pager.total_pages(), page.total_count);
}
