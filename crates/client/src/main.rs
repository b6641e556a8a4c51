//! cinecat CLI
//!
//! Terminal front end for the catalog API. Each invocation drives the same
//! list cache a graphical client would: set the window, refresh, mutate,
//! and print what the cache holds afterwards.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinecat_client::api::{CatalogApi, ClientError};
use cinecat_client::cache::ResourceCache;
use cinecat_client::config::ClientConfig;
use cinecat_client::resource::{Directors, Movies, Resource};
use cinecat_core::types::DbId;
use cinecat_db::models::director::CreateDirector;
use cinecat_db::models::movie::CreateMovie;

#[derive(Parser)]
#[command(name = "cinecat")]
#[command(about = "Browse and edit the movie catalog", long_about = None)]
struct Cli {
    /// Catalog API host (overrides CATALOG_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage directors
    Directors {
        #[command(subcommand)]
        action: DirectorAction,
    },

    /// Manage movies
    Movies {
        #[command(subcommand)]
        action: MovieAction,
    },
}

/// Window and filter for list commands.
#[derive(Args, Clone)]
struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: i64,

    /// Records per page
    #[arg(long, default_value_t = 10)]
    page_size: i64,

    /// Case-insensitive substring filter
    #[arg(short, long)]
    search: Option<String>,
}

#[derive(Args, Clone)]
struct DirectorFields {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    nationality: Option<String>,

    #[arg(long)]
    age: Option<u32>,

    /// Whether the director is still working (true/false)
    #[arg(long)]
    active: Option<bool>,
}

#[derive(Args, Clone)]
struct MovieFields {
    #[arg(long)]
    name: Option<String>,

    /// Release date, e.g. 2010-07-16
    #[arg(long)]
    release_year: Option<String>,

    #[arg(long)]
    genre: Option<String>,

    /// Running time as HH:MM:SS
    #[arg(long)]
    duration: Option<String>,

    #[arg(long)]
    director_id: Option<DbId>,

    /// Send the movie even if no director is selected
    #[arg(long)]
    allow_missing_director: bool,
}

#[derive(Subcommand)]
enum DirectorAction {
    /// List one page of directors
    List(ListArgs),
    /// Show a single director
    Get { id: DbId },
    /// Add a director
    Create(DirectorFields),
    /// Replace every field of a director
    Update {
        id: DbId,
        #[command(flatten)]
        fields: DirectorFields,
    },
    /// Remove a director
    Delete { id: DbId },
}

#[derive(Subcommand)]
enum MovieAction {
    /// List one page of movies
    List(ListArgs),
    /// Show a single movie
    Get { id: DbId },
    /// Add a movie
    Create(MovieFields),
    /// Replace every field of a movie
    Update {
        id: DbId,
        #[command(flatten)]
        fields: MovieFields,
    },
    /// Remove a movie
    Delete { id: DbId },
    /// List the directors offered when picking a movie's director
    DirectorOptions,
}

impl From<DirectorFields> for CreateDirector {
    fn from(fields: DirectorFields) -> Self {
        Self {
            name: fields.name,
            nationality: fields.nationality,
            age: fields.age,
            active: fields.active,
        }
    }
}

impl From<&MovieFields> for CreateMovie {
    fn from(fields: &MovieFields) -> Self {
        Self {
            name: fields.name.clone(),
            release_year: fields.release_year.clone(),
            gender: fields.genre.clone(),
            duration: fields.duration.clone(),
            director_id: fields.director_id,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinecat_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let base_url = cli
        .api_url
        .unwrap_or_else(|| ClientConfig::from_env().base_url);
    let api = CatalogApi::new(base_url);
    tracing::debug!(base_url = api.base_url(), "Using catalog API");

    match cli.command {
        Commands::Directors { action } => run_directors(ResourceCache::new(api), action).await,
        Commands::Movies { action } => run_movies(ResourceCache::new(api), action).await,
    }
}

async fn run_directors(
    mut cache: ResourceCache<Directors>,
    action: DirectorAction,
) -> anyhow::Result<()> {
    match action {
        DirectorAction::List(args) => list(&mut cache, args).await,
        DirectorAction::Get { id } => {
            let result = cache.get(id).await;
            print_json(&result.map_err(|e| failure(&cache, e))?)
        }
        DirectorAction::Create(fields) => {
            let result = cache.create(&fields.into()).await;
            print_json(&result.map_err(|e| failure(&cache, e))?)
        }
        DirectorAction::Update { id, fields } => {
            let result = cache.update(id, &fields.into()).await;
            print_json(&result.map_err(|e| failure(&cache, e))?)
        }
        DirectorAction::Delete { id } => {
            let result = cache.delete(id).await;
            result.map_err(|e| failure(&cache, e))?;
            println!("Deleted director {id}");
            Ok(())
        }
    }
}

async fn run_movies(mut cache: ResourceCache<Movies>, action: MovieAction) -> anyhow::Result<()> {
    match action {
        MovieAction::List(args) => list(&mut cache, args).await,
        MovieAction::Get { id } => {
            let result = cache.get(id).await;
            print_json(&result.map_err(|e| failure(&cache, e))?)
        }
        MovieAction::Create(fields) => {
            let payload = CreateMovie::from(&fields);
            let result = if fields.allow_missing_director {
                cache.create(&payload).await
            } else {
                cache.create_checked(&payload).await
            };
            print_json(&result.map_err(|e| failure(&cache, e))?)
        }
        MovieAction::Update { id, fields } => {
            let payload = CreateMovie::from(&fields);
            let result = if fields.allow_missing_director {
                cache.update(id, &payload).await
            } else {
                cache.update_checked(id, &payload).await
            };
            print_json(&result.map_err(|e| failure(&cache, e))?)
        }
        MovieAction::Delete { id } => {
            let result = cache.delete(id).await;
            result.map_err(|e| failure(&cache, e))?;
            println!("Deleted movie {id}");
            Ok(())
        }
        MovieAction::DirectorOptions => {
            let directors = cache
                .load_director_options()
                .await
                .context("Could not load directors")?;
            for director in directors {
                println!(
                    "{:>4}  {}",
                    director.director_id,
                    director.name.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
    }
}

async fn list<R: Resource>(cache: &mut ResourceCache<R>, args: ListArgs) -> anyhow::Result<()> {
    let state = cache.state_mut();
    state.set_search_term(args.search.unwrap_or_default());
    state.set_page_size(args.page_size);
    state.set_page(args.page);

    let result = cache.refresh().await;
    result.map_err(|e| failure(cache, e))?;

    let state = cache.state();
    print_json(&state.items)?;
    eprintln!(
        "Page {} of {} ({} {})",
        state.current_page,
        state.total_pages(),
        state.total_items,
        R::PLURAL
    );
    Ok(())
}

/// Attach the user-facing message recorded on the cache to the error.
fn failure<R: Resource>(cache: &ResourceCache<R>, err: ClientError) -> anyhow::Error {
    let message = cache
        .state()
        .error
        .clone()
        .unwrap_or_else(|| format!("Request for {} failed", R::PLURAL));
    anyhow::Error::new(err).context(message)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
