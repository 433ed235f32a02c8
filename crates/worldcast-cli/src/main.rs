//! worldcast - browse countries and where popular celebrities were born.

/// Application configuration (TOML).
mod config;
/// Text rendering of catalog views.
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use worldcast_api::countries::CountriesClient;
use worldcast_api::tmdb::{TmdbClient, TmdbCredential};
use worldcast_catalog::country::{load_countries, load_country_details, load_country_summaries};
use worldcast_catalog::filter::region_options;
use worldcast_catalog::profile::load_profile;
use worldcast_catalog::{
    CelebrityFeed, FilterState, Selection, filter_celebrities, filter_countries,
};

use crate::config::{AppConfig, CelebritiesConfig, resolve_config_path};

/// User agent sent to both APIs.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Browse countries (REST Countries API).
    Countries(CountriesCommand),
    /// Browse popular celebrities (TMDB API).
    Celebs(CelebsCommand),
    /// Print shell completions.
    Completions(CompletionsArgs),
}

/// Arguments for the `countries` subcommand.
#[derive(clap::Args)]
struct CountriesCommand {
    /// Countries subcommand to run.
    #[command(subcommand)]
    command: CountriesSubcommands,
}

/// Available countries subcommands.
#[derive(Subcommand)]
enum CountriesSubcommands {
    /// List countries with their capitals.
    List(CountriesListArgs),
    /// Show one country's details.
    Show(CountryShowArgs),
}

/// Arguments for the `countries list` subcommand.
#[derive(clap::Args)]
struct CountriesListArgs {
    /// Region filter (e.g. "Europe"). "All" disables it.
    #[arg(long)]
    region: Option<String>,
    /// Case-insensitive name search.
    #[arg(long)]
    search: Option<String>,
}

/// Arguments for the `countries show` subcommand.
#[derive(clap::Args)]
struct CountryShowArgs {
    /// Exact common or official name (e.g. "France").
    #[arg(long, required = true)]
    name: String,
}

/// Arguments for the `celebs` subcommand.
#[derive(clap::Args)]
struct CelebsCommand {
    /// Celebs subcommand to run.
    #[command(subcommand)]
    command: CelebsSubcommands,
}

/// Available celebs subcommands.
#[derive(Subcommand)]
enum CelebsSubcommands {
    /// List popular celebrities, filtered by birthplace and name.
    List(CelebsListArgs),
    /// Show the region and country filter options.
    Filters(CelebsFiltersArgs),
    /// Show one celebrity's profile.
    Show(CelebShowArgs),
}

/// Arguments for the `celebs list` subcommand.
#[derive(clap::Args)]
struct CelebsListArgs {
    /// Number of popular pages to load (default: config, then 1).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pages: Option<u32>,
    /// Region filter (e.g. "Europe"). "All" disables it.
    #[arg(long)]
    region: Option<String>,
    /// Country filter (e.g. "France"). "All" disables it.
    #[arg(long)]
    country: Option<String>,
    /// Case-insensitive name search.
    #[arg(long)]
    search: Option<String>,
}

/// Arguments for the `celebs filters` subcommand.
#[derive(clap::Args)]
struct CelebsFiltersArgs {
    /// Region to list countries for (default: all).
    #[arg(long)]
    region: Option<String>,
}

/// Arguments for the `celebs show` subcommand.
#[derive(clap::Args)]
struct CelebShowArgs {
    /// Name to search for (e.g. "Jason Statham").
    #[arg(long, required = true)]
    name: String,
    /// Open a Google search for the celebrity in the browser.
    #[arg(long)]
    open: bool,
}

/// Arguments for the `completions` subcommand.
#[derive(clap::Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: Shell,
}

/// Loads the config file, falling back to defaults when absent.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    AppConfig::load(&config_path).context("failed to load config")
}

/// Builds a `CountriesClient` with the default user agent.
///
/// # Errors
///
/// Returns an error if the client fails to build.
fn build_countries_client() -> Result<CountriesClient> {
    CountriesClient::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build REST Countries client")
}

/// Picks the TMDB credential; the bearer token wins over the v3 key.
///
/// # Errors
///
/// Returns an error if neither value is set.
fn resolve_tmdb_credential(token: Option<String>, key: Option<String>) -> Result<TmdbCredential> {
    let token = token.filter(|t| !t.trim().is_empty());
    let key = key.filter(|k| !k.trim().is_empty());
    match (token, key) {
        (Some(token), _) => Ok(TmdbCredential::BearerToken(token)),
        (None, Some(key)) => Ok(TmdbCredential::ApiKey(key)),
        (None, None) => bail!("TMDB_API_TOKEN or TMDB_API_KEY environment variable is required"),
    }
}

/// Builds a `TmdbClient` from `TMDB_API_TOKEN` or `TMDB_API_KEY`.
///
/// # Errors
///
/// Returns an error if no credential is set or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client() -> Result<TmdbClient> {
    let credential = resolve_tmdb_credential(
        std::env::var("TMDB_API_TOKEN").ok(),
        std::env::var("TMDB_API_KEY").ok(),
    )?;

    TmdbClient::builder()
        .credential(credential)
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build TMDB client")
}

/// Runs the `countries list` subcommand.
///
/// # Errors
///
/// Returns an error if the region is unknown or the API request fails.
#[instrument(skip_all)]
async fn run_countries_list(args: &CountriesListArgs) -> Result<()> {
    let client = build_countries_client()?;
    let countries = load_country_summaries(&client).await?;
    let shown = filter_countries(
        &countries,
        &Selection::from(args.region.clone()),
        args.search.as_deref().unwrap_or_default(),
    )?;
    view::render_country_list(&shown);
    Ok(())
}

/// Runs the `countries show` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_countries_show(args: &CountryShowArgs) -> Result<()> {
    let client = build_countries_client()?;
    match load_country_details(&client, &args.name).await? {
        Some(country) => view::render_country_details(&country),
        None => tracing::info!("Country not found: {}", args.name),
    }
    Ok(())
}

/// Resolves the `celebs list` region and country from flags and config.
///
/// A `--region` flag drops the configured country, which may lie outside
/// the new region.
fn resolve_selections(
    args: &CelebsListArgs,
    config: &CelebritiesConfig,
) -> (Selection, Selection) {
    let region = args.region.clone().or_else(|| config.region.clone());
    let country = if args.region.is_some() {
        args.country.clone()
    } else {
        args.country.clone().or_else(|| config.country.clone())
    };
    (Selection::from(region), Selection::from(country))
}

/// Runs the `celebs list` subcommand.
///
/// Loads the country set and the requested popular pages concurrently,
/// then applies region, country, and search filters.
///
/// # Errors
///
/// Returns an error if configuration is invalid, a filter value is
/// unknown, or any API request fails.
#[instrument(skip_all)]
async fn run_celebs_list(args: &CelebsListArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let tmdb = build_tmdb_client()?;
    let countries_client = build_countries_client()?;

    let pages = args.pages.or(config.celebrities.pages).unwrap_or(1);
    let (region, country) = resolve_selections(args, &config.celebrities);
    let language = config.tmdb.language;

    tracing::info!("Loading {pages} page(s) of popular celebrities...");
    let mut feed = CelebrityFeed::new();
    let (countries, _) = futures::try_join!(
        load_countries(&countries_client),
        feed.load_pages(&tmdb, &language, pages),
    )?;

    let mut state = FilterState::new(&countries);
    state.select_region(region, &countries)?;
    state.select_country(country)?;
    if let Some(search) = &args.search {
        state.set_search(search.as_str());
    }

    let shown = filter_celebrities(feed.celebrities(), &countries, &state);
    view::render_celebrity_list(
        &state.headline(),
        &shown,
        feed.celebrities().len(),
        feed.has_more(),
    );
    Ok(())
}

/// Runs the `celebs filters` subcommand.
///
/// # Errors
///
/// Returns an error if the region is unknown or the API request fails.
#[instrument(skip_all)]
async fn run_celebs_filters(args: &CelebsFiltersArgs) -> Result<()> {
    let client = build_countries_client()?;
    let countries = load_countries(&client).await?;

    let mut state = FilterState::new(&countries);
    state.select_region(Selection::from(args.region.clone()), &countries)?;

    view::render_filter_options(
        &region_options(&countries),
        state.region(),
        state.country_options(),
    );
    Ok(())
}

/// Runs the `celebs show` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build, an API request
/// fails, or the browser cannot be opened.
#[instrument(skip_all)]
async fn run_celebs_show(args: &CelebShowArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let tmdb = build_tmdb_client()?;

    let Some(profile) = load_profile(&tmdb, &args.name, &config.tmdb.language).await? else {
        tracing::info!("Celebrity not found: {}", args.name);
        return Ok(());
    };

    view::render_profile(&profile, chrono::Local::now().date_naive());

    let url = profile.google_search_url()?;
    if args.open {
        tracing::info!("Opening {url}");
        open::that(url.as_str()).with_context(|| format!("failed to open {url}"))?;
    } else {
        tracing::info!("More: {url}");
    }
    Ok(())
}

/// Writes shell completions to stdout.
fn run_completions(args: &CompletionsArgs) {
    clap_complete::generate(
        args.shell,
        &mut Cli::command(),
        env!("CARGO_BIN_NAME"),
        &mut std::io::stdout(),
    );
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let (trace_layer, log_layer) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let span_exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;
                let log_exporter = opentelemetry_otlp::LogExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(span_exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                // Forwards `tracing` events (all CLI output) as OTLP log records.
                let logger_provider = opentelemetry_sdk::logs::SdkLoggerProvider::builder()
                    .with_simple_exporter(log_exporter)
                    .build();
                let log_layer =
                    opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge::new(
                        &logger_provider,
                    );

                Some((tracing_opentelemetry::layer().with_tracer(tracer), log_layer))
            })
            .unzip();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(trace_layer)
            .with(log_layer)
            .init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Countries(cmd) => match cmd.command {
            CountriesSubcommands::List(args) => run_countries_list(&args).await,
            CountriesSubcommands::Show(args) => run_countries_show(&args).await,
        },
        Commands::Celebs(cmd) => match cmd.command {
            CelebsSubcommands::List(args) => run_celebs_list(&args, cli.dir.as_ref()).await,
            CelebsSubcommands::Filters(args) => run_celebs_filters(&args).await,
            CelebsSubcommands::Show(args) => run_celebs_show(&args, cli.dir.as_ref()).await,
        },
        Commands::Completions(args) => {
            run_completions(&args);
            Ok(())
        }
    }
}
