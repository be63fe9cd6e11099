use clap::Parser;
use recipe_finder::{
    api::{self, AppState},
    cli::{commands, Cli, Commands},
    config::Settings,
    matcher::{MatchEngine, TermExtractor},
    Error, RecipeCatalog, Result, Session,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging; stdout is reserved for the interactive prompt
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,recipe_finder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::from_env()?;
    if let Some(path) = cli.catalog {
        settings.catalog.path = path;
    }
    settings.validate()?;

    // Build the matching core once; everything below borrows it
    let catalog = RecipeCatalog::load(&settings.catalog.path)?;
    let extractor = TermExtractor::with_lexicon()?;
    let engine = MatchEngine::with_threshold(settings.matching.similarity_threshold);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let mut session =
                Session::new(&catalog, &extractor, &engine, settings.matching.max_results);
            let stdin = std::io::stdin();
            commands::run_interactive(&mut session, stdin.lock(), &mut std::io::stdout())?;
        }
        Commands::Search { query, limit } => {
            let limit = limit.unwrap_or(settings.matching.max_results);
            commands::search(
                &mut std::io::stdout(),
                &catalog,
                &extractor,
                &engine,
                &query,
                limit,
            )?;
        }
        Commands::Show { recipe_id } => {
            commands::show(&mut std::io::stdout(), &catalog, recipe_id)?;
        }
        Commands::Serve { port, host } => {
            let state = AppState {
                catalog: Arc::new(catalog),
                extractor: Arc::new(extractor),
                engine: Arc::new(engine),
                settings,
            };
            serve(state, port, host).await?;
        }
    }

    Ok(())
}

async fn serve(mut state: AppState, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        state.settings.server.port = port;
    }
    if let Some(host) = host {
        state.settings.server.host = host;
    }

    let addr = format!("{}:{}", state.settings.server.host, state.settings.server.port);
    info!("Serving {} recipes", state.catalog.len());

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Recipe Finder API");
    println!("========================================");
    println!("Address: http://{addr}");
    println!("\nAPI Endpoints:");
    println!("  GET  /api/search?q=...&limit=N");
    println!("  GET  /api/recipes/:id");
    println!("  GET  /api/recipes/:id/text");
    println!("  GET  /health");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
