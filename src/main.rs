use anyhow::Context;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wellnest::llm::gemini::GeminiClient;
use wellnest::rag::embeddings::FastEmbedder;
use wellnest::rag::ingest::IngestionPipeline;
use wellnest::{AppState, ChatOrchestrator, Config, VectorStore};

/// WellNest - retrieval-augmented mental wellness chatbot server
#[derive(Parser, Debug)]
#[command(
    name = "wellnest-server",
    version,
    about = "WellNest - retrieval-augmented mental wellness chatbot server",
    long_about = "Serves the WellNest chat API backed by an embedded vector store.\n\n\
                  Run without arguments to start the server, or use 'ingest' to\n\
                  (re)build the knowledge base snapshot from source documents."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the API server (default)
    Serve,
    /// Build the knowledge base snapshot from the documents directory
    Ingest,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wellnest=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config =
        Config::from_env().map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Ingest => ingest(config).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let config = Arc::new(config);

    tracing::info!("Loading embedding model");
    let embedder = Arc::new(FastEmbedder::new().context("Failed to initialize embedder")?);

    tracing::info!("Loading vector store snapshot");
    let store = Arc::new(
        VectorStore::load_or_empty(
            embedder,
            &config.rag.index_path(),
            &config.rag.documents_path(),
        )
        .await
        .context("Failed to load vector store")?,
    );
    tracing::info!(chunks = store.count(), "Vector store ready");

    let llm = Arc::new(GeminiClient::new(&config.llm));
    let orchestrator = Arc::new(ChatOrchestrator::new(
        store,
        llm,
        config.rag.top_k,
        Duration::from_secs(config.llm.request_timeout_secs),
    ));

    let state = AppState {
        config: config.clone(),
        orchestrator,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = wellnest::api::routes::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "WellNest API listening");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn ingest(config: Config) -> anyhow::Result<()> {
    println!("{}", "Starting data ingestion...".bold());

    let embedder = Arc::new(FastEmbedder::new().context("Failed to initialize embedder")?);
    let pipeline = IngestionPipeline::new(config.rag.clone());

    match pipeline.run(embedder).await? {
        Some(report) => {
            println!(
                "{} {} file(s), {} chunk(s) embedded",
                "Ingestion complete:".green().bold(),
                report.files,
                report.chunks
            );
            println!(
                "Snapshot written to {} and {}",
                config.rag.index_path().display(),
                config.rag.documents_path().display()
            );
        }
        None => {
            println!(
                "{} no source documents found in '{}'",
                "Nothing to ingest:".yellow().bold(),
                config.rag.documents_dir.display()
            );
            println!("Add .txt or .md files to that directory to build a knowledge base.");
        }
    }

    Ok(())
}
