use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vexchat_http::{AppState, create_router};
use vexchat_llm::LlmClient;
use vexchat_service::{ChatService, KnowledgeService, SessionService};
use vexchat_storage::MemoryStorage;

#[derive(Parser)]
#[command(name = "vexchat")]
#[command(about = "Chat assistant for VEX robotics competitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
}

fn get_api_key() -> Result<String> {
    std::env::var("VEXCHAT_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .map_err(|_| {
            anyhow::anyhow!("VEXCHAT_API_KEY or OPENAI_API_KEY environment variable must be set")
        })
}

fn get_base_url() -> String {
    std::env::var("VEXCHAT_API_URL").unwrap_or_else(|_| "https://api.openai.com".to_owned())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            let storage = Arc::new(MemoryStorage::new());
            let llm = Arc::new(LlmClient::new(get_api_key()?, get_base_url())?);
            tracing::info!(model = llm.model(), "completion client ready");

            let chat_service = Arc::new(ChatService::new(Arc::clone(&storage), Arc::clone(&llm)));
            let session_service = Arc::new(SessionService::new(storage));
            let knowledge_service = Arc::new(KnowledgeService::new());

            let state = Arc::new(AppState { chat_service, session_service, knowledge_service });

            let router = create_router(state);
            let addr = format!("{host}:{port}");
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
    }

    Ok(())
}
