use std::{net::SocketAddr, sync::Arc, time::Duration};

use clap::{Parser, Subcommand};

use crate::{
    app::{credentials::ApiKeySource, env::Envy},
    client::{
        api_client::{ApiClient, RetryPolicy},
        session::GenerationSession,
    },
    media::apis::{openai::service::OpenAiImageGenerator, ImageGenerator},
};

mod app;
mod client;
mod media;
#[cfg(test)]
mod test_support;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub api_key: Arc<ApiKeySource>,
    pub generator: Arc<dyn ImageGenerator>,
}

#[derive(Parser, Debug)]
#[command(name = "canvas-api", version, about = "Prompt-to-image HTTP service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (default).
    Serve,
    /// Ask a running server for one image.
    Generate {
        prompt: String,
        #[arg(long)]
        model: Option<String>,
        #[arg(long, env = "CANVAS_API_URL", default_value = "http://localhost:3000")]
        server: String,
        #[arg(long, default_value_t = 3)]
        max_retries: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,canvas_api=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Generate {
            prompt,
            model,
            server,
            max_retries,
        } => generate(prompt, model, &server, max_retries).await,
    }
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    // environment
    let envy = Envy::load()?;

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let generator = OpenAiImageGenerator::new(
        &envy.openai_api_url,
        Duration::from_secs(envy.request_timeout_secs),
    )?;
    let api_key = ApiKeySource::from_env();

    if api_key.resolve().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; generation requests will be rejected until it is");
    }

    let state = AppState {
        envy: Arc::new(envy),
        api_key: Arc::new(api_key),
        generator: Arc::new(generator),
    };

    // app
    let app = app::router::build(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn generate(
    prompt: String,
    model: Option<String>,
    server: &str,
    max_retries: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(server)?.with_retry_policy(RetryPolicy {
        max_retries,
        ..RetryPolicy::default()
    });

    let mut session = GenerationSession::new();
    session.prompt = prompt;
    session.model = model;
    session.submit(&client).await?;

    match (session.result(), session.error()) {
        (Some(result), _) => {
            println!("{}", result.image_url);
            println!(
                "{} {} {} ({})",
                session.status().value(),
                result.model,
                result.dimensions,
                result.request_id
            );
            Ok(())
        }
        (None, Some(message)) => {
            eprintln!("{}: {}", session.status().value(), message);
            std::process::exit(1);
        }
        (None, None) => Err("generation finished without a result".into()),
    }
}
