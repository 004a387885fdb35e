//! # ripdash: RIP router client
//!
//! Composition root that wires the adapters into the two controllers.
//!
//! ## Responsibilities
//! - Parse the command line and configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the reqwest client and the token-file store (adapters)
//! - Construct controllers, injecting adapters and terminal views via port traits
//! - Run the poll task for `watch` until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod cli;
mod config;
mod view;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ripdash_adapter_http_reqwest::ReqwestClient;
use ripdash_adapter_token_file::FileTokenStore;
use ripdash_app::ports::TokenStore;
use ripdash_app::schedule::PollTask;
use ripdash_app::services::dashboard_poller::DashboardPoller;
use ripdash_app::services::query_controller::QueryController;
use ripdash_domain::api::RipResource;
use ripdash_domain::router::RouterId;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, CredentialArgs};
use crate::config::Config;
use crate::view::{TerminalDashboardView, TerminalQueryView};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let client = ReqwestClient::new(&config.api.base_url)?;
    tracing::debug!(base_url = %client.base_url(), "backend client ready");

    match cli.command {
        Command::Login { credentials, save } => login(client, &config, &credentials, save).await,
        Command::Query {
            resource,
            router,
            credentials,
        } => {
            let mut controller = QueryController::new(client, TerminalQueryView);
            if controller
                .login(&credentials.username, &credentials.password)
                .await
                .is_err()
            {
                return Ok(ExitCode::FAILURE);
            }
            let result = match RipResource::from(resource) {
                RipResource::Database => controller.get_rip_database(&router).await,
                RipResource::Status => controller.get_rip_status(&router).await,
            };
            Ok(exit_code(result.is_ok()))
        }
        Command::Routers => {
            QueryController::new(client, TerminalQueryView).list_routers();
            Ok(ExitCode::SUCCESS)
        }
        Command::Watch { routes } => watch(client, &config, routes).await,
    }
}

async fn login(
    client: ReqwestClient,
    config: &Config,
    credentials: &CredentialArgs,
    save: bool,
) -> anyhow::Result<ExitCode> {
    let mut controller = QueryController::new(client, TerminalQueryView);
    let Ok(token) = controller
        .login(&credentials.username, &credentials.password)
        .await
    else {
        return Ok(ExitCode::FAILURE);
    };
    println!("{token}");

    if save {
        let store = FileTokenStore::new(&config.session.token_file);
        store
            .save(&token)
            .with_context(|| format!("saving token to {}", store.path().display()))?;
        tracing::info!(path = %store.path().display(), "token saved");
    }
    Ok(ExitCode::SUCCESS)
}

async fn watch(
    client: ReqwestClient,
    config: &Config,
    routes: Option<String>,
) -> anyhow::Result<ExitCode> {
    let store = FileTokenStore::new(&config.session.token_file);
    let poller = Arc::new(DashboardPoller::start_session(
        client,
        TerminalDashboardView,
        &store,
    ));

    if let Some(id) = routes {
        // Failure is bannered by the poller; keep watching regardless.
        let _ = poller.fetch_routing_table(&RouterId::new(id)).await;
    }

    let mut task = PollTask::start(Arc::clone(&poller), config.poll_interval());
    tokio::signal::ctrl_c()
        .await
        .context("waiting for Ctrl-C")?;
    task.stop();

    Ok(ExitCode::SUCCESS)
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
