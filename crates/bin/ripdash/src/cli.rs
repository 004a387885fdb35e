//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ripdash_domain::api::RipResource;
use ripdash_domain::router::RouterSelection;

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(name = "ripdash", version, about = "RIP router query client and dashboard")]
pub struct Cli {
    /// Config file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Authenticate against the backend and print the issued token.
    Login {
        #[command(flatten)]
        credentials: CredentialArgs,
        /// Store the token in the token file for `watch`.
        #[arg(long)]
        save: bool,
    },
    /// Log in, then print the RIP database or status of a router.
    Query {
        resource: ResourceArg,
        /// One of the selector values listed by `routers`.
        #[arg(long, default_value = "all", value_parser = parse_selection)]
        router: RouterSelection,
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// List the router selector values.
    Routers,
    /// Poll the router list with the saved token until interrupted.
    Watch {
        /// Also print this router's routing table once at start.
        #[arg(long, value_name = "ID")]
        routes: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct CredentialArgs {
    #[arg(long, short)]
    pub username: String,
    #[arg(long, short)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResourceArg {
    Database,
    Status,
}

impl From<ResourceArg> for RipResource {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Database => Self::Database,
            ResourceArg::Status => Self::Status,
        }
    }
}

fn parse_selection(value: &str) -> Result<RouterSelection, String> {
    let options = RouterSelection::static_options();
    options
        .iter()
        .find(|option| option.as_str() == value)
        .cloned()
        .ok_or_else(|| {
            let names: Vec<&str> = options.iter().map(RouterSelection::as_str).collect();
            format!("expected one of: {}", names.join(", "))
        })
}
