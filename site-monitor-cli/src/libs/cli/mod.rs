use std::error::Error as StdError;

use clap::{ArgMatches, Command};
use serde::{Deserialize, Serialize};

use site_monitor_sdk::api::http::{Client, ClientOptions};

mod attendance;
pub mod config;
mod crane;
mod environment;
mod health;
mod routes;

/// Application configurations.
#[derive(Deserialize)]
pub struct Config {
    /// The backend base path with host. For example: `http://localhost:8080`.
    pub base: String,
    /// Access token for authenticated (`/api`) endpoints.
    pub token: Option<String>,
    /// Request timeout in milliseconds.
    #[serde(rename = "timeoutMs")]
    pub timeout_ms: Option<u64>,
}

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    cmd.subcommand(crane::reg_args(Command::new("crane")))
        .subcommand(environment::reg_args(Command::new("environment")))
        .subcommand(attendance::reg_args(Command::new("attendance")))
        .subcommand(health::reg_args(Command::new("health")))
        .subcommand(routes::reg_args(Command::new("routes")))
}

pub async fn run(conf: &Config, args: &ArgMatches) -> Result<Option<()>, Box<dyn StdError>> {
    match args.subcommand() {
        Some(("crane", args)) => crane::run(conf, args).await,
        Some(("environment", args)) => environment::run(conf, args).await,
        Some(("attendance", args)) => attendance::run(conf, args).await,
        Some(("health", args)) => health::run(conf, args).await,
        Some(("routes", args)) => routes::run(args),
        _ => Ok(None),
    }
}

fn new_client(conf: &Config) -> Result<Client, Box<dyn StdError>> {
    let opts = ClientOptions {
        base: conf.base.clone(),
        token: conf.token.clone(),
        timeout_ms: conf.timeout_ms,
    };
    Ok(Client::new(opts)?)
}

fn print_json<T: Serialize>(data: &T) -> Result<(), Box<dyn StdError>> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}
