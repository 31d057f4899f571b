//! Program configurations.

use std::env;

use clap::{Arg, ArgMatches, Command, builder::RangedU64ValueParser};
use validators::prelude::*;

use super::Config;

#[derive(Validator)]
#[validator(http_ftp_url(local(Allow)))]
struct HttpFtpURL {
    url: url::Url,
    protocol: validators::models::Protocol,
}

pub const DEF_BASE: &'static str = "http://localhost:8080";

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("site-monitor-cli.base")
            .long("site-monitor-cli.base")
            .help("backend base URL")
            .num_args(1),
    )
    .arg(
        Arg::new("site-monitor-cli.token")
            .long("site-monitor-cli.token")
            .help("access token of authenticated APIs")
            .num_args(1),
    )
    .arg(
        Arg::new("site-monitor-cli.timeout")
            .long("site-monitor-cli.timeout")
            .help("request timeout in milliseconds")
            .num_args(1)
            .value_parser(RangedU64ValueParser::<u64>::new().range(1..)),
    )
}

/// To read input arguments from command-line arguments and environment variables.
pub fn read_args(args: &ArgMatches) -> Config {
    Config {
        base: match args.get_one::<String>("site-monitor-cli.base") {
            None => match env::var("SMCLI_BASE") {
                Err(_) => DEF_BASE.to_string(),
                Ok(v) => match HttpFtpURL::parse_string(v.as_str()) {
                    Err(_) => panic!("invalid `site-monitor-cli.base`"),
                    Ok(_) => v,
                },
            },
            Some(v) => match HttpFtpURL::parse_string(v) {
                Err(_) => panic!("invalid `site-monitor-cli.base`"),
                Ok(_) => v.clone(),
            },
        },
        token: match args.get_one::<String>("site-monitor-cli.token") {
            None => match env::var("SMCLI_TOKEN") {
                Err(_) => None,
                Ok(v) => match v.len() {
                    0 => None,
                    _ => Some(v),
                },
            },
            Some(v) => Some(v.clone()),
        },
        timeout_ms: match args.get_one::<u64>("site-monitor-cli.timeout") {
            None => match env::var("SMCLI_TIMEOUT") {
                Err(_) => None,
                Ok(v) => match v.parse::<u64>() {
                    Err(_) => panic!("invalid `SMCLI_TIMEOUT`"),
                    Ok(0) => panic!("invalid `SMCLI_TIMEOUT`"),
                    Ok(v) => Some(v),
                },
            },
            Some(v) => Some(*v),
        },
    }
}
