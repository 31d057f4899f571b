use clap::Command;
use laboratory::{SpecContext, expect};
use tokio::runtime::Runtime;

use site_monitor_cli::libs::cli::{self, Config};
use site_monitor_corelib::err;

use crate::TestState;

fn new_runtime() -> Result<Runtime, String> {
    match Runtime::new() {
        Err(e) => Err(format!("create runtime error: {}", e)),
        Ok(runtime) => Ok(runtime),
    }
}

fn offline_config() -> Config {
    Config {
        base: "http://localhost:1".to_string(),
        token: None,
        timeout_ms: Some(1000),
    }
}

/// Test [`cli::reg_args`].
pub fn reg_args(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let cmd = || cli::reg_args(Command::new("test"));

    let args = cmd().try_get_matches_from(vec!["test", "crane", "--id", "1", "--type", "2"]);
    expect(args.is_ok()).to_equal(true)?;
    let args = cmd().try_get_matches_from(vec!["test", "crane", "--type", "x"]);
    expect(args.is_err()).to_equal(true)?;
    let args = cmd().try_get_matches_from(vec!["test", "environment", "--mn", "m1", "--raw"]);
    expect(args.is_ok()).to_equal(true)?;
    let args = cmd().try_get_matches_from(vec!["test", "attendance", "--current", "0"]);
    expect(args.is_err()).to_equal(true)?;
    let args = cmd().try_get_matches_from(vec!["test", "health", "--user", "u", "--unit", "x"]);
    expect(args.is_ok()).to_equal(true)?;
    let args = cmd().try_get_matches_from(vec!["test", "routes", "resolve"]);
    expect(args.is_err()).to_equal(true)
}

/// Test `routes` sub-commands.
pub fn run_routes(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let runtime = new_runtime()?;
    let conf = offline_config();
    let cmd = || cli::reg_args(Command::new("test"));

    let args = cmd().get_matches_from(vec!["test", "routes", "list"]);
    let result = runtime.block_on(cli::run(&conf, &args));
    expect(result.is_ok_and(|v| v.is_some())).to_equal(true)?;

    let args = cmd().get_matches_from(vec!["test", "routes", "resolve", "-p", "/redirect/h5/box"]);
    let result = runtime.block_on(cli::run(&conf, &args));
    expect(result.is_ok_and(|v| v.is_some())).to_equal(true)?;

    let args = cmd().get_matches_from(vec!["test", "routes", "resolve", "-p", "/h5/none"]);
    let result = runtime.block_on(cli::run(&conf, &args));
    expect(result.is_err()).to_equal(true)
}

/// Test API sub-commands report the fixed error message.
pub fn run_offline(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let runtime = new_runtime()?;
    let conf = offline_config();
    let cmd = || cli::reg_args(Command::new("test"));

    for sub in ["crane", "environment", "attendance", "health"] {
        let args = cmd().get_matches_from(vec!["test", sub]);
        match runtime.block_on(cli::run(&conf, &args)) {
            Err(e) => expect(e.to_string()).to_equal(err::E_OFFLINE.to_string())?,
            Ok(_) => return Err(format!("{} should fail", sub)),
        }
    }
    Ok(())
}

/// Test running without a sub-command.
pub fn run_none(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let runtime = new_runtime()?;
    let conf = offline_config();

    let args = cli::reg_args(Command::new("test")).get_matches_from(vec!["test"]);
    let result = runtime.block_on(cli::run(&conf, &args));
    expect(result.is_ok_and(|v| v.is_none())).to_equal(true)
}
