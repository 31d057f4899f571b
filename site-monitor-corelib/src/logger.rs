//! To configure the logger.

use std::env;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use clap::{Arg, ArgMatches, Command};
use log::{LevelFilter, Record};
use log4rs::{
    self,
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::{Encode, Write},
};
use serde::{Deserialize, Serialize};

/// Logger configuration object.
#[derive(Default, Deserialize)]
pub struct Config {
    /// Log level. Can be `off`, `error`, `warn`, `info`, `debug`.
    ///
    /// Default is `info`.
    pub level: Option<String>,
    /// Log style. Can be `json`, `log4j`.
    ///
    /// Default is `json`.
    pub style: Option<String>,
}

/// The log4rs encoder for JSON format.
#[derive(Debug)]
struct JsonEncoder {
    proj_name: String,
}

/// The log4rs encoder for log4j format.
#[derive(Debug)]
struct Log4jEncoder {
    proj_name: String,
}

/// Normal log information.
#[derive(Debug, Serialize)]
struct JsonEncoderMsg<'a> {
    pub ts: String,
    pub level: String,
    pub proj: &'a str,
    pub module: String,
    pub msg: String,
}

pub const LEVEL_OFF: &'static str = "off";
pub const LEVEL_ERROR: &'static str = "error";
pub const LEVEL_WARN: &'static str = "warn";
pub const LEVEL_INFO: &'static str = "info";
pub const LEVEL_DEBUG: &'static str = "debug";

pub const STYLE_JSON: &'static str = "json";
pub const STYLE_LOG4J: &'static str = "log4j";

pub const DEF_LEVEL: &'static str = LEVEL_INFO;
pub const DEF_STYLE: &'static str = STYLE_JSON;

const LEVELS: [&'static str; 5] = [LEVEL_OFF, LEVEL_ERROR, LEVEL_WARN, LEVEL_INFO, LEVEL_DEBUG];
const STYLES: [&'static str; 2] = [STYLE_JSON, STYLE_LOG4J];

impl JsonEncoder {
    pub fn new(proj_name: &str) -> Self {
        JsonEncoder {
            proj_name: proj_name.to_string(),
        }
    }
}

impl Log4jEncoder {
    pub fn new(proj_name: &str) -> Self {
        Log4jEncoder {
            proj_name: proj_name.to_string(),
        }
    }
}

impl Encode for Log4jEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record<'_>) -> Result<()> {
        let module = match get_module_name(record) {
            None => return Ok(()),
            Some(module) => module,
        };

        let str = format!(
            "{} {} {} [{}] {}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level(),
            self.proj_name,
            module,
            record.args().to_string().replace("\n", "\\n")
        );
        w.write_all(str.as_bytes())?;
        Ok(())
    }
}

impl Encode for JsonEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record<'_>) -> Result<()> {
        let module = match get_module_name(record) {
            None => return Ok(()),
            Some(module) => module,
        };

        let msg = JsonEncoderMsg {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            level: record.level().to_string().to_lowercase(),
            proj: self.proj_name.as_str(),
            module,
            msg: record.args().to_string(),
        };
        let str = serde_json::to_string(&msg)? + "\n";
        w.write_all(str.as_bytes())?;
        Ok(())
    }
}

/// To initialize the logger with configurations.
///
/// Only the first successful call installs the logger.
pub fn init(proj_name: &str, conf: &Config) -> Result<()> {
    let conf = apply_default(&conf);

    let level = match conf.level.as_deref() {
        Some(LEVEL_OFF) => LevelFilter::Off,
        Some(LEVEL_ERROR) => LevelFilter::Error,
        Some(LEVEL_WARN) => LevelFilter::Warn,
        Some(LEVEL_DEBUG) => LevelFilter::Debug,
        _ => LevelFilter::Info,
    };
    let style = match conf.style.as_deref() {
        None => DEF_STYLE,
        Some(v) => v,
    };

    let log4j_encoder = ConsoleAppender::builder()
        .encoder(Box::new(Log4jEncoder::new(proj_name)))
        .build();
    let json_encoder = ConsoleAppender::builder()
        .encoder(Box::new(JsonEncoder::new(proj_name)))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build(STYLE_LOG4J, Box::new(log4j_encoder)))
        .appender(Appender::builder().build(STYLE_JSON, Box::new(json_encoder)))
        .build(Root::builder().appender(style).build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("log.level")
            .long("log.level")
            .help("log level")
            .num_args(1)
            .value_parser(LEVELS),
    )
    .arg(
        Arg::new("log.style")
            .long("log.style")
            .help("log style")
            .num_args(1)
            .value_parser(STYLES),
    )
}

/// To read input arguments from command-line arguments and environment variables.
///
/// This function will call [`apply_default()`] to fill missing values so you do not need call it
/// again.
pub fn read_args(args: &ArgMatches) -> Config {
    apply_default(&Config {
        level: match args.get_one::<String>("log.level") {
            None => match env::var("LOG_LEVEL") {
                Err(_) => None,
                Ok(v) => pick(v.as_str(), &LEVELS),
            },
            Some(v) => pick(v.as_str(), &LEVELS),
        },
        style: match args.get_one::<String>("log.style") {
            None => match env::var("LOG_STYLE") {
                Err(_) => None,
                Ok(v) => pick(v.as_str(), &STYLES),
            },
            Some(v) => pick(v.as_str(), &STYLES),
        },
    })
}

/// Fill missing configuration with default values.
pub fn apply_default(config: &Config) -> Config {
    Config {
        level: match config.level.as_ref() {
            None => Some(DEF_LEVEL.to_string()),
            Some(v) => pick(v.as_str(), &LEVELS).or(Some(DEF_LEVEL.to_string())),
        },
        style: match config.style.as_ref() {
            None => Some(DEF_STYLE.to_string()),
            Some(v) => pick(v.as_str(), &STYLES).or(Some(DEF_STYLE.to_string())),
        },
    }
}

fn pick(value: &str, candidates: &[&'static str]) -> Option<String> {
    match candidates.contains(&value) {
        false => None,
        true => Some(value.to_string()),
    }
}

/// To filter third-party crates (built from the cargo registry) and try to get the module name
/// for printing logs.
fn get_module_name(record: &Record<'_>) -> Option<String> {
    match record.module_path() {
        None => None,
        Some(module) => match record.file() {
            None => Some(module.to_string()),
            Some(file) => match file.contains("/.cargo/") {
                false => match record.line() {
                    None => Some(file.to_string()),
                    Some(line) => Some(format!("{}:{}", file, line)),
                },
                true => None,
            },
        },
    }
}
