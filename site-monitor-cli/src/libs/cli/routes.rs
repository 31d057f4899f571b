use std::{
    collections::HashMap,
    error::Error as StdError,
    io::{Error as IoError, ErrorKind},
};

use clap::{Arg, ArgMatches, Command};
use serde::Serialize;

use site_monitor_sdk::routes;

use super::print_json;

#[derive(Serialize)]
struct ResolveRes<'a> {
    path: &'static str,
    name: Option<&'static str>,
    component: &'static str,
    title: Option<&'static str>,
    params: &'a HashMap<String, String>,
}

pub fn reg_args(cmd: Command) -> Command {
    cmd.about("H5 page route table")
        .subcommand(Command::new("list").about("List declared routes"))
        .subcommand(
            Command::new("resolve")
                .about("Resolve a location to its page")
                .arg(
                    Arg::new("path")
                        .short('p')
                        .long("path")
                        .help("Location path, for example `/redirect/h5/crane`")
                        .num_args(1)
                        .required(true),
                ),
        )
}

pub fn run(args: &ArgMatches) -> Result<Option<()>, Box<dyn StdError>> {
    match args.subcommand() {
        Some(("list", _)) => {
            print_json(&routes::table())?;
            Ok(Some(()))
        }
        Some(("resolve", args)) => {
            let path = args.get_one::<String>("path").unwrap();
            let matched = match routes::resolve(path.as_str()) {
                None => {
                    let msg = format!("no route for {}", path);
                    return Err(Box::new(IoError::new(ErrorKind::NotFound, msg)));
                }
                Some(matched) => matched,
            };
            print_json(&ResolveRes {
                path: matched.route.path,
                name: matched.route.name,
                component: matched.route.component,
                title: matched.title(),
                params: &matched.params,
            })?;
            Ok(Some(()))
        }
        _ => Ok(None),
    }
}
