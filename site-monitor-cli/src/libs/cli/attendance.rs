use std::error::Error as StdError;

use clap::{Arg, ArgAction, ArgMatches, Command, builder::RangedU64ValueParser};

use site_monitor_sdk::api::attendance::{self, SearchReq};

use super::{Config, new_client, print_json};

pub fn reg_args(cmd: Command) -> Command {
    cmd.about("Search attendance records")
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .help("Worker name")
                .num_args(1),
        )
        .arg(
            Arg::new("position")
                .short('p')
                .long("position")
                .help("Device position")
                .num_args(1),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .help("Records per page")
                .num_args(1)
                .value_parser(RangedU64ValueParser::<u64>::new().range(1..)),
        )
        .arg(
            Arg::new("current")
                .short('c')
                .long("current")
                .help("Page number, start from 1")
                .num_args(1)
                .value_parser(RangedU64ValueParser::<u64>::new().range(1..)),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Print the response envelope")
                .action(ArgAction::SetTrue),
        )
}

pub async fn run(conf: &Config, args: &ArgMatches) -> Result<Option<()>, Box<dyn StdError>> {
    let client = new_client(conf)?;
    let req = SearchReq {
        real_name: args.get_one::<String>("name").map(|v| v.as_str()),
        device_position: args.get_one::<String>("position").map(|v| v.as_str()),
        page_size: args.get_one::<u64>("page-size").copied(),
        current: args.get_one::<u64>("current").copied(),
    };

    match args.get_flag("raw") {
        false => print_json(&attendance::get_page(&client, &req).await?)?,
        true => print_json(&attendance::search_page(&client, &req).await?)?,
    }
    Ok(Some(()))
}
