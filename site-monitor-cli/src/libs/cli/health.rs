use std::error::Error as StdError;

use clap::{Arg, ArgAction, ArgMatches, Command, builder::RangedU64ValueParser};

use site_monitor_sdk::api::health::{self, SearchReq};

use super::{Config, new_client, print_json};

pub fn reg_args(cmd: Command) -> Command {
    cmd.about("Search smart band health records (requires a token)")
        .arg(
            Arg::new("user")
                .short('u')
                .long("user")
                .help("User name")
                .num_args(1),
        )
        .arg(
            Arg::new("org")
                .short('o')
                .long("org")
                .help("Organization ID")
                .num_args(1),
        )
        .arg(
            Arg::new("device")
                .short('d')
                .long("device")
                .help("Smart band code")
                .num_args(1),
        )
        .arg(Arg::new("unit").long("unit").help("Unit").num_args(1))
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
        user_name: args.get_one::<String>("user").map(|v| v.as_str()),
        org_id: args.get_one::<String>("org").map(|v| v.as_str()),
        device_code: args.get_one::<String>("device").map(|v| v.as_str()),
        unit: args.get_one::<String>("unit").map(|v| v.as_str()),
        page_size: args.get_one::<u64>("page-size").copied(),
        current: args.get_one::<u64>("current").copied(),
    };

    match args.get_flag("raw") {
        false => print_json(&health::get_records(&client, &req).await?)?,
        true => print_json(&health::search_records(&client, &req).await?)?,
    }
    Ok(Some(()))
}
