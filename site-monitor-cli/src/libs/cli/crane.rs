use std::error::Error as StdError;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use site_monitor_sdk::api::crane::{self, Access, DEF_TOWER_CRANE_ID, LatestReq};

use super::{Config, new_client, print_json};

pub fn reg_args(cmd: Command) -> Command {
    cmd.about("Get the latest tower crane data")
        .arg(
            Arg::new("id")
                .short('i')
                .long("id")
                .help(format!("Tower crane ID (default {})", DEF_TOWER_CRANE_ID))
                .num_args(1),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .help("Data type (default 0)")
                .num_args(1)
                .value_parser(value_parser!(i32)),
        )
        .arg(
            Arg::new("auth")
                .long("auth")
                .help("Use the authenticated API path")
                .action(ArgAction::SetTrue),
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
    let req = LatestReq {
        tower_crane_id: args.get_one::<String>("id").map(|v| v.as_str()),
        data_type: args.get_one::<i32>("type").copied(),
        access: match args.get_flag("auth") {
            false => Access::Anonymous,
            true => Access::Authenticated,
        },
    };

    match args.get_flag("raw") {
        false => print_json(&crane::get_control_data(&client, &req).await?)?,
        true => print_json(&crane::get_latest_data(&client, &req).await?)?,
    }
    Ok(Some(()))
}
