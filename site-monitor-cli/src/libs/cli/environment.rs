use std::error::Error as StdError;

use clap::{Arg, ArgAction, ArgMatches, Command};

use site_monitor_sdk::api::environment::{self, DEF_MN};

use super::{Config, new_client, print_json};

pub fn reg_args(cmd: Command) -> Command {
    cmd.about("Get the latest environment data of a monitoring point")
        .arg(
            Arg::new("mn")
                .short('m')
                .long("mn")
                .help(format!("Monitoring point number (default {})", DEF_MN))
                .num_args(1),
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
    let mn = args.get_one::<String>("mn").map(|v| v.as_str());

    match args.get_flag("raw") {
        false => print_json(&environment::get_environment_data(&client, mn).await?)?,
        true => print_json(&environment::get_latest_data(&client, mn).await?)?,
    }
    Ok(Some(()))
}
