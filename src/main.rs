use std::{io, process};

use clap::{App, AppSettings, Arg};
use env_logger::Env;

use tapolinker::{
    capabilities::DeviceActions,
    commands::CommandRequest,
    config::Config,
    devices::L530,
    dispatch::{self, PROGRAM},
    error::Result,
};

async fn run(request: CommandRequest) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !request.command.needs_device() {
        return dispatch::print_commands(&mut out);
    }

    let config = Config::from_env();
    log::debug!("using {:?}", config);

    let device = L530::connect(&config).await?;
    let info = device.device_info().await?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    dispatch::dispatch(&request, &device, &info, &config, &mut input, &mut out).await
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = App::new("Tapo smart bulb CLI")
        .bin_name(PROGRAM)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Control a TP-Link Tapo colour bulb on the local network.\n\
                Reads TAPO_EMAIL, TAPO_PASSWORD and BULB_IP from the environment or a .env file.")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(Arg::with_name("command")
            .index(1)
            .help("on, off, toggle, brightness, color, temp, warm, cool, night, reading, movie, party, info, reboot, reset, status, help")
        )
        .arg(Arg::with_name("value")
            .index(2)
            .help("Argument for brightness (1-100), color (hue,saturation or preset) or temp (2500-6500)")
        )
        .get_matches();

    let request = CommandRequest::new(matches.value_of("command"), matches.value_of("value"));

    let result = run(request).await;
    let code = dispatch::report(&result, &mut io::stderr());
    if code != 0 {
        process::exit(code);
    }
}
