//! Map one command line verb onto the bulb and report the outcome
use std::io::{BufRead, Write};

use crate::{
    capabilities::Colour,
    commands::{self, Command, CommandRequest, Hsv, Scene, SceneColour},
    config::Config,
    datatypes::DeviceInfo,
    error::Result,
};

pub const PROGRAM: &str = "tapolinker";

const COMMANDS: &[(&str, &str)] = &[
    ("on", "Turn on"),
    ("off", "Turn off"),
    ("toggle", "Toggle on/off"),
    ("brightness|b 50", "Set brightness (1-100)"),
    ("color|c 240,100", "Set color (hue,saturation or preset name)"),
    ("temp|t 2700", "Set white temperature (2500-6500)"),
    ("warm|cool|night", "Apply a preset scene"),
    ("reading|movie|party", "Apply a preset scene"),
    ("info", "Raw device info (JSON)"),
    ("reboot", "Reboot the bulb"),
    ("reset", "Factory reset (unpairs the bulb)"),
    ("status|s", "Show status and usage"),
    ("help|h", "Show this list"),
];

pub fn print_commands<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n--- Available Commands ---")?;
    for (command, about) in COMMANDS {
        writeln!(out, "  {} {:<20} - {}", PROGRAM, command, about)?;
    }
    writeln!(out, "\n  Color presets: {}", commands::preset_names())?;
    Ok(())
}

/// Print the outcome of a run and pick the process exit code
pub fn report<W: Write>(result: &Result<()>, err: &mut W) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(err, "Error: {}", error);
            1
        }
    }
}

fn minutes(value: Option<u64>) -> String {
    match value {
        Some(minutes) => format!("{} min", minutes),
        None => String::from("N/A"),
    }
}

async fn print_status<D: Colour, W: Write>(
    device: &D,
    info: &DeviceInfo,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let usage = device.device_usage().await?;

    writeln!(out, "\n--- Bulb Status ---")?;
    writeln!(out, "Name: {}", info.nickname)?;
    writeln!(out, "Power: {}", info.power())?;
    match info.brightness {
        Some(brightness) => writeln!(out, "Brightness: {}%", brightness)?,
        None => writeln!(out, "Brightness: N/A")?,
    }
    writeln!(out, "Model: {}", info.model)?;
    writeln!(out, "IP: {}", config.address)?;
    writeln!(out, "Usage Today: {}", minutes(usage.time_usage.today))?;
    writeln!(out, "Usage Past 30 Days: {}", minutes(usage.time_usage.past30))?;
    Ok(())
}

fn print_colour_usage<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Usage: {} color <hue>,<saturation>", PROGRAM)?;
    writeln!(out, "  hue: 0-360, saturation: 0-100")?;
    writeln!(out, "  Examples: 0,100 (red), 120,100 (green), 240,100 (blue)")?;
    Ok(())
}

async fn set_colour<D: Colour, W: Write>(
    device: &D,
    info: &DeviceInfo,
    hsv: Hsv,
    out: &mut W,
) -> Result<()> {
    device.set_hue_saturation(hsv.hue, hsv.saturation).await?;
    writeln!(
        out,
        "{} color set to hue:{}, saturation:{}",
        info.nickname, hsv.hue, hsv.saturation
    )?;
    Ok(())
}

async fn apply_scene<D: Colour, W: Write>(
    device: &D,
    info: &DeviceInfo,
    scene: Scene,
    out: &mut W,
) -> Result<()> {
    info!("applying {} scene", scene);
    let (colour, brightness) = scene.settings();
    match colour {
        SceneColour::Temperature(kelvin) => device.set_colour_temperature(kelvin).await?,
        SceneColour::Hsv(hsv) => device.set_hue_saturation(hsv.hue, hsv.saturation).await?,
    }
    device.set_brightness(brightness).await?;
    writeln!(out, "{} set to {}", info.nickname, scene.description())?;
    Ok(())
}

fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "{} (yes/no): ", prompt)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Run a single command against the bulb.
///
/// At most the device calls the verb maps to are made. Bad `brightness`,
/// `color` and `temp` arguments print usage and return `Ok` without touching
/// the device; device errors are returned untouched.
pub async fn dispatch<D, R, W>(
    request: &CommandRequest,
    device: &D,
    info: &DeviceInfo,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    D: Colour,
    R: BufRead,
    W: Write,
{
    debug!("dispatching {:?}", request);
    match &request.command {
        Command::On => {
            device.switch_on().await?;
            writeln!(out, "{} turned ON", info.nickname)?;
        }
        Command::Off => {
            device.switch_off().await?;
            writeln!(out, "{} turned OFF", info.nickname)?;
        }
        Command::Toggle => {
            let state = if device.toggle(info.device_on).await? {
                "ON"
            } else {
                "OFF"
            };
            writeln!(out, "{} turned {}", info.nickname, state)?;
        }
        Command::Brightness => match commands::parse_brightness(request.value()) {
            Some(brightness) => {
                device.set_brightness(brightness).await?;
                writeln!(out, "{} brightness set to {}%", info.nickname, brightness)?;
            }
            None => {
                writeln!(out, "Usage: {} brightness <1-100>", PROGRAM)?;
            }
        },
        Command::Color => match request.value() {
            None => print_colour_usage(out)?,
            Some(value) => match value.parse::<Hsv>() {
                Ok(hsv) => set_colour(device, info, hsv, out).await?,
                Err(reason) => {
                    writeln!(out, "{}", reason)?;
                    print_colour_usage(out)?;
                    writeln!(out, "  Presets: {}", commands::preset_names())?;
                }
            },
        },
        Command::Temp => match commands::parse_temperature(request.value()) {
            Some(kelvin) => {
                device.set_colour_temperature(kelvin).await?;
                writeln!(out, "{} temperature set to {}K", info.nickname, kelvin)?;
            }
            None => {
                writeln!(out, "Usage: {} temp <2500-6500>", PROGRAM)?;
                writeln!(out, "  2500 = Warm white (candle)")?;
                writeln!(out, "  4000 = Neutral white")?;
                writeln!(out, "  6500 = Cool white (daylight)")?;
            }
        },
        Command::Scene(scene) => apply_scene(device, info, *scene, out).await?,
        Command::Info => {
            let json = device.device_info_json().await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        Command::Reboot => {
            if confirm("Reboot the bulb?", input, out)? {
                device.reboot().await?;
                writeln!(out, "{} is rebooting...", info.nickname)?;
            } else {
                writeln!(out, "Cancelled")?;
            }
        }
        Command::Reset => {
            if confirm("FACTORY RESET? This will unpair the bulb!", input, out)? {
                device.reset().await?;
                writeln!(out, "{} factory reset initiated", info.nickname)?;
            } else {
                writeln!(out, "Cancelled")?;
            }
        }
        Command::Help => print_commands(out)?,
        Command::Status => print_status(device, info, config, out).await?,
        Command::Unknown(verb) => {
            debug!("unknown command {:?}", verb);
            print_status(device, info, config, out).await?;
            print_commands(out)?;
        }
    }
    Ok(())
}
