//! Command line verbs and their argument parsers
use std::{fmt, str::FromStr};

pub const BRIGHTNESS_RANGE: (i64, i64) = (1, 100);
pub const TEMPERATURE_RANGE: (i64, i64) = (2500, 6500);
pub const MAX_HUE: u16 = 360;
pub const MAX_SATURATION: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub hue: u16,
    pub saturation: u8,
}

impl Hsv {
    pub const fn new(hue: u16, saturation: u8) -> Self {
        Self { hue, saturation }
    }
}

pub const COLOUR_PRESETS: [(&str, Hsv); 9] = [
    ("red", Hsv::new(0, 100)),
    ("orange", Hsv::new(30, 100)),
    ("yellow", Hsv::new(60, 100)),
    ("green", Hsv::new(120, 100)),
    ("cyan", Hsv::new(180, 100)),
    ("blue", Hsv::new(240, 100)),
    ("purple", Hsv::new(270, 100)),
    ("pink", Hsv::new(300, 100)),
    ("white", Hsv::new(0, 0)),
];

pub fn preset_names() -> String {
    COLOUR_PRESETS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<&str>>()
        .join(", ")
}

fn parse_component(name: &str, value: &str, max: u16) -> Result<u16, String> {
    let parsed = value
        .trim()
        .parse::<u16>()
        .map_err(|_| format!("Invalid {}: {}", name, value.trim()))?;
    if parsed > max {
        return Err(format!("Invalid {}; must be between 0 and {}", name, max));
    }
    Ok(parsed)
}

impl FromStr for Hsv {
    type Err = String;

    /// Accepts either a preset name or `<hue>,<saturation>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((_, hsv)) = COLOUR_PRESETS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
        {
            return Ok(*hsv);
        }

        match s.split_once(',') {
            Some((hue, saturation)) => {
                let hue = parse_component("hue", hue, MAX_HUE)?;
                let saturation = parse_component("saturation", saturation, MAX_SATURATION)?;
                // saturation <= 100 was checked above
                Ok(Hsv::new(hue, saturation as u8))
            }
            None => Err(format!("Unknown color: {}", s)),
        }
    }
}

// Any finite number is accepted; the fractional part is dropped.
fn parse_clamped(value: Option<&str>, (min, max): (i64, i64)) -> Option<i64> {
    let number = value?.trim().parse::<f64>().ok()?;
    if !number.is_finite() {
        return None;
    }
    Some((number.trunc() as i64).clamp(min, max))
}

/// Brightness percentage, truncated and clamped into 1-100.
/// `None` when absent or not a number, so `12.5` sets 12 but `abc` does not.
pub fn parse_brightness(value: Option<&str>) -> Option<u8> {
    parse_clamped(value, BRIGHTNESS_RANGE).map(|v| v as u8)
}

/// Colour temperature in Kelvin, clamped into 2500-6500
pub fn parse_temperature(value: Option<&str>) -> Option<u16> {
    parse_clamped(value, TEMPERATURE_RANGE).map(|v| v as u16)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneColour {
    Temperature(u16),
    Hsv(Hsv),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Warm,
    Cool,
    Night,
    Reading,
    Movie,
    Party,
}

impl Scene {
    /// Colour to apply first, then the brightness
    pub fn settings(self) -> (SceneColour, u8) {
        use Scene::*;
        match self {
            Warm => (SceneColour::Temperature(2700), 50),
            Cool => (SceneColour::Temperature(6500), 100),
            Night => (SceneColour::Temperature(2500), 10),
            Reading => (SceneColour::Temperature(4000), 80),
            Movie => (SceneColour::Hsv(Hsv::new(30, 80)), 20),
            Party => (SceneColour::Hsv(Hsv::new(280, 100)), 100),
        }
    }

    pub fn description(self) -> &'static str {
        use Scene::*;
        match self {
            Warm => "warm mode",
            Cool => "cool daylight mode",
            Night => "night mode",
            Reading => "reading mode",
            Movie => "movie mode",
            Party => "party mode (purple)",
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Scene::Warm => "warm",
            Scene::Cool => "cool",
            Scene::Night => "night",
            Scene::Reading => "reading",
            Scene::Movie => "movie",
            Scene::Party => "party",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
    Toggle,
    Brightness,
    Color,
    Temp,
    Scene(Scene),
    Info,
    Reboot,
    Reset,
    Help,
    Status,
    Unknown(String),
}

impl Command {
    /// `help` is answered without opening a device session
    pub fn needs_device(&self) -> bool {
        *self != Command::Help
    }
}

impl From<Option<&str>> for Command {
    fn from(verb: Option<&str>) -> Self {
        match verb {
            None | Some("status") | Some("s") => Command::Status,
            Some("on") => Command::On,
            Some("off") => Command::Off,
            Some("toggle") => Command::Toggle,
            Some("brightness") | Some("b") => Command::Brightness,
            Some("color") | Some("c") => Command::Color,
            Some("temp") | Some("t") => Command::Temp,
            Some("warm") => Command::Scene(Scene::Warm),
            Some("cool") => Command::Scene(Scene::Cool),
            Some("night") => Command::Scene(Scene::Night),
            Some("reading") => Command::Scene(Scene::Reading),
            Some("movie") => Command::Scene(Scene::Movie),
            Some("party") => Command::Scene(Scene::Party),
            Some("info") => Command::Info,
            Some("reboot") => Command::Reboot,
            Some("reset") => Command::Reset,
            Some("help") | Some("h") => Command::Help,
            Some(other) => Command::Unknown(String::from(other)),
        }
    }
}

/// Verb and raw argument as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub command: Command,
    pub value: Option<String>,
}

impl CommandRequest {
    pub fn new(verb: Option<&str>, value: Option<&str>) -> Self {
        Self {
            command: Command::from(verb),
            value: value.map(String::from),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
