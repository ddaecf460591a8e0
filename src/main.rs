//! wdlive CLI - Render weather items from a Weather Display clientraw record.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use wdlive::{
    ClientRaw, Config, Preferences, PressureUnit, RainfallUnit, Screen, Settings, TemperatureUnit,
    WeatherItem, WeatherItemType, WindDirectionUnit, WindSpeedUnit,
};

/// wdlive - Show Weather Display clientraw data as two-line weather items
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Clientraw file to read (defaults to the configured path, then stdin)
    #[arg(short, long, env = "WDLIVE_CLIENTRAW")]
    file: Option<PathBuf>,

    /// Weather item to show (e.g. summary, average_wind, "Dew Point")
    #[arg(short, long)]
    item: Option<WeatherItemType>,

    /// Pressure unit (hPa, inHg, kPa, mb, mmHg)
    #[arg(long)]
    pressure: Option<PressureUnit>,

    /// Rainfall unit (in, mm)
    #[arg(long)]
    rainfall: Option<RainfallUnit>,

    /// Temperature unit (°C/celsius, °F/fahrenheit)
    #[arg(long)]
    temperature: Option<TemperatureUnit>,

    /// Wind direction unit (cardinal, degrees)
    #[arg(long)]
    wind_direction: Option<WindDirectionUnit>,

    /// Wind speed unit (Bft, kph, kts, m/s, mph)
    #[arg(long)]
    wind_speed: Option<WindSpeedUnit>,

    /// Print every weather item in cycle order
    #[arg(short, long)]
    all: bool,

    /// Print items as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = Config::load()?;
    debug!("Loaded config: {:?}", config);

    let mut settings = Settings::with_preferences(&preferences(&config, &args));

    let source = args.file.clone().or(config.clientraw_path);
    let record = read_record(source.as_deref()).map(|raw| ClientRaw::new(&raw));

    let items = render(record.as_ref(), &mut settings, args.all);

    if args.json {
        let json = if args.all {
            serde_json::to_string_pretty(&items)
        } else {
            serde_json::to_string_pretty(&items[0])
        }
        .context("Failed to serialize weather items")?;
        println!("{}", json);
    } else {
        for item in &items {
            println!("{}", item);
        }
    }

    Ok(())
}

/// Starting selections from the config file, overridden by command line flags.
fn preferences(config: &Config, args: &Args) -> Preferences {
    let configured = config.preferences();
    Preferences {
        item: args.item.unwrap_or(configured.item),
        pressure: args.pressure.unwrap_or(configured.pressure),
        rainfall: args.rainfall.unwrap_or(configured.rainfall),
        temperature: args.temperature.unwrap_or(configured.temperature),
        wind_direction: args.wind_direction.unwrap_or(configured.wind_direction),
        wind_speed: args.wind_speed.unwrap_or(configured.wind_speed),
    }
}

/// Read the raw record text, or `None` if it cannot be read.
///
/// Trailing line terminators are stripped.
fn read_record(path: Option<&Path>) -> Option<String> {
    let result = match path {
        Some(path) => {
            info!("Reading clientraw from {}", path.display());
            std::fs::read_to_string(path)
        }
        None => {
            info!("Reading clientraw from stdin");
            io::read_to_string(io::stdin())
        }
    };

    match result {
        Ok(raw) => Some(raw.trim_end_matches(['\r', '\n']).to_string()),
        Err(e) => {
            warn!("Failed to read clientraw: {}", e);
            None
        }
    }
}

/// Render the selected item, or every item starting from it when `all` is set.
fn render(record: Option<&ClientRaw>, settings: &mut Settings, all: bool) -> Vec<WeatherItem> {
    let screen = Screen::classify(record);
    if !all {
        return vec![screen.render(settings)];
    }

    let mut items = Vec::with_capacity(WeatherItemType::ALL.len());
    for _ in 0..WeatherItemType::ALL.len() {
        items.push(screen.render(settings));
        settings.next_weather_item_type();
    }
    items
}
