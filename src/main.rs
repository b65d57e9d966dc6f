mod app;
mod config;
mod error;
mod events;
mod logger;
mod state;
mod ui;
mod wheel;

use anyhow::{anyhow, Result};
use app::App;
use clap::{App as ClapApp, Arg, ArgMatches};
use config::Config;
use logger::LogBuffer;
use ui::Theme;

fn cli<'a, 'b>() -> ClapApp<'a, 'b> {
    ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml (default: ~/.config/lucky-wheel)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Color theme, overriding the configuration file")
                .possible_values(&["tokyo-night", "dracula", "catppuccin-mocha", "rose-pine-dawn"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("Seed the random source for reproducible spins")
                .takes_value(true),
        )
}

fn parse_seed(matches: &ArgMatches) -> Result<Option<u64>> {
    matches
        .value_of("seed")
        .map(|seed| {
            seed.parse::<u64>()
                .map_err(|e| anyhow!("Invalid seed '{}': {}", seed, e))
        })
        .transpose()
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(theme_name) = matches.value_of("theme") {
        config.theme_name = theme_name.to_string();
    }
    if Theme::from_name(&config.theme_name).is_none() {
        return Err(anyhow!(
            "Unknown theme '{}'; available: {}",
            config.theme_name,
            Theme::available_themes().join(", ")
        ));
    }
    let seed = parse_seed(&matches)?;

    let log_buffer = LogBuffer::new();
    logger::init(config.log_level()?, &log_buffer)?;
    if let Some(path) = config.file_path() {
        log::info!("Using configuration at {}", path.display());
    }

    App::start(config, seed, log_buffer).await
}
