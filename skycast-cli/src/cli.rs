use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use skycast_core::{Config, FetchError, SearchOutcome, Searcher, source_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup with a 4-day forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default city.
    Configure,

    /// Show current conditions and the forecast for a city.
    Show {
        /// City name; falls back to the configured default city.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(city).await,
            // Bare `skycast` is the startup search for the default city.
            None => show(None).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("API key prompt was cancelled")?;

    let default_city = Text::new("Default city:")
        .with_default(config.default_city())
        .prompt()
        .context("Default city prompt was cancelled")?;

    config.api_key = Some(api_key);
    config.default_city = Some(default_city);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let city = city.unwrap_or_else(|| config.default_city().to_owned());

    let searcher = Searcher::new(source_from_config(&config));

    match searcher.search(&city).await {
        Ok(outcome) => {
            render(&outcome);
            Ok(())
        }
        Err(err @ FetchError::Api { .. }) => bail!("{err}"),
        Err(err) => {
            log::error!("weather lookup for {city:?} failed: {err}");
            bail!("weather lookup failed");
        }
    }
}

fn render(outcome: &SearchOutcome) {
    let current = &outcome.current;

    println!("{}  {} °C  {}", current.location_name, current.temperature_c, current.icon);
    println!(
        "humidity {}%   wind {} m/s   observed {}",
        current.humidity_pct,
        current.wind_speed_mps,
        current.observation_time.format("%H:%M UTC"),
    );

    if outcome.forecast.is_empty() {
        return;
    }

    println!();
    println!("4-day forecast");
    for day in &outcome.forecast {
        println!("  {}  {:>6} °C  {}", day_label(&day.date), day.avg_temp, day.icon);
    }
}

/// Abbreviated weekday for a `"YYYY-MM-DD"` date; the raw date when it
/// doesn't parse.
fn day_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a").to_string())
        .unwrap_or_else(|_| date.to_owned())
}
