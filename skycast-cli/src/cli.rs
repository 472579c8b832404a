use anyhow::Context;
use clap::{Parser, Subcommand};
use skycast_core::provider::open_meteo::{OpenMeteoForecaster, OpenMeteoGeocoder};
use skycast_core::{Config, WeatherSession, render, session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Daily weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up the forecast for a place once and exit.
    Show {
        /// Place name to search for.
        place: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        tracing::debug!(
            geocoding_url = %config.geocoding_url,
            forecast_url = %config.forecast_url,
            forecast_days = config.forecast_days,
            "loaded configuration"
        );
        let mut session = build_session(&config)?;

        match self.command {
            Some(Command::Show { place }) => {
                run_query(&mut session, &place).await;
            }
            None => {
                interactive(&mut session).await?;
            }
        }

        Ok(())
    }
}

fn build_session(config: &Config) -> anyhow::Result<WeatherSession> {
    let geocoder = OpenMeteoGeocoder::new(&config.geocoding_url)
        .context("Failed to build geocoding client")?;
    let forecaster = OpenMeteoForecaster::new(&config.forecast_url, config.forecast_days)
        .context("Failed to build forecast client")?;

    Ok(WeatherSession::new(Box::new(geocoder), Box::new(forecaster)))
}

async fn run_query(session: &mut WeatherSession, place: &str) {
    if !session::triggers_lookup(place) {
        println!("Type at least two characters to search.");
        return;
    }

    println!("Loading...");
    session.lookup(place).await;
    print!("{}", render::render_state(session.state()));
}

async fn interactive(session: &mut WeatherSession) -> anyhow::Result<()> {
    println!("Skycast");

    loop {
        let entry = inquire::Text::new("Search for a location:")
            .with_help_message("press ESC or enter nothing to quit")
            .prompt_skippable()
            .context("Failed to read input")?;

        let Some(place) = entry else { break };
        if place.is_empty() {
            break;
        }

        run_query(session, &place).await;
    }

    Ok(())
}
