use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::application::{AppError, DayReport};
use crate::domain::{CaloriesTracker, CashTracker, Entry};
use crate::io::{read_entries, read_entries_from_path};

/// Kopilka - Daily budget and calorie tracker
#[derive(Parser)]
#[command(name = "kopilka")]
#[command(about = "Track daily spending or calorie intake against a fixed limit")]
#[command(version)]
pub struct Cli {
    /// Daily limit (currency units or kcal)
    #[arg(short, long)]
    pub limit: f64,

    /// Entries CSV file with an amount,comment,date header ("-" or omitted
    /// reads stdin; dates are DD.MM.YYYY, empty means today)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Money spending report
    Cash {
        /// Currency to report the remaining budget in: rub, usd or eur
        #[arg(short, long, default_value = "rub")]
        currency: String,
    },

    /// Calorie intake report
    Calories,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if self.limit <= 0.0 {
            return Err(AppError::InvalidLimit(self.limit).into());
        }

        let entries = self.load_entries()?;
        let today = Local::now().date_naive();

        let report = match &self.command {
            Commands::Cash { currency } => {
                let mut tracker = CashTracker::new(self.limit);
                for entry in entries {
                    tracker.add_record(entry);
                }
                DayReport::for_cash(&tracker, currency, today)?
            }

            Commands::Calories => {
                let mut tracker = CaloriesTracker::new(self.limit);
                for entry in entries {
                    tracker.add_record(entry);
                }
                DayReport::for_calories(&tracker, today)
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report.render_text());
        }

        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<Entry>> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => read_entries_from_path(path)
                .with_context(|| format!("Failed to load entries from {}", path.display())),
            _ => read_entries(std::io::stdin().lock()).context("Failed to load entries from stdin"),
        }
    }
}
