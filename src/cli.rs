//! CLI command definitions and subcommands

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wayfinder - trip-planning workflow
#[derive(Parser)]
#[command(
    name = "wayfinder",
    about = "Plan a trip: capture parameters, curate recommended places, generate an itinerary",
    version,
    after_help = "Logs are written to: ~/.local/share/wayfinder/logs/wayfinder.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive trip-planning workflow
    Plan {
        /// Where the trip starts
        #[arg(long)]
        source: Option<String>,

        /// Where the trip goes
        #[arg(long)]
        destination: Option<String>,

        /// Departure date
        #[arg(long = "depart", value_name = "YYYY-MM-DD")]
        departure_date: Option<NaiveDate>,

        /// Return date
        #[arg(long = "return", value_name = "YYYY-MM-DD")]
        return_date: Option<NaiveDate>,

        /// Budget for the trip (free text, e.g. "2000")
        #[arg(long)]
        budget: Option<String>,

        /// Free-text description of interests and preferences
        #[arg(long)]
        description: Option<String>,
    },
}
