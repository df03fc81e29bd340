//! CLI definition using clap

use clap::{Parser, Subcommand};
use shipcost_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shipcost")]
#[command(version)]
#[command(about = "Shipment transport cost calculator for a small vehicle fleet")]
#[command(long_about = None)]
pub struct Cli {
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding routes, fleet and shipments files. Uses config value if not specified.
    #[arg(long, short = 'd', global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu
    Menu,

    /// List vehicles in the fleet
    Vehicles,

    /// List known routes
    Routes,

    /// Price one shipment with one vehicle
    Quote {
        /// Vehicle name or its number in the fleet listing
        #[arg(long)]
        vehicle: String,

        /// Route id (e.g. R001)
        #[arg(long, short = 'r')]
        route: String,

        /// Actual weight (kg)
        #[arg(long, short = 'w')]
        weight: f64,

        /// Length (cm)
        #[arg(long, short = 'l')]
        length: f64,

        /// Width (cm)
        #[arg(long)]
        width: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,
    },

    /// Find the cheapest vehicle for every shipment
    Best {
        /// Shipments CSV to evaluate instead of the configured one
        #[arg(long, short = 's')]
        shipments: Option<PathBuf>,

        /// Only shipments travelling on this route id
        #[arg(long, short = 'r')]
        route: Option<String>,

        /// Also write the results to an Excel workbook
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Write the sample routes, fleet and shipments files
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set routes file name
        #[arg(long)]
        set_routes_file: Option<String>,

        /// Set fleet file name (.csv or .toml)
        #[arg(long)]
        set_fleet_file: Option<String>,

        /// Set shipments file name
        #[arg(long)]
        set_shipments_file: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set currency symbol used in tables
        #[arg(long)]
        set_currency: Option<String>,

        /// Enable/disable writing sample files when inputs are missing
        #[arg(long)]
        set_create_samples: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
