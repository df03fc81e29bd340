//! Command execution

use std::io;
use std::path::{Path, PathBuf};

use shipcost_app::config::Config;
use shipcost_app::export::export_to_excel;
use shipcost_app::quote_service::QuoteService;
use shipcost_domain::model::Dimensions;
use shipcost_infra::sample_data::{create_samples_if_missing, write_samples};
use shipcost_types::{OutputFormat, Result};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::menu::Menu;
use crate::output::{output_best, output_quote, output_routes, output_vehicles};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = Config::config_path()?;
    let mut config = Config::load_from(&config_path)?;

    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => cmd_menu(&config),

        Commands::Vehicles => {
            let service = QuoteService::open(&config)?;
            output_vehicles(output_format, service.catalog().fleet())
        }

        Commands::Routes => {
            let service = QuoteService::open(&config)?;
            output_routes(output_format, service.catalog().routes())
        }

        Commands::Quote {
            vehicle,
            route,
            weight,
            length,
            width,
            height,
        } => {
            let service = QuoteService::open(&config)?;
            let quote = service.quote(&vehicle, &route, weight, Dimensions::new(length, width, height))?;
            output_quote(output_format, &quote, &config.currency_symbol)
        }

        Commands::Best {
            shipments,
            route,
            export,
        } => cmd_best(&config, output_format, shipments, route, export),

        Commands::Init { force } => cmd_init(&config, force),

        Commands::Config {
            show,
            set_data_dir,
            set_routes_file,
            set_fleet_file,
            set_shipments_file,
            set_output,
            set_currency,
            set_create_samples,
            reset,
        } => cmd_config(
            &config_path,
            ConfigUpdate {
                show,
                data_dir: set_data_dir,
                routes_file: set_routes_file,
                fleet_file: set_fleet_file,
                shipments_file: set_shipments_file,
                output_format: set_output,
                currency_symbol: set_currency,
                create_samples: set_create_samples,
                reset,
            },
        ),
    }
}

fn cmd_menu(config: &Config) -> Result<()> {
    let service = match QuoteService::open(config) {
        Ok(service) => service,
        Err(e) => {
            println!("Error loading CSVs: {}", e);
            return Ok(());
        }
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&service, &config.currency_symbol, stdin.lock(), stdout.lock()).run()
}

fn cmd_best(
    config: &Config,
    output_format: OutputFormat,
    shipments: Option<PathBuf>,
    route: Option<String>,
    export: Option<PathBuf>,
) -> Result<()> {
    let service = QuoteService::open(config)?;
    let evaluations = match (route, shipments) {
        (Some(route_id), path) => service.best_options_on_route(&route_id, path)?,
        (None, Some(path)) => service.best_options_from(path)?,
        (None, None) => service.best_options()?,
    };

    output_best(output_format, &evaluations, &config.currency_symbol)?;

    if let Some(path) = export {
        export_to_excel(&evaluations, &path)?;
        info!(path = %path.display(), "exported workbook");
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}

fn cmd_init(config: &Config, force: bool) -> Result<()> {
    let files = config.data_files();
    let written = if force {
        write_samples(&files)?;
        true
    } else {
        create_samples_if_missing(&files)?
    };

    if written {
        println!("Sample files written to {}", config.data_dir().display());
    } else {
        println!("All data files already exist (use --force to overwrite)");
    }
    Ok(())
}

#[derive(Default)]
struct ConfigUpdate {
    show: bool,
    data_dir: Option<PathBuf>,
    routes_file: Option<String>,
    fleet_file: Option<String>,
    shipments_file: Option<String>,
    output_format: Option<OutputFormat>,
    currency_symbol: Option<String>,
    create_samples: Option<bool>,
    reset: bool,
}

fn cmd_config(config_path: &Path, update: ConfigUpdate) -> Result<()> {
    if update.reset {
        let config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load_from(config_path)?;
    let mut modified = false;

    if let Some(dir) = update.data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(name) = update.routes_file {
        config.routes_file = name;
        modified = true;
    }

    if let Some(name) = update.fleet_file {
        config.fleet_file = name;
        modified = true;
    }

    if let Some(name) = update.shipments_file {
        config.shipments_file = name;
        modified = true;
    }

    if let Some(format) = update.output_format {
        config.output_format = format;
        modified = true;
    }

    if let Some(symbol) = update.currency_symbol {
        config.currency_symbol = symbol;
        modified = true;
    }

    if let Some(enabled) = update.create_samples {
        config.create_samples = enabled;
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration updated");
    }

    if update.show || !modified {
        println!("{}", config);
    }

    Ok(())
}
