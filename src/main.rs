use cloudcalc::billing::{optimization_tips, RateCatalog};
use cloudcalc::cli::{Cli, Command};
use cloudcalc::config::Config;
use cloudcalc::core::report::{
    render_catalog, render_comparison, render_multi, render_single, render_tips,
};
use cloudcalc::core::{compare, estimate_multiple, estimate_single, Shell};
use cloudcalc::debug_println;
use cloudcalc::session::SessionHistory;
use serde::Serialize;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let config_path = cli.config.as_deref();

    // Handle configuration commands
    if cli.init {
        let (path, created) = Config::init(config_path)?;
        if created {
            println!("Created config at {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    let mut config = Config::load(config_path)?;
    config.apply_currency_override(cli.currency.clone());

    if cli.print {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if cli.check {
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    let catalog = config.catalog()?;
    let currency = config.currency.as_str();
    debug_println!(
        "Loaded {} resources, currency {}",
        catalog.len(),
        currency
    );

    let result = match cli.command.unwrap_or(Command::Catalog) {
        Command::Catalog => output(cli.json, catalog.entries(), || {
            render_catalog(&catalog, currency)
        }),
        Command::Single { resource, usage } => estimate_single(&catalog, &resource, usage)
            .map_err(Into::into)
            .and_then(|estimate| {
                output(cli.json, &estimate, || render_single(&estimate, currency))
            }),
        Command::Multi { items } => estimate_multiple(&catalog, &items)
            .map_err(Into::into)
            .and_then(|estimate| {
                output(cli.json, &estimate, || {
                    render_multi(&catalog, &estimate, currency)
                })
            }),
        Command::Compare { scenario, items } => compare(&catalog, &scenario, &items)
            .map_err(Into::into)
            .and_then(|comparison| {
                output(cli.json, &comparison, || {
                    render_comparison(&catalog, &comparison, currency)
                })
            }),
        Command::Tips { resource } => handle_tips(&catalog, &resource, cli.json),
        Command::Session => run_session(&catalog, currency),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Print `value` as JSON or as the rendered text report
fn output<T, F>(json: bool, value: &T, render: F) -> Result<(), Box<dyn std::error::Error>>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", render());
    }
    Ok(())
}

fn handle_tips(
    catalog: &RateCatalog,
    resource: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let entry = catalog.get(resource)?;
    let tips = optimization_tips(&entry.id);
    output(json, &tips, || render_tips(&tips))
}

fn run_session(catalog: &RateCatalog, currency: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Cloud Billing Calculator - type 'help' for commands, 'quit' to leave");

    let mut history = SessionHistory::new();
    let mut shell = Shell::new(catalog, currency);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout, &mut history)?;

    Ok(())
}
