//! `larder` - CLI for the household food-inventory tracker
//!
//! This binary provides the command-line interface for managing tracked
//! food items, the shelf-life guide, and the reminder sweep.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{BufRead, Write};

use chrono::{Duration, Local, NaiveDate};
use clap::Parser;

use larder::cli::{Cli, Command, ConfigCommand, GuideCommand};
use larder::notify::NoopNotifier;
use larder::render::{food_rows, render_foods, render_guide};
use larder::{
    init_logging, run_sweep, Config, FoodDraft, Inventory, Notifier, Store, SweepOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    let today = Local::now().date_naive();

    let result = match cli.command {
        Command::Add(add_cmd) => handle_add(&config, &add_cmd, today).await,
        Command::List(list_cmd) => handle_list(&config, list_cmd.json, today),
        Command::Remove(remove_cmd) => handle_remove(&config, &remove_cmd.id, remove_cmd.yes),
        Command::Guide(guide_cmd) => handle_guide(&config, guide_cmd),
        Command::Sweep => handle_sweep(&config, today).await,
        Command::Watch => handle_watch(&config).await,
        Command::Status(status_cmd) => handle_status(&config, status_cmd.json, today),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    };

    // Validation errors are user input problems, not failures worth a
    // backtrace: print the message and exit nonzero.
    if let Err(e) = result {
        if e.is_validation() {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return Err(e.into());
    }
    Ok(())
}

/// Open the store and load (or seed) both collections.
fn load_state(config: &Config) -> larder::Result<(Store, Inventory)> {
    let store = Store::open(config.database_path())?;
    let inventory = Inventory::load_or_seed(&store)?;
    Ok((store, inventory))
}

/// Build the notifier the sweep should dispatch through.
fn make_notifier(config: &Config) -> Box<dyn Notifier> {
    if config.notify.enabled {
        Box::new(larder::EmailNotifier::new(config.notify.clone()))
    } else {
        Box::new(NoopNotifier)
    }
}

async fn handle_add(
    config: &Config,
    cmd: &larder::cli::AddCommand,
    today: NaiveDate,
) -> larder::Result<()> {
    let (store, mut inventory) = load_state(config)?;

    let name = cmd.name.clone().unwrap_or_default();
    let fill = larder::guide::autofill(inventory.guide(), &name);

    let location = cmd
        .location
        .clone()
        .or_else(|| fill.as_ref().map(|f| f.location.clone()))
        .unwrap_or_default();
    let period_days = cmd.days.or_else(|| fill.as_ref().map(|f| f.period_days));
    let expiry_date = cmd
        .expires
        .or_else(|| period_days.map(|d| today + Duration::days(i64::from(d))));
    let email = cmd
        .email
        .clone()
        .or_else(|| config.notify.default_recipient.clone())
        .unwrap_or_default();

    let draft = FoodDraft {
        name,
        location,
        period_days,
        expiry_date,
        email,
    };

    let entry = inventory.add_food(draft, today)?;
    let days = larder::remaining_days(entry.expiry_date, today);
    println!(
        "Added '{}' ({}) - {} [{}]",
        entry.name,
        entry.id,
        entry.expiry_date.format("%Y-%m-%d"),
        larder::status_text(days),
    );
    inventory.persist_foods(&store)?;

    // Check status immediately after adding in case it expires soon.
    let notifier = make_notifier(config);
    let outcome = run_sweep(
        &mut inventory,
        today,
        config.reminder_threshold(),
        notifier.as_ref(),
    )
    .await;
    inventory.persist_foods(&store)?;

    if outcome.dispatched > 0 {
        println!("Dispatched {} reminder(s)", outcome.dispatched);
    }
    Ok(())
}

fn handle_list(config: &Config, json: bool, today: NaiveDate) -> larder::Result<()> {
    let (_store, inventory) = load_state(config)?;

    if json {
        let rows = food_rows(inventory.foods(), today);
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_foods(inventory.foods(), today));
    }
    Ok(())
}

fn handle_remove(config: &Config, id: &str, yes: bool) -> larder::Result<()> {
    let (store, mut inventory) = load_state(config)?;

    let Some(entry) = inventory.find_food(id) else {
        println!("No entry with id {id}");
        return Ok(());
    };

    let prompt = format!(
        "Delete '{}' (expires {})?",
        entry.name,
        entry.expiry_date.format("%Y-%m-%d")
    );
    if !yes && !confirm(&prompt)? {
        return Ok(());
    }

    inventory.delete_food(id);
    inventory.persist_foods(&store)?;
    println!("Removed {id}");
    Ok(())
}

fn handle_guide(config: &Config, cmd: GuideCommand) -> larder::Result<()> {
    let (store, mut inventory) = load_state(config)?;

    match cmd {
        GuideCommand::Add {
            name,
            period,
            location,
        } => {
            let entry = inventory.add_guide(
                name.as_deref().unwrap_or(""),
                period.as_deref().unwrap_or(""),
                location.as_deref().unwrap_or(""),
            )?;
            println!("Added guide entry '{}' ({})", entry.name, entry.id);
            inventory.persist_guide(&store)?;
        }
        GuideCommand::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(inventory.guide())?);
            } else {
                print!("{}", render_guide(inventory.guide()));
            }
        }
        GuideCommand::Remove { id, yes } => {
            let Some(entry) = inventory.find_guide(&id) else {
                println!("No guide entry with id {id}");
                return Ok(());
            };

            let prompt = format!("Delete guide entry '{}'?", entry.name);
            if !yes && !confirm(&prompt)? {
                return Ok(());
            }

            inventory.delete_guide(&id);
            inventory.persist_guide(&store)?;
            println!("Removed {id}");
        }
    }
    Ok(())
}

async fn handle_sweep(config: &Config, today: NaiveDate) -> larder::Result<()> {
    let (store, mut inventory) = load_state(config)?;
    let notifier = make_notifier(config);

    let outcome = run_sweep(
        &mut inventory,
        today,
        config.reminder_threshold(),
        notifier.as_ref(),
    )
    .await;
    inventory.persist_foods(&store)?;

    print_outcome(&outcome);
    print!("{}", render_foods(inventory.foods(), today));
    Ok(())
}

async fn handle_watch(config: &Config) -> larder::Result<()> {
    let notifier = make_notifier(config);
    let mut ticker = tokio::time::interval(config.sweep_interval());

    println!(
        "Watching inventory, sweeping every {} hour(s). Ctrl-C to stop.",
        config.sweep.interval_hours
    );

    loop {
        // First tick fires immediately, so startup gets a sweep too.
        ticker.tick().await;

        // Reload each pass so entries added by other invocations are seen.
        let (store, mut inventory) = load_state(config)?;
        let today = Local::now().date_naive();

        let outcome = run_sweep(
            &mut inventory,
            today,
            config.reminder_threshold(),
            notifier.as_ref(),
        )
        .await;
        inventory.persist_foods(&store)?;
        print_outcome(&outcome);
    }
}

fn handle_status(config: &Config, json: bool, today: NaiveDate) -> larder::Result<()> {
    let (store, inventory) = load_state(config)?;
    let rows = food_rows(inventory.foods(), today);

    let expired = rows
        .iter()
        .filter(|r| r.severity == larder::Severity::Expired)
        .count();
    let warning = rows
        .iter()
        .filter(|r| r.severity == larder::Severity::Warning)
        .count();
    let soonest = rows.first();

    if json {
        let status = serde_json::json!({
            "foods": inventory.foods().len(),
            "guide_entries": inventory.guide().len(),
            "expired": expired,
            "warning": warning,
            "soonest_expiry": soonest.map(|r| r.expiry_date),
            "database_path": store.path(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("larder status");
        println!("-------------");
        println!("Tracked items: {}", inventory.foods().len());
        println!("Guide entries: {}", inventory.guide().len());
        println!("Expired:       {expired}");
        println!("Warning:       {warning}");
        if let Some(row) = soonest {
            println!(
                "Next expiry:   {} ({})",
                row.expiry_date.format("%Y-%m-%d"),
                row.name
            );
        }
        println!("Database:      {}", store.path().display());
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> larder::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Store]");
                println!("  Database path:      {}", config.database_path().display());
                println!();
                println!("[Sweep]");
                println!("  Interval (hours):   {}", config.sweep.interval_hours);
                println!(
                    "  Reminder threshold: {} day(s)",
                    config.sweep.reminder_threshold_days
                );
                println!();
                println!("[Notify]");
                println!("  Enabled:            {}", config.notify.enabled);
                println!("  Endpoint:           {}", config.notify.endpoint);
                println!("  Service id:         {}", config.notify.service_id);
                println!("  Template id:        {}", config.notify.template_id);
                println!(
                    "  Default recipient:  {}",
                    config.notify.default_recipient.as_deref().unwrap_or("-")
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_outcome(outcome: &SweepOutcome) {
    println!(
        "Sweep: {} checked, {} reminder(s) dispatched, {} warning, {} expired",
        outcome.checked, outcome.dispatched, outcome.warning, outcome.expired
    );
}

/// Ask the user a yes/no question; anything but an explicit yes declines.
fn confirm(prompt: &str) -> std::io::Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
