use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use pantri::api::{
    CmdMessage, CmdResult, DisplayItem, ExpiryChange, ItemChanges, MessageLevel, PantriApi,
};
use pantri::config::PantriConfig;
use pantri::error::Result;
use pantri::expiry::{self, ExpiryReport, EXPIRY_WINDOW_DAYS};
use pantri::model::{Category, Item, ItemDraft, Unit};
use pantri::store::http::HttpStore;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[tokio::main]
async fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let proj_dirs =
        ProjectDirs::from("com", "pantri", "pantri").expect("Could not determine config dir");
    let config_dir = proj_dirs.config_dir().to_path_buf();
    let config = PantriConfig::load(&config_dir).unwrap_or_default();

    // Config is the one command that never talks to the store.
    let command = match cli.command {
        Some(Commands::Config { key, value }) => {
            return handle_config(&config_dir, config, key, value);
        }
        command => command,
    };

    let api = PantriApi::new(HttpStore::new(config.resolve_endpoint()));

    match command {
        Some(Commands::Add {
            name,
            category,
            quantity,
            unit,
            expires,
        }) => handle_add(&api, name, category, quantity, unit, expires).await,
        Some(Commands::Edit {
            index,
            name,
            category,
            quantity,
            unit,
            expires,
            no_expiry,
        }) => {
            let expiry = if no_expiry {
                ExpiryChange::Clear
            } else if let Some(date) = expires {
                ExpiryChange::Set(date)
            } else {
                ExpiryChange::Keep
            };
            let changes = ItemChanges {
                name,
                category,
                quantity,
                unit,
                expiry,
            };
            handle_edit(&api, index, changes).await
        }
        Some(Commands::Delete { indexes }) => handle_delete(&api, indexes).await,
        Some(Commands::List) | None => handle_list(&api).await,
        Some(Commands::Config { .. }) => unreachable!("handled above"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PANTRI_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_list(api: &PantriApi<HttpStore>) -> Result<()> {
    let now = Utc::now();
    let result = api.list_items(now).await?;
    print_result(&result, now);
    Ok(())
}

async fn handle_add(
    api: &PantriApi<HttpStore>,
    name: String,
    category: Category,
    quantity: f64,
    unit: Unit,
    expires: Option<NaiveDate>,
) -> Result<()> {
    let draft = ItemDraft {
        name,
        category,
        quantity,
        unit,
        expiry: expires,
    };

    let now = Utc::now();
    let result = api.add_item(draft, now).await?;
    print_result(&result, now);
    Ok(())
}

async fn handle_edit(
    api: &PantriApi<HttpStore>,
    index: usize,
    changes: ItemChanges,
) -> Result<()> {
    let now = Utc::now();
    let result = api.edit_item(index, changes, now).await?;
    print_result(&result, now);
    Ok(())
}

async fn handle_delete(api: &PantriApi<HttpStore>, indexes: Vec<usize>) -> Result<()> {
    let now = Utc::now();
    let result = api.remove_items(&indexes, now).await?;
    print_result(&result, now);
    Ok(())
}

fn handle_config(
    config_dir: &Path,
    mut config: PantriConfig,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("endpoint"), None) => {
            println!("endpoint = {}", config.endpoint);
        }
        (Some("endpoint"), Some(v)) => {
            config.endpoint = v;
            config.save(config_dir)?;
            println!("endpoint = {}", config.endpoint);
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn print_result(result: &CmdResult, now: DateTime<Utc>) {
    if let Some(report) = &result.report {
        print_report(report);
    }
    print_items(&result.listed, now);
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_report(report: &ExpiryReport) {
    if report.is_clear() {
        return;
    }

    if !report.expired.is_empty() {
        println!("{}", "Expired:".red().bold());
        for item in &report.expired {
            println!("  - {} ({})", item.name, expiry_label(item));
        }
    }

    if !report.expiring_soon.is_empty() {
        println!(
            "{}",
            format!("Expiring within {} days:", EXPIRY_WINDOW_DAYS)
                .yellow()
                .bold()
        );
        for item in &report.expiring_soon {
            println!("  - {} ({})", item.name, expiry_label(item));
        }
    }

    println!();
}

const NAME_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 11;
const QTY_WIDTH: usize = 10;

fn print_items(items: &[DisplayItem], now: DateTime<Utc>) {
    if items.is_empty() {
        println!("No items in the inventory.");
        return;
    }

    for di in items {
        let idx_str = format!("{:>3}. ", di.index);
        let name = pad_to_width(&di.item.name, NAME_WIDTH);
        let category = pad_to_width(di.item.category.label(), CATEGORY_WIDTH);
        let qty = pad_to_width(
            &format!("{} {}", di.item.quantity, di.item.unit.label()),
            QTY_WIDTH,
        );

        println!(
            "{}{}{}{}{}",
            idx_str,
            name,
            category.dimmed(),
            qty,
            expiry_status(&di.item, now)
        );
    }
}

fn expiry_status(item: &Item, now: DateTime<Utc>) -> ColoredString {
    let Some(date) = item.expiry else {
        return "-".dimmed();
    };

    let days = expiry::days_until(date, now);
    if days <= 0 {
        format!("expired {}", format_date(date)).red()
    } else if days <= EXPIRY_WINDOW_DAYS {
        let noun = if days == 1 { "day" } else { "days" };
        format!("expires in {} {}", days, noun).yellow()
    } else {
        format_date(date).normal()
    }
}

fn expiry_label(item: &Item) -> String {
    item.expiry.map(format_date).unwrap_or_else(|| "-".into())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}  ", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
