//! # CLI Layer
//!
//! This module is **one possible UI client** for binz, not the application itself.
//! It is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for human consumption
//!
//! Every handler calls one `BinzApi` method and hands the `CmdResult` to `render`.

use super::render::{
    print_config, print_detail, print_label, print_messages, print_storage_list,
};
use super::setup::{Cli, Commands};
use binz::api::{BinzApi, ConfigAction, NewItem};
use binz::config::BinzConfig;
use binz::error::{BinzError, Result};
use binz::store::fs_backend::FsBackend;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Overrides the data directory (used by tests and for portable setups).
const HOME_ENV: &str = "BINZ_HOME";
/// env_logger filter, e.g. `BINZ_LOG=binz=trace`.
const LOG_ENV: &str = "BINZ_LOG";

struct AppContext {
    api: BinzApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { name, location }) => handle_add(&mut ctx, name.join(" "), location),
        Some(Commands::Ls) => handle_list(&ctx),
        Some(Commands::Open { id }) => handle_open(&mut ctx, id),
        Some(Commands::Back) => handle_back(&mut ctx),
        Some(Commands::Put {
            name,
            quantity,
            description,
            storage,
        }) => handle_put(
            &mut ctx,
            storage,
            NewItem {
                name: name.join(" "),
                quantity,
                description,
            },
        ),
        Some(Commands::Rm { id, yes }) => handle_rm(&mut ctx, id, yes),
        Some(Commands::RmItem { item_id, storage }) => handle_rm_item(&mut ctx, storage, item_id),
        Some(Commands::Scan { id }) => handle_scan(&mut ctx, id),
        Some(Commands::Label { id }) => handle_label(&mut ctx, id),
        Some(Commands::State) => handle_state(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_current(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_filter))
        .format_timestamp(None)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "binz", "binz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BinzError::Store("Could not determine a data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    log::debug!("data directory: {}", dir.display());

    let config = BinzConfig::load(&dir)?;
    let backend = FsBackend::new(dir.clone());
    let api = BinzApi::new(backend, &config, dir);

    Ok(AppContext { api })
}

fn handle_current(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.current()?;
    match &result.detail {
        Some(storage) => print_detail(storage),
        None => print_storage_list(&result.listed_storages),
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: String, location: String) -> Result<()> {
    let result = ctx.api.create_storage(name, location)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_storages()?;
    print_storage_list(&result.listed_storages);
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.open_storage(id)?;
    if let Some(storage) = &result.detail {
        print_detail(storage);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_back(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.back()?;
    print_storage_list(&result.listed_storages);
    Ok(())
}

fn handle_put(ctx: &mut AppContext, storage: Option<String>, item: NewItem) -> Result<()> {
    let result = ctx.api.add_item(storage, item)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rm(ctx: &mut AppContext, id: String, yes: bool) -> Result<()> {
    if !yes {
        let prompt = match ctx.api.store().find_by_id(&id) {
            Some(storage) => format!(
                "Delete storage {} ({}) and its {} item(s)?",
                storage.name,
                storage.id,
                storage.items.len()
            ),
            None => format!("Delete storage {}?", id),
        };
        if !confirm(&prompt)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_storage(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rm_item(ctx: &mut AppContext, storage: Option<String>, item_id: String) -> Result<()> {
    let result = ctx.api.delete_item(storage, item_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_scan(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.scan(id)?;
    print_messages(&result.messages);
    if let Some(storage) = &result.detail {
        print_detail(storage);
    }
    Ok(())
}

fn handle_label(ctx: &mut AppContext, id: Option<String>) -> Result<()> {
    let result = ctx.api.label(id)?;
    if let Some(label) = &result.label {
        print_label(label);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_state(ctx: &AppContext) -> Result<()> {
    let json = serde_json::to_string_pretty(ctx.api.view_state())?;
    println!("{}", json);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    if let Some(config) = &result.config {
        print_config(config);
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
