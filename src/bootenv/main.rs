use bootenv::api::BootEnvApi;
use bootenv::config::BootEnvConfig;
use bootenv::error::{BootEnvError, Result};
use bootenv::store::snapshot;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod cli;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: BootEnvApi,
    snapshot_path: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Print { names }) => handle_print(&ctx, names),
        Some(Commands::Set { name, value, force }) => handle_set(&mut ctx, name, value, force),
        Some(Commands::Delete { names, force }) => handle_delete(&mut ctx, names, force),
        Some(Commands::Flags) => handle_flags(&ctx),
        Some(Commands::Recovery) => handle_recovery(&mut ctx),
        None => handle_print(&ctx, Vec::new()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs = ProjectDirs::from("com", "bootenv", "bootenv")
        .ok_or_else(|| BootEnvError::Store("Could not determine data directory".to_string()))?;

    let config = BootEnvConfig::load(proj_dirs.config_dir())?;
    let snapshot_path = match &cli.file {
        Some(path) => path.clone(),
        None => proj_dirs.data_dir().join("env.json"),
    };
    let store = snapshot::load(&snapshot_path, config.policy())?;
    let api = BootEnvApi::new(store, config.recovery_bootcmd);

    Ok(AppContext { api, snapshot_path })
}

fn handle_print(ctx: &AppContext, names: Vec<String>) -> Result<()> {
    let result = ctx.api.print(&names)?;
    cli::print_variables(&result.listed);
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, name: String, value: String, force: bool) -> Result<()> {
    let result = ctx.api.set(&name, &value, force)?;
    cli::print_messages(&result.messages);
    save(ctx)
}

fn handle_delete(ctx: &mut AppContext, names: Vec<String>, force: bool) -> Result<()> {
    let result = ctx.api.delete(&names, force)?;
    cli::print_messages(&result.messages);
    save(ctx)
}

fn handle_flags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.flags_info()?;
    cli::print_flag_table(&result.listed);
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_recovery(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.recovery()?;
    cli::print_messages(&result.messages);
    save(ctx)
}

fn save(ctx: &AppContext) -> Result<()> {
    snapshot::save(ctx.api.store(), &ctx.snapshot_path)
}
