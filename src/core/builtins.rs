//! Default console commands

use crate::{
    core::{handler::CommandContext, registry::CommandRegistry},
    error::{ConsoleError, Result},
    utils::fs::FileSystemUtils,
};
use std::path::Path;

pub const CLEAR_COMMAND: &str = "clear";
pub const SET_DIRECTORY_COMMAND: &str = "set_minecraft_directory";
pub const WORLD_HELP_COMMAND: &str = "minecraft_world_help";
pub const HELP_COMMAND: &str = "terminal_commands_help";

/// Header printed before the command listing
pub const HELP_HEADER: &str = "List of all terminal commands:";

/// Register the four default commands
pub fn register_defaults(registry: &mut CommandRegistry, help_file: &Path) -> Result<()> {
    let help_file = help_file.to_path_buf();

    registry.register(WORLD_HELP_COMMAND, 0, move |_: &[String], ctx: &mut CommandContext<'_>| {
        minecraft_world_help(&help_file, ctx)
    })?;
    registry.register(HELP_COMMAND, 0, terminal_commands_help)?;
    registry.register(CLEAR_COMMAND, 0, clear)?;
    registry.register(SET_DIRECTORY_COMMAND, 1, set_minecraft_directory)?;
    Ok(())
}

/// Empty the transcript. Session state is left alone.
fn clear(_: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    ctx.transcript_mut().clear();
    Ok(())
}

fn set_minecraft_directory(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let path = args
        .first()
        .ok_or_else(|| ConsoleError::arity_mismatch(ctx.command(), 1, 0))?;

    ctx.session_mut().set_save_directory(path.clone());
    ctx.emit(&format!("Minecraft save directory has been set to: {path}"));
    Ok(())
}

fn minecraft_world_help(help_file: &Path, ctx: &mut CommandContext<'_>) -> Result<()> {
    let content = FileSystemUtils::new()
        .read_file_to_string(help_file)
        .map_err(|e| ConsoleError::file_system("read", help_file, e))?;

    ctx.emit(&content);
    Ok(())
}

/// List every registered command, straight from the live registry
fn terminal_commands_help(_: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let names: Vec<String> = ctx.command_names().map(str::to_string).collect();

    ctx.emit(HELP_HEADER);
    for name in names {
        ctx.emit(&name);
    }
    Ok(())
}
