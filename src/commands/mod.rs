//! Command dispatch and handlers.

pub mod invalid;
pub mod sample;

use crate::cli::{Cli, Command};
use crate::config::{FixtureConfig, Overrides};
use crate::context::ServiceContext;

/// Dispatch a parsed command line to its handler.
///
/// Configuration is resolved from defaults, the optional `--config` file,
/// `RENAVAM_*` environment variables and finally the subcommand flags.
///
/// # Errors
///
/// Returns an error string if configuration fails to load or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = FixtureConfig::resolve(cli.config.as_deref(), &overrides(&cli.command))
        .map_err(|e| e.to_string())?;

    let ctx = ServiceContext::live(config.seed);
    dispatch_with_context(&cli.command, &config, &ctx)
}

/// Dispatch a command with the given configuration and service context.
fn dispatch_with_context(
    command: &Command,
    config: &FixtureConfig,
    ctx: &ServiceContext,
) -> Result<(), String> {
    match command {
        Command::Invalid { .. } => invalid::run_with_context(ctx, &config.invalid_output),
        Command::Sample { .. } => sample::run_with_context(
            ctx,
            &config.search_source,
            &config.search_output,
            config.sample_size,
        ),
    }
}

/// Collects the flags of `command` into the top configuration layer.
fn overrides(command: &Command) -> Overrides {
    match command {
        Command::Invalid { output } => {
            Overrides { invalid_output: output.clone(), ..Overrides::default() }
        }
        Command::Sample { source, output, count, seed } => Overrides {
            search_source: source.clone(),
            search_output: output.clone(),
            sample_size: *count,
            seed: *seed,
            sampling: true,
            ..Overrides::default()
        },
    }
}
