//! CLI module containing the main entry point logic.

use crate::action::{Action, available_actions};
use crate::config::{self, Config};
use crate::error::Error;
use crate::executor::{self, CommandRunner, DryRunner};
use crate::plan::Plan;
use clap::Parser as ClapParser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::ffi::OsString;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for dotbuild.
#[derive(ClapParser, Debug)]
#[command(name = "dotbuild")]
#[command(version = PKG_VERSION)]
#[command(
    about = "Run dotnet build actions in canonical order",
    long_about = "Run dotnet build actions in canonical order.\n\n\
                  Actions: clean, restore, build, run, test (case-insensitive).\n\
                  With no actions, runs clean, restore, build and test.\n\
                  Duplicates are removed and build is skipped when test is requested."
)]
struct Cli {
    /// Actions to run, in any order
    #[arg(value_name = "ACTION")]
    actions: Vec<String>,

    /// Build tool to invoke for each action
    #[arg(long, value_name = "PROGRAM", env = config::TOOL_ENV, default_value = config::DEFAULT_TOOL)]
    tool: String,

    /// Directory to run the build tool in
    #[arg(long = "working-dir", value_name = "PATH")]
    working_dir: Option<PathBuf>,

    /// Print the plan and commands without running them
    #[arg(long)]
    dry_run: bool,

    /// With --dry-run, print the plan as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,

    /// List all available actions
    #[arg(short, long)]
    list: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(config::LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn list_actions(tool: &str) {
    println!("Available actions:");
    for action in Action::ALL {
        println!("  {:<8} {}", action.name(), action.command(tool));
    }
}

/// The raw argument clap rejected as unknown.
///
/// clap reports only the offending flag (`-deploy` becomes `-d`, `-list`
/// becomes `-i`), so the full token is looked up in the raw arguments.
fn rejected_token(err: &clap::Error, raw_args: &[OsString]) -> Option<String> {
    let Some(ContextValue::String(invalid)) = err.get(ContextKind::InvalidArg) else {
        return None;
    };
    let short = invalid
        .strip_prefix('-')
        .filter(|rest| !rest.starts_with('-') && !rest.is_empty());

    let token = raw_args
        .iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .find(|arg| {
            if arg.starts_with(invalid.as_str()) {
                return true;
            }
            match (short, arg.strip_prefix('-')) {
                (Some(flag), Some(rest)) => !rest.starts_with('-') && rest.contains(flag),
                _ => false,
            }
        })
        .unwrap_or_else(|| invalid.clone());
    Some(token)
}

/// Parse arguments, keeping exit code 1 for everything that isn't help or version.
fn parse_cli(raw_args: Vec<OsString>) -> Cli {
    let err = match Cli::try_parse_from(&raw_args) {
        Ok(cli) => return cli,
        Err(err) => err,
    };

    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
        ErrorKind::UnknownArgument => {
            let token = rejected_token(&err, &raw_args).unwrap_or_default();
            let unknown = Error::UnknownAction {
                token,
                available: available_actions(),
            };
            crate::fatal_error(&unknown.to_string())
        }
        _ => {
            let _ = err.print();
            std::process::exit(1);
        }
    }
}

fn report_failure(error: &Error) -> ! {
    if let Some(detail) = error.detail() {
        tracing::debug!(action = ?error.action(), %detail, "action failed");
    }
    eprintln!("\n{error}");
    std::process::exit(error.exit_code());
}

/// Main CLI logic.
pub fn run_cli() {
    let cli = parse_cli(std::env::args_os().collect());
    init_logging(cli.verbose);

    let config = Config::new(cli.tool, cli.working_dir);
    tracing::debug!(?config, "resolved configuration");

    if cli.list {
        list_actions(config.tool());
        return;
    }

    let plan = match Plan::resolve(cli.actions.as_slice()) {
        Ok(plan) => plan,
        Err(e) => crate::fatal_error(&e.to_string()),
    };

    if cli.json {
        println!("{}", plan.report(config.tool()).to_json());
        return;
    }

    println!("{}", plan.announcement());

    if cli.dry_run {
        let mut runner = DryRunner::new(&config);
        if let Err(e) = executor::execute_plan(&plan, &mut runner) {
            report_failure(&e);
        }
        return;
    }

    let mut runner = CommandRunner::new(&config);
    if let Err(e) = executor::execute_plan(&plan, &mut runner) {
        report_failure(&e);
    }

    println!("\nAll actions completed successfully.");
}
