//! tts-setup - Create the Python environment for TTS inference using uv

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;
use tts_setup::bootstrap::{self, uv::Uv};
use tts_setup::{Console, SetupConfig, SetupError};

#[derive(Parser, Debug)]
#[command(name = "tts-setup")]
#[command(about = "Create the Python environment for TTS inference using uv", long_about = None)]
#[command(version)]
struct Args {
    /// Enable debug output
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false, global = true)]
    no_color: bool,

    /// Subcommands (none runs the setup)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show uv, venv and configuration status
    Info,
    /// Remove the virtual environment directory
    Clean,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print the config file location
    Path,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let setup_err = e.chain().find_map(|c| c.downcast_ref::<SetupError>());
            match setup_err {
                // Already reported on stdout with install instructions.
                Some(SetupError::MissingTool { .. }) => {}
                _ => log::error!("{:#}", e),
            }
            ExitCode::from(setup_err.map(SetupError::exit_code).unwrap_or(1))
        }
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(args: &Args) -> Result<()> {
    let config = SetupConfig::load().context("Failed to load configuration")?;
    log::debug!("Config: {:?}", config);

    match &args.command {
        None => {
            let mut console = Console::stdout(args.no_color);
            let outcome = bootstrap::run_with_uv(config, &mut console)?;
            log::debug!("Finished {:?} ({:?})", outcome.venv_dir, outcome.env_state);
            Ok(())
        }
        Some(Commands::Info) => write_report(
            &mut io::stdout().lock(),
            &bootstrap::get_info(&config, &Uv::new()),
        ),
        Some(Commands::Clean) => {
            let mut console = Console::stdout(args.no_color);
            let venv_dir = config.venv_path();
            if bootstrap::clean(&config)? {
                console.success(&format!("Removed {}", venv_dir.display()));
            } else {
                console.warn(&format!("No virtual environment at {}", venv_dir.display()));
            }
            Ok(())
        }
        Some(Commands::Config { action }) => handle_config_command(action, &config),
    }
}

fn handle_config_command(action: &ConfigAction, config: &SetupConfig) -> Result<()> {
    match action {
        ConfigAction::Show => write_report(&mut io::stdout().lock(), &config.to_toml()?),
        ConfigAction::Path => {
            let path = format!("{}\n", SetupConfig::config_path()?.display());
            write_report(&mut io::stdout().lock(), &path)
        }
    }
}

/// Write a report to stdout, returning write failures instead of panicking.
fn write_report(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .context("Failed to write to stdout")
}
