use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use airtime_cli::commands::{init, set, show, slots, status, watch};
use airtime_cli::{Cli, Clock, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so --json output stays machine-readable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    // The rehearsal offset is applied here, before now ever reaches the core
    let clock = Clock::new(cli.offset_ms.unwrap_or(config.clock_offset_ms));
    let mut stdout = std::io::stdout();

    match &cli.command {
        Some(Commands::Init {
            title,
            date,
            time,
            force,
        }) => {
            init::run(
                &mut stdout,
                &config,
                title.as_deref(),
                date.as_deref(),
                time,
                *force,
            )?;
        }
        Some(Commands::Show { json }) => {
            let doc = airtime_cli::store::load(&config.timetable_path)?;
            show::run(&mut stdout, &doc, &clock.now(), *json)?;
        }
        Some(Commands::Status { json }) => {
            let doc = airtime_cli::store::load(&config.timetable_path)?;
            status::run(&mut stdout, &doc, &clock.now(), *json)?;
        }
        Some(Commands::Watch) => {
            watch::run(&config, &clock)?;
        }
        Some(Commands::Slots { action }) => {
            slots::run(&mut stdout, &config, &clock, action)?;
        }
        Some(Commands::SetStart { date, time }) => {
            set::set_start(&mut stdout, &config, date, time)?;
        }
        Some(Commands::SetTitle { title }) => {
            set::set_title(&mut stdout, &config, title)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
