use clap::Parser;
use component_builder::cli::{run_cli, Cli};
use component_builder::telemetry::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if let Some(level) = cli.log_level.as_deref() {
        log_config = log_config.with_level(level);
    }
    // Held for the life of the process so buffered log lines are flushed on exit.
    let _log_guard = init_logging(&log_config)?;

    run_cli(cli)
}
