use bridge_config::{Config, LogLevel};
use bridge_host::cli::{Cli, Command};
use bridge_host::{HostBridge, HostResult, NO_SERVER_PORT, console, logger};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bridge-host: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> HostResult<ExitCode> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let mut config = Config::load_from_dir(&config_dir)?;
    if let Some(ref level) = cli.log_level {
        config.logging.level = LogLevel::parse_lenient(level);
    }
    config.validate()?;

    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = config_dir.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting bridge-host v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let bridge = Arc::new(HostBridge::new(&config));

    match cli.command {
        Command::Run => run_until_signal(&bridge),
        Command::Console => {
            let stdin = std::io::stdin();
            console::run(&bridge, stdin.lock(), std::io::stdout())?;
            bridge.stop_server();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_until_signal(bridge: &Arc<HostBridge>) -> HostResult<ExitCode> {
    let port = bridge.start_server();
    if port == NO_SERVER_PORT {
        error!("Server failed to start");
        return Ok(ExitCode::FAILURE);
    }
    println!("{port}");

    wait_for_signal()?;

    if bridge.stop_server() {
        info!("Server stopped");
        Ok(ExitCode::SUCCESS)
    } else {
        error!("Server stop was forced");
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(unix)]
fn wait_for_signal() -> HostResult<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    if let Some(sig) = signals.forever().next() {
        info!("Received signal {sig}, shutting down...");
    }
    Ok(())
}

#[cfg(not(unix))]
fn wait_for_signal() -> HostResult<()> {
    use signal_hook::consts::SIGINT;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    let interrupted = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGINT, interrupted.clone())?;
    while !interrupted.load(Ordering::Relaxed) {
        std::thread::sleep(Duration::from_millis(100));
    }
    info!("Received SIGINT, shutting down...");
    Ok(())
}
