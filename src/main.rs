use clap::Parser;
use log::debug;
use std::process;
use treehash::adapters::ProcessCpuClock;
use treehash::cli::Cli;
use treehash::error::RunError;

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let args = Cli::parse();

    let Some(config) = args.to_run_config() else {
        println!("{}", RunError::Usage);
        return;
    };
    init_logger(config.verbose);
    debug!("{config:?}");

    match treehash::run(&config, &ProcessCpuClock::new()) {
        Ok(manifest) => {
            if let Some(advisory) = manifest.advisory {
                println!("{advisory}");
            }
        }
        Err(e) => match treehash::as_run_error(&e) {
            Some(RunError::OutputPath(_) | RunError::RootNotFound(_) | RunError::Usage) => {
                println!("{e}");
            }
            _ => {
                eprintln!("Error during scan: {e:#}");
                process::exit(1);
            }
        },
    }
}
