use clap::Parser;
use pocketcalc::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pocketcalc", about = "Four-function calculator for the terminal")]
struct Args {
    /// Config file (default: ~/.pocketcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hide the on-screen keypad
    #[arg(long)]
    no_keypad: bool,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let loaded = config::load_config(args.config.as_deref())?;
    let cli = CliOverrides {
        show_keypad: args.no_keypad.then_some(false),
        log_level: args.log_level,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&loaded.config, &cli)?;

    // File logger: the terminal itself belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "pocketcalc: cannot open log file {}: {}",
            resolved.log_file.display(),
            e
        ),
    }

    log::info!("pocketcalc starting up");
    for note in &loaded.notes {
        note.emit();
    }
    log::debug!("Config: {:?}", resolved);

    pocketcalc::tui::run(&resolved)?;

    log::info!("pocketcalc shut down");
    Ok(())
}
