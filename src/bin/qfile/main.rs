mod choice;
mod generate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use qfile::config_file::DEFAULT_CONFIG_FILE;
use qfile::load_config;
use qfile::resolve::{list_mappings, resolve_choice};

#[derive(Parser, Debug)]
#[command(
    name = "qfile",
    about = "Resolve a key from the qfile into a shell command",
    long_about = "Resolve a key from the qfile into a shell command.\n\n\
                  The command is printed, not run. Use it as `eval \"$(qfile)\"`."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log file path (enables file logging in addition to stderr)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Omit comments in the output command
    #[arg(long)]
    no_comment: bool,

    /// Generate a sample config file at the config path
    #[arg(long)]
    generate_qfile: bool,

    /// Print all available mappings and exit
    #[arg(long)]
    print_mappings: bool,

    /// Directly specify the choice to execute
    #[arg(long)]
    choice: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .as_ref()
        .map(std::fs::File::create)
        .transpose()?;
    qfile::logger::init(log_file)?;

    if cli.generate_qfile {
        return generate::run(&cli.config);
    }

    let mappings = load_config(&cli.config)?;

    if cli.print_mappings {
        for line in list_mappings(&mappings)? {
            println!("{line}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let key = match cli.choice.as_deref() {
        Some(choice) if !choice.is_empty() => choice.trim().to_string(),
        _ => choice::prompt(&mut std::io::stdin().lock(), &mut std::io::stderr())?,
    };
    debug!("Selected key '{key}'");

    let command = resolve_choice(&mappings, &key, !cli.no_comment)?;
    println!("{command}");
    Ok(ExitCode::SUCCESS)
}
