//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure random password generator written in Rust.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::path::{Path, PathBuf};

use rpawogen::configtool::{self, Defaults};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A secure random password generator written in Rust", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the defaults file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prompt for options and generate passwords in a loop (default)
    Interactive,

    /// Generate random passwords without prompting
    Gen(GenArgs),

    /// Assess the strength of a password
    Check(CheckArgs),

    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Debug, Args)]
struct GenArgs {
    /// Length of the password
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Password to check; read without echo when omitted
    password: Option<String>,

    /// Also show a zxcvbn estimate with suggestions
    #[arg(short, long, default_value_t = false)]
    detailed: bool,
}

/// Builds the logger. `RUST_LOG` takes precedence over `-v`.
fn build_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env).format_target(false).init();
}

fn load_defaults(config: Option<&Path>) -> Result<Defaults> {
    let path = configtool::resolve_config_path(config)?;
    debug!("config path: {}", path.display());
    Ok(Defaults::load(&path)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    build_logger(cli.verbose);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let defaults = load_defaults(cli.config.as_deref())?;
            commands::interactive::run_interactive(defaults)
        }
        Command::Gen(args) => {
            let defaults = load_defaults(cli.config.as_deref())?;
            let length = args.length.unwrap_or(defaults.length);
            if length == 0 {
                bail!("Password length must be at least 1");
            }
            commands::password_gen::generate_random(
                length,
                args.no_uppercase || !defaults.uppercase,
                args.no_lowercase || !defaults.lowercase,
                args.no_numbers || !defaults.digits,
                args.no_special || !defaults.symbols,
                args.count.unwrap_or(defaults.count),
            )
        }
        Command::Check(args) => commands::testpass::test_password(args.password, args.detailed),
        Command::InitConfig { force } => {
            let path = configtool::resolve_config_path(cli.config.as_deref())?;
            commands::init::init_config(&path, force)
        }
    }
}
