use std::path::PathBuf;

use clap::{Parser, Subcommand};
use promptline::config::{PromptConfig, PromptEnv};
use promptline::styling::{ERROR, Markers, eprintln};

mod commands;

use commands::prompt::{Mode, PromptArgs};

#[derive(Parser)]
#[command(name = "promptline")]
#[command(version, about = "Powerline-style shell prompt", long_about = None)]
struct Cli {
    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (default: <config dir>/promptline/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Zero-width markers to wrap escape sequences in
    #[arg(long, global = true, value_enum, default_value_t = Markers::Zsh)]
    shell: Markers,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full line: left segment, right-aligned right segment, chevron below
    Bash(PromptArgs),
    /// Left segment and chevron
    Left(PromptArgs),
    /// Right segment only
    Right(PromptArgs),
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = PromptConfig::load_or_default(cli.config.as_deref());
    let env = PromptEnv::from_process();

    let (mode, args) = match cli.command {
        Commands::Bash(args) => (Mode::Bash, args),
        Commands::Left(args) => (Mode::Left, args),
        Commands::Right(args) => (Mode::Right, args),
    };

    match commands::prompt::run(mode, args, &config, &env, cli.shell) {
        // Plain stdout: the shell captures the prompt through a pipe, and
        // the escape codes have to survive that
        Ok(prompt) => println!("{prompt}"),
        Err(e) => {
            eprintln!("{ERROR}Error:{ERROR:#} {e:#}");
            std::process::exit(1);
        }
    }
}
