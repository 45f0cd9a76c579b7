use clap::{Parser, Subcommand};
use initlist_gen::cli as prog_cli;
use initlist_gen::config::{ConfigOverrides, load_config};
use initlist_gen::{emit, generate_with, logger};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "initlist-gen", version, about = "Generate RAINY_INITIALIZER_LIST preprocessor macros", long_about = None)]
struct Cli {
    #[arg(long, global = true, help = "Path to a config file (TOML). If omitted, the default lookup is used.")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Highest generated index (default 256, at most 4096)")]
    max_index: Option<u32>,
    #[arg(long, global = true, help = "Last index whose list is spelled out in full (default 20, at most 256; output grows quadratically with it)")]
    split: Option<u32>,
    #[arg(long, global = true, help = "Macro name prefix (default RAINY_INITIALIZER_LIST)")]
    prefix: Option<String>,
    #[arg(long, global = true, help = "Log level: error|warn|info|debug|trace")]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Also write logs to initlist-gen.log in this directory")]
    log_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Output format for reports: plain|json")]
    format: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Emit the dispatch header and every definition (default)")]
    Generate {
        #[arg(short, long, help = "Write to this file instead of stdout")]
        output: Option<PathBuf>,
    },
    #[command(about = "Print the definition for a single index")]
    Definition {
        #[arg(help = "Index within 1..=max-index")]
        index: u32,
    },
    #[command(about = "Print the dispatch header line")]
    Header,
    #[command(name = "config", about = "Print the effective configuration")]
    ShowConfig,
}

fn main() {
    let cli = Cli::parse();
    if cli.log_level.is_some() || cli.log_dir.is_some() {
        if let Err(e) = logger::configure_logging(cli.log_dir.as_deref(), cli.log_level.as_deref()) {
            eprintln!("error: logging: {e}");
        }
    } else if let Err(e) = logger::configure_from_env() {
        eprintln!("error: logging: {e}");
    }

    let overrides = ConfigOverrides { max_index: cli.max_index, split: cli.split, prefix: cli.prefix.clone() };
    let cfg = match load_config(cli.config.as_deref(), overrides) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mode = prog_cli::parse_output_mode(&cli.format);

    let cmd = match cli.command.unwrap_or(Commands::Generate { output: None }) {
        Commands::Generate { output } => prog_cli::Command::Generate { output },
        Commands::Definition { index } => prog_cli::Command::Definition { index },
        Commands::Header => prog_cli::Command::Header,
        Commands::ShowConfig => prog_cli::Command::ShowConfig,
    };
    let result = match cmd {
        prog_cli::Command::Generate { output: None } => generate_with(cfg).and_then(|seq| emit::write_stdout(&seq)),
        cmd => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            prog_cli::run_with_format(&cfg, cmd, mode, &mut out)
        }
    };
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
