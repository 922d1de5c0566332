use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use fragstat_core::cli;
use fragstat_core::cli::conf::ConfigCmd;
use fragstat_core::cli::report::ReportArgs;
use fragstat_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;


#[derive(Parser, Debug)]
#[command(
    name = "fragstat",
    version,
    about = "Fragstat: per-match kill statistics from game server logs",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Diagnostic log format on stderr
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,

    /// Path to the game server log (same as `fragstat report <PATH>`)
    path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a log file and print one record per match
    Report(ReportArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match (cli.command, cli.path) {
        (Some(Command::Report(args)), _) => cli::report::run(args),
        (Some(Command::Config { cmd }), _) => cli::conf::run(cmd),
        (None, Some(path)) => cli::report::run(ReportArgs::for_path(path)),
        (None, None) => Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "a log file path is required: fragstat <PATH>",
            )
            .exit(),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
