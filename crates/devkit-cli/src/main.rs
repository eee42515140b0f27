mod cmd;
mod output;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use cmd::{go::GoSubcommand, rand::RandSubcommand, ssh::SshSubcommand};

#[derive(Parser)]
#[command(
    name = "dev",
    about = "dev is a collection of utilities that might come handy when developing a software",
    version,
    propagate_version = true,
    arg_required_else_help = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Random related generators
    Rand {
        #[command(subcommand)]
        subcommand: RandSubcommand,
    },

    /// Go language related generators
    Go {
        #[command(subcommand)]
        subcommand: GoSubcommand,
    },

    /// SSH tools
    Ssh {
        #[command(subcommand)]
        subcommand: SshSubcommand,
    },
}

fn main() {
    // Usage errors exit 1; --help, --version and a bare `dev` exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = Cli::command().print_help();
            println!();
            std::process::exit(0);
        }
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Rand { subcommand } => cmd::rand::run(subcommand, cli.json),
        Commands::Go { subcommand } => cmd::go::run(subcommand, cli.json),
        Commands::Ssh { subcommand } => cmd::ssh::run(subcommand, cli.json),
    };

    if let Err(e) = result {
        output::print_error(&format!("error: {e:#}"));
        std::process::exit(1);
    }
}
