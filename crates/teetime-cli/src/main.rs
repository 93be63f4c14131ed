use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use teetime_cli::OutputFormat;
use teetime_cli::commands::{self, book::BookRequest, portal::BrowserArgs, portal::PortalArgs};
use teetime_core::{SelectionPolicy, TimeOfDay};

#[derive(Parser)]
#[command(name = "teetime")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Book golf tee times on a members portal",
    long_about = "teetime logs in to the club's tee time portal, lists the bookable times for a date, \
                  and books the earliest time at or after the one you ask for.\n\n\
                  Portal settings can come from flags, environment variables, or a .env file \
                  in the working directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,

    #[command(flatten)]
    portal: PortalArgs,

    #[command(flatten)]
    browser: BrowserArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable tee times for a date
    Times {
        /// Date to look up
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: NaiveDate,
    },

    /// Book the earliest tee time at or after a desired time
    Book {
        /// Date to book
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: NaiveDate,

        /// Desired time, e.g. "9:00 AM"
        #[arg(long)]
        time: TimeOfDay,

        /// Selection policy (after: earliest time not before --time)
        #[arg(long, default_value = "after")]
        policy: SelectionPolicy,

        /// Pick the tee time but do not submit the booking request
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completion scripts
    #[command(long_about = "Generate shell completion scripts for teetime.\n\n\
        SUPPORTED SHELLS:\n  bash, zsh, fish, powershell, elvish\n\n\
        INSTALLATION:\n  \
        bash:  teetime completion --shell bash >> ~/.bashrc\n  \
        zsh:   teetime completion --shell zsh > \"${fpath[1]}/_teetime\"   (or source it from ~/.zshrc)\n  \
        fish:  teetime completion --shell fish > ~/.config/fish/completions/teetime.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    // Settings in .env are picked up as if they were exported
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logging(cli.verbose);
    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
    tracing::debug!("Output format: {}", cli.format.as_str());

    match cli.command {
        Commands::Times { date } => {
            commands::times::execute(cli.portal, &cli.browser, date, cli.format)
        }
        Commands::Book {
            date,
            time,
            policy,
            dry_run,
        } => commands::book::execute(
            cli.portal,
            &cli.browser,
            BookRequest {
                date,
                time,
                policy,
                dry_run,
            },
            cli.format,
        ),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("teetime=debug,teetime_cli=debug,teetime_core=debug,teetime_browser=debug")
    } else {
        EnvFilter::new("teetime=info,teetime_cli=info,teetime_browser=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
