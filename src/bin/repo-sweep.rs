//! CLI for the repo-sweep tool.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use repo_sweep::config::DEFAULT_CONFIG_FILE;
use repo_sweep::output::{Color, error_line, paint};
use repo_sweep::prelude::*;
use repo_sweep::store::DEFAULT_STORE_FILE;

#[derive(Parser)]
#[command(name = "repo-sweep")]
#[command(author, version, about = "Fetch, list and delete your GitHub repositories", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Path to the saved repository list
    #[arg(short, long, global = true, default_value = DEFAULT_STORE_FILE)]
    store: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all repositories of the configured user and save them
    Fetch {
        /// Keep only forked repositories
        #[arg(long)]
        forks_only: bool,
    },

    /// Show the saved repositories
    List,

    /// Delete saved repositories from GitHub
    Remove {
        #[command(subcommand)]
        mode: RemoveMode,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum RemoveMode {
    /// List everything and confirm once
    All,
    /// Confirm each repository (y/n, s to stop asking, q to quit)
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", error_line("Error on printing help", err));
                ExitCode::FAILURE
            }
        };
    };

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", error_line("Error in reading config", err));
            return ExitCode::FAILURE;
        }
    };
    let store = RepoStore::new(&cli.store);

    let result = match command {
        Commands::Fetch { forks_only } => cmd_fetch(&config, &store, forks_only),
        Commands::List => cmd_list(&store),
        Commands::Remove { mode } => cmd_remove(&config, &store, mode),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", paint(Color::Red, format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "repo_sweep=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn cmd_fetch(config: &Config, store: &RepoStore, forks_only: bool) -> Result<()> {
    let client = GitHubClient::new(config).context("Error on creating client")?;
    let filter = if forks_only {
        RepoFilter::ForksOnly
    } else {
        RepoFilter::All
    };

    let repos = fetch_repositories(&client, &config.github_username, filter)
        .context("Error on fetching repos")?;
    println!(
        "{}",
        paint(
            Color::Green,
            format!("{} repositories are fetched successfully", repos.len())
        )
    );

    store.save(&repos).context("Error on saving repos")?;
    println!(
        "{}",
        paint(
            Color::Green,
            format!("Repositories are saved to {}", store.path().display())
        )
    );

    Ok(())
}

fn cmd_list(store: &RepoStore) -> Result<()> {
    let repos = load_saved(store)?;

    for repo in &repos {
        let mut markers = Vec::new();
        if repo.is_fork {
            markers.push("[fork]");
        }
        if repo.is_private {
            markers.push("[private]");
        }

        if markers.is_empty() {
            println!("{}", repo);
        } else {
            println!("{} {}", repo, paint(Color::Yellow, markers.join(" ")));
        }
    }
    println!("{}", paint(Color::Blue, format!("{} repositories", repos.len())));

    Ok(())
}

fn cmd_remove(config: &Config, store: &RepoStore, mode: RemoveMode) -> Result<()> {
    let candidates = load_saved(store)?;
    if candidates.is_empty() {
        println!("No saved repositories to delete");
        return Ok(());
    }

    let client = GitHubClient::new(config).context("Error on creating client")?;

    let stdin = io::stdin();
    let selection = match mode {
        RemoveMode::All => confirm_all(&candidates, stdin.lock(), io::stdout()),
        RemoveMode::Check => check_each(&candidates, stdin.lock(), io::stdout()),
    }
    .context("Error on reading answer")?;

    let selected = match selection {
        Selection::Delete(selected) => selected,
        Selection::Cancelled => {
            println!("Cancelled");
            return Ok(());
        }
    };

    let report = delete_repositories(&client, &selected);
    if !report.is_success() {
        bail!(
            "{} of {} repositories could not be deleted",
            report.failed.len(),
            report.attempted()
        );
    }

    println!(
        "{}",
        paint(
            Color::Green,
            format!("{} repositories deleted successfully", report.deleted.len())
        )
    );
    Ok(())
}

fn load_saved(store: &RepoStore) -> Result<Vec<Repository>> {
    store.load().map_err(|err| {
        let hint = if err.is_missing_store() {
            "Run `repo-sweep fetch` first"
        } else {
            "Run `repo-sweep fetch` to rebuild the list"
        };
        anyhow::Error::new(err).context(hint)
    })
}
