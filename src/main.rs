//! cutejoe - CLI entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use cutejoe::changelog::{Changelog, render, save_changelog};
use cutejoe::config::{ConfigFileStatus, changelog_config_factory, create_config_file, load_config};
use cutejoe::git::GitCommitSource;

/// Generate release changelogs from labelled commits.
#[derive(Parser, Debug)]
#[command(name = "cutejoe")]
#[command(about = "Generate release changelogs from labelled commits")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the changelog, tag and branch for the next release
    Changelog {
        /// Save the changelog into the configured folder
        #[arg(long)]
        save: bool,

        /// Start of commit range (overrides the config)
        #[arg(long)]
        start: Option<String>,

        /// End of commit range (overrides the config)
        #[arg(long)]
        end: Option<String>,

        /// Path to a config file (defaults to .cutejoe.yml, then the bundled default)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save without asking for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Create a default .cutejoe.yml
    ConfigFile {
        /// Folder to create the config file in
        #[arg(long, default_value = ".")]
        folder: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Changelog {
            save,
            start,
            end,
            config,
            yes,
        } => run_changelog(save, start, end, config.as_deref(), yes),
        Command::ConfigFile { folder } => run_config_file(&folder),
    }
}

/// Console logging to stderr, controlled by RUST_LOG (default: warn).
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_changelog(
    save: bool,
    start: Option<String>,
    end: Option<String>,
    config_path: Option<&Path>,
    yes: bool,
) -> Result<()> {
    let cwd = std::env::current_dir().context("Could not determine current directory")?;

    let factory = changelog_config_factory();
    let config = load_config(config_path, &cwd, &factory).context("Failed to load config")?;

    let source = GitCommitSource::open(&cwd)
        .context("Not a git repository. Run cutejoe from within a git repository.")?;

    let changelog = Changelog::new(config.changelog(), &source).with_range(start, end);

    let content = changelog
        .content()
        .context("Failed to generate changelog")?;
    let tag = changelog.tag().context("Failed to compute next tag")?;
    let branch = changelog.branch()?;

    println!("Changelog:\n{}", render(content));
    println!("Tag: \"{}\"", tag);
    println!("Branch: \"{}\"", branch);

    if !save {
        return Ok(());
    }

    let confirmed = yes
        || Confirm::new()
            .with_prompt("Save changelog?")
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;

    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    let path = save_changelog(&changelog.file_path()?, content)
        .context("Failed to save changelog")?;
    println!("Changelog: \"{}\"", path.display());

    Ok(())
}

fn run_config_file(folder: &Path) -> Result<()> {
    match create_config_file(folder).context("Failed to create config file")? {
        ConfigFileStatus::Created(path) => println!("File created: {}", path.display()),
        ConfigFileStatus::AlreadyExists(path) => {
            println!("Config file already exists: {}", path.display())
        }
    }
    Ok(())
}
