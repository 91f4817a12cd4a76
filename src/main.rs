//! gitscribe - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use gitscribe::commit::synthesize_message;
use gitscribe::{CommitResult, GitAgent};

/// Automated git commits from task descriptions.
#[derive(Parser, Debug)]
#[command(name = "gitscribe")]
#[command(about = "Stage changes and commit them with a synthesized conventional message")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the git repository (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    repo: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current branch and categorized file changes
    Status,

    /// Stage changes and commit them for a task
    Commit {
        /// Free-text task description, e.g. "2.3 Write unit tests for parser"
        description: String,

        /// Commit only these paths instead of staging the whole tree
        #[arg(long, num_args = 1..)]
        files: Vec<String>,

        /// Print the synthesized message without committing
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let agent = GitAgent::open(&cli.repo)
        .with_context(|| format!("Cannot operate on {}", cli.repo.display()))?;

    match cli.command {
        Command::Status => run_status(&agent, cli.json),
        Command::Commit {
            description,
            files,
            dry_run,
            yes,
        } => run_commit(&agent, &description, &files, dry_run, yes, cli.json),
    }
}

fn run_status(agent: &GitAgent, json: bool) -> Result<()> {
    let status = agent.status().context("Failed to read repository status")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("Branch: {}", status.current_branch);

    if !status.has_changes {
        println!("Working tree clean");
        return Ok(());
    }

    print_file_list("Staged", &status.staged_files);
    print_file_list("Unstaged", &status.unstaged_files);
    print_file_list("Untracked", &status.untracked_files);

    Ok(())
}

fn print_file_list(label: &str, files: &[String]) {
    if files.is_empty() {
        return;
    }
    println!();
    println!("{}:", label);
    for file in files {
        println!("  {}", file);
    }
}

fn run_commit(
    agent: &GitAgent,
    description: &str,
    files: &[String],
    dry_run: bool,
    yes: bool,
    json: bool,
) -> Result<()> {
    let files = if files.is_empty() { None } else { Some(files) };
    let message = synthesize_message(description);

    println!("Commit message: {}", message);
    match files {
        Some(files) => println!("Files:          {}", files.join(", ")),
        None => println!("Files:          (entire working tree)"),
    }

    if dry_run {
        println!();
        println!("Dry run complete. No changes made.");
        return Ok(());
    }

    if !yes {
        println!();
        let confirmed = Confirm::new()
            .with_prompt("Proceed?")
            .default(true)
            .interact()
            .context("Confirmation aborted")?;
        if !confirmed {
            bail!("Commit cancelled");
        }
    }

    let result = agent.auto_commit_task(description, files);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if !result.success {
            std::process::exit(1);
        }
        return Ok(());
    }

    report_result(&result)
}

fn report_result(result: &CommitResult) -> Result<()> {
    if result.success {
        let hash = result.commit_hash.as_deref().unwrap_or("(hash unavailable)");
        println!("  [DONE] Created commit {}", short_hash(hash));
        println!("  [DONE] {} file(s) committed", result.files_changed.len());
        Ok(())
    } else {
        let reason = result
            .error_message
            .as_deref()
            .unwrap_or("unknown failure");
        eprintln!("  [FAIL] {}", reason);
        std::process::exit(1);
    }
}

fn short_hash(hash: &str) -> &str {
    if hash.len() >= 7 && hash.chars().all(|c| c.is_ascii_hexdigit()) {
        &hash[..7]
    } else {
        hash
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "gitscribe=debug" } else { "gitscribe=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
