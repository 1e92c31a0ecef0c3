use anyhow::Result;
use clap::{Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::PagerWriter;
use gitlet::commands::porcelain::checkout::CheckoutTarget;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io;
use std::io::Write;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "GITLET_LOG";

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    about = "A tiny local version-control system",
    long_about = "Gitlet keeps snapshots of the files in the current directory. \
    It supports staging, commits, branches, checkout, reset and three-way merges, \
    all stored locally under .gitlet/.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Create a new repository in the current directory")]
    Init,
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command stages the current content of a file. \
        Adding a file whose content matches the current commit unstages it instead."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(name = "commit", about = "Record the staged changes as a new commit")]
    Commit {
        #[arg(index = 1, default_value = "", help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, or stop tracking it and delete it",
        long_about = "This command unstages a staged file. If the file is tracked by the \
        current commit, it is also marked for removal and deleted from the working directory."
    )]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1, help = "The exact commit message")]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "checkout <branch> switches to a branch. \
        checkout -- <file> restores a file from the current commit. \
        checkout <commit> -- <file> restores a file from the given commit."
    )]
    Checkout {
        #[arg(help = "The branch, or the commit to restore from")]
        target: Option<String>,
        #[arg(last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1, help = "The new branch name")]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1, help = "The branch to delete")]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Check out a commit and move the current branch to it"
    )]
    Reset {
        #[arg(index = 1, help = "The commit to reset to")]
        commit: String,
    },
    #[command(name = "merge", about = "Merge the given branch into the current one")]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_repository(writer: Box<dyn io::Write>) -> Result<Repository> {
    let pwd = std::env::current_dir()?;

    Repository::new(&pwd.to_string_lossy(), writer)
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Log | Commands::GlobalLog if PagerWriter::should_page() => {
            let pager = Pager::new();
            let mut repository = open_repository(Box::new(PagerWriter::new(pager.clone())))?;

            match command {
                Commands::Log => repository.log().await?,
                _ => repository.global_log().await?,
            }
            drop(repository);

            minus::page_all(pager)?;
        }
        command => {
            let mut repository = open_repository(Box::new(io::stdout()))?;

            match command {
                Commands::Init => repository.init().await?,
                Commands::Add { file } => repository.add(&file).await?,
                Commands::Commit { message } => {
                    repository.commit(&message).await?;
                }
                Commands::Rm { file } => repository.rm(&file).await?,
                Commands::Log => repository.log().await?,
                Commands::GlobalLog => repository.global_log().await?,
                Commands::Find { message } => {
                    repository.find(&message).await?;
                }
                Commands::Status => {
                    repository.status().await?;
                }
                Commands::Checkout { target, file } => {
                    let target = CheckoutTarget::from_operands(target, file)?;
                    repository.checkout(target).await?
                }
                Commands::Branch { name } => repository.branch(&name).await?,
                Commands::RmBranch { name } => repository.rm_branch(&name).await?,
                Commands::Reset { commit } => repository.reset(&commit).await?,
                Commands::Merge { branch } => {
                    let outcome = repository.merge(&branch).await?;
                    if let Some(notice) = outcome.conflict_notice() {
                        writeln!(repository.writer(), "{notice}")?;
                    }
                }
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    if let Err(error) = run(cli.command).await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
