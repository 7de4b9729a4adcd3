use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wit::areas::repository::Repository;

const LOG_ENV: &str = "WIT_LOG";

#[derive(Parser)]
#[command(
    name = "wit",
    version = "0.1.0",
    about = "A minimal local version-control tool",
    long_about = "wit records full-copy snapshots of a directory tree, links them into a \
    commit graph, and supports branching and merging through the closest common ancestor.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Add files or directories to the staging area",
        long_about = "This command copies the given files or directories into the staging area, \
        at their path relative to the repository root. Use '.' to stage the whole working tree."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "The paths to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staging area as a new commit and advances HEAD."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command compares HEAD's snapshot, the staging area and the working tree."
    )]
    Status,
    #[command(
        name = "checkout",
        about = "Switch to a commit or branch",
        long_about = "This command overwrites the working tree and the staging area with a commit's snapshot. \
        A 40-character hexadecimal argument is a commit id; anything else is a branch name."
    )]
    Checkout {
        #[arg(index = 1, help = "The commit id or branch name to check out")]
        target: String,
    },
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "This command creates a branch pointing at HEAD, or lists branches when no name is given."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into HEAD",
        long_about = "This command reconciles a branch with HEAD through their common ancestor \
        and records a two-parent merge commit."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "graph",
        about = "Print the commit graph edges",
        long_about = "This command prints one 'child parent' pair per line, starting with the references."
    )]
    Graph,
    #[command(
        name = "show-ref",
        about = "List references",
        long_about = "This command prints every reference, including HEAD, as name=id."
    )]
    ShowRef,
    #[command(
        name = "cat-commit",
        about = "Print the metadata of a commit",
        long_about = "This command prints the metadata file of the given commit id or branch."
    )]
    CatCommit {
        #[arg(index = 1, help = "The commit id or branch name")]
        revision: String,
    },
}

fn init_tracing() {
    let default_directive = if cfg!(feature = "debug_merge") {
        "warn,wit::artifacts::merge=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::discover(&pwd, Box::new(std::io::stdout()))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init().await?
        }
        Commands::Add { paths } => open_repository()?.add(paths).await?,
        Commands::Commit { message } => open_repository()?.commit(message).await?,
        Commands::Status => open_repository()?.status().await?,
        Commands::Checkout { target } => open_repository()?.checkout(target).await?,
        Commands::Branch { name } => open_repository()?.branch(name.as_deref())?,
        Commands::Merge { branch } => open_repository()?.merge(branch).await?,
        Commands::Graph => open_repository()?.graph()?,
        Commands::ShowRef => open_repository()?.show_ref()?,
        Commands::CatCommit { revision } => open_repository()?.cat_commit(revision)?,
    }

    Ok(())
}
