use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use git_semver::config::{self, MAIN_BRANCHES_ENV};
use git_semver::git::RepositoryBackend;
use git_semver::resolver::{self, VersionResolver};
use git_semver::ui;

const AFTER_HELP: &str = "\
Commit message markers:
  +semver: breaking | +semver: major                  -> Increments the major version
  +semver: feature | +semver: feat | +semver: minor   -> Increments the minor version
  +semver: fix | +semver: patch                       -> Increments the patch version
  Any other change increments the patch version.

Environment variables:
  MAIN_BRANCHES   Comma-separated list of main branches (default: \"main,master\")
  RUST_LOG        Diagnostic log filter, written to stderr (default: \"warn\")";

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    version,
    about = "Calculate the semantic version of a git repository from its tags and commit messages",
    after_help = AFTER_HELP
)]
struct Args {
    #[arg(
        default_value = ".",
        help = "Path to the Git repository (default: current directory)"
    )]
    repo_path: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        default_value_t = RepositoryBackend::Git,
        help = "How to query the repository"
    )]
    backend: RepositoryBackend,
}

fn main() {
    // Logs go to stderr so stdout only carries the JSON document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Checked before config lookup and backend open, which would otherwise
    // report a bad path as a config or libgit2 error
    resolver::validate_repo_path(&args.repo_path)?;

    let main_branches = std::env::var(MAIN_BRANCHES_ENV).ok();
    let config = config::load_config(args.config.as_deref(), &args.repo_path)?
        .with_main_branches_override(main_branches.as_deref());
    tracing::debug!(main_branches = ?config.main_branches, "configuration loaded");

    let resolver = VersionResolver::new(config)?;
    let repo = args.backend.open(&args.repo_path)?;
    let info = resolver.resolve_with(&repo)?;

    let stdout = std::io::stdout();
    ui::write_version_info(&mut stdout.lock(), &info)?;

    Ok(())
}
