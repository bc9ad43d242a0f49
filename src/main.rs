use anyhow::Result;
use clap::Parser;
use std::path::Path;

use gitmoji_release::config::{self, ReleaseConfig};
use gitmoji_release::emoji::CommitClassifier;
use gitmoji_release::git::{self, GitCli};
use gitmoji_release::release::assemble_release;
use gitmoji_release::version::ReleaseType;
use gitmoji_release::{manifest, notes, process, ui};

#[derive(clap::Parser)]
#[command(
    name = "gitmoji-release",
    about = "Release a new version from gitmoji commit history"
)]
#[command(group(
    clap::ArgGroup::new("release_type")
        .required(true)
        .args(["major", "minor", "patch"])
))]
struct Args {
    #[arg(short = 'M', long, help = "Release a major version")]
    major: bool,

    #[arg(short = 'm', long, help = "Release a minor version")]
    minor: bool,

    #[arg(short = 'p', long, help = "Release a patch version")]
    patch: bool,

    #[arg(
        short = 'n',
        long,
        help = "Print the release notes without actually making a new release"
    )]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

impl Args {
    fn release_type(&self) -> ReleaseType {
        if self.major {
            ReleaseType::Major
        } else if self.minor {
            ReleaseType::Minor
        } else {
            ReleaseType::Patch
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = run_release(&args, &config) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run_release(args: &Args, config: &ReleaseConfig) -> gitmoji_release::Result<()> {
    let manifest_path = Path::new(&config.manifest);
    let current_version = manifest::current_version(manifest_path)?;
    let next_version = current_version.next(args.release_type());

    ui::display_version_change(current_version.version(), next_version.version());

    let git_log = GitCli::current_dir()?;
    let commits = git::retrieve_all_commits(&git_log)?;
    let classifier = CommitClassifier::default();
    let release = assemble_release(next_version.version(), &commits, &classifier, &git_log)?;
    let notes = notes::render_notes(&release);

    if args.dry_run {
        ui::display_preview("NOTES:", &notes);
        ui::display_status(&format!(
            "Dry run: would set {} to version {} and tag {}",
            manifest_path.display(),
            next_version.version(),
            next_version.tag()
        ));
        return Ok(());
    }

    manifest::set_version(manifest_path, next_version.version())?;
    ui::display_success(&format!(
        "Updated {} to version {}",
        manifest_path.display(),
        next_version.version()
    ));

    let tag_message = format!("{}\n\n{}", next_version.tag(), notes);
    process::run(
        "git",
        &["tag", "-a", next_version.tag(), "-m", tag_message.as_str()],
    )?;
    ui::display_success(&format!("Tag {} created", next_version.tag()));

    process::run("git", &["push", &config.remote, "--follow-tags"])?;
    ui::display_success(&format!("Code pushed to {}", config.remote));

    if config.github_release {
        process::run(
            "gh",
            &["release", "create", next_version.tag(), "--notes-from-tag"],
        )?;
        ui::display_success("Release created ✨");
    }

    Ok(())
}
