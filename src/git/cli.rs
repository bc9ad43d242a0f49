use crate::commit::{compare_by_timestamp, parse_log_output, Commit};
use crate::error::{ReleaseError, Result};
use crate::git::LogSource;
use crate::process;
use std::path::{Path, PathBuf};

/// Pretty-format template that makes `git log` emit one JSON record per
/// commit. `%ad` is formatted as epoch seconds via `--date=format:%s`.
const COMMIT_FORMAT: &str = concat!(
    r#"{"hash":"%H","id":"%h","timestamp":"%ad","#,
    r#""author":{"name":"%an","email":"%ae"},"#,
    r#""subject":"%s","body":"%b","ref":"%D"}"#
);

/// [LogSource] backed by the `git` binary.
///
/// Every call is a blocking subprocess invocation; a non-zero exit aborts
/// the computation with [ReleaseError::Subprocess].
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    /// Log source for the repository at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        GitCli { dir: dir.into() }
    }

    /// Log source for the current working directory
    pub fn current_dir() -> Result<Self> {
        Ok(GitCli {
            dir: std::env::current_dir()?,
        })
    }

    /// The repository directory this source operates on
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn log(&self, extra_args: &[&str]) -> Result<String> {
        let format_arg = format!("--pretty=format:{}", COMMIT_FORMAT);
        let mut args = vec!["log"];
        args.extend_from_slice(extra_args);
        args.push("--date=format:%s");
        args.push(&format_arg);
        process::run_in(&self.dir, "git", &args)
    }
}

impl LogSource for GitCli {
    fn retrieve_all(&self) -> Result<String> {
        self.log(&["--tags", "--all"])
    }

    fn retrieve_first_commit(&self) -> Result<Commit> {
        let raw = self.log(&["--first-parent"])?;
        let mut commits = parse_log_output(&raw)?;
        commits.sort_by(compare_by_timestamp);

        commits
            .pop()
            .ok_or_else(|| ReleaseError::log_parse("repository has no commits"))
    }
}
