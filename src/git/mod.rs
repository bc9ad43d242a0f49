//! Git log retrieval abstraction layer
//!
//! The core release logic never shells out directly; it talks to the
//! [LogSource] trait. The concrete implementations are:
//!
//! - [cli::GitCli]: runs the real `git` binary as a blocking subprocess
//! - [mock::MockLogSource]: canned output for tests
//!
//! Code that assembles releases should depend on the trait so tests can
//! substitute a stub without a repository on disk.

pub mod cli;
pub mod mock;

pub use cli::GitCli;
pub use mock::MockLogSource;

use crate::commit::{compare_by_timestamp, parse_log_output, Commit};
use crate::error::Result;

/// Source of raw commit history.
///
/// `retrieve_all` returns the raw newline-delimited JSON text described in
/// [crate::commit::parse_log_output]; `retrieve_first_commit` returns the
/// single oldest commit of the whole history, independent of any commit
/// list the caller already holds. It backs the previous-release fallback
/// when no release tag exists yet.
pub trait LogSource: Send + Sync {
    /// Raw log text for the full history, all refs and tags included
    fn retrieve_all(&self) -> Result<String>;

    /// The very first commit ever made in the repository
    fn retrieve_first_commit(&self) -> Result<Commit>;
}

/// Retrieves the full commit history, parsed and sorted newest-first.
///
/// The underlying `git log` invocation already orders its output, but the
/// sort is cheap and keeps the newest-first precondition of
/// [crate::release::assemble_release] independent of git's behavior.
pub fn retrieve_all_commits(source: &dyn LogSource) -> Result<Vec<Commit>> {
    let raw = source.retrieve_all()?;
    let mut commits = parse_log_output(&raw)?;
    commits.sort_by(compare_by_timestamp);
    Ok(commits)
}
