use crate::commit::Commit;
use crate::error::{ReleaseError, Result};
use crate::git::LogSource;

/// Mock log source for testing without a repository on disk
#[derive(Debug, Clone, Default)]
pub struct MockLogSource {
    raw_log: String,
    first_commit: Option<Commit>,
}

impl MockLogSource {
    /// Create an empty mock source
    pub fn new() -> Self {
        MockLogSource::default()
    }

    /// Set the raw log text returned by `retrieve_all`
    pub fn with_raw_log(mut self, raw_log: impl Into<String>) -> Self {
        self.raw_log = raw_log.into();
        self
    }

    /// Set the commit returned by `retrieve_first_commit`
    pub fn with_first_commit(mut self, commit: Commit) -> Self {
        self.first_commit = Some(commit);
        self
    }
}

impl LogSource for MockLogSource {
    fn retrieve_all(&self) -> Result<String> {
        Ok(self.raw_log.clone())
    }

    fn retrieve_first_commit(&self) -> Result<Commit> {
        self.first_commit
            .clone()
            .ok_or_else(|| ReleaseError::log_parse("mock has no first commit"))
    }
}
