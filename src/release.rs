use crate::commit::Commit;
use crate::emoji::{CommitClassifier, CommitLabel, UNRELEASED_LABELS};
use crate::error::{ReleaseError, Result};
use crate::git::LogSource;
use regex::Regex;

/// One changelog bucket: a category label and the commits that landed in it,
/// in the order they were encountered (newest first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseChanges {
    pub label: CommitLabel,
    pub commits: Vec<Commit>,
}

/// A fully assembled release: target version, the boundary of the previous
/// release, and the unreleased commits bucketed by category.
///
/// `previous` is either the previous release's version string or, when no
/// release tag exists yet, the hash of the repository's very first commit.
/// Assembled once and handed off immutably; every category from
/// [UNRELEASED_LABELS] is present even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseObject {
    pub version: String,
    pub tag: String,
    pub previous: String,
    pub previous_tag: String,
    changes: Vec<ReleaseChanges>,
}

impl ReleaseObject {
    /// All changelog buckets, in the taxonomy's fixed order
    pub fn changes(&self) -> &[ReleaseChanges] {
        &self.changes
    }

    /// The bucket for a specific category
    pub fn changes_for(&self, label: CommitLabel) -> Option<&ReleaseChanges> {
        self.changes.iter().find(|c| c.label == label)
    }

    /// Buckets that actually received commits, for rendering
    pub fn non_empty_changes(&self) -> impl Iterator<Item = &ReleaseChanges> {
        self.changes.iter().filter(|c| !c.commits.is_empty())
    }
}

/// Extracts the semantic version embedded in a commit's ref decoration.
///
/// A release commit is decorated with something like
/// `HEAD -> main, tag: v1.2.3`; the version is whatever follows `tag: v`.
pub fn extract_version_from_commit(commit: &Commit) -> Result<String> {
    Regex::new(r"tag: v([^,\s]+)")
        .ok()
        .and_then(|re| re.captures(&commit.ref_names))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            ReleaseError::tag(format!(
                "release commit {} has no version tag in its ref: {:?}",
                commit.id, commit.ref_names
            ))
        })
}

/// Builds the release object for `version` from a newest-first commit list.
///
/// Commits are classified one by one. The first `Release`-labelled commit is
/// the previous-release boundary: its tagged version becomes `previous` and
/// the scan stops, since everything older belongs to prior releases. If no
/// boundary is found this is the first release ever, and `previous` falls
/// back to the first commit of the whole history, fetched from `source`.
///
/// The input must be sorted newest-first; unsorted input is rejected with
/// [ReleaseError::UnsortedCommits] rather than silently resolving the wrong
/// boundary.
pub fn assemble_release(
    version: &str,
    commits: &[Commit],
    classifier: &CommitClassifier,
    source: &dyn LogSource,
) -> Result<ReleaseObject> {
    if let Some(pair) = commits.windows(2).find(|w| w[0].timestamp < w[1].timestamp) {
        return Err(ReleaseError::UnsortedCommits(format!(
            "{} is older than its successor {}",
            pair[0].id, pair[1].id
        )));
    }

    let mut changes: Vec<ReleaseChanges> = UNRELEASED_LABELS
        .iter()
        .map(|&label| ReleaseChanges {
            label,
            commits: Vec::new(),
        })
        .collect();

    let mut previous = String::new();
    let mut previous_tag = String::new();

    for commit in commits {
        let label = classifier.classify(&commit.subject)?;

        if label == CommitLabel::Release {
            previous = extract_version_from_commit(commit)?;
            previous_tag = format!("v{}", previous);
            break;
        }

        // UNRELEASED_LABELS covers every non-Release label, so the lookup
        // cannot miss
        if let Some(bucket) = changes.iter_mut().find(|c| c.label == label) {
            bucket.commits.push(commit.clone());
        }
    }

    if previous.is_empty() {
        let first_commit = source.retrieve_first_commit()?;
        previous = first_commit.hash.clone();
        previous_tag = first_commit.hash;
    }

    Ok(ReleaseObject {
        version: version.to_string(),
        tag: format!("v{}", version),
        previous,
        previous_tag,
        changes,
    })
}
