use gitmoji_release::emoji::{CommitClassifier, CommitLabel};
use gitmoji_release::git::{retrieve_all_commits, GitCli, LogSource};
use gitmoji_release::release::assemble_release;
use std::path::Path;
use std::process::Command;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "user.name=Test User", "-c", "user.email=test@example.com"])
        .args(args)
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

fn git_commit(dir: &Path, subject: &str, date: &str) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "user.name=Test User", "-c", "user.email=test@example.com"])
        .args(["commit", "--allow-empty", "-m", subject])
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .status()
        .expect("failed to run git commit");
    assert!(status.success(), "git commit {:?} failed", subject);
}

/// Seeds a repository with one release boundary and two unreleased commits
fn setup_test_repo() -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().expect("could not create temp dir");
    let dir = temp_dir.path();

    git(dir, &["init"]);
    git_commit(dir, ":tada: Initial commit", "2023-01-01 10:00:00 +0000");
    git_commit(dir, ":bookmark: 0.1.0", "2023-01-02 10:00:00 +0000");
    git(dir, &["tag", "v0.1.0"]);
    git_commit(dir, ":bug: Fix the parser", "2023-01-03 10:00:00 +0000");
    git_commit(dir, ":sparkles: Add an exporter", "2023-01-04 10:00:00 +0000");

    temp_dir
}

#[test]
fn test_retrieve_all_parses_real_log_output() {
    let repo = setup_test_repo();
    let source = GitCli::new(repo.path());

    let commits = retrieve_all_commits(&source).unwrap();
    assert_eq!(commits.len(), 4);

    // newest first
    let subjects: Vec<&str> = commits.iter().map(|c| c.subject.as_str()).collect();
    assert_eq!(
        subjects,
        vec![
            ":sparkles: Add an exporter",
            ":bug: Fix the parser",
            ":bookmark: 0.1.0",
            ":tada: Initial commit",
        ]
    );

    for commit in &commits {
        assert_eq!(commit.hash.len(), 40);
        assert!(commit.hash.starts_with(&commit.id));
        assert_eq!(commit.author.name, "Test User");
        assert_eq!(commit.author.email, "test@example.com");
    }

    // the release commit carries its tag in the decoration
    assert!(commits[2].ref_names.contains("tag: v0.1.0"));
}

#[test]
fn test_retrieve_first_commit_returns_oldest() {
    let repo = setup_test_repo();
    let source = GitCli::new(repo.path());

    let first = source.retrieve_first_commit().unwrap();
    assert_eq!(first.subject, ":tada: Initial commit");
}

#[test]
fn test_assemble_release_against_real_repository() {
    let repo = setup_test_repo();
    let source = GitCli::new(repo.path());

    let commits = retrieve_all_commits(&source).unwrap();
    let release =
        assemble_release("0.2.0", &commits, &CommitClassifier::default(), &source).unwrap();

    assert_eq!(release.previous, "0.1.0");
    assert_eq!(release.previous_tag, "v0.1.0");
    assert_eq!(release.changes_for(CommitLabel::Fixed).unwrap().commits.len(), 1);
    assert_eq!(release.changes_for(CommitLabel::Added).unwrap().commits.len(), 1);
}

#[test]
fn test_first_release_in_untagged_repository() {
    let temp_dir = tempfile::tempdir().expect("could not create temp dir");
    let dir = temp_dir.path();

    git(dir, &["init"]);
    git_commit(dir, ":tada: Initial commit", "2023-01-01 10:00:00 +0000");
    git_commit(dir, ":bug: Fix something", "2023-01-02 10:00:00 +0000");

    let source = GitCli::new(dir);
    let commits = retrieve_all_commits(&source).unwrap();
    let release =
        assemble_release("0.1.0", &commits, &CommitClassifier::default(), &source).unwrap();

    let first = source.retrieve_first_commit().unwrap();
    assert_eq!(release.previous, first.hash);
    assert_eq!(release.previous_tag, first.hash);
}

#[test]
fn test_log_retrieval_outside_a_repository_fails() {
    let temp_dir = tempfile::tempdir().expect("could not create temp dir");
    let source = GitCli::new(temp_dir.path());

    let err = source.retrieve_all().unwrap_err();
    assert!(matches!(
        err,
        gitmoji_release::ReleaseError::Subprocess { .. }
    ));
}
