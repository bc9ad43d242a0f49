use crate::release::ReleaseObject;

/// Renders human-readable release notes for an assembled release.
///
/// Output is markdown: a heading for the release tag, a line naming the
/// previous release, then one section per changelog category that actually
/// received commits. Categories without commits are filtered out before
/// rendering.
pub fn render_notes(release: &ReleaseObject) -> String {
    let mut notes = String::new();

    notes.push_str(&format!("# {}\n\n", release.tag));
    notes.push_str(&format!("Changes since {}:\n", release.previous_tag));

    for bucket in release.non_empty_changes() {
        notes.push_str(&format!("\n## {}\n\n", bucket.label));
        for commit in &bucket.commits {
            notes.push_str(&format!("- {} ({})\n", commit.subject, commit.id));
        }
    }

    notes
}
