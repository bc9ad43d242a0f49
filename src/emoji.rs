use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;

/// Changelog category assigned to a commit based on its gitmoji code.
///
/// `Release` marks version-bump commits and never appears in changelog
/// buckets. `Miscellaneous` is the fallback for emoji that belong to no
/// other group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitLabel {
    BreakingChanges,
    Added,
    Security,
    Fixed,
    Removed,
    Deprecated,
    Changed,
    Miscellaneous,
    Release,
}

impl CommitLabel {
    /// Human-readable label used in rendered release notes
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitLabel::BreakingChanges => "Breaking Changes",
            CommitLabel::Added => "Added",
            CommitLabel::Security => "Security",
            CommitLabel::Fixed => "Fixed",
            CommitLabel::Removed => "Removed",
            CommitLabel::Deprecated => "Deprecated",
            CommitLabel::Changed => "Changed",
            CommitLabel::Miscellaneous => "Miscellaneous",
            CommitLabel::Release => "Release",
        }
    }
}

impl fmt::Display for CommitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Changelog categories in the order they appear in release notes.
/// Every label except `Release` is listed here.
pub const UNRELEASED_LABELS: [CommitLabel; 8] = [
    CommitLabel::BreakingChanges,
    CommitLabel::Added,
    CommitLabel::Security,
    CommitLabel::Fixed,
    CommitLabel::Removed,
    CommitLabel::Deprecated,
    CommitLabel::Changed,
    CommitLabel::Miscellaneous,
];

/// One category and the emoji codes that map to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiGroup {
    pub label: CommitLabel,
    pub emojis: &'static [&'static str],
}

/// Static emoji taxonomy. Each code belongs to exactly one group; anything
/// not listed here classifies as `Miscellaneous`.
pub const EMOJI_MAP: &[EmojiGroup] = &[
    EmojiGroup {
        label: CommitLabel::Release,
        emojis: &["bookmark"],
    },
    EmojiGroup {
        label: CommitLabel::BreakingChanges,
        emojis: &["boom"],
    },
    EmojiGroup {
        label: CommitLabel::Added,
        emojis: &[
            "sparkles",
            "tada",
            "construction_worker",
            "heavy_plus_sign",
            "white_check_mark",
        ],
    },
    EmojiGroup {
        label: CommitLabel::Security,
        emojis: &["lock", "closed_lock_with_key"],
    },
    EmojiGroup {
        label: CommitLabel::Fixed,
        emojis: &[
            "bug",
            "ambulance",
            "apple",
            "pencil2",
            "green_heart",
            "adhesive_bandage",
        ],
    },
    EmojiGroup {
        label: CommitLabel::Removed,
        emojis: &["fire", "heavy_minus_sign", "mute", "coffin"],
    },
    EmojiGroup {
        label: CommitLabel::Deprecated,
        emojis: &["wastebasket"],
    },
    EmojiGroup {
        label: CommitLabel::Changed,
        emojis: &[
            "art",
            "bento",
            "building_construction",
            "recycle",
            "zap",
            "lipstick",
            "truck",
            "wrench",
            "arrow_up",
            "arrow_down",
            "hammer",
        ],
    },
];

/// Maps commit subjects to changelog categories via their `:code:` token.
///
/// The emoji map is injected at construction so tests can substitute a
/// smaller taxonomy; `CommitClassifier::default()` uses [EMOJI_MAP].
#[derive(Debug, Clone)]
pub struct CommitClassifier {
    map: &'static [EmojiGroup],
}

impl CommitClassifier {
    /// Create a classifier over a custom emoji map
    pub fn new(map: &'static [EmojiGroup]) -> Self {
        CommitClassifier { map }
    }

    /// Classify a commit subject by its first `:code:` token.
    ///
    /// Returns [ReleaseError::MissingEmoji] if the subject carries no token
    /// at all; codes absent from the map classify as `Miscellaneous`.
    pub fn classify(&self, subject: &str) -> Result<CommitLabel> {
        let code = Regex::new(r":(\w+):")
            .ok()
            .and_then(|re| re.captures(subject))
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| ReleaseError::MissingEmoji {
                subject: subject.to_string(),
            })?;

        for group in self.map {
            if group.emojis.contains(&code.as_str()) {
                return Ok(group.label);
            }
        }

        Ok(CommitLabel::Miscellaneous)
    }
}

impl Default for CommitClassifier {
    fn default() -> Self {
        CommitClassifier::new(EMOJI_MAP)
    }
}
