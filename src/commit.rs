use crate::error::{ReleaseError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Commit author identity as recorded in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// One parsed git commit.
///
/// Mirrors the JSON records produced by the `git log` pretty-format used by
/// [crate::git::GitCli]: `ref` carries the `%D` decoration string (branch and
/// tag names pointing at the commit, empty if none) and is renamed to
/// `ref_names` on the Rust side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Commit {
    /// Full commit hash
    pub hash: String,
    /// Short hash, conventionally the first 7 characters of `hash`
    pub id: String,
    /// Author timestamp, carried as epoch seconds on the wire
    #[serde(with = "epoch_seconds")]
    pub timestamp: DateTime<Utc>,
    pub author: Author,
    /// First line of the commit message; holds the `:code:` emoji token
    pub subject: String,
    /// Remaining commit message text, possibly empty
    pub body: String,
    #[serde(rename = "ref")]
    pub ref_names: String,
}

/// Parses raw `git log` output into a list of commits.
///
/// The input is newline-delimited JSON, one record per commit. Any line that
/// is not valid JSON or does not match the [Commit] schema fails the whole
/// parse; there are no partial results. An empty input yields an empty list.
/// Output order matches input order.
pub fn parse_log_output(output: &str) -> Result<Vec<Commit>> {
    if output.trim().is_empty() {
        return Ok(Vec::new());
    }

    output
        .lines()
        .enumerate()
        .map(|(index, line)| {
            serde_json::from_str(line)
                .map_err(|e| ReleaseError::log_parse(format!("line {}: {}", index + 1, e)))
        })
        .collect()
}

/// Compares two commits by timestamp, newest first.
///
/// Returns `Less` if `a` is more recent than `b`, so sorting with this
/// comparator puts the most recent commit at index 0.
pub fn compare_by_timestamp(a: &Commit, b: &Commit) -> Ordering {
    b.timestamp.cmp(&a.timestamp)
}

mod epoch_seconds {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Raw timestamp value as it appears in the log: `--date=format:%s`
    /// yields a quoted decimal string, seed data may use a bare number.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Seconds(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(
        timestamp: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(timestamp.timestamp())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let seconds = match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Seconds(n) => n,
            RawTimestamp::Text(text) => match text.parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    // Not epoch seconds, use the raw value as a date string
                    return DateTime::parse_from_rfc3339(&text)
                        .map(|dt| dt.with_timezone(&Utc))
                        .map_err(|e| {
                            de::Error::custom(format!("invalid timestamp {:?}: {}", text, e))
                        });
                }
            },
        };

        Utc.timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", seconds)))
    }
}
