use crate::error::{ReleaseError, Result};
use semver::Version;
use std::fmt;
use std::str::FromStr;

/// The kind of release to perform when computing the next version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
}

impl FromStr for ReleaseType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(ReleaseType::Major),
            "minor" => Ok(ReleaseType::Minor),
            "patch" => Ok(ReleaseType::Patch),
            other => Err(ReleaseError::InvalidReleaseType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// A parsed semantic version plus its string and tag forms.
///
/// Immutable once constructed; every increment returns a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionObject {
    version: String,
    tag: String,
    semver: Version,
}

impl VersionObject {
    /// Parse a semantic version string (e.g. "1.2.0" or "1.2.0-rc.1")
    pub fn parse(raw: &str) -> Result<Self> {
        let semver = Version::parse(raw)?;
        Ok(VersionObject::from_semver(semver))
    }

    /// Wrap an already-parsed semantic version
    pub fn from_semver(semver: Version) -> Self {
        let version = semver.to_string();
        let tag = format!("v{}", version);
        VersionObject {
            version,
            tag,
            semver,
        }
    }

    /// The normalized version string, e.g. "1.2.0"
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The tag form of the version, e.g. "v1.2.0"
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The structured semver components
    pub fn semver(&self) -> &Version {
        &self.semver
    }

    /// Next patch version; prerelease and build metadata are cleared
    pub fn next_patch(&self) -> Self {
        VersionObject::from_semver(Version::new(
            self.semver.major,
            self.semver.minor,
            self.semver.patch + 1,
        ))
    }

    /// Next minor version; patch resets, prerelease and build are cleared
    pub fn next_minor(&self) -> Self {
        VersionObject::from_semver(Version::new(self.semver.major, self.semver.minor + 1, 0))
    }

    /// Next major version; minor and patch reset, prerelease and build are cleared
    pub fn next_major(&self) -> Self {
        VersionObject::from_semver(Version::new(self.semver.major + 1, 0, 0))
    }

    /// Next version for the given release type
    pub fn next(&self, release_type: ReleaseType) -> Self {
        match release_type {
            ReleaseType::Major => self.next_major(),
            ReleaseType::Minor => self.next_minor(),
            ReleaseType::Patch => self.next_patch(),
        }
    }
}

impl fmt::Display for VersionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_string() {
        let version = VersionObject::parse("1.0.0").unwrap();
        assert_eq!(version.version(), "1.0.0");
        assert_eq!(version.tag(), "v1.0.0");
        assert_eq!(version.semver().major, 1);
    }

    #[test]
    fn test_parse_from_semver_components() {
        let version = VersionObject::from_semver(Version::new(2, 1, 3));
        assert_eq!(version.version(), "2.1.3");
        assert_eq!(version.tag(), "v2.1.3");
    }

    #[test]
    fn test_parse_invalid_version_fails() {
        assert!(matches!(
            VersionObject::parse("not-a-version"),
            Err(ReleaseError::VersionParse(_))
        ));
        assert!(VersionObject::parse("1.2").is_err());
    }

    #[test]
    fn test_next_patch() {
        let version = VersionObject::parse("1.0.0").unwrap();
        assert_eq!(version.next_patch().version(), "1.0.1");
        // receiver unchanged
        assert_eq!(version.version(), "1.0.0");
    }

    #[test]
    fn test_next_minor() {
        let version = VersionObject::parse("1.0.0").unwrap();
        assert_eq!(version.next_minor().version(), "1.1.0");
    }

    #[test]
    fn test_next_major() {
        let version = VersionObject::parse("1.0.0").unwrap();
        assert_eq!(version.next_major().version(), "2.0.0");
    }

    #[test]
    fn test_increments_clear_prerelease_and_build() {
        let version = VersionObject::parse("1.2.3-rc.1+build.5").unwrap();
        assert_eq!(version.next_patch().version(), "1.2.4");
        assert_eq!(version.next_minor().version(), "1.3.0");
        assert_eq!(version.next_major().version(), "2.0.0");
    }

    #[test]
    fn test_next_dispatches_by_release_type() {
        let version = VersionObject::parse("1.0.0").unwrap();
        assert_eq!(version.next(ReleaseType::Patch).version(), "1.0.1");
        assert_eq!(version.next(ReleaseType::Minor).version(), "1.1.0");
        assert_eq!(version.next(ReleaseType::Major).version(), "2.0.0");
    }

    #[test]
    fn test_release_type_from_str() {
        assert_eq!("major".parse::<ReleaseType>().unwrap(), ReleaseType::Major);
        assert_eq!("minor".parse::<ReleaseType>().unwrap(), ReleaseType::Minor);
        assert_eq!("patch".parse::<ReleaseType>().unwrap(), ReleaseType::Patch);
    }

    #[test]
    fn test_release_type_from_str_rejects_unknown() {
        let err = "mega".parse::<ReleaseType>().unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::InvalidReleaseType { ref value } if value == "mega"
        ));
    }
}
