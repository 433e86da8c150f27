use std::fmt;

/// Tag value reported when the repository has no reachable tag.
pub const DEFAULT_TAG: &str = "0.0.0";

/// Represents a semantic version with major, minor, and patch components.
///
/// Follows semantic versioning specification (major.minor.patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Represents the type of semantic version bump to apply.
///
/// Used to determine how to increment version numbers based on commit analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Creates a new Version with the specified major, minor, and patch components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses a version from a git tag string.
    ///
    /// Leading `v` characters are removed and the rest is split on dots.
    /// Exactly three non-negative integer components are expected.
    ///
    /// # Returns
    /// * `Some(Version)` - Successfully parsed version
    /// * `None` - Wrong number of components, a non-numeric component, or
    ///   a component larger than `u64::MAX`
    ///
    /// # Example
    /// ```
    /// use git_semver::version::Version;
    ///
    /// assert_eq!(Version::parse("v1.2.3"), Some(Version::new(1, 2, 3)));
    /// assert_eq!(Version::parse("1.2"), None);
    /// ```
    pub fn parse(tag: &str) -> Option<Self> {
        let clean_tag = tag.trim_start_matches('v');

        let parts: Vec<&str> = clean_tag.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        let major = parts[0].parse::<u64>().ok()?;
        let minor = parts[1].parse::<u64>().ok()?;
        let patch = parts[2].parse::<u64>().ok()?;

        Some(Version::new(major, minor, patch))
    }

    /// Like [`Version::parse`], but an unparsable tag yields `0.0.0`.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }

    /// Bumps a version according to the specified bump type.
    ///
    /// Increments the appropriate component and resets lower components to 0:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    pub fn bump(&self, bump_type: VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => Version::new(self.major.saturating_add(1), 0, 0),
            VersionBump::Minor => Version::new(self.major, self.minor.saturating_add(1), 0),
            VersionBump::Patch => {
                Version::new(self.major, self.minor, self.patch.saturating_add(1))
            }
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
