//! `+semver:` commit message markers.
//!
//! Markers are free text anywhere in a commit message:
//!
//! ```text
//! +semver: breaking | major        -> major bump
//! +semver: feature | feat | minor  -> minor bump
//! +semver: fix | patch             -> patch bump
//! ```
//!
//! Rules are checked in that order against the whole message text and the
//! first rule that matches decides the bump. Without any marker the bump
//! is a patch.

use regex::Regex;

use crate::error::Result;
use crate::version::VersionBump;

const BREAKING_PATTERN: &str = r"\+semver:\s?(breaking|major)";
const FEATURE_PATTERN: &str = r"\+semver:\s?(feature|feat|minor)";
const FIX_PATTERN: &str = r"\+semver:\s?(fix|patch)";

/// A single marker pattern and the bump it triggers
#[derive(Debug, Clone)]
pub struct MarkerRule {
    pattern: Regex,
    bump: VersionBump,
}

impl MarkerRule {
    pub fn new(pattern: &str, bump: VersionBump) -> Result<Self> {
        Ok(MarkerRule {
            pattern: Regex::new(pattern)?,
            bump,
        })
    }

    pub fn bump(&self) -> VersionBump {
        self.bump
    }

    pub fn matches(&self, messages: &str) -> bool {
        self.pattern.is_match(messages)
    }
}

/// Ordered marker rules; earlier rules take priority
#[derive(Debug, Clone)]
pub struct MarkerScanner {
    rules: Vec<MarkerRule>,
}

impl MarkerScanner {
    /// Scanner with the breaking, feature and fix rules in priority order
    pub fn new() -> Result<Self> {
        Ok(MarkerScanner {
            rules: vec![
                MarkerRule::new(BREAKING_PATTERN, VersionBump::Major)?,
                MarkerRule::new(FEATURE_PATTERN, VersionBump::Minor)?,
                MarkerRule::new(FIX_PATTERN, VersionBump::Patch)?,
            ],
        })
    }

    /// The marker found with the highest priority, if any
    pub fn find(&self, messages: &str) -> Option<VersionBump> {
        self.rules
            .iter()
            .find(|rule| rule.matches(messages))
            .map(MarkerRule::bump)
    }

    /// Determine the bump for the aggregated commit messages.
    ///
    /// Any change without a marker still counts as a patch.
    pub fn classify(&self, messages: &str) -> VersionBump {
        self.find(messages).unwrap_or(VersionBump::Patch)
    }
}
