//! Deciding when to show the "what's new" page.

use semver::Version;

use crate::config::WhatsNewPolicy;
use crate::error::VersionError;

/// How far apart two versions are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionDiff {
    Major,
    Minor,
    Patch,
    /// Same major.minor.patch, different pre-release or build tag.
    Prerelease,
    None,
}

impl VersionDiff {
    /// Classify the difference between two versions, in either direction.
    pub fn between(a: &Version, b: &Version) -> Self {
        if a.major != b.major {
            Self::Major
        } else if a.minor != b.minor {
            Self::Minor
        } else if a.patch != b.patch {
            Self::Patch
        } else if a.pre != b.pre || a.build != b.build {
            Self::Prerelease
        } else {
            Self::None
        }
    }
}

/// Outcome of [`VersionGate::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    pub should_show: bool,
    /// `None` on first run.
    pub diff: Option<VersionDiff>,
    /// Version to record once the page has been shown.
    pub version_to_persist: Option<String>,
}

/// Compares the running version with the last one the page was shown for.
#[derive(Debug, Clone, Copy)]
pub struct VersionGate {
    policy: WhatsNewPolicy,
}

impl VersionGate {
    pub fn new(policy: WhatsNewPolicy) -> Self {
        Self { policy }
    }

    pub fn evaluate(
        &self,
        installed: &str,
        stored: Option<&str>,
    ) -> Result<GateDecision, VersionError> {
        let current = parse(installed)?;

        let Some(stored) = stored else {
            return Ok(GateDecision {
                should_show: true,
                diff: None,
                version_to_persist: Some(current.to_string()),
            });
        };

        let previous = parse(stored)?;
        let diff = VersionDiff::between(&current, &previous);

        let should_show = match self.policy {
            WhatsNewPolicy::Always => true,
            WhatsNewPolicy::Minor => matches!(diff, VersionDiff::Major | VersionDiff::Minor),
            WhatsNewPolicy::Major => diff == VersionDiff::Major,
            WhatsNewPolicy::Never => false,
        };

        Ok(GateDecision {
            should_show,
            diff: Some(diff),
            version_to_persist: should_show.then(|| current.to_string()),
        })
    }
}

fn parse(version: &str) -> Result<Version, VersionError> {
    Version::parse(version.trim()).map_err(|source| VersionError::InvalidFormat {
        version: version.to_string(),
        source,
    })
}
