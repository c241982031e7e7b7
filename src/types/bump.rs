use {
    crate::error::BumpError,
    clap::ValueEnum,
    semver::Version,
    std::fmt,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BumpType {
    #[value(help = "Bump major: x.y.z -> x+1.0.0 (x.0.0-<pre> -> x.0.0)")]
    Major,
    #[value(help = "Bump minor: x.y.z -> x.y+1.0 (x.y.0-<pre> -> x.y.0)")]
    Minor,
    #[value(help = "Bump patch: x.y.z -> x.y.z+1 (x.y.z-<pre> -> x.y.z)")]
    Patch,
    #[value(help = "Start a pre-release of the next major: x.y.z -> x+1.0.0-0")]
    Premajor,
    #[value(help = "Start a pre-release of the next minor: x.y.z -> x.y+1.0-0")]
    Preminor,
    #[value(help = "Start a pre-release of the next patch: x.y.z -> x.y.z+1-0")]
    Prepatch,
    #[value(
        help = "Bump the pre-release if present; otherwise start one on the next patch"
    )]
    Prerelease,
    #[value(
        help = "Bump the existing pre-release counter: x.y.z-<tag>.n -> x.y.z-<tag>.n+1"
    )]
    Pre,
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
            BumpType::Premajor => "premajor",
            BumpType::Preminor => "preminor",
            BumpType::Prepatch => "prepatch",
            BumpType::Prerelease => "prerelease",
            BumpType::Pre => "pre",
        };
        f.write_str(name)
    }
}

/// What happened to the lock-manifest once the primary manifest was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStatus {
    Updated,
    Absent,
}

/// Result of a whole bump run.
///
/// `PartialSuccess` means the primary manifest already holds `version` on disk
/// but the lock-manifest step failed.
#[derive(Debug)]
pub enum BumpOutcome {
    FullSuccess(Version),
    PartialSuccess { version: Version, error: BumpError },
    Failure(BumpError),
}

impl BumpOutcome {
    /// The version now recorded in the primary manifest, if any was written.
    pub fn written_version(&self) -> Option<&Version> {
        match self {
            BumpOutcome::FullSuccess(version) | BumpOutcome::PartialSuccess { version, .. } => {
                Some(version)
            }
            BumpOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&BumpError> {
        match self {
            BumpOutcome::FullSuccess(_) => None,
            BumpOutcome::PartialSuccess { error, .. } | BumpOutcome::Failure(error) => Some(error),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            BumpOutcome::FullSuccess(_) => 0,
            BumpOutcome::Failure(_) => 1,
            BumpOutcome::PartialSuccess { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq, std::path::PathBuf};

    #[test]
    fn test_bump_type_names_match_cli_values() {
        for bump_type in BumpType::value_variants() {
            let value = bump_type.to_possible_value().unwrap();
            assert_eq!(value.get_name(), bump_type.to_string());
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let full = BumpOutcome::FullSuccess(Version::new(1, 3, 0));
        assert_eq!(full.written_version(), Some(&Version::new(1, 3, 0)));
        assert!(full.error().is_none());
        assert_eq!(full.exit_code(), 0);

        let partial = BumpOutcome::PartialSuccess {
            version: Version::new(1, 3, 0),
            error: BumpError::LockWrite {
                path: PathBuf::from("package-lock.json"),
                source: std::io::Error::other("disk full"),
            },
        };
        assert_eq!(partial.written_version(), Some(&Version::new(1, 3, 0)));
        assert!(partial.error().unwrap().is_lock_error());
        assert_eq!(partial.exit_code(), 2);

        let failure = BumpOutcome::Failure(BumpError::ManifestMissing {
            path: PathBuf::from("package.json"),
        });
        assert!(failure.written_version().is_none());
        assert_eq!(failure.exit_code(), 1);
    }
}
