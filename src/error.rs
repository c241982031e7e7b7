use {
    std::{
        io,
        path::{Path, PathBuf},
    },
    thiserror::Error,
};

/// Everything that can stop a version bump.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("The \"{}\" file doesn't exist.", file_name(.path))]
    ManifestMissing { path: PathBuf },

    #[error("Couldn't read \"{}\": {source}", file_name(.path))]
    ManifestRead { path: PathBuf, source: io::Error },

    #[error("Couldn't parse \"{}\": {source}", file_name(.path))]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No \"version\" field inside \"{}\".", file_name(.path))]
    MissingVersionField { path: PathBuf },

    #[error(
        "The current tag ({current}) is not a pre-release tag. Run `release-bump preminor` to \
         start one, then `release-bump pre canary` to name it, which would take it to \
         {suggested}. After that's been done once, you can keep running `release-bump pre`."
    )]
    InvalidTransition { current: String, suggested: String },

    #[error("Invalid version `{version}`: {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    #[error("Can't bump `{version}`: the number to increment is already at its maximum")]
    VersionOverflow { version: String },

    #[error("Couldn't write to \"{}\": {source}", file_name(.path))]
    Write { path: PathBuf, source: io::Error },

    #[error("Couldn't read \"{}\": {source}", file_name(.path))]
    LockRead { path: PathBuf, source: io::Error },

    #[error("Couldn't parse \"{}\": {source}", file_name(.path))]
    LockParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Couldn't write to \"{}\": {source}", file_name(.path))]
    LockWrite { path: PathBuf, source: io::Error },
}

pub type Result<T, E = BumpError> = std::result::Result<T, E>;

impl BumpError {
    /// Whether the error came from the lock-manifest step.
    pub fn is_lock_error(&self) -> bool {
        matches!(
            self,
            BumpError::LockRead { .. } | BumpError::LockParse { .. } | BumpError::LockWrite { .. }
        )
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
