use {
    crate::{
        error::{BumpError, Result},
        types::{BumpOutcome, BumpType, LockStatus},
        utils::{
            increment,
            manifest::{self, DocumentWriter, FileWriter},
            reporter::ProgressReporter,
        },
    },
    clap::Args,
    log::{debug, info},
    semver::Version,
    std::path::Path,
};

/// Identifier used to build the suggestion when `pre` is refused.
pub const DEFAULT_PRE_IDENTIFIER: &str = "canary";

#[derive(Args, Debug, Clone)]
pub struct CommandArgs {
    #[arg(value_enum)]
    pub bump_type: BumpType,

    /// Pre-release identifier, only used with `pre` (e.g. canary, beta)
    pub pre_suffix: Option<String>,
}

/// Runs one bump in `directory`, reporting progress through `reporter`.
pub fn run(
    args: &CommandArgs,
    directory: &Path,
    reporter: &mut dyn ProgressReporter,
) -> BumpOutcome {
    run_with_writer(args, directory, reporter, &FileWriter)
}

/// Same as [`run`], with manifests written through `writer`.
pub fn run_with_writer(
    args: &CommandArgs,
    directory: &Path,
    reporter: &mut dyn ProgressReporter,
    writer: &dyn DocumentWriter,
) -> BumpOutcome {
    reporter.start("Bumping version tag");

    let outcome = bump(args, directory, writer);
    match &outcome {
        BumpOutcome::FullSuccess(version) => reporter.succeed(&version.to_string()),
        BumpOutcome::PartialSuccess { version, error } => reporter.fail(&format!(
            "Bumped \"{}\" to {version}, but \"{}\" was not updated. {error}",
            manifest::MANIFEST_FILE,
            manifest::LOCK_FILE,
        )),
        BumpOutcome::Failure(error) => reporter.fail(&error.to_string()),
    }
    outcome
}

fn bump(args: &CommandArgs, directory: &Path, writer: &dyn DocumentWriter) -> BumpOutcome {
    let new_version = match bump_manifest(args, directory, writer) {
        Ok(new_version) => new_version,
        Err(error) => return BumpOutcome::Failure(error),
    };

    match manifest::persist_lock(directory, &new_version, writer) {
        Ok(LockStatus::Updated) => {
            info!("bumped {} to {new_version}", manifest::LOCK_FILE);
            BumpOutcome::FullSuccess(new_version)
        }
        Ok(LockStatus::Absent) => BumpOutcome::FullSuccess(new_version),
        Err(error) if error.is_lock_error() => BumpOutcome::PartialSuccess {
            version: new_version,
            error,
        },
        Err(error) => BumpOutcome::Failure(error),
    }
}

fn bump_manifest(
    args: &CommandArgs,
    directory: &Path,
    writer: &dyn DocumentWriter,
) -> Result<Version> {
    let mut document = manifest::load(directory)?;
    let current = document
        .version()
        .ok_or_else(|| BumpError::MissingVersionField {
            path: manifest::manifest_path(directory),
        })?;

    let new_version = next_version(&current, args.bump_type, args.pre_suffix.as_deref())?;
    debug!("{} bump: {current} -> {new_version}", args.bump_type);

    manifest::persist(directory, &mut document, &new_version, writer)?;
    info!("bumped {} from {current} to {new_version}", manifest::MANIFEST_FILE);
    Ok(new_version)
}

/// Computes the version that follows `current` for `bump_type`.
///
/// A release version cannot take a `pre` bump; the returned
/// [`BumpError::InvalidTransition`] carries what a `preminor` bump with the
/// `canary` identifier would have produced. `pre_suffix` only applies to `pre`.
pub fn next_version(
    current: &str,
    bump_type: BumpType,
    pre_suffix: Option<&str>,
) -> Result<Version> {
    let current = increment::parse(current)?;
    let is_pre = increment::prerelease(&current).is_some();
    let should_be_pre = bump_type == BumpType::Pre;

    if !is_pre && should_be_pre {
        let suggested = increment::increment(
            &current,
            BumpType::Preminor,
            Some(DEFAULT_PRE_IDENTIFIER),
        )?;
        return Err(BumpError::InvalidTransition {
            current: current.to_string(),
            suggested: suggested.to_string(),
        });
    }

    match pre_suffix {
        Some(suffix) if should_be_pre => increment::increment(&current, bump_type, Some(suffix)),
        _ => increment::increment(&current, bump_type, None),
    }
}
