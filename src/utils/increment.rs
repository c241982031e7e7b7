//! Version arithmetic compatible with node-semver's `inc`.
//!
//! `semver` parses and orders versions but has no notion of bumping them, so
//! the increment rules live here. Build metadata never survives an increment.

use {
    crate::{
        error::{BumpError, Result},
        types::BumpType,
    },
    semver::{Prerelease, Version},
    std::fmt,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{n}"),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// Parses a version, tolerating surrounding whitespace and a leading `v` or `=`.
pub fn parse(version: &str) -> Result<Version> {
    let trimmed = version
        .trim()
        .trim_start_matches(|c: char| c == 'v' || c == '=' || c.is_whitespace());
    Version::parse(trimmed).map_err(|source| BumpError::InvalidVersion {
        version: version.to_string(),
        source,
    })
}

/// The pre-release identifiers of `version`, or `None` for a release version.
pub fn prerelease(version: &Version) -> Option<Vec<Identifier>> {
    if version.pre.is_empty() {
        return None;
    }
    let identifiers = version
        .pre
        .as_str()
        .split('.')
        .map(|part| match part.parse::<u64>() {
            Ok(n) if part.bytes().all(|b| b.is_ascii_digit()) => Identifier::Numeric(n),
            _ => Identifier::AlphaNumeric(part.to_string()),
        })
        .collect();
    Some(identifiers)
}

pub fn increment(
    current: &Version,
    bump_type: BumpType,
    identifier: Option<&str>,
) -> Result<Version> {
    let identifier = identifier.filter(|id| !id.is_empty());
    let mut next = Version::new(current.major, current.minor, current.patch);
    let mut pre = prerelease(current).unwrap_or_default();

    match bump_type {
        BumpType::Major => {
            // 1.0.0-5 -> 1.0.0, 1.1.0 -> 2.0.0
            if next.minor != 0 || next.patch != 0 || pre.is_empty() {
                next.major = bump_component(next.major, current)?;
            }
            next.minor = 0;
            next.patch = 0;
            pre.clear();
        }
        BumpType::Minor => {
            if next.patch != 0 || pre.is_empty() {
                next.minor = bump_component(next.minor, current)?;
            }
            next.patch = 0;
            pre.clear();
        }
        BumpType::Patch => {
            if pre.is_empty() {
                next.patch = bump_component(next.patch, current)?;
            }
            pre.clear();
        }
        BumpType::Premajor => {
            next.major = bump_component(next.major, current)?;
            next.minor = 0;
            next.patch = 0;
            pre.clear();
            bump_prerelease(&mut pre, identifier, current)?;
        }
        BumpType::Preminor => {
            next.minor = bump_component(next.minor, current)?;
            next.patch = 0;
            pre.clear();
            bump_prerelease(&mut pre, identifier, current)?;
        }
        BumpType::Prepatch => {
            next.patch = bump_component(next.patch, current)?;
            pre.clear();
            bump_prerelease(&mut pre, identifier, current)?;
        }
        BumpType::Prerelease => {
            if pre.is_empty() {
                next.patch = bump_component(next.patch, current)?;
            }
            bump_prerelease(&mut pre, identifier, current)?;
        }
        BumpType::Pre => bump_prerelease(&mut pre, identifier, current)?,
    }

    if !pre.is_empty() {
        let joined = pre
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        next.pre = Prerelease::new(&joined).map_err(|source| BumpError::InvalidVersion {
            version: format!("{}.{}.{}-{joined}", next.major, next.minor, next.patch),
            source,
        })?;
    }

    Ok(next)
}

fn bump_component(value: u64, current: &Version) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| BumpError::VersionOverflow {
        version: current.to_string(),
    })
}

fn bump_prerelease(
    pre: &mut Vec<Identifier>,
    identifier: Option<&str>,
    current: &Version,
) -> Result<()> {
    // beta.1 -> beta.2 keeps counting; beta, beta.foo or alpha.3 restart at beta.0
    if let Some(identifier) = identifier {
        let continues = matches!(
            pre.first(),
            Some(Identifier::AlphaNumeric(first)) if first == identifier
        ) && matches!(pre.get(1), Some(Identifier::Numeric(_)));
        if !continues {
            *pre = vec![
                Identifier::AlphaNumeric(identifier.to_string()),
                Identifier::Numeric(0),
            ];
            return Ok(());
        }
    }

    let last_numeric = pre.iter_mut().rev().find_map(|id| match id {
        Identifier::Numeric(n) => Some(n),
        Identifier::AlphaNumeric(_) => None,
    });
    match last_numeric {
        Some(n) => *n = bump_component(*n, current)?,
        None => pre.push(Identifier::Numeric(0)),
    }
    Ok(())
}
