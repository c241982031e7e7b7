//! release-bump - bump the version of an npm-style project
//!
//! Reads `package.json` from a directory, computes the next semantic version
//! and writes it back, mirroring it into `package-lock.json` when present.
//!
//! # Examples
//!
//! ## Computing the next version
//!
//! ```
//! use release_bump::{commands::bump_version::next_version, types::BumpType};
//!
//! let next = next_version("1.2.3", BumpType::Minor, None).unwrap();
//! assert_eq!(next.to_string(), "1.3.0");
//!
//! let next = next_version("2.0.0-canary.3", BumpType::Pre, Some("canary")).unwrap();
//! assert_eq!(next.to_string(), "2.0.0-canary.4");
//! ```
//!
//! ## Bumping a project
//!
//! ```no_run
//! use release_bump::{
//!     commands::bump_version::{run, CommandArgs},
//!     types::BumpType,
//!     utils::reporter,
//! };
//!
//! let args = CommandArgs {
//!     bump_type: BumpType::Patch,
//!     pre_suffix: None,
//! };
//! let mut reporter = reporter::for_mode(false);
//! let outcome = run(&args, std::path::Path::new("."), reporter.as_mut());
//! std::process::exit(outcome.exit_code());
//! ```

pub mod commands;
pub mod error;
pub mod types;
pub mod utils;

pub use commands::bump_version;
pub use error::{BumpError, Result};

pub use semver::Version;
