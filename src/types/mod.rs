pub mod bump;

pub use bump::{BumpOutcome, BumpType, LockStatus};
