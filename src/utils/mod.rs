pub mod increment;
pub mod manifest;
pub mod reporter;

pub use manifest::{
    load, persist, persist_lock, DocumentWriter, FileWriter, ManifestDocument, LOCK_FILE,
    MANIFEST_FILE,
};
pub use reporter::{PlainReporter, ProgressReporter, Spinner};
