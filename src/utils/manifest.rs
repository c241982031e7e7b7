use {
    crate::{
        error::{BumpError, Result},
        types::LockStatus,
    },
    log::debug,
    semver::Version,
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
    std::{
        fs, io,
        path::{Path, PathBuf},
    },
};

pub const MANIFEST_FILE: &str = "package.json";
pub const LOCK_FILE: &str = "package-lock.json";

/// A JSON object read from a manifest, with key order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestDocument {
    fields: Map<String, Value>,
}

impl ManifestDocument {
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The `version` field as text, or `None` if it is absent or falsy.
    ///
    /// Non-string values are rendered as JSON so that they fail version parsing
    /// with a readable message instead of being mistaken for a missing field.
    pub fn version(&self) -> Option<String> {
        match self.fields.get("version")? {
            Value::Null | Value::Bool(false) => None,
            Value::String(version) if version.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(version) => Some(version.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Replaces `version` in place, or appends it if the field did not exist.
    pub fn set_version(&mut self, version: &Version) {
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    /// Lockfile v2/v3 also record the root package under `packages[""]`.
    fn set_root_package_version(&mut self, version: &Version) {
        if let Some(Value::Object(root)) = self
            .fields
            .get_mut("packages")
            .and_then(|packages| packages.get_mut(""))
        {
            if root.contains_key("version") {
                root.insert("version".to_string(), Value::String(version.to_string()));
            }
        }
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Where serialized manifests end up.
pub trait DocumentWriter {
    fn write(&self, path: &Path, json: &str) -> io::Result<()>;
}

/// Overwrites the file in place.
pub struct FileWriter;

impl DocumentWriter for FileWriter {
    fn write(&self, path: &Path, json: &str) -> io::Result<()> {
        fs::write(path, json)
    }
}

pub fn manifest_path(directory: &Path) -> PathBuf {
    directory.join(MANIFEST_FILE)
}

pub fn lock_path(directory: &Path) -> PathBuf {
    directory.join(LOCK_FILE)
}

/// Loads `package.json` from `directory`.
pub fn load(directory: &Path) -> Result<ManifestDocument> {
    let path = manifest_path(directory);
    if !path.exists() {
        return Err(BumpError::ManifestMissing { path });
    }

    debug!("reading {}", path.display());
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) => return Err(BumpError::ManifestRead { path, source }),
    };
    let document = match serde_json::from_str::<ManifestDocument>(&content) {
        Ok(document) => document,
        Err(source) => return Err(BumpError::ManifestParse { path, source }),
    };

    if document.version().is_none() {
        return Err(BumpError::MissingVersionField { path });
    }
    Ok(document)
}

/// Writes `version` into `manifest` and overwrites `package.json`.
pub fn persist(
    directory: &Path,
    manifest: &mut ManifestDocument,
    version: &Version,
    writer: &dyn DocumentWriter,
) -> Result<()> {
    let path = manifest_path(directory);
    manifest.set_version(version);
    write_document(writer, &path, manifest).map_err(|source| BumpError::Write { path, source })
}

/// Mirrors `version` into `package-lock.json` when that file exists.
pub fn persist_lock(
    directory: &Path,
    version: &Version,
    writer: &dyn DocumentWriter,
) -> Result<LockStatus> {
    let path = lock_path(directory);
    if !path.exists() {
        debug!("no {LOCK_FILE} in {}, skipping", directory.display());
        return Ok(LockStatus::Absent);
    }

    debug!("reading {}", path.display());
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) => return Err(BumpError::LockRead { path, source }),
    };
    let mut lock = match serde_json::from_str::<ManifestDocument>(&content) {
        Ok(lock) => lock,
        Err(source) => return Err(BumpError::LockParse { path, source }),
    };

    lock.set_version(version);
    lock.set_root_package_version(version);
    write_document(writer, &path, &lock).map_err(|source| BumpError::LockWrite { path, source })?;
    Ok(LockStatus::Updated)
}

fn write_document(
    writer: &dyn DocumentWriter,
    path: &Path,
    document: &ManifestDocument,
) -> io::Result<()> {
    let json = document.to_json_string()?;
    debug!("writing {}", path.display());
    writer.write(path, &json)
}
