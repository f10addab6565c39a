//! Build metadata derived from the working directory.
//!
//! The program being containerized is identified purely by where it lives:
//!
//! - `app_path` is the directory relative to the module root (`$GOPATH` by
//!   default), used for `ENV APP_DIR` in the standard template
//! - `entrypoint` is the directory's final segment, used as binary name and
//!   container entrypoint

use std::env::VarError;
use std::path::Path;

/// The only root variable read as a path list (`/a:/b` on Unix).
const GOPATH_ENV: &str = "GOPATH";

/// Values substituted into the Dockerfile templates.
///
/// # Examples
///
/// ```
/// use dockerize_core::BuildMetadata;
/// use std::path::Path;
///
/// let meta = BuildMetadata::derive(Path::new("/home/me/go/src/myapp"), "/home/me/go", "8080")
///     .unwrap();
/// assert_eq!(meta.app_path, "/src/myapp");
/// assert_eq!(meta.entrypoint, "myapp");
/// assert_eq!(meta.expose, "8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    /// Working directory with the module root stripped once.
    ///
    /// Equals the full absolute path when the directory is not under the root.
    pub app_path: String,
    /// Final segment of the working directory
    pub entrypoint: String,
    /// Port declared with `EXPOSE`
    pub expose: String,
}

impl BuildMetadata {
    /// Derive metadata for the process working directory.
    ///
    /// The module root is read from the environment variable `root_env`;
    /// an unset variable strips nothing. `GOPATH` is split as a path list,
    /// any other variable is a single root.
    ///
    /// # Errors
    ///
    /// - [`Error::WorkingDirResolve`](crate::Error::WorkingDirResolve) if the
    ///   working directory cannot be resolved (e.g. it was deleted)
    /// - any error from [`derive`](Self::derive)
    pub fn from_current_dir(root_env: &str, expose: impl Into<String>) -> crate::Result<Self> {
        let dir =
            std::env::current_dir().map_err(|e| crate::Error::WorkingDirResolve { source: e })?;

        let root = match std::env::var(root_env) {
            Ok(value) => value,
            Err(VarError::NotPresent) => String::new(),
            Err(VarError::NotUnicode(raw)) => {
                tracing::warn!(
                    var = root_env,
                    value = ?raw,
                    "module root is not valid UTF-8; ignoring it"
                );
                String::new()
            }
        };

        let roots: Vec<String> = if root_env == GOPATH_ENV {
            std::env::split_paths(&root)
                .filter_map(|entry| entry.to_str().map(str::to_owned))
                .collect()
        } else {
            vec![root]
        };
        let roots: Vec<&str> = roots.iter().map(String::as_str).collect();

        Self::derive_with_roots(&dir, &roots, expose)
    }

    /// Derive metadata from an absolute directory and a single module root.
    ///
    /// `root` is removed once when it prefixes `dir`; otherwise `app_path`
    /// is `dir` unchanged. An empty root strips nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::NonUtf8Path`](crate::Error::NonUtf8Path) if `dir` is not UTF-8
    /// - [`Error::NoEntrypoint`](crate::Error::NoEntrypoint) if `dir` has no
    ///   final segment (the filesystem root)
    pub fn derive(dir: &Path, root: &str, expose: impl Into<String>) -> crate::Result<Self> {
        Self::derive_with_roots(dir, &[root], expose)
    }

    /// Like [`derive`](Self::derive), trying each root in order; the first
    /// one that prefixes `dir` is removed.
    pub fn derive_with_roots(
        dir: &Path,
        roots: &[&str],
        expose: impl Into<String>,
    ) -> crate::Result<Self> {
        let dir_str = dir.to_str().ok_or_else(|| crate::Error::NonUtf8Path {
            path: dir.to_path_buf(),
        })?;

        let entrypoint = dir
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| crate::Error::NoEntrypoint {
                path: dir.to_path_buf(),
            })?
            .to_owned();

        let app_path = match strip_root(dir_str, roots) {
            Some(relative) => relative.to_owned(),
            None => {
                tracing::debug!(
                    dir = dir_str,
                    roots = ?roots,
                    "working directory is not under the module root; using the absolute path"
                );
                dir_str.to_owned()
            }
        };

        let meta = Self {
            app_path,
            entrypoint,
            expose: expose.into(),
        };
        tracing::debug!(
            app_path = %meta.app_path,
            entrypoint = %meta.entrypoint,
            expose = %meta.expose,
            "build metadata derived"
        );
        Ok(meta)
    }
}

/// Remove the first non-empty root that prefixes `dir`.
fn strip_root<'a>(dir: &'a str, roots: &[&str]) -> Option<&'a str> {
    roots
        .iter()
        .filter(|root| !root.is_empty())
        .find_map(|root| dir.strip_prefix(root))
}
