use std::path::{Component, Path, PathBuf};

/// Page served when the request path is exactly "/".
pub const INDEX_PAGE: &str = "/index.html";

/// Maps the bare root path to the index page; every other path is unchanged.
pub fn map_index(request_path: &str) -> &str {
    if request_path == "/" {
        INDEX_PAGE
    } else {
        request_path
    }
}

/// The directory files are served from.
///
/// The base is canonicalized once at startup. `resolve` joins request paths
/// onto it component by component, refusing anything that would escape it,
/// so every path handed to the filesystem is contained under the base.
#[derive(Debug, Clone)]
pub struct ServedRoot {
    base: PathBuf,
}

impl ServedRoot {
    pub fn new(base: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let base = base.into().canonicalize()?;
        Ok(Self { base })
    }

    /// Serve from the process's current working directory.
    pub fn current_dir() -> anyhow::Result<Self> {
        Self::new(std::env::current_dir()?)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolves an index-mapped request path to a filesystem path under the
    /// base. Returns `None` for paths that try to climb out of the root
    /// (`..` segments, absolute re-roots); callers treat that as not found.
    pub fn resolve(&self, page: &str) -> Option<PathBuf> {
        let relative = page.strip_prefix('/').unwrap_or(page);

        let mut resolved = self.base.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                // ParentDir, RootDir, Prefix: would leave the served root
                _ => return None,
            }
        }

        Some(resolved)
    }
}
