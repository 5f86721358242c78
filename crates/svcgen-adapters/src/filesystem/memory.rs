//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use svcgen_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can seed and inspect the same instance a
/// service owns.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file (and its parent directories).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                add_dir_all(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Add a directory (and its parents).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            add_dir_all(&mut inner.directories, path.as_ref());
        }
        self
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.executables.contains(path))
            .unwrap_or(false)
    }
}

fn add_dir_all(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn poisoned() -> io::Error {
    io::Error::other("memory filesystem lock poisoned")
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file: {}", path.display()),
            )
        })
    }

    fn set_executable(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if !inner.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file: {}", path.display()),
            ));
        }
        inner.executables.insert(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_file_creates_parents() {
        let fs = MemoryFilesystem::new().with_file("a/b/source.yml", "x");
        assert!(fs.is_dir(Path::new("a")));
        assert!(fs.is_dir(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/source.yml")));
        assert!(!fs.is_dir(Path::new("a/b/source.yml")));
    }

    #[test]
    fn read_missing_is_not_found() {
        let err = MemoryFilesystem::new()
            .read_to_string(Path::new("x"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn set_executable_marks_file() {
        let fs = MemoryFilesystem::new().with_file("dist/tool", "");
        fs.set_executable(Path::new("dist/tool")).unwrap();
        assert!(fs.is_executable(Path::new("dist/tool")));
    }

    #[test]
    fn set_executable_on_missing_file_fails() {
        assert!(MemoryFilesystem::new()
            .set_executable(Path::new("nope"))
            .is_err());
    }
}
