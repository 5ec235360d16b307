//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crudgen_core::application::ports::Filesystem;
use crudgen_core::application::ApplicationError;
use crudgen_core::error::CrudgenResult;

/// In-memory filesystem for testing.
///
/// Clones share the same backing store, so the renderer and the generator
/// can operate on one tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent).expect("memory fs");
        }
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path, content.to_string());
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<PathBuf> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of files present.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn copy(&self, source: &Path, dest: &Path) -> CrudgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(dest))?;

        let content = inner.files.get(source).cloned().ok_or_else(|| {
            crudgen_core::error::CrudgenError::from(ApplicationError::FilesystemError {
                path: source.to_path_buf(),
                reason: "Source file does not exist".into(),
            })
        })?;

        inner.files.insert(dest.to_path_buf(), content);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CrudgenResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

fn lock_error(path: &Path) -> crudgen_core::error::CrudgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Filesystem lock poisoned".into(),
    }
    .into()
}
