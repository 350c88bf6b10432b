//! In-memory model of the project that will be written to disk.
//!
//! Ownership only flows downward: a [`Directory`] owns its files and
//! subdirectories, and a [`File`] holds no link back to its directory. The
//! on-disk location of a file is `directory.path().join(file.name())`.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A file with its fully rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    content: String,
}

impl File {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A directory identified by its absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    path: PathBuf,
    files: Vec<File>,
    directories: Vec<Directory>,
}

impl Directory {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into(), files: Vec::new(), directories: Vec::new() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Files in insertion order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Subdirectories in insertion order.
    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    /// Appends a file, rejecting a name already used in this directory.
    pub fn add_file<N, C>(&mut self, name: N, content: C) -> Result<&File>
    where
        N: Into<String>,
        C: Into<String>,
    {
        let name = name.into();
        self.ensure_unique(&name)?;
        self.files.push(File { name, content: content.into() });
        Ok(&self.files[self.files.len() - 1])
    }

    /// Appends an empty subdirectory named `name` and returns it for filling.
    pub fn add_directory<N: Into<String>>(&mut self, name: N) -> Result<&mut Directory> {
        let name = name.into();
        self.ensure_unique(&name)?;
        let child = Directory::new(self.path.join(&name));
        self.directories.push(child);
        let last = self.directories.len() - 1;
        Ok(&mut self.directories[last])
    }

    /// Absolute path of `file` when it lives in this directory.
    pub fn file_path(&self, file: &File) -> PathBuf {
        self.path.join(file.name())
    }

    fn ensure_unique(&self, name: &str) -> Result<()> {
        let taken = self.files.iter().any(|f| f.name == name)
            || self.directories.iter().any(|d| d.path.file_name() == Some(OsStr::new(name)));
        if taken {
            return Err(Error::DuplicateEntry {
                directory: self.path.clone(),
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

/// A fully generated project. Constructed by the generator and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub(crate) name: String,
    pub(crate) author: String,
    pub(crate) license: String,
    pub(crate) year: i32,
    pub(crate) root: Directory,
}

impl Project {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }
}
