//! Throwaway client executables for tests that spawn real processes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch working directory that may hold a `client` executable.
pub struct ClientDir {
    dir: TempDir,
}

impl ClientDir {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an executable `sh` script named `name` with the given body.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> io::Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    /// Write a non-executable file named `name`.
    pub fn plain_file(&self, name: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, "not a program\n")?;
        Ok(path)
    }

    /// The standard `./client` that exits with `code`.
    #[cfg(unix)]
    pub fn client_exiting(&self, code: i32) -> io::Result<PathBuf> {
        self.script("client", &format!("exit {code}"))
    }
}
