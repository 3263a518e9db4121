// src/config/command.rs

use std::ffi::OsStr;
use std::fmt;

/// Host operating-system family, as far as the client path is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Unix,
}

impl HostPlatform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Unix
        }
    }
}

/// Path of the external client executable.
///
/// Resolved once at startup and handed to the runner by value. The client is
/// invoked with no arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    program: String,
}

impl CommandDescriptor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Relative client path expected in the working directory.
    pub fn for_platform(platform: HostPlatform) -> Self {
        match platform {
            HostPlatform::Windows => Self::new(r".\client.exe"),
            HostPlatform::Unix => Self::new("./client"),
        }
    }

    pub fn for_host() -> Self {
        Self::for_platform(HostPlatform::current())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Quoted form used in report lines.
    ///
    /// Single quotes unless the path contains `'` but no `"`. Backslashes and
    /// the chosen quote character are escaped; other characters are kept
    /// verbatim, control characters included.
    pub fn quoted(&self) -> String {
        let quote = if self.program.contains('\'') && !self.program.contains('"') {
            '"'
        } else {
            '\''
        };

        let mut out = String::with_capacity(self.program.len() + 2);
        out.push(quote);
        for c in self.program.chars() {
            if c == '\\' || c == quote {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(quote);
        out
    }
}

impl AsRef<OsStr> for CommandDescriptor {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(&self.program)
    }
}

impl fmt::Display for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)
    }
}
