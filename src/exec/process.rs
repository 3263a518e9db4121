// src/exec/process.rs

//! Real child processes via `tokio::process`.

use std::io;
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};
use tracing::{debug, trace};

use crate::config::CommandDescriptor;
use crate::exec::backend::{Launcher, ProcessHandle, WaitFuture};

/// Production launcher: runs the client directly (no shell), with stdout
/// and stderr discarded and stdin inherited.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioLauncher;

impl TokioLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for TokioLauncher {
    type Handle = TokioProcess;

    fn launch(&mut self, command: &CommandDescriptor) -> io::Result<TokioProcess> {
        let mut cmd = Command::new(command);
        cmd.stdout(Stdio::null())
            .stderr(Stdio::null())
            // Abandoned children must keep running.
            .kill_on_drop(false);

        let child = cmd.spawn()?;
        debug!(cmd = %command, pid = ?child.id(), "spawned client process");

        Ok(TokioProcess {
            child,
            exit_code: None,
        })
    }
}

/// Handle to a child spawned by [`TokioLauncher`].
#[derive(Debug)]
pub struct TokioProcess {
    child: Child,
    exit_code: Option<i32>,
}

impl ProcessHandle for TokioProcess {
    fn wait(&mut self) -> WaitFuture<'_> {
        Box::pin(async move {
            let status = self.child.wait().await?;
            let code = exit_code_of(status);
            trace!(?status, code, "client process terminated");
            self.exit_code = Some(code);
            Ok(code)
        })
    }

    fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    fn id(&self) -> Option<u32> {
        self.child.id()
    }
}

/// Map an exit status to a single integer code.
///
/// Normal exits keep their code. On Unix a signal-terminated process maps to
/// the negated signal number; anything else is `-1`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}
