// src/exec/backend.rs

//! Pluggable launcher abstraction.

use std::future::Future;
use std::io;
use std::pin::Pin;

use crate::config::CommandDescriptor;

/// Future returned by [`ProcessHandle::wait`].
pub type WaitFuture<'a> = Pin<Box<dyn Future<Output = io::Result<i32>> + Send + 'a>>;

/// One launched child process, exclusively owned by the runner.
pub trait ProcessHandle: Send {
    /// Suspend until this process terminates and return its exit code.
    fn wait(&mut self) -> WaitFuture<'_>;

    /// Exit code, once termination has been observed by [`wait`](Self::wait).
    fn exit_code(&self) -> Option<i32>;

    /// OS process id, if known.
    fn id(&self) -> Option<u32> {
        None
    }
}

/// Creates child processes for a [`CommandDescriptor`].
///
/// Errors are returned as raw `io::Error`s so the caller can tell
/// `ErrorKind::NotFound` apart from other launch failures.
pub trait Launcher: Send {
    type Handle: ProcessHandle;

    fn launch(&mut self, command: &CommandDescriptor) -> io::Result<Self::Handle>;
}
