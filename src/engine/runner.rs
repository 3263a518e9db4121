// src/engine/runner.rs

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::engine::report::Reporter;
use crate::errors::{BurstError, Result};
use crate::exec::{Launcher, ProcessHandle};

/// Lifecycle of a single burst.
///
/// `Idle -> Launching -> Awaiting -> Done`, or `Launching -> Done` when the
/// client cannot be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Launching,
    Awaiting,
    Done,
}

/// Exit code observed for the process launched at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    pub index: usize,
    pub exit_code: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every launch succeeded and every process was awaited.
    Completed,
    /// The launch at `at_index` reported "not found". `abandoned` processes
    /// launched before it were left running without being awaited.
    CommandNotFound { at_index: usize, abandoned: usize },
}

/// Summary returned by [`BurstRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub launched: usize,
    /// In launch order.
    pub results: Vec<ProcessResult>,
    pub outcome: RunOutcome,
}

/// Launches `config.repetitions` client processes back to back, then awaits
/// each one in launch order, reporting its exit code.
///
/// There is no concurrency cap and no timeout: a client that never exits
/// blocks the await phase forever.
pub struct BurstRunner<L: Launcher, W: Write> {
    config: RunConfig,
    launcher: L,
    reporter: Reporter<W>,
    phase: Phase,
}

impl<L: Launcher, W: Write> BurstRunner<L, W> {
    pub fn new(config: RunConfig, launcher: L, out: W) -> Self {
        Self {
            config,
            launcher,
            reporter: Reporter::new(out),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub async fn run(&mut self) -> Result<RunReport> {
        info!(
            repetitions = self.config.repetitions,
            cmd = %self.config.command,
            "starting burst"
        );

        self.enter(Phase::Launching);
        let mut handles: Vec<L::Handle> = Vec::new();

        for index in 0..self.config.repetitions {
            match self.launcher.launch(&self.config.command) {
                Ok(handle) => {
                    debug!(index, pid = ?handle.id(), "launched");
                    handles.push(handle);
                    self.reporter.launched(index)?;
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    return self.abort_not_found(index, handles).await;
                }
                Err(source) => {
                    self.enter(Phase::Done);
                    return Err(BurstError::Launch { index, source });
                }
            }
        }

        let launched = handles.len();
        let results = self.await_all(handles).await?;
        self.enter(Phase::Done);

        info!(launched, "burst complete");
        Ok(RunReport {
            launched,
            results,
            outcome: RunOutcome::Completed,
        })
    }

    async fn abort_not_found(
        &mut self,
        at_index: usize,
        handles: Vec<L::Handle>,
    ) -> Result<RunReport> {
        let launched = handles.len();
        warn!(
            cmd = %self.config.command,
            at_index,
            launched,
            "client executable not found; aborting burst"
        );
        self.reporter.not_found(&self.config.command)?;

        if self.config.reap_on_abort {
            let results = self.await_all(handles).await?;
            self.enter(Phase::Done);
            return Ok(RunReport {
                launched,
                results,
                outcome: RunOutcome::CommandNotFound {
                    at_index,
                    abandoned: 0,
                },
            });
        }

        if launched > 0 {
            warn!(abandoned = launched, "leaving launched processes unsupervised");
        }
        // Dropping the handles does not kill the children.
        drop(handles);
        self.enter(Phase::Done);

        Ok(RunReport {
            launched,
            results: Vec::new(),
            outcome: RunOutcome::CommandNotFound {
                at_index,
                abandoned: launched,
            },
        })
    }

    /// Await handles strictly one at a time, in the order given.
    async fn await_all(&mut self, handles: Vec<L::Handle>) -> Result<Vec<ProcessResult>> {
        self.enter(Phase::Awaiting);
        let mut results = Vec::with_capacity(handles.len());

        for (index, mut handle) in handles.into_iter().enumerate() {
            let exit_code = handle
                .wait()
                .await
                .map_err(|source| BurstError::Wait { index, source })?;

            debug!(index, exit_code, "process exited");
            self.reporter.exited(&self.config.command, exit_code)?;
            results.push(ProcessResult { index, exit_code });
        }

        Ok(results)
    }

    fn enter(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "burst phase");
        self.phase = next;
    }
}
