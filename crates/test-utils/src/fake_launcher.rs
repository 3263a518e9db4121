use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use procburst::config::CommandDescriptor;
use procburst::exec::{Launcher, ProcessHandle, WaitFuture};

/// What the fake launcher does for one launch attempt.
#[derive(Debug, Clone)]
pub enum Step {
    /// Launch succeeds; the process "exits" with `code` after `delay`.
    Exit { code: i32, delay: Duration },
    /// Launch fails with the given error kind.
    Fail(io::ErrorKind),
}

impl Step {
    pub fn exit(code: i32) -> Self {
        Step::Exit {
            code,
            delay: Duration::ZERO,
        }
    }

    pub fn exit_after(code: i32, millis: u64) -> Self {
        Step::Exit {
            code,
            delay: Duration::from_millis(millis),
        }
    }
}

/// Launch/wait events in the order the runner issued them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Launched(usize),
    WaitStarted(usize),
    WaitFinished(usize),
}

/// A launcher that:
/// - follows a script of [`Step`]s (repeating `fallback` once it runs out)
/// - records every launch and wait in a shared event log.
pub struct ScriptedLauncher {
    steps: Vec<Step>,
    fallback: Step,
    next: usize,
    events: Arc<Mutex<Vec<Event>>>,
    commands: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLauncher {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            fallback: Step::exit(0),
            next: 0,
            events: Arc::new(Mutex::new(Vec::new())),
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every launch exits immediately with code 0.
    pub fn always_ok() -> Self {
        Self::new(Vec::new())
    }

    pub fn events(&self) -> Arc<Mutex<Vec<Event>>> {
        Arc::clone(&self.events)
    }

    pub fn commands(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.commands)
    }
}

impl Launcher for ScriptedLauncher {
    type Handle = FakeProcess;

    fn launch(&mut self, command: &CommandDescriptor) -> io::Result<FakeProcess> {
        let index = self.next;
        self.next += 1;
        self.commands.lock().unwrap().push(command.program().to_string());

        let step = self.steps.get(index).unwrap_or(&self.fallback).clone();
        match step {
            Step::Fail(kind) => Err(io::Error::new(kind, "scripted launch failure")),
            Step::Exit { code, delay } => {
                self.events.lock().unwrap().push(Event::Launched(index));
                Ok(FakeProcess {
                    index,
                    code,
                    delay,
                    exit_code: None,
                    events: Arc::clone(&self.events),
                })
            }
        }
    }
}

pub struct FakeProcess {
    index: usize,
    code: i32,
    delay: Duration,
    exit_code: Option<i32>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl ProcessHandle for FakeProcess {
    fn wait(&mut self) -> WaitFuture<'_> {
        Box::pin(async move {
            self.events.lock().unwrap().push(Event::WaitStarted(self.index));
            tokio::time::sleep(self.delay).await;
            self.events.lock().unwrap().push(Event::WaitFinished(self.index));
            self.exit_code = Some(self.code);
            Ok(self.code)
        })
    }

    fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }
}
