//! Map submission.
//!
//! A `Submitter` sends one map's calldata to the `register_map` entry
//! point. `ControllerCli` shells out to the `controller` wallet CLI;
//! `DryRun` only records what would have been sent. `register_all`
//! encodes a whole batch up front and then submits one map at a time,
//! stopping at the first failure: a registration that went through cannot
//! be rolled back, so nothing later in the batch is attempted.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::board::MapDefinition;
use crate::codec::calldata::Calldata;
use crate::config::SubmitConfig;
use crate::pipeline::{encode_map, MapError};

/// Name of the remote entry point.
pub const ENTRY_POINT: &str = "register_map";

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Errors reported by a submitter.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("submission exited with {status}: {stderr}")]
    Rejected { status: ExitStatus, stderr: String },

    #[error("submission timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed waiting for submission: {0}")]
    Wait(#[source] std::io::Error),
}

/// Sends encoded maps to the remote registry.
pub trait Submitter {
    /// Registers one map. Returns the submitter's report on success.
    fn submit(&mut self, name: &str, calldata: &Calldata) -> Result<String, SubmitError>;
}

/// Submits through `controller execute`.
#[derive(Debug, Clone)]
pub struct ControllerCli {
    config: SubmitConfig,
}

impl ControllerCli {
    pub fn new(config: SubmitConfig) -> Self {
        ControllerCli { config }
    }

    /// Arguments passed to the controller binary.
    pub fn args(&self, calldata: &Calldata) -> Vec<String> {
        vec![
            "execute".to_string(),
            "--rpc-url".to_string(),
            self.config.rpc_url.clone(),
            self.config.contract.clone(),
            ENTRY_POINT.to_string(),
            calldata.join(","),
        ]
    }
}

/// Drains a child pipe on a background thread.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut text = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut text);
        }
        text
    })
}

/// Waits for `child` up to `timeout`, killing it on expiry.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<ExitStatus, SubmitError> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait().map_err(SubmitError::Wait)? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(SubmitError::Timeout(timeout));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

impl Submitter for ControllerCli {
    fn submit(&mut self, name: &str, calldata: &Calldata) -> Result<String, SubmitError> {
        let program = &self.config.controller;
        debug!(map = name, program = %program, "spawning controller");
        let mut child = Command::new(program)
            .args(self.args(calldata))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SubmitError::Spawn {
                program: program.clone(),
                source,
            })?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());
        let status = wait_with_timeout(&mut child, self.config.timeout())?;
        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        if status.success() {
            Ok(stdout.trim().to_string())
        } else {
            Err(SubmitError::Rejected {
                status,
                stderr: stderr.trim().to_string(),
            })
        }
    }
}

/// Records submissions without sending anything.
#[derive(Debug, Default)]
pub struct DryRun {
    pub submitted: Vec<(String, Calldata)>,
}

impl Submitter for DryRun {
    fn submit(&mut self, name: &str, calldata: &Calldata) -> Result<String, SubmitError> {
        self.submitted.push((name.to_string(), calldata.clone()));
        Ok(format!("dry run: {} calldata tokens", calldata.len()))
    }
}

/// Why a batch stopped.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("map '{map}' could not be encoded: {source}")]
    Encode {
        map: String,
        #[source]
        source: MapError,
    },

    #[error("map '{map}' failed to register after {registered} succeeded: {source}")]
    Submit {
        map: String,
        registered: usize,
        #[source]
        source: SubmitError,
    },
}

/// Outcome of one successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub map: String,
    pub report: String,
}

/// Encodes every map, then submits them in order, halting on the first failure.
///
/// No map is submitted unless the whole batch encodes cleanly.
pub fn register_all<S: Submitter>(
    maps: &[MapDefinition],
    submitter: &mut S,
) -> Result<Vec<Registered>, BatchError> {
    let mut encoded = Vec::with_capacity(maps.len());
    for map in maps {
        let calldata = encode_map(map).map_err(|source| BatchError::Encode {
            map: map.name.clone(),
            source,
        })?;
        encoded.push((map.name.as_str(), calldata));
    }

    let mut registered = Vec::with_capacity(encoded.len());
    for (name, calldata) in &encoded {
        info!(map = *name, tokens = calldata.len(), "registering map");
        match submitter.submit(name, calldata) {
            Ok(report) => {
                info!(map = *name, report = %report, "registered map");
                registered.push(Registered {
                    map: name.to_string(),
                    report,
                });
            }
            Err(source) => {
                error!(map = *name, error = %source, "registration failed, stopping");
                return Err(BatchError::Submit {
                    map: name.to_string(),
                    registered: registered.len(),
                    source,
                });
            }
        }
    }
    Ok(registered)
}
