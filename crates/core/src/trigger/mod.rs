//! One-shot deferred build.
//!
//! Registration may finish on another thread. [`deferred`] hands out a
//! [`ReadySignal`] for the registering side and a [`DeferredBuild`] that
//! blocks until the plugin is marked ready, then runs the pipeline once.

use crate::build::{AssemblyPipeline, BuildArtifact, Toolchain};
use crate::error::{Error, Result};
use crate::types::Plugin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use tracing::debug;

/// Shared cancellation flag of one deferred build
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the call that actually cancelled
    pub fn cancel(&self) -> bool {
        let first = !self.0.swap(true, Ordering::SeqCst);
        if first {
            debug!("Deferred build cancelled");
        }
        first
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Registering side of the handshake
#[derive(Debug)]
pub struct ReadySignal {
    sender: SyncSender<Plugin>,
    handle: CancelHandle,
}

/// Building side of the handshake
#[derive(Debug)]
pub struct DeferredBuild {
    receiver: Receiver<Plugin>,
    handle: CancelHandle,
}

pub fn deferred() -> (ReadySignal, DeferredBuild) {
    let (sender, receiver) = sync_channel(1);
    let handle = CancelHandle::new();
    (
        ReadySignal {
            sender,
            handle: handle.clone(),
        },
        DeferredBuild { receiver, handle },
    )
}

impl ReadySignal {
    /// Hand the finished plugin to the waiting build.
    ///
    /// Fails with [`Error::TriggerCancelled`] when the building side is gone.
    pub fn ready(self, mut plugin: Plugin) -> Result<()> {
        plugin.attach_schedule(self.handle.clone());
        self.sender
            .send(plugin)
            .map_err(|_| Error::TriggerCancelled)
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.handle.clone()
    }
}

impl DeferredBuild {
    pub fn cancel_handle(&self) -> CancelHandle {
        self.handle.clone()
    }

    /// Block until the plugin is ready, then build it
    pub fn wait<T: Toolchain>(self, pipeline: &AssemblyPipeline<T>) -> Result<BuildArtifact> {
        if self.handle.is_cancelled() {
            return Err(Error::TriggerCancelled);
        }
        let plugin = self
            .receiver
            .recv()
            .map_err(|_| Error::RegistrationAbandoned)?;
        if self.handle.is_cancelled() {
            return Err(Error::TriggerCancelled);
        }
        pipeline.run(plugin)
    }
}
