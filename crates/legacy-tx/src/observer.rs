use std::sync::Mutex;

use crate::tx::TxInput;
use crate::verify::FailureKind;

/// Receives per-input verification outcomes. The verifier logs nothing on its
/// own; whatever is reported goes through the observer handed to it.
pub trait VerifyObserver {
    fn input_verified(&self, _index: usize, _input: &TxInput) {}

    fn input_rejected(&self, _index: usize, _input: &TxInput, _kind: &FailureKind) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl VerifyObserver for NoopObserver {}

/// Emits `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl VerifyObserver for TracingObserver {
    fn input_verified(&self, index: usize, input: &TxInput) {
        tracing::debug!(
            input = index,
            script_sig = %hex::encode(&input.script_sig),
            "signature verified"
        );
    }

    fn input_rejected(&self, index: usize, input: &TxInput, kind: &FailureKind) {
        match kind {
            FailureKind::BadSignature => tracing::info!(
                input = index,
                script_sig = %hex::encode(&input.script_sig),
                "bad signature"
            ),
            FailureKind::Malformed(e) => tracing::info!(
                input = index,
                code = e.code.as_str(),
                reason = %e.msg,
                "malformed input"
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObservedEvent {
    Verified { input_id: usize },
    Rejected { input_id: usize, kind: FailureKind },
}

/// Keeps every event in order; handy for asserting how far verification got.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ObservedEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl VerifyObserver for RecordingObserver {
    fn input_verified(&self, index: usize, _input: &TxInput) {
        self.lock().push(ObservedEvent::Verified { input_id: index });
    }

    fn input_rejected(&self, index: usize, _input: &TxInput, kind: &FailureKind) {
        self.lock().push(ObservedEvent::Rejected {
            input_id: index,
            kind: kind.clone(),
        });
    }
}
