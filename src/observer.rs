//! Diagnostic reporting for input and form state transitions.
//!
//! Observers are injected into stores and composers and are called after a
//! transition has been applied. They never influence behavior.

use std::sync::Arc;

use gpui::SharedString;

use crate::form::{FieldKey, FormRecord};

#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent {
    /// A field value was replaced.
    FieldChanged { key: FieldKey, value: SharedString },
    /// A validated field moved between `None`, `Some(true)` and `Some(false)`.
    ValidityChanged {
        key: FieldKey,
        previous: Option<bool>,
        valid: Option<bool>,
    },
    /// A form assembled its record and forwarded it to the consumer.
    Submitted { record: FormRecord },
    /// Submission was refused because some field is invalid.
    SubmitBlocked { invalid: Vec<FieldKey> },
    /// An uncontrolled input was read at submission time.
    UncontrolledRead { id: SharedString, value: SharedString },
}

pub trait FormObserver: Send + Sync {
    fn notify(&self, event: &FormEvent);
}

impl<F> FormObserver for F
where
    F: Fn(&FormEvent) + Send + Sync,
{
    fn notify(&self, event: &FormEvent) {
        (self)(event)
    }
}

pub type SharedObserver = Arc<dyn FormObserver>;

/// Emits every event through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl FormObserver for TracingObserver {
    fn notify(&self, event: &FormEvent) {
        match event {
            FormEvent::FieldChanged { key, value } => {
                tracing::debug!(field = %key, len = value.len(), "field changed");
            }
            FormEvent::ValidityChanged {
                key,
                previous,
                valid,
            } => {
                tracing::debug!(field = %key, ?previous, ?valid, "field validity changed");
            }
            FormEvent::Submitted { record } => {
                tracing::info!(%record, "form submitted");
            }
            FormEvent::SubmitBlocked { invalid } => {
                tracing::warn!(?invalid, "form submit blocked by invalid fields");
            }
            FormEvent::UncontrolledRead { id, value } => {
                tracing::info!(input = %id, %value, "uncontrolled input read");
            }
        }
    }
}

/// Fan-out list kept by stores and composers.
#[derive(Clone, Default)]
pub(crate) struct Observers {
    entries: Vec<SharedObserver>,
}

impl Observers {
    pub(crate) fn push(&mut self, observer: SharedObserver) {
        self.entries.push(observer);
    }

    pub(crate) fn emit(&self, event: &FormEvent) {
        for observer in &self.entries {
            observer.notify(event);
        }
    }
}
