//! Change notification capability.
//!
//! The engine announces what it did with every incoming lead through
//! [`UpdateReporter`]. Callbacks are synchronous, order-preserving, and
//! infallible: implementations must not abort processing.

use crate::diff::LeadChange;
use crate::lead::Lead;

/// Consumer of deduplication notifications.
///
/// Invoked once per incoming lead, in arrival order, at the moment the
/// engine decides the lead's fate.
pub trait UpdateReporter {
    /// A lead claimed a fresh slot.
    fn lead_added(&mut self, lead: &Lead);

    /// A lead replaced a stored one; `change` carries the field-level diff.
    fn lead_changed(&mut self, change: &LeadChange);

    /// A lead lost to a newer stored entry and was dropped.
    fn lead_ignored(&mut self, lead: &Lead);
}

/// Prints a human-readable change report to standard out.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl UpdateReporter for ConsoleReporter {
    fn lead_added(&mut self, lead: &Lead) {
        println!("Lead {}/{} was added", lead.id, lead.email);
    }

    fn lead_changed(&mut self, change: &LeadChange) {
        println!(
            "Lead {}/{} was updated",
            change.original_id, change.original_email
        );
        for diff in &change.field_diffs {
            println!(
                "    field '{}' changed from '{}' to '{}'",
                diff.field, diff.old, diff.new
            );
        }
    }

    fn lead_ignored(&mut self, lead: &Lead) {
        println!(
            "Lead update for {}/{} was ignored due to a newer entry",
            lead.id, lead.email
        );
    }
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl UpdateReporter for NullReporter {
    fn lead_added(&mut self, _lead: &Lead) {}
    fn lead_changed(&mut self, _change: &LeadChange) {}
    fn lead_ignored(&mut self, _lead: &Lead) {}
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
    /// `lead_added` fired.
    Added(Lead),
    /// `lead_changed` fired.
    Changed(LeadChange),
    /// `lead_ignored` fired.
    Ignored(Lead),
}

/// Collects notifications into an ordered event log.
///
/// This is the collect-instead-of-callback rendition of the reporter
/// contract, and doubles as the test double for notification-order
/// assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Vec<UpdateEvent>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in emission order.
    #[must_use]
    pub fn events(&self) -> &[UpdateEvent] {
        &self.events
    }

    /// Consumes the recorder, returning the event log.
    #[must_use]
    pub fn into_events(self) -> Vec<UpdateEvent> {
        self.events
    }
}

impl UpdateReporter for RecordingReporter {
    fn lead_added(&mut self, lead: &Lead) {
        self.events.push(UpdateEvent::Added(lead.clone()));
    }

    fn lead_changed(&mut self, change: &LeadChange) {
        self.events.push(UpdateEvent::Changed(change.clone()));
    }

    fn lead_ignored(&mut self, lead: &Lead) {
        self.events.push(UpdateEvent::Ignored(lead.clone()));
    }
}
