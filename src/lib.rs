//! # leadsift
//!
//! Batch deduplication for lead records identified by two independent
//! candidate keys (an id and an email address), where later records in
//! arrival order may supersede earlier ones under either key.
//!
//! ## Core concepts
//!
//! - **Lead**: an immutable record with an `id`, an `email`, and an entry
//!   timestamp that drives the recency policy.
//! - **Slot**: the canonical storage location for one logical identity,
//!   keyed permanently by its first-seen id.
//! - **Recency policy**: an incoming lead replaces a stored one unless it
//!   is strictly older; ties favor the incoming lead.
//! - **Merge**: the emergent effect of an update rebinding a candidate key
//!   away from one slot toward another, without deleting the losing slot.
//!
//! ## Usage
//!
//! ```
//! use chrono::DateTime;
//! use leadsift::{Deduplicator, Lead, RecordingReporter, UpdateEvent};
//!
//! let t = |s| DateTime::parse_from_rfc3339(s).unwrap();
//! let leads = vec![
//!     Lead::new("1", "a@x.com", t("2014-05-07T17:30:20+00:00")),
//!     Lead::new("2", "b@x.com", t("2014-05-07T17:31:20+00:00")),
//!     Lead::new("1", "a@x.com", t("2014-05-07T17:32:20+00:00")),
//! ];
//!
//! let mut dedup = Deduplicator::new(RecordingReporter::new());
//! let result = dedup.deduplicate(leads);
//! assert_eq!(result.len(), 2);
//!
//! let events = dedup.into_reporter().into_events();
//! assert!(matches!(events[2], UpdateEvent::Changed(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dedupe;
pub mod diff;
pub mod error;
pub mod io;
pub mod lead;
pub mod report;
pub mod store;

// Re-export primary types at crate root for convenience
pub use dedupe::Deduplicator;
pub use diff::{diff_leads, FieldDiff, LeadChange};
pub use error::{SiftError, SiftResult};
pub use lead::{FieldAccessor, FieldValue, Lead, LeadBatch};
pub use report::{
    ConsoleReporter, NullReporter, RecordingReporter, UpdateEvent, UpdateReporter,
};
pub use store::{LeadStore, StoredLead};
