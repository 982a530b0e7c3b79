//! The deduplication engine.
//!
//! A single terminating fold over the input batch: each incoming lead is
//! resolved against the identity store, judged by the recency policy, and
//! either inserted, applied as an update (with a field diff reported), or
//! dropped. Arrival order is semantically significant — it decides which
//! value wins on key collisions and which slot absorbs which.

use crate::diff::diff_leads;
use crate::lead::Lead;
use crate::report::UpdateReporter;
use crate::store::LeadStore;

/// Orchestrates one deduplication run over a batch of leads.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use leadsift::{Deduplicator, Lead, NullReporter};
///
/// let t = |s| DateTime::parse_from_rfc3339(s).unwrap();
/// let leads = vec![
///     Lead::new("1", "a@x.com", t("2014-05-07T17:30:20+00:00")),
///     Lead::new("1", "b@x.com", t("2014-05-07T17:32:20+00:00")),
/// ];
///
/// let mut dedup = Deduplicator::new(NullReporter);
/// let result = dedup.deduplicate(leads);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].email, "b@x.com");
/// ```
#[derive(Debug)]
pub struct Deduplicator<R: UpdateReporter> {
    reporter: R,
}

impl<R: UpdateReporter> Deduplicator<R> {
    /// Creates an engine that notifies `reporter`.
    #[must_use]
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Consumes the engine, handing back the reporter.
    #[must_use]
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Deduplicates a batch in strict arrival order.
    ///
    /// Returns every slot's current lead, sorted by `(entry_date, id)` as
    /// the deterministic presentation order. Total for well-formed leads;
    /// there is nothing to recover from.
    pub fn deduplicate(&mut self, leads: Vec<Lead>) -> Vec<Lead> {
        let mut store = LeadStore::new();
        for lead in leads {
            self.process(&mut store, lead);
        }

        let mut result = store.into_leads();
        result.sort_by(|a, b| {
            a.entry_date
                .cmp(&b.entry_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        result
    }

    fn process(&mut self, store: &mut LeadStore, lead: Lead) {
        match store.lookup(&lead) {
            None => {
                self.reporter.lead_added(&lead);
                store.insert_new(lead);
            }
            Some(existing) => {
                // Recency policy: strictly-older loses, equal-or-newer wins.
                if lead.entry_date < existing.lead().entry_date {
                    self.reporter.lead_ignored(&lead);
                    return;
                }

                let key = existing.key().to_owned();
                let change = diff_leads(existing.lead(), &lead);
                self.reporter.lead_changed(&change);
                store.update(key, lead);
            }
        }
    }
}
