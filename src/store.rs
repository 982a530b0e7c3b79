//! Dual-keyed identity store.
//!
//! Leads carry two independent candidate keys, so the store keeps two
//! index maps (`id -> slot key`, `email -> slot key`) in front of one slot
//! map. Bindings are only ever overwritten, never removed: a superseded
//! id or email value keeps pointing at its last owning slot until another
//! lead claims it. Slot "merging" is the emergent effect of an update
//! stealing a binding from another slot, not an explicit operation.

use std::collections::HashMap;

use crate::lead::Lead;

/// One canonical storage slot: a permanent key plus the current lead.
///
/// The key is the `id` of the first lead ever stored in the slot and never
/// changes, even when a later update overwrites the lead's `id` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLead {
    key: String,
    lead: Lead,
}

impl StoredLead {
    /// The slot's permanent key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The slot's current (most recently accepted) lead.
    #[must_use]
    pub fn lead(&self) -> &Lead {
        &self.lead
    }
}

/// In-memory index mapping both candidate keys to canonical slots.
///
/// All operations are total. The store is owned by a single deduplication
/// run; nothing here is shared or synchronized.
#[derive(Debug, Default)]
pub struct LeadStore {
    slots: HashMap<String, StoredLead>,
    keys_by_id: HashMap<String, String>,
    keys_by_email: HashMap<String, String>,
}

impl LeadStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the slot an incoming lead resolves to, if any.
    ///
    /// The `id` binding takes priority; the `email` binding is the
    /// fallback. When both keys are bound to *different* slots, id priority
    /// is the tie-break that decides which slot absorbs the update.
    #[must_use]
    pub fn lookup(&self, lead: &Lead) -> Option<&StoredLead> {
        self.slot_for(&self.keys_by_id, &lead.id)
            .or_else(|| self.slot_for(&self.keys_by_email, &lead.email))
    }

    fn slot_for(&self, index: &HashMap<String, String>, value: &str) -> Option<&StoredLead> {
        index.get(value).and_then(|key| self.slots.get(key))
    }

    /// Creates a new slot for a lead neither of whose keys is bound.
    ///
    /// The lead's `id` becomes the slot's permanent key.
    pub fn insert_new(&mut self, lead: Lead) {
        let key = lead.id.clone();
        self.save(key, lead);
    }

    /// Replaces the current lead of the slot identified by `key`.
    ///
    /// Rebinds the new lead's `id` and `email` to this slot, overwriting
    /// whatever those values were bound to before — which is how two
    /// previously distinct slots end up merged. The losing slot is left in
    /// place and still counts as occupied.
    pub fn update(&mut self, key: String, lead: Lead) {
        self.save(key, lead);
    }

    fn save(&mut self, key: String, lead: Lead) {
        self.keys_by_id.insert(lead.id.clone(), key.clone());
        self.keys_by_email.insert(lead.email.clone(), key.clone());
        self.slots.insert(key.clone(), StoredLead { key, lead });
    }

    /// Number of occupied slots, shadowed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drains the store into each slot's current lead, in no particular
    /// order.
    #[must_use]
    pub fn into_leads(self) -> Vec<Lead> {
        self.slots.into_values().map(|slot| slot.lead).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn lead(id: &str, email: &str) -> Lead {
        Lead::new(id, email, ts("2014-05-07T17:30:20+00:00"))
    }

    #[test]
    fn empty_store_resolves_nothing() {
        let store = LeadStore::new();
        assert!(store.lookup(&lead("1", "a@x.com")).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn insert_binds_both_keys() {
        let mut store = LeadStore::new();
        store.insert_new(lead("1", "a@x.com"));

        let by_id = store.lookup(&lead("1", "other@x.com")).unwrap();
        assert_eq!(by_id.key(), "1");

        let by_email = store.lookup(&lead("999", "a@x.com")).unwrap();
        assert_eq!(by_email.key(), "1");

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn id_binding_takes_priority_over_email() {
        let mut store = LeadStore::new();
        store.insert_new(lead("1", "a@x.com"));
        store.insert_new(lead("2", "b@x.com"));

        // id resolves to slot 1, email to slot 2; id wins.
        let found = store.lookup(&lead("1", "b@x.com")).unwrap();
        assert_eq!(found.key(), "1");
    }

    #[test]
    fn slot_key_survives_id_overwrite() {
        let mut store = LeadStore::new();
        store.insert_new(lead("1", "a@x.com"));

        // Update found via email rewrites the id field; the slot key stays.
        store.update("1".to_string(), lead("2", "a@x.com"));

        let found = store.lookup(&lead("2", "z@z.com")).unwrap();
        assert_eq!(found.key(), "1");
        assert_eq!(found.lead().id, "2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stale_key_still_points_at_last_owning_slot() {
        let mut store = LeadStore::new();
        store.insert_new(lead("1", "a@x.com"));
        store.update("1".to_string(), lead("1", "b@x.com"));

        // a@x.com no longer matches slot 1's current lead but remains bound.
        let found = store.lookup(&lead("999", "a@x.com")).unwrap();
        assert_eq!(found.key(), "1");
        assert_eq!(found.lead().email, "b@x.com");
    }

    #[test]
    fn update_steals_email_binding_from_another_slot() {
        let mut store = LeadStore::new();
        store.insert_new(lead("1", "a@x.com"));
        store.insert_new(lead("2", "b@x.com"));

        // Found via id 1; its new email b@x.com was bound to slot 2.
        store.update("1".to_string(), lead("1", "b@x.com"));

        let found = store.lookup(&lead("999", "b@x.com")).unwrap();
        assert_eq!(found.key(), "1");

        // Slot 2 is shadowed on email but still occupied and id-reachable.
        assert_eq!(store.len(), 2);
        let slot2 = store.lookup(&lead("2", "z@z.com")).unwrap();
        assert_eq!(slot2.key(), "2");
    }

    #[test]
    fn into_leads_yields_one_lead_per_slot() {
        let mut store = LeadStore::new();
        store.insert_new(lead("1", "a@x.com"));
        store.insert_new(lead("2", "b@x.com"));
        store.update("1".to_string(), lead("1", "c@x.com"));

        let mut ids: Vec<String> = store.into_leads().into_iter().map(|l| l.id).collect();
        ids.sort();
        assert_eq!(ids, ["1", "2"]);
    }
}
