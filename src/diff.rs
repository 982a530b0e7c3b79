//! Field-level diffing between two versions of the same lead.
//!
//! The differ walks [`Lead::FIELDS`] and compares accessor outputs, so it
//! has no knowledge of any specific field. The result is a set of changed
//! fields; it is kept in field-table order purely so output is
//! deterministic.

use serde::Serialize;

use crate::lead::{FieldValue, Lead};

/// One changed field: its name and the old and new values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    /// Source-system field name (`id`, `email`, `firstName`, ...).
    pub field: &'static str,
    /// Value before the update.
    pub old: FieldValue,
    /// Value after the update.
    pub new: FieldValue,
}

/// The full change record emitted when an incoming lead replaces a stored
/// one.
///
/// `original_id` and `original_email` capture the slot's identity *before*
/// the update is applied, so reports can name the record that was
/// overwritten even when the update rewrites both candidate keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadChange {
    /// The overwritten lead's id.
    pub original_id: String,
    /// The overwritten lead's email.
    pub original_email: String,
    /// One entry per field whose value differs. Order-independent as a set;
    /// stored in field-table order.
    pub field_diffs: Vec<FieldDiff>,
}

impl LeadChange {
    /// Returns true if no field changed.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.field_diffs.is_empty()
    }

    /// Names of the changed fields, in field-table order.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        self.field_diffs.iter().map(|d| d.field).collect()
    }
}

/// Compares two versions of the same logical lead field by field.
///
/// Total over all field combinations: an absent optional field versus an
/// absent one is unchanged, absent versus present is a change. `old` and
/// `new` are any two leads; the function does not care how they relate
/// beyond treating `old` as the stored version.
#[must_use]
pub fn diff_leads(old: &Lead, new: &Lead) -> LeadChange {
    let field_diffs = Lead::FIELDS
        .iter()
        .filter_map(|&(field, accessor)| {
            let old_value = accessor(old);
            let new_value = accessor(new);
            (old_value != new_value).then_some(FieldDiff {
                field,
                old: old_value,
                new: new_value,
            })
        })
        .collect();

    LeadChange {
        original_id: old.id.clone(),
        original_email: old.email.clone(),
        field_diffs,
    }
}

// Manual Serialize impls keep the JSON shape flat and human-oriented
// (values rendered with Display) without forcing serde onto FieldValue.
impl Serialize for FieldDiff {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("FieldDiff", 3)?;
        s.serialize_field("field", self.field)?;
        s.serialize_field("old", &self.old.to_string())?;
        s.serialize_field("new", &self.new.to_string())?;
        s.end()
    }
}

impl Serialize for LeadChange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("LeadChange", 3)?;
        s.serialize_field("originalId", &self.original_id)?;
        s.serialize_field("originalEmail", &self.original_email)?;
        s.serialize_field("fieldDiffs", &self.field_diffs)?;
        s.end()
    }
}
