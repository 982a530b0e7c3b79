//! Lead record type and its field table.
//!
//! A [`Lead`] is the unit the whole crate operates on: an immutable value
//! with two independent candidate keys (`id` and `email`) and an entry
//! timestamp used by the recency policy. The static [`Lead::FIELDS`] table
//! is what keeps the differ generic over the record shape — it enumerates
//! every field as a `(name, accessor)` pair so nothing downstream has to
//! name fields individually.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single lead record as it arrives from the source system.
///
/// Equality is exact value equality on every field. Timestamps compare as
/// instants, so two `entry_date` values written with different UTC offsets
/// are equal when they name the same moment.
///
/// # Examples
///
/// ```
/// use leadsift::Lead;
/// use chrono::DateTime;
///
/// let when = DateTime::parse_from_rfc3339("2014-05-07T17:30:20+00:00").unwrap();
/// let lead = Lead::new("jkj238238jdsnfsj23", "foo@bar.com", when);
/// assert_eq!(lead.id, "jkj238238jdsnfsj23");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Identifier assigned by the source system. Stable-ish: later entries
    /// may overwrite it through an update under the email key.
    #[serde(rename = "_id")]
    pub id: String,

    /// Contact email. The second candidate key.
    pub email: String,

    /// Optional given name.
    #[serde(
        rename = "firstName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,

    /// Optional family name.
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Optional postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// When the entry was recorded at the source. Drives the recency policy
    /// and the final presentation order. The original UTC offset survives
    /// serialization round trips.
    #[serde(rename = "entryDate")]
    pub entry_date: DateTime<FixedOffset>,
}

/// Accessor signature used by the field table.
pub type FieldAccessor = fn(&Lead) -> FieldValue;

impl Lead {
    /// Every field of a lead as a `(name, accessor)` pair, in declaration
    /// order. `id` and `email` are included: an update that rewrites a
    /// candidate key is still a field change worth reporting.
    pub const FIELDS: &'static [(&'static str, FieldAccessor)] = &[
        ("id", |lead| FieldValue::Text(lead.id.clone())),
        ("email", |lead| FieldValue::Text(lead.email.clone())),
        ("firstName", |lead| FieldValue::from_opt(&lead.first_name)),
        ("lastName", |lead| FieldValue::from_opt(&lead.last_name)),
        ("address", |lead| FieldValue::from_opt(&lead.address)),
        ("entryDate", |lead| FieldValue::Timestamp(lead.entry_date)),
    ];

    /// Creates a lead with the required fields; optional fields start empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        entry_date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            address: None,
            entry_date,
        }
    }
}

/// The value of one lead field, viewed uniformly.
///
/// The field table needs a single value type across string, optional, and
/// timestamp fields; this enum is that type. An absent optional field is
/// [`FieldValue::Null`], and `Null == Null` (absent versus absent is not a
/// change).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A present string field.
    Text(String),
    /// The entry timestamp.
    Timestamp(DateTime<FixedOffset>),
    /// An absent optional field.
    Null,
}

impl FieldValue {
    fn from_opt(value: &Option<String>) -> Self {
        value.clone().map_or(Self::Null, Self::Text)
    }

    /// Returns true for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            Self::Null => write!(f, "(none)"),
        }
    }
}

/// The wire shape of a lead file: `{"leads": [...]}`.
///
/// Both the input collaborator and the output collaborator speak this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadBatch {
    /// Leads in arrival order. Order is semantically significant on input.
    pub leads: Vec<Lead>,
}

impl LeadBatch {
    /// Wraps a lead sequence.
    #[must_use]
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads }
    }

    /// Number of leads in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    /// Returns true if the batch holds no leads.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn serde_uses_source_field_names() {
        let json = r#"{
            "_id": "jkj238238jdsnfsj23",
            "email": "foo@bar.com",
            "firstName": "John",
            "lastName": "Smith",
            "address": "123 Street St",
            "entryDate": "2014-05-07T17:30:20+00:00"
        }"#;

        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.id, "jkj238238jdsnfsj23");
        assert_eq!(lead.email, "foo@bar.com");
        assert_eq!(lead.first_name.as_deref(), Some("John"));
        assert_eq!(lead.last_name.as_deref(), Some("Smith"));
        assert_eq!(lead.address.as_deref(), Some("123 Street St"));
        assert_eq!(lead.entry_date, ts("2014-05-07T17:30:20+00:00"));

        let back = serde_json::to_value(&lead).unwrap();
        assert_eq!(back["_id"], "jkj238238jdsnfsj23");
        assert_eq!(back["firstName"], "John");
        assert_eq!(back["entryDate"], "2014-05-07T17:30:20+00:00");
    }

    #[test]
    fn optional_fields_default_and_are_omitted() {
        let json = r#"{
            "_id": "1",
            "email": "a@x.com",
            "entryDate": "2014-05-07T17:30:20+00:00"
        }"#;

        let lead: Lead = serde_json::from_str(json).unwrap();
        assert!(lead.first_name.is_none());
        assert!(lead.address.is_none());

        let back = serde_json::to_value(&lead).unwrap();
        assert!(back.get("firstName").is_none());
        assert!(back.get("address").is_none());
    }

    #[test]
    fn entry_date_round_trips_with_offset() {
        let lead = Lead::new("1", "a@x.com", ts("2014-05-07T17:33:20+05:30"));
        let json = serde_json::to_string(&lead).unwrap();
        let back: Lead = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entry_date, lead.entry_date);
        assert_eq!(back.entry_date.offset(), lead.entry_date.offset());
    }

    #[test]
    fn timestamps_compare_as_instants() {
        let utc = ts("2014-05-07T17:30:20+00:00");
        let shifted = ts("2014-05-07T19:30:20+02:00");
        assert_eq!(utc, shifted);

        let later = ts("2014-05-07T17:30:21+00:00");
        assert!(utc < later);
    }

    #[test]
    fn field_table_covers_every_field() {
        let names: Vec<&str> = Lead::FIELDS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["id", "email", "firstName", "lastName", "address", "entryDate"]
        );
    }

    #[test]
    fn field_accessors_read_current_values() {
        let when = ts("2014-05-07T17:30:20+00:00");
        let mut lead = Lead::new("1", "a@x.com", when);
        lead.first_name = Some("John".to_string());

        let lookup = |name: &str| {
            Lead::FIELDS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, get)| get(&lead))
                .unwrap()
        };

        assert_eq!(lookup("id"), FieldValue::Text("1".to_string()));
        assert_eq!(lookup("firstName"), FieldValue::Text("John".to_string()));
        assert_eq!(lookup("lastName"), FieldValue::Null);
        assert_eq!(lookup("entryDate"), FieldValue::Timestamp(when));
    }

    #[test]
    fn field_value_display() {
        assert_eq!(FieldValue::Text("hi".to_string()).to_string(), "hi");
        assert_eq!(FieldValue::Null.to_string(), "(none)");
        assert!(FieldValue::Null.is_null());
        assert_eq!(
            FieldValue::Timestamp(ts("2014-05-07T17:30:20+00:00")).to_string(),
            "2014-05-07T17:30:20+00:00"
        );
    }
}
