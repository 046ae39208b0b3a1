//! Form definition: an ordered field list bound to an Airtable table.

use serde::Serialize;

use crate::field::Field;

/// A form definition snapshot.
///
/// Identity, slug uniqueness, and the Airtable binding are owned by the
/// persistence boundary; the engine only reads the field list. All
/// top-level members other than `fields` are optional because the
/// authoring flow validates candidate field lists before a form record
/// exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// URL-friendly identifier the public form is served under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    pub fields: Vec<Field>,
}
