//! Field model: one question in a form, mapped to an Airtable column.

use serde::Serialize;

use crate::condition::Condition;

/// Input type of a form field.
///
/// Select types carry an `options` list. Attachment fields are
/// validated for presence by the caller, which substitutes a truthy
/// placeholder value into the answer set when a file was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    ShortText,
    LongText,
    SingleSelect,
    MultiSelect,
    Attachment,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::ShortText => "short_text",
            FieldType::LongText => "long_text",
            FieldType::SingleSelect => "single_select",
            FieldType::MultiSelect => "multi_select",
            FieldType::Attachment => "attachment",
        }
    }

    pub fn parse(s: &str) -> Option<FieldType> {
        match s {
            "short_text" => Some(FieldType::ShortText),
            "long_text" => Some(FieldType::LongText),
            "single_select" => Some(FieldType::SingleSelect),
            "multi_select" => Some(FieldType::MultiSelect),
            "attachment" => Some(FieldType::Attachment),
            _ => None,
        }
    }
}

/// How a select field is rendered by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderAs {
    Dropdown,
    Radios,
    Checkboxes,
}

impl Default for RenderAs {
    fn default() -> Self {
        RenderAs::Dropdown
    }
}

impl RenderAs {
    pub fn parse(s: &str) -> Option<RenderAs> {
        match s {
            "dropdown" => Some(RenderAs::Dropdown),
            "radios" => Some(RenderAs::Radios),
            "checkboxes" => Some(RenderAs::Checkboxes),
            _ => None,
        }
    }
}

/// One question in a form. Owned by its form; field ids are unique
/// within a form and referenced by visibility rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    /// Airtable column this field writes to, when bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airtable_field_id: Option<String>,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub options: Vec<String>,
    pub render_as: RenderAs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_if: Option<Condition>,
}

impl Field {
    /// Name used in validation messages: the label, or the id when the
    /// label is empty.
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}
