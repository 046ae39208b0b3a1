//! Render schema generation for form-viewing clients.
//!
//! The public schema mirrors what the submission endpoint will
//! enforce: the field definitions, each field's visibility rule, and
//! the dependency graph a client needs to re-resolve visibility as
//! answers change. The Airtable base/table binding stays server-side.

use formlogic_core::{build_dependencies, Condition, DependencyGraph, FieldType, Form};
use serde::Serialize;

/// One field as exposed to a rendering client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airtable_field_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_if: Option<Condition>,
}

/// Public form schema served to the viewer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub fields: Vec<SchemaField>,
    pub dependencies: DependencyGraph,
}

/// Generate the render schema for a form.
///
/// With `include_logic` false the visibility rules and the dependency
/// graph are omitted, producing a flat preview of every field.
pub fn render_schema(form: &Form, include_logic: bool) -> RenderSchema {
    let fields = form
        .fields
        .iter()
        .map(|field| SchemaField {
            id: field.id.clone(),
            label: field.label.clone(),
            field_type: field.field_type,
            required: field.required,
            options: field.options.clone(),
            airtable_field_id: field.airtable_field_id.clone(),
            visible_if: if include_logic {
                field.visible_if.clone()
            } else {
                None
            },
        })
        .collect();

    RenderSchema {
        id: form.id.clone(),
        title: form.title.clone(),
        slug: form.slug.clone(),
        fields,
        dependencies: if include_logic {
            build_dependencies(&form.fields)
        } else {
            DependencyGraph::new()
        },
    }
}
