//! JSON-LD structured data documents (schema.org).
//!
//! Each supported schema is a strict record; a document pairs one of them
//! with its `@context`. Serialized output always starts with `@context`
//! followed by the `@type` discriminant:
//!
//! ```json
//! {
//!   "@context": "https://schema.org",
//!   "@type": "Person",
//!   "name": "Alice Johnson"
//! }
//! ```
//!
//! Optional fields are omitted when absent, never written as empty strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Error)]
pub enum StructuredDataError {
    #[error("structured data is missing `@context`")]
    MissingContext,

    #[error("unsupported `@context` '{0}', expected https://schema.org")]
    UnsupportedContext(String),

    #[error("structured data is missing `@type`")]
    MissingType,

    #[error("invalid structured data")]
    Invalid(#[from] serde_json::Error),
}

// ============================================================================
// Schemas
// ============================================================================

/// Supported schema.org types, discriminated by `@type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum Schema {
    Person(Person),
    Organization(Organization),
    WebSite(WebSite),
    BreadcrumbList(BreadcrumbList),
}

impl Schema {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Person(_) => "Person",
            Self::Organization(_) => "Organization",
            Self::WebSite(_) => "WebSite",
            Self::BreadcrumbList(_) => "BreadcrumbList",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub works_for: Option<TypedName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub knows_about: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_action: Option<SearchAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    pub item_list_element: Vec<ListItem>,
}

/// Nested entity reference such as `{"@type": "Organization", "name": "…"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedName {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: String,
    pub address_locality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: String,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: String,
    pub position: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

// ============================================================================
// Document
// ============================================================================

/// A complete JSON-LD document: `@context` plus one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredDataDocument {
    context: String,
    schema: Schema,
}

#[derive(Serialize)]
struct Tagged<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(flatten)]
    schema: &'a Schema,
}

impl Serialize for StructuredDataDocument {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Tagged {
            context: &self.context,
            schema: &self.schema,
        }
        .serialize(serializer)
    }
}

impl From<Schema> for StructuredDataDocument {
    fn from(schema: Schema) -> Self {
        Self::new(schema)
    }
}

impl StructuredDataDocument {
    pub fn new(schema: Schema) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            schema,
        }
    }

    /// Build from an untyped JSON object, validating `@context` and `@type`.
    pub fn from_value(mut value: Value) -> Result<Self, StructuredDataError> {
        let obj = value.as_object_mut().ok_or(StructuredDataError::MissingType)?;

        let context = match obj.remove("@context") {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            _ => return Err(StructuredDataError::MissingContext),
        };
        if !matches!(
            context.trim_end_matches('/'),
            "https://schema.org" | "http://schema.org"
        ) {
            return Err(StructuredDataError::UnsupportedContext(context));
        }

        match obj.get("@type") {
            Some(Value::String(s)) if !s.trim().is_empty() => {}
            _ => return Err(StructuredDataError::MissingType),
        }

        let schema: Schema = serde_json::from_value(value)?;
        Ok(Self { context, schema })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, StructuredDataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Keep a value only when it carries text.
fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn present_all(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loose input for a `Person` document.
#[derive(Debug, Clone, Default)]
pub struct PersonInput<'a> {
    pub name: &'a str,
    pub url: Option<&'a str>,
    pub image: Option<&'a str>,
    pub job_title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
    pub email: Option<&'a str>,
    pub same_as: &'a [String],
    pub knows_about: &'a [String],
}

pub fn person(input: &PersonInput<'_>) -> StructuredDataDocument {
    Schema::Person(Person {
        name: input.name.to_string(),
        url: present(input.url),
        image: present(input.image),
        job_title: present(input.job_title),
        works_for: present(input.company).map(|name| TypedName {
            kind: "Organization".into(),
            name,
        }),
        address: present(input.location).map(|locality| PostalAddress {
            kind: "PostalAddress".into(),
            address_locality: locality,
        }),
        email: present(input.email),
        same_as: present_all(input.same_as),
        knows_about: present_all(input.knows_about),
    })
    .into()
}

/// Loose input for an `Organization` document.
#[derive(Debug, Clone, Default)]
pub struct OrganizationInput<'a> {
    pub name: &'a str,
    pub url: Option<&'a str>,
    pub logo: Option<&'a str>,
    pub description: Option<&'a str>,
    pub same_as: &'a [String],
}

pub fn organization(input: &OrganizationInput<'_>) -> StructuredDataDocument {
    Schema::Organization(Organization {
        name: input.name.to_string(),
        url: present(input.url),
        logo: present(input.logo),
        description: present(input.description),
        same_as: present_all(input.same_as),
    })
    .into()
}

/// Loose input for a `WebSite` document.
///
/// `search_url` is a URL template containing `{search_term_string}`.
#[derive(Debug, Clone, Default)]
pub struct WebSiteInput<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub description: Option<&'a str>,
    pub search_url: Option<&'a str>,
}

pub fn website(input: &WebSiteInput<'_>) -> StructuredDataDocument {
    Schema::WebSite(WebSite {
        name: input.name.to_string(),
        url: input.url.to_string(),
        description: present(input.description),
        potential_action: present(input.search_url).map(|target| SearchAction {
            kind: "SearchAction".into(),
            target,
            query_input: "required name=search_term_string".into(),
        }),
    })
    .into()
}

/// Breadcrumb trail from `(name, url)` pairs; positions start at 1.
pub fn breadcrumb_list(items: &[(&str, Option<&str>)]) -> StructuredDataDocument {
    let item_list_element = items
        .iter()
        .zip(1u32..)
        .map(|((name, url), position)| ListItem {
            kind: "ListItem".into(),
            position,
            name: (*name).to_string(),
            item: present(*url),
        })
        .collect();

    Schema::BreadcrumbList(BreadcrumbList { item_list_element }).into()
}
