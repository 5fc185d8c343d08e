//! Declarative description of a gateway endpoint.
//!
//! Every Slack route is a static [`Endpoint`]: where its input comes from,
//! which fields it accepts and how each one is forwarded, which Slack method
//! it calls and which part of the result it returns. The same records drive
//! request handling and the generated OpenAPI document.

/// Where an endpoint reads its input from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSource {
    /// Query string (GET).
    Query,
    /// JSON request body (POST).
    Body,
}

impl ParamSource {
    pub fn http_method(self) -> &'static str {
        match self {
            ParamSource::Query => "get",
            ParamSource::Body => "post",
        }
    }
}

/// How a single field is validated and forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Must be present and truthy; forwarded verbatim.
    Required,
    /// Forwarded only when truthy. Empty strings are dropped.
    Optional,
    /// Tri-state boolean: forwarded whenever present, `false` included.
    Flag,
    /// Integer parsed from its string form before forwarding.
    Integer,
    /// Base64 payload decoded into the uploaded file body.
    Binary,
}

/// One named input of an endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
    /// JSON schema type used in the OpenAPI document.
    pub schema_type: &'static str,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        let schema_type = match kind {
            FieldKind::Flag => "boolean",
            FieldKind::Integer => "integer",
            _ => "string",
        };
        Self {
            name,
            kind,
            description,
            schema_type,
        }
    }

    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Required, description)
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Optional, description)
    }

    pub const fn flag(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Flag, description)
    }

    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Integer, description)
    }

    pub const fn binary(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Binary, description)
    }

    pub const fn with_schema_type(mut self, schema_type: &'static str) -> Self {
        self.schema_type = schema_type;
        self
    }
}

/// At least one of `fields` must be present and truthy.
#[derive(Debug, Clone, Copy)]
pub struct AlternativeGroup {
    pub fields: &'static [&'static str],
    pub message: &'static str,
}

/// Shape of the `data` returned on success.
#[derive(Debug, Clone, Copy)]
pub enum Projection {
    /// Copy these keys from the Slack result when present.
    Fields(&'static [&'static str]),
    /// Ignore the result and return `{ "message": <text> }`.
    Confirmation(&'static str),
}

/// A single gateway route bound to one Slack Web API method.
#[derive(Debug)]
pub struct Endpoint {
    pub path: &'static str,
    pub source: ParamSource,
    pub slack_method: &'static str,
    pub summary: &'static str,
    pub tag: &'static str,
    pub fields: &'static [Field],
    /// Reported when any `Required` field is missing.
    pub missing_message: &'static str,
    pub alternatives: Option<AlternativeGroup>,
    pub projection: Projection,
}

impl Endpoint {
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Required)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: Endpoint = Endpoint {
        path: "/slack/sample",
        source: ParamSource::Body,
        slack_method: "sample.call",
        summary: "Sample",
        tag: "sample",
        fields: &[
            Field::required("channel", "Channel ID"),
            Field::optional("text", "Text"),
            Field::optional("blocks", "Blocks").with_schema_type("array"),
            Field::flag("as_user", "As user"),
        ],
        missing_message: "Missing required field: channel",
        alternatives: None,
        projection: Projection::Confirmation("ok"),
    };

    #[test]
    fn test_schema_type_follows_kind() {
        assert_eq!(Field::flag("a", "").schema_type, "boolean");
        assert_eq!(Field::integer("a", "").schema_type, "integer");
        assert_eq!(Field::binary("a", "").schema_type, "string");
    }

    #[test]
    fn test_with_schema_type_overrides_default() {
        assert_eq!(SAMPLE.field("blocks").unwrap().schema_type, "array");
    }

    #[test]
    fn test_required_fields_only_lists_required() {
        let names: Vec<_> = SAMPLE.required_fields().map(|f| f.name).collect();
        assert_eq!(names, vec!["channel"]);
    }

    #[test]
    fn test_http_method_for_source() {
        assert_eq!(ParamSource::Query.http_method(), "get");
        assert_eq!(ParamSource::Body.http_method(), "post");
    }
}
