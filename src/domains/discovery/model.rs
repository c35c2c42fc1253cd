//! Data model for the discovery domain.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum description length in capability summaries.
pub const SUMMARY_DESCRIPTION_LEN: usize = 80;

/// One documented operation of the upstream RiskModels API.
///
/// Capability records are semi-structured: a fixed set of required fields
/// plus an open map of additional fields (parameters, pricing, examples, ...)
/// preserved verbatim on detail lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    pub id: String,
    pub name: String,
    pub method: String,
    pub endpoint: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Projection of a capability for list views.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CapabilitySummary {
    pub id: String,
    pub name: String,
    pub method: String,
    pub endpoint: String,
    /// Truncated to [`SUMMARY_DESCRIPTION_LEN`] characters, no ellipsis.
    pub description: String,
}

impl From<&Capability> for CapabilitySummary {
    fn from(cap: &Capability) -> Self {
        Self {
            id: cap.id.clone(),
            name: cap.name.clone(),
            method: cap.method.clone(),
            endpoint: cap.endpoint.clone(),
            description: cap
                .description
                .chars()
                .take(SUMMARY_DESCRIPTION_LEN)
                .collect(),
        }
    }
}

/// The uniform response shape produced by the resolution engine.
///
/// A missing artifact is a data condition, not a fault: it travels as
/// `NotFound` and is rendered as a structured error payload, never raised
/// across the protocol boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// A JSON payload, served as `application/json`.
    Json(String),
    /// A YAML payload, served as `application/yaml`.
    Yaml(String),
    /// A structured not-found condition, optionally carrying the enumerable
    /// set of valid keys.
    NotFound {
        error: String,
        available: Option<Vec<String>>,
    },
}

impl Envelope {
    /// Build a `Json` envelope from a serializable value, pretty-printed.
    pub fn json(value: &impl Serialize) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::Json(text),
            // Serialization of in-memory JSON values cannot fail in practice;
            // degrade to a structured error rather than panic if it does.
            Err(e) => Self::NotFound {
                error: format!("Serialization failed: {e}"),
                available: None,
            },
        }
    }

    /// Build a `NotFound` envelope.
    pub fn not_found(error: impl Into<String>, available: Option<Vec<String>>) -> Self {
        Self::NotFound {
            error: error.into(),
            available,
        }
    }

    /// Whether this envelope is a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The MIME type of the rendered payload.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Yaml(_) => "application/yaml",
            Self::Json(_) | Self::NotFound { .. } => "application/json",
        }
    }

    /// Render the envelope body as text. `NotFound` renders as a JSON
    /// object `{"error": ..., "available": [...]}`.
    pub fn into_text(self) -> String {
        match self {
            Self::Json(text) | Self::Yaml(text) => text,
            Self::NotFound { error, available } => {
                let mut body = serde_json::Map::new();
                body.insert("error".into(), serde_json::Value::String(error));
                if let Some(available) = available {
                    body.insert(
                        "available".into(),
                        serde_json::Value::Array(
                            available.into_iter().map(serde_json::Value::String).collect(),
                        ),
                    );
                }
                serde_json::Value::Object(body).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capability(description: &str) -> Capability {
        serde_json::from_value(serde_json::json!({
            "id": "ticker-returns",
            "name": "Ticker Returns",
            "method": "GET",
            "endpoint": "/api/ticker-returns",
            "description": description,
            "pricing": {"per_call_usd": 0.01},
        }))
        .unwrap()
    }

    #[test]
    fn test_capability_preserves_extra_fields() {
        let cap = capability("Daily returns");
        assert_eq!(cap.extra["pricing"]["per_call_usd"], 0.01);

        let round = serde_json::to_value(&cap).unwrap();
        assert_eq!(round["pricing"]["per_call_usd"], 0.01);
        assert_eq!(round["id"], "ticker-returns");
    }

    #[test]
    fn test_summary_truncates_long_description() {
        let cap = capability(&"A".repeat(100));
        let summary = CapabilitySummary::from(&cap);
        assert_eq!(summary.description.chars().count(), 80);
        assert_eq!(summary.description, "A".repeat(80));
    }

    #[test]
    fn test_summary_keeps_short_description() {
        let cap = capability("short");
        let summary = CapabilitySummary::from(&cap);
        assert_eq!(summary.description, "short");
    }

    #[test]
    fn test_not_found_rendering() {
        let envelope = Envelope::not_found(
            "Unknown capability: nope",
            Some(vec!["ticker-returns".to_string()]),
        );
        assert_eq!(envelope.mime_type(), "application/json");
        let body: serde_json::Value = serde_json::from_str(&envelope.into_text()).unwrap();
        assert_eq!(body["error"], "Unknown capability: nope");
        assert_eq!(body["available"][0], "ticker-returns");
    }

    #[test]
    fn test_not_found_without_available_omits_field() {
        let body: serde_json::Value =
            serde_json::from_str(&Envelope::not_found("gone", None).into_text()).unwrap();
        assert!(body.get("available").is_none());
    }

    #[test]
    fn test_yaml_mime_type() {
        let envelope = Envelope::Yaml("info: {}".to_string());
        assert_eq!(envelope.mime_type(), "application/yaml");
    }
}
