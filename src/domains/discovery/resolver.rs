//! Resolution engine for the four discovery query families.
//!
//! Each query is a pure function of its parameters and the injected
//! [`DiscoveryConfig`], producing an [`Envelope`]. The manifest family is
//! remote-preferred with a silent local fallback; everything else is
//! local-only against the artifact store.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::core::config::DiscoveryConfig;

use super::keys::normalize_schema_key;
use super::model::{Capability, CapabilitySummary, Envelope};
use super::store::{ArtifactStore, CAPABILITIES_FILE};

/// Well-known path of the remote manifest beneath the configured base URL.
pub const MANIFEST_WELL_KNOWN_PATH: &str = "/.well-known/agent-manifest.json";

/// Service identity advertised in the locally synthesized manifest.
const SERVICE_NAME: &str = "RiskModels";
const SERVICE_VERSION: &str = "2.0.0-agent";

/// Why a remote manifest fetch did not produce a body.
///
/// Callers never see these: every variant downgrades to the local fallback.
/// The type exists so the "one attempt, swallow everything" contract is an
/// explicit two-stage strategy instead of a catch-all.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No API base URL is configured; the remote path is disabled.
    #[error("no API base URL configured")]
    NotConfigured,

    /// Transport-level failure (connect, timeout, read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// The body was not valid JSON.
    #[error("malformed manifest body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The fixed-address query families a resource can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryQuery {
    /// Agent manifest (remote-preferred).
    Manifest,
    /// Raw capability collection.
    Capabilities,
    /// Schema index.
    SchemaIndex,
    /// OpenAPI document.
    OpenApi,
}

/// Resolves discovery queries against the store and the optional remote.
#[derive(Debug)]
pub struct DiscoveryResolver {
    store: ArtifactStore,
    api_base: Option<String>,
    fetch_timeout: Duration,
}

impl DiscoveryResolver {
    /// Create a resolver from the injected discovery configuration.
    pub fn new(config: DiscoveryConfig) -> Self {
        Self {
            store: ArtifactStore::new(config.data_dir),
            api_base: config.api_base,
            fetch_timeout: Duration::from_secs(config.fetch_timeout_secs),
        }
    }

    /// Dispatch a fixed-address query.
    pub async fn resolve(&self, query: DiscoveryQuery) -> Envelope {
        match query {
            DiscoveryQuery::Manifest => self.manifest().await,
            DiscoveryQuery::Capabilities => self.capabilities_document(),
            DiscoveryQuery::SchemaIndex => self.schema_index(),
            DiscoveryQuery::OpenApi => self.openapi(),
        }
    }

    // ------------------------------------------------------------------
    // Manifest (remote-preferred)
    // ------------------------------------------------------------------

    /// Resolve the agent manifest: one remote attempt, then local fallback.
    pub async fn manifest(&self) -> Envelope {
        match self.try_remote_manifest().await {
            Ok(body) => Envelope::Json(body),
            Err(RemoteError::NotConfigured) => self.local_manifest(),
            Err(e) => {
                debug!("Remote manifest unavailable, using local fallback: {e}");
                self.local_manifest()
            }
        }
    }

    /// Attempt the single remote fetch. On success returns the body verbatim
    /// (validated as JSON but not reserialized).
    async fn try_remote_manifest(&self) -> Result<String, RemoteError> {
        let base = self.api_base.as_deref().ok_or(RemoteError::NotConfigured)?;
        let url = format!("{}{MANIFEST_WELL_KNOWN_PATH}", base.trim_end_matches('/'));

        let client = reqwest::Client::builder()
            .timeout(self.fetch_timeout)
            .build()?;
        let response = client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str::<serde_json::Value>(&body)?;
        Ok(body)
    }

    /// Synthesize a manifest from the local capability collection.
    fn local_manifest(&self) -> Envelope {
        let capabilities = self.store.capabilities().unwrap_or_default();
        Envelope::json(&serde_json::json!({
            "service": {"name": SERVICE_NAME, "version": SERVICE_VERSION},
            "capabilities": capabilities,
            "_note": "Set RISKMODELS_API_BASE to fetch the live manifest.",
        }))
    }

    // ------------------------------------------------------------------
    // Capabilities (local-only)
    // ------------------------------------------------------------------

    /// The raw capability collection document.
    pub fn capabilities_document(&self) -> Envelope {
        match self.store.load_json(CAPABILITIES_FILE) {
            Some(value) => Envelope::json(&value),
            None => Envelope::not_found(format!("{CAPABILITIES_FILE} not found"), None),
        }
    }

    /// Capability summaries in stored order, descriptions truncated.
    pub fn capability_list(&self) -> Envelope {
        match self.store.capabilities() {
            Some(capabilities) => {
                let summaries: Vec<CapabilitySummary> =
                    capabilities.iter().map(CapabilitySummary::from).collect();
                Envelope::json(&summaries)
            }
            None => Envelope::not_found(format!("{CAPABILITIES_FILE} not found"), None),
        }
    }

    /// Full capability record by id. Matching is exact: a candidate
    /// differing only in case or whitespace is not found.
    pub fn capability_detail(&self, id: &str) -> Envelope {
        let Some(capabilities) = self.store.capabilities() else {
            return Envelope::not_found("Capabilities not loaded", None);
        };
        if let Some(capability) = capabilities.iter().find(|c| c.id == id) {
            return Envelope::json(capability);
        }
        Envelope::not_found(
            format!("Unknown capability: {id}"),
            Some(capabilities.into_iter().map(|c| c.id).collect()),
        )
    }

    /// The capability collection, for callers needing the records themselves.
    pub fn capabilities(&self) -> Option<Vec<Capability>> {
        self.store.capabilities()
    }

    // ------------------------------------------------------------------
    // Schemas (local-only)
    // ------------------------------------------------------------------

    /// The schema index document (`[]` when absent).
    pub fn schema_index(&self) -> Envelope {
        Envelope::json(&self.store.schema_index())
    }

    /// The schema index entries, for template enumeration.
    pub fn schema_paths(&self) -> Vec<String> {
        self.store.schema_index()
    }

    /// Schema document by raw identifier. Normalization tolerates a
    /// `/schemas/` prefix, a missing `.json` extension, and percent
    /// encoding; a miss carries the full index as the `available` hint.
    pub fn schema(&self, raw_key: &str) -> Envelope {
        let key = normalize_schema_key(raw_key);
        match self.store.load_schema(&key) {
            Some(schema) => Envelope::json(&schema),
            None => Envelope::not_found(
                format!("Schema not found: {key}"),
                Some(self.store.schema_index()),
            ),
        }
    }

    // ------------------------------------------------------------------
    // OpenAPI (local-only, format-flexible)
    // ------------------------------------------------------------------

    /// OpenAPI document: JSON preferred, then YAML, then a synthesized
    /// placeholder. No remote fetch for this family.
    pub fn openapi(&self) -> Envelope {
        if let Some(json) = self.store.load_json("openapi.json") {
            return Envelope::json(&json);
        }
        if let Some(yaml) = self.store.load_text("openapi.yaml") {
            return Envelope::Yaml(yaml);
        }
        Envelope::json(&serde_json::json!({
            "info": {"title": "RiskModels API"},
            "_note": "Add openapi.json or openapi.yaml to the data directory.",
        }))
    }
}
