//! Display attributes for tools appended past the static catalog.
//!
//! A [`ToolGenerator`] only supplies name, description and icon. Numeric
//! stats come from [`crate::economy::unlock::next_tool_stats`].

pub mod growth;
pub mod local;
pub mod remote;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::economy::unlock::{CatalogError, ToolCatalog};

pub const MAX_NAME_CHARS: usize = 30;
pub const MAX_DESCRIPTION_CHARS: usize = 60;
pub const MAX_ICON_CHARS: usize = 4;

/// Display fields of an existing tool, sent so the generator can avoid
/// repeating a name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// Body of a generation request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub all_tools: Vec<ToolSummary>,
    /// Catalog index the new tool will occupy.
    pub tool_index: usize,
}

impl GenerationRequest {
    pub fn for_catalog(catalog: &ToolCatalog) -> Self {
        Self {
            all_tools: catalog
                .iter()
                .map(|t| ToolSummary {
                    name: t.name.clone(),
                    description: t.description.clone(),
                    icon: t.icon.clone(),
                })
                .collect(),
            tool_index: catalog.len(),
        }
    }

    pub fn is_name_taken(&self, name: &str) -> bool {
        self.all_tools.iter().any(|t| t.name == name)
    }
}

/// Validated display fields of a new tool.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedTool {
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// Where a generated tool came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolSource {
    Remote,
    /// The remote generator was unreachable and the local list was used.
    LocalFallback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Generated {
    pub tool: GeneratedTool,
    pub source: ToolSource,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generator unavailable: {0}")]
    Unavailable(String),
    #[error("generator returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generator response is malformed: {0}")]
    Malformed(String),
    #[error("generator response is missing `{0}`")]
    MissingField(&'static str),
    #[error("the catalog changed while generating")]
    Stale,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl GenerationError {
    /// Failures of the transport or the server rather than of the answer.
    /// Only these may fall back to local generation.
    pub fn is_transient(&self) -> bool {
        match self {
            GenerationError::Unavailable(_) => true,
            GenerationError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[async_trait(?Send)]
pub trait ToolGenerator {
    /// Short label for logs.
    fn label(&self) -> &'static str;

    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedTool, GenerationError>;
}

/// Tries `primary`; on a transient failure only, asks `fallback` instead.
/// Any other failure is returned as is.
pub async fn generate_with_fallback(
    primary: &dyn ToolGenerator,
    fallback: &dyn ToolGenerator,
    request: &GenerationRequest,
) -> Result<Generated, GenerationError> {
    match primary.generate(request).await {
        Ok(tool) => Ok(Generated {
            tool,
            source: ToolSource::Remote,
        }),
        Err(e) if e.is_transient() => {
            log::warn!("{} failed ({e}), using {}", primary.label(), fallback.label());
            let tool = fallback.generate(request).await?;
            Ok(Generated {
                tool,
                source: ToolSource::LocalFallback,
            })
        }
        Err(e) => Err(e),
    }
}

fn clip(s: &str, max: usize) -> String {
    s.trim().chars().take(max).collect()
}

fn required(body: &Value, field: &'static str, max: usize) -> Result<String, GenerationError> {
    match body.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(clip(s, max)),
        Some(Value::String(_)) | None | Some(Value::Null) => Err(GenerationError::MissingField(field)),
        Some(other) => Err(GenerationError::Malformed(format!("`{field}` is {other}"))),
    }
}

/// Parses a `{name, description, icon}` answer. Every field is required
/// and non-empty; overlong values are clipped.
pub fn parse_generated(body: &str) -> Result<GeneratedTool, GenerationError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| GenerationError::Malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(GenerationError::Malformed("expected a JSON object".into()));
    }
    Ok(GeneratedTool {
        name: required(&value, "name", MAX_NAME_CHARS)?,
        description: required(&value, "description", MAX_DESCRIPTION_CHARS)?,
        icon: required(&value, "icon", MAX_ICON_CHARS)?,
    })
}
