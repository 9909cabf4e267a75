//! HTTP client for the tool-name service.

use async_trait::async_trait;

use super::{parse_generated, GeneratedTool, GenerationError, GenerationRequest, ToolGenerator};

/// POSTs the request as JSON and expects `{name, description, icon}` back.
pub struct RemoteGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteGenerator {
    /// `endpoint` must be absolute (scheme and host included).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ToolGenerator for RemoteGenerator {
    fn label(&self) -> &'static str {
        "remote generator"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedTool, GenerationError> {
        log::info!("requesting tool #{} from {}", request.tool_index, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Unavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Unavailable(e.to_string()))?;
        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_generated(&body)
    }
}
