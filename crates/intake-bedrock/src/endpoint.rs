//! The generation endpoint seam.
//!
//! The pipeline only ever sees [`GenerativeEndpoint`]: one request in, one
//! textual response out, no streaming, no retries. The production
//! implementation invokes the Bedrock Converse API; tests substitute a
//! deterministic stub. Methods return boxed futures for dyn compatibility.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;

use crate::error::GenerateError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A black-box `prompt -> text` capability.
pub trait GenerativeEndpoint: Send + Sync {
    /// Identifier recorded on the generated report.
    fn model_id(&self) -> &str;

    /// One synchronous request/response exchange. Failures propagate
    /// immediately; the caller decides what survives them.
    fn generate<'a>(
        &'a self,
        system_prompt: &'a str,
        user_message: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerateError>>;
}

/// Default caller-side timeout for one generation call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Production endpoint: the Bedrock Converse API.
pub struct BedrockEndpoint {
    client: Client,
    model_id: String,
    timeout: Duration,
}

impl BedrockEndpoint {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl GenerativeEndpoint for BedrockEndpoint {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn generate<'a>(
        &'a self,
        system_prompt: &'a str,
        user_message: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerateError>> {
        Box::pin(async move {
            let call = invoke_converse(&self.client, &self.model_id, system_prompt, user_message);
            match tokio::time::timeout(self.timeout, call).await {
                Ok(result) => result,
                Err(_) => Err(GenerateError::Timeout {
                    seconds: self.timeout.as_secs(),
                }),
            }
        })
    }
}

/// Core invocation using the Bedrock Converse API: a system block and a
/// single user message, response text joined from the text blocks.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<String, GenerateError> {
    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(user_message.to_string()))
        .build()
        .map_err(|e| GenerateError::Unreachable(e.to_string()))?;

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(message)
        .send()
        .await
        .map_err(|e| match e {
            SdkError::ServiceError(ctx) => GenerateError::Rejected(ctx.into_err().to_string()),
            other => GenerateError::Unreachable(other.to_string()),
        })?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| GenerateError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    info!(model_id, response_len = response_text.len(), "converse complete");

    Ok(response_text)
}
