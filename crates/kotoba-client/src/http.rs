use async_trait::async_trait;
use kotoba_types::SentenceAnalysis;
use serde::Serialize;

use crate::{ParseError, ParseService};

#[derive(Serialize)]
struct ParseRequest<'a> {
    sentence: &'a str,
}

/// `POST {endpoint}` with `{"sentence": ...}`, JSON token array back
#[derive(Clone)]
pub struct HttpParseClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpParseClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl ParseService for HttpParseClient {
    async fn parse(&self, sentence: &str) -> Result<SentenceAnalysis, ParseError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ParseRequest { sentence })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ParseError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let analysis: SentenceAnalysis = serde_json::from_slice(&body)?;

        tracing::debug!("Parsed {} tokens from {}", analysis.len(), self.endpoint);
        Ok(analysis)
    }
}
