use kotoba_types::{ParseOutcome, SentenceAnalysis};

pub mod http;

pub use http::HttpParseClient;

/// Sentence segmentation and dictionary lookup service
#[async_trait::async_trait]
pub trait ParseService: Send + Sync {
    /// Send `sentence` verbatim and return its tokens in sentence order
    async fn parse(&self, sentence: &str) -> Result<SentenceAnalysis, ParseError>;

    /// Like [`ParseService::parse`], folding every failure into
    /// [`ParseOutcome::Failed`] with the error text as cause
    async fn submit(&self, sentence: &str) -> ParseOutcome {
        match self.parse(sentence).await {
            Ok(analysis) => ParseOutcome::Parsed(analysis),
            Err(e) => ParseOutcome::Failed(e.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Service returned HTTP {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
