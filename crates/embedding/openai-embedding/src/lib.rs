//! # OpenAI Embedding Service
//!
//! This crate provides the OpenAI implementation of the `EmbeddingService`
//! trait, plus process-wide fail-soft entry points: [`generate_embedding`],
//! [`generate_embeddings_batch`] and [`embeddings_available`].
//!
//! ## OpenAIEmbedding
//!
//! Uses OpenAI's embedding models. The default is `text-embedding-3-large`,
//! which produces 3072-dimensional vectors; requests ask for float encoding.
//!
//! ## Example
//!
//! ```rust,no_run
//! use openai_embedding::OpenAIEmbedding;
//! use embedding::EmbeddingService;
//!
//! fn create_service() -> OpenAIEmbedding {
//!     // The API key can be provided directly or via OPENAI_API_KEY.
//!     OpenAIEmbedding::with_api_key("sk-...".to_string())
//! }
//!
//! async fn example(service: &OpenAIEmbedding) -> Result<(), anyhow::Error> {
//!     let embedding = service.embed("Hello world").await?;
//!     println!("Embedding dimension: {}", embedding.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! - **API Key**: Your OpenAI API key (or set `OPENAI_API_KEY`).
//! - **Model**: The embedding model to use (default: `text-embedding-3-large`).
//!
//! Dimensionality is whatever the model returns; it is not validated here.
//! See [OpenAI Embeddings Documentation](https://platform.openai.com/docs/guides/embeddings).

use async_openai::{
    config::OpenAIConfig,
    types::{CreateEmbeddingRequestArgs, EncodingFormat},
    Client,
};
use async_trait::async_trait;
use embedding::EmbeddingService;
use tracing::{debug, instrument, warn};

mod shared;

pub use shared::{
    embeddings_available, generate_embedding, generate_embeddings_batch,
    generate_embeddings_batch_with_size,
};

/// Default embedding model; produces 3072-dimensional vectors.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-large";

/// OpenAI embedding service. Holds the async-openai client and model name.
#[derive(Debug, Clone)]
pub struct OpenAIEmbedding {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAIEmbedding {
    /// Creates a service for the given model. An empty `api_key` falls back
    /// to the `OPENAI_API_KEY` environment variable.
    pub fn new(api_key: String, model: String) -> Self {
        let api_key = if api_key.is_empty() {
            std::env::var("OPENAI_API_KEY").unwrap_or_default()
        } else {
            api_key
        };

        let client = Client::with_config(OpenAIConfig::new().with_api_key(api_key));
        Self { client, model }
    }

    /// Creates a service with the default model.
    pub fn with_api_key(api_key: String) -> Self {
        Self::new(api_key, DEFAULT_EMBEDDING_MODEL.to_string())
    }

    /// Sets a different embedding model.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Returns the embedding model name (for tests and diagnostics).
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl EmbeddingService for OpenAIEmbedding {
    /// Embeds a single text string.
    ///
    /// Issues one request and returns the first (and only) embedding of the
    /// response. No timeout is imposed here beyond the transport default.
    #[instrument(skip(self, text), fields(model = %self.model, text_len = text.len()))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>, anyhow::Error> {
        let request = CreateEmbeddingRequestArgs::default()
            .model(self.model.clone())
            .input(vec![text])
            .encoding_format(EncodingFormat::Float)
            .build()?;

        let response = match self.client.embeddings().create(request).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "OpenAI embed request failed");
                return Err(e.into());
            }
        };

        let embedding = response
            .data
            .into_iter()
            .next()
            .map(|item| item.embedding)
            .ok_or_else(|| anyhow::anyhow!("no embedding in response"))?;

        debug!(dimension = embedding.len(), "OpenAI embed done");
        Ok(embedding)
    }

    /// Embeds multiple texts in one request.
    ///
    /// Response entries are trusted to arrive in request order (the API
    /// contract); only the count is checked, so a short response is an
    /// error rather than a silently misaligned result.
    #[instrument(skip(self, texts), fields(model = %self.model, batch_size = texts.len()))]
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, anyhow::Error> {
        if texts.is_empty() {
            debug!("OpenAI embed_batch empty input, skipping");
            return Ok(vec![]);
        }

        let request = CreateEmbeddingRequestArgs::default()
            .model(self.model.clone())
            .input(texts.to_vec())
            .encoding_format(EncodingFormat::Float)
            .build()?;

        let response = match self.client.embeddings().create(request).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "OpenAI embed_batch request failed");
                return Err(e.into());
            }
        };

        let embeddings: Vec<Vec<f32>> = response
            .data
            .into_iter()
            .map(|item| item.embedding)
            .collect();

        if embeddings.len() != texts.len() {
            warn!(
                expected = texts.len(),
                got = embeddings.len(),
                "OpenAI embed_batch response count mismatch"
            );
            anyhow::bail!(
                "expected {} embeddings, got {}",
                texts.len(),
                embeddings.len()
            );
        }

        debug!(count = embeddings.len(), "OpenAI embed_batch done");
        Ok(embeddings)
    }
}
