//! Process-wide fail-soft embedding entry points.
//!
//! The underlying client is constructed lazily on first use and lives until
//! process exit. Construction reads `OPENAI_API_KEY` once: a missing key
//! yields a disabled client (every operation returns absent values without
//! network I/O) and logs a single warning. The availability predicate is
//! independent of that cached state and re-reads the environment each call.

use std::sync::OnceLock;

use embedding::{EmbeddingClient, EnvEmbeddingConfig};
use tracing::warn;

use crate::{OpenAIEmbedding, DEFAULT_EMBEDDING_MODEL};

static SHARED_CLIENT: OnceLock<EmbeddingClient<OpenAIEmbedding>> = OnceLock::new();

fn shared_client() -> &'static EmbeddingClient<OpenAIEmbedding> {
    SHARED_CLIENT.get_or_init(|| {
        let config = EnvEmbeddingConfig::from_env();
        if !config.is_configured() {
            // get_or_init runs this at most once per process.
            warn!("OPENAI_API_KEY is not set, embeddings are disabled");
            return EmbeddingClient::disabled();
        }
        EmbeddingClient::new(OpenAIEmbedding::new(
            config.openai_api_key().to_string(),
            DEFAULT_EMBEDDING_MODEL.to_string(),
        ))
    })
}

/// Generates an embedding for a single text.
///
/// Returns `None` when embeddings are disabled or the request fails; callers
/// never see an error.
pub async fn generate_embedding(text: &str) -> Option<Vec<f32>> {
    shared_client().generate(text).await
}

/// Generates embeddings for many texts with the default batch size.
///
/// The result has exactly one entry per input text, in input order; failed
/// or skipped texts hold `None`.
pub async fn generate_embeddings_batch(texts: &[String]) -> Vec<Option<Vec<f32>>> {
    shared_client().generate_batch(texts).await
}

/// Same as [`generate_embeddings_batch`] with an explicit batch size.
pub async fn generate_embeddings_batch_with_size(
    texts: &[String],
    batch_size: usize,
) -> Vec<Option<Vec<f32>>> {
    shared_client().generate_batch_with_size(texts, batch_size).await
}

/// True when `OPENAI_API_KEY` is currently present in the environment.
///
/// The environment is re-read on every call, so the answer stays accurate
/// before the shared client exists and after the key is added or removed.
pub fn embeddings_available() -> bool {
    EnvEmbeddingConfig::from_env().is_configured()
}
