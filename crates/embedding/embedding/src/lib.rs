//! # Text Embeddings
//!
//! This crate defines the embedding service interface for generating text
//! embeddings, together with the fail-soft [`EmbeddingClient`] that callers
//! use when an embedding failure must never surface as an error.
//!
//! [`EmbeddingService`] is the transport seam: implementations talk to a
//! concrete provider and report failures as `Err`. [`EmbeddingClient`] wraps
//! a service (or no service at all, when embeddings are disabled) and turns
//! every failure into an absent value, one `Option<Vec<f32>>` per input text,
//! positionally aligned with the input.

use async_trait::async_trait;

mod client;
mod config;

pub use client::{EmbeddingClient, DEFAULT_BATCH_SIZE};
pub use config::{EnvEmbeddingConfig, OPENAI_API_KEY_VAR};

/// Service for generating text embeddings.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Generates an embedding vector for a single text string.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, anyhow::Error>;

    /// Generates embedding vectors for multiple texts in a single API call.
    /// This is more efficient than calling `embed` multiple times.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, anyhow::Error>;
}
