//! Fail-soft embedding client.
//!
//! Wraps an [`EmbeddingService`] and converts every failure into an absent
//! value. Callers always get one `Option<Vec<f32>>` per input text, in input
//! order; the only observable difference between success and failure is
//! `Some` versus `None` (plus an error log). Nothing here returns `Err`.
//!
//! Batch processing is strictly sequential: chunk N completes (success or
//! failure) before chunk N+1 is issued, with a fixed pause in between.

use std::time::Duration;

use tracing::{debug, error};

use crate::EmbeddingService;

/// Default number of texts sent per embeddings request.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Fixed pause between consecutive batch requests. This is a throttle, not a
/// backoff: it is unconditional and ignores success, failure and any
/// rate-limit signal from the API.
const INTER_BATCH_DELAY: Duration = Duration::from_millis(100);

/// Fail-soft wrapper over an embedding transport.
///
/// A disabled client (no transport) is structurally incapable of network I/O
/// and returns absent values from every operation.
pub struct EmbeddingClient<S> {
    service: Option<S>,
}

impl<S: EmbeddingService> EmbeddingClient<S> {
    /// Creates an enabled client over the given transport.
    pub fn new(service: S) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// Creates a client with no transport. Every operation returns absent
    /// values without performing any I/O.
    pub fn disabled() -> Self {
        Self { service: None }
    }

    /// True when a transport is attached.
    pub fn is_enabled(&self) -> bool {
        self.service.is_some()
    }

    /// Generates an embedding for a single text.
    ///
    /// Returns `None` when the client is disabled or the request fails; the
    /// failure is logged and swallowed, never propagated.
    pub async fn generate(&self, text: &str) -> Option<Vec<f32>> {
        let service = self.service.as_ref()?;
        match service.embed(text).await {
            Ok(embedding) => Some(embedding),
            Err(e) => {
                error!(error = %e, text_len = text.len(), "embedding request failed");
                None
            }
        }
    }

    /// Generates embeddings for many texts with the default batch size.
    pub async fn generate_batch(&self, texts: &[String]) -> Vec<Option<Vec<f32>>> {
        self.generate_batch_with_size(texts, DEFAULT_BATCH_SIZE).await
    }

    /// Generates embeddings for many texts, `batch_size` per request.
    ///
    /// The input is split into contiguous chunks of at most `batch_size`
    /// texts (clamped to at least 1), processed one request at a time in
    /// input order, with the fixed inter-batch delay before every request
    /// except the first. A failed chunk contributes one `None` per text in
    /// that chunk; other chunks are unaffected. The result always has
    /// exactly one entry per input text, aligned by position.
    pub async fn generate_batch_with_size(
        &self,
        texts: &[String],
        batch_size: usize,
    ) -> Vec<Option<Vec<f32>>> {
        let Some(service) = self.service.as_ref() else {
            return vec![None; texts.len()];
        };

        let batch_size = batch_size.max(1);
        let mut results: Vec<Option<Vec<f32>>> = Vec::with_capacity(texts.len());

        for (chunk_index, chunk) in texts.chunks(batch_size).enumerate() {
            if chunk_index > 0 {
                tokio::time::sleep(INTER_BATCH_DELAY).await;
            }

            let start = chunk_index * batch_size;
            let end = start + chunk.len();
            match service.embed_batch(chunk).await {
                Ok(embeddings) if embeddings.len() == chunk.len() => {
                    results.extend(embeddings.into_iter().map(Some));
                }
                Ok(embeddings) => {
                    // Malformed response; degrade the whole chunk so the
                    // output stays aligned with the input.
                    error!(
                        start,
                        end,
                        expected = chunk.len(),
                        got = embeddings.len(),
                        "embedding batch returned wrong count, dropping chunk"
                    );
                    results.extend(std::iter::repeat_with(|| None).take(chunk.len()));
                }
                Err(e) => {
                    error!(error = %e, start, end, "embedding batch request failed");
                    results.extend(std::iter::repeat_with(|| None).take(chunk.len()));
                }
            }
        }

        debug!(total = results.len(), "embedding batch complete");
        results
    }
}
