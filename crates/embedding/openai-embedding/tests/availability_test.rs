//! Tests for the availability predicate.
//!
//! `embeddings_available` must answer from the current environment, not from
//! the lazily constructed process-wide client. This file holds the only test
//! that mutates `OPENAI_API_KEY`; keeping it in its own test binary means no
//! parallel test can read the variable mid-mutation.

use openai_embedding::{embeddings_available, generate_embeddings_batch};

/// **Test: Availability tracks the environment, before and after the shared
/// client exists.**
///
/// **Setup/Action:** sets the key, forces lazy construction of the shared
/// client with an empty batch call, then blanks, removes and re-sets the key.
///
/// **Expected:** `embeddings_available()` follows the environment at every
/// step; the client constructed earlier has no influence on the answer.
#[tokio::test]
async fn availability_reflects_environment_independent_of_client_state() {
    std::env::set_var("OPENAI_API_KEY", "sk-availability-test");
    assert!(embeddings_available());

    // Forces construction of the process-wide client, which caches the
    // credential it saw.
    let results = generate_embeddings_batch(&[]).await;
    assert!(results.is_empty());

    std::env::set_var("OPENAI_API_KEY", "   ");
    assert!(!embeddings_available());

    std::env::remove_var("OPENAI_API_KEY");
    assert!(!embeddings_available());

    std::env::set_var("OPENAI_API_KEY", "sk-availability-test-2");
    assert!(embeddings_available());
}
