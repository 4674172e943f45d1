//! Connectivity probe across the configured providers
//!
//! Each provider is checked on its own: build the client, make one trivial
//! call, record the outcome. Construction errors, call errors and panics are
//! all folded into a failed [`ProbeOutcome`], so [`probe`] always returns a
//! complete [`ProbeReport`].

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use settings::logging::{log_error, log_success};
use settings::{ProbeOutcome, ProbeReport, ProviderId, Settings};
use tracing::{debug, info};

use crate::error::ProviderError;
use crate::traits::ClientFactory;

/// Input sent to both providers
pub const PROBE_INPUT: &str = "test";

/// Check the LLM and embedding providers, in that order.
pub async fn probe<F>(settings: &Settings, factory: &F) -> ProbeReport
where
    F: ClientFactory + ?Sized,
{
    info!("Probing providers");
    let llm = probe_llm(settings, factory).await;
    let embedding = probe_embedding(settings, factory).await;
    ProbeReport::new(llm, embedding)
}

/// Build the LLM client and invoke it once
pub async fn probe_llm<F>(settings: &Settings, factory: &F) -> ProbeOutcome
where
    F: ClientFactory + ?Sized,
{
    let label = ProviderId::Groq.display_name();
    let attempt = async {
        let client = factory.llm_client(settings)?;
        client.invoke(PROBE_INPUT).await?;
        Ok::<(), ProviderError>(())
    };

    match guarded(attempt).await {
        Ok(()) => {
            let message = format!("{label} connection successful");
            log_success("prober", &message);
            ProbeOutcome::passed(message)
        }
        Err(reason) => {
            log_error("prober", &format!("{label} connection"), &reason);
            ProbeOutcome::failed(format!("{label} connection failed: {reason}"))
        }
    }
}

/// Build the embedding client and embed one string
pub async fn probe_embedding<F>(settings: &Settings, factory: &F) -> ProbeOutcome
where
    F: ClientFactory + ?Sized,
{
    let attempt = async {
        let client = factory.embedding_client(settings)?;
        let vector = client.embed_query(PROBE_INPUT).await?;
        debug!("Embedding has {} dimensions", vector.len());
        Ok::<(), ProviderError>(())
    };

    match guarded(attempt).await {
        Ok(()) => {
            let message = "embeddings connection successful".to_string();
            log_success("prober", &message);
            ProbeOutcome::passed(message)
        }
        Err(reason) => {
            log_error("prober", "embeddings connection", &reason);
            ProbeOutcome::failed(format!("embeddings connection failed: {reason}"))
        }
    }
}

/// Run a check, turning both errors and panics into a description.
async fn guarded<Fut>(attempt: Fut) -> Result<(), String>
where
    Fut: Future<Output = Result<(), ProviderError>>,
{
    match AssertUnwindSafe(attempt).catch_unwind().await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panic: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panic: {message}")
    } else {
        "panic: unknown cause".to_string()
    }
}
