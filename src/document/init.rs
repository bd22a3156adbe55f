//! Engine initialization
//!
//! The engine is set up exactly once by the caller and awaited with a single
//! bounded timeout. There is no readiness flag to poll.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::error::InitializationError;
use super::traits::PdfEngine;

/// Await an engine's asynchronous setup, bounded by `limit`
pub async fn initialize_engine<F, E>(
    init: F,
    limit: Duration,
) -> Result<Arc<dyn PdfEngine>, InitializationError>
where
    F: Future<Output = Result<Arc<dyn PdfEngine>, E>>,
    E: Display,
{
    match tokio::time::timeout(limit, init).await {
        Ok(Ok(engine)) => {
            tracing::info!("PDF engine ready");
            Ok(engine)
        }
        Ok(Err(e)) => {
            tracing::error!("PDF engine initialization failed: {}", e);
            Err(InitializationError::Failed(e.to_string()))
        }
        Err(_) => {
            tracing::error!("PDF engine initialization timed out after {:?}", limit);
            Err(InitializationError::TimedOut(limit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentError, PageTextSource};
    use async_trait::async_trait;

    struct NullEngine;

    #[async_trait]
    impl PdfEngine for NullEngine {
        async fn open(
            &self,
            _data: Vec<u8>,
            _id: String,
        ) -> crate::document::Result<Arc<dyn PageTextSource>> {
            Err(DocumentError::ParseError("null engine".into()))
        }
    }

    #[tokio::test]
    async fn test_ready_engine_is_returned() {
        let init = async { Ok::<_, String>(Arc::new(NullEngine) as Arc<dyn PdfEngine>) };
        let engine = initialize_engine(init, Duration::from_secs(1)).await;
        assert!(engine.is_ok());
    }

    #[tokio::test]
    async fn test_failed_setup_is_typed() {
        let init = async { Err::<Arc<dyn PdfEngine>, _>("library missing") };
        let result = initialize_engine(init, Duration::from_secs(1)).await;

        match result {
            Err(InitializationError::Failed(msg)) => assert_eq!(msg, "library missing"),
            other => panic!("expected Failed, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_slow_setup_times_out() {
        let init = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, String>(Arc::new(NullEngine) as Arc<dyn PdfEngine>)
        };
        let result = initialize_engine(init, Duration::from_millis(20)).await;

        assert!(matches!(
            result,
            Err(InitializationError::TimedOut(d)) if d == Duration::from_millis(20)
        ));
    }
}
