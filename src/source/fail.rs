use crate::core::{ElementStream, Result, Source, StreamError};
use async_trait::async_trait;
use futures::stream;
use std::marker::PhantomData;
use std::sync::Arc;

/// A source that starts and immediately fails with the supplied reason.
///
/// Generic over `T` because it can stand in for a sequence of any element
/// type: it never yields one. Constructing the handle triggers nothing; the
/// failure is delivered on the first pull of an opened stream.
pub struct FailSource<T> {
    reason: Arc<anyhow::Error>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> FailSource<T> {
    pub fn new(reason: impl Into<anyhow::Error>) -> Self {
        Self {
            reason: Arc::new(reason.into()),
            _marker: PhantomData,
        }
    }
}

impl<T> Default for FailSource<T> {
    fn default() -> Self {
        Self::new(anyhow::anyhow!("unspecified stream failure"))
    }
}

#[async_trait]
impl<T: Send + 'static> Source for FailSource<T> {
    type Item = T;

    async fn open(&self) -> Result<ElementStream<T>> {
        let reason = Arc::clone(&self.reason);
        Ok(Box::pin(stream::once(async move {
            Err(StreamError::Failed(reason))
        })))
    }
}
