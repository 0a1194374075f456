use crate::core::Result;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// A sequence of elements delivered incrementally. The stream ends after the
/// first `Err` item; a stream that ends without one completed normally.
pub type ElementStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

#[async_trait]
pub trait Source: Send + Sync {
    type Item: Send + 'static;

    /// Returns an unstarted sequence. Nothing observable happens until the
    /// returned stream is first polled.
    async fn open(&self) -> Result<ElementStream<Self::Item>>;

    /// Readable-side capacity hint: how many unconsumed elements the runtime
    /// may buffer ahead of the consumer. Zero means no read-ahead.
    fn capacity(&self) -> usize {
        0
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// A chunk-by-chunk mapping from an input sequence to an output sequence.
///
/// Handlers are synchronous and run to completion; the driver never invokes
/// two handlers of the same instance concurrently. Each handler returns the
/// elements to emit downstream, in order (possibly none).
pub trait Transform: Send {
    type Input: Send + 'static;
    type Output: Send + 'static;

    /// Invoked once, before the first input element.
    fn on_start(&mut self) -> Result<Vec<Self::Output>> {
        Ok(Vec::new())
    }

    /// Invoked once per input element.
    fn on_element(&mut self, element: Self::Input) -> Result<Vec<Self::Output>>;

    /// Invoked once when the input completes. Not invoked when the input
    /// errors: accumulated state is dropped, never flushed, on that path.
    fn on_complete(&mut self) -> Result<Vec<Self::Output>> {
        Ok(Vec::new())
    }

    /// Writable-side capacity hint: extra input elements the runtime may
    /// queue ahead of `on_element`. Zero means the driver pulls one at a
    /// time, which is all accumulation-style transforms need.
    fn input_capacity(&self) -> usize {
        0
    }

    /// Readable-side capacity hint: how many emitted elements may sit
    /// unconsumed before the driver stops invoking handlers.
    fn output_capacity(&self) -> usize {
        1
    }
}

#[async_trait]
pub trait Sink: Send + Sync {
    type Item: Send + 'static;

    async fn write(&mut self, element: Self::Item) -> Result<()>;

    async fn write_batch(&mut self, elements: Vec<Self::Item>) -> Result<()> {
        for element in elements {
            self.write(element).await?;
        }
        Ok(())
    }

    async fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.flush().await
    }
}
