use crate::core::driver;
use crate::core::{ElementStream, Result, Sink, Source, Transform};
use futures::StreamExt;
use tracing::debug;

/// A running sequence with a typed builder for chaining transforms onto it.
///
/// `open` starts consumption from a source; each `transform` call hands the
/// stream to the driver and continues with the transform's output type.
pub struct Pipeline<T> {
    stream: ElementStream<T>,
}

impl<T: Send + 'static> Pipeline<T> {
    pub async fn open<S>(source: &S) -> Result<Self>
    where
        S: Source<Item = T>,
    {
        let stream = source.open().await?;
        Ok(Self {
            stream: driver::prefetch(stream, source.capacity()),
        })
    }

    pub fn from_stream(stream: ElementStream<T>) -> Self {
        Self { stream }
    }

    pub fn transform<X>(self, transform: X) -> Pipeline<X::Output>
    where
        X: Transform<Input = T> + 'static,
    {
        Pipeline {
            stream: driver::apply(self.stream, transform),
        }
    }

    pub async fn collect(mut self) -> Result<Vec<T>> {
        let mut elements = Vec::new();
        while let Some(next) = self.stream.next().await {
            elements.push(next?);
        }
        Ok(elements)
    }

    pub async fn write_to<K>(mut self, sink: &mut K) -> Result<()>
    where
        K: Sink<Item = T>,
    {
        let mut written = 0usize;
        while let Some(next) = self.stream.next().await {
            sink.write(next?).await?;
            written += 1;
        }
        sink.close().await?;
        debug!(written, "pipeline drained");
        Ok(())
    }

    pub fn into_stream(self) -> ElementStream<T> {
        self.stream
    }
}
