use crate::core::{ElementStream, Result, Source};
use async_trait::async_trait;
use futures::stream;

/// In-memory source over a fixed list of elements. Each open replays the
/// list from the start.
pub struct IterSource<T> {
    elements: Vec<T>,
}

impl<T> IterSource<T> {
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> Source for IterSource<T> {
    type Item = T;

    async fn open(&self) -> Result<ElementStream<T>> {
        let elements = self.elements.clone();
        Ok(Box::pin(stream::iter(elements.into_iter().map(Ok))))
    }
}
