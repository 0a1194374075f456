use crate::core::{Result, Sink};
use async_trait::async_trait;

/// Collects written elements in memory, mainly for tests and demos.
pub struct VecSink<T> {
    elements: Vec<T>,
}

impl<T> VecSink<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Default for VecSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Send + Sync + 'static> Sink for VecSink<T> {
    type Item = T;

    async fn write(&mut self, element: T) -> Result<()> {
        self.elements.push(element);
        Ok(())
    }
}
