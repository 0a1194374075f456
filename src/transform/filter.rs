use crate::core::{Result, Transform};
use std::marker::PhantomData;

/// Keeps only the input elements matching a predicate.
pub struct Filter<F, T> {
    predicate: F,
    _marker: PhantomData<fn(T)>,
}

impl<F, T> Filter<F, T>
where
    F: FnMut(&T) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<F, T> Transform for Filter<F, T>
where
    F: FnMut(&T) -> bool + Send + 'static,
    T: Send + 'static,
{
    type Input = T;
    type Output = T;

    fn on_element(&mut self, element: T) -> Result<Vec<T>> {
        if (self.predicate)(&element) {
            Ok(vec![element])
        } else {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ElementStream, apply};
    use futures::{StreamExt, stream};

    #[tokio::test]
    async fn drops_non_matching_elements() {
        let input: ElementStream<i64> = Box::pin(stream::iter((1..=6).map(Ok)));
        let output = apply(input, Filter::new(|x: &i64| x % 2 == 0));
        let evens: Vec<_> = output.map(|r| r.unwrap()).collect().await;
        assert_eq!(evens, vec![2, 4, 6]);
    }
}
