use crate::core::{Result, StreamError, Transform};

/// Groups consecutive input elements into `Vec`s of a fixed size.
///
/// Every emitted group has exactly `batch_size` elements except possibly the
/// final one, which carries whatever remains when the input completes. A full
/// buffer is emitted eagerly the moment it fills, so the flush on completion
/// only ever emits a strictly-short group or nothing. If the input errors,
/// the partial buffer is dropped, never emitted.
pub struct BufferCount<T> {
    batch_size: usize,
    buffer: Vec<T>,
}

impl<T> BufferCount<T> {
    pub fn new(batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(StreamError::Config(
                "batch size must be a positive integer".to_string(),
            ));
        }
        Ok(Self {
            batch_size,
            buffer: Vec::with_capacity(batch_size),
        })
    }
}

impl<T: Send + 'static> Transform for BufferCount<T> {
    type Input = T;
    type Output = Vec<T>;

    fn on_element(&mut self, element: T) -> Result<Vec<Vec<T>>> {
        self.buffer.push(element);
        if self.buffer.len() == self.batch_size {
            // Clear-and-replace: the emitted group takes the old allocation,
            // the buffer starts over empty.
            let group = std::mem::replace(&mut self.buffer, Vec::with_capacity(self.batch_size));
            Ok(vec![group])
        } else {
            Ok(Vec::new())
        }
    }

    fn on_complete(&mut self) -> Result<Vec<Vec<T>>> {
        if self.buffer.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![std::mem::take(&mut self.buffer)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ElementStream, apply};
    use futures::{StreamExt, stream};

    fn input_of(elements: Vec<Result<i64>>) -> ElementStream<i64> {
        Box::pin(stream::iter(elements))
    }

    async fn drain(mut stream: ElementStream<Vec<i64>>) -> (Vec<Vec<i64>>, Option<StreamError>) {
        let mut groups = Vec::new();
        while let Some(next) = stream.next().await {
            match next {
                Ok(group) => groups.push(group),
                Err(e) => return (groups, Some(e)),
            }
        }
        (groups, None)
    }

    #[tokio::test]
    async fn groups_with_short_final_batch() {
        let input = input_of((1..=8).map(Ok).collect());
        let (groups, error) = drain(apply(input, BufferCount::new(3).unwrap())).await;
        assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
        assert!(error.is_none());
    }

    #[tokio::test]
    async fn concatenation_reproduces_input_order() {
        let input = input_of((0..25).map(Ok).collect());
        let (groups, _) = drain(apply(input, BufferCount::new(4).unwrap())).await;
        let flattened: Vec<_> = groups.into_iter().flatten().collect();
        assert_eq!(flattened, (0..25).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn empty_input_emits_no_groups() {
        let input = input_of(Vec::new());
        let (groups, error) = drain(apply(input, BufferCount::new(3).unwrap())).await;
        assert!(groups.is_empty());
        assert!(error.is_none());
    }

    #[tokio::test]
    async fn exact_multiple_has_no_trailing_group() {
        let input = input_of((1..=6).map(Ok).collect());
        let (groups, error) = drain(apply(input, BufferCount::new(3).unwrap())).await;
        assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert!(error.is_none());
    }

    #[tokio::test]
    async fn input_shorter_than_batch_flushes_once() {
        let input = input_of(vec![Ok(1), Ok(2)]);
        let (groups, error) = drain(apply(input, BufferCount::new(5).unwrap())).await;
        assert_eq!(groups, vec![vec![1, 2]]);
        assert!(error.is_none());
    }

    #[tokio::test]
    async fn batch_size_one_wraps_each_element() {
        let input = input_of(vec![Ok(7), Ok(8)]);
        let (groups, _) = drain(apply(input, BufferCount::new(1).unwrap())).await;
        assert_eq!(groups, vec![vec![7], vec![8]]);
    }

    #[tokio::test]
    async fn zero_batch_size_is_rejected_at_construction() {
        let result = BufferCount::<i64>::new(0);
        assert!(matches!(result, Err(StreamError::Config(_))));
    }

    #[tokio::test]
    async fn upstream_error_drops_partial_buffer() {
        let input = input_of(vec![
            Ok(1),
            Ok(2),
            Err(StreamError::failed(anyhow::anyhow!("feed died"))),
        ]);
        let (groups, error) = drain(apply(input, BufferCount::new(3).unwrap())).await;
        assert!(groups.is_empty());
        assert!(error.unwrap().to_string().contains("feed died"));
    }

    #[tokio::test]
    async fn full_group_before_error_is_still_delivered() {
        let input = input_of(vec![
            Ok(1),
            Ok(2),
            Ok(3),
            Ok(4),
            Err(StreamError::failed(anyhow::anyhow!("feed died"))),
        ]);
        let (groups, error) = drain(apply(input, BufferCount::new(3).unwrap())).await;
        assert_eq!(groups, vec![vec![1, 2, 3]]);
        assert!(error.is_some());
    }
}
