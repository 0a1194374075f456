use crate::core::{ElementStream, Result, Transform};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, trace};

/// Runs `transform` against `input` and returns its output sequence.
///
/// One task per transform. The output channel is bounded by the transform's
/// readable-side hint, so a slow consumer stalls the handler loop instead of
/// piling up emitted elements; the transform's own accumulation state is the
/// only other buffering.
pub fn apply<T>(input: ElementStream<T::Input>, transform: T) -> ElementStream<T::Output>
where
    T: Transform + 'static,
{
    let (tx, rx) = mpsc::channel(transform.output_capacity().max(1));
    let input = prefetch(input, transform.input_capacity());
    tokio::spawn(drive(input, transform, tx));
    Box::pin(ReceiverStream::new(rx))
}

/// Inserts a bounded read-ahead queue in front of `input`. A zero capacity
/// leaves the stream untouched.
pub(crate) fn prefetch<T: Send + 'static>(
    input: ElementStream<T>,
    capacity: usize,
) -> ElementStream<T> {
    if capacity == 0 {
        return input;
    }
    let (tx, rx) = mpsc::channel(capacity);
    tokio::spawn(async move {
        let mut input = input;
        while let Some(next) = input.next().await {
            if tx.send(next).await.is_err() {
                break;
            }
        }
    });
    Box::pin(ReceiverStream::new(rx))
}

async fn drive<T>(
    mut input: ElementStream<T::Input>,
    mut transform: T,
    tx: mpsc::Sender<Result<T::Output>>,
) where
    T: Transform,
{
    match transform.on_start() {
        Ok(seed) => {
            if !emit(&tx, seed).await {
                return;
            }
        }
        Err(e) => {
            let _ = tx.send(Err(e)).await;
            return;
        }
    }

    while let Some(next) = input.next().await {
        let element = match next {
            Ok(element) => element,
            Err(e) => {
                // Upstream failure ends the sequence here: the error goes
                // downstream verbatim and `transform` is dropped with
                // whatever it had accumulated.
                debug!("forwarding upstream error");
                let _ = tx.send(Err(e)).await;
                return;
            }
        };
        match transform.on_element(element) {
            Ok(out) => {
                if !emit(&tx, out).await {
                    return;
                }
            }
            Err(e) => {
                let _ = tx.send(Err(e)).await;
                return;
            }
        }
    }

    match transform.on_complete() {
        Ok(out) => {
            let _ = emit(&tx, out).await;
        }
        Err(e) => {
            let _ = tx.send(Err(e)).await;
        }
    }
}

async fn emit<U>(tx: &mpsc::Sender<Result<U>>, elements: Vec<U>) -> bool {
    for element in elements {
        if tx.send(Ok(element)).await.is_err() {
            trace!("downstream dropped, stopping");
            return false;
        }
    }
    true
}
