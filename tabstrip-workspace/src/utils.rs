use postage::{stream::Stream, watch};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("workspace state channel closed before the condition was met")]
pub struct StateClosedError {}

/// Waits for the first published value
pub async fn await_state<T: Clone + Send + Sync>(
    channel: &mut watch::Receiver<Option<T>>,
) -> Result<T, StateClosedError> {
    await_condition(channel, |_| true).await
}

/// Waits until a published value satisfies the condition.  The current value is checked first.
pub async fn await_condition<T, F>(
    channel: &mut watch::Receiver<Option<T>>,
    mut condition: F,
) -> Result<T, StateClosedError>
where
    T: Clone + Send + Sync,
    F: FnMut(&T) -> bool,
{
    if let Some(ref value) = *channel.borrow() {
        if condition(value) {
            return Ok(value.clone());
        }
    }

    while let Some(update) = channel.recv().await {
        if let Some(value) = update {
            if condition(&value) {
                return Ok(value);
            }
        }
    }

    Err(StateClosedError {})
}
