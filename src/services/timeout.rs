use crate::models::error::AppError;
use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::pin;

/// Races an async operation against a browser timer.
///
/// # Arguments
///
/// * `operation` - A Future resolving to `Result<T, AppError>`
/// * `timeout_ms` - Milliseconds to wait before giving up
///
/// # Returns
///
/// The operation's own result, or `AppError::Timeout` when the timer fires
/// first. The losing future is dropped, which abandons any request still in
/// flight.
pub async fn with_timeout<F, T>(operation: F, timeout_ms: u32) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let result = with_deadline(operation, TimeoutFuture::new(timeout_ms), timeout_ms).await;

    if let Err(AppError::Timeout(reason)) = &result {
        gloo::console::warn!(&format!("Request timed out: {reason}"));
    }
    result
}

/// Races `operation` against any `deadline` future.
///
/// `timeout_ms` only labels the error; the deadline future decides when it
/// fires.
pub async fn with_deadline<F, D, T>(
    operation: F,
    deadline: D,
    timeout_ms: u32,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
    D: Future<Output = ()>,
{
    let operation = pin!(operation);
    let deadline = pin!(deadline);

    match select(operation, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AppError::Timeout(format!(
            "no response within {timeout_ms}ms"
        ))),
    }
}
