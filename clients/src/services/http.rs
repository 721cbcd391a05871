//! HTTP plumbing shared by the capability sources

use std::future::Future;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Run a whole call (send and body read) under one hard deadline
pub(crate) async fn with_deadline<T, F>(timeout: Duration, call: F) -> ClientResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(ClientError::timeout(timeout)),
    }
}

/// Map a transport failure; the URL is stripped because it may carry a key
pub(crate) fn transport_error(error: reqwest::Error, timeout: Duration) -> ClientError {
    if error.is_timeout() {
        return ClientError::timeout(timeout);
    }
    ClientError::network(error.without_url().to_string())
}

/// Pass successful responses through, classify the rest
pub(crate) async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = truncate(body.trim(), MAX_ERROR_BODY_CHARS);

    match status.as_u16() {
        401 | 403 => Err(ClientError::auth(format!("HTTP {status}: {detail}"))),
        // Google APIs answer an unknown key with 400 rather than 401
        400 if body.contains("API_KEY_INVALID") || body.contains("API key not valid") => {
            Err(ClientError::auth(format!("HTTP {status}: {detail}")))
        }
        _ => Err(ClientError::network(format!("HTTP {status}: {detail}"))),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
        assert_eq!(truncate("日本語テキスト", 3), "日本語…");
    }

    #[tokio::test]
    async fn test_with_deadline_times_out() {
        let result: ClientResult<()> = with_deadline(Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(())
        })
        .await;
        assert_eq!(result, Err(ClientError::Timeout { timeout_ms: 20 }));
    }

    #[tokio::test]
    async fn test_with_deadline_passes_result_through() {
        let result = with_deadline(Duration::from_secs(1), async { Ok::<_, ClientError>(7) }).await;
        assert_eq!(result, Ok(7));
    }
}
