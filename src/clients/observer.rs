//! Request observation hooks.
//!
//! [`HttpClient`](crate::clients::HttpClient) reports each exchange to a
//! [`RequestObserver`]. Observers only watch: they cannot alter a request,
//! a response, or the error returned to the caller.

use std::fmt;

use crate::clients::{HttpError, HttpMethod, HttpResponse};

/// Receives diagnostic information about every request.
///
/// All methods have empty default implementations, so an observer only
/// overrides what it cares about.
///
/// # Example
///
/// ```rust
/// use esl_api::clients::{HttpMethod, HttpResponse, RequestObserver};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[derive(Debug, Default)]
/// struct Counter(AtomicUsize);
///
/// impl RequestObserver for Counter {
///     fn on_request(&self, _method: HttpMethod, _url: &str) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait RequestObserver: fmt::Debug + Send + Sync {
    /// Called before the request is sent.
    fn on_request(&self, method: HttpMethod, url: &str) {
        let _ = (method, url);
    }

    /// Called when the server answered with a 2xx status.
    fn on_response(&self, method: HttpMethod, url: &str, response: &HttpResponse) {
        let _ = (method, url, response);
    }

    /// Called when the exchange failed, either at the transport level or
    /// with a non-2xx status.
    fn on_error(&self, method: HttpMethod, url: &str, error: &HttpError) {
        let _ = (method, url, error);
    }
}

/// Emits `tracing` events for every request. This is the default observer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, method: HttpMethod, url: &str) {
        tracing::debug!(%method, url, "Sending ESL API request");
    }

    fn on_response(&self, method: HttpMethod, url: &str, response: &HttpResponse) {
        tracing::debug!(
            %method,
            url,
            status = response.code,
            body = %response.body,
            "ESL API request succeeded"
        );
    }

    fn on_error(&self, method: HttpMethod, url: &str, error: &HttpError) {
        match error.status() {
            Some(status) => tracing::warn!(
                %method,
                url,
                status,
                error = %error,
                "ESL API request failed"
            ),
            None => tracing::warn!(%method, url, error = %error, "ESL API request failed"),
        }
    }
}

/// Discards all observations.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use std::collections::HashMap;

    #[test]
    fn test_observers_accept_all_events() {
        let response = HttpResponse::new(200, HashMap::new(), "[]");
        let error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "Store not found".to_string(),
        });

        for observer in [&TracingObserver as &dyn RequestObserver, &NoopObserver] {
            observer.on_request(HttpMethod::Get, "http://localhost/stores/");
            observer.on_response(HttpMethod::Get, "http://localhost/stores/", &response);
            observer.on_error(HttpMethod::Get, "http://localhost/stores/1", &error);
        }
    }

    #[test]
    fn test_observers_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingObserver>();
        assert_send_sync::<NoopObserver>();
    }
}
