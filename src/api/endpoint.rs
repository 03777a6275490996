use super::query::{Dispatcher, Query};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// URL prefix of one versioned API resource plus the dispatcher its methods
/// call through. Every resource type holds one of these.
pub struct Endpoint<D> {
    prefix: &'static str,
    dispatcher: Arc<D>,
}

impl<D> Endpoint<D> {
    pub fn new(prefix: &'static str, dispatcher: Arc<D>) -> Self {
        Endpoint { prefix, dispatcher }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Assembles `prefix + segments[0] + enc(params[0]) + segments[1] + ...`,
    /// followed by `?key=value&...` when `optional` is non-empty.
    ///
    /// `params` must hold as many values as `segments`, or one fewer when the
    /// path ends in a literal segment.
    pub fn request(
        &self,
        key: &str,
        routing: &str,
        segments: &[&str],
        params: &[&str],
        optional: &[(&'static str, String)],
    ) -> Query {
        debug_assert!(
            params.len() == segments.len() || params.len() + 1 == segments.len(),
            "{key}: {} segment(s) cannot hold {} parameter(s)",
            segments.len(),
            params.len()
        );

        let mut url = String::from(self.prefix);
        for (i, segment) in segments.iter().enumerate() {
            url.push_str(segment);
            if let Some(param) = params.get(i) {
                url.push_str(&urlencoding::encode(param));
            }
        }

        if !optional.is_empty() {
            let query_string = optional
                .iter()
                .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query_string);
        }

        tracing::trace!(key, routing, %url, "assembled request");
        Query::new(key, routing, url)
    }
}

impl<D: Dispatcher> Endpoint<D> {
    /// Builds the request and hands it to the dispatcher, returning its result
    /// untouched.
    pub fn call(
        &self,
        key: &str,
        routing: &str,
        segments: &[&str],
        params: &[&str],
        optional: &[(&'static str, String)],
    ) -> Result<Value, D::Error> {
        let mut query = self.request(key, routing, segments, params, optional);
        tracing::debug!(key, routing, url = %query.url, "dispatching");
        self.dispatcher.dispatch(&mut query)
    }
}

impl<D> Clone for Endpoint<D> {
    fn clone(&self) -> Self {
        Endpoint {
            prefix: self.prefix,
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

impl<D> fmt::Debug for Endpoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint").field("prefix", &self.prefix).finish()
    }
}
