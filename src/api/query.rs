use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// One request to the Riot API, built by an endpoint method and handed to the
/// dispatcher. The dispatcher fills in the send time and the response fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub method_key: String,
    pub routing_value: String,
    pub url: String,
    pub send_time: Option<DateTime<Utc>>,
    pub response_content: Value,
    pub response_header: Value,
    pub last_response: u16,
    pub server_errors: u32,
}

impl Query {
    pub fn new(method_key: &str, routing_value: &str, url: String) -> Self {
        Query {
            method_key: method_key.to_string(),
            routing_value: routing_value.to_string(),
            url,
            send_time: None,
            response_content: Value::Null,
            response_header: Value::Null,
            last_response: 0,
            server_errors: 0,
        }
    }

    pub fn mark_sent(&mut self) {
        self.send_time = Some(Utc::now());
    }

    /// Stores what came back for this attempt. 5xx statuses bump the server
    /// error counter so the dispatcher can decide when to give up.
    pub fn record_response(&mut self, status: u16, headers: Value, body: Value) {
        self.last_response = status;
        if (500..600).contains(&status) {
            self.server_errors += 1;
        }
        self.response_header = headers;
        self.response_content = body;
    }
}

/// Performs the network call for a [`Query`].
///
/// Signing, routing to a host, rate limiting and retries all live behind this
/// trait. Endpoint methods return whatever it returns, errors included.
pub trait Dispatcher {
    type Error;

    fn dispatch(&self, query: &mut Query) -> Result<Value, Self::Error>;
}

impl<F, E> Dispatcher for F
where
    F: Fn(&mut Query) -> Result<Value, E>,
{
    type Error = E;

    fn dispatch(&self, query: &mut Query) -> Result<Value, E> {
        self(query)
    }
}
