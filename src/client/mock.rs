use crate::client::{Client, Request, Result, Transport};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Records every request and answers with a canned response.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockTransport {
    requests: Arc<Mutex<Vec<Request>>>,
    response: Value,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_response(response: Value) -> Self {
        Self {
            response,
            ..Self::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> Request {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &Request) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// A client authenticated with the token `t0ken` that talks to a fresh `MockTransport`.
pub(crate) fn client() -> (Client, MockTransport) {
    let transport = MockTransport::new();
    let client = Client::builder()
        .access_token("t0ken")
        .transport(transport.clone())
        .build()
        .unwrap();

    (client, transport)
}

/// Every call in `results` succeeded, each sent exactly one request, and no url kept a `:name`
/// placeholder.
pub(crate) fn assert_all_sent(transport: &MockTransport, results: Vec<Result<Value>>) {
    let count = results.len();
    for (i, result) in results.into_iter().enumerate() {
        if let Err(err) = result {
            panic!("call #{} failed: {:?}", i, err);
        }
    }

    let requests = transport.requests();
    assert_eq!(requests.len(), count);
    for request in requests {
        assert!(
            request.url.starts_with("https://api.github.com/"),
            "{}",
            request.url
        );
        assert!(!request.url.contains("/:"), "{}", request.url);
    }
}
