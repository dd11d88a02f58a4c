#[cfg(test)]
pub mod fake {
    use crate::api::client::Transport;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Method {
        Get,
        Post,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub method: Method,
        pub path: String,
        pub query: Vec<(String, String)>,
        pub body: Option<Value>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: Result<Value, TransportError>,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        calls: Vec<RecordedCall>,
    }

    /// In-memory transport: answers from registered routes and records
    /// every call it sees.
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        inner: Arc<Mutex<Inner>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, method: Method, path: &str, response: Value) -> &Self {
            self.push(method, path, Ok(response))
        }

        pub fn fail(&self, method: Method, path: &str, error: TransportError) -> &Self {
            self.push(method, path, Err(error))
        }

        fn push(
            &self,
            method: Method,
            path: &str,
            response: Result<Value, TransportError>,
        ) -> &Self {
            let mut inner = self.inner.lock().expect("fake transport lock");
            inner.routes.push(Route {
                method,
                path: path.to_string(),
                response,
            });
            self
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.inner.lock().expect("fake transport lock").calls.clone()
        }

        pub fn call_count(&self) -> usize {
            self.inner.lock().expect("fake transport lock").calls.len()
        }

        fn answer(&self, call: RecordedCall) -> Result<Value, TransportError> {
            let mut inner = self.inner.lock().expect("fake transport lock");
            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == call.method && route.path == call.path)
                .cloned();
            let message = format!("No fake route for {:?} {}", call.method, call.path);
            inner.calls.push(call);
            route
                .map(|route| route.response)
                .unwrap_or(Err(TransportError::Connect(message)))
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TransportError> {
            self.answer(RecordedCall {
                method: Method::Get,
                path: path.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                body: None,
            })
        }

        async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
            self.answer(RecordedCall {
                method: Method::Post,
                path: path.to_string(),
                query: Vec::new(),
                body: Some(body.clone()),
            })
        }
    }
}
