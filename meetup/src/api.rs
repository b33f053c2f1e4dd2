//! Access to the Meetup.com API.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::MeetupConfig;
use crate::event::MeetupEvent;
use crate::unpack::{unpack_events, UnpackError};

/// Failures while fetching the group's upcoming events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeetupApiError {
    /// Host, group name or events path is missing from the settings
    #[error("Meetup settings are missing host, group name or events path")]
    MissingConfigInfo,

    /// Could not connect, or the response body was empty
    #[error("no response from the Meetup API")]
    NoResponse,

    /// Response could not be parsed as JSON
    #[error("Meetup API response is not valid JSON")]
    ResponseInvalidJson,

    /// Response was not the expected array of events
    #[error("Meetup API response is not an array of events")]
    ResponseNotAnArray,
}

impl From<UnpackError> for MeetupApiError {
    fn from(err: UnpackError) -> Self {
        match err {
            UnpackError::NotAnArray => MeetupApiError::ResponseNotAnArray,
        }
    }
}

/// Errors raised by a [`Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Outbound HTTP seam used by [`MeetupApi`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET and return the response body as text.
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Meetup API answered {} for {}", status, url);
        }

        Ok(response.text().await?)
    }
}

/// Client for the group's Meetup.com endpoints.
#[derive(Clone)]
pub struct MeetupApi {
    config: MeetupConfig,
    transport: Arc<dyn Transport>,
}

impl MeetupApi {
    /// Client using a `reqwest` transport configured from `config`.
    pub fn new(config: MeetupConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: MeetupConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Pull down future events for the group, in the order Meetup.com
    /// listed them.
    ///
    /// No request is made when the settings are incomplete.
    pub async fn get_upcoming_events(&self) -> Result<Vec<MeetupEvent>, MeetupApiError> {
        let url = self
            .config
            .events_endpoint()
            .ok_or(MeetupApiError::MissingConfigInfo)?;

        tracing::debug!("Fetching upcoming events from {}", url);

        let body = match self.transport.get(&url).await {
            Ok(body) if !body.trim().is_empty() => body,
            Ok(_) => {
                tracing::debug!("Empty response body from {}", url);
                return Err(MeetupApiError::NoResponse);
            }
            Err(e) => {
                tracing::debug!("Request to {} failed: {}", url, e);
                return Err(MeetupApiError::NoResponse);
            }
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| MeetupApiError::ResponseInvalidJson)?;

        let events = unpack_events(&parsed)?;
        tracing::debug!("Unpacked {} upcoming events", events.len());

        Ok(events)
    }
}

impl std::fmt::Debug for MeetupApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeetupApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Transport returning a canned result and recording requested URLs.
    struct RecordingTransport {
        response: Result<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl RecordingTransport {
        fn replying(body: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(body.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Err(message.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, url: &str) -> Result<String, TransportError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.response.clone().map_err(TransportError::Other)
        }
    }

    fn config() -> MeetupConfig {
        MeetupConfig::new("api.example.com", "cocoaheads", "events")
    }

    fn api(config: MeetupConfig, transport: &Arc<RecordingTransport>) -> MeetupApi {
        MeetupApi::with_transport(config, transport.clone())
    }

    fn events_body() -> String {
        json!([
            {
                "name": "Discussion",
                "time": 1470879000000i64,
                "utc_offset": -25200000,
                "yes_rsvp_count": 1,
                "link": "http://example.com/1"
            },
            { "name": "No time", "link": "http://example.com/2" },
            {
                "name": "Hack night",
                "time": 1471483800000i64,
                "utc_offset": -25200000,
                "yes_rsvp_count": 12,
                "link": "http://example.com/3"
            }
        ])
        .to_string()
    }

    #[tokio::test]
    async fn test_missing_config_makes_no_request() {
        let incomplete = [
            MeetupConfig { host: None, ..config() },
            MeetupConfig { group_name: None, ..config() },
            MeetupConfig { events_path: None, ..config() },
            MeetupConfig::default(),
        ];

        for config in incomplete {
            let transport = RecordingTransport::replying(&events_body());
            let result = api(config, &transport).get_upcoming_events().await;

            assert_eq!(result, Err(MeetupApiError::MissingConfigInfo));
            assert!(transport.requests().is_empty());
        }
    }

    #[tokio::test]
    async fn test_requests_events_endpoint() {
        let transport = RecordingTransport::replying("[]");
        let config = MeetupConfig::new("api.example.com/", "/cocoaheads/", "/events");

        let events = api(config, &transport).get_upcoming_events().await.unwrap();

        assert!(events.is_empty());
        assert_eq!(
            transport.requests(),
            vec!["http://api.example.com/cocoaheads/events".to_string()]
        );
    }

    #[tokio::test]
    async fn test_good_response_skips_malformed_events() {
        let transport = RecordingTransport::replying(&events_body());

        let events = api(config(), &transport).get_upcoming_events().await.unwrap();

        assert_eq!(
            events,
            vec![
                MeetupEvent::new(
                    "Discussion",
                    1470879000000,
                    -25200000,
                    1,
                    "http://example.com/1"
                ),
                MeetupEvent::new(
                    "Hack night",
                    1471483800000,
                    -25200000,
                    12,
                    "http://example.com/3"
                ),
            ]
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_no_response() {
        let transport = RecordingTransport::failing("connection refused");

        let result = api(config(), &transport).get_upcoming_events().await;

        assert_eq!(result, Err(MeetupApiError::NoResponse));
    }

    #[tokio::test]
    async fn test_empty_body_is_no_response() {
        for body in ["", "  \n"] {
            let transport = RecordingTransport::replying(body);
            let result = api(config(), &transport).get_upcoming_events().await;
            assert_eq!(result, Err(MeetupApiError::NoResponse));
        }
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let transport = RecordingTransport::replying("<html>Service Unavailable</html>");

        let result = api(config(), &transport).get_upcoming_events().await;

        assert_eq!(result, Err(MeetupApiError::ResponseInvalidJson));
    }

    #[tokio::test]
    async fn test_not_an_array() {
        let transport =
            RecordingTransport::replying(r#"{"errors":[{"code":"group_error"}]}"#);

        let result = api(config(), &transport).get_upcoming_events().await;

        assert_eq!(result, Err(MeetupApiError::ResponseNotAnArray));
    }

    #[tokio::test]
    async fn test_http_transport_against_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cocoaheads/events"))
            .respond_with(ResponseTemplate::new(200).set_body_string(events_body()))
            .expect(1)
            .mount(&server)
            .await;

        let host = server.uri().trim_start_matches("http://").to_string();
        let config = MeetupConfig::new(host, "cocoaheads", "events");
        let api = MeetupApi::new(config).unwrap();

        let events = api.get_upcoming_events().await.unwrap();

        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Discussion", "Hack night"]);
    }

    #[tokio::test]
    async fn test_http_transport_connection_failure() {
        // Nothing listens on the discard port
        let config = MeetupConfig::new("127.0.0.1:9", "cocoaheads", "events");
        let api = MeetupApi::new(MeetupConfig {
            timeout_secs: Some(2),
            ..config
        })
        .unwrap();

        let result = api.get_upcoming_events().await;

        assert_eq!(result, Err(MeetupApiError::NoResponse));
    }
}
