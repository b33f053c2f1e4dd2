use serde::Deserialize;
use std::time::Duration;

/// Settings needed to reach the group's events endpoint.
///
/// Deserialized from the `meetup` settings file; every field may be absent.
/// A missing host, group name or events path is reported when the endpoint
/// is requested, not when the settings are loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MeetupConfig {
    /// URL scheme, `http` when not configured
    #[serde(default)]
    pub scheme: Option<String>,

    /// API hostname
    #[serde(default)]
    pub host: Option<String>,

    /// The group's URL segment; what Meetup calls `:urlname`
    #[serde(default, rename = "group-name", alias = "group_name")]
    pub group_name: Option<String>,

    /// API path for fetching all events of a group
    #[serde(default, rename = "events-path", alias = "events_path")]
    pub events_path: Option<String>,

    /// Request timeout for the API call; the HTTP client's default if unset
    /// or zero
    #[serde(default, rename = "timeout-secs", alias = "timeout_secs")]
    pub timeout_secs: Option<u64>,
}

const DEFAULT_SCHEME: &str = "http";

impl MeetupConfig {
    pub fn new(
        host: impl Into<String>,
        group_name: impl Into<String>,
        events_path: impl Into<String>,
    ) -> Self {
        Self {
            host: Some(host.into()),
            group_name: Some(group_name.into()),
            events_path: Some(events_path.into()),
            ..Self::default()
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn scheme(&self) -> &str {
        present(&self.scheme)
            .map(|s| s.trim_end_matches("://"))
            .unwrap_or(DEFAULT_SCHEME)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Layer `other` on top of these settings: every value `other` sets wins.
    pub fn overridden_by(self, other: MeetupConfig) -> Self {
        Self {
            scheme: other.scheme.or(self.scheme),
            host: other.host.or(self.host),
            group_name: other.group_name.or(self.group_name),
            events_path: other.events_path.or(self.events_path),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Base URL for any group endpoint: scheme, host and group name.
    /// `None` if any of that is unavailable.
    pub fn group_url(&self) -> Option<String> {
        let host = present(&self.host)?;
        let group_name = present(&self.group_name)?;

        let mut url = format!("{}://", self.scheme());
        push_segment(&mut url, host);
        push_segment(&mut url, group_name);
        Some(url)
    }

    /// Endpoint listing the group's upcoming events.
    pub fn events_endpoint(&self) -> Option<String> {
        let mut url = self.group_url()?;
        push_segment(&mut url, present(&self.events_path)?);
        Some(url)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Append `segment` so that exactly one `/` separates it from what is
/// already in `url`.
fn push_segment(url: &mut String, segment: &str) {
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(segment.trim_matches('/'));
}
