//! Per-client request settings.

use std::time::Duration;

/// Settings applied to every request a `Client` sends.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Whole-request timeout passed to the underlying client. `None` waits
    /// indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Extra headers sent with every request, before per-request ones.
    pub headers: Vec<(String, String)>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: concat!("easyhttp/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: Vec::new(),
        }
    }
}

impl RequestConfig {
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RequestConfig::default();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.user_agent.starts_with("easyhttp/"));
        assert!(config.headers.is_empty());
    }

    #[test]
    fn builder_methods() {
        let config = RequestConfig::default()
            .with_timeout(None)
            .with_user_agent("agent/1")
            .with_header("Accept", "text/html");
        assert_eq!(config.timeout, None);
        assert_eq!(config.user_agent, "agent/1");
        assert_eq!(config.headers, vec![("Accept".to_string(), "text/html".to_string())]);
    }
}
