use crate::core::error::{Error, ErrorKind, Result};

/// Conventional port for ordered-set store endpoints.
pub const DEFAULT_PORT: u16 = 6379;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub host: Option<String>,
    pub port: u16,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            host: None,
            port: DEFAULT_PORT,
        }
    }
}

impl SearchConfig {
    pub fn new(host: &str) -> Self {
        SearchConfig {
            host: Some(host.to_string()),
            port: DEFAULT_PORT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// A store endpoint without a host is rejected before any operation runs.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_none() {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "store host is required".to_string(),
            ));
        }
        Ok(())
    }
}
