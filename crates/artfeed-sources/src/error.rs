use thiserror::Error;

use crate::backend::Backend;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{backend} is not configured: {missing} is not set")]
    NotConfigured {
        backend: Backend,
        missing: &'static str,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`SourceError`], handed to observers so they
/// can filter without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials or base URL missing or unusable; no request was sent.
    Configuration,
    /// The request never produced a response (DNS, connect, timeout, TLS).
    Transport,
    /// The backend answered with a non-2xx status.
    Status,
    /// The response body was not the expected JSON shape.
    Decode,
}

impl SourceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConfigured { .. } | Self::InvalidBaseUrl { .. } => ErrorKind::Configuration,
            Self::Http(_) => ErrorKind::Transport,
            Self::UnexpectedStatus { .. } => ErrorKind::Status,
            Self::Deserialize { .. } => ErrorKind::Decode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classifies_configuration_errors() {
        let err = SourceError::NotConfigured {
            backend: Backend::WooCommerce,
            missing: "WOOCOMMERCE_KEY",
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.to_string(),
            "woocommerce is not configured: WOOCOMMERCE_KEY is not set"
        );
    }

    #[test]
    fn kind_classifies_status_errors() {
        let err = SourceError::UnexpectedStatus {
            status: 503,
            url: "https://hub.example.com/rest/v1/products".to_owned(),
        };
        assert_eq!(err.kind(), ErrorKind::Status);
    }

    #[test]
    fn kind_classifies_decode_errors() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = SourceError::Deserialize {
            context: "products".to_owned(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
