use crate::core::Namespace;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown header name: {0}")]
    UnknownHeaderName(String),

    #[error("Unknown cache directive: {0}")]
    UnknownCacheDirective(String),

    #[error("Unknown attribute key: {0}")]
    UnknownAttributeKey(String),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("Empty value registered for {symbol}")]
    EmptyValue { symbol: String },

    #[error("Duplicate {namespace} value: {value}")]
    DuplicateValue { namespace: Namespace, value: String },

    #[error("Cache directive {symbol} is not lowercase")]
    NotLowercase { symbol: String },

    #[error("Value of {symbol} is not a valid HTTP token")]
    InvalidToken { symbol: String },
}

impl RegistryError {
    #[inline]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::UnknownHeaderName(_)
                | Self::UnknownCacheDirective(_)
                | Self::UnknownAttributeKey(_)
                | Self::InvalidHeaderName(_)
        )
    }
}

#[cfg(feature = "actix")]
impl actix_web::ResponseError for RegistryError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            Self::UnknownHeaderName(_)
            | Self::UnknownCacheDirective(_)
            | Self::UnknownAttributeKey(_)
            | Self::InvalidHeaderName(_) => StatusCode::BAD_REQUEST,

            Self::EmptyValue { .. }
            | Self::DuplicateValue { .. }
            | Self::NotLowercase { .. }
            | Self::InvalidToken { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
