use crate::constants::{ATTRIBUTE_NAMESPACE_HTTP, ATTRIBUTE_NAMESPACE_HTTPS};
use crate::error::RegistryError;

registry_enum! {
    /// A slot in the per-exchange attribute store.
    ///
    /// Keys are opaque and compared case-sensitively.
    pub enum AttributeKey {
        /// The parsed header collection of the exchange.
        Headers => ATTRIBUTE_HEADERS,
        /// The negotiated protocol version.
        Version => ATTRIBUTE_VERSION,
        /// The TLS peer certificate chain.
        HttpsClientCertificates => ATTRIBUTE_HTTPS_CLIENT_CERTIFICATES,
        HttpsCipherSuite => ATTRIBUTE_HTTPS_CIPHER_SUITE,
        HttpsKeySize => ATTRIBUTE_HTTPS_KEY_SIZE,
        HttpsSslSessionId => ATTRIBUTE_HTTPS_SSL_SESSION_ID,
    }
}

impl AttributeKey {
    #[inline(always)]
    pub const fn is_tls(&self) -> bool {
        !matches!(self, AttributeKey::Headers | AttributeKey::Version)
    }

    #[inline]
    pub const fn namespace(&self) -> &'static str {
        if self.is_tls() {
            ATTRIBUTE_NAMESPACE_HTTPS
        } else {
            ATTRIBUTE_NAMESPACE_HTTP
        }
    }

    /// The key with its namespace and separating dot removed.
    #[inline]
    pub fn local_name(&self) -> &'static str {
        let key = self.as_str();
        key.strip_prefix(self.namespace())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(key)
    }
}

impl TryFrom<&str> for AttributeKey {
    type Error = RegistryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_exact(s).ok_or_else(|| {
            log::trace!("unknown attribute key: {}", s);
            RegistryError::UnknownAttributeKey(s.to_string())
        })
    }
}
