use crate::error::RegistryError;
use crate::utils::build_folded_index;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

registry_enum! {
    /// A header field name known to the engine, rendered with its canonical wire casing.
    pub enum HeaderName {
        Accept => HEADER_ACCEPT,
        AcceptCharset => HEADER_ACCEPT_CHARSET,
        AcceptEncoding => HEADER_ACCEPT_ENCODING,
        AcceptLanguage => HEADER_ACCEPT_LANGUAGE,
        AcceptRanges => HEADER_ACCEPT_RANGES,
        Age => HEADER_AGE,
        Allow => HEADER_ALLOW,
        AuthenticationInfo => HEADER_AUTHENTICATION_INFO,
        Authorization => HEADER_AUTHORIZATION,
        CacheControl => HEADER_CACHE_CONTROL,
        Connection => HEADER_CONNECTION,
        ContentDisposition => HEADER_CONTENT_DISPOSITION,
        ContentEncoding => HEADER_CONTENT_ENCODING,
        ContentLanguage => HEADER_CONTENT_LANGUAGE,
        ContentLength => HEADER_CONTENT_LENGTH,
        ContentLocation => HEADER_CONTENT_LOCATION,
        ContentMd5 => HEADER_CONTENT_MD5,
        ContentRange => HEADER_CONTENT_RANGE,
        ContentType => HEADER_CONTENT_TYPE,
        Cookie => HEADER_COOKIE,
        Date => HEADER_DATE,
        ETag => HEADER_ETAG,
        Expect => HEADER_EXPECT,
        Expires => HEADER_EXPIRES,
        From => HEADER_FROM,
        Host => HEADER_HOST,
        IfMatch => HEADER_IF_MATCH,
        IfModifiedSince => HEADER_IF_MODIFIED_SINCE,
        IfNoneMatch => HEADER_IF_NONE_MATCH,
        IfRange => HEADER_IF_RANGE,
        IfUnmodifiedSince => HEADER_IF_UNMODIFIED_SINCE,
        LastModified => HEADER_LAST_MODIFIED,
        Location => HEADER_LOCATION,
        MaxForwards => HEADER_MAX_FORWARDS,
        Pragma => HEADER_PRAGMA,
        ProxyAuthenticate => HEADER_PROXY_AUTHENTICATE,
        ProxyAuthorization => HEADER_PROXY_AUTHORIZATION,
        Range => HEADER_RANGE,
        Referrer => HEADER_REFERRER,
        RetryAfter => HEADER_RETRY_AFTER,
        Server => HEADER_SERVER,
        SetCookie => HEADER_SET_COOKIE,
        SetCookie2 => HEADER_SET_COOKIE2,
        Slug => HEADER_SLUG,
        Trailer => HEADER_TRAILER,
        TransferEncoding => HEADER_TRANSFER_ENCODING,
        /// `TE`, the transfer codings a client accepts.
        TransferExtension => HEADER_TRANSFER_EXTENSION,
        Upgrade => HEADER_UPGRADE,
        UserAgent => HEADER_USER_AGENT,
        Vary => HEADER_VARY,
        Via => HEADER_VIA,
        Warning => HEADER_WARNING,
        WwwAuthenticate => HEADER_WWW_AUTHENTICATE,
        XForwardedFor => HEADER_X_FORWARDED_FOR,
        XHttpMethodOverride => HEADER_X_HTTP_METHOD_OVERRIDE,
    }
}

impl HeaderName {
    #[inline]
    pub const fn is_hop_by_hop(&self) -> bool {
        matches!(
            self,
            HeaderName::Connection
                | HeaderName::ProxyAuthenticate
                | HeaderName::ProxyAuthorization
                | HeaderName::TransferExtension
                | HeaderName::Trailer
                | HeaderName::TransferEncoding
                | HeaderName::Upgrade
        )
    }

    /// Whether several field values may be folded into one comma-separated line.
    #[inline]
    pub const fn is_list_valued(&self) -> bool {
        matches!(
            self,
            HeaderName::Accept
                | HeaderName::AcceptCharset
                | HeaderName::AcceptEncoding
                | HeaderName::AcceptLanguage
                | HeaderName::AcceptRanges
                | HeaderName::Allow
                | HeaderName::CacheControl
                | HeaderName::Connection
                | HeaderName::ContentEncoding
                | HeaderName::ContentLanguage
                | HeaderName::Expect
                | HeaderName::IfMatch
                | HeaderName::IfNoneMatch
                | HeaderName::Pragma
                | HeaderName::ProxyAuthenticate
                | HeaderName::TransferExtension
                | HeaderName::Trailer
                | HeaderName::TransferEncoding
                | HeaderName::Upgrade
                | HeaderName::Vary
                | HeaderName::Via
                | HeaderName::Warning
                | HeaderName::WwwAuthenticate
                | HeaderName::XForwardedFor
        )
    }

    /// List-valued headers whose members can be separated without parsing.
    /// Challenge headers carry comma-separated auth-params inside each member.
    #[inline]
    pub const fn is_splittable(&self) -> bool {
        self.is_list_valued()
            && !matches!(
                self,
                HeaderName::WwwAuthenticate | HeaderName::ProxyAuthenticate
            )
    }

    #[inline]
    pub const fn is_conditional(&self) -> bool {
        matches!(
            self,
            HeaderName::IfMatch
                | HeaderName::IfModifiedSince
                | HeaderName::IfNoneMatch
                | HeaderName::IfRange
                | HeaderName::IfUnmodifiedSince
        )
    }

    pub fn lookup(name: &str) -> Option<Self> {
        static FOLDED: OnceLock<FxHashMap<Box<str>, HeaderName>> = OnceLock::new();

        Self::from_exact(name).or_else(|| {
            FOLDED
                .get_or_init(|| build_folded_index(Self::ALL, Self::as_str))
                .get(name.to_ascii_lowercase().as_str())
                .copied()
        })
    }

    #[cfg(feature = "actix")]
    pub fn to_actix(&self) -> Result<actix_web::http::header::HeaderName, RegistryError> {
        actix_web::http::header::HeaderName::from_bytes(self.as_str().as_bytes())
            .map_err(|_| RegistryError::InvalidHeaderName(self.as_str().to_string()))
    }
}

impl TryFrom<&str> for HeaderName {
    type Error = RegistryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::lookup(s).ok_or_else(|| {
            log::trace!("unknown header name: {}", s);
            RegistryError::UnknownHeaderName(s.to_string())
        })
    }
}
