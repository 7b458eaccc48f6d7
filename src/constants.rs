//! Wire literals shared by every header-handling component.
//!
//! Each symbolic key is a distinct constant, so a misspelled key is a
//! compile error rather than an empty string:
//!
//! ```compile_fail
//! use header_registry::constants::HEADER_CONTENT_TYPPE;
//! ```

pub const EXPECT_CONTINUE: &str = "100-continue";

pub const CACHE_NO_CACHE: &str = "no-cache";
pub const CACHE_NO_STORE: &str = "no-store";
pub const CACHE_MAX_AGE: &str = "max-age";
pub const CACHE_MAX_STALE: &str = "max-stale";
pub const CACHE_MIN_FRESH: &str = "min-fresh";
pub const CACHE_NO_TRANSFORM: &str = "no-transform";
pub const CACHE_ONLY_IF_CACHED: &str = "only-if-cached";
pub const CACHE_PUBLIC: &str = "public";
pub const CACHE_PRIVATE: &str = "private";
pub const CACHE_MUST_REVALIDATE: &str = "must-revalidate";
pub const CACHE_PROXY_MUST_REVALIDATE: &str = "proxy-revalidate";
pub const CACHE_SHARED_MAX_AGE: &str = "s-maxage";

pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_ACCEPT_CHARSET: &str = "Accept-Charset";
pub const HEADER_ACCEPT_ENCODING: &str = "Accept-Encoding";
pub const HEADER_ACCEPT_LANGUAGE: &str = "Accept-Language";
pub const HEADER_ACCEPT_RANGES: &str = "Accept-Ranges";
pub const HEADER_AGE: &str = "Age";
pub const HEADER_ALLOW: &str = "Allow";
pub const HEADER_AUTHENTICATION_INFO: &str = "Authentication-Info";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CACHE_CONTROL: &str = "Cache-Control";
pub const HEADER_CONNECTION: &str = "Connection";
pub const HEADER_CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const HEADER_CONTENT_ENCODING: &str = "Content-Encoding";
pub const HEADER_CONTENT_LANGUAGE: &str = "Content-Language";
pub const HEADER_CONTENT_LENGTH: &str = "Content-Length";
pub const HEADER_CONTENT_LOCATION: &str = "Content-Location";
pub const HEADER_CONTENT_MD5: &str = "Content-MD5";
pub const HEADER_CONTENT_RANGE: &str = "Content-Range";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_COOKIE: &str = "Cookie";
pub const HEADER_DATE: &str = "Date";
pub const HEADER_ETAG: &str = "ETag";
pub const HEADER_EXPECT: &str = "Expect";
pub const HEADER_EXPIRES: &str = "Expires";
pub const HEADER_FROM: &str = "From";
pub const HEADER_HOST: &str = "Host";
pub const HEADER_IF_MATCH: &str = "If-Match";
pub const HEADER_IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const HEADER_IF_NONE_MATCH: &str = "If-None-Match";
pub const HEADER_IF_RANGE: &str = "If-Range";
pub const HEADER_IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
pub const HEADER_LAST_MODIFIED: &str = "Last-Modified";
pub const HEADER_LOCATION: &str = "Location";
pub const HEADER_MAX_FORWARDS: &str = "Max-Forwards";
pub const HEADER_PRAGMA: &str = "Pragma";
pub const HEADER_PROXY_AUTHENTICATE: &str = "Proxy-Authenticate";
pub const HEADER_PROXY_AUTHORIZATION: &str = "Proxy-Authorization";
pub const HEADER_RANGE: &str = "Range";
// The misspelling is the registered field name.
pub const HEADER_REFERRER: &str = "Referer";
pub const HEADER_RETRY_AFTER: &str = "Retry-After";
pub const HEADER_SERVER: &str = "Server";
pub const HEADER_SET_COOKIE: &str = "Set-Cookie";
pub const HEADER_SET_COOKIE2: &str = "Set-Cookie2";
pub const HEADER_SLUG: &str = "Slug";
pub const HEADER_TRAILER: &str = "Trailer";
pub const HEADER_TRANSFER_ENCODING: &str = "Transfer-Encoding";
pub const HEADER_TRANSFER_EXTENSION: &str = "TE";
pub const HEADER_UPGRADE: &str = "Upgrade";
pub const HEADER_USER_AGENT: &str = "User-Agent";
pub const HEADER_VARY: &str = "Vary";
pub const HEADER_VIA: &str = "Via";
pub const HEADER_WARNING: &str = "Warning";
pub const HEADER_WWW_AUTHENTICATE: &str = "WWW-Authenticate";
pub const HEADER_X_FORWARDED_FOR: &str = "X-Forwarded-For";
pub const HEADER_X_HTTP_METHOD_OVERRIDE: &str = "X-HTTP-Method-Override";

pub const ATTRIBUTE_HEADERS: &str = "org.restlet.http.headers";
pub const ATTRIBUTE_VERSION: &str = "org.restlet.http.version";
pub const ATTRIBUTE_HTTPS_CLIENT_CERTIFICATES: &str = "org.restlet.https.clientCertificates";
pub const ATTRIBUTE_HTTPS_CIPHER_SUITE: &str = "org.restlet.https.cipherSuite";
pub const ATTRIBUTE_HTTPS_KEY_SIZE: &str = "org.restlet.https.keySize";
pub const ATTRIBUTE_HTTPS_SSL_SESSION_ID: &str = "org.restlet.https.sslSessionId";

pub const ATTRIBUTE_NAMESPACE_HTTP: &str = "org.restlet.http";
pub const ATTRIBUTE_NAMESPACE_HTTPS: &str = "org.restlet.https";

pub(crate) const LIST_SEPARATOR: &[u8] = b", ";
pub(crate) const HEADER_TOKEN_CHARS: &str = "!#$%&'*+-.^_`|~";
