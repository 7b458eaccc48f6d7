use crate::error::RegistryError;
use serde::Serialize;

registry_enum! {
    /// A `Cache-Control` directive token. Tokens are always lowercase.
    pub enum CacheDirective {
        NoCache => CACHE_NO_CACHE,
        NoStore => CACHE_NO_STORE,
        MaxAge => CACHE_MAX_AGE,
        MaxStale => CACHE_MAX_STALE,
        MinFresh => CACHE_MIN_FRESH,
        NoTransform => CACHE_NO_TRANSFORM,
        OnlyIfCached => CACHE_ONLY_IF_CACHED,
        Public => CACHE_PUBLIC,
        Private => CACHE_PRIVATE,
        MustRevalidate => CACHE_MUST_REVALIDATE,
        ProxyRevalidate => CACHE_PROXY_MUST_REVALIDATE,
        SharedMaxAge => CACHE_SHARED_MAX_AGE,
    }
}

/// Shape of the argument that may follow a directive token after `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveArgument {
    None,
    DeltaSeconds,
    OptionalDeltaSeconds,
    OptionalFieldNames,
}

impl CacheDirective {
    #[inline]
    pub const fn argument(&self) -> DirectiveArgument {
        match self {
            CacheDirective::MaxAge | CacheDirective::MinFresh | CacheDirective::SharedMaxAge => {
                DirectiveArgument::DeltaSeconds
            }
            CacheDirective::MaxStale => DirectiveArgument::OptionalDeltaSeconds,
            CacheDirective::NoCache | CacheDirective::Private => {
                DirectiveArgument::OptionalFieldNames
            }
            _ => DirectiveArgument::None,
        }
    }

    #[inline]
    pub const fn applies_to_request(&self) -> bool {
        matches!(
            self,
            CacheDirective::NoCache
                | CacheDirective::NoStore
                | CacheDirective::MaxAge
                | CacheDirective::MaxStale
                | CacheDirective::MinFresh
                | CacheDirective::NoTransform
                | CacheDirective::OnlyIfCached
        )
    }

    #[inline]
    pub const fn applies_to_response(&self) -> bool {
        !matches!(
            self,
            CacheDirective::MaxStale | CacheDirective::MinFresh | CacheDirective::OnlyIfCached
        )
    }

    pub fn lookup(token: &str) -> Option<Self> {
        Self::from_exact(token).or_else(|| Self::from_exact(&token.to_ascii_lowercase()))
    }
}

impl TryFrom<&str> for CacheDirective {
    type Error = RegistryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::lookup(s).ok_or_else(|| {
            log::trace!("unknown cache directive: {}", s);
            RegistryError::UnknownCacheDirective(s.to_string())
        })
    }
}
