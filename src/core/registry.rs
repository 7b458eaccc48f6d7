use crate::constants::EXPECT_CONTINUE;
use crate::core::{AttributeKey, CacheDirective, HeaderName};
use crate::error::RegistryError;
use crate::utils::is_token_string;
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Namespace {
    Expectation,
    HeaderName,
    CacheDirective,
    AttributeKey,
}

impl Namespace {
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Namespace::Expectation => "expectation",
            Namespace::HeaderName => "header-name",
            Namespace::CacheDirective => "cache-directive",
            Namespace::AttributeKey => "attribute-key",
        }
    }

    #[inline]
    pub const fn requires_unique_values(&self) -> bool {
        matches!(self, Namespace::HeaderName | Namespace::AttributeKey)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    pub namespace: Namespace,
    pub symbol: &'static str,
    pub value: &'static str,
}

impl Entry {
    #[inline]
    const fn new(namespace: Namespace, symbol: &'static str, value: &'static str) -> Self {
        Self {
            namespace,
            symbol,
            value,
        }
    }
}

/// Catalogue over every registered token, in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    pub const LEN: usize = 1 + HeaderName::COUNT + CacheDirective::COUNT + AttributeKey::COUNT;

    pub fn entries() -> impl Iterator<Item = Entry> {
        let expectation = std::iter::once(Entry::new(
            Namespace::Expectation,
            "EXPECT_CONTINUE",
            EXPECT_CONTINUE,
        ));
        let headers = HeaderName::ALL
            .iter()
            .map(|h| Entry::new(Namespace::HeaderName, h.symbol(), h.as_str()));
        let directives = CacheDirective::ALL
            .iter()
            .map(|d| Entry::new(Namespace::CacheDirective, d.symbol(), d.as_str()));
        let attributes = AttributeKey::ALL
            .iter()
            .map(|a| Entry::new(Namespace::AttributeKey, a.symbol(), a.as_str()));

        expectation.chain(headers).chain(directives).chain(attributes)
    }

    pub fn entries_in(namespace: Namespace) -> impl Iterator<Item = Entry> {
        Self::entries().filter(move |e| e.namespace == namespace)
    }

    pub fn validate() -> Result<(), RegistryError> {
        Self::validate_entries(Self::entries())
    }

    pub fn validate_entries<I>(entries: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut seen: FxHashSet<(Namespace, String)> = FxHashSet::default();

        for entry in entries {
            if entry.value.is_empty() {
                return Err(RegistryError::EmptyValue {
                    symbol: entry.symbol.to_string(),
                });
            }

            match entry.namespace {
                Namespace::HeaderName if !is_token_string(entry.value) => {
                    return Err(RegistryError::InvalidToken {
                        symbol: entry.symbol.to_string(),
                    });
                }
                Namespace::CacheDirective => {
                    if !is_token_string(entry.value) {
                        return Err(RegistryError::InvalidToken {
                            symbol: entry.symbol.to_string(),
                        });
                    }
                    if entry.value.bytes().any(|b| b.is_ascii_uppercase()) {
                        return Err(RegistryError::NotLowercase {
                            symbol: entry.symbol.to_string(),
                        });
                    }
                }
                _ => {}
            }

            if entry.namespace.requires_unique_values() {
                // Field names compare case-insensitively on the wire.
                let key = match entry.namespace {
                    Namespace::HeaderName => entry.value.to_ascii_lowercase(),
                    _ => entry.value.to_string(),
                };
                if seen.insert((entry.namespace, key)) {
                    continue;
                }

                return Err(RegistryError::DuplicateValue {
                    namespace: entry.namespace,
                    value: entry.value.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Serialize for Registry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(Self::entries())
    }
}
