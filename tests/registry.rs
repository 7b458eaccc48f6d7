use header_registry::constants::{
    ATTRIBUTE_HTTPS_CIPHER_SUITE, EXPECT_CONTINUE, HEADER_CONTENT_TYPE, HEADER_X_FORWARDED_FOR,
};
use header_registry::{
    AttributeKey, CacheDirective, Entry, HeaderName, Namespace, Registry, RegistryError,
};
use proptest::prelude::*;
use std::collections::HashSet;
use std::thread;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_validates() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(Registry::validate(), Ok(()));
    }

    #[test]
    fn test_registry_len() {
        assert_eq!(Registry::entries().count(), Registry::LEN);
        assert_eq!(Registry::LEN, 74);
    }

    #[test]
    fn test_every_value_non_empty() {
        assert!(Registry::entries().all(|e| !e.value.is_empty()));
    }

    #[test]
    fn test_header_values_unique() {
        let values: Vec<&str> = Registry::entries_in(Namespace::HeaderName)
            .map(|e| e.value)
            .collect();
        let unique: HashSet<&str> = values.iter().copied().collect();
        assert_eq!(values.len(), unique.len());
        assert_eq!(values.len(), HeaderName::COUNT);
    }

    #[test]
    fn test_attribute_values_unique() {
        let values: Vec<&str> = Registry::entries_in(Namespace::AttributeKey)
            .map(|e| e.value)
            .collect();
        let unique: HashSet<&str> = values.iter().copied().collect();
        assert_eq!(values.len(), unique.len());
        assert_eq!(values.len(), AttributeKey::COUNT);
    }

    #[test]
    fn test_entry_order_and_expectation() {
        let first = Registry::entries().next().unwrap();
        assert_eq!(first.namespace, Namespace::Expectation);
        assert_eq!(first.symbol, "EXPECT_CONTINUE");
        assert_eq!(first.value, "100-continue");
        assert_eq!(EXPECT_CONTINUE, "100-continue");

        let last = Registry::entries().last().unwrap();
        assert_eq!(last.value, "org.restlet.https.sslSessionId");
    }

    #[test]
    fn test_end_to_end_literals() {
        assert_eq!(ATTRIBUTE_HTTPS_CIPHER_SUITE, "org.restlet.https.cipherSuite");
        assert_eq!(HEADER_X_FORWARDED_FOR, "X-Forwarded-For");
        assert_eq!(HEADER_CONTENT_TYPE, "Content-Type");
    }

    #[test]
    fn test_cross_namespace_collision_is_allowed() {
        let entries = [
            Entry {
                namespace: Namespace::HeaderName,
                symbol: "HEADER_PUBLIC",
                value: "public",
            },
            Entry {
                namespace: Namespace::CacheDirective,
                symbol: "CACHE_PUBLIC",
                value: "public",
            },
            Entry {
                namespace: Namespace::AttributeKey,
                symbol: "ATTRIBUTE_PUBLIC",
                value: "public",
            },
        ];
        assert_eq!(Registry::validate_entries(entries), Ok(()));
    }

    #[test]
    fn test_duplicate_header_is_rejected() {
        let entries = [
            Entry {
                namespace: Namespace::HeaderName,
                symbol: "HEADER_VARY",
                value: "Vary",
            },
            Entry {
                namespace: Namespace::HeaderName,
                symbol: "HEADER_VARY_AGAIN",
                value: "vary",
            },
        ];
        assert_eq!(
            Registry::validate_entries(entries),
            Err(RegistryError::DuplicateValue {
                namespace: Namespace::HeaderName,
                value: "vary".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_attribute_is_rejected() {
        let entries = [
            Entry {
                namespace: Namespace::AttributeKey,
                symbol: "ATTRIBUTE_A",
                value: "org.restlet.http.version",
            },
            Entry {
                namespace: Namespace::AttributeKey,
                symbol: "ATTRIBUTE_B",
                value: "org.restlet.http.version",
            },
        ];
        let err = Registry::validate_entries(entries).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateValue { .. }));
        assert!(!err.is_lookup_failure());
    }

    #[test]
    fn test_duplicate_cache_token_is_allowed() {
        let entries = [
            Entry {
                namespace: Namespace::CacheDirective,
                symbol: "CACHE_A",
                value: "no-cache",
            },
            Entry {
                namespace: Namespace::CacheDirective,
                symbol: "CACHE_B",
                value: "no-cache",
            },
        ];
        assert_eq!(Registry::validate_entries(entries), Ok(()));
    }

    #[test]
    fn test_authoring_errors_are_reported() {
        let empty = [Entry {
            namespace: Namespace::HeaderName,
            symbol: "HEADER_EMPTY",
            value: "",
        }];
        assert_eq!(
            Registry::validate_entries(empty),
            Err(RegistryError::EmptyValue {
                symbol: "HEADER_EMPTY".to_string()
            })
        );

        let uppercase = [Entry {
            namespace: Namespace::CacheDirective,
            symbol: "CACHE_MAX_AGE",
            value: "Max-Age",
        }];
        assert_eq!(
            Registry::validate_entries(uppercase),
            Err(RegistryError::NotLowercase {
                symbol: "CACHE_MAX_AGE".to_string()
            })
        );

        let spaced = [Entry {
            namespace: Namespace::HeaderName,
            symbol: "HEADER_CONTENT_TYPE",
            value: "Content Type",
        }];
        assert_eq!(
            Registry::validate_entries(spaced),
            Err(RegistryError::InvalidToken {
                symbol: "HEADER_CONTENT_TYPE".to_string()
            })
        );
    }

    #[test]
    fn test_reads_are_stable_across_threads() {
        let snapshot: Vec<Entry> = Registry::entries().collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0..100 {
                        let _ = HeaderName::ContentType.as_str();
                        let _ = CacheDirective::MaxAge.as_str();
                    }
                    Registry::entries().collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), snapshot);
        }
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(Namespace::HeaderName.to_string(), "header-name");
        assert_eq!(Namespace::CacheDirective.to_string(), "cache-directive");
        assert!(Namespace::AttributeKey.requires_unique_values());
        assert!(!Namespace::CacheDirective.requires_unique_values());
    }

    proptest! {
        #[test]
        fn prop_interleaved_reads_are_stable(
            first in 0..HeaderName::COUNT,
            others in proptest::collection::vec(0..CacheDirective::COUNT, 0..32),
        ) {
            let header = HeaderName::ALL[first];
            let before = header.as_str();
            for index in others {
                let _ = CacheDirective::ALL[index].as_str();
                let _ = HeaderName::ALL[index % HeaderName::COUNT].as_str();
            }
            prop_assert_eq!(before, header.as_str());
        }

        #[test]
        fn prop_header_lookup_ignores_case(index in 0..HeaderName::COUNT, mask in any::<u64>()) {
            let header = HeaderName::ALL[index];
            let mixed: String = header
                .as_str()
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if mask >> (i % 64) & 1 == 1 {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect();
            prop_assert_eq!(HeaderName::lookup(&mixed), Some(header));
        }

        #[test]
        fn prop_directive_lookup_normalizes(index in 0..CacheDirective::COUNT) {
            let directive = CacheDirective::ALL[index];
            let shouted = directive.as_str().to_ascii_uppercase();
            prop_assert_eq!(CacheDirective::lookup(&shouted), Some(directive));
        }
    }
}
