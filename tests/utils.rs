use bytes::BytesMut;
use header_registry::utils::{is_token_char, is_token_string, split_list};
use header_registry::{join_tokens, BufferWriter, CacheDirective, HeaderName};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_buffer() {
        let mut buffer = BytesMut::new();
        HeaderName::CacheControl.write_to_buffer(&mut buffer);
        buffer.extend_from_slice(b": ");
        CacheDirective::NoStore.write_to_buffer(&mut buffer);

        assert_eq!(&buffer[..], b"Cache-Control: no-store");
    }

    #[test]
    fn test_join_tokens() {
        let mut buffer = BytesMut::new();
        join_tokens(
            &mut buffer,
            &[
                CacheDirective::NoCache,
                CacheDirective::NoStore,
                CacheDirective::MustRevalidate,
            ],
        );
        assert_eq!(&buffer[..], b"no-cache, no-store, must-revalidate");

        let mut vary = BytesMut::new();
        join_tokens(&mut vary, &[HeaderName::Accept, HeaderName::AcceptEncoding]);
        assert_eq!(&vary[..], b"Accept, Accept-Encoding");
    }

    #[test]
    fn test_join_tokens_empty() {
        let mut buffer = BytesMut::new();
        let none: [HeaderName; 0] = [];
        join_tokens(&mut buffer, &none);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("gzip, deflate,br"), vec!["gzip", "deflate", "br"]);
        assert_eq!(split_list(" , a,, b ,"), vec!["a", "b"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_split_list_respects_quotes() {
        assert_eq!(split_list("\"a,b\", \"c\""), vec!["\"a,b\"", "\"c\""]);
        assert_eq!(
            split_list("\"say \\\"x, y\\\"\", z"),
            vec!["\"say \\\"x, y\\\"\"", "z"]
        );
    }

    #[test]
    fn test_token_chars() {
        assert!(is_token_char('a'));
        assert!(is_token_char('-'));
        assert!(is_token_char('~'));
        assert!(!is_token_char(' '));
        assert!(!is_token_char(':'));

        assert!(is_token_string("X-HTTP-Method-Override"));
        assert!(!is_token_string(""));
        assert!(!is_token_string("Content Type"));
    }
}
