use crate::constants::{HEADER_TOKEN_CHARS, LIST_SEPARATOR};
use bytes::BytesMut;
use rustc_hash::FxHashMap;

pub trait BufferWriter {
    fn write_to_buffer(&self, buffer: &mut BytesMut);
}

/// Writes `items` as a comma-separated field value, e.g. for `Vary` or `Cache-Control`.
pub fn join_tokens<'a, T, I>(buffer: &mut BytesMut, items: I)
where
    T: BufferWriter + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut first = true;
    for item in items {
        if !first {
            buffer.extend_from_slice(LIST_SEPARATOR);
        }
        item.write_to_buffer(buffer);
        first = false;
    }
}

/// Splits a comma-separated field value, leaving commas inside quoted strings intact.
pub fn split_list(value: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut escaped = false;

    for (i, b) in value.bytes().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if quoted => escaped = true,
            b'"' => quoted = !quoted,
            b',' if !quoted => {
                items.push(value[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(value[start..].trim());

    items.retain(|item| !item.is_empty());
    items
}

#[inline]
pub fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || HEADER_TOKEN_CHARS.contains(ch)
}

#[inline]
pub fn is_token_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

pub(crate) fn build_index<T, F>(items: &[T], key: F) -> FxHashMap<&'static str, T>
where
    T: Copy,
    F: Fn(&T) -> &'static str,
{
    let mut map = FxHashMap::with_capacity_and_hasher(items.len(), Default::default());
    for item in items {
        map.insert(key(item), *item);
    }
    log::debug!("built exact token index with {} entries", map.len());
    map
}

pub(crate) fn build_folded_index<T, F>(items: &[T], key: F) -> FxHashMap<Box<str>, T>
where
    T: Copy,
    F: Fn(&T) -> &'static str,
{
    let mut map = FxHashMap::with_capacity_and_hasher(items.len(), Default::default());
    for item in items {
        map.insert(key(item).to_ascii_lowercase().into_boxed_str(), *item);
    }
    log::debug!("built case-folded token index with {} entries", map.len());
    map
}
