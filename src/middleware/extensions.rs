use crate::constants::EXPECT_CONTINUE;
use crate::core::header::HeaderName;
use crate::utils::split_list;
use actix_web::HttpMessage;

pub trait HeaderExtensions {
    fn registry_header(&self, name: HeaderName) -> Option<&str>;
    fn registry_header_values(&self, name: HeaderName) -> Vec<&str>;
    fn has_registry_header(&self, name: HeaderName) -> bool;
    fn expects_continue(&self) -> bool;
}

impl<T> HeaderExtensions for T
where
    T: HttpMessage,
{
    fn registry_header(&self, name: HeaderName) -> Option<&str> {
        self.headers().get(name.as_str())?.to_str().ok()
    }

    fn registry_header_values(&self, name: HeaderName) -> Vec<&str> {
        let values = self
            .headers()
            .get_all(name.as_str())
            .filter_map(|value| value.to_str().ok());

        if name.is_splittable() {
            values.flat_map(split_list).collect()
        } else {
            values.collect()
        }
    }

    fn has_registry_header(&self, name: HeaderName) -> bool {
        self.headers().contains_key(name.as_str())
    }

    fn expects_continue(&self) -> bool {
        self.registry_header_values(HeaderName::Expect)
            .iter()
            .any(|value| value.eq_ignore_ascii_case(EXPECT_CONTINUE))
    }
}
