// Generates a closed namespace enum whose variants map one-to-one onto
// `crate::constants` literals.
macro_rules! registry_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:ident,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
            pub const COUNT: usize = Self::ALL.len();

            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $crate::constants::$value,)+
                }
            }

            #[inline]
            pub const fn symbol(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($value),)+
                }
            }

            pub fn from_exact(value: &str) -> Option<Self> {
                static INDEX: ::std::sync::OnceLock<::rustc_hash::FxHashMap<&'static str, $name>> =
                    ::std::sync::OnceLock::new();
                INDEX
                    .get_or_init(|| $crate::utils::build_index(Self::ALL, Self::as_str))
                    .get(value)
                    .copied()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<$name> for &'static str {
            #[inline]
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::RegistryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::try_from(value.as_str()).map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::utils::BufferWriter for $name {
            #[inline]
            fn write_to_buffer(&self, buffer: &mut ::bytes::BytesMut) {
                buffer.extend_from_slice(self.as_str().as_bytes());
            }
        }
    };
}
