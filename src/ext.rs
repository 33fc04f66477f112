//! Standard library extensions.

use std::time::Duration;

use anyhow::anyhow;

use crate::alias::JsonValue;

// -----------------------------------------------------------------------------
// Macros
// -----------------------------------------------------------------------------

/// Generates [`From`] implementation for a [newtype](https://doc.rust-lang.org/rust-by-example/generics/new_types.html) that delegates to the inner type [`From`].
#[macro_export]
macro_rules! gen_newtype_from {
    (self = $type:ty, other = $($source:ty),+) => {
        $(
            impl From<$source> for $type {
                fn from(value: $source) -> Self {
                    Self(value.into())
                }
            }
        )+
    };
}

/// Generates unit test that checks implementation of [`Serialize`](serde::Serialize) and [`Deserialize`](serde::Deserialize) are compatible.
#[macro_export]
macro_rules! gen_test_serde {
    ($type:ty) => {
        paste::paste! {
            #[test]
            pub fn [<serde_ $type:snake>]() {
                let value = <fake::Faker as fake::Fake>::fake::<$type>(&fake::Faker);
                let json = serde_json::to_string(&value).unwrap();
                assert_eq!(serde_json::from_str::<$type>(&json).unwrap(), value);
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Result
// -----------------------------------------------------------------------------

/// Extensions for `Result<T, E>` that are known to never fail.
pub trait InfallibleExt<T> {
    /// Unwraps a result that can never be an error.
    fn expect_infallible(self) -> T;
}

impl<T, E> InfallibleExt<T> for Result<T, E>
where
    E: std::fmt::Debug,
{
    #[allow(clippy::expect_used)]
    fn expect_infallible(self) -> T {
        if let Err(ref e) = self {
            tracing::error!(reason = ?e, "expected infallible operation");
        }
        self.expect("infallible operation")
    }
}

// -----------------------------------------------------------------------------
// Display
// -----------------------------------------------------------------------------

/// Alternative `Display` implementations for external types.
pub trait DisplayExt {
    fn to_string_ext(&self) -> String;
}

impl DisplayExt for Duration {
    fn to_string_ext(&self) -> String {
        humantime::Duration::from(*self).to_string()
    }
}

// -----------------------------------------------------------------------------
// Standalone functions
// -----------------------------------------------------------------------------

/// `not(something)` instead of `!something`.
#[inline(always)]
pub fn not(value: bool) -> bool {
    !value
}

/// Parses a duration from a bare number of seconds (`15`, `2.5`) or a humantime string (`500ms`, `1m`).
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();

    // bare seconds
    if let Ok(seconds) = s.parse::<f64>() {
        if not(seconds.is_finite()) || seconds < 0.0 {
            return Err(anyhow!("duration must be a non-negative number of seconds, got \"{}\"", s));
        }
        return match Duration::try_from_secs_f64(seconds) {
            Ok(duration) => Ok(duration),
            Err(e) => Err(anyhow!("duration out of range \"{}\": {}", s, e)),
        };
    }

    // humantime
    match humantime::parse_duration(s) {
        Ok(duration) => Ok(duration),
        Err(e) => Err(anyhow!("invalid duration \"{}\": {}", s, e)),
    }
}

/// Serializes any value into a [`JsonValue`].
pub fn to_json_value<V: serde::Serialize>(value: V) -> JsonValue {
    serde_json::to_value(value).expect_infallible()
}

/// Serializes any value into an indented JSON string.
pub fn to_json_string_pretty<V: serde::Serialize>(value: &V) -> String {
    serde_json::to_string_pretty(value).expect_infallible()
}
