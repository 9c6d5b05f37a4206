//! Record ids, wall-clock time, and randomness that work in the browser.
//!
//! TRADE-OFFS
//! ==========
//! `rand` is built without OS entropy so it compiles for wasm; generators
//! are seeded from a v4 UUID instead, which draws from `crypto` in the
//! browser and the OS elsewhere.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use rand::SeedableRng;
use rand::rngs::StdRng;
use time::{Date, OffsetDateTime};

#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Fresh generator for password draws.
#[must_use]
pub fn seeded_rng() -> StdRng {
    let mut seed = [0u8; 32];
    seed[..16].copy_from_slice(uuid::Uuid::new_v4().as_bytes());
    seed[16..].copy_from_slice(uuid::Uuid::new_v4().as_bytes());
    StdRng::from_seed(seed)
}

/// Current time in UTC.
#[must_use]
pub fn now() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i128;
        OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

#[must_use]
pub fn today() -> Date {
    now().date()
}
