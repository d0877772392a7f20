//! Snowflake ID - time-ordered 64-bit identifier
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`Snowflake::EPOCH`]
//! - Bits 21-12: worker id
//! - Bits 11-0:  per-millisecond sequence

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const TIMESTAMP_SHIFT: u32 = 22;
const WORKER_SHIFT: u32 = 12;
const SEQUENCE_MASK: i64 = 0xFFF;

/// Identifier for users, questions, answers and votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2024-06-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_717_200_000_000;

    /// Largest accepted worker id
    pub const MAX_WORKER_ID: u16 = 0x3FF;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Zero is never issued by the generator and is rejected on input
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Milliseconds since the Unix epoch at which this id was issued
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> TIMESTAMP_SHIFT) + Self::EPOCH
    }

    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> WORKER_SHIFT) & i64::from(Self::MAX_WORKER_ID)) as u16
    }

    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.trim()
            .parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Strings on the wire: ids exceed the 53-bit range of JavaScript numbers
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal id as string or integer")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Snowflake, E> {
                Ok(Snowflake(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Snowflake, E> {
                i64::try_from(value)
                    .map(Snowflake)
                    .map_err(|_| E::custom("id out of range"))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Snowflake, E> {
                Snowflake::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

/// Lock-free Snowflake generator
///
/// The last issued id is kept in a single atomic and advanced with a CAS
/// loop, so ids from one generator are strictly increasing even if the wall
/// clock steps backwards. When a millisecond's sequence space runs out the
/// generator borrows the next millisecond.
pub struct SnowflakeGenerator {
    worker_bits: i64,
    last: AtomicI64,
}

impl SnowflakeGenerator {
    /// # Panics
    /// Panics if `worker_id` exceeds [`Snowflake::MAX_WORKER_ID`]
    pub fn new(worker_id: u16) -> Self {
        assert!(
            worker_id <= Snowflake::MAX_WORKER_ID,
            "worker id must be <= {}",
            Snowflake::MAX_WORKER_ID
        );
        Self {
            worker_bits: i64::from(worker_id) << WORKER_SHIFT,
            last: AtomicI64::new(0),
        }
    }

    pub fn generate(&self) -> Snowflake {
        let mut last = self.last.load(Ordering::Acquire);
        loop {
            let now = (current_millis() - Snowflake::EPOCH).max(1);
            let last_ts = last >> TIMESTAMP_SHIFT;

            let next = if now > last_ts {
                (now << TIMESTAMP_SHIFT) | self.worker_bits
            } else {
                let sequence = (last & SEQUENCE_MASK) + 1;
                if sequence > SEQUENCE_MASK {
                    ((last_ts + 1) << TIMESTAMP_SHIFT) | self.worker_bits
                } else {
                    (last_ts << TIMESTAMP_SHIFT) | self.worker_bits | sequence
                }
            };

            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return Snowflake(next),
                Err(actual) => last = actual,
            }
        }
    }

    pub fn worker_id(&self) -> u16 {
        (self.worker_bits >> WORKER_SHIFT) as u16
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_parse_and_display() {
        let sf = Snowflake::parse("123456789").unwrap();
        assert_eq!(sf.into_inner(), 123_456_789);
        assert_eq!(sf.to_string(), "123456789");
        assert!(Snowflake::parse("abc").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Snowflake::new(987_654_321_012_345_678)).unwrap();
        assert_eq!(json, "\"987654321012345678\"");
    }

    #[test]
    fn test_deserializes_string_or_number() {
        let a: Snowflake = serde_json::from_str("\"42\"").unwrap();
        let b: Snowflake = serde_json::from_str("42").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<Snowflake>("\"4x2\"").is_err());
        assert!(serde_json::from_str::<Snowflake>("true").is_err());
    }

    #[test]
    fn test_generated_ids_increase() {
        let gen = SnowflakeGenerator::new(3);
        let mut last = Snowflake::default();
        for _ in 0..10_000 {
            let id = gen.generate();
            assert!(id > last);
            assert!(!id.is_zero());
            assert_eq!(id.worker_id(), 3);
            last = id;
        }
    }

    #[test]
    fn test_generator_is_unique_across_threads() {
        let gen = Arc::new(SnowflakeGenerator::new(1));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gen = Arc::clone(&gen);
                thread::spawn(move || (0..2_000).map(|_| gen.generate()).collect::<Vec<_>>())
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(ids.len(), 8_000);
    }

    #[test]
    fn test_timestamp_close_to_now() {
        let id = SnowflakeGenerator::default().generate();
        let drift = (id.timestamp() - current_millis()).abs();
        assert!(drift < 5_000, "timestamp drift {drift}ms");
    }

    #[test]
    #[should_panic(expected = "worker id must be")]
    fn test_worker_id_out_of_range() {
        SnowflakeGenerator::new(1024);
    }
}
