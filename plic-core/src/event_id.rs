//! Stable, URL-safe event ids for deep links.
//!
//! Ids are derived from title, venue and the start instant only. The event
//! URL is not part of the key: scrapers produce variations of it (www,
//! trailing slashes) across runs.
//!
//! The hash is the 32-bit `h * 31 + c` fold over UTF-16 code units, which
//! keeps links shared from the web calendar resolvable here. It is not
//! collision-free: `resolve` returns the first match.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::event::Event;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A short base-36 event id (`[0-9a-z]+`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(String);

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EventId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        if EventId::is_valid(s) {
            Ok(EventId(s.to_string()))
        } else {
            Err(CoreError::InvalidEventId(s.to_string()))
        }
    }
}

/// Compute the id of an event. Pure: same title, venue and instant, same id.
pub fn identify(event: &Event) -> EventId {
    let key = format!("{}|{}|{}", event.title, event.venue, event.instant_millis());
    let hash = rolling_hash(&key);

    // Widen before abs so i32::MIN maps to 2147483648
    EventId(to_base36(u64::from(hash.unsigned_abs())))
}

/// First event (in iteration order) whose id equals `id`.
pub fn resolve<'a, I>(events: I, id: &EventId) -> Option<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events.into_iter().find(|event| identify(event) == *id)
}

fn rolling_hash(key: &str) -> i32 {
    key.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }

    digits.iter().rev().map(|&d| d as char).collect()
}
