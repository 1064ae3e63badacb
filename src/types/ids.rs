//! Deterministic identities for planned copy work.
//!
//! A [`Guid`] is a content-derived digest identifying one logical copy
//! operation; a retried planning run reproduces the same guid for the same
//! (transform chain, copyable file) pair, across processes and machines.
//! [`plan_id`] derives a UUIDv5 over the ordered guid sequence of a run,
//! used to key emitted facts.
use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::constants::NS_TAG;

use super::errors::{Error, ErrorKind, Result};

/// Content-derived digest identifying one planned copy operation.
///
/// Identical inputs always produce an identical guid; the digest folds ordered
/// byte sequences only, never iteration order of unordered structures or
/// timestamps.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid([u8; Guid::LEN]);

impl Guid {
    /// Digest width in bytes.
    pub const LEN: usize = 32;

    /// Digest an ordered sequence of string parts.
    ///
    /// Each part is hashed on its own and the per-part digests are folded into
    /// an outer digest in order, so part boundaries matter: `["ab"]` and
    /// `["a", "b"]` yield different guids.
    pub fn from_strings<S: AsRef<str>>(parts: impl IntoIterator<Item = S>) -> Self {
        let mut outer = Sha256::new();
        for part in parts {
            outer.update(Sha256::digest(part.as_ref().as_bytes()));
        }
        Self(outer.finalize().into())
    }

    /// Fold more bytes into this guid, producing a new guid seeded with the
    /// current value.
    #[must_use]
    pub fn append(&self, bytes: &[u8]) -> Self {
        let mut outer = Sha256::new();
        outer.update(self.0);
        outer.update(Sha256::digest(bytes));
        Self(outer.finalize().into())
    }

    /// Parse the lowercase hex form produced by `Display`.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != Self::LEN * 2 {
            return Err(Error::new(
                ErrorKind::Serde,
                format!("guid must be {} hex chars, got {}", Self::LEN * 2, s.len()),
            ));
        }
        let mut out = [0u8; Self::LEN];
        for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
            out[i] = hex_val(chunk[0])? << 4 | hex_val(chunk[1])?;
        }
        Ok(Self(out))
    }
}

fn hex_val(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::new(
            ErrorKind::Serde,
            format!("invalid hex character {:?} in guid", c as char),
        )),
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({self})")
    }
}

impl FromStr for Guid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Internal: return the UUID namespace used for deterministic plan ids.
fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Compute a deterministic UUIDv5 for a planning run by folding its work-unit
/// guids in output order.
///
/// Two runs producing identical guid sequences (including ordering) share the
/// same plan id, so re-planning an unchanged source emits facts under the same
/// key.
#[must_use]
pub fn plan_id(guids: &[Guid]) -> Uuid {
    let ns = namespace();
    let mut s = String::new();
    for g in guids {
        s.push_str(&g.to_string());
        s.push('\n');
    }
    Uuid::new_v5(&ns, s.as_bytes())
}
