//! Core value types: account addresses, evidence references, geolocation.

use std::fmt;
use std::str::FromStr;

use hex::{decode as hex_decode, encode as hex_encode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Sha3_512};

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Address is 20 bytes (first 20 bytes of SHA3-512(pubkey)).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub fn from_bytes(b: [u8; 20]) -> Self {
        Address(b)
    }

    /// Derives an address from a public key: first 20 bytes of SHA3-512.
    pub fn from_pubkey(pubkey: &[u8]) -> Self {
        let digest = Sha3_512::digest(pubkey);
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&digest[..20]);
        Address(arr)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex_decode(s).map_err(|e| format!("invalid hex: {}", e))?;
        if bytes.len() != 20 {
            return Err(format!("invalid address length: {}", bytes.len()));
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Address(arr))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address").field(&self.to_hex()).finish()
    }
}

impl FromStr for Address {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex(s)
    }
}

/* --- serde serialize/deserialize for Address as hex string --- */
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Opaque content reference produced by the external content-addressed store.
///
/// The ledger never interprets the string; it only distinguishes empty from
/// non-empty. Empty references are rejected at submission boundaries.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceRef(pub String);

impl EvidenceRef {
    pub fn new(s: impl Into<String>) -> Self {
        EvidenceRef(s.into())
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EvidenceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for EvidenceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EvidenceRef").field(&self.0).finish()
    }
}

impl From<&str> for EvidenceRef {
    fn from(s: &str) -> Self {
        EvidenceRef(s.to_string())
    }
}

/// Geographic point, latitude/longitude scaled by 1e6 into signed integers.
///
/// Fixed-point keeps the type `Eq` and serde-stable; the ledger never does
/// arithmetic on coordinates, it only records them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude * 1e6.
    pub lat_e6: i64,
    /// Longitude * 1e6.
    pub lon_e6: i64,
}

impl GeoPoint {
    pub fn new(lat_e6: i64, lon_e6: i64) -> Self {
        GeoPoint { lat_e6, lon_e6 }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
