//! Canonical decimal-string (de)serialization for `BigUint` fields, so JSON
//! test vectors read as plain numbers rather than `num-bigint`'s internal
//! limb representation.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    value.to_str_radix(10).serialize(serializer)
}

#[allow(dead_code)]
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    let s = String::deserialize(deserializer)?;
    BigUint::from_str(&s).map_err(serde::de::Error::custom)
}
