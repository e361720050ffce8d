use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier type of an aggregate
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// String form used in URLs and list keys
    fn as_string(&self) -> String;

    /// Parse the string form back
    fn from_string(s: &str) -> Result<Self, String>;
}
