// RGW Admin Ops Rust Library
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bucket records returned by the admin `bucket` resource
//!
//! A listing is a JSON array of objects like
//!
//! ```json
//! {
//!   "bucket": "foo",
//!   "num_shards": 1,
//!   "tenant": "",
//!   "zonegroup": "",
//!   "placement_rule": "default",
//!   "explicit_placement": {"data_pool": "", "data_extra_pool": "", "index_pool": ""},
//!   "id": "foo.1681284188914692706",
//!   "marker": "foo.1681284188914692706",
//!   "index_type": "Normal",
//!   "owner": "testid",
//!   "ver": "",
//!   "master_ver": "",
//!   "mtime": "0.000000",
//!   "creation_time": "2023-04-12T07:23:08.914692Z",
//!   "max_marker": "",
//!   "usage": {},
//!   "bucket_quota": {"enabled": false, "check_on_raw": false, "max_size": -1,
//!                    "max_size_kb": 0, "max_objects": -1}
//! }
//! ```
//!
//! Only `bucket` is required. When stats are disabled RGW returns bare names
//! instead of objects; those decode into a [`Bucket`] with only the name set.

use crate::adminops::utils::{UtcTime, from_epoch_str, parse_timestamp};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A storage bucket as reported by the admin API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Bucket name; never empty once decoded.
    pub bucket: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_shards: u32,
    /// Owning tenant; empty when the bucket lives in the default tenant.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenant: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zonegroup: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub placement_rule: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explicit_placement: ExplicitPlacement,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marker: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub index_type: BucketIndexType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ver: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub master_ver: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub mtime: Option<UtcTime>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub creation_time: Option<UtcTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_marker: String,
    /// Usage per category, e.g. `rgw.main`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub usage: BTreeMap<String, UsageStats>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bucket_quota: BucketQuota,
}

impl Bucket {
    /// Bucket carrying only its name, as returned by a names-only listing.
    pub fn with_name(name: impl Into<String>) -> Self {
        Bucket {
            bucket: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.bucket
    }

    pub fn has_tenant(&self) -> bool {
        !self.tenant.is_empty()
    }

    /// Name in `tenant/bucket` form, or the plain name without a tenant.
    pub fn qualified_name(&self) -> String {
        if self.has_tenant() {
            format!("{}/{}", self.tenant, self.bucket)
        } else {
            self.bucket.clone()
        }
    }

    /// Sum of object counts over all usage categories.
    pub fn num_objects(&self) -> u64 {
        self.usage.values().map(|u| u.num_objects).sum()
    }

    /// Sum of logical sizes over all usage categories.
    pub fn size(&self) -> u64 {
        self.usage.values().map(|u| u.size).sum()
    }
}

/// Pools pinned explicitly for a bucket; empty strings mean unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitPlacement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_pool: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_extra_pool: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub index_pool: String,
}

impl ExplicitPlacement {
    pub fn is_empty(&self) -> bool {
        self.data_pool.is_empty() && self.data_extra_pool.is_empty() && self.index_pool.is_empty()
    }
}

/// Bucket index layout. Unknown values are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BucketIndexType {
    #[default]
    Normal,
    Indexless,
    Other(String),
}

impl From<String> for BucketIndexType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Normal" => BucketIndexType::Normal,
            "Indexless" => BucketIndexType::Indexless,
            _ => BucketIndexType::Other(s),
        }
    }
}

impl From<BucketIndexType> for String {
    fn from(t: BucketIndexType) -> Self {
        match t {
            BucketIndexType::Normal => "Normal".into(),
            BucketIndexType::Indexless => "Indexless".into(),
            BucketIndexType::Other(s) => s,
        }
    }
}

impl fmt::Display for BucketIndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketIndexType::Normal => f.write_str("Normal"),
            BucketIndexType::Indexless => f.write_str("Indexless"),
            BucketIndexType::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageStats {
    pub size: u64,
    pub size_actual: u64,
    pub size_utilized: u64,
    pub size_kb: u64,
    pub size_kb_actual: u64,
    pub size_kb_utilized: u64,
    pub num_objects: u64,
}

/// Bucket quota. Negative limits mean unlimited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketQuota {
    pub enabled: bool,
    pub check_on_raw: bool,
    pub max_size: i64,
    pub max_size_kb: i64,
    pub max_objects: i64,
}

impl Default for BucketQuota {
    fn default() -> Self {
        Self {
            enabled: false,
            check_on_raw: false,
            max_size: -1,
            max_size_kb: 0,
            max_objects: -1,
        }
    }
}

impl BucketQuota {
    /// Size limit in bytes, `None` when unlimited.
    pub fn max_size_limit(&self) -> Option<u64> {
        u64::try_from(self.max_size).ok()
    }

    /// Object count limit, `None` when unlimited.
    pub fn max_objects_limit(&self) -> Option<u64> {
        u64::try_from(self.max_objects).ok()
    }
}

/// Decodes an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Number(f64),
}

/// Accepts RFC 3339 strings, epoch seconds as string or number, empty and null.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<UtcTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawTimestamp::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawTimestamp::Text(s)) => parse_timestamp(&s).map(Some).map_err(D::Error::custom),
        Some(RawTimestamp::Number(n)) => from_epoch_str(&format!("{n:.6}"))
            .map(Some)
            .map_err(D::Error::custom),
    }
}

/// Failure to decode a bucket document.
#[derive(Error, Debug)]
pub enum BucketDecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bucket entry {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("bucket entry {index}: expected an object or a name, found {found}")]
    UnexpectedEntry { index: usize, found: &'static str },

    #[error("bucket entry {index}: bucket name is empty")]
    EmptyEntryName { index: usize },

    #[error("bucket name is empty")]
    EmptyName,
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Decodes a bucket listing, preserving response order.
///
/// An empty or whitespace-only body is an empty listing.
pub fn decode_bucket_list(body: &[u8]) -> Result<Vec<Bucket>, BucketDecodeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let entries: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let mut buckets = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let bucket = match entry {
            serde_json::Value::String(name) => Bucket::with_name(name),
            entry @ serde_json::Value::Object(_) => serde_json::from_value::<Bucket>(entry)
                .map_err(|source| BucketDecodeError::Entry { index, source })?,
            other => {
                return Err(BucketDecodeError::UnexpectedEntry {
                    index,
                    found: json_type_name(&other),
                });
            }
        };
        if bucket.bucket.is_empty() {
            return Err(BucketDecodeError::EmptyEntryName { index });
        }
        buckets.push(bucket);
    }
    Ok(buckets)
}

/// Decodes a single bucket object.
pub fn decode_bucket(body: &[u8]) -> Result<Bucket, BucketDecodeError> {
    let bucket: Bucket = serde_json::from_slice(body)?;
    if bucket.bucket.is_empty() {
        return Err(BucketDecodeError::EmptyName);
    }
    Ok(bucket)
}
