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

//! Various utility and helper functions

use chrono::{DateTime, NaiveDateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::adminops::error::ValidationErr;
use crate::adminops::multimap_ext::Multimap;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// SHA256 of an empty payload; every admin ops read is a bodiless GET.
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Characters left alone by SigV4 URI encoding: `A-Z a-z 0-9 - _ . ~`
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a query key or value the way SigV4 canonicalization expects.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ENCODE_SET).to_string()
}

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timestamp '{0}'")]
pub struct TimestampError(pub String);

/// Parses epoch seconds with an optional fraction, e.g. `"1681284188.914692"`.
///
/// The fraction is truncated to nanoseconds.
pub fn from_epoch_str(s: &str) -> Result<UtcTime, TimestampError> {
    let err = || TimestampError(s.to_string());
    let (secs, frac) = match s.split_once('.') {
        Some((secs, frac)) => (secs, frac),
        None => (s, ""),
    };
    if secs.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }

    let negative = s.starts_with('-');
    let secs: i64 = secs.parse().map_err(|_| err())?;

    let mut nanos: u32 = 0;
    for (i, b) in frac.bytes().take(9).enumerate() {
        nanos += u32::from(b - b'0') * 10u32.pow(8 - i as u32);
    }
    // The fraction extends away from zero, e.g. "-1.5" is 1.5s before the epoch.
    if negative && nanos > 0 {
        let secs = secs.checked_sub(1).ok_or_else(err)?;
        return DateTime::from_timestamp(secs, 1_000_000_000 - nanos).ok_or_else(err);
    }
    DateTime::from_timestamp(secs, nanos).ok_or_else(err)
}

/// Parses the timestamp formats RGW emits: RFC 3339 (`2023-04-12T07:23:08.914692Z`),
/// the space separated variant (`2023-04-12 07:23:08.914692Z`) and epoch seconds.
pub fn parse_timestamp(s: &str) -> Result<UtcTime, TimestampError> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(t, Utc));
        }
    }
    from_epoch_str(s)
}

/// Validates a bucket name passed to a read operation.
///
/// RGW accepts legacy names, so only structural problems are rejected.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    let reason = if bucket_name.trim().is_empty() {
        "bucket name cannot be empty"
    } else if bucket_name.len() > 255 {
        "bucket name cannot be longer than 255 characters"
    } else if bucket_name.contains(['?', '&', '#']) {
        "bucket name contains reserved characters"
    } else {
        return Ok(());
    };

    Err(ValidationErr::InvalidBucketName {
        name: bucket_name.to_string(),
        reason: reason.into(),
    })
}

/// Rejects caller supplied query parameters that would duplicate `reserved` keys.
pub fn check_reserved_query_params(
    params: &Multimap,
    reserved: &[&str],
) -> Result<(), ValidationErr> {
    match reserved.iter().find(|key| params.contains_key(**key)) {
        Some(key) => Err(ValidationErr::ReservedQueryParam(key.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("asdasd"), "asdasd");
        assert_eq!(url_encode("tenant$user"), "tenant%24user");
        assert_eq!(url_encode("a b/c"), "a%20b%2Fc");
        assert_eq!(url_encode("x-y_z.~"), "x-y_z.~");
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(sha256_hash(b""), EMPTY_SHA256);
    }

    #[test]
    fn test_amz_dates() {
        let t = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
        assert_eq!(to_amz_date(t), "20130524T000000Z");
        assert_eq!(to_signer_date(t), "20130524");
    }

    #[test]
    fn test_from_epoch_str() {
        assert_eq!(
            from_epoch_str("0.000000").unwrap(),
            DateTime::from_timestamp(0, 0).unwrap()
        );

        let t = from_epoch_str("1681284188.914692").unwrap();
        assert_eq!(t.timestamp(), 1681284188);
        assert_eq!(t.timestamp_subsec_micros(), 914692);

        assert_eq!(from_epoch_str("1681284188").unwrap().timestamp(), 1681284188);
        assert!(from_epoch_str("").is_err());
        assert!(from_epoch_str(".5").is_err());
        assert!(from_epoch_str("12.3a").is_err());
        assert!(from_epoch_str("yesterday").is_err());
    }

    #[test]
    fn test_from_epoch_str_negative() {
        assert_eq!(from_epoch_str("-1.500000").unwrap().timestamp_millis(), -1500);
        assert_eq!(from_epoch_str("-0.250000").unwrap().timestamp_millis(), -250);
        assert_eq!(from_epoch_str("-2").unwrap().timestamp(), -2);
        assert_eq!(from_epoch_str("-2.000").unwrap().timestamp(), -2);
        assert!(from_epoch_str("-").is_err());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let t = parse_timestamp("2023-04-12T07:23:08.914692Z").unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2023, 4, 12));
        assert_eq!((t.hour(), t.minute(), t.second()), (7, 23, 8));
        assert_eq!(t.timestamp_subsec_micros(), 914692);

        let spaced = parse_timestamp("2023-04-12 07:23:08.914692Z").unwrap();
        assert_eq!(spaced, t);

        assert_eq!(parse_timestamp("0.000000").unwrap().timestamp(), 0);
        assert!(parse_timestamp("not a time").is_err());
    }

    #[test]
    fn test_check_reserved_query_params() {
        use crate::adminops::multimap_ext::MultimapExt;

        let mut params = Multimap::new();
        params.add("max-entries", "10");
        assert!(check_reserved_query_params(&params, &["format", "uid"]).is_ok());

        params.add("uid", "other");
        assert!(matches!(
            check_reserved_query_params(&params, &["format", "uid"]),
            Err(ValidationErr::ReservedQueryParam(key)) if key == "uid"
        ));
    }

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("foo").is_ok());
        assert!(check_bucket_name("Legacy_Bucket").is_ok());
        assert!(check_bucket_name("").is_err());
        assert!(check_bucket_name("   ").is_err());
        assert!(check_bucket_name("a?b").is_err());
        assert!(check_bucket_name(&"a".repeat(256)).is_err());
    }
}
