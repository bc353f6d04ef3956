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

//! Tests for the Signature V4 signing used by admin ops requests

use super::header_constants::{AUTHORIZATION, HOST, X_AMZ_CONTENT_SHA256, X_AMZ_DATE};
use super::multimap_ext::{Multimap, MultimapExt};
use super::signer::{get_signing_key, hmac_hash_hex, sign, sign_v4, sign_v4_s3};
use super::utils::EMPTY_SHA256;
use chrono::{TimeZone, Utc};
use http::Method;

fn get_test_date() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 4, 12, 7, 23, 8).unwrap()
}

fn admin_headers() -> Multimap {
    let mut headers = Multimap::new();
    headers.add(HOST, "foo.bar:123");
    headers.add(X_AMZ_CONTENT_SHA256, EMPTY_SHA256);
    headers.add(X_AMZ_DATE, "20230412T072308Z");
    headers
}

fn admin_query(uid: Option<&str>) -> Multimap {
    let mut query = Multimap::new();
    query.add("format", "json");
    query.add("stats", "true");
    if let Some(uid) = uid {
        query.add("uid", uid);
    }
    query
}

#[test]
fn test_aws_get_vanilla_vector() {
    // "get-vanilla" from the AWS SigV4 test suite
    let mut headers = Multimap::new();
    headers.add("host", "example.amazonaws.com");
    headers.add("x-amz-date", "20150830T123600Z");
    let date = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap();

    let signature = sign(
        "service",
        &Method::GET,
        "/",
        "us-east-1",
        &headers,
        &Multimap::new(),
        "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
        EMPTY_SHA256,
        date,
    );

    assert_eq!(signature.scope, "20150830/us-east-1/service/aws4_request");
    assert_eq!(signature.signed_headers, "host;x-amz-date");
    assert_eq!(
        signature.signature,
        "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
    );
    assert_eq!(
        signature.authorization("AKIDEXAMPLE"),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
         SignedHeaders=host;x-amz-date, \
         Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
    );
}

#[test]
fn test_signing_key_length() {
    let key = get_signing_key("qwe", get_test_date(), "us-east-1", "s3");
    assert_eq!(key.len(), 32);
}

#[test]
fn test_sign_deterministic() {
    let a = sign(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &admin_headers(),
        &admin_query(Some("asdasd")),
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );
    let b = sign(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &admin_headers(),
        &admin_query(Some("asdasd")),
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );
    assert_eq!(a, b);
    assert_eq!(a.signature.len(), 64);
}

#[test]
fn test_sign_depends_on_inputs() {
    let base = sign(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &admin_headers(),
        &admin_query(None),
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );

    let with_uid = sign(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &admin_headers(),
        &admin_query(Some("asdasd")),
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );
    assert_ne!(base.signature, with_uid.signature);

    let other_secret = sign(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &admin_headers(),
        &admin_query(None),
        "zxc",
        EMPTY_SHA256,
        get_test_date(),
    );
    assert_ne!(base.signature, other_secret.signature);

    let other_method = sign(
        "s3",
        &Method::HEAD,
        "/admin/bucket",
        "us-east-1",
        &admin_headers(),
        &admin_query(None),
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );
    assert_ne!(base.signature, other_method.signature);

    let other_region = sign(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "eu-west-1",
        &admin_headers(),
        &admin_query(None),
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );
    assert_ne!(base.signature, other_region.signature);
    assert_eq!(other_region.scope, "20230412/eu-west-1/s3/aws4_request");
}

#[test]
fn test_query_insertion_order_does_not_matter() {
    let mut reordered = Multimap::new();
    reordered.add("uid", "asdasd");
    reordered.add("stats", "true");
    reordered.add("format", "json");

    let a = sign(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &admin_headers(),
        &admin_query(Some("asdasd")),
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );
    let b = sign(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &admin_headers(),
        &reordered,
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );
    assert_eq!(a, b);
}

#[test]
fn test_sign_v4_s3_adds_authorization_header() {
    let mut headers = admin_headers();
    sign_v4_s3(
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &mut headers,
        &admin_query(None),
        "asd",
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );

    let auth = headers.get(AUTHORIZATION).unwrap();
    assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=asd/20230412/us-east-1/s3/aws4_request"));
    assert!(auth.contains("SignedHeaders=host;x-amz-content-sha256;x-amz-date"));
    assert!(!auth.contains("qwe"));
}

#[test]
fn test_sign_v4_ignores_existing_authorization() {
    let mut first = admin_headers();
    sign_v4(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &mut first,
        &admin_query(None),
        "asd",
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );

    let again = sign(
        "s3",
        &Method::GET,
        "/admin/bucket",
        "us-east-1",
        &first,
        &admin_query(None),
        "qwe",
        EMPTY_SHA256,
        get_test_date(),
    );
    assert_eq!(first.get(AUTHORIZATION).unwrap(), &again.authorization("asd"));
}

#[test]
fn test_hmac_hash_hex_rfc4231() {
    // RFC 4231, test case 2
    assert_eq!(
        hmac_hash_hex(b"Jefe", b"what do ya want for nothing?"),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}
