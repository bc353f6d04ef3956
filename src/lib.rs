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

//! # RGW Admin Ops client (`rgw-admin`)
//!
//! This crate provides a strongly-typed, async interface to the bucket
//! endpoints of the Ceph RGW / s3gw "Admin Ops" REST API.
//!
//! Each supported operation has a request builder ([`adminops::builders::ListBuckets`],
//! [`adminops::builders::GetBucketInfo`]) created from an [`adminops::AdminOpsClient`].
//! All builders implement the [`adminops::types::AdminApi`] trait, which provides the
//! async [`send`](crate::adminops::types::AdminApi::send) method to sign and execute
//! the request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use rgw_admin::adminops::AdminOpsClient;
//! use rgw_admin::adminops::creds::StaticProvider;
//! use rgw_admin::adminops::types::AdminApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url = "http://localhost:7480".parse().unwrap();
//!     let client = AdminOpsClient::new(base_url, StaticProvider::new("asd", "qwe")).unwrap();
//!
//!     let resp = client
//!         .list_buckets()
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     for bucket in resp.buckets() {
//!         println!("{} ({})", bucket.bucket, bucket.owner);
//!     }
//! }
//! ```
//!
//! For one-off calls, [`adminops::buckets::list_buckets`] takes the endpoint and
//! credentials directly.
//!
//! ## Design
//! - Builders implement [`adminops::types::ToAdminRequest`] for request conversion and [`adminops::types::AdminApi`] for execution
//! - Responses implement [`adminops::types::FromAdminResponse`]
//! - Failures are either a local [`adminops::error::ValidationErr`] or a remote [`adminops::error::AdminOpsError`]
//! - HTTP goes through the [`adminops::transport::Transport`] trait; [`reqwest`] is the default

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod adminops;
