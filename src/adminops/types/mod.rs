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

//! Core types for admin ops requests and responses

pub mod bucket;
mod request;
mod traits;

pub use bucket::{
    Bucket, BucketDecodeError, BucketIndexType, BucketQuota, ExplicitPlacement, UsageStats,
};
pub use request::{AdminOpsRequest, AdminRequest, OperationParams, build_request};
pub(crate) use request::sign_admin_request;
pub use traits::{AdminApi, FromAdminResponse, ToAdminRequest};
