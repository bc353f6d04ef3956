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

use crate::adminops::client::AdminOpsClient;
use crate::adminops::error::ValidationErr;
use crate::adminops::header_constants::{BUCKET, STATS};
use crate::adminops::multimap_ext::{Multimap, MultimapExt};
use crate::adminops::response::GetBucketInfoResponse;
use crate::adminops::types::{AdminApi, AdminRequest, OperationParams, ToAdminRequest};
use crate::adminops::utils::{check_bucket_name, check_reserved_query_params};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for `GET /admin/bucket?bucket=<name>`.
///
/// This struct constructs the parameters required for the
/// [`AdminOpsClient::get_bucket_info`](crate::adminops::client::AdminOpsClient::get_bucket_info) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetBucketInfo {
    #[builder(!default)]
    client: AdminOpsClient,
    #[builder(setter(into))]
    bucket: String,
    #[builder(default, setter(into))]
    uid: Option<String>,
    #[builder(default = true)]
    stats: bool,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
}

/// Builder type for [`GetBucketInfo`] that is returned by
/// [`AdminOpsClient::get_bucket_info`](crate::adminops::client::AdminOpsClient::get_bucket_info).
pub type GetBucketInfoBldr =
    GetBucketInfoBuilder<((AdminOpsClient,), (String,), (), (), (), ())>;

impl AdminApi for GetBucketInfo {
    type AdminResponse = GetBucketInfoResponse;
}

impl ToAdminRequest for GetBucketInfo {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        if matches!(&self.uid, Some(uid) if uid.is_empty()) {
            return Err(ValidationErr::EmptyUserId);
        }

        let mut query_params = self.extra_query_params.unwrap_or_default();
        check_reserved_query_params(&query_params, &[STATS, BUCKET])?;
        query_params.add(STATS, self.stats.to_string());
        query_params.add(BUCKET, self.bucket);

        Ok(AdminRequest {
            client: self.client,
            operation: OperationParams::builder()
                .name("get_bucket_info")
                .method(Method::GET)
                .resource("bucket")
                .query_params(query_params)
                .headers(self.extra_headers.unwrap_or_default())
                .build(),
            uid: self.uid,
        })
    }
}
