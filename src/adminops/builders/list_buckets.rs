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
use crate::adminops::header_constants::STATS;
use crate::adminops::multimap_ext::{Multimap, MultimapExt};
use crate::adminops::response::ListBucketsResponse;
use crate::adminops::types::{AdminApi, AdminRequest, OperationParams, ToAdminRequest};
use crate::adminops::utils::check_reserved_query_params;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the `GET /admin/bucket` listing.
///
/// This struct constructs the parameters required for the
/// [`AdminOpsClient::list_buckets`](crate::adminops::client::AdminOpsClient::list_buckets) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBuckets {
    #[builder(!default)]
    client: AdminOpsClient,
    /// Only list buckets owned by this user.
    #[builder(default, setter(into))]
    uid: Option<String>,
    /// Return full bucket records; with `false` RGW returns names only.
    #[builder(default = true)]
    stats: bool,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
}

/// Builder type for [`ListBuckets`] that is returned by
/// [`AdminOpsClient::list_buckets`](crate::adminops::client::AdminOpsClient::list_buckets).
pub type ListBucketsBldr = ListBucketsBuilder<((AdminOpsClient,), (), (), (), ())>;

impl AdminApi for ListBuckets {
    type AdminResponse = ListBucketsResponse;
}

impl ToAdminRequest for ListBuckets {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        if matches!(&self.uid, Some(uid) if uid.is_empty()) {
            return Err(ValidationErr::EmptyUserId);
        }

        let mut query_params = self.extra_query_params.unwrap_or_default();
        check_reserved_query_params(&query_params, &[STATS])?;
        query_params.add(STATS, self.stats.to_string());

        Ok(AdminRequest {
            client: self.client,
            operation: OperationParams::builder()
                .name("list_buckets")
                .method(Method::GET)
                .resource("bucket")
                .query_params(query_params)
                .headers(self.extra_headers.unwrap_or_default())
                .build(),
            uid: self.uid,
        })
    }
}
