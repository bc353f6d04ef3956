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

use super::AdminOpsClient;
use crate::adminops::builders::{GetBucketInfo, GetBucketInfoBldr};

impl AdminOpsClient {
    /// Creates a [`GetBucketInfo`] request builder for one bucket.
    ///
    /// Tenant buckets are addressed as `tenant/bucket`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_admin::adminops::client::AdminOpsClient;
    /// use rgw_admin::adminops::creds::StaticProvider;
    /// use rgw_admin::adminops::types::AdminApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "http://localhost:7480".parse().unwrap();
    ///     let client = AdminOpsClient::new(base_url, StaticProvider::new("asd", "qwe")).unwrap();
    ///     let resp = client.get_bucket_info("foo").build().send().await.unwrap();
    ///     println!("{:?}", resp.bucket().bucket_quota);
    /// }
    /// ```
    pub fn get_bucket_info<S: Into<String>>(&self, bucket: S) -> GetBucketInfoBldr {
        GetBucketInfo::builder().client(self.clone()).bucket(bucket)
    }
}
