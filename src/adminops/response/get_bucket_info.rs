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

use crate::adminops::error::{AdminOpsError, Error};
use crate::adminops::transport::RawResponse;
use crate::adminops::types::bucket::decode_bucket;
use crate::adminops::types::{AdminOpsRequest, Bucket, FromAdminResponse};
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};

/// Response from the [`get_bucket_info`](crate::adminops::client::AdminOpsClient::get_bucket_info)
/// API call.
#[derive(Clone, Debug)]
pub struct GetBucketInfoResponse {
    request: AdminOpsRequest,
    status: StatusCode,
    headers: HeaderMap,
    bucket: Bucket,
}

impl GetBucketInfoResponse {
    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }

    pub fn into_bucket(self) -> Bucket {
        self.bucket
    }

    pub fn request(&self) -> &AdminOpsRequest {
        &self.request
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[async_trait]
impl FromAdminResponse for GetBucketInfoResponse {
    async fn from_admin_response(
        request: AdminOpsRequest,
        response: Result<RawResponse, Error>,
    ) -> Result<Self, Error> {
        let RawResponse {
            status,
            headers,
            body,
        } = response?;

        match decode_bucket(&body) {
            Ok(bucket) => Ok(Self {
                request,
                status,
                headers,
                bucket,
            }),
            Err(e) => {
                let err = AdminOpsError::invalid_response(&request, status, headers, body, e);
                log::warn!("{err}");
                Err(err.into())
            }
        }
    }
}
