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

use crate::adminops::error::{Error, ValidationErr};
use crate::adminops::transport::RawResponse;
use crate::adminops::types::{AdminOpsRequest, AdminRequest};

/// Convert builder to AdminRequest
pub trait ToAdminRequest {
    /// Convert this builder into an AdminRequest
    ///
    /// # Errors
    ///
    /// Returns `ValidationErr` if the request parameters are invalid.
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr>;
}

/// Execute an admin ops operation
pub trait AdminApi: ToAdminRequest {
    /// Response type for this operation
    type AdminResponse: FromAdminResponse;

    /// Sign and send the request, then decode the response.
    ///
    /// The request is sent exactly once; there are no retries.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` before any network activity if the request
    /// cannot be built, and `Error::AdminOps` for every remote failure.
    fn send(self) -> impl std::future::Future<Output = Result<Self::AdminResponse, Error>> + Send
    where
        Self: Sized + Send,
    {
        async {
            let request = self.to_admin_request()?;
            let signed = request.sign()?;
            let response = request.client.execute(&signed).await;
            Self::AdminResponse::from_admin_response(signed, response).await
        }
    }
}

/// Parse response from the admin ops API
#[async_trait::async_trait]
pub trait FromAdminResponse: Sized {
    /// Build the typed response from a successful exchange.
    ///
    /// `response` is already an error for transport failures and non-2xx
    /// statuses; implementations only decode 2xx bodies.
    async fn from_admin_response(
        request: AdminOpsRequest,
        response: Result<RawResponse, Error>,
    ) -> Result<Self, Error>;
}
