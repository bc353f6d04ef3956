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

//! Credential providers

use crate::adminops::error::ValidationErr;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
/// Credentials contain the access key and secret key of an admin user
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Checks that neither key is empty.
    pub fn validate(&self) -> Result<(), ValidationErr> {
        if self.access_key.is_empty() {
            return Err(ValidationErr::EmptyAccessKey);
        }
        if self.secret_key.is_empty() {
            return Err(ValidationErr::EmptySecretKey);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: fmt::Debug + Send + Sync {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given access key and secret key
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_admin::adminops::creds::StaticProvider;
    /// let provider = StaticProvider::new("asd", "qwe");
    /// ```
    pub fn new(access_key: &str, secret_key: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials::new(access_key, secret_key),
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let provider = StaticProvider::new("asd", "qwe");
        let s = format!("{provider:?}");
        assert!(s.contains("asd"));
        assert!(!s.contains("qwe"));
    }

    #[test]
    fn test_validate() {
        assert!(Credentials::new("asd", "qwe").validate().is_ok());
        assert!(matches!(
            Credentials::new("", "qwe").validate(),
            Err(ValidationErr::EmptyAccessKey)
        ));
        assert!(matches!(
            Credentials::new("asd", "").validate(),
            Err(ValidationErr::EmptySecretKey)
        ));
    }
}
