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

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use rgw_admin::adminops::client::AdminOpsClient;
use rgw_admin::adminops::creds::StaticProvider;
use rgw_admin::adminops::http::BaseUrl;
use rgw_admin::adminops::transport::{
    RawResponse, Transport, TransportError, TransportErrorKind,
};
use rgw_admin::adminops::types::AdminOpsRequest;

pub const URL: &str = "http://foo.bar:123";
pub const ACCESS_KEY: &str = "asd";
pub const SECRET_KEY: &str = "qwe";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn bucket_entry(name: &str, id: &str, creation_time: &str) -> serde_json::Value {
    json!({
        "bucket": name,
        "num_shards": 1,
        "tenant": "",
        "zonegroup": "",
        "placement_rule": "default",
        "explicit_placement": {
            "data_pool": "",
            "data_extra_pool": "",
            "index_pool": ""
        },
        "id": id,
        "marker": id,
        "index_type": "Normal",
        "owner": "testid",
        "ver": "",
        "master_ver": "",
        "mtime": "0.000000",
        "creation_time": creation_time,
        "max_marker": "",
        "usage": {},
        "bucket_quota": {
            "enabled": false,
            "check_on_raw": false,
            "max_size": -1,
            "max_size_kb": 0,
            "max_objects": -1
        }
    })
}

pub fn foo_entry() -> serde_json::Value {
    bucket_entry(
        "foo",
        "foo.1681284188914692706",
        "2023-04-12T07:23:08.914692Z",
    )
}

pub fn bar_entry() -> serde_json::Value {
    bucket_entry(
        "bar",
        "bar.168128418863559658",
        "2023-04-12T07:23:08.063559Z",
    )
}

/// Body of a listing returning `foo` then `bar`.
pub fn two_buckets_body() -> Bytes {
    Bytes::from(serde_json::to_vec(&json!([foo_entry(), bar_entry()])).unwrap())
}

/// In-memory transport returning queued responses and recording requests.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<AdminOpsRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: StatusCode, body: impl Into<Bytes>) {
        self.responses.lock().unwrap().push_back(Ok(RawResponse::new(
            status,
            HeaderMap::new(),
            body.into(),
        )));
    }

    pub fn fail(&self, kind: TransportErrorKind, message: &'static str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::new(kind, message)));
    }

    pub fn requests(&self) -> Vec<AdminOpsRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> AdminOpsRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &AdminOpsRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::new(
                    TransportErrorKind::Other,
                    "no response queued",
                ))
            })
    }
}

pub fn mock_client(transport: Arc<MockTransport>) -> AdminOpsClient {
    let base_url: BaseUrl = URL.parse().unwrap();
    AdminOpsClient::builder(base_url)
        .provider(Some(StaticProvider::new(ACCESS_KEY, SECRET_KEY)))
        .transport(transport)
        .build()
        .unwrap()
}

/// Serves exactly one HTTP response on a random local port.
///
/// Returns the base URL and a handle resolving to the received request head.
pub async fn serve_once(status: u16, reason: &str, body: Bytes) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let status_line = format!("HTTP/1.1 {status} {reason}\r\n");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let mut response = status_line.into_bytes();
        response.extend_from_slice(b"Content-Type: application/json\r\n");
        response.extend_from_slice(format!("Content-Length: {}\r\n", body.len()).as_bytes());
        response.extend_from_slice(b"Connection: close\r\n\r\n");
        response.extend_from_slice(&body);
        socket.write_all(&response).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{addr}"), handle)
}

/// Accepts one connection and never answers.
pub async fn serve_silence() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
    });
    (format!("http://{addr}"), handle)
}

/// URL of a local port with nothing listening.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
