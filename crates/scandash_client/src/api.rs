use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use scandash_core::{ScanStatusRecord, TargetRecord};

use crate::ClientError;

/// Reply to `POST /targets/start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StartReply {
    pub domains: u64,
}

/// Typed client for the scan service's HTTP surface.
///
/// No timeout is set beyond the transport's defaults: a hung request
/// delays its own cycle's result, never a later cycle's (each request is
/// an independent task).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: reqwest::Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = reqwest::Url::parse(base_url)
            .map_err(|err| ClientError::Network(format!("invalid base url: {err}")))?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(ClientError::network)?;
        Ok(Self { base, http })
    }

    /// `GET /targets/`: the full target list, replaced wholesale per poll.
    pub async fn fetch_targets(&self) -> Result<Vec<TargetRecord>, ClientError> {
        self.get_json("/targets/").await
    }

    /// `GET /targets/status`.
    pub async fn fetch_status(&self) -> Result<ScanStatusRecord, ClientError> {
        self.get_json("/targets/status").await
    }

    /// `POST /targets/start` with no body.
    pub async fn start_scan(&self) -> Result<StartReply, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/targets/start")?)
            .send()
            .await
            .map_err(ClientError::network)?;
        decode_json(response).await
    }

    /// `POST /targets/stop` with no body; the reply's contents are unused.
    pub async fn stop_scan(&self) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint("/targets/stop")?)
            .send()
            .await
            .map_err(ClientError::network)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(ClientError::network)?;
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// `POST /targets/bulk` as a multipart form with field `file`.
    ///
    /// Returns the raw JSON body so the operator sees exactly what the
    /// server echoed; the payload has no schema we rely on.
    pub async fn upload_bulk(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ClientError> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);
        let response = self
            .http
            .post(self.endpoint("/targets/bulk")?)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::network)?;

        let status = response.status();
        let body = response.text().await.map_err(ClientError::network)?;
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str::<serde_json::Value>(&body)
            .map_err(|err| ClientError::Decode(err.to_string()))?;
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(ClientError::network)?;
        decode_json(response).await
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ClientError> {
        self.base
            .join(path)
            .map_err(|err| ClientError::Network(format!("invalid endpoint {path}: {err}")))
    }
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await.map_err(ClientError::network)?;
    if !status.is_success() {
        return Err(ClientError::Server {
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|err| ClientError::Decode(err.to_string()))
}
