use std::time::Duration;

use reqwest::multipart;

use crate::{ApiError, ApiFailure, CheckReport, UploadSlot};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Origin of the similarity service, without a trailing path.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait SimilarityApi: Send + Sync {
    /// Uploads raw document bytes as the multipart field `file`.
    ///
    /// Any 2xx status is success; the response body is ignored.
    async fn upload(
        &self,
        slot: UploadSlot,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError>;

    /// Asks the service to compare the two most recently uploaded documents.
    ///
    /// The service keeps the uploaded pair in its own session state, so the
    /// request carries no parameters.
    async fn check(&self) -> Result<CheckReport, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ClientSettings,
}

impl ReqwestApi {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let base = reqwest::Url::parse(&self.settings.base_url)
            .map_err(|err| ApiError::new(ApiFailure::InvalidBaseUrl, err.to_string()))?;
        base.join(path)
            .map_err(|err| ApiError::new(ApiFailure::InvalidBaseUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl SimilarityApi for ReqwestApi {
    async fn upload(
        &self,
        slot: UploadSlot,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(slot.endpoint_path())?;
        let client = self.build_client()?;

        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        Ok(())
    }

    async fn check(&self) -> Result<CheckReport, ApiError> {
        let url = self.endpoint("/check")?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response
            .json::<CheckReport>()
            .await
            .map_err(|err| ApiError::new(ApiFailure::InvalidResponse, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}
