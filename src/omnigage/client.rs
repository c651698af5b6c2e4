use reqwest::{
    Client, Method, RequestBuilder, Url,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    omnigage::{ApiError, Resource},
    types::Credentials,
    utils,
};

/// Media type of the JSON:API bulk extension used for envelopes.
pub const BULK_CONTENT_TYPE: &str = "application/vnd.api+json;ext=bulk";

pub const ACCOUNT_KEY_HEADER: &str = "X-Account-Key";

/// Request context for the Omnigage API.
///
/// Holds one `reqwest::Client` for the whole run. Authentication headers are
/// attached per request so the same client can also talk to the presigned
/// storage URL without leaking credentials.
#[derive(Debug, Clone)]
pub struct OmnigageClient {
    http: Client,
    base: Url,
    authorization: String,
    account_key: String,
}

impl OmnigageClient {
    pub fn new(credentials: &Credentials) -> Result<Self, ApiError> {
        let base = utils::api_base(&credentials.host).map_err(ApiError::InvalidUrl)?;

        Ok(Self {
            http: Client::new(),
            base,
            authorization: utils::basic_authorization(
                &credentials.token_key,
                &credentials.token_secret,
            ),
            account_key: credentials.account_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The underlying HTTP client, without any API headers.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Resolves `path` (e.g. `engagements/abc`) below the API host path.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("Invalid endpoint {}: {}", path, e)))
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.request(Method::POST, path)?.json(body);
        Self::send(request).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.request(Method::PATCH, path)?.json(body);
        Self::send(request).await
    }

    /// POST using the JSON:API bulk extension, which creates every resource
    /// in `data` with a single request.
    pub async fn post_bulk<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let payload = serde_json::to_vec(body)?;
        let request = self
            .request(Method::POST, path)?
            .header(ACCEPT, BULK_CONTENT_TYPE)
            .header(CONTENT_TYPE, BULK_CONTENT_TYPE)
            .body(payload);
        Self::send(request).await
    }

    /// Creates `resource` and stores the id assigned by the API on it.
    pub async fn create<R: Resource>(&self, resource: &mut R) -> Result<Value, ApiError> {
        let document = resource.document()?;
        let response = self.post(R::TYPE, &document).await?;
        resource.set_id(response_id(&response)?);
        Ok(response)
    }

    /// Sends the current attributes of an already created `resource`.
    pub async fn update<R: Resource>(&self, resource: &R) -> Result<Value, ApiError> {
        let id = resource.id().ok_or(ApiError::MissingField("id"))?;
        let document = resource.document()?;
        self.patch(&format!("{}/{}", R::TYPE, id), &document).await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        Ok(self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Basic {}", self.authorization))
            .header(ACCOUNT_KEY_HEADER, &self.account_key))
    }

    async fn send(request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Extracts `data.id` from a JSON:API response document.
pub fn response_id(response: &Value) -> Result<String, ApiError> {
    response
        .pointer("/data/id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ApiError::MissingField("data.id"))
}
