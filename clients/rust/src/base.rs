use evently_api_structs::APIErrorResponse;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    /// The server could not be reached
    Network,
    /// The response body did not have the expected shape
    MalformedResponse,
    BadClientData,
    NotFound,
    InternalError,
    UnexpectedStatusCode,
}

#[derive(Debug, Clone)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub status: Option<StatusCode>,
    /// Error body returned by the server, if any
    pub body: Option<APIErrorResponse>,
}

impl APIError {
    fn new(variant: APIErrorVariant) -> Self {
        Self {
            variant,
            status: None,
            body: None,
        }
    }

    /// Error code from the server response, e.g. `INVALID_OWNER_ID`
    pub fn code(&self) -> Option<&str> {
        self.body.as_ref().map(|body| body.code.as_str())
    }
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address.trim_end_matches('/'), path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = req
            .send()
            .await
            .map_err(|_| APIError::new(APIErrorVariant::Network))?;

        let status = res.status();
        if status != expected_status_code {
            let variant = match status {
                StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
                StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
                StatusCode::INTERNAL_SERVER_ERROR => APIErrorVariant::InternalError,
                _ => APIErrorVariant::UnexpectedStatusCode,
            };
            return Err(APIError {
                variant,
                status: Some(status),
                body: res.json::<APIErrorResponse>().await.ok(),
            });
        }

        res.json::<T>().await.map_err(|_| APIError {
            status: Some(status),
            ..APIError::new(APIErrorVariant::MalformedResponse)
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.client.get(self.url(&path)), expected_status_code)
            .await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.client.post(self.url(&path)).json(&body),
            expected_status_code,
        )
        .await
    }
}
