use async_trait::async_trait;
use keep_entity::EntityError;
use keep_protocol::{
    codes, ErrorBody, GetRequest, GetResponse, StoreRequest, StoreResponse, CONTROLLER_HEADER,
};
use keep_store::{
    GetOutcome, ImmutableStorage, StorageOperation, StoreError, StoreOutcome, StoreResult,
};
use keep_types::{RecordUrn, TypeError};

/// Client for a remote Keep record server.
pub struct ImmutableStorageClient {
    http: reqwest::Client,
    base_url: String,
}

impl ImmutableStorageClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: &RecordUrn) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Turn a non-success response into the typed error it encodes.
    async fn error_from_response(
        operation: StorageOperation,
        response: reqwest::Response,
    ) -> StoreError {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => error_from_body(operation, body),
            Err(e) => StoreError::storage(
                operation,
                EntityError::Backend(format!("server returned {status} with unreadable body: {e}")),
            ),
        }
    }

    fn transport_error(operation: StorageOperation, e: reqwest::Error) -> StoreError {
        StoreError::storage(operation, EntityError::Backend(e.to_string()))
    }
}

fn error_from_body(operation: StorageOperation, body: ErrorBody) -> StoreError {
    let property = |name: &str| -> String {
        body.properties
            .as_ref()
            .and_then(|p| p.get(name))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };
    match body.code.as_str() {
        codes::MALFORMED_IDENTIFIER => StoreError::Malformed(TypeError::Malformed {
            input: property("id"),
            reason: "rejected by server",
        }),
        codes::NAMESPACE_MISMATCH => StoreError::NamespaceMismatch {
            urn: property("id"),
            expected: property("expected"),
        },
        codes::NOT_FOUND => StoreError::NotFound(property("id")),
        codes::NOT_AUTHORIZED => StoreError::NotAuthorized(property("id")),
        codes::INVALID_ARGUMENT => match property("argument").as_str() {
            "controller" => StoreError::EmptyArgument("controller"),
            "data" => StoreError::EmptyArgument("data"),
            _ => StoreError::EmptyArgument("argument"),
        },
        _ => StoreError::storage(
            operation,
            EntityError::Backend(format!("{}: {}", body.code, body.message)),
        ),
    }
}

#[async_trait]
impl ImmutableStorage for ImmutableStorageClient {
    async fn store(&self, controller: &str, data: &[u8]) -> StoreResult<StoreOutcome> {
        if controller.is_empty() {
            return Err(StoreError::EmptyArgument("controller"));
        }
        if data.is_empty() {
            return Err(StoreError::EmptyArgument("data"));
        }

        let response = self
            .http
            .post(format!("{}/", self.base_url))
            .header(CONTROLLER_HEADER, controller)
            .json(&StoreRequest::from_bytes(data))
            .send()
            .await
            .map_err(|e| Self::transport_error(StorageOperation::Storing, e))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(StorageOperation::Storing, response).await);
        }

        let body: StoreResponse = response
            .json()
            .await
            .map_err(|e| Self::transport_error(StorageOperation::Storing, e))?;
        tracing::debug!(id = %body.id, "stored record remotely");
        Ok(StoreOutcome {
            id: RecordUrn::parse(&body.id)?,
            receipt: body.receipt,
        })
    }

    async fn get(&self, id: &RecordUrn, include_data: bool) -> StoreResult<GetOutcome> {
        let mut request = self.http.get(self.record_url(id));
        if !include_data {
            // A bare GET returns the payload; the body is only needed to
            // ask the server to omit it.
            request = request.json(&GetRequest {
                include_data: false,
            });
        }
        let response = request
            .send()
            .await
            .map_err(|e| Self::transport_error(StorageOperation::Getting, e))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(StorageOperation::Getting, response).await);
        }

        let body: GetResponse = response
            .json()
            .await
            .map_err(|e| Self::transport_error(StorageOperation::Getting, e))?;
        let data = body.decode().map_err(|e| {
            StoreError::storage(StorageOperation::Getting, EntityError::Serialization(e.to_string()))
        })?;
        Ok(GetOutcome {
            data,
            receipt: body.receipt,
        })
    }

    async fn remove(&self, controller: &str, id: &RecordUrn) -> StoreResult<()> {
        if controller.is_empty() {
            return Err(StoreError::EmptyArgument("controller"));
        }

        let response = self
            .http
            .delete(self.record_url(id))
            .header(CONTROLLER_HEADER, controller)
            .send()
            .await
            .map_err(|e| Self::transport_error(StorageOperation::Removing, e))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(StorageOperation::Removing, response).await);
        }
        tracing::debug!(id = %id, "removed record remotely");
        Ok(())
    }
}

impl std::fmt::Debug for ImmutableStorageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmutableStorageClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
