//! HTTP transport for the Billed REST API.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, RequestBuilder, Response,
};
use shared::{
    domain::BillRecord,
    error::ApiError,
    protocol::{BillUpdate, CreatedBill},
};
use tracing::{debug, warn};
use url::Url;

use crate::{BillUpload, BillsResource, SessionAccessor, Store, StoreError};

const DEFAULT_RECEIPT_MIME: &str = "application/octet-stream";

pub struct HttpStore {
    bills: HttpBills,
}

struct HttpBills {
    http: Client,
    base_url: Url,
    session: Arc<dyn SessionAccessor>,
}

impl HttpStore {
    pub fn new(
        api_url: &str,
        session: Arc<dyn SessionAccessor>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let base_url = parse_base_url(api_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self {
            bills: HttpBills {
                http,
                base_url,
                session,
            },
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.bills.base_url
    }
}

/// Parses the API root, making sure relative joins land under it.
fn parse_base_url(api_url: &str) -> Result<Url, StoreError> {
    let trimmed = api_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|e| StoreError::InvalidUrl(format!("{trimmed}: {e}")))
}

impl Store for HttpStore {
    fn bills(&self) -> &dyn BillsResource {
        &self.bills
    }
}

impl HttpBills {
    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::InvalidUrl(format!("{path}: {e}")))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.jwt() {
            Some(jwt) => request.bearer_auth(jwt),
            None => request,
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response
        .json::<ApiError>()
        .await
        .ok()
        .map(|body| body.message)
        .filter(|message| !message.is_empty());
    warn!(
        status = status.as_u16(),
        detail = detail.as_deref().unwrap_or_default(),
        "bills API returned an error status"
    );
    Err(StoreError::Status {
        status: status.as_u16(),
        detail,
    })
}

#[async_trait]
impl BillsResource for HttpBills {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError> {
        let url = self.endpoint("bills")?;
        debug!(%url, "listing bills");
        let response = self.authorize(self.http.get(url)).send().await?;
        let bills = ensure_success(response).await?.json().await?;
        Ok(bills)
    }

    async fn create(&self, upload: BillUpload) -> Result<CreatedBill, StoreError> {
        let url = self.endpoint("bills")?;
        let file_name = upload.file.base_name().to_string();
        let mime = upload
            .file
            .mime_type
            .clone()
            .unwrap_or_else(|| DEFAULT_RECEIPT_MIME.to_string());
        debug!(%url, file_name = %file_name, mime = %mime, "uploading receipt");

        let part = Part::bytes(upload.file.bytes)
            .file_name(file_name)
            .mime_str(&mime)?;
        let form = Form::new().part("file", part).text("email", upload.email);

        let response = self
            .authorize(self.http.post(url))
            .multipart(form)
            .send()
            .await?;
        let created = ensure_success(response).await?.json().await?;
        Ok(created)
    }

    async fn update(&self, update: BillUpdate) -> Result<BillRecord, StoreError> {
        let url = self.endpoint(&format!("bills/{}", update.selector))?;
        debug!(%url, "updating bill");
        let response = self
            .authorize(self.http.patch(url))
            .json(&update.data)
            .send()
            .await?;
        let record = ensure_success(response).await?.json().await?;
        Ok(record)
    }
}
