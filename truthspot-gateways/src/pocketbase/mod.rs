//! REST client of a hosted PocketBase instance.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use truthspot_boundary as json;
use truthspot_core::gateways::{Error, Result};

mod auth;
mod catalog;
pub mod filter;
mod spots;

/// Batch size when fetching complete collections.
const FULL_LIST_BATCH_SIZE: u32 = 500;

/// Parameters of a record list request.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: u32,
    pub per_page: u32,
    pub sort: Option<String>,
    pub filter: Option<String>,
    pub expand: Option<String>,
}

impl ListParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.max(1).to_string()),
            ("perPage", self.per_page.to_string()),
        ];
        if let Some(sort) = &self.sort {
            query.push(("sort", sort.clone()));
        }
        if let Some(filter) = &self.filter {
            query.push(("filter", filter.clone()));
        }
        if let Some(expand) = &self.expand {
            query.push(("expand", expand.clone()));
        }
        query
    }
}

#[derive(Debug, Clone)]
pub struct PocketBase {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl PocketBase {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: None,
        }
    }

    /// A client that sends the given auth token with every request.
    #[must_use]
    pub fn authorized(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    /// A client without auth token.
    #[must_use]
    pub fn anonymous(&self) -> Self {
        Self {
            token: None,
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/api/collections/{collection}", self.base_url)
    }

    fn records_url(&self, collection: &str) -> String {
        format!("{}/records", self.collection_url(collection))
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{id}", self.records_url(collection))
    }

    fn add_auth_header(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, token),
            None => req,
        }
    }

    async fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.add_auth_header(req).send().await.map_err(transport_error)?;
        into_json(response).await
    }

    async fn send_json<D, T>(&self, req: RequestBuilder, data: &D) -> Result<T>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(req.json(data)).await
    }

    pub async fn list<T>(&self, collection: &str, params: &ListParams) -> Result<json::ListResult<T>>
    where
        T: DeserializeOwned,
    {
        log::debug!("Listing {collection} with {params:?}");
        let req = self
            .http
            .get(self.records_url(collection))
            .query(&params.to_query());
        self.send(req).await.inspect_err(|err| {
            log::warn!("Failed to list {collection}: {err}");
        })
    }

    /// Fetches all records of a collection page by page.
    pub async fn full_list<T>(&self, collection: &str, sort: Option<&str>) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut params = ListParams {
            page: 1,
            per_page: FULL_LIST_BATCH_SIZE,
            sort: sort.map(ToOwned::to_owned),
            ..Default::default()
        };
        loop {
            let page = self.list::<T>(collection, &params).await?;
            let last = is_last_page(&page, params.per_page);
            items.extend(page.items);
            if last {
                break;
            }
            params.page += 1;
        }
        Ok(items)
    }

    pub async fn get<T>(&self, collection: &str, id: &str, expand: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut req = self.http.get(self.record_url(collection, id));
        if let Some(expand) = expand {
            req = req.query(&[("expand", expand)]);
        }
        self.send(req).await
    }

    pub async fn create<D, T>(&self, collection: &str, data: &D) -> Result<T>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.post(self.records_url(collection));
        self.send_json(req, data).await.inspect_err(|err| {
            log::error!("Failed to create record in {collection}: {err}");
        })
    }

    pub async fn update<D, T>(&self, collection: &str, id: &str, data: &D) -> Result<T>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.patch(self.record_url(collection, id));
        self.send_json(req, data).await.inspect_err(|err| {
            log::error!("Failed to update record {id} in {collection}: {err}");
        })
    }

    pub async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let req = self.http.delete(self.record_url(collection, id));
        let response = self.add_auth_header(req).send().await.map_err(transport_error)?;
        if response.status().is_success() {
            return Ok(());
        }
        let err = error_from_response(response).await;
        log::error!("Failed to delete record {id} in {collection}: {err}");
        Err(err)
    }
}

/// A short page or the final page ends a full list request.
fn is_last_page<T>(page: &json::ListResult<T>, per_page: u32) -> bool {
    page.items.len() < per_page as usize || i64::from(page.page) >= page.total_pages
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_decode() {
        Error::Decode(err.to_string())
    } else {
        Error::Transport(err.to_string())
    }
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.status().is_success() {
        response.json().await.map_err(|err| Error::Decode(err.to_string()))
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> Error {
    let status = response.status();
    let message = match response.json::<json::ErrorResponse>().await {
        Ok(err) => err.message,
        Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
    };
    error_from_status(status, message)
}

fn error_from_status(status: StatusCode, message: String) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound,
        StatusCode::UNAUTHORIZED => Error::Unauthorized,
        StatusCode::FORBIDDEN => Error::Forbidden,
        _ => Error::Rejected {
            status: status.as_u16(),
            message,
        },
    }
}
