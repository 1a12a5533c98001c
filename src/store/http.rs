// ABOUTME: HTTP store backend speaking the PostgREST-style read API
// ABOUTME: Shared client with pooling and timeouts; maps transport and status failures to store errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use super::{FailureKind, QueryExecutor, StoreError, StoreResult};
use crate::constants::limits;
use crate::store::query::QuerySpec;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const CLIENT_USER_AGENT: &str = concat!("hardcase-core/", env!("CARGO_PKG_VERSION"));

/// Read-only HTTP backend for a PostgREST-style store endpoint.
///
/// One executor holds one pooled client; clone-free sharing happens through
/// the owning [`super::StoreBackend`].
#[derive(Debug)]
pub struct HttpExecutor {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpExecutor {
    /// Create an executor with the default timeouts (30s request, 10s connect)
    #[must_use]
    pub fn new(base_url: Url, api_key: Option<String>) -> Self {
        Self::with_timeouts(
            base_url,
            api_key,
            Duration::from_secs(limits::REQUEST_TIMEOUT_SECS),
            Duration::from_secs(limits::CONNECT_TIMEOUT_SECS),
        )
    }

    /// Create an executor with explicit timeouts
    #[must_use]
    pub fn with_timeouts(
        base_url: Url,
        api_key: Option<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Self {
        let client = ClientBuilder::new()
            .user_agent(CLIENT_USER_AGENT)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn endpoint(&self, spec: &QuerySpec) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StoreError::unknown("store base url cannot be a base"))?
            .pop_if_empty()
            .push(&spec.collection);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for filter in &spec.filters {
                pairs.append_pair(
                    &filter.field,
                    &format!("{}.{}", filter.op.rest_prefix(), filter_literal(&filter.value)),
                );
            }
            if let Some(order) = &spec.order {
                let direction = if order.ascending { "asc" } else { "desc" };
                pairs.append_pair("order", &format!("{}.{direction}", order.field));
            }
            if let Some(limit) = spec.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl QueryExecutor for HttpExecutor {
    #[instrument(skip_all, fields(collection = %spec.collection))]
    async fn fetch(&self, spec: &QuerySpec) -> StoreResult<Vec<Value>> {
        let url = self.endpoint(spec)?;
        debug!(url = %url, "store request");

        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body, &spec.collection));
        }

        let payload: Value = response.json().await.map_err(|err| {
            StoreError::unknown(format!("store returned invalid json: {err}"))
                .with_raw_code("invalid_json")
        })?;
        match payload {
            Value::Array(rows) => Ok(rows),
            Value::Null => Ok(Vec::new()),
            object @ Value::Object(_) => Ok(vec![object]),
            other => Err(StoreError::unknown(format!(
                "store returned unexpected payload type: {other}"
            ))
            .with_raw_code("invalid_payload")),
        }
    }
}

fn filter_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn map_transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() || err.is_connect() {
        StoreError::connection(format!("store unreachable: {err}"))
    } else {
        StoreError::unknown(format!("store request failed: {err}"))
    }
}

fn map_status_error(status: StatusCode, body: &str, collection: &str) -> StoreError {
    let kind = match status.as_u16() {
        404 | 406 => FailureKind::NotFound,
        502 | 503 | 504 => FailureKind::Connection,
        _ => FailureKind::Unknown,
    };
    // PostgREST errors carry their own code in the body; prefer it over the
    // bare HTTP status when present
    let raw_code = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|parsed| {
            parsed
                .get("code")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| status.as_u16().to_string());
    StoreError::new(
        kind,
        format!("store returned {status} for {collection}"),
    )
    .with_raw_code(raw_code)
}
