//! Lambda-style handler serving the same books as `GET /books`.
//!
//! The response mirrors an API Gateway proxy integration result: a status
//! code, headers, and the JSON payload encoded as a string body.

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use shelf_commerce::catalog::BooksPayload;

use crate::inventory::inventory;
use crate::ApiError;

/// A proxy-integration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Handle a request for the book list. The request itself is ignored.
pub fn handler() -> Result<LambdaResponse, ApiError> {
    let payload = BooksPayload::from_books(&inventory());

    let headers = BTreeMap::from([
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ("Content-Type".to_string(), "application/json".to_string()),
    ]);

    Ok(LambdaResponse {
        status_code: StatusCode::OK.as_u16(),
        headers,
        body: serde_json::to_string(&payload)?,
    })
}
