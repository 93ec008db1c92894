use async_trait::async_trait;
use expense_client::{ApiConfig, ApiError, ExpenseService};
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{Expense, ExpenseFilters, ExpenseId, ExpenseRequest, MutationAck, Summary};
use tracing::debug;

/// API client for communicating with the expense service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new API client with the build-time configuration
    pub fn new() -> Self {
        Self {
            config: ApiConfig::from_env(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "GET");
        let response = Request::get(url).send().await.map_err(network_error)?;
        read_body(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ExpenseService for ApiClient {
    async fn list_expenses(&self, filters: &ExpenseFilters) -> Result<Vec<Expense>, ApiError> {
        self.get(&self.config.expenses_url(filters)).await
    }

    async fn fetch_summary(&self, filters: &ExpenseFilters) -> Result<Summary, ApiError> {
        self.get(&self.config.summary_url(filters)).await
    }

    async fn create_expense(&self, request: &ExpenseRequest) -> Result<MutationAck, ApiError> {
        let url = self.config.create_url();
        debug!(url = %url, "POST");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        read_body(response).await
    }

    async fn update_expense(&self, id: ExpenseId, request: &ExpenseRequest) -> Result<MutationAck, ApiError> {
        let url = self.config.expense_url(id);
        debug!(url = %url, "PUT");

        let response = Request::put(&url)
            .json(request)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        read_body(response).await
    }

    async fn delete_expense(&self, id: ExpenseId) -> Result<MutationAck, ApiError> {
        let url = self.config.expense_url(id);
        debug!(url = %url, "DELETE");

        let response = Request::delete(&url).send().await.map_err(network_error)?;
        read_body::<Option<MutationAck>>(response)
            .await
            .map(Option::unwrap_or_default)
    }
}

fn network_error(err: gloo::net::Error) -> ApiError {
    ApiError::Network(format!("Network error: {}", err))
}

async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await.map_err(network_error)?;
    decode_body(status, ok, &body)
}

/// Turn a status and raw body into either the decoded payload or an error.
///
/// An empty successful body is read as JSON `null`, which only an `Option`
/// payload accepts.
fn decode_body<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    if !ok {
        return Err(ApiError::from_response(status, body));
    }

    let body = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_success() {
        let expenses: Vec<Expense> = decode_body(
            200,
            true,
            r#"[{"id": 1, "amount": 9.5, "date": "2024-01-01", "note": "tea", "category": "Food"}]"#,
        )
        .unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].note, "tea");
    }

    #[test]
    fn test_decode_body_server_error_message() {
        let err = decode_body::<MutationAck>(404, false, r#"{"error": "Expense not found"}"#).unwrap_err();
        assert_eq!(err, ApiError::Server { status: 404, message: "Expense not found".to_string() });
    }

    #[test]
    fn test_decode_body_shape_mismatch() {
        let err = decode_body::<Summary>(200, true, r#"{"total": "lots"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_decode_body_empty_delete_response() {
        let ack: Option<MutationAck> = decode_body(204, true, "").unwrap();
        assert_eq!(ack, None);

        let err = decode_body::<MutationAck>(204, true, "").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
