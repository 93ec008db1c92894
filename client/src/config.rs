use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use shared::{ExpenseFilters, ExpenseId};
use tracing::Level;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Everything outside the unreserved set is escaped in query values
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*');

/// Where the expense service lives and how its endpoints are addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at build time.
    ///
    /// `EXPENSE_API_URL` overrides the default base URL.
    pub fn from_env() -> Self {
        match option_env!("EXPENSE_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` target for the expense list
    pub fn expenses_url(&self, filters: &ExpenseFilters) -> String {
        self.with_query(format!("{}/api/expenses/", self.base_url), filters)
    }

    /// `GET` target for the summary
    pub fn summary_url(&self, filters: &ExpenseFilters) -> String {
        self.with_query(format!("{}/api/expenses/summary", self.base_url), filters)
    }

    /// `POST` target for new expenses
    pub fn create_url(&self) -> String {
        format!("{}/api/expenses/", self.base_url)
    }

    /// `PUT` / `DELETE` target for a single expense
    pub fn expense_url(&self, id: ExpenseId) -> String {
        format!("{}/api/expenses/{}", self.base_url, id)
    }

    fn with_query(&self, url: String, filters: &ExpenseFilters) -> String {
        let query = filters
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&");

        if query.is_empty() {
            url
        } else {
            format!("{}?{}", url, query)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Most verbose level that gets logged.
///
/// `EXPENSE_LOG_LEVEL` set at build time wins; otherwise debug builds log at
/// `DEBUG` and release builds at `INFO`.
pub fn log_level() -> Level {
    parse_log_level(option_env!("EXPENSE_LOG_LEVEL"), cfg!(debug_assertions))
}

fn parse_log_level(value: Option<&str>, debug_build: bool) -> Level {
    value
        .and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(if debug_build { Level::DEBUG } else { Level::INFO })
}
