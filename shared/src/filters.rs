/// Client-held constraints applied to both the list and the summary reads.
///
/// Values are kept exactly as typed by the user. Blank values are treated as
/// unset and never reach the query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseFilters {
    /// Inclusive lower bound (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Inclusive upper bound (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// Category label, matched case-insensitively by the service
    pub category: Option<String>,
}

impl ExpenseFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no filter would be sent to the service
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Query parameters to append to a read, in a stable order.
    /// Unset and blank filters are omitted entirely.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("start_date", self.start_date.as_deref()),
            ("end_date", self.end_date.as_deref()),
            ("category", self.category.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value?.trim();
            (!value.is_empty()).then_some((key, value))
        })
        .collect()
    }

    /// Human readable description of the applied filters, e.g.
    /// "Start: 2024-01-01 Category: Food"
    pub fn describe(&self) -> Option<String> {
        let parts: Vec<String> = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| {
                let label = match key {
                    "start_date" => "Start",
                    "end_date" => "End",
                    _ => "Category",
                };
                format!("{}: {}", label, value)
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
