use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;

pub mod filters;
pub mod validation;
pub mod view;

pub use filters::ExpenseFilters;
pub use validation::{ExpenseDraft, Field, FieldErrors, MAX_NOTE_LENGTH};
pub use view::{format_money, BreakdownLine, ExpenseRow, SummaryPanel, SummaryView, ViewState};

/// Server-assigned expense identifier
pub type ExpenseId = i64;

/// A persisted expense record as returned by the expense service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Always positive
    pub amount: f64,
    /// Calendar date of the expense (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Free text, 1 to 100 characters
    pub note: String,
    /// Older records may carry no category at all
    #[serde(default, deserialize_with = "category_or_default")]
    pub category: Category,
}

/// Expense category. The form offers the fixed set; records saved by other
/// clients may carry any label, which is kept verbatim in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Category {
    #[default]
    General,
    Food,
    Travel,
    Bills,
    Entertainment,
    Other,
    Custom(String),
}

impl Category {
    /// Categories offered by the form, in display order
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Food,
        Category::Travel,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::General => "General",
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
            Category::Custom(label) => label,
        }
    }

    /// Map a stored label onto the fixed set, keeping anything else as is
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Category::ALL
            .iter()
            .find(|category| category.as_str() == label)
            .cloned()
            .unwrap_or(Category::Custom(label))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Category::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Category::from_label)
    }
}

/// Parses one of the fixed categories, ignoring case and surrounding space
impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .cloned()
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned when a string does not name a known category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

fn category_or_default<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Category>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body sent when creating or replacing an expense.
///
/// Only produced by [`ExpenseDraft::validate`], so every request that reaches
/// the service has already passed client-side validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRequest {
    pub amount: f64,
    pub date: NaiveDate,
    pub note: String,
    pub category: Category,
}

/// Acknowledgement returned by the service for create, update and delete
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub message: String,
    /// Only present when a record was created
    #[serde(default)]
    pub id: Option<ExpenseId>,
}

/// Server-computed aggregation over the currently filtered expense set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total: f64,
    /// Category label to summed amount, only for categories with expenses
    #[serde(default)]
    pub by_category: BTreeMap<String, f64>,
    /// Month label (YYYY-MM) to summed amount
    #[serde(default)]
    pub by_month: BTreeMap<String, f64>,
}

/// Error body the service sends alongside a failing status code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
