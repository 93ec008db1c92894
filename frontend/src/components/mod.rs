pub mod error_banner;
pub mod expense_form;
pub mod expense_list;
pub mod filter_bar;
pub mod summary_report;

pub use error_banner::ErrorBanner;
pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use filter_bar::FilterBar;
pub use summary_report::SummaryReport;
