pub mod use_expenses;
