use chrono::NaiveDate;

/// Current local date from the browser clock
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Current date in YYYY-MM-DD format, for `max` on date inputs
pub fn today_string() -> String {
    today().format("%Y-%m-%d").to_string()
}
