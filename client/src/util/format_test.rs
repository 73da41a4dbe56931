use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn last_days_spans_thirty_days_back() {
    let range = DateRange::last_days(date(2024, 3, 10), DEFAULT_RANGE_DAYS);
    assert_eq!(range.from_param(), "2024-02-09");
    assert_eq!(range.to_param(), "2024-03-10");
}

#[test]
fn params_are_zero_padded_iso_dates() {
    let range = DateRange::new(date(2024, 1, 2), date(2024, 12, 31));
    assert_eq!(range.from_param(), "2024-01-02");
    assert_eq!(range.to_param(), "2024-12-31");
}

#[test]
fn setters_accept_date_input_values() {
    let mut range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
    assert!(range.set_from("2023-12-15"));
    assert!(range.set_to(" 2024-02-01 "));
    assert_eq!(range, DateRange::new(date(2023, 12, 15), date(2024, 2, 1)));
}

#[test]
fn setters_keep_previous_value_on_bad_input() {
    let original = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
    let mut range = original;
    assert!(!range.set_from(""));
    assert!(!range.set_to("2024-02-30"));
    assert!(!range.set_to("01/02/2024"));
    assert_eq!(range, original);
}

#[test]
fn money_uses_two_decimals() {
    assert_eq!(money(1234.5), "$1234.50");
    assert_eq!(money(0.0), "$0.00");
    assert_eq!(money(19.999), "$20.00");
}

#[test]
fn change_percent_prints_value_as_given() {
    assert_eq!(change_percent(12.5), "↑ 12.5%");
    assert_eq!(change_percent(10.0), "↑ 10%");
    assert_eq!(change_percent(-3.0), "↑ -3%");
}

#[test]
fn stock_label_marks_untracked_inventory() {
    assert_eq!(stock_label(0), "0 in stock");
    assert_eq!(stock_label(42), "42 in stock");
    assert_eq!(stock_label(-1), "∞");
}

#[test]
fn truncate_url_prefers_hostname() {
    assert_eq!(truncate_url("https://demo-store.myshopify.com/admin"), "demo-store.myshopify.com");
}

#[test]
fn truncate_url_shortens_unparseable_values() {
    let raw = "demo-store.myshopify.com/admin/products/list";
    assert_eq!(truncate_url(raw), "demo-store.myshopify.com/admin...");
    assert_eq!(truncate_url("short-shop"), "short-shop");
}
