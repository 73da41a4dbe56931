//! Display formatting for dashboard and tenant views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{Days, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_RANGE_DAYS: u64 = 30;
const URL_DISPLAY_CHARS: usize = 30;

/// Inclusive reporting window sent to the dashboard endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Window ending at `today` and starting `days` earlier.
    pub fn last_days(today: NaiveDate, days: u64) -> Self {
        let from = today.checked_sub_days(Days::new(days)).unwrap_or(today);
        Self { from, to: today }
    }

    /// The default window: the last 30 days as of the local clock.
    pub fn default_for_today() -> Self {
        Self::last_days(chrono::Local::now().date_naive(), DEFAULT_RANGE_DAYS)
    }

    pub fn from_param(&self) -> String {
        self.from.format(DATE_FORMAT).to_string()
    }

    pub fn to_param(&self) -> String {
        self.to.format(DATE_FORMAT).to_string()
    }

    /// Update the start date from a date input value. Unparseable input
    /// leaves the range unchanged and returns `false`.
    pub fn set_from(&mut self, raw: &str) -> bool {
        parse_date(raw).map(|d| self.from = d).is_some()
    }

    /// Update the end date from a date input value. Unparseable input
    /// leaves the range unchanged and returns `false`.
    pub fn set_to(&mut self, raw: &str) -> bool {
        parse_date(raw).map(|d| self.to = d).is_some()
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// `$1234.50` style currency with two decimals.
pub fn money(value: f64) -> String {
    format!("${value:.2}")
}

/// KPI change indicator, e.g. `↑ 12.5%`.
pub fn change_percent(value: f64) -> String {
    format!("↑ {value}%")
}

/// Inventory label; Shopify reports untracked stock as a negative quantity.
pub fn stock_label(stock: i64) -> String {
    if stock >= 0 { format!("{stock} in stock") } else { "∞".to_owned() }
}

/// Short form of a store URL: its hostname, or the first 30 characters.
pub fn truncate_url(raw: &str) -> String {
    if let Some(host) = url::Url::parse(raw).ok().and_then(|u| u.host_str().map(str::to_owned)) {
        return host;
    }
    if raw.chars().count() > URL_DISPLAY_CHARS {
        let head: String = raw.chars().take(URL_DISPLAY_CHARS).collect();
        format!("{head}...")
    } else {
        raw.to_owned()
    }
}
