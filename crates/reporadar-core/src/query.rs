// Search query construction - language filter plus a 30-day creation cutoff
use chrono::{Duration, Local, NaiveDate};

/// How far back "recently created" reaches, in calendar days.
const CREATED_WITHIN_DAYS: i64 = 30;

/// Build the search query for a language token using today's local date.
///
/// Produces `language:<token> created:><YYYY-MM-DD>`. Deterministic for a
/// given day; the only moving part is the clock. Callers guard against an
/// empty token - this is pure string composition with no error path.
///
/// The token is passed through as-is. The endpoint is case-insensitive and
/// tolerant of arbitrary tokens, so no escaping is done here.
pub fn build_query(language: &str) -> String {
    build_query_at(language, Local::now().date_naive())
}

/// The date-explicit core of [`build_query`], split out so tests can pin
/// the day. `NaiveDate` arithmetic keeps the cutoff stable across
/// timezones and locales.
pub fn build_query_at(language: &str, today: NaiveDate) -> String {
    let cutoff = today - Duration::days(CREATED_WITHIN_DAYS);
    format!("language:{} created:>{}", language, cutoff.format("%Y-%m-%d"))
}
