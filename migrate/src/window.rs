//! Range-selector rewriting for SLI queries.
//!
//! service-level-operator queries carry literal range selectors such as
//! `[5m]`. Sloth evaluates each SLI over several windows and injects the
//! window through the `{{ .window }}` template variable, so literal ranges are
//! replaced with the placeholder.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder that replaces every literal range selector.
pub const WINDOW_PLACEHOLDER: &str = "[{{ .window }}]";

// One ASCII digit followed by a unit, inside brackets.
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[0-9][smhd]\]").expect("static regex must compile"));

/// Replaces every single-digit range selector (`[5m]`, `[1h]`, ...) with
/// [`WINDOW_PLACEHOLDER`].
///
/// Matches are non-overlapping, left to right, and case-sensitive on the
/// unit. Queries without a match are returned unchanged. Applying the
/// function twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use slo_migrate::window::replace_window;
///
/// assert_eq!(
///     replace_window("sum(rate(http_errors_total[5m]))"),
///     "sum(rate(http_errors_total[{{ .window }}]))"
/// );
/// assert_eq!(replace_window("up[30m]"), "up[30m]");
/// ```
pub fn replace_window(query: &str) -> String {
    RANGE_RE.replace_all(query, WINDOW_PLACEHOLDER).into_owned()
}
