//! Route resolution helpers: header search, post-login return, breadcrumbs.
//!
//! DESIGN
//! ======
//! These are pure string functions so the navigation rules can be tested
//! without a router. Components call them and hand the result to
//! `use_navigate`.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/signin";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Keyword groups checked in order; the first group with a hit wins.
const SEARCH_ROUTES: &[(&[&str], &str)] = &[
    (&["emi", "loan", "gst", "tax", "sip", "invest"], "/finance"),
    (&["todo", "task", "pomodoro", "timer"], "/productivity"),
    (&["age", "bmi"], "/daily"),
    (&["qr", "json"], "/developer"),
    (&["gpa", "grade"], "/student"),
    (&["fuel", "bill"], "/personal"),
    (&["ai", "write"], "/ai"),
];

const SEARCH_FALLBACK: &str = "/finance";

/// Category page for a free-text header search.
#[must_use]
pub fn search_destination(query: &str) -> &'static str {
    let q = query.to_lowercase();
    SEARCH_ROUTES
        .iter()
        .find(|(words, _)| words.iter().any(|w| q.contains(w)))
        .map_or(SEARCH_FALLBACK, |(_, path)| path)
}

/// Where to go after sign-in. Only same-origin absolute paths are honoured.
#[must_use]
pub fn resolve_return_path(requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(path) if is_local_path(path) && path != SIGN_IN_PATH => path.to_owned(),
        _ => DASHBOARD_PATH.to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains("://") && !path.contains('\\')
}

/// Sign-in URL that returns to `from` afterwards.
#[must_use]
pub fn sign_in_url(from: &str) -> String {
    if is_local_path(from) {
        format!("{SIGN_IN_PATH}?redirect={}", urlencoding::encode(from))
    } else {
        SIGN_IN_PATH.to_owned()
    }
}

/// Breadcrumb label for the first path segment of a tool page.
#[must_use]
pub fn category_label(segment: &str) -> String {
    let segment = segment.trim_matches('/');
    match segment {
        "ai" => "AI Tools".to_owned(),
        "daily" => "Daily & Converters".to_owned(),
        _ => {
            let mut chars = segment.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        }
    }
}
