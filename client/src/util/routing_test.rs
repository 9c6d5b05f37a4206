use super::*;

// =============================================================================
// SEARCH
// =============================================================================

#[test]
fn search_routes_keywords_to_categories() {
    assert_eq!(search_destination("EMI calculator"), "/finance");
    assert_eq!(search_destination("income tax"), "/finance");
    assert_eq!(search_destination("pomodoro"), "/productivity");
    assert_eq!(search_destination("my bmi"), "/daily");
    assert_eq!(search_destination("QR maker"), "/developer");
    assert_eq!(search_destination("gpa"), "/student");
    assert_eq!(search_destination("fuel"), "/personal");
    assert_eq!(search_destination("write a letter"), "/ai");
}

#[test]
fn search_falls_back_to_finance() {
    assert_eq!(search_destination("weather"), "/finance");
    assert_eq!(search_destination(""), "/finance");
}

#[test]
fn earlier_groups_win_over_later_ones() {
    assert_eq!(search_destination("ai tasks"), "/productivity");
    assert_eq!(search_destination("tax bill"), "/finance");
}

// =============================================================================
// RETURN PATH
// =============================================================================

#[test]
fn return_path_honours_local_targets() {
    assert_eq!(resolve_return_path(Some("/finance")), "/finance");
    assert_eq!(resolve_return_path(Some("/dashboard")), "/dashboard");
}

#[test]
fn return_path_rejects_foreign_or_missing_targets() {
    assert_eq!(resolve_return_path(None), DASHBOARD_PATH);
    assert_eq!(resolve_return_path(Some("")), DASHBOARD_PATH);
    assert_eq!(resolve_return_path(Some("//evil.example")), DASHBOARD_PATH);
    assert_eq!(resolve_return_path(Some("https://evil.example")), DASHBOARD_PATH);
    assert_eq!(resolve_return_path(Some("/\\evil.example")), DASHBOARD_PATH);
    assert_eq!(resolve_return_path(Some("/signin")), DASHBOARD_PATH);
}

#[test]
fn sign_in_url_carries_redirect() {
    assert_eq!(sign_in_url("/dashboard"), "/signin?redirect=%2Fdashboard");
    assert_eq!(sign_in_url("/a?b=c"), "/signin?redirect=%2Fa%3Fb%3Dc");
    assert_eq!(sign_in_url("//x"), "/signin");
}

#[test]
fn sign_in_url_encodes_non_ascii_and_separators() {
    assert_eq!(sign_in_url("/x?q=ü;a"), "/signin?redirect=%2Fx%3Fq%3D%C3%BC%3Ba");
}

// =============================================================================
// BREADCRUMB
// =============================================================================

#[test]
fn category_labels() {
    assert_eq!(category_label("ai"), "AI Tools");
    assert_eq!(category_label("/daily"), "Daily & Converters");
    assert_eq!(category_label("finance"), "Finance");
    assert_eq!(category_label(""), "");
}
