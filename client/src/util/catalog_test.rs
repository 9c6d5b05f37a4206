use std::collections::HashSet;

use super::*;

#[test]
fn tool_ids_are_unique_within_a_category() {
    for category in CATEGORIES {
        let ids: HashSet<_> = category.tools.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), category.tools.len(), "{}", category.slug);
        assert!(!category.tools.is_empty());
    }
}

#[test]
fn category_paths_match_slugs() {
    for category in CATEGORIES {
        assert_eq!(category.path, format!("/{}", category.slug));
    }
}

#[test]
fn lookups() {
    assert_eq!(category("finance").map(|c| c.tools.len()), Some(16));
    assert_eq!(FINANCE.tool("emi").map(|t| t.name), Some("EMI Calculator"));
    assert_eq!(FINANCE.first_tool(), "expense");
    assert!(category("nope").is_none());
}

#[test]
fn search_destinations_are_real_categories() {
    for (_, path) in NAV_LINKS {
        assert!(CATEGORIES.iter().any(|c| c.path == *path));
    }
}

#[test]
fn home_filters_match_titles_and_summaries() {
    assert_eq!(filter_categories("All").len(), CATEGORIES.len());
    let daily: Vec<_> = filter_categories("Daily").iter().map(|c| c.slug).collect();
    assert_eq!(daily, ["daily"]);
    let student: Vec<_> = filter_categories("Student").iter().map(|c| c.slug).collect();
    assert_eq!(student, ["student"]);
    assert!(filter_categories("Nothing").is_empty());
}

#[test]
fn trending_tools_point_at_known_categories() {
    for (_, path, _) in TRENDING_TOOLS {
        assert!(CATEGORIES.iter().any(|c| c.path == *path), "{path}");
    }
}

#[test]
fn tool_paths_resolve_registered_ids() {
    assert_eq!(tool_path("emi"), Some("/finance"));
    assert_eq!(tool_path("age-calc"), Some("/daily"));
    assert_eq!(tool_path("pass-gen"), Some("/developer"));
    assert_eq!(tool_path("agenda"), None);
    assert_eq!(tool_path("unknown"), None);
}
