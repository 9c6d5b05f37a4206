use super::*;

#[test]
fn slugs_parse_to_kinds() {
    assert_eq!("faq".parse::<SupportKind>(), Ok(SupportKind::Faq));
    assert_eq!("report-bug".parse::<SupportKind>(), Ok(SupportKind::Bug));
    assert_eq!(" Contact ".parse::<SupportKind>(), Ok(SupportKind::Contact));
    assert!("billing".parse::<SupportKind>().is_err());
}

#[test]
fn explicit_kind_wins_over_segment() {
    assert_eq!(resolve_kind(Some(SupportKind::Feature), Some("faq")), SupportKind::Feature);
    assert_eq!(resolve_kind(None, Some("bug")), SupportKind::Bug);
}

#[test]
fn unknown_or_missing_segment_falls_back_to_help() {
    assert_eq!(resolve_kind(None, Some("nope")), SupportKind::Help);
    assert_eq!(resolve_kind(None, None), SupportKind::Help);
    assert_eq!(SupportKind::Help.title(), "Help Center");
}
