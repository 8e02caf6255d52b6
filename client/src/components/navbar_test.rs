use super::*;

#[test]
fn exact_page_path_is_active() {
    assert!(is_active(SitePage::Careers, "/careers"));
    assert!(is_active(SitePage::Home, "/"));
}

#[test]
fn other_pages_are_not_active() {
    assert!(!is_active(SitePage::Home, "/careers"));
    assert!(!is_active(SitePage::About, "/"));
}

#[test]
fn unknown_paths_activate_nothing() {
    for page in SitePage::ALL {
        assert!(!is_active(page, "/not-a-page"));
    }
}
