use super::*;
use std::collections::HashSet;

#[test]
fn tables_are_not_empty() {
    assert!(!STATS.is_empty());
    assert!(!WHY_CHOOSE_US.is_empty());
    assert!(!CORE_VALUES.is_empty());
    assert!(!SERVICES.is_empty());
    assert!(!PROCESS_STEPS.is_empty());
    assert!(!JOB_OPENINGS.is_empty());
    assert!(!TESTIMONIALS.is_empty());
}

#[test]
fn service_slugs_are_unique() {
    let slugs = SERVICES.iter().map(|s| s.slug).collect::<HashSet<_>>();
    assert_eq!(slugs.len(), SERVICES.len());
}

#[test]
fn job_slugs_are_unique_and_url_safe() {
    let slugs = JOB_OPENINGS.iter().map(|j| j.slug).collect::<HashSet<_>>();
    assert_eq!(slugs.len(), JOB_OPENINGS.len());
    for slug in slugs {
        assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "slug {slug:?} is not url-safe"
        );
    }
}

#[test]
fn no_blank_copy() {
    for stat in STATS {
        assert!(!stat.value.trim().is_empty() && !stat.label.trim().is_empty());
    }
    for t in TESTIMONIALS {
        assert!(!t.quote.trim().is_empty() && !t.author.trim().is_empty());
    }
}

#[test]
fn contact_email_is_plausible() {
    assert!(CONTACT_EMAIL.contains('@'));
}

// =============================================================
// mailto links
// =============================================================

#[test]
fn mailto_subject_is_percent_encoded() {
    assert_eq!(
        mailto_with_subject("Application: Senior Consultant, Technology"),
        "mailto:hello@luceig.com?subject=Application%3A%20Senior%20Consultant%2C%20Technology"
    );
}

#[test]
fn mailto_subject_has_no_raw_separators() {
    for job in JOB_OPENINGS {
        let href = mailto_with_subject(&format!("Application: {}", job.title));
        let (_, query) = href.split_once('?').unwrap();
        assert!(!query.contains(' '), "{href}");
        assert!(!query.contains(':'), "{href}");
        assert!(!query.contains('&'), "{href}");
    }
}
