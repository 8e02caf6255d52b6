use super::*;

#[test]
fn home_title_leads_with_company() {
    assert_eq!(page_title(SitePage::Home), "Luceig | Recruitment Consultancy");
}

#[test]
fn other_titles_lead_with_page_label() {
    assert_eq!(page_title(SitePage::Careers), "Careers | Luceig");
    assert_eq!(page_title(SitePage::Testimonials), "Testimonials | Luceig");
}
