//! Static marketing copy.
//!
//! Sections render from these tables so copy edits never touch layout code.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

pub const COMPANY_NAME: &str = "Luceig";
pub const TAGLINE: &str = "Recruitment consultancy for teams that build what comes next";
pub const CONTACT_EMAIL: &str = "hello@luceig.com";
/// Fixed so server and hydrated markup always agree.
pub const COPYRIGHT_YEAR: u16 = 2025;

/// `mailto:` link to [`CONTACT_EMAIL`] with a percent-encoded subject line.
#[must_use]
pub fn mailto_with_subject(subject: &str) -> String {
    format!("mailto:{CONTACT_EMAIL}?subject={}", utf8_percent_encode(subject, NON_ALPHANUMERIC))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobOpening {
    pub slug: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "1,200+", label: "Placements made" },
    Stat { value: "350+", label: "Client partners" },
    Stat { value: "94%", label: "Twelve-month retention" },
    Stat { value: "15", label: "Years in the market" },
];

pub const WHY_CHOOSE_US: &[Feature] = &[
    Feature {
        title: "Sector specialists",
        body: "Consultants who have worked in the industries they recruit for, not generalists reading from a brief.",
    },
    Feature {
        title: "Shortlists in days",
        body: "A pre-qualified talent network means first candidates land with you within a working week.",
    },
    Feature {
        title: "Retention first",
        body: "We measure success a year after the start date, and every placement carries a replacement guarantee.",
    },
];

pub const CORE_VALUES: &[Feature] = &[
    Feature { title: "Candour", body: "Straight answers for clients and candidates, even when the news is unwelcome." },
    Feature { title: "Craft", body: "Every search is run by a consultant who owns it from brief to offer." },
    Feature { title: "Care", body: "People change jobs a handful of times in a career. We treat each move accordingly." },
];

pub const SERVICES: &[Service] = &[
    Service {
        slug: "permanent",
        title: "Permanent Recruitment",
        summary: "End-to-end search for permanent hires, from role definition to offer negotiation.",
    },
    Service {
        slug: "executive",
        title: "Executive Search",
        summary: "Discreet, research-led headhunting for board and senior leadership appointments.",
    },
    Service {
        slug: "contract",
        title: "Contract & Interim",
        summary: "Vetted contractors and interim managers available at short notice.",
    },
    Service {
        slug: "rpo",
        title: "Recruitment Process Outsourcing",
        summary: "An embedded team that runs your hiring function alongside your HR partners.",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { title: "Discover", body: "We learn the team, the role and what success looks like in year one." },
    ProcessStep { title: "Search", body: "Targeted outreach across our network and the wider market." },
    ProcessStep { title: "Assess", body: "Structured interviews and references before anyone reaches your inbox." },
    ProcessStep { title: "Place", body: "Offer management, onboarding check-ins and a twelve-month follow-up." },
];

pub const JOB_OPENINGS: &[JobOpening] = &[
    JobOpening {
        slug: "senior-consultant-tech",
        title: "Senior Consultant, Technology",
        location: "Dublin",
        kind: "Full-time",
    },
    JobOpening {
        slug: "associate-consultant-finance",
        title: "Associate Consultant, Finance",
        location: "London",
        kind: "Full-time",
    },
    JobOpening { slug: "talent-researcher", title: "Talent Researcher", location: "Remote (EU)", kind: "Full-time" },
    JobOpening {
        slug: "marketing-coordinator",
        title: "Marketing Coordinator",
        location: "Dublin",
        kind: "Part-time",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Luceig filled three engineering leadership roles in a quarter we had budgeted for one.",
        author: "Ciara Doyle",
        role: "VP Engineering, fintech scale-up",
    },
    Testimonial {
        quote: "The only agency that asked what our team needed rather than what the job ad said.",
        author: "Mark Ellison",
        role: "Head of People, logistics group",
    },
    Testimonial {
        quote: "They told me honestly which offer was the better career move. I took their advice and never looked back.",
        author: "Priya Nair",
        role: "Placed candidate, Finance Director",
    },
];
