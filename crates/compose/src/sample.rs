//! Sample content fixture.
//!
//! A complete `PageContent` covering every section role. Used as the
//! golden input for composer tests and the api's preview route.

use pageflow_core::content::page::{
    ContentItem, ContentLink, FooterContent, FooterLinkGroup, NavigationContent, PageContent,
    SectionContent,
};

/// Build the full sample page content for a fictional scheduling product.
pub fn sample_page_content() -> PageContent {
    let mut content = PageContent {
        announcement: Some("Early-bird pricing ends Friday".to_string()),
        navigation: NavigationContent {
            brand: "Plannery".to_string(),
            links: vec![
                ContentLink::new("Features", "#features"),
                ContentLink::new("Pricing", "#pricing"),
                ContentLink::new("FAQ", "#faq"),
            ],
            cta_label: Some("Start free".to_string()),
        },
        footer: FooterContent {
            tagline: "Scheduling that stays out of the way.".to_string(),
            link_groups: vec![
                FooterLinkGroup {
                    title: "Product".to_string(),
                    links: vec![
                        ContentLink::new("Features", "#features"),
                        ContentLink::new("Pricing", "#pricing"),
                    ],
                },
                FooterLinkGroup {
                    title: "Company".to_string(),
                    links: vec![
                        ContentLink::new("About", "/about"),
                        ContentLink::new("Contact", "/contact"),
                    ],
                },
            ],
            legal: Some("© 2025 Plannery GmbH".to_string()),
        },
        sections: Default::default(),
    };

    content.sections.insert(
        "hero".to_string(),
        SectionContent {
            headline: Some("Meetings that plan themselves".to_string()),
            subheadline: Some(
                "Plannery finds the slot everyone can make, across every calendar.".to_string(),
            ),
            image: Some("/assets/sample/hero.webp".to_string()),
            cta_label: Some("Start free".to_string()),
            cta_href: Some("/signup".to_string()),
            ..SectionContent::default()
        },
    );

    content.sections.insert(
        "trust".to_string(),
        SectionContent {
            headline: Some("Teams that run on Plannery".to_string()),
            items: vec![
                ContentItem::new("Nordwind Logistics", None),
                ContentItem::new("Kastell Security", None),
                ContentItem::new("Brightside Labs", None),
                ContentItem::new("Ferro & Sons", None),
            ],
            ..SectionContent::default()
        },
    );

    content.sections.insert(
        "features".to_string(),
        SectionContent {
            headline: Some("Everything a busy calendar needs".to_string()),
            items: vec![
                ContentItem::new(
                    "Smart slot finding",
                    Some("One suggestion that fits every participant, first try."),
                ),
                ContentItem::new(
                    "Calendar sync",
                    Some("Google, Outlook and CalDAV, kept in step in real time."),
                ),
                ContentItem::new(
                    "Meeting guards",
                    Some("Focus blocks and daily limits that bookings cannot break."),
                ),
            ],
            ..SectionContent::default()
        },
    );

    content.sections.insert(
        "content".to_string(),
        SectionContent {
            headline: Some("Why teams switch".to_string()),
            body: Some(
                "The average team loses four hours a week to scheduling back-and-forth. \
                 Plannery cuts that to minutes by negotiating slots automatically and \
                 holding them until everyone confirms."
                    .to_string(),
            ),
            image: Some("/assets/sample/switching.webp".to_string()),
            ..SectionContent::default()
        },
    );

    content.sections.insert(
        "pricing".to_string(),
        SectionContent {
            headline: Some("Simple plans".to_string()),
            items: vec![
                ContentItem::new("Starter", Some("Free for up to 3 calendars.")),
                ContentItem::new("Team", Some("9 EUR per seat per month, unlimited calendars.")),
                ContentItem::new("Scale", Some("Custom pricing, SSO and priority support.")),
            ],
            ..SectionContent::default()
        },
    );

    content.sections.insert(
        "faq".to_string(),
        SectionContent {
            headline: Some("Frequently asked questions".to_string()),
            items: vec![
                ContentItem::new(
                    "Does Plannery see my meeting contents?",
                    Some("No. We only read free/busy state, never titles or attendees."),
                ),
                ContentItem::new(
                    "Can I cancel anytime?",
                    Some("Yes, plans are month-to-month and downgrade instantly."),
                ),
                ContentItem::new(
                    "Do participants need an account?",
                    Some("No, invitees confirm slots from a plain email link."),
                ),
            ],
            ..SectionContent::default()
        },
    );

    content.sections.insert(
        "cta".to_string(),
        SectionContent {
            headline: Some("Put scheduling on autopilot".to_string()),
            cta_label: Some("Start free".to_string()),
            cta_href: Some("/signup".to_string()),
            ..SectionContent::default()
        },
    );

    content
}
