//! Typed, ordered copy for the list-shaped parts of the page.
//!
//! Single translated strings come straight from `t!`; anything the sections
//! iterate over (service cards, process steps, testimonials, …) is assembled
//! here into plain records so the components never touch raw key names. The
//! lengths and order of these lists are part of the page contract.

use crate::t;

/// Headline figure with a translated label.
pub struct Stat {
    pub value: &'static str,
    pub label: String,
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat { value: "90%", label: t!("stats-success-rate") },
        Stat { value: "500+", label: t!("stats-companies") },
        Stat { value: "€10M+", label: t!("stats-funds") },
        Stat { value: "15+", label: t!("stats-experience") },
    ]
}

/// One of the three service cards: an icon path, a title and its bullet
/// items.
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: String,
    pub items: Vec<String>,
}

// Heroicons outline paths, matching the card topics.
const ICON_COINS: &str = "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z";
const ICON_BOARD: &str = "M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";
const ICON_CLIPBOARD: &str = "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2";

pub fn service_cards() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            icon: ICON_COINS,
            title: t!("service-funds-title"),
            items: vec![
                t!("service-funds-item-1"),
                t!("service-funds-item-2"),
                t!("service-funds-item-3"),
                t!("service-funds-item-4"),
            ],
        },
        ServiceCard {
            icon: ICON_BOARD,
            title: t!("service-training-title"),
            items: vec![
                t!("service-training-item-1"),
                t!("service-training-item-2"),
                t!("service-training-item-3"),
                t!("service-training-item-4"),
            ],
        },
        ServiceCard {
            icon: ICON_CLIPBOARD,
            title: t!("service-support-title"),
            items: vec![
                t!("service-support-item-1"),
                t!("service-support-item-2"),
                t!("service-support-item-3"),
                t!("service-support-item-4"),
            ],
        },
    ]
}

pub struct ProcessStep {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

pub fn process_steps() -> Vec<ProcessStep> {
    let titles = [
        t!("process-step-1-title"),
        t!("process-step-2-title"),
        t!("process-step-3-title"),
        t!("process-step-4-title"),
    ];
    let descriptions = [
        t!("process-step-1-desc"),
        t!("process-step-2-desc"),
        t!("process-step-3-desc"),
        t!("process-step-4-desc"),
    ];
    titles
        .into_iter()
        .zip(descriptions)
        .map(|(title, description)| ProcessStep {
            icon: ICON_CLIPBOARD,
            title,
            description,
        })
        .collect()
}

pub struct Advantage {
    pub title: String,
    pub description: String,
}

pub fn advantages() -> Vec<Advantage> {
    vec![
        Advantage { title: t!("advantage-1-title"), description: t!("advantage-1-desc") },
        Advantage { title: t!("advantage-2-title"), description: t!("advantage-2-desc") },
        Advantage { title: t!("advantage-3-title"), description: t!("advantage-3-desc") },
        Advantage { title: t!("advantage-4-title"), description: t!("advantage-4-desc") },
    ]
}

pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: t!("testimonial-1-quote"),
            author: t!("testimonial-1-author"),
            role: t!("testimonial-1-role"),
            company: t!("testimonial-1-company"),
        },
        Testimonial {
            quote: t!("testimonial-2-quote"),
            author: t!("testimonial-2-author"),
            role: t!("testimonial-2-role"),
            company: t!("testimonial-2-company"),
        },
        Testimonial {
            quote: t!("testimonial-3-quote"),
            author: t!("testimonial-3-author"),
            role: t!("testimonial-3-role"),
            company: t!("testimonial-3-company"),
        },
    ]
}

/// Selectable interest areas. `value` is the stable slug carried in the
/// submission payload; `label` is what the visitor sees.
pub struct InterestOption {
    pub value: &'static str,
    pub label: String,
}

pub fn interest_options() -> Vec<InterestOption> {
    vec![
        InterestOption { value: "fondi", label: t!("form-interest-funds") },
        InterestOption { value: "formazione", label: t!("form-interest-training") },
        InterestOption { value: "consulenza", label: t!("form-interest-consulting") },
        InterestOption { value: "altro", label: t!("form-interest-other") },
    ]
}

pub fn footer_service_items() -> Vec<String> {
    vec![
        t!("footer-services-item-1"),
        t!("footer-services-item-2"),
        t!("footer-services-item-3"),
    ]
}

pub fn footer_link_items() -> Vec<String> {
    vec![
        t!("footer-links-item-1"),
        t!("footer-links-item-2"),
        t!("footer-links-item-3"),
    ]
}
