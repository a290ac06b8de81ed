//! Server-rendered HTML built with maud.

pub mod admin;
pub mod public;

use axum::http::StatusCode;
use domain::models::ContactInfo;
use maud::{html, Markup, DOCTYPE};

use crate::services::Flash;

pub use admin::{admin_landing, login_page, LoginView};
pub use public::{gallery_page, home_page, projects_page, HomePage};

const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap";

/// What every public page shares: site name, footer contact block, media prefix.
#[derive(Debug, Clone)]
pub struct SiteChrome {
    pub site_name: String,
    pub media_prefix: String,
    pub contact_info: Option<ContactInfo>,
}

impl SiteChrome {
    /// Company name from the contact record, else the configured site name.
    pub fn company_name(&self) -> &str {
        self.contact_info
            .as_ref()
            .map(|c| c.company_name.as_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.site_name)
    }
}

/// Renders the base HTML document structure.
fn base_document(title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="stylesheet" href=(FONTS_URL);
                link rel="stylesheet" href="/static/site.css";
                script src="/static/site.js" defer {}
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Public page: header navigation, main content, footer.
pub fn layout(title: &str, chrome: &SiteChrome, flash: Option<&Flash>, content: Markup) -> Markup {
    let page_title = format!("{} | {}", title, chrome.company_name());
    base_document(
        &page_title,
        None,
        html! {
            (site_header(chrome))
            @if let Some(flash) = flash {
                (flash_notice(flash))
            }
            main.main { (content) }
            (site_footer(chrome))
        },
    )
}

fn site_header(chrome: &SiteChrome) -> Markup {
    html! {
        header.header id="header" {
            nav.nav.container {
                a.nav__logo href="/" { (chrome.company_name()) }
                ul.nav__list {
                    li { a.nav__link href="/#home" { "Home" } }
                    li { a.nav__link href="/#about" { "About" } }
                    li { a.nav__link href="/#services" { "Services" } }
                    li { a.nav__link href="/projects/" { "Projects" } }
                    li { a.nav__link href="/gallery/" { "Gallery" } }
                    li { a.nav__link href="/#contact" { "Contact" } }
                }
            }
        }
    }
}

fn flash_notice(flash: &Flash) -> Markup {
    let class = format!("notification notification--{}", flash.level.as_str());
    html! {
        div class=(class) role="status" {
            span.notification__message { (flash.message) }
        }
    }
}

fn site_footer(chrome: &SiteChrome) -> Markup {
    html! {
        footer.footer {
            div.footer__container.container {
                div.footer__brand {
                    h3.footer__title { (chrome.company_name()) }
                    @if let Some(info) = &chrome.contact_info {
                        @if !info.tagline.is_empty() {
                            p.footer__tagline { (info.tagline) }
                        }
                    }
                }
                @if let Some(info) = &chrome.contact_info {
                    (contact_details(info))
                    @let links = info.social_links();
                    @if !links.is_empty() {
                        ul.footer__social {
                            @for link in &links {
                                li {
                                    a href=(link.url) target="_blank" rel="noopener" { (link.network) }
                                }
                            }
                        }
                    }
                }
            }
            p.footer__copy { "© " (chrome.company_name()) ". All rights reserved." }
        }
    }
}

/// Address, phones, emails and hours; empty values are skipped.
pub fn contact_details(info: &ContactInfo) -> Markup {
    let address = info.full_address();
    let phones: Vec<&str> = [&info.primary_phone, &info.secondary_phone]
        .into_iter()
        .map(|p| p.as_str())
        .filter(|p| !p.trim().is_empty())
        .collect();
    let emails: Vec<&str> = [&info.primary_email, &info.secondary_email]
        .into_iter()
        .map(|e| e.as_str())
        .filter(|e| !e.trim().is_empty())
        .collect();

    html! {
        ul.contact-details {
            @if !address.is_empty() {
                li.contact-details__address { (address) }
            }
            @for phone in &phones {
                li.contact-details__phone {
                    a href={ "tel:" (phone.replace(' ', "")) } { (phone) }
                }
            }
            @for email in &emails {
                li.contact-details__email {
                    a href={ "mailto:" (email) } { (email) }
                }
            }
            @if !info.working_hours_weekdays.is_empty() {
                li.contact-details__hours { (info.working_hours_weekdays) }
            }
            @if !info.working_hours_weekend.is_empty() {
                li.contact-details__hours { (info.working_hours_weekend) }
            }
        }
    }
}

/// Bare error page that needs no content from the store.
pub fn error_page(status: StatusCode) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    let message = match status {
        StatusCode::NOT_FOUND => "The page you are looking for does not exist.",
        _ => "Something went wrong on our side. Please try again later.",
    };
    base_document(
        reason,
        Some("error-page"),
        html! {
            main.error {
                h1 { (status.as_u16()) " " (reason) }
                p { (message) }
                a href="/" { "Back to home" }
            }
        },
    )
}
