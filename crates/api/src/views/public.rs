//! Public pages: home, gallery, projects.

use domain::models::{AboutSection, GalleryCategory, GalleryItem, MediaType, Project, Service};
use maud::{html, Markup};

use super::{contact_details, layout, SiteChrome};
use crate::services::Flash;

/// Everything the homepage shows.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub about: Option<AboutSection>,
    pub services: Vec<Service>,
    pub featured_projects: Vec<Project>,
    pub featured_gallery: Vec<GalleryItem>,
}

pub fn home_page(chrome: &SiteChrome, page: &HomePage, flash: Option<&Flash>) -> Markup {
    let content = html! {
        section.hero #home {
            div.hero__container.container {
                h1.hero__title { (chrome.company_name()) }
                @if let Some(info) = &chrome.contact_info {
                    p.hero__description { (info.tagline) }
                }
                a.button href="#contact" { "Get a Quote" }
            }
        }

        @if let Some(about) = &page.about {
            section.about.section #about {
                span.section__subtitle { (about.subtitle) }
                h2.section__title { (about.title) }
                p.about__description { (about.description) }
                div.about__features {
                    @for feature in &about.features() {
                        div.about__feature {
                            h3 { (feature.title) }
                            p { (feature.description) }
                        }
                    }
                }
            }
        }

        section.services.section #services {
            h2.section__title { "Our Services" }
            div.services__grid {
                @for service in &page.services {
                    article.services__card id={ "service-" (service.slug) } {
                        span.services__icon { (service.icon) }
                        h3.services__title { (service.title) }
                        p.services__description { (service.description) }
                    }
                }
            }
        }

        section.projects.section #projects {
            h2.section__title { "Featured Projects" }
            div.projects__grid {
                @for project in &page.featured_projects {
                    (project_card(project, &chrome.media_prefix))
                }
            }
            a class="button button--ghost" href="/projects/" { "View All Projects" }
        }

        section.gallery.section #gallery {
            h2.section__title { "Our Work" }
            div.gallery__grid {
                @for item in &page.featured_gallery {
                    (gallery_card(item, &chrome.media_prefix))
                }
            }
            a class="button button--ghost" href="/gallery/" { "View Full Gallery" }
        }

        section.contact.section #contact {
            h2.section__title { "Contact Us" }
            div.contact__container {
                @if let Some(info) = &chrome.contact_info {
                    div.contact__info { (contact_details(info)) }
                }
                (contact_form())
            }
        }
    };

    layout("Home", chrome, flash, content)
}

pub fn gallery_page(chrome: &SiteChrome, items: &[GalleryItem]) -> Markup {
    let content = html! {
        section.gallery.section {
            h1.section__title { "Gallery" }
            @if items.is_empty() {
                p.empty { "No gallery items yet." }
            } @else {
                div.gallery__filters {
                    button.gallery__filter.is-active type="button" data-filter="all" { "All" }
                    @for category in GalleryCategory::ALL {
                        button.gallery__filter type="button" data-filter=(category.as_str()) {
                            (category.label())
                        }
                    }
                }
            }
            div.gallery__grid {
                @for item in items {
                    (gallery_card(item, &chrome.media_prefix))
                }
            }
        }
    };
    layout("Gallery", chrome, None, content)
}

pub fn projects_page(chrome: &SiteChrome, projects: &[Project]) -> Markup {
    let content = html! {
        section.projects.section {
            h1.section__title { "Our Projects" }
            @if projects.is_empty() {
                p.empty { "No projects yet." }
            }
            div.projects__grid {
                @for project in projects {
                    (project_card(project, &chrome.media_prefix))
                }
            }
        }
    };
    layout("Projects", chrome, None, content)
}

fn project_card(project: &Project, media_prefix: &str) -> Markup {
    html! {
        article.projects__card id={ "project-" (project.slug) } {
            @if let Some(src) = project.image_src(media_prefix) {
                img.projects__img src=(src) alt=(project.title) loading="lazy";
            }
            div.projects__data {
                span.projects__category { (project.category) }
                h3.projects__title { (project.title) }
                p.projects__description { (project.short_description) }
                ul.projects__meta {
                    @if !project.client_name.is_empty() {
                        li { "Client: " (project.client_name) }
                    }
                    @if !project.location.is_empty() {
                        li { "Location: " (project.location) }
                    }
                    @if !project.completion_date.is_empty() {
                        li { "Completed: " (project.completion_date) }
                    }
                }
            }
        }
    }
}

fn gallery_card(item: &GalleryItem, media_prefix: &str) -> Markup {
    html! {
        figure.gallery__item data-category=(item.category.as_str()) {
            @match item.media_type {
                MediaType::Image => {
                    @if let Some(src) = item.media_src(media_prefix) {
                        img.gallery__img src=(src) alt=(item.title) loading="lazy";
                    }
                },
                MediaType::Video => {
                    @if let Some(src) = item.media_src(media_prefix) {
                        video.gallery__video src=(src) poster=[item.thumbnail_src(media_prefix)] controls preload="metadata" {}
                    }
                },
            }
            figcaption {
                span.gallery__category { (item.category.label()) }
                h3.gallery__title { (item.title) }
                p.gallery__description { (item.description) }
            }
        }
    }
}

fn contact_form() -> Markup {
    html! {
        form.contact__form #contact-form action="/contact/submit/" method="post" {
            div.form__group {
                label for="name" { "Name" }
                input.form__input #name type="text" name="name" maxlength="200" required;
            }
            div.form__group {
                label for="email" { "Email" }
                input.form__input #email type="email" name="email" maxlength="254" required;
            }
            div.form__group {
                label for="subject" { "Subject" }
                input.form__input #subject type="text" name="subject" maxlength="300" required;
            }
            div.form__group {
                label for="message" { "Message" }
                textarea.form__input #message name="message" rows="6" required {}
            }
            button.form__button.button type="submit" { "Send Message" }
        }
    }
}
