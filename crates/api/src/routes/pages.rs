//! Public HTML pages.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use domain::models::ContactInfo;
use domain::services::{Listing, HOMEPAGE_FEATURED_GALLERY, HOMEPAGE_FEATURED_PROJECTS};
use persistence::repositories::{
    AboutRepository, ContactInfoRepository, GalleryRepository, ProjectRepository,
    ServiceRepository,
};

use crate::app::AppState;
use crate::error::PageError;
use crate::services::cookies::{append_set_cookie, extract_cookie, FLASH_COOKIE};
use crate::services::{CookieHelper, Flash};
use crate::views::{self, HomePage, SiteChrome};

fn site_chrome(state: &AppState, contact_info: Option<ContactInfo>) -> SiteChrome {
    SiteChrome {
        site_name: state.config.site.name.clone(),
        media_prefix: state.config.media.url_prefix.clone(),
        contact_info,
    }
}

/// Homepage: about, services, featured projects and gallery, contact form.
///
/// A pending flash message is shown once and its cookie cleared.
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, PageError> {
    let about_repo = AboutRepository::new(state.pool.clone());
    let contact_repo = ContactInfoRepository::new(state.pool.clone());
    let service_repo = ServiceRepository::new(state.pool.clone());
    let project_repo = ProjectRepository::new(state.pool.clone());
    let gallery_repo = GalleryRepository::new(state.pool.clone());

    let (about, contact_info, services, projects, gallery) = tokio::try_join!(
        about_repo.find_active(),
        contact_repo.find_active(),
        service_repo.list_public(Listing::all()),
        project_repo.list_public(Listing::featured(Some(HOMEPAGE_FEATURED_PROJECTS))),
        gallery_repo.list_public(Listing::featured(Some(HOMEPAGE_FEATURED_GALLERY))),
    )?;

    let page = HomePage {
        about: about.map(Into::into),
        services: services.into_iter().map(Into::into).collect(),
        featured_projects: projects.into_iter().map(Into::into).collect(),
        featured_gallery: gallery.into_iter().map(Into::into).collect(),
    };
    let chrome = site_chrome(&state, contact_info.map(Into::into));
    let flash = Flash::from_headers(&headers);

    let markup = views::home_page(&chrome, &page, flash.as_ref());
    let mut response = Html(markup.into_string()).into_response();

    if extract_cookie(&headers, FLASH_COOKIE).is_some() {
        let cookies = CookieHelper::new(&state.config.admin);
        append_set_cookie(response.headers_mut(), &cookies.clear_flash_cookie());
    }

    Ok(response)
}

/// Every active gallery item by `display_order`, newest first within a rank.
pub async fn gallery(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let contact_repo = ContactInfoRepository::new(state.pool.clone());
    let gallery_repo = GalleryRepository::new(state.pool.clone());

    let (contact_info, items) = tokio::try_join!(
        contact_repo.find_active(),
        gallery_repo.list_public(Listing::all()),
    )?;

    let items: Vec<_> = items.into_iter().map(Into::into).collect();
    let chrome = site_chrome(&state, contact_info.map(Into::into));
    Ok(Html(views::gallery_page(&chrome, &items).into_string()))
}

/// Every active project by `display_order`, newest first within a rank.
pub async fn projects(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let contact_repo = ContactInfoRepository::new(state.pool.clone());
    let project_repo = ProjectRepository::new(state.pool.clone());

    let (contact_info, projects) = tokio::try_join!(
        contact_repo.find_active(),
        project_repo.list_public(Listing::all()),
    )?;

    let projects: Vec<_> = projects.into_iter().map(Into::into).collect();
    let chrome = site_chrome(&state, contact_info.map(Into::into));
    Ok(Html(views::projects_page(&chrome, &projects).into_string()))
}

/// Fallback for unknown public paths.
pub async fn not_found() -> PageError {
    PageError::NotFound
}
