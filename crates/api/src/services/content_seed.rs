//! Populates empty content tables with the stock company content.

use domain::errors::ContentError;
use domain::services::seed;
use persistence::repositories::{
    AboutRepository, ContactInfoRepository, GalleryRepository, ProjectRepository,
    ServiceRepository,
};
use sqlx::PgPool;
use tracing::info;

/// Rows inserted per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub about: usize,
    pub contact_info: usize,
    pub services: usize,
    pub projects: usize,
    pub gallery: usize,
}

/// Seeds each table that has no rows; tables with content are left alone.
pub async fn seed_content(pool: &PgPool) -> Result<SeedReport, ContentError> {
    let mut report = SeedReport::default();

    let about = AboutRepository::new(pool.clone());
    if about.count().await? == 0 {
        about.create(&seed::default_about()).await?;
        report.about = 1;
    } else {
        info!("About section already present - skipping seed");
    }

    let contact_info = ContactInfoRepository::new(pool.clone());
    if contact_info.count().await? == 0 {
        contact_info.create(&seed::default_contact_info()).await?;
        report.contact_info = 1;
    } else {
        info!("Contact information already present - skipping seed");
    }

    let services = ServiceRepository::new(pool.clone());
    if services.count().await? == 0 {
        for req in seed::default_services() {
            services.create(&req).await?;
            report.services += 1;
        }
    } else {
        info!("Services already present - skipping seed");
    }

    let projects = ProjectRepository::new(pool.clone());
    if projects.count().await? == 0 {
        for req in seed::default_projects() {
            projects.create(&req).await?;
            report.projects += 1;
        }
    } else {
        info!("Projects already present - skipping seed");
    }

    let gallery = GalleryRepository::new(pool.clone());
    if gallery.count().await? == 0 {
        for req in seed::default_gallery() {
            gallery.create(&req).await?;
            report.gallery += 1;
        }
    } else {
        info!("Gallery items already present - skipping seed");
    }

    info!(
        about = report.about,
        contact_info = report.contact_info,
        services = report.services,
        projects = report.projects,
        gallery = report.gallery,
        "Content seed finished"
    );

    Ok(report)
}
