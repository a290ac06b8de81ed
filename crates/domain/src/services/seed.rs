//! Stock company content used to populate an empty site.

use crate::models::about::CreateAboutRequest;
use crate::models::contact_info::CreateContactInfoRequest;
use crate::models::gallery::{CreateGalleryItemRequest, GalleryCategory, MediaType};
use crate::models::project::CreateProjectRequest;
use crate::models::service::CreateServiceRequest;

const STOCK_IMAGE_URL: &str = "https://res.cloudinary.com/dxtx1kkwy/image/upload/v1737025117/WhatsApp_Image_2025-01-16_at_10.03.48_01ed99bf_glcnhc.jpg";

pub fn default_about() -> CreateAboutRequest {
    CreateAboutRequest {
        description: "Vishwakarma Mechfab has been at the forefront of mechanical engineering and fabrication \
innovation, delivering world-class solutions to industries across India. Our team of \
experienced engineers combines traditional engineering principles with modern technology \
to solve complex challenges."
            .to_string(),
        ..Default::default()
    }
}

pub fn default_contact_info() -> CreateContactInfoRequest {
    CreateContactInfoRequest::default()
}

fn service(title: &str, icon: &str, slug: &str, order: i32, description: &str) -> CreateServiceRequest {
    CreateServiceRequest {
        title: title.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        slug: Some(slug.to_string()),
        is_active: true,
        display_order: order,
    }
}

pub fn default_services() -> Vec<CreateServiceRequest> {
    vec![
        service(
            "Design & Engineering",
            "🔧",
            "design-engineering",
            1,
            "Custom mechanical design solutions from concept to completion, including 3D modeling, CAD drawings, and technical specifications.",
        ),
        service(
            "Manufacturing Solutions",
            "🏭",
            "manufacturing-solutions",
            2,
            "End-to-end manufacturing support including process optimization, quality control, and production planning for efficient operations.",
        ),
        service(
            "Consulting Services",
            "💡",
            "consulting-services",
            3,
            "Expert consulting for project planning, feasibility studies, technical audits, and engineering optimization strategies.",
        ),
        service(
            "Maintenance & Support",
            "🔍",
            "maintenance-support",
            4,
            "Preventive maintenance programs, troubleshooting, and ongoing technical support to ensure optimal equipment performance.",
        ),
        service(
            "Automation Solutions",
            "⚡",
            "automation-solutions",
            5,
            "Industrial automation design and implementation to improve efficiency, reduce costs, and enhance productivity.",
        ),
        service(
            "Analysis & Testing",
            "📊",
            "analysis-testing",
            6,
            "Comprehensive analysis including stress testing, thermal analysis, and performance evaluation for optimal design validation.",
        ),
    ]
}

struct ProjectSeed {
    title: &'static str,
    category: &'static str,
    short_description: &'static str,
    full_description: &'static str,
    client_name: &'static str,
    completion_date: &'static str,
    location: &'static str,
    slug: &'static str,
    display_order: i32,
}

pub fn default_projects() -> Vec<CreateProjectRequest> {
    [
        ProjectSeed {
            title: "Industrial HVAC System",
            category: "Industrial",
            short_description: "Complete HVAC system design and installation for a 50,000 sq ft manufacturing facility",
            full_description: "Comprehensive HVAC solution including design, installation, and commissioning for a large-scale manufacturing facility. The project involved custom ductwork fabrication, energy-efficient climate control systems, and advanced automation for optimal performance and reduced operating costs.",
            client_name: "ABC Manufacturing Ltd.",
            completion_date: "December 2024",
            location: "Gujarat, India",
            slug: "industrial-hvac-system",
            display_order: 1,
        },
        ProjectSeed {
            title: "Automotive Assembly Line",
            category: "Automotive",
            short_description: "Automated assembly line optimization resulting in 30% efficiency improvement",
            full_description: "Complete overhaul and optimization of automotive assembly line operations. Implementation of automated systems, robotic integration, and process improvements that resulted in significant efficiency gains. The project included custom fabrication of conveyor systems and automated tooling.",
            client_name: "Auto Industries Pvt. Ltd.",
            completion_date: "November 2024",
            location: "Porbandar, Gujarat",
            slug: "automotive-assembly-line",
            display_order: 2,
        },
        ProjectSeed {
            title: "Power Plant Maintenance",
            category: "Energy",
            short_description: "Comprehensive maintenance program for thermal power generation equipment",
            full_description: "Ongoing maintenance and support contract for thermal power plant equipment. Services include preventive maintenance, emergency repairs, parts fabrication, and performance optimization. Our team ensures maximum uptime and reliability of critical power generation systems.",
            client_name: "Gujarat Power Corporation",
            completion_date: "Ongoing",
            location: "Gujarat, India",
            slug: "power-plant-maintenance",
            display_order: 3,
        },
    ]
    .into_iter()
    .map(|p| CreateProjectRequest {
        title: p.title.to_string(),
        category: p.category.to_string(),
        short_description: p.short_description.to_string(),
        full_description: p.full_description.to_string(),
        image_url: STOCK_IMAGE_URL.to_string(),
        image_file: None,
        client_name: p.client_name.to_string(),
        completion_date: p.completion_date.to_string(),
        location: p.location.to_string(),
        slug: Some(p.slug.to_string()),
        is_featured: true,
        is_active: true,
        display_order: p.display_order,
    })
    .collect()
}

fn gallery_item(
    title: &str,
    description: &str,
    media_type: MediaType,
    category: GalleryCategory,
    is_featured: bool,
    display_order: i32,
) -> CreateGalleryItemRequest {
    CreateGalleryItemRequest {
        title: title.to_string(),
        description: description.to_string(),
        media_type,
        category,
        media_url: STOCK_IMAGE_URL.to_string(),
        media_file: None,
        thumbnail_url: match media_type {
            MediaType::Video => STOCK_IMAGE_URL.to_string(),
            MediaType::Image => String::new(),
        },
        thumbnail_file: None,
        is_featured,
        is_active: true,
        display_order,
    }
}

pub fn default_gallery() -> Vec<CreateGalleryItemRequest> {
    vec![
        gallery_item(
            "Workshop Operations",
            "Heavy machinery fabrication in progress at our state-of-the-art facility",
            MediaType::Image,
            GalleryCategory::Workshop,
            true,
            1,
        ),
        gallery_item(
            "Welding Excellence",
            "Expert welding and fabrication techniques in action",
            MediaType::Image,
            GalleryCategory::Welding,
            true,
            2,
        ),
        gallery_item(
            "CNC Machining Process",
            "Precision cutting and manufacturing with advanced CNC technology",
            MediaType::Video,
            GalleryCategory::Machinery,
            false,
            3,
        ),
        gallery_item(
            "Structural Steel Work",
            "Large scale structural fabrication and assembly",
            MediaType::Image,
            GalleryCategory::Fabrication,
            false,
            4,
        ),
        gallery_item(
            "Quality Inspection",
            "Rigorous quality control and inspection processes",
            MediaType::Image,
            GalleryCategory::Testing,
            false,
            5,
        ),
    ]
}
