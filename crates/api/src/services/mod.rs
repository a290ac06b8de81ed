//! Application services used by the route handlers and at startup.

pub mod admin_bootstrap;
pub mod contact_pipeline;
pub mod content_seed;
pub mod cookies;
pub mod flash;
pub mod media_storage;

pub use admin_bootstrap::bootstrap_admin;
pub use content_seed::seed_content;
pub use cookies::CookieHelper;
pub use flash::{Flash, FlashLevel};
pub use media_storage::{LocalMediaStorage, MediaFolder, MediaStorage, StoredMedia};
