//! Rules for content types that have a single active record.

use std::fmt;

use crate::errors::ContentError;

/// Content types governed by the single-active-record rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingletonKind {
    About,
    ContactInfo,
}

impl SingletonKind {
    pub fn table(&self) -> &'static str {
        match self {
            SingletonKind::About => "about_sections",
            SingletonKind::ContactInfo => "contact_infos",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SingletonKind::About => "About section",
            SingletonKind::ContactInfo => "Contact info",
        }
    }

    /// Whether the last active record of this kind must survive deletion.
    ///
    /// Only contact info is protected; the About section may be deleted freely.
    pub fn protects_active(&self) -> bool {
        matches!(self, SingletonKind::ContactInfo)
    }

    /// Checks whether a record may be deleted.
    ///
    /// `active_count` is the number of active records of this kind, including
    /// the target when it is active.
    pub fn check_deletion(&self, target_is_active: bool, active_count: i64) -> Result<(), ContentError> {
        if self.protects_active() && target_is_active && active_count <= 1 {
            Err(ContentError::ProtectedDeletion(format!(
                "Cannot delete the only active {}",
                self.label().to_lowercase()
            )))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for SingletonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_info_sole_active_is_protected() {
        let result = SingletonKind::ContactInfo.check_deletion(true, 1);
        match result {
            Err(ContentError::ProtectedDeletion(msg)) => {
                assert_eq!(msg, "Cannot delete the only active contact info");
            }
            other => panic!("expected protected deletion, got {:?}", other),
        }
    }

    #[test]
    fn test_contact_info_inactive_can_be_deleted() {
        assert!(SingletonKind::ContactInfo.check_deletion(false, 1).is_ok());
        assert!(SingletonKind::ContactInfo.check_deletion(false, 0).is_ok());
    }

    #[test]
    fn test_about_never_protected() {
        assert!(SingletonKind::About.check_deletion(true, 1).is_ok());
    }

    #[test]
    fn test_tables() {
        assert_eq!(SingletonKind::About.table(), "about_sections");
        assert_eq!(SingletonKind::ContactInfo.table(), "contact_infos");
    }
}
