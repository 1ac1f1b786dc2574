//! Well-known admin role names.
//!
//! These must match the `ck_admins_role` constraint in `20260301000001_create_admins.sql`.

pub const ROLE_SUPER_ADMIN: &str = "SUPER_ADMIN";
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_MANAGER: &str = "MANAGER";
pub const ROLE_STAFF: &str = "STAFF";

/// Roles that may be requested at self-registration. `SUPER_ADMIN` is only
/// ever seeded or granted by another super admin.
pub const REGISTERABLE_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER, ROLE_STAFF];

/// Every role known to the system.
pub const ALL_ROLES: &[&str] = &[ROLE_SUPER_ADMIN, ROLE_ADMIN, ROLE_MANAGER, ROLE_STAFF];

/// Whether `role` may manage catalog, customers and delete orders.
pub fn is_admin_or_above(role: &str) -> bool {
    role == ROLE_SUPER_ADMIN || role == ROLE_ADMIN
}

/// Normalize a role name supplied by a client (`"admin"` -> `"ADMIN"`).
///
/// Returns `None` if the role is not one of [`ALL_ROLES`].
pub fn normalize_role(role: &str) -> Option<&'static str> {
    let upper = role.trim().to_ascii_uppercase();
    ALL_ROLES.iter().copied().find(|r| *r == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_accepts_any_case() {
        assert_eq!(normalize_role("manager"), Some(ROLE_MANAGER));
        assert_eq!(normalize_role(" Staff "), Some(ROLE_STAFF));
    }

    #[test]
    fn normalize_rejects_unknown_role() {
        assert_eq!(normalize_role("owner"), None);
    }

    #[test]
    fn only_top_two_roles_are_admin_or_above() {
        assert!(is_admin_or_above(ROLE_SUPER_ADMIN));
        assert!(is_admin_or_above(ROLE_ADMIN));
        assert!(!is_admin_or_above(ROLE_MANAGER));
        assert!(!is_admin_or_above(ROLE_STAFF));
    }
}
