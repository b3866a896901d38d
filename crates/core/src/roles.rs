//! Well-known role and account-status constants.
//!
//! These must match the seed data in the `accounts` migrations.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

pub const ACCOUNT_ACTIVE: &str = "active";
pub const ACCOUNT_BLOCKED: &str = "blocked";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// All valid account statuses.
pub const VALID_ACCOUNT_STATUSES: &[&str] = &[ACCOUNT_ACTIVE, ACCOUNT_BLOCKED];

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}

/// Validate that an account status string is one of the accepted values.
pub fn validate_account_status(status: &str) -> Result<(), String> {
    if VALID_ACCOUNT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid account status '{status}'. Must be one of: {}",
            VALID_ACCOUNT_STATUSES.join(", ")
        ))
    }
}
