use thiserror::Error;

/// Marketplace role attached to an account, e.g. "client" or "writer".
/// Free-form, bounded in length only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role(String);

#[derive(Debug, Error, PartialEq)]
pub enum RoleError {
    #[error("Role must be between 2 and 10 characters")]
    InvalidLength,
}

impl TryFrom<String> for Role {
    type Error = RoleError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let trimmed = raw.trim();
        if !(2..=10).contains(&trimmed.chars().count()) {
            return Err(RoleError::InvalidLength);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Role {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_typical_roles() {
        for raw in ["client", "writer", "admin"] {
            assert!(Role::try_from(raw.to_string()).is_ok(), "{raw}");
        }
    }

    #[test]
    fn test_rejects_out_of_bounds_roles() {
        for raw in ["", "c", "a-role-that-is-too-long"] {
            let result = Role::try_from(raw.to_string());
            assert_eq!(result.unwrap_err(), RoleError::InvalidLength, "{raw}");
        }
    }
}
