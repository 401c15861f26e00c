// src/application/access.rs
use crate::application::{
    dto::Actor,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::Role;

/// Single capability check used by every role-gated operation. Fails before
/// any storage access happens.
pub fn require_role(actor: &Actor, allowed: &[Role]) -> ApplicationResult<()> {
    if allowed.contains(&actor.role) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "role '{}' may not perform this action",
            actor.role
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    fn actor(role: Role) -> Actor {
        Actor::new(UserId::new(1).unwrap(), role)
    }

    #[test]
    fn allowed_role_passes() {
        assert!(require_role(&actor(Role::Admin), &[Role::Admin, Role::AdsManager]).is_ok());
    }

    #[test]
    fn disallowed_role_is_forbidden() {
        let err = require_role(&actor(Role::Author), &[Role::Admin, Role::AdsManager])
            .expect_err("author must be rejected");
        assert!(matches!(err, ApplicationError::Forbidden(_)));
    }
}
