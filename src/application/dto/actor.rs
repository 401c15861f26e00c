// src/application/dto/actor.rs
use crate::domain::user::{Role, UserId};

/// Identity and role claim for the requesting user, attached upstream by the
/// auth middleware and trusted here. Passed explicitly into every mutating
/// operation instead of being read from ambient state.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}
