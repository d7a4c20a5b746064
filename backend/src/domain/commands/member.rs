//! Commands and results for membership operations.
use crate::domain::models::{Member, MemberRole};

#[derive(Debug, Clone)]
pub struct RegisterMemberCommand {
    pub name: String,
    pub email: String,
    pub role: MemberRole,
}

#[derive(Debug, Clone)]
pub struct RegisterMemberResult {
    pub member: Member,
}
