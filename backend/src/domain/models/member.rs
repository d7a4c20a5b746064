//! Domain model for a registered member.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membership role. Loan terms are keyed off this, so it is a closed enum:
/// unrecognized registration input is rejected at the boundary instead of
/// silently falling through to faculty terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Student,
    Faculty,
}

impl MemberRole {
    /// Loan period in days, measured from the borrow timestamp.
    pub fn loan_period_days(&self) -> i64 {
        match self {
            MemberRole::Student => 14,
            MemberRole::Faculty => 30,
        }
    }

    /// Maximum number of simultaneous loans, if any.
    pub fn borrow_limit(&self) -> Option<usize> {
        match self {
            MemberRole::Student => Some(3),
            MemberRole::Faculty => None,
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberRole::Student => write!(f, "Student"),
            MemberRole::Faculty => write!(f, "Faculty"),
        }
    }
}

impl FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(MemberRole::Student),
            "faculty" => Ok(MemberRole::Faculty),
            _ => Err(format!("Unrecognized member role: '{}'", s.trim())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    /// Ids of the books currently on loan, in borrow order.
    pub borrowed_books: Vec<String>,
}

impl Member {
    /// Format a member id from its sequence number.
    /// Example: 3 -> "U3"
    pub fn format_id(number: u64) -> String {
        format!("U{}", number)
    }

    /// Parse the sequence number out of a member id ("U3" -> 3).
    pub fn parse_id_number(id: &str) -> Option<u64> {
        id.strip_prefix('U').and_then(|n| n.parse().ok())
    }

    pub fn has_borrowed(&self, book_id: &str) -> bool {
        self.borrowed_books.iter().any(|b| b == book_id)
    }
}
