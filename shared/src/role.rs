use std::str::FromStr;

use strum_macros::EnumString;

/// Roles the portal knows how to gate on. Role names coming from claims are
/// matched ignoring ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Student,
    Teacher,
    Admin,
    ExamHead,
}

impl Role {
    pub fn from_name(name: &str) -> Option<Role> {
        Role::from_str(name.trim()).ok()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
            Role::ExamHead => "Exam Head",
        }
    }
}
