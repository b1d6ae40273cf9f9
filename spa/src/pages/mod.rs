pub mod admin;
pub mod common;
pub mod login;
pub mod not_found;
pub mod student;
pub mod teacher;
