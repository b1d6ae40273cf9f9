pub mod atoms;
pub mod composite;
pub mod guards;
