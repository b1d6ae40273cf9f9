pub mod login_form;
pub mod responsive_drawer;
pub mod role_switcher;
