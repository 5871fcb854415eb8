pub mod form_controller;
pub mod validation;

pub use form_controller::FormController;
