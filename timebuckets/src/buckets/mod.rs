pub mod bounds;
pub mod date_format;
pub mod decorate;
pub mod scaling;
pub mod selector;
pub mod state;
