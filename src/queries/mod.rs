pub mod resolver;
pub mod services;
pub mod validation;
