pub mod check;
pub mod locales;
pub mod validate;
