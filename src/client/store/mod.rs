pub mod catalog;
pub mod reference;
