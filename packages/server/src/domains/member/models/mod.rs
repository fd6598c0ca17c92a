pub mod associations;
pub mod member;
