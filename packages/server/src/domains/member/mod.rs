//! Member domain - club members, their preferred event types, and the
//! events they are registered to

pub mod actions;
pub mod data;
pub mod models;

pub use data::MemberData;
pub use models::member::Member;
