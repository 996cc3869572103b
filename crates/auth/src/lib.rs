//! Demo identity for the console: fixed roles and a toy credential check.

pub mod role;
pub mod user;

pub use role::Role;
pub use user::User;
