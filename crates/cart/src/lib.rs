//! Shopping cart domain module.
//!
//! Business rules for the per-session cart: line items cloned from the
//! catalog, quantity updates, removal, totals and checkout. Deterministic
//! domain logic only (no IO, no storage).

pub mod cart;
pub mod item;

pub use cart::Cart;
pub use item::CartItem;
