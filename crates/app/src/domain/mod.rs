//! Emporium Domain Concerns

pub mod carts;
pub mod catalog;
pub mod customers;
pub mod inventory;
pub mod orders;
pub mod payments;
