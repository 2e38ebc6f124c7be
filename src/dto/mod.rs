pub mod cart;
pub mod categories;
pub mod payments;
pub mod products;
