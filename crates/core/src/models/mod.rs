pub mod cart;
pub mod courier;
pub mod money;
pub mod order;
pub mod product;
