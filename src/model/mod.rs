//! Plain data types: the entities stored by the actors and the payloads that create them.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
