pub mod cart;
pub mod error;
pub mod line;

pub use cart::Cart;
pub use error::CartError;
pub use line::{CartLine, PricedLine};
