pub mod order;

pub use order::{place_order, settle_order, CheckoutError, OrderLine, OrderReceipt};
