pub mod payment_method;
pub mod product_category;

pub use payment_method::PaymentMethod;
pub use product_category::ProductCategory;
