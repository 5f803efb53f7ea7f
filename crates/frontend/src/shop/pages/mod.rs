pub mod category;
pub mod checkout;
pub mod home;
pub mod payment;
pub mod product;
