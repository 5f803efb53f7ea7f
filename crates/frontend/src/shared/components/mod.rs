pub mod breadcrumbs;
pub mod cart_drawer;
pub mod ui;
