pub mod category_grid;
pub mod hero;
pub mod product_card;
pub mod product_section;
