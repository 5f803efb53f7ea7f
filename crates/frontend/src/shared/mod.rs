pub mod components;
pub mod icons;
pub mod location;
pub mod theme;
