pub mod breadcrumbs;
pub mod navigation;
pub mod parser;
pub mod route;

pub use breadcrumbs::{breadcrumbs, Crumb};
pub use navigation::{NavOutcome, NavigationController, NextAction};
pub use parser::parse;
pub use route::{Route, RouteName};
