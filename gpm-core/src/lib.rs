pub mod bounds;
pub mod detail;
pub mod difficulty;
pub mod i18n;
pub mod links;
pub mod location;
pub mod map_style;
pub mod swiss_grid;
