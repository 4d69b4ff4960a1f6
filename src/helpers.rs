pub mod converters;
pub mod render;
