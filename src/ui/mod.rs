pub mod components;
mod styles;

pub use styles::{setup_styles, APP_PADDING};
