pub mod color;
pub mod key;

pub use color::{Color, Palette};
pub use key::Key;
