pub mod color;
pub mod parse;
pub mod random;
