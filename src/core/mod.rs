pub mod cell;
pub mod decoder;
pub mod hangul;
pub mod pattern;
