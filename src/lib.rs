pub mod ascii;
pub mod config;
pub mod core;
pub mod tables;

pub use ascii::ascii_braille_to_unicode;
pub use crate::core::decoder::Decoder;

/// 표준 점자표로 유니코드 점자 문자열을 텍스트로 디코딩
pub fn decode(input: &str) -> String {
    Decoder::new().decode(input)
}
