//! ASCII 점자(BRL) -> 유니코드 점자 변환
//!
//! 디코딩 전에 선택적으로 거치는 1:1 문자 치환입니다.
//! https://en.wikipedia.org/wiki/Braille_ASCII

use crate::core::cell::BRAILLE_UNICODE_START;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 점형 값 순서의 Braille ASCII 표 (인덱스 = 점형 값 0~63)
const BRAILLE_ASCII: &str =
    " A1B'K2L@CIF/MSP\"E3H9O6R^DJG>NTQ,*5<-U8V.%[$+X!&;:4\\0Z7(_?W]#Y)=";

/// 문자 -> 점형 값 역방향 표
static DOT_VALUES: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    BRAILLE_ASCII
        .chars()
        .enumerate()
        .map(|(dots, c)| (c, dots as u8))
        .collect()
});

/// ASCII 점자 문자열을 유니코드 점자로 변환
/// 표에 없는 문자는 그대로 통과
/// 예: `abcd` -> `⠁⠃⠉⠙`
pub fn ascii_braille_to_unicode(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            // 소문자와 0x60대 기호(`{|}~ 등)는 0x40대와 같은 칸
            let key = if ('\u{60}'..='\u{7E}').contains(&c) {
                char::from(c as u8 - 0x20)
            } else {
                c
            };
            match DOT_VALUES.get(&key) {
                Some(&dots) => {
                    char::from_u32(BRAILLE_UNICODE_START + dots as u32).unwrap_or(c)
                }
                None => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete() {
        assert_eq!(BRAILLE_ASCII.chars().count(), 64);
        assert_eq!(DOT_VALUES.len(), 64);
    }

    #[test]
    fn test_basic_letters() {
        assert_eq!(ascii_braille_to_unicode("abcd"), "⠁⠃⠉⠙");
        assert_eq!(ascii_braille_to_unicode("ABCD"), "⠁⠃⠉⠙");
    }

    #[test]
    fn test_ascii_digits() {
        // Braille ASCII에서 '1'은 ⠂, '2'는 ⠆
        assert_eq!(ascii_braille_to_unicode("1234"), "⠂⠆⠒⠲");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(ascii_braille_to_unicode(" "), "⠀");
        assert_eq!(ascii_braille_to_unicode("="), "⠿");
    }

    #[test]
    fn test_lowercase_symbol_aliases() {
        // '{'는 '['와, '}'는 ']'와 같은 칸
        assert_eq!(ascii_braille_to_unicode("{"), ascii_braille_to_unicode("["));
        assert_eq!(ascii_braille_to_unicode("}"), ascii_braille_to_unicode("]"));
    }

    #[test]
    fn test_complex_strings() {
        assert_eq!(ascii_braille_to_unicode("<3c]j,n+"), "⠣⠒⠉⠻⠚⠠⠝⠬");
        assert_eq!(
            ascii_braille_to_unicode(",ui{a@{5ra.{7e}8'#bjbd c* @mr,x,0"),
            "⠠⠥⠊⠪⠁⠈⠪⠢⠗⠁⠨⠪⠶⠑⠻⠦⠄⠼⠃⠚⠃⠙⠀⠉⠡⠀⠈⠍⠗⠠⠭⠠⠴"
        );
    }

    #[test]
    fn test_unmapped_passthrough() {
        assert_eq!(ascii_braille_to_unicode("안녕\n"), "안녕\n");
    }
}
