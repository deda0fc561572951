//! 입력 문자 -> 점형 값(0~63) 정규화

/// 유니코드 점자 블록 시작 (⠀)
pub const BRAILLE_UNICODE_START: u32 = 0x2800;

/// 한 칸의 정규화 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// 점자 칸의 점형 값 (0 = 빈 칸/공백)
    Dots(u8),
    /// 줄바꿈 문자
    Newline,
    /// 점자가 아닌 문자 (원본 그대로 통과)
    Other(char),
}

impl Cell {
    /// 점형 값 반환 (점자 칸인 경우만)
    pub fn dots(&self) -> Option<u8> {
        match self {
            Cell::Dots(d) => Some(*d),
            _ => None,
        }
    }
}

/// 문자 하나를 정규화
/// 모든 입력이 셋 중 하나로 표현되므로 실패하지 않음
pub fn normalize(c: char) -> Cell {
    let code = c as u32;
    if (BRAILLE_UNICODE_START..BRAILLE_UNICODE_START + 0x40).contains(&code) {
        return Cell::Dots((code - BRAILLE_UNICODE_START) as u8);
    }
    if c == '\n' {
        return Cell::Newline;
    }
    Cell::Other(c)
}
