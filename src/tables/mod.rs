//! 점자표 데이터 모델
//!
//! 디코더가 소비하는 모든 점형 매핑을 한 구조체로 묶어 주입/교체 가능하게
//! 합니다. 표준 한국 점자표는 [`korean::standard`]가 제공합니다.

pub mod korean;

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// 지시점형 칸 값 모음
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Marks {
    /// 수표 (숫자 시작)
    pub number: u8,
    /// 영어 시작표
    pub english: u8,
    /// 영어 종료표
    pub english_end: u8,
    /// 대문자표 (영어 모드 내부)
    pub uppercase: u8,
    /// 온표 (예약 이스케이프)
    pub korean_part: u8,
    /// 자음 이스케이프표
    pub korean_consonant: u8,
    /// 숫자 모드에서 자음 이스케이프표 뒤에 반복되어 별표가 되는 칸
    pub asterisk: u8,
}

/// 디코더 한 벌이 소비하는 점자표 전체
///
/// 생성 후 변경하지 않으며, 디코더는 읽기만 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSet {
    /// 초성: 점형 값 -> 초성 인덱스 (한 칸)
    pub choseong: Vec<(u8, u8)>,
    /// 종성: 점형 값 -> 종성 인덱스 (한 칸)
    pub jongseong: Vec<(u8, u8)>,
    /// 중성: 칸 열 -> 중성 인덱스 (1~2칸)
    pub jungseong: Vec<(Vec<u8>, u8)>,
    /// 약자: 칸 열 -> 완성 음절 (1~2칸)
    pub shortcuts: Vec<(Vec<u8>, String)>,
    /// 문장부호: 칸 열 -> 출력 문자열 (1~3칸)
    pub symbols: Vec<(Vec<u8>, String)>,
    /// 숫자: 점형 값 -> '0'~'9' (수표 이후)
    pub digits: Vec<(u8, char)>,
    /// 영어 알파벳: 점형 값 -> 소문자
    pub alphabet: Vec<(u8, char)>,
    /// 지시점형
    pub marks: Marks,
}

/// 표준 한국 점자표 (한 번 생성, 이후 읽기 전용 공유)
pub static STANDARD: LazyLock<TableSet> = LazyLock::new(korean::standard);
