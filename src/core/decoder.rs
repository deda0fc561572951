//! 점자 줄 디코더 (모드 상태 기계)
//!
//! 한 줄을 왼쪽에서 오른쪽으로 읽으며 숫자/영어 모드와 조합 중인 한글
//! 음절 버퍼를 추적합니다. 규칙은 우선순위 순서로 적용되고, 먼저 맞은
//! 규칙이 칸을 소비합니다.

use std::collections::HashMap;

use crate::core::cell::{normalize, Cell};
use crate::core::hangul::{
    choseong_to_jamo_char, compose_syllable, decompose_syllable, jongseong_to_jamo_char,
    reattach_jongseong, FILLER_CHOSEONG,
};
use crate::core::pattern::PatternIndex;
use crate::tables::{TableSet, STANDARD};

/// 점자가 아닌 칸의 자리 표시 값 (어느 표에도 없음)
const NOT_BRAILLE: u8 = 0xFF;

/// 숫자 모드 전용 칸: 쉼표 ⠂
const NUMBER_COMMA: u8 = 2;
/// 숫자 모드 전용 칸: 마침표 ⠲
const NUMBER_PERIOD: u8 = 50;
/// 숫자 모드 전용 칸: 붙임표 ⠤
const NUMBER_HYPHEN: u8 = 36;

/// 조합 중인 한글 음절 버퍼
///
/// 줄마다 Empty로 시작하고, 한글이 아닌 토큰/지시점형/공백/줄 끝을
/// 만나면 들고 있던 내용을 강제로 내보냅니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// 비어 있음
    Empty,
    /// 초성만 대기 중
    Cho(u8),
    /// 초성+중성 대기 중 (받침이 올 수 있어 아직 미확정)
    ChoJung(u8, u8),
}

impl Pending {
    /// 대기 중인 내용을 확정하여 출력 버퍼에 추가
    fn flush_into(&mut self, out: &mut String) {
        match *self {
            Pending::Empty => {}
            Pending::Cho(cho) => {
                if let Some(c) = choseong_to_jamo_char(cho) {
                    out.push(c);
                }
            }
            Pending::ChoJung(cho, jung) => {
                if let Some(c) = compose_syllable(cho, jung, 0) {
                    out.push(c);
                }
            }
        }
        *self = Pending::Empty;
    }
}

/// 유니코드 점자 -> 텍스트 디코더
///
/// 생성 시 점자표로 색인을 만들어 이후 읽기 전용으로 공유합니다.
/// 줄 단위 상태는 decode 호출마다 새로 만들므로 &self로 동시 사용 가능.
pub struct Decoder {
    tables: TableSet,
    choseong: HashMap<u8, u8>,
    jongseong: HashMap<u8, u8>,
    digits: HashMap<u8, char>,
    alphabet: HashMap<u8, char>,
    jungseong_index: PatternIndex<u8>,
    shortcut_index: PatternIndex<String>,
    symbol_index: PatternIndex<String>,
}

impl Decoder {
    /// 표준 한국 점자표로 생성
    pub fn new() -> Self {
        Self::with_tables(STANDARD.clone())
    }

    /// 주입된 점자표로 생성
    pub fn with_tables(tables: TableSet) -> Self {
        let choseong = tables.choseong.iter().copied().collect();
        let jongseong = tables.jongseong.iter().copied().collect();
        let digits = tables.digits.iter().copied().collect();
        let alphabet = tables.alphabet.iter().copied().collect();
        let jungseong_index = PatternIndex::build(tables.jungseong.iter().cloned());
        let shortcut_index = PatternIndex::build(tables.shortcuts.iter().cloned());
        let symbol_index = PatternIndex::build(tables.symbols.iter().cloned());
        log::debug!(
            "점자표 색인 생성: 중성 {}개, 약자 {}개, 문장부호 {}개",
            tables.jungseong.len(),
            tables.shortcuts.len(),
            tables.symbols.len()
        );
        Self {
            tables,
            choseong,
            jongseong,
            digits,
            alphabet,
            jungseong_index,
            shortcut_index,
            symbol_index,
        }
    }

    /// 전체 입력 디코딩: 줄 단위로 나눠 독립적으로 처리 후 다시 연결
    /// 줄바꿈 수는 입력과 1:1로 유지됨
    pub fn decode(&self, input: &str) -> String {
        input
            .split('\n')
            .map(|line| self.decode_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 한 줄 디코딩 (모드/버퍼 상태는 이 호출 안에서만 존재)
    pub fn decode_line(&self, line: &str) -> String {
        let cells: Vec<Cell> = line.chars().map(normalize).collect();
        let dots: Vec<u8> = cells
            .iter()
            .map(|c| c.dots().unwrap_or(NOT_BRAILLE))
            .collect();
        let marks = self.tables.marks;

        let mut out = String::new();
        let mut pending = Pending::Empty;
        let mut number_mode = false;
        let mut english_mode = false;
        let mut i = 0;

        while i < cells.len() {
            let dot = match cells[i] {
                Cell::Dots(d) => d,
                // 1. 점자가 아닌 문자 / 줄바꿈: 버퍼 확정 후 그대로 통과
                Cell::Newline | Cell::Other(_) => {
                    pending.flush_into(&mut out);
                    match cells[i] {
                        Cell::Newline => out.push('\n'),
                        Cell::Other(c) => out.push(c),
                        Cell::Dots(_) => unreachable!(),
                    }
                    number_mode = false;
                    i += 1;
                    continue;
                }
            };

            // 2. 수표
            if dot == marks.number {
                pending.flush_into(&mut out);
                number_mode = true;
                i += 1;
                continue;
            }

            // 3. 영어 시작표
            if dot == marks.english {
                pending.flush_into(&mut out);
                english_mode = true;
                i += 1;
                continue;
            }

            // 4. 영어 종료표 (영어 모드일 때만)
            if dot == marks.english_end && english_mode {
                english_mode = false;
                i += 1;
                continue;
            }

            // 5. 공백 칸
            // 숫자 뒤에 한글이 바로 이어지면 (연도 + 단위명사 등)
            // 그 공백은 서식용이므로 생략
            if dot == 0 {
                pending.flush_into(&mut out);
                if !(number_mode && self.korean_unit_at(&dots, i + 1)) {
                    out.push(' ');
                }
                number_mode = false;
                i += 1;
                continue;
            }

            // 6. 숫자 모드
            if number_mode {
                if let Some(&d) = self.digits.get(&dot) {
                    out.push(d);
                    i += 1;
                    continue;
                }
                match dot {
                    NUMBER_COMMA => {
                        out.push(',');
                        i += 1;
                        continue;
                    }
                    NUMBER_PERIOD => {
                        out.push('.');
                        i += 1;
                        continue;
                    }
                    NUMBER_HYPHEN => {
                        out.push('\u{2010}');
                        i += 1;
                        continue;
                    }
                    _ => {}
                }
                // 자음 이스케이프표 + ⠔ 반복 = 참조 별표
                if dot == marks.korean_consonant {
                    let mut n = 0;
                    while dots.get(i + 1 + n) == Some(&marks.asterisk) {
                        n += 1;
                    }
                    if n > 0 {
                        for _ in 0..n {
                            out.push('*');
                        }
                        i += 1 + n;
                        continue;
                    }
                }
                // 그 외의 칸은 숫자 모드를 끝내고 아래 규칙으로
                number_mode = false;
            }

            // 7. 영어 모드
            if english_mode {
                if dot == marks.uppercase {
                    if dots.get(i + 1) == Some(&marks.uppercase) {
                        // 대문자표 두 번: 공백/종료표 전까지 단어 전체 대문자
                        i += 2;
                        while i < dots.len() && dots[i] != 0 && dots[i] != marks.english_end {
                            if let Some(&c) = self.alphabet.get(&dots[i]) {
                                out.push(c.to_ascii_uppercase());
                                i += 1;
                            } else if let Some((text, len)) = self.symbol_index.match_at(&dots, i)
                            {
                                out.push_str(text);
                                i += len;
                            } else {
                                i += 1;
                            }
                        }
                        continue;
                    }
                    if let Some(&c) = dots.get(i + 1).and_then(|d| self.alphabet.get(d)) {
                        out.push(c.to_ascii_uppercase());
                        i += 2;
                        continue;
                    }
                    // 대문자표 뒤가 글자가 아니면 소비하지 않고 부호 일치로
                    // (⠠⠦ = 아포스트로피)
                } else if let Some(&c) = self.alphabet.get(&dot) {
                    out.push(c);
                    i += 1;
                    continue;
                }
            }

            // 8. 문장부호 (최장 일치)
            // 초성과 같은 칸이고 뒤에 한글이 이어지면 부호 해석을 버리고
            // 규칙 10(초성)으로 넘김 — 부호와 자음 점형이 겹치는 경우
            // 한글 조합이 우선
            if let Some((text, len)) = self.symbol_index.match_at(&dots, i) {
                let korean_continues = self.choseong.contains_key(&dot)
                    && (self.shortcut_index.matches_at(&dots, i + 1)
                        || self.jungseong_index.matches_at(&dots, i + 1));
                if !korean_continues {
                    pending.flush_into(&mut out);
                    out.push_str(text);
                    i += len;
                    continue;
                }
            }

            // 9. 약자
            if let Some((text, len)) = self.shortcut_index.match_at(&dots, i) {
                let syllable = single_syllable(text);

                // 9a. 대기 초성 + ㅇ 시작 약자 접합 (ㄴ + 영 -> 녕)
                if let Pending::Cho(cho) = pending {
                    if let Some((c0, jung, jong)) =
                        syllable.and_then(decompose_syllable)
                    {
                        if c0 == FILLER_CHOSEONG {
                            if let Some(c) = compose_syllable(cho, jung, jong) {
                                out.push(c);
                                pending = Pending::Empty;
                                i += len;
                                continue;
                            }
                        }
                    }
                }

                // 9b. 초성과 같은 칸의 한 칸 약자 뒤에 약자/중성이 오면
                // 아직 음절이 아니라 초성으로 재해석 (나 + 영 -> ㄴ + 영)
                if len == 1 {
                    if let Some(&cho) = self.choseong.get(&dot) {
                        if self.shortcut_index.matches_at(&dots, i + 1)
                            || self.jungseong_index.matches_at(&dots, i + 1)
                        {
                            pending.flush_into(&mut out);
                            pending = Pending::Cho(cho);
                            i += 1;
                            continue;
                        }
                    }
                }

                // 9c. 약자 + 단독 받침 -> 받침을 붙여 재조합 (바 + ㄹ -> 발)
                // 영어 시작표와 겹치는 받침 칸은 제외
                if let Some(s) = syllable {
                    if let Some(&next) = dots.get(i + len) {
                        if next != marks.english {
                            if let Some(&jong) = self.jongseong.get(&next) {
                                if let Some(c) = reattach_jongseong(s, jong) {
                                    pending.flush_into(&mut out);
                                    out.push(c);
                                    i += len + 1;
                                    continue;
                                }
                            }
                        }
                    }
                }

                pending.flush_into(&mut out);
                out.push_str(text);
                i += len;
                continue;
            }

            // 10. 초성: 내보내지 않고 대기
            if let Some(&cho) = self.choseong.get(&dot) {
                pending.flush_into(&mut out);
                pending = Pending::Cho(cho);
                i += 1;
                continue;
            }

            // 11. 중성 (최장 일치)
            if let Some((&jung, len)) = self.jungseong_index.match_at(&dots, i) {
                match pending {
                    Pending::Cho(cho) => pending = Pending::ChoJung(cho, jung),
                    _ => {
                        // 이미 완성 대기 중이면 먼저 확정하고,
                        // 초성 없는 모음은 ㅇ을 채워 새로 시작
                        pending.flush_into(&mut out);
                        pending = Pending::ChoJung(FILLER_CHOSEONG, jung);
                    }
                }
                i += len;
                continue;
            }

            // 12. 종성: 대기 중인 초성+중성이 있으면 즉시 음절 확정
            if let Some(&jong) = self.jongseong.get(&dot) {
                if let Pending::ChoJung(cho, jung) = pending {
                    if let Some(c) = compose_syllable(cho, jung, jong) {
                        out.push(c);
                    }
                    pending = Pending::Empty;
                } else {
                    pending.flush_into(&mut out);
                    if let Some(c) = jongseong_to_jamo_char(jong) {
                        out.push(c);
                    }
                }
                i += 1;
                continue;
            }

            // 13. 온표/자음 이스케이프: 다음 칸이 자음이면 단독 자모로 출력
            if dot == marks.korean_part || dot == marks.korean_consonant {
                pending.flush_into(&mut out);
                i += 1;
                if let Some(&next) = dots.get(i) {
                    if let Some(&cho) = self.choseong.get(&next) {
                        if let Some(c) = choseong_to_jamo_char(cho) {
                            out.push(c);
                        }
                        i += 1;
                    } else if let Some(&jong) = self.jongseong.get(&next) {
                        if let Some(c) = jongseong_to_jamo_char(jong) {
                            out.push(c);
                        }
                        i += 1;
                    }
                    // 그 외에는 지시만 소비하고 다음 칸은 다시 해석
                }
                continue;
            }

            // 14. 알 수 없는 칸: 버퍼만 확정하고 조용히 버림
            pending.flush_into(&mut out);
            i += 1;
        }

        pending.flush_into(&mut out);
        out
    }

    /// 공백 생략 판정: 해당 위치가 한글 단위(약자/초성/중성/종성)로
    /// 시작하는지. 영어 시작표 칸은 종성 ㅎ과 겹치므로 제외.
    fn korean_unit_at(&self, dots: &[u8], i: usize) -> bool {
        let Some(&d) = dots.get(i) else { return false };
        if d == self.tables.marks.english {
            return false;
        }
        self.shortcut_index.matches_at(dots, i)
            || self.choseong.contains_key(&d)
            || self.jungseong_index.matches_at(dots, i)
            || self.jongseong.contains_key(&d)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// 약자 출력이 한 글자 완성 음절일 때 그 문자 반환
fn single_syllable(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    decompose_syllable(c).map(|_| c)
}
