//! 통합 테스트 - 점자 디코딩 전체 경로

use jeomja::core::hangul::compose_syllable;
use jeomja::tables::STANDARD;
use jeomja::{ascii_braille_to_unicode, decode, Decoder};

/// 점형 값 나열을 유니코드 점자 문자열로
fn cells(dots: &[u8]) -> String {
    dots.iter()
        .map(|&d| char::from_u32(0x2800 + d as u32).unwrap())
        .collect()
}

#[test]
fn test_korean_sentences() {
    assert_eq!(decode("⠣⠒⠉⠻⠚⠠⠝⠬"), "안녕하세요");
    assert_eq!(decode("⠚⠒⠈⠪⠂"), "한글");
    assert_eq!(decode("⠘⠂⠈⠪⠃⠘⠾⠚⠥⠐⠂"), "발급번호:");
}

#[test]
fn test_document_line() {
    // 숫자/괄호/약자/공백 생략이 섞인 실제 문서 줄
    assert_eq!(decode("⠦⠄⠼⠃⠚⠃⠙⠀⠉⠡⠀⠈⠍⠗⠠⠭⠠⠴"), "(2024년 귀속)");
    assert_eq!(
        decode("⠠⠥⠊⠪⠁⠈⠪⠢⠗⠁⠨⠪⠶⠑⠻⠦⠄⠼⠃⠚⠃⠙⠀⠉⠡⠀⠈⠍⠗⠠⠭⠠⠴"),
        "소득금액증명(2024년 귀속)"
    );
}

#[test]
fn test_ascii_pipeline() {
    // ASCII 점자 입력 -> 유니코드 점자 -> 텍스트
    let unicode = ascii_braille_to_unicode(",ui{a@{5ra.{7e}8'#bjbd c* @mr,x,0");
    assert_eq!(decode(&unicode), "소득금액증명(2024년 귀속)");
    assert_eq!(decode(&ascii_braille_to_unicode("<3c]j,n+")), "안녕하세요");
}

#[test]
fn test_all_digits() {
    // 수표 + 각 숫자 칸
    for &(cell, digit) in &STANDARD.digits {
        let input = cells(&[STANDARD.marks.number, cell]);
        assert_eq!(decode(&input), digit.to_string(), "숫자 칸 {}", cell);
    }
}

#[test]
fn test_all_letters() {
    // 영어 시작표 + 글자 칸 + 종료표
    for &(cell, letter) in &STANDARD.alphabet {
        let input = cells(&[STANDARD.marks.english, cell, STANDARD.marks.english_end]);
        assert_eq!(decode(&input), letter.to_string(), "글자 칸 {}", cell);
    }
}

#[test]
fn test_all_vowels_with_choseong() {
    // ㄱ 초성(점형 8) + 각 중성 -> 받침 없는 음절
    for (pattern, jung) in &STANDARD.jungseong {
        let mut dots = vec![8u8];
        dots.extend_from_slice(pattern);
        let expected = compose_syllable(0, *jung, 0).unwrap();
        assert_eq!(decode(&cells(&dots)), expected.to_string(), "중성 {:?}", pattern);
    }
}

#[test]
fn test_uppercase_modes() {
    assert_eq!(decode("⠴⠠⠁⠃⠲"), "Ab");
    assert_eq!(decode("⠴⠠⠠⠁⠃⠉⠀⠙⠲"), "ABC d");
}

#[test]
fn test_shortcut_fusion() {
    // 약자 + 받침, 초성 + 모음 시작 약자
    assert_eq!(decode("⠘⠂"), "발");
    assert_eq!(decode("⠉⠻"), "녕");
    assert_eq!(decode("⠸⠎⠕"), "것이");
}

#[test]
fn test_space_elision_after_number() {
    // 연도 + 단위명사 사이 서식용 공백은 생략
    assert_eq!(decode("⠼⠃⠚⠃⠙⠀⠉⠡"), "2024년");
    // 한글이 아니면 공백 유지
    assert_eq!(decode("⠼⠁⠀⠴⠁⠲"), "1 a");
}

#[test]
fn test_multiline_document() {
    let input = "⠣⠒⠉⠻⠚⠠⠝⠬\n⠼⠃⠚⠃⠙⠀⠉⠡\n\n⠴⠁⠃⠉";
    assert_eq!(decode(input), "안녕하세요\n2024년\n\nabc");
}

#[test]
fn test_line_state_isolation() {
    // 숫자/영어 모드가 줄 경계를 넘지 않음
    assert_eq!(decode("⠼⠁\n⠁"), "1\nㄱ");
    assert_eq!(decode("⠴⠁\n⠁"), "a\nㄱ");
}

#[test]
fn test_passthrough_idempotent() {
    // 점자 블록 문자가 없으면 디코딩해도 변하지 않음
    let plain = "이미 디코딩된 텍스트, numbers 123!";
    assert_eq!(decode(plain), plain);
    assert_eq!(decode(&decode("⠣⠒⠉⠻")), decode("⠣⠒⠉⠻"));
}

#[test]
fn test_empty_input() {
    assert_eq!(decode(""), "");
    assert_eq!(decode("\n"), "\n");
}

#[test]
fn test_decoder_reuse() {
    // 디코더 하나를 &self로 반복 사용해도 결과 동일
    let d = Decoder::new();
    assert_eq!(d.decode("⠣⠒"), d.decode("⠣⠒"));
    assert_eq!(d.decode("⠣⠒"), "안");
}
