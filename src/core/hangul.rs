//! 유니코드 한글 음절 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 모음으로 시작하는 음절에 쓰는 무음 초성 ㅇ의 인덱스
pub const FILLER_CHOSEONG: u8 = 11;

/// 초성/중성/종성 인덱스로 완성된 한글 음절 생성
/// - cho: 초성 인덱스 (0~18)
/// - jung: 중성 인덱스 (0~20)
/// - jong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(cho: u8, jung: u8, jong: u8) -> Option<char> {
    if cho as u32 >= CHOSEONG_COUNT
        || jung as u32 >= JUNGSEONG_COUNT
        || jong as u32 >= JONGSEONG_COUNT
    {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (cho as u32 * JUNGSEONG_COUNT + jung as u32) * JONGSEONG_COUNT
        + jong as u32;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 한글 음절 블록 밖의 문자는 None (호출자가 통과 처리로 분기)
pub fn decompose_syllable(c: char) -> Option<(u8, u8, u8)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_BASE + 11171).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jong = offset % JONGSEONG_COUNT;
    let jung = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let cho = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((cho as u8, jung as u8, jong as u8))
}

/// 음절의 종성을 교체하여 재조합
/// 약자 음절 뒤에 받침이 따라붙는 경우에 사용 (바 + ㄹ -> 발)
pub fn reattach_jongseong(syllable: char, jong: u8) -> Option<char> {
    let (cho, jung, _) = decompose_syllable(syllable)?;
    compose_syllable(cho, jung, jong)
}

/// 초성 인덱스 -> 단독 자모 문자 (호환용 자모)
pub fn choseong_to_jamo_char(cho: u8) -> Option<char> {
    // 호환용 자모는 초성 순서와 다르므로 직접 매핑
    #[rustfmt::skip]
    const JAMO: [u32; 19] = [
        0x3131, // ㄱ
        0x3132, // ㄲ
        0x3134, // ㄴ
        0x3137, // ㄷ
        0x3138, // ㄸ
        0x3139, // ㄹ
        0x3141, // ㅁ
        0x3142, // ㅂ
        0x3143, // ㅃ
        0x3145, // ㅅ
        0x3146, // ㅆ
        0x3147, // ㅇ
        0x3148, // ㅈ
        0x3149, // ㅉ
        0x314A, // ㅊ
        0x314B, // ㅋ
        0x314C, // ㅌ
        0x314D, // ㅍ
        0x314E, // ㅎ
    ];
    JAMO.get(cho as usize).and_then(|&c| char::from_u32(c))
}

/// 중성 인덱스 -> 단독 모음 문자 (호환용 자모, ㅏ 0x314F ~ ㅣ 0x3163)
pub fn jungseong_to_jamo_char(jung: u8) -> Option<char> {
    if (jung as u32) < JUNGSEONG_COUNT {
        char::from_u32(0x314F + jung as u32)
    } else {
        None
    }
}

/// 종성 인덱스 -> 단독 자모 문자 (호환용 자모, 0 = 없음)
pub fn jongseong_to_jamo_char(jong: u8) -> Option<char> {
    #[rustfmt::skip]
    const JAMO: [u32; 28] = [
        0,      // (없음)
        0x3131, // ㄱ
        0x3132, // ㄲ
        0x3133, // ㄳ
        0x3134, // ㄴ
        0x3135, // ㄵ
        0x3136, // ㄶ
        0x3137, // ㄷ
        0x3139, // ㄹ
        0x313A, // ㄺ
        0x313B, // ㄻ
        0x313C, // ㄼ
        0x313D, // ㄽ
        0x313E, // ㄾ
        0x313F, // ㄿ
        0x3140, // ㅀ
        0x3141, // ㅁ
        0x3142, // ㅂ
        0x3144, // ㅄ
        0x3145, // ㅅ
        0x3146, // ㅆ
        0x3147, // ㅇ
        0x3148, // ㅈ
        0x314A, // ㅊ
        0x314B, // ㅋ
        0x314C, // ㅌ
        0x314D, // ㅍ
        0x314E, // ㅎ
    ];
    match JAMO.get(jong as usize) {
        Some(&0) | None => None,
        Some(&c) => char::from_u32(c),
    }
}
