//! 표준 한국 점자표 (2020 한국 점자 규정 기준)
//!
//! 점형 값은 점 1=1, 2=2, 3=4, 4=8, 5=16, 6=32 의 비트 합입니다.
//! 예: ㄱ초성 ⠈ = 4점 = 8, ㅏ ⠣ = 1·2·6점 = 35.

use super::{Marks, TableSet};

/// 표준 점자표 생성
pub fn standard() -> TableSet {
    TableSet {
        // 초성 (ㅇ 초성은 점형이 없으므로 제외)
        choseong: vec![
            (8, 0),   // ⠈ ㄱ
            (9, 2),   // ⠉ ㄴ
            (10, 3),  // ⠊ ㄷ
            (16, 5),  // ⠐ ㄹ
            (17, 6),  // ⠑ ㅁ
            (24, 7),  // ⠘ ㅂ
            (32, 9),  // ⠠ ㅅ
            (40, 12), // ⠨ ㅈ
            (48, 14), // ⠰ ㅊ
            (11, 15), // ⠋ ㅋ
            (19, 16), // ⠓ ㅌ
            (25, 17), // ⠙ ㅍ
            (26, 18), // ⠚ ㅎ
        ],
        // 종성 (받침)
        jongseong: vec![
            (1, 1),   // ⠁ ㄱ
            (18, 4),  // ⠒ ㄴ
            (20, 7),  // ⠔ ㄷ
            (2, 8),   // ⠂ ㄹ
            (34, 16), // ⠢ ㅁ
            (3, 17),  // ⠃ ㅂ
            (4, 19),  // ⠄ ㅅ
            (12, 20), // ⠌ ㅆ
            (54, 21), // ⠶ ㅇ
            (5, 22),  // ⠅ ㅈ
            (6, 23),  // ⠆ ㅊ
            (22, 24), // ⠖ ㅋ
            (38, 25), // ⠦ ㅌ
            (50, 26), // ⠲ ㅍ
            (52, 27), // ⠴ ㅎ
        ],
        // 중성
        jungseong: vec![
            (vec![35], 0),      // ⠣ ㅏ
            (vec![23], 1),      // ⠗ ㅐ
            (vec![28], 2),      // ⠜ ㅑ
            (vec![28, 23], 3),  // ⠜⠗ ㅒ
            (vec![14], 4),      // ⠎ ㅓ
            (vec![29], 5),      // ⠝ ㅔ
            (vec![49], 6),      // ⠱ ㅕ
            (vec![12], 7),      // ⠌ ㅖ
            (vec![37], 8),      // ⠥ ㅗ
            (vec![39], 9),      // ⠧ ㅘ
            (vec![39, 23], 10), // ⠧⠗ ㅙ
            (vec![61], 11),     // ⠽ ㅚ
            (vec![44], 12),     // ⠬ ㅛ
            (vec![13], 13),     // ⠍ ㅜ
            (vec![15], 14),     // ⠏ ㅝ
            (vec![15, 23], 15), // ⠏⠗ ㅞ
            (vec![13, 23], 16), // ⠍⠗ ㅟ
            (vec![41], 17),     // ⠩ ㅠ
            (vec![42], 18),     // ⠪ ㅡ
            (vec![58], 19),     // ⠺ ㅢ
            (vec![21], 20),     // ⠕ ㅣ
        ],
        // 약자 (ㅏ 생략형 + 모음 시작 음절 + 두 칸 약자)
        shortcuts: vec![
            (vec![43], "가".into()), // ⠫
            (vec![9], "나".into()),  // ⠉ (ㄴ초성과 동일 칸)
            (vec![10], "다".into()),
            (vec![17], "마".into()),
            (vec![24], "바".into()),
            (vec![7], "사".into()), // ⠇
            (vec![40], "자".into()),
            (vec![11], "카".into()),
            (vec![19], "타".into()),
            (vec![25], "파".into()),
            (vec![26], "하".into()),
            (vec![57], "억".into()), // ⠹
            (vec![62], "언".into()), // ⠾
            (vec![30], "얼".into()), // ⠞
            (vec![33], "연".into()), // ⠡
            (vec![51], "열".into()), // ⠳
            (vec![59], "영".into()), // ⠻
            (vec![45], "옥".into()), // ⠭
            (vec![55], "온".into()), // ⠷
            (vec![63], "옹".into()), // ⠿ (온표와 동일 칸, 약자가 우선)
            (vec![27], "운".into()), // ⠛
            (vec![47], "울".into()), // ⠯
            (vec![53], "은".into()), // ⠵
            (vec![46], "을".into()), // ⠮
            (vec![31], "인".into()), // ⠟
            (vec![56, 14], "것".into()), // ⠸⠎
            (vec![32, 59], "성".into()),
            (vec![40, 59], "정".into()),
            (vec![48, 59], "청".into()),
        ],
        // 문장부호
        // ⠦ 하나는 물음표와 여는 따옴표가 같은 칸이며 따옴표로 출력
        symbols: vec![
            (vec![22], "!".into()),
            (vec![50], ".".into()),
            (vec![16], ",".into()),
            (vec![16, 2], ":".into()),
            (vec![48, 6], ";".into()),
            (vec![36], "-".into()),
            (vec![36, 36], "―".into()),
            (vec![38], "\"".into()),
            (vec![52], "\"".into()), // 닫는 따옴표 (영어 시작표와 동일 칸)
            (vec![32, 38], "'".into()),
            (vec![8, 20], "~".into()),
            (vec![50, 50, 50], "…".into()),
            (vec![32, 32, 32], "⋯".into()),
            (vec![38, 4], "(".into()),
            (vec![32, 52], ")".into()),
            (vec![38, 2], "{".into()),
            (vec![16, 52], "}".into()),
            (vec![38, 6], "[".into()),
            (vec![48, 52], "]".into()),
            (vec![16, 6], "·".into()),
            (vec![16, 38], "「".into()),
            (vec![52, 2], "」".into()),
            (vec![48, 38], "『".into()),
            (vec![52, 6], "』".into()),
            (vec![56, 12], "/".into()),
            (vec![16, 54], "〈".into()),
            (vec![54, 2], "〉".into()),
            (vec![48, 54], "《".into()),
            (vec![54, 6], "》".into()),
        ],
        // 숫자 (수표 이후, 영어 a~j와 동일 칸)
        digits: vec![
            (1, '1'),
            (3, '2'),
            (9, '3'),
            (25, '4'),
            (17, '5'),
            (11, '6'),
            (27, '7'),
            (19, '8'),
            (10, '9'),
            (26, '0'),
        ],
        // 영어 알파벳
        alphabet: vec![
            (1, 'a'),
            (3, 'b'),
            (9, 'c'),
            (25, 'd'),
            (17, 'e'),
            (11, 'f'),
            (27, 'g'),
            (19, 'h'),
            (10, 'i'),
            (26, 'j'),
            (5, 'k'),
            (7, 'l'),
            (13, 'm'),
            (29, 'n'),
            (21, 'o'),
            (15, 'p'),
            (31, 'q'),
            (23, 'r'),
            (14, 's'),
            (30, 't'),
            (37, 'u'),
            (39, 'v'),
            (58, 'w'),
            (45, 'x'),
            (61, 'y'),
            (53, 'z'),
        ],
        marks: Marks {
            number: 60,           // ⠼
            english: 52,          // ⠴
            english_end: 50,      // ⠲
            uppercase: 32,        // ⠠
            korean_part: 63,      // ⠿
            korean_consonant: 56, // ⠸
            asterisk: 20,         // ⠔
        },
    }
}
