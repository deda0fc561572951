//! 다중 칸 패턴의 최장 일치 색인
//!
//! 첫 칸의 점형 값으로 후보를 모으고, 긴 패턴부터 정확히 비교합니다.
//! 모음/약자/문장부호 세 범주가 같은 알고리즘을 각자의 표로 사용합니다.

use std::collections::HashMap;

/// 다중 칸 -> 출력 규칙 하나
#[derive(Debug, Clone)]
struct PatternEntry<T> {
    key: Vec<u8>,
    value: T,
}

/// 첫 점형 값 -> 길이 내림차순 후보 목록
#[derive(Debug, Clone)]
pub struct PatternIndex<T> {
    buckets: HashMap<u8, Vec<PatternEntry<T>>>,
}

impl<T> PatternIndex<T> {
    /// 패턴 목록으로 색인 생성 (한 번 생성 후 읽기 전용)
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Vec<u8>, T)>,
    {
        let mut buckets: HashMap<u8, Vec<PatternEntry<T>>> = HashMap::new();
        for (key, value) in entries {
            let Some(&first) = key.first() else { continue };
            buckets
                .entry(first)
                .or_default()
                .push(PatternEntry { key, value });
        }
        // 탐욕 일치가 짧은 패턴을 먼저 집지 않도록 긴 것부터
        for candidates in buckets.values_mut() {
            candidates.sort_by(|a, b| b.key.len().cmp(&a.key.len()));
        }
        Self { buckets }
    }

    /// `index` 위치에서 최장 일치 탐색
    /// 반환: (출력 값, 소비한 칸 수)
    pub fn match_at(&self, dots: &[u8], index: usize) -> Option<(&T, usize)> {
        let first = *dots.get(index)?;
        let candidates = self.buckets.get(&first)?;
        for candidate in candidates {
            let len = candidate.key.len();
            if index + len <= dots.len() && dots[index..index + len] == candidate.key[..] {
                return Some((&candidate.value, len));
            }
        }
        None
    }

    /// 해당 위치에서 일치하는 패턴이 있는지만 확인
    pub fn matches_at(&self, dots: &[u8], index: usize) -> bool {
        self.match_at(dots, index).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PatternIndex<&'static str> {
        PatternIndex::build(vec![
            (vec![13], "short"),
            (vec![13, 23], "long"),
            (vec![38, 4], "paren"),
            (vec![50, 50, 50], "ellipsis"),
        ])
    }

    #[test]
    fn test_longest_first() {
        let idx = sample();
        // 두 칸 패턴이 한 칸 패턴보다 먼저 일치해야 함
        assert_eq!(idx.match_at(&[13, 23], 0), Some((&"long", 2)));
        assert_eq!(idx.match_at(&[13, 99], 0), Some((&"short", 1)));
        assert_eq!(idx.match_at(&[13], 0), Some((&"short", 1)));
    }

    #[test]
    fn test_exact_sequence_equality() {
        let idx = sample();
        // 접두 일치가 아니라 전체 칸 일치
        assert_eq!(idx.match_at(&[38, 5], 0), None);
        assert_eq!(idx.match_at(&[50, 50], 0), None);
        assert_eq!(idx.match_at(&[50, 50, 50], 0), Some((&"ellipsis", 3)));
    }

    #[test]
    fn test_offset_and_bounds() {
        let idx = sample();
        assert_eq!(idx.match_at(&[0, 13, 23], 1), Some((&"long", 2)));
        // 슬라이스 끝을 넘는 후보는 건너뜀
        assert_eq!(idx.match_at(&[0, 13], 1), Some((&"short", 1)));
        assert_eq!(idx.match_at(&[13], 5), None);
        assert_eq!(idx.match_at(&[], 0), None);
    }

    #[test]
    fn test_unknown_first_dot() {
        let idx = sample();
        assert_eq!(idx.match_at(&[7], 0), None);
        assert!(!idx.matches_at(&[7], 0));
        assert!(idx.matches_at(&[13], 0));
    }
}
