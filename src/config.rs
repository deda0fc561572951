//! 점자표 파일 로드/저장 (JSON)
//!
//! 표준 점자표 대신 사용자 정의 표를 주입할 때 사용합니다.

use crate::tables::{korean, TableSet};
use std::fs;
use std::path::Path;

/// 점자표 파일 로드 (파일 없거나 파싱 실패 시 표준 점자표로 폴백)
pub fn load_table_set(path: &Path) -> TableSet {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("점자표 파싱 실패 ({}), 표준 점자표 사용", e);
            korean::standard()
        }),
        Err(_) => {
            log::warn!("점자표 파일 없음 ({}), 표준 점자표 사용", path.display());
            korean::standard()
        }
    }
}

/// 점자표 저장 (사용자 정의 표의 틀을 만들 때 사용)
pub fn save_table_set(table: &TableSet, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("점자표 디렉토리 생성 실패: {}", e))?;
    }
    let json =
        serde_json::to_string_pretty(table).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("점자표 파일 저장 실패: {}", e))?;
    Ok(())
}
