//! jeomja - 점자 -> 텍스트 디코더 CLI

use jeomja::config::load_table_set;
use jeomja::{ascii_braille_to_unicode, Decoder};
use std::io::Read;
use std::path::PathBuf;
use std::process;

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut ascii_input = false;
    let mut tables_path: Option<PathBuf> = None;
    let mut files: Vec<PathBuf> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ascii" => ascii_input = true,
            "--tables" => match args.next() {
                Some(p) => tables_path = Some(PathBuf::from(p)),
                None => {
                    eprintln!("--tables 뒤에 파일 경로가 필요합니다");
                    process::exit(2);
                }
            },
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => files.push(PathBuf::from(arg)),
        }
    }

    let decoder = match &tables_path {
        Some(path) => Decoder::with_tables(load_table_set(path)),
        None => Decoder::new(),
    };

    let input = match read_input(&files) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("입력 읽기 실패: {}", e);
            process::exit(1);
        }
    };
    let input = if ascii_input {
        ascii_braille_to_unicode(&input)
    } else {
        input
    };

    print!("{}", decoder.decode(&input));
}

/// 파일 인자가 없으면 표준 입력에서 읽음
fn read_input(files: &[PathBuf]) -> Result<String, String> {
    if files.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| e.to_string())?;
        return Ok(buf);
    }
    let mut buf = String::new();
    for f in files {
        let content =
            std::fs::read_to_string(f).map_err(|e| format!("{}: {}", f.display(), e))?;
        buf.push_str(&content);
    }
    Ok(buf)
}

fn print_usage() {
    println!("사용법: jeomja [--ascii] [--tables <파일>] [입력파일...]");
    println!();
    println!("  --ascii          입력을 ASCII 점자(BRL)로 보고 먼저 유니코드로 변환");
    println!("  --tables <파일>  표준 점자표 대신 JSON 점자표 사용");
    println!();
    println!("입력 파일이 없으면 표준 입력을 읽습니다.");
}
