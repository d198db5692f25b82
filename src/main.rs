//! hanmatch - 한글 초성 검색 필터

use hanmatch::config::{load_config, MatcherConfig};
use hanmatch::{eng_to_korean, HangulMatcher};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "사용법: hanmatch [--config PATH] [--eng] QUERY [FILE]";

/// 명령행 인자
struct Args {
    config: Option<PathBuf>,
    /// 검색어를 영문 자판 입력으로 보고 한글로 변환
    eng: bool,
    query: String,
    file: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut config = None;
    let mut eng = false;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config 뒤에 경로가 필요합니다")?;
                config = Some(PathBuf::from(path));
            }
            "--eng" | "-e" => eng = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let query = positional.next().ok_or_else(|| USAGE.to_string())?;
    let file = positional.next().map(PathBuf::from);
    if positional.next().is_some() {
        return Err(USAGE.to_string());
    }
    Ok(Args { config, eng, query, file })
}

fn run(args: Args) -> Result<bool, String> {
    let config = match &args.config {
        Some(path) => MatcherConfig::load(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => load_config(),
    };
    let query = if args.eng {
        eng_to_korean(&args.query)
    } else {
        args.query.clone()
    };
    let matcher = HangulMatcher::with_config(&query, &config);
    log::debug!("검색어: '{}'", matcher.query());

    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut found = false;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("입력 읽기 실패: {}", e))?;
        if let Some(m) = matcher.find(&line) {
            found = true;
            writeln!(out, "{}:{}:{}:{}", line_no + 1, m.start, m.length, line)
                .map_err(|e| format!("출력 실패: {}", e))?;
        }
    }
    Ok(found)
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(msg) => {
            log::error!("{}", msg);
            eprintln!("{}", msg);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_query_only() {
        let parsed = parse_args(args(&["ㄱㄴ"])).unwrap();
        assert_eq!(parsed.query, "ㄱㄴ");
        assert!(parsed.file.is_none());
        assert!(parsed.config.is_none());
        assert!(!parsed.eng);
    }

    #[test]
    fn test_parse_eng_flag() {
        let parsed = parse_args(args(&["-e", "rjator"])).unwrap();
        assert!(parsed.eng);
        assert_eq!(eng_to_korean(&parsed.query), "검색");
    }

    #[test]
    fn test_parse_all() {
        let parsed = parse_args(args(&["--config", "c.json", "ㄱㄴ", "menu.txt"])).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("c.json")));
        assert_eq!(parsed.query, "ㄱㄴ");
        assert_eq!(parsed.file, Some(PathBuf::from("menu.txt")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["a", "b", "c"])).is_err());
    }
}
