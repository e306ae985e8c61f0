//! 解凍したTXTを `<種別>/<年>/` に振り分ける

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::JrdbError;

fn file_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([A-Za-z]+)(\d+)").expect("valid regex"))
}

/// ファイル名から種別と西暦年を取り出す (`KYI240106.txt` -> `("KYI", "2024")`)
///
/// 年の下2桁が80〜99なら1900年代、それ以外は2000年代とみなす。
pub fn classify(file_name: &str) -> Option<(String, String)> {
    let caps = file_name_pattern().captures(file_name)?;
    let kind = caps.get(1)?.as_str().to_string();
    let digits = caps.get(2)?.as_str();
    let yy: u32 = digits.get(..2).unwrap_or(digits).parse().ok()?;
    let century = if (80..=99).contains(&yy) { 19 } else { 20 };
    Some((kind, format!("{}{:02}", century, yy)))
}

/// 展開済みファイルのうちTXTだけを `<txt_dir>/<種別>/<年>/` に移動する
pub fn organize(extracted: &[PathBuf], txt_dir: &Path) -> Result<Vec<PathBuf>, JrdbError> {
    let mut moved = Vec::new();
    for path in extracted {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".txt") {
            debug!("TXT以外のファイルをスキップ: {}", name);
            continue;
        }
        let Some((kind, year)) = classify(name) else {
            debug!("種別を判定できないファイルをスキップ: {}", name);
            continue;
        };

        let target_dir = txt_dir.join(&kind).join(&year);
        fs::create_dir_all(&target_dir)?;
        let target = target_dir.join(name);
        move_file(path, &target)?;
        debug!("移動: {:?} -> {:?}", path, target);
        moved.push(target);
    }
    Ok(moved)
}

/// renameできない場合 (別ファイルシステム) はコピーして削除
fn move_file(from: &Path, to: &Path) -> Result<(), JrdbError> {
    if fs::rename(from, to).is_err() {
        fs::copy(from, to)?;
        fs::remove_file(from)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("KYI240106.txt"),
            Some(("KYI".to_string(), "2024".to_string()))
        );
        assert_eq!(
            classify("SED991231.txt"),
            Some(("SED".to_string(), "1999".to_string()))
        );
        assert_eq!(
            classify("OV800101.txt"),
            Some(("OV".to_string(), "1980".to_string()))
        );
        assert_eq!(
            classify("KZA790101.txt"),
            Some(("KZA".to_string(), "2079".to_string()))
        );
        assert_eq!(
            classify("MZA5.txt"),
            Some(("MZA".to_string(), "2005".to_string()))
        );
        assert_eq!(classify("readme.txt"), None);
        assert_eq!(classify("240106.txt"), None);
    }

    #[test]
    fn test_organize() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        fs::create_dir_all(&work).unwrap();
        let files: Vec<PathBuf> = ["KYI240106.txt", "SED991231.TXT", "readme.txt", "KYI240106.doc"]
            .iter()
            .map(|name| {
                let path = work.join(name);
                fs::write(&path, name.as_bytes()).unwrap();
                path
            })
            .collect();

        let txt_dir = tmp.path().join("txt");
        let moved = organize(&files, &txt_dir).unwrap();

        assert_eq!(
            moved,
            vec![txt_dir.join("KYI").join("2024").join("KYI240106.txt")]
        );
        assert!(!work.join("KYI240106.txt").exists());
        // 拡張子は小文字の .txt のみ
        assert!(work.join("SED991231.TXT").exists());
        assert!(work.join("readme.txt").exists());
        assert!(work.join("KYI240106.doc").exists());
    }

    #[test]
    fn test_organize_overwrites() {
        let tmp = TempDir::new().unwrap();
        let txt_dir = tmp.path().join("txt");
        let existing = txt_dir.join("OV").join("2024");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("OV240106.txt"), b"old").unwrap();

        let incoming = tmp.path().join("OV240106.txt");
        fs::write(&incoming, b"new").unwrap();
        organize(&[incoming], &txt_dir).unwrap();

        assert_eq!(fs::read(existing.join("OV240106.txt")).unwrap(), b"new");
    }
}
