//! TXT -> CSV 変換

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use tracing::{debug, info, warn};

use crate::error::JrdbError;

use super::record::RecordDecoder;
use super::types::FileType;

/// 種別ごとのTXTを年単位のCSVにまとめる
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    file_type: FileType,
    decoder: RecordDecoder,
}

impl Converter {
    pub fn new(file_type: FileType, encoding: &'static Encoding) -> Self {
        Self {
            file_type,
            decoder: RecordDecoder::new(file_type, encoding),
        }
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// `<txt_dir>/<種別>/<年>/` ごとに `<csv_dir>/<種別>/<種別>_<年>.csv` を出力
    pub fn convert_all(&self, txt_dir: &Path, csv_dir: &Path) -> Result<Vec<PathBuf>, JrdbError> {
        let type_dir = txt_dir.join(self.file_type.as_str());
        if !type_dir.is_dir() {
            warn!("TXTディレクトリが存在しません: {:?}", type_dir);
            return Ok(Vec::new());
        }

        let mut years: Vec<PathBuf> = fs::read_dir(&type_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        years.sort();

        let out_dir = csv_dir.join(self.file_type.as_str());
        let mut written = Vec::new();
        for year_dir in years {
            let Some(year) = year_dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            let out_csv = out_dir.join(format!("{}_{}.csv", self.file_type, year));
            if self.convert_year(&year_dir, &out_csv)? > 0 {
                written.push(out_csv);
            }
        }

        info!("{} のCSV変換完了: {}ファイル", self.file_type, written.len());
        Ok(written)
    }

    /// 1年分のTXTを1つのCSVに変換し、書き出したレコード数を返す
    ///
    /// TXTが1つも無い年は何も出力せず0を返す。
    pub fn convert_year(&self, year_dir: &Path, out_csv: &Path) -> Result<usize, JrdbError> {
        let inputs = txt_files(year_dir)?;
        if inputs.is_empty() {
            debug!("TXTファイルなし: {:?}", year_dir);
            return Ok(0);
        }

        if let Some(parent) = out_csv.parent() {
            fs::create_dir_all(parent)?;
        }

        // 途中で失敗したときに不完全なCSVを残さない
        let tmp_csv = out_csv.with_extension("csv.tmp");
        let result = self.write_csv(&inputs, &tmp_csv);
        let records = match result {
            Ok(records) => records,
            Err(e) => {
                let _ = fs::remove_file(&tmp_csv);
                return Err(e);
            }
        };
        fs::rename(&tmp_csv, out_csv)?;

        info!(
            "CSV出力: {:?} ({}ファイル, {}件)",
            out_csv,
            inputs.len(),
            records
        );
        Ok(records)
    }

    fn write_csv(&self, inputs: &[PathBuf], out_csv: &Path) -> Result<usize, JrdbError> {
        let mut writer = csv::Writer::from_path(out_csv)?;
        writer.write_record(self.decoder.headers())?;

        let mut records = 0;
        for path in inputs {
            debug!("変換中: {:?}", path);
            let content = fs::read(path)?;
            for (index, line) in lines(&content).enumerate() {
                let fields = self.decoder.decode(line, path, index + 1)?;
                writer.write_record(&fields)?;
                records += 1;
            }
        }

        writer.flush()?;
        Ok(records)
    }
}

/// ディレクトリ内の `.txt` を名前順に列挙
fn txt_files(dir: &Path) -> Result<Vec<PathBuf>, JrdbError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name.ends_with(".txt"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// `\n` 区切りで行に分ける (末尾の改行後の空行は含めない)
fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    content
        .split(|b| *b == b'\n')
        .filter(move |_| !content.is_empty())
}
