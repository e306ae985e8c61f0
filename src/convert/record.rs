use std::path::Path;

use encoding_rs::Encoding;

use crate::error::JrdbError;

use super::types::{Field, FieldKind, FileType};

/// 連続フィールドを1セルにまとめる際の区切り文字
pub const REPEATED_SEPARATOR: &str = "|";

/// 固定長1行をフィールドごとの文字列に分解する
#[derive(Debug, Clone, Copy)]
pub struct RecordDecoder {
    layout: &'static [Field],
    encoding: &'static Encoding,
}

impl RecordDecoder {
    pub fn new(file_type: FileType, encoding: &'static Encoding) -> Self {
        Self {
            layout: file_type.layout(),
            encoding,
        }
    }

    /// CSVのヘッダ行
    pub fn headers(&self) -> Vec<&'static str> {
        self.layout.iter().map(|f| f.name).collect()
    }

    /// 1行をデコードする (`line_no` は1始まり、エラー表示用)
    pub fn decode(&self, line: &[u8], path: &Path, line_no: usize) -> Result<Vec<String>, JrdbError> {
        self.layout
            .iter()
            .map(|field| {
                let err = || JrdbError::Decode {
                    path: path.to_path_buf(),
                    line: line_no,
                    field: field.name,
                };
                match field.kind {
                    FieldKind::Text => self.text(line, field.offset, field.width).ok_or_else(err),
                    FieldKind::HexDay => self
                        .text(line, field.offset, field.width)
                        .map(|v| hex_day(&v))
                        .ok_or_else(err),
                    FieldKind::Repeated { count } => (0..count)
                        .map(|i| self.text(line, field.offset + i * field.width, field.width))
                        .collect::<Option<Vec<_>>>()
                        .map(|values| values.join(REPEATED_SEPARATOR))
                        .ok_or_else(err),
                }
            })
            .collect()
    }

    fn text(&self, line: &[u8], offset: usize, width: usize) -> Option<String> {
        let bytes = slice(line, offset, width);
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|s| s.trim().to_string())
    }
}

/// 行末を越えた部分は空として扱う
fn slice(line: &[u8], offset: usize, width: usize) -> &[u8] {
    let start = offset.min(line.len());
    let end = (offset + width).min(line.len());
    &line[start..end]
}

/// 開催日の16進数表記を10進数にする (`a` -> `10`)
fn hex_day(value: &str) -> String {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_hexdigit() && c.is_ascii_alphabetic() => {
            c.to_digit(16).map(|d| d.to_string()).unwrap_or_default()
        }
        _ => value.to_string(),
    }
}
