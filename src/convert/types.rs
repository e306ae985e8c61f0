//! 固定長レコードのフィールド定義とファイル種別

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JrdbError;

use super::layouts;

/// フィールドの値の取り出し方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// そのまま文字列として扱う
    Text,
    /// 開催日 (1桁の16進数 `a`〜`f` を10進数に変換)
    HexDay,
    /// `width` バイトの値が `count` 個連続する (オッズ等)
    Repeated { count: usize },
}

/// 固定長レコード上の1フィールド
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    /// 先頭からのバイト位置
    pub offset: usize,
    /// バイト幅 (`Repeated` の場合は1個あたり)
    pub width: usize,
    pub kind: FieldKind,
}

impl Field {
    pub(crate) const fn text(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
            kind: FieldKind::Text,
        }
    }

    pub(crate) const fn hex_day(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            width: 1,
            kind: FieldKind::HexDay,
        }
    }

    pub(crate) const fn repeated(
        name: &'static str,
        offset: usize,
        width: usize,
        count: usize,
    ) -> Self {
        Self {
            name,
            offset,
            width,
            kind: FieldKind::Repeated { count },
        }
    }

    /// フィールド終端のバイト位置 (排他的)
    pub fn end(&self) -> usize {
        match self.kind {
            FieldKind::Repeated { count } => self.offset + self.width * count,
            _ => self.offset + self.width,
        }
    }
}

/// CSV変換に対応しているJRDBファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Bac,
    Cha,
    Cyb,
    Cza,
    Joa,
    Kab,
    Kka,
    Kyi,
    Kza,
    Mza,
    Ot,
    Ou,
    Ov,
    Ow,
    Oz,
    Sed,
    Zed,
    Skb,
    Zkb,
    Srb,
    Ukc,
}

impl FileType {
    pub const ALL: [FileType; 21] = [
        FileType::Bac,
        FileType::Cha,
        FileType::Cyb,
        FileType::Cza,
        FileType::Joa,
        FileType::Kab,
        FileType::Kka,
        FileType::Kyi,
        FileType::Kza,
        FileType::Mza,
        FileType::Ot,
        FileType::Ou,
        FileType::Ov,
        FileType::Ow,
        FileType::Oz,
        FileType::Sed,
        FileType::Zed,
        FileType::Skb,
        FileType::Zkb,
        FileType::Srb,
        FileType::Ukc,
    ];

    /// ファイル名・ディレクトリ名に使う大文字の種別コード
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Bac => "BAC",
            FileType::Cha => "CHA",
            FileType::Cyb => "CYB",
            FileType::Cza => "CZA",
            FileType::Joa => "JOA",
            FileType::Kab => "KAB",
            FileType::Kka => "KKA",
            FileType::Kyi => "KYI",
            FileType::Kza => "KZA",
            FileType::Mza => "MZA",
            FileType::Ot => "OT",
            FileType::Ou => "OU",
            FileType::Ov => "OV",
            FileType::Ow => "OW",
            FileType::Oz => "OZ",
            FileType::Sed => "SED",
            FileType::Zed => "ZED",
            FileType::Skb => "SKB",
            FileType::Zkb => "ZKB",
            FileType::Srb => "SRB",
            FileType::Ukc => "UKC",
        }
    }

    pub fn layout(&self) -> &'static [Field] {
        match self {
            FileType::Bac => layouts::BAC,
            FileType::Cha => layouts::CHA,
            FileType::Cyb => layouts::CYB,
            FileType::Cza => layouts::CZA,
            FileType::Joa => layouts::JOA,
            FileType::Kab => layouts::KAB,
            FileType::Kka => layouts::KKA,
            FileType::Kyi => layouts::KYI,
            FileType::Kza => layouts::KZA,
            FileType::Mza => layouts::MZA,
            FileType::Ot => layouts::OT,
            FileType::Ou => layouts::OU,
            FileType::Ov => layouts::OV,
            FileType::Ow => layouts::OW,
            FileType::Oz => layouts::OZ,
            FileType::Sed | FileType::Zed => layouts::SED,
            FileType::Skb | FileType::Zkb => layouts::SKB,
            FileType::Srb => layouts::SRB,
            FileType::Ukc => layouts::UKC,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = JrdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        FileType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| JrdbError::UnsupportedFileType(s.to_string()))
    }
}
