//! ダウンロードしたアーカイブ (LZH / ZIP) の解凍

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::JrdbError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Lzh,
    Zip,
}

impl ArchiveKind {
    /// 拡張子で判定し、分からなければ先頭バイトを見る
    pub fn detect(path: &Path) -> Result<Self, JrdbError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("lzh") | Some("lha") => return Ok(ArchiveKind::Lzh),
            Some("zip") => return Ok(ArchiveKind::Zip),
            _ => {}
        }

        let mut head = [0u8; 7];
        let mut file = File::open(path)?;
        let n = read_up_to(&mut file, &mut head)?;
        Self::from_magic(&head[..n]).ok_or_else(|| JrdbError::UnknownArchive(path.to_path_buf()))
    }

    fn from_magic(head: &[u8]) -> Option<Self> {
        if head.starts_with(b"PK\x03\x04") || head.starts_with(b"PK\x05\x06") {
            return Some(ArchiveKind::Zip);
        }
        // LZHのヘッダ: [サイズ][チェックサム]-lh?- / -lz?-
        if head.len() >= 7
            && head[2] == b'-'
            && head[3] == b'l'
            && matches!(head[4], b'h' | b'z')
            && head[6] == b'-'
        {
            return Some(ArchiveKind::Lzh);
        }
        None
    }
}

fn read_up_to(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

/// アーカイブを `dest` に展開し、展開したファイルのパスを返す
///
/// エントリのディレクトリ部分は捨て、ファイル名だけで `dest` 直下に書き出す。
pub fn extract(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>, JrdbError> {
    fs::create_dir_all(dest)?;
    let files = match ArchiveKind::detect(archive)? {
        ArchiveKind::Lzh => extract_lzh(archive, dest)?,
        ArchiveKind::Zip => extract_zip(archive, dest)?,
    };
    debug!("解凍完了: {:?} ({}ファイル)", archive, files.len());
    Ok(files)
}

/// エントリ名から書き出し先を決める (`..` 等は無視してファイル名のみ使う)
fn flat_target(dest: &Path, entry: &Path) -> Option<PathBuf> {
    entry.file_name().map(|name| dest.join(name))
}

fn extract_zip(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>, JrdbError> {
    let zip_err = |e: zip::result::ZipError| JrdbError::Archive(format!("{:?}: {}", archive, e));

    let mut zip = zip::ZipArchive::new(File::open(archive)?).map_err(zip_err)?;
    let mut files = Vec::new();
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(zip_err)?;
        if entry.is_dir() {
            continue;
        }
        let Some(target) = flat_target(dest, Path::new(entry.name())) else {
            debug!("不正なエントリ名をスキップ: {}", entry.name());
            continue;
        };
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)
            .map_err(|e| JrdbError::Archive(format!("{:?}: {}", archive, e)))?;
        files.push(target);
    }
    Ok(files)
}

fn extract_lzh(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>, JrdbError> {
    let lzh_err = |e: &dyn std::fmt::Display| JrdbError::Archive(format!("{:?}: {}", archive, e));

    let mut reader = delharc::parse_file(archive).map_err(|e| lzh_err(&e))?;
    let mut files = Vec::new();
    loop {
        let header = reader.header();
        let entry = header.parse_pathname();

        if header.is_directory() {
            debug!("ディレクトリをスキップ: {:?}", entry);
        } else if !reader.is_decoder_supported() {
            return Err(JrdbError::Archive(format!(
                "{:?}: 未対応の圧縮形式です ({:?})",
                archive, entry
            )));
        } else if let Some(target) = flat_target(dest, &entry) {
            let mut out = File::create(&target)?;
            io::copy(&mut reader, &mut out).map_err(|e| lzh_err(&e))?;
            reader.crc_check().map_err(|e| lzh_err(&e))?;
            files.push(target);
        }

        if !reader.next_file().map_err(|e| lzh_err(&e))? {
            break;
        }
    }
    Ok(files)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    /// テスト用のZIPを作る
    pub(crate) fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    /// LHAのCRC-16 (多項式 0xA001)
    fn crc16(data: &[u8]) -> u16 {
        let mut crc = 0u16;
        for &b in data {
            crc ^= b as u16;
            for _ in 0..8 {
                crc = if crc & 1 != 0 {
                    (crc >> 1) ^ 0xA001
                } else {
                    crc >> 1
                };
            }
        }
        crc
    }

    /// 無圧縮 (-lh0-) のレベル0 LZHを作る
    pub(crate) fn lzh_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        lzh_bytes_with_method(b"-lh0-", entries)
    }

    /// 圧縮方式IDだけ差し替えたLZH (中身は無圧縮のまま)
    fn lzh_bytes_with_method(method: &[u8; 5], entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut out = Vec::new();
        for (name, data) in entries {
            let mut header = Vec::new();
            header.extend_from_slice(method);
            header.extend_from_slice(&(data.len() as u32).to_le_bytes());
            header.extend_from_slice(&(data.len() as u32).to_le_bytes());
            // 2024-01-01 00:00 (MS-DOS形式)
            header.extend_from_slice(&0x5821_0000u32.to_le_bytes());
            header.push(0x20);
            header.push(0);
            header.push(name.len() as u8);
            header.extend_from_slice(name.as_bytes());
            header.extend_from_slice(&crc16(data).to_le_bytes());

            let checksum = header.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
            out.push(header.len() as u8);
            out.push(checksum);
            out.extend(header);
            out.extend_from_slice(data);
        }
        out.push(0);
        out
    }

    #[test]
    fn test_crc16() {
        // CRC-16/ARC の検査値
        assert_eq!(crc16(b"123456789"), 0xBB3D);
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            ArchiveKind::detect(Path::new("KYI240106.LZH")).unwrap(),
            ArchiveKind::Lzh
        );
        assert_eq!(
            ArchiveKind::detect(Path::new("Paci240106.zip")).unwrap(),
            ArchiveKind::Zip
        );
    }

    #[test]
    fn test_detect_by_magic() {
        let tmp = TempDir::new().unwrap();
        let zip_path = tmp.path().join("a.bin");
        fs::write(&zip_path, zip_bytes(&[("a.txt", b"x")])).unwrap();
        let lzh_path = tmp.path().join("b.bin");
        fs::write(&lzh_path, lzh_bytes(&[("b.txt", b"x")])).unwrap();
        let other = tmp.path().join("c.bin");
        fs::write(&other, b"<html>").unwrap();

        assert_eq!(ArchiveKind::detect(&zip_path).unwrap(), ArchiveKind::Zip);
        assert_eq!(ArchiveKind::detect(&lzh_path).unwrap(), ArchiveKind::Lzh);
        assert!(matches!(
            ArchiveKind::detect(&other),
            Err(JrdbError::UnknownArchive(_))
        ));
    }

    #[test]
    fn test_extract_zip_flattens_paths() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("Paci240106.zip");
        fs::write(
            &archive,
            zip_bytes(&[
                ("KYI240106.txt", b"kyi"),
                ("sub/SED240106.txt", b"sed"),
                ("../evil.txt", b"evil"),
            ]),
        )
        .unwrap();

        let dest = tmp.path().join("out");
        let mut files = extract(&archive, &dest).unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![
                dest.join("KYI240106.txt"),
                dest.join("SED240106.txt"),
                dest.join("evil.txt"),
            ]
        );
        assert_eq!(fs::read(dest.join("SED240106.txt")).unwrap(), b"sed");
        assert_eq!(fs::read(dest.join("evil.txt")).unwrap(), b"evil");
        assert!(!tmp.path().join("evil.txt").exists());
    }

    #[test]
    fn test_extract_lzh() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("KZA240106.lzh");
        fs::write(
            &archive,
            lzh_bytes(&[("KZA240106.txt", b"kza data\r\n"), ("CZA240106.txt", b"cza")]),
        )
        .unwrap();

        let dest = tmp.path().join("out");
        let files = extract(&archive, &dest).unwrap();

        assert_eq!(
            files,
            vec![dest.join("KZA240106.txt"), dest.join("CZA240106.txt")]
        );
        assert_eq!(fs::read(&files[0]).unwrap(), b"kza data\r\n");
    }

    #[test]
    fn test_extract_lzh_crc_mismatch() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("KZA240106.lzh");
        let mut bytes = lzh_bytes(&[("KZA240106.txt", b"kza data")]);
        // 末尾の終端0の直前がデータ最終バイト
        let last = bytes.len() - 2;
        bytes[last] ^= 0xFF;
        fs::write(&archive, bytes).unwrap();

        let err = extract(&archive, &tmp.path().join("out")).unwrap_err();
        assert!(matches!(err, JrdbError::Archive(_)), "{err:?}");
    }

    #[test]
    fn test_extract_lzh_unsupported_method() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("KZA240106.lzh");
        fs::write(
            &archive,
            lzh_bytes_with_method(b"-lhx-", &[("KZA240106.txt", b"kza data")]),
        )
        .unwrap();

        let err = extract(&archive, &tmp.path().join("out")).unwrap_err();
        assert!(matches!(err, JrdbError::Archive(_)), "{err:?}");
    }

    #[test]
    fn test_extract_corrupt_zip() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("broken.zip");
        fs::write(&archive, b"PK\x03\x04 not really a zip").unwrap();

        let err = extract(&archive, &tmp.path().join("out")).unwrap_err();
        assert!(matches!(err, JrdbError::Archive(_)));
    }
}
