use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JrdbError {
    #[error("環境変数 {0} が設定されていません")]
    MissingCredentials(&'static str),

    #[error("認証に失敗しました: {url} (ステータスコード: {status})")]
    Auth { url: String, status: StatusCode },

    #[error("ダウンロードエラー: {url} (ステータスコード: {status})")]
    Http { url: String, status: StatusCode },

    #[error("HTTPリクエストエラー: {0}")]
    Request(#[from] reqwest::Error),

    #[error("URLエラー: {0}")]
    Url(#[from] url::ParseError),

    #[error("ログインしていません")]
    NotLoggedIn,

    #[error("ダウンロードリンクが見つかりません: {0}")]
    NoLinks(String),

    #[error("解凍エラー: {0}")]
    Archive(String),

    #[error("未対応のアーカイブ形式: {0:?}")]
    UnknownArchive(PathBuf),

    #[error("文字コード変換エラー: {path:?} {line}行目 ({field})")]
    Decode {
        path: PathBuf,
        line: usize,
        field: &'static str,
    },

    #[error("未対応のファイル種別: {0}")]
    UnsupportedFileType(String),

    #[error("未対応の文字コード: {0}")]
    UnsupportedEncoding(String),

    #[error("CSV出力エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("ファイル操作エラー: {0}")]
    FileIO(#[from] std::io::Error),

    #[error("バックグラウンド処理エラー: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl JrdbError {
    /// 再試行で回復し得るエラーか
    pub fn is_retryable(&self) -> bool {
        match self {
            JrdbError::Request(e) => e.is_timeout() || e.is_connect(),
            JrdbError::Http { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_is_retryable() {
        let err = JrdbError::Http {
            url: "http://example.com/a.lzh".into(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_errors_are_final() {
        let not_found = JrdbError::Http {
            url: "http://example.com/a.lzh".into(),
            status: StatusCode::NOT_FOUND,
        };
        let auth = JrdbError::Auth {
            url: "http://example.com/".into(),
            status: StatusCode::UNAUTHORIZED,
        };
        assert!(!not_found.is_retryable());
        assert!(!auth.is_retryable());
        assert!(!JrdbError::NoLinks("x".into()).is_retryable());
    }

    #[test]
    fn test_decode_error_message() {
        let err = JrdbError::Decode {
            path: PathBuf::from("KYI240106.txt"),
            line: 3,
            field: "馬名",
        };
        let msg = err.to_string();
        assert!(msg.contains("3行目"));
        assert!(msg.contains("馬名"));
    }
}
