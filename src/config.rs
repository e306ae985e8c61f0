use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use encoding_rs::Encoding;
use tracing::warn;

use crate::error::JrdbError;

pub const DEFAULT_BASE_URL: &str = "http://www.jrdb.com/member/data/";
pub const USER_ENV: &str = "JRDB_USER";
pub const PASSWORD_ENV: &str = "JRDB_PASSWORD";

#[derive(Clone)]
pub struct JrdbConfig {
    pub user: String,
    pub password: String,
    pub base_url: String,
    /// 解凍したTXTの保存先 (`<txt_dir>/<種別>/<年>/`)
    pub txt_dir: PathBuf,
    /// CSVの出力先 (`<csv_dir>/<種別>/<種別>_<年>.csv`)
    pub csv_dir: PathBuf,
    pub timeout: Duration,
    /// 同時ダウンロード数
    pub concurrency: usize,
    /// TXTファイルの文字コード (WHATWGラベル)
    pub encoding: String,
}

impl Default for JrdbConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            password: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            txt_dir: PathBuf::from("./data/jrdb_txt"),
            csv_dir: PathBuf::from("./data/jrdb_csv"),
            timeout: Duration::from_secs(60),
            concurrency: 4,
            encoding: "shift_jis".to_string(),
        }
    }
}

impl fmt::Debug for JrdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JrdbConfig")
            .field("user", &self.user)
            .field("password", &"********")
            .field("base_url", &self.base_url)
            .field("txt_dir", &self.txt_dir)
            .field("csv_dir", &self.csv_dir)
            .field("timeout", &self.timeout)
            .field("concurrency", &self.concurrency)
            .field("encoding", &self.encoding)
            .finish()
    }
}

impl JrdbConfig {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// 環境変数 (と `.env`) から認証情報を読み込む
    pub fn from_env() -> Result<Self, JrdbError> {
        if let Err(e) = load_dotenv() {
            warn!(".envの読み込みに失敗しました: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, JrdbError> {
        let read = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(JrdbError::MissingCredentials(key))
        };
        let user = read(USER_ENV)?;
        let password = read(PASSWORD_ENV)?;
        Ok(Self::new(user, password))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    pub fn with_txt_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.txt_dir = path.into();
        self
    }

    pub fn with_csv_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_dir = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    /// 設定された文字コードを解決する
    pub fn text_encoding(&self) -> Result<&'static Encoding, JrdbError> {
        Encoding::for_label(self.encoding.as_bytes())
            .ok_or_else(|| JrdbError::UnsupportedEncoding(self.encoding.clone()))
    }
}

/// カレントディレクトリ (から上) の `.env` を読み込む
///
/// `.env` が無いのは正常として `Ok(None)` を返す。書式エラー等はそのまま返す。
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    dotenv_outcome(dotenvy::dotenv())
}

fn dotenv_outcome(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
