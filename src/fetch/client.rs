//! JRDB会員ページへのBasic認証付きHTTPアクセス

use std::path::{Path, PathBuf};
use std::time::Duration;

use encoding_rs::SHIFT_JIS;
use reqwest::{Client, StatusCode, Url};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::JrdbConfig;
use crate::error::JrdbError;

/// リトライ設定
const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct JrdbClient {
    http: Client,
    user: String,
    password: String,
    backoff: Duration,
}

impl JrdbClient {
    pub fn new(config: &JrdbConfig) -> Result<Self, JrdbError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            user: config.user.clone(),
            password: config.password.clone(),
            backoff: Duration::from_millis(INITIAL_BACKOFF_MS),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// `<page>index.html` を取得してShift_JISとしてデコードする
    ///
    /// 200以外は認証失敗として扱う。
    pub async fn fetch_index(&self, page: &Url) -> Result<String, JrdbError> {
        let url = page.join("index.html")?;
        debug!("インデックス取得: {}", url);

        let response = self
            .http
            .get(url.clone())
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(JrdbError::Auth {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?;
        let (html, _, had_errors) = SHIFT_JIS.decode(&bytes);
        if had_errors {
            debug!("インデックスに変換できない文字があります: {}", url);
        }
        Ok(html.into_owned())
    }

    /// ファイルを `dir` にダウンロードする (一時的なエラーは指数バックオフで再試行)
    pub async fn download(&self, url: &Url, dir: &Path) -> Result<PathBuf, JrdbError> {
        let mut attempt = 0;
        loop {
            match self.try_download(url, dir).await {
                Ok(path) => return Ok(path),
                Err(e) if e.is_retryable() && attempt < MAX_RETRIES => {
                    let backoff = self.backoff * 2u32.pow(attempt);
                    warn!(
                        "ダウンロード失敗 ({}回目), {:?}後に再試行: {}",
                        attempt + 1,
                        backoff,
                        e
                    );
                    sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_download(&self, url: &Url, dir: &Path) -> Result<PathBuf, JrdbError> {
        let response = self
            .http
            .get(url.clone())
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(JrdbError::Http {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?;
        let path = dir.join(file_name_of(url));
        tokio::fs::write(&path, &bytes).await?;

        info!("ダウンロード完了: {} ({}bytes)", url, bytes.len());
        Ok(path)
    }
}

/// URLの最後のパス要素 (空なら `download`)
pub(crate) fn file_name_of(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .unwrap_or("download")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_of() {
        let url = Url::parse("http://www.jrdb.com/member/data/Paci/PACI240106.zip").unwrap();
        assert_eq!(file_name_of(&url), "PACI240106.zip");

        let url = Url::parse("http://www.jrdb.com/member/data/").unwrap();
        assert_eq!(file_name_of(&url), "download");
    }

    #[test]
    fn test_client_new() {
        let config = JrdbConfig::new("user", "pass").with_timeout(Duration::from_secs(5));
        let client = JrdbClient::new(&config).unwrap();
        assert_eq!(client.user, "user");
        assert_eq!(client.password, "pass");
        assert_eq!(client.backoff, Duration::from_millis(INITIAL_BACKOFF_MS));
    }
}
