use async_trait::async_trait;
use reqwest::Url;
use std::path::PathBuf;

use crate::error::JrdbError;

#[async_trait]
pub trait Scraper: Send + Sync {
    /// 認証確認 (index.html を取得)
    async fn login(&mut self) -> Result<(), JrdbError>;

    /// ダウンロードリンク一覧を取得
    async fn collect_links(&mut self) -> Result<Vec<Url>, JrdbError>;

    /// ダウンロード → 解凍 → 種別・年ごとに振り分け
    async fn download(&mut self, links: Vec<Url>) -> Result<Vec<PathBuf>, JrdbError>;

    /// 一括実行（login → collect_links → download）
    async fn execute(&mut self) -> Result<Vec<PathBuf>, JrdbError> {
        self.login().await?;
        let links = self.collect_links().await?;
        self.download(links).await
    }
}
