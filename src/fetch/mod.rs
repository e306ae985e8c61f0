//! JRDB会員ページからのデータ取得
//!
//! - 単体データコーナー (`<base>/<種別>/index.html`) のリンクを一括取得
//! - マスタ (騎手・調教師・抹消馬) のLZHを取得

mod client;
mod corner;
mod master;

pub use client::JrdbClient;
pub use corner::CornerScraper;
pub use master::{MasterScraper, MASTER_LABELS};

use std::path::PathBuf;

use futures::{StreamExt, TryStreamExt};
use reqwest::Url;
use tracing::info;

use crate::archive;
use crate::config::JrdbConfig;
use crate::error::JrdbError;
use crate::organize::organize;

/// リンクを並列ダウンロードし、解凍してTXTを振り分ける
///
/// 作業用の一時ディレクトリは成否にかかわらず削除される。
pub(crate) async fn download_and_organize(
    client: &JrdbClient,
    config: &JrdbConfig,
    links: Vec<Url>,
) -> Result<Vec<PathBuf>, JrdbError> {
    let workdir = tempfile::Builder::new().prefix("jrdb-").tempdir()?;
    let download_dir = workdir.path().join("download");
    tokio::fs::create_dir_all(&download_dir).await?;

    let total = links.len();
    info!("ダウンロード開始: {}件 (同時{}件)", total, config.concurrency);

    // 同じファイル名のリンクが上書きし合わないようリンクごとに保存先を分ける
    let archives: Vec<PathBuf> = futures::stream::iter(links.into_iter().enumerate())
        .map(|(index, url)| {
            let dir = download_dir.join(index.to_string());
            async move {
                tokio::fs::create_dir_all(&dir).await?;
                client.download(&url, &dir).await
            }
        })
        .buffer_unordered(config.concurrency.max(1))
        .try_collect()
        .await?;

    let extract_root = workdir.path().join("extract");
    let txt_dir = config.txt_dir.clone();
    let organized = tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>, JrdbError> {
        let mut organized = Vec::new();
        for (index, archive_path) in archives.iter().enumerate() {
            // アーカイブごとに展開先を分けて同名ファイルの衝突を避ける
            let dest = extract_root.join(index.to_string());
            let extracted = archive::extract(archive_path, &dest)?;
            organized.extend(organize(&extracted, &txt_dir)?);
        }
        Ok(organized)
    })
    .await??;

    info!(
        "取得完了: アーカイブ{}件 -> TXT{}件",
        total,
        organized.len()
    );
    Ok(organized)
}
