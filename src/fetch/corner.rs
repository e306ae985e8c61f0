//! 単体データコーナーからの一括ダウンロード

use std::path::PathBuf;
use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::Url;
use scraper::{Html, Selector};
use tracing::info;

use super::{download_and_organize, JrdbClient};
use crate::config::JrdbConfig;
use crate::error::JrdbError;
use crate::traits::Scraper;

const CORNER_MARKER: &str = "単体データコーナー";

/// `<base>/<種別>/index.html` の単体データコーナーにある全ファイルを取得する
pub struct CornerScraper {
    config: JrdbConfig,
    client: JrdbClient,
    kind: String,
    page: Url,
    index_html: Option<String>,
}

impl CornerScraper {
    pub fn new(config: JrdbConfig, kind: impl Into<String>) -> Result<Self, JrdbError> {
        let kind = kind.into();
        let page = Url::parse(&config.base_url)?.join(&format!("{}/", kind))?;
        let client = JrdbClient::new(&config)?;
        Ok(Self {
            config,
            client,
            kind,
            page,
            index_html: None,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn page(&self) -> &Url {
        &self.page
    }

    #[cfg(test)]
    pub(crate) fn with_backoff(mut self, backoff: std::time::Duration) -> Self {
        self.client = self.client.with_backoff(backoff);
        self
    }
}

/// 「単体データコーナー」を含む最初の `<ul>` 内のリンクを絶対URLにする
pub(crate) fn parse_corner_links(html: &str, page: &Url) -> Result<Vec<Url>, JrdbError> {
    static UL: OnceLock<Selector> = OnceLock::new();
    static LINK: OnceLock<Selector> = OnceLock::new();
    let ul_selector = UL.get_or_init(|| Selector::parse("ul").expect("valid selector"));
    let a_selector = LINK.get_or_init(|| Selector::parse("a[href]").expect("valid selector"));

    let document = Html::parse_document(html);
    let Some(corner) = document
        .select(ul_selector)
        .find(|ul| ul.text().collect::<String>().contains(CORNER_MARKER))
    else {
        return Err(JrdbError::NoLinks(format!(
            "{}が見つかりません: {}",
            CORNER_MARKER, page
        )));
    };

    let links = corner
        .select(a_selector)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| page.join(href.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    if links.is_empty() {
        return Err(JrdbError::NoLinks(page.to_string()));
    }
    Ok(links)
}

#[async_trait]
impl Scraper for CornerScraper {
    async fn login(&mut self) -> Result<(), JrdbError> {
        info!("単体データコーナーにアクセス: {}", self.page);
        let html = self.client.fetch_index(&self.page).await?;
        self.index_html = Some(html);
        Ok(())
    }

    async fn collect_links(&mut self) -> Result<Vec<Url>, JrdbError> {
        let html = self.index_html.as_deref().ok_or(JrdbError::NotLoggedIn)?;
        let links = parse_corner_links(html, &self.page)?;
        info!("{}: ダウンロードリンク{}件", self.kind, links.len());
        Ok(links)
    }

    async fn download(&mut self, links: Vec<Url>) -> Result<Vec<PathBuf>, JrdbError> {
        download_and_organize(&self.client, &self.config, links).await
    }
}
