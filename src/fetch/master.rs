//! 騎手・調教師・抹消馬マスタ (KZA / CZA / MZA) の取得

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

/// 会員トップの表で取得対象とするデータ名
pub const MASTER_LABELS: [&str; 3] = [
    "JRDB騎手データ(KZA)",
    "JRDB調教師データ(CZA)",
    "JRDB抹消馬データ(MZA)",
];

pub struct MasterScraper {
    config: JrdbConfig,
    client: JrdbClient,
    page: Url,
    index_html: Option<String>,
}

impl MasterScraper {
    pub fn new(config: JrdbConfig) -> Result<Self, JrdbError> {
        let page = Url::parse(&config.base_url)?;
        let client = JrdbClient::new(&config)?;
        Ok(Self {
            config,
            client,
            page,
            index_html: None,
        })
    }
}

/// 3列目がマスタ名の行から、4列目の `.lzh` リンクを拾う
pub(crate) fn parse_master_links(html: &str, page: &Url) -> Result<Vec<Url>, JrdbError> {
    static TR: OnceLock<Selector> = OnceLock::new();
    static TD: OnceLock<Selector> = OnceLock::new();
    static LZH: OnceLock<Selector> = OnceLock::new();
    let tr_selector = TR.get_or_init(|| Selector::parse("tr").expect("valid selector"));
    let td_selector = TD.get_or_init(|| Selector::parse("td").expect("valid selector"));
    let lzh_selector =
        LZH.get_or_init(|| Selector::parse(r#"a[href$=".lzh"]"#).expect("valid selector"));

    let document = Html::parse_document(html);
    let mut links = Vec::new();
    for row in document.select(tr_selector) {
        let cells: Vec<_> = row.select(td_selector).collect();
        if cells.len() < 4 {
            continue;
        }
        let label = cells[2].text().collect::<String>();
        if !MASTER_LABELS.contains(&label.trim()) {
            continue;
        }
        if let Some(href) = cells[3]
            .select(lzh_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            links.push(page.join(href.trim())?);
        }
    }

    if links.is_empty() {
        return Err(JrdbError::NoLinks(format!("マスタデータ: {}", page)));
    }
    Ok(links)
}

#[async_trait]
impl Scraper for MasterScraper {
    async fn login(&mut self) -> Result<(), JrdbError> {
        info!("会員ページにアクセス: {}", self.page);
        let html = self.client.fetch_index(&self.page).await?;
        self.index_html = Some(html);
        Ok(())
    }

    async fn collect_links(&mut self) -> Result<Vec<Url>, JrdbError> {
        let html = self.index_html.as_deref().ok_or(JrdbError::NotLoggedIn)?;
        let links = parse_master_links(html, &self.page)?;
        info!("マスタデータ: ダウンロードリンク{}件", links.len());
        Ok(links)
    }

    async fn download(&mut self, links: Vec<Url>) -> Result<Vec<PathBuf>, JrdbError> {
        download_and_organize(&self.client, &self.config, links).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::tests::lzh_bytes;
    use crate::fetch::test_server::{self, FakeJrdb, PASSWORD, USER};
    use std::time::Duration;
    use tempfile::TempDir;

    const INDEX: &str = r#"<html><body><table>
<tr><th>No</th><th>更新日</th><th>データ名</th><th>ファイル</th></tr>
<tr><td>1</td><td>2024/01/06</td><td>JRDB騎手データ(KZA)</td><td><a href="Kza/KZA240106.lzh">LZH</a> <a href="Kza/KZA240106.zip">ZIP</a></td></tr>
<tr><td>2</td><td>2024/01/06</td><td> JRDB調教師データ(CZA) </td><td><a href="Cza/CZA240106.lzh">LZH</a></td></tr>
<tr><td>3</td><td>2024/01/06</td><td>JRDB抹消馬データ(MZA)</td><td><a href="Mza/MZA240106.lzh">LZH</a></td></tr>
<tr><td>4</td><td>2024/01/06</td><td>JRDB競走馬データ(KYI)</td><td><a href="Kyi/KYI240106.lzh">LZH</a></td></tr>
<tr><td>5</td><td>JRDB騎手データ(KZA)</td><td>短い行</td></tr>
</table></body></html>"#;

    #[test]
    fn test_parse_master_links() {
        let page = Url::parse("http://www.jrdb.com/member/data/").unwrap();
        let links = parse_master_links(INDEX, &page).unwrap();
        assert_eq!(
            links,
            vec![
                Url::parse("http://www.jrdb.com/member/data/Kza/KZA240106.lzh").unwrap(),
                Url::parse("http://www.jrdb.com/member/data/Cza/CZA240106.lzh").unwrap(),
                Url::parse("http://www.jrdb.com/member/data/Mza/MZA240106.lzh").unwrap(),
            ]
        );
    }

    #[test]
    fn test_parse_master_links_none() {
        let page = Url::parse("http://www.jrdb.com/member/data/").unwrap();
        let err = parse_master_links("<table><tr><td>x</td></tr></table>", &page).unwrap_err();
        assert!(matches!(err, JrdbError::NoLinks(_)));
    }

    #[tokio::test]
    async fn test_execute_master() {
        let fake = FakeJrdb::default()
            .with_html("/member/data/index.html", INDEX)
            .with_file(
                "/member/data/Kza/KZA240106.lzh",
                lzh_bytes(&[("KZA240106.txt", b"kza")]),
            )
            .with_file(
                "/member/data/Cza/CZA240106.lzh",
                lzh_bytes(&[("CZA240106.txt", b"cza")]),
            )
            .with_file(
                "/member/data/Mza/MZA240106.lzh",
                lzh_bytes(&[("MZA240106.txt", b"mza")]),
            );
        let (base_url, _) = test_server::spawn(fake).await;
        let tmp = TempDir::new().unwrap();
        let txt_dir = tmp.path().join("txt");

        let config = JrdbConfig::new(USER, PASSWORD)
            .with_base_url(&base_url)
            .with_txt_dir(&txt_dir)
            .with_timeout(Duration::from_secs(5));
        let mut scraper = MasterScraper::new(config).unwrap();
        let paths = scraper.execute().await.unwrap();

        assert_eq!(paths.len(), 3);
        for kind in ["KZA", "CZA", "MZA"] {
            let path = txt_dir.join(kind).join("2024").join(format!("{}240106.txt", kind));
            assert!(path.exists(), "{:?}", path);
        }
    }
}
