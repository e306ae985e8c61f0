use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use chrono::{DateTime, Local};
use serde::Serialize;
use tower::Service;
use tracing::info;

use crate::config::JrdbConfig;
use crate::convert::{Converter, FileType};
use crate::error::JrdbError;
use crate::fetch::{CornerScraper, MasterScraper};
use crate::traits::Scraper;

/// 処理リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// 単体データコーナーの一括ダウンロード (`Ov`, `Paci` 等)
    Corner { kind: String },
    /// 騎手・調教師・抹消馬マスタのダウンロード
    Master,
    /// TXT → CSV 変換
    Convert { file_type: FileType },
}

impl FetchRequest {
    pub fn corner(kind: impl Into<String>) -> Self {
        FetchRequest::Corner { kind: kind.into() }
    }

    pub fn convert(file_type: FileType) -> Self {
        FetchRequest::Convert { file_type }
    }

    /// ログ・結果表示用の名前
    pub fn label(&self) -> String {
        match self {
            FetchRequest::Corner { kind } => format!("download:{}", kind),
            FetchRequest::Master => "master".to_string(),
            FetchRequest::Convert { file_type } => format!("convert:{}", file_type),
        }
    }
}

/// 処理結果
#[derive(Debug, Clone, Serialize)]
pub struct FetchResult {
    pub label: String,
    /// 振り分けたTXT、または出力したCSV
    pub paths: Vec<PathBuf>,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

/// tower::Serviceを実装したJRDB処理サービス
#[derive(Debug, Clone)]
pub struct JrdbService {
    config: JrdbConfig,
}

impl JrdbService {
    pub fn new(config: JrdbConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JrdbConfig {
        &self.config
    }
}

async fn handle(config: JrdbConfig, req: FetchRequest) -> Result<Vec<PathBuf>, JrdbError> {
    match req {
        FetchRequest::Corner { kind } => CornerScraper::new(config, kind)?.execute().await,
        FetchRequest::Master => MasterScraper::new(config)?.execute().await,
        FetchRequest::Convert { file_type } => {
            let converter = Converter::new(file_type, config.text_encoding()?);
            let txt_dir = config.txt_dir.clone();
            let csv_dir = config.csv_dir.clone();
            tokio::task::spawn_blocking(move || converter.convert_all(&txt_dir, &csv_dir)).await?
        }
    }
}

impl Service<FetchRequest> for JrdbService {
    type Response = FetchResult;
    type Error = JrdbError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: FetchRequest) -> Self::Future {
        let label = req.label();
        info!("リクエスト受信: {}", label);
        let config = self.config.clone();

        Box::pin(async move {
            let started_at = Local::now();
            let paths = handle(config, req).await?;
            let finished_at = Local::now();

            info!(
                "処理完了: {} ({}件, {}ms)",
                label,
                paths.len(),
                (finished_at - started_at).num_milliseconds()
            );

            Ok(FetchResult {
                label,
                paths,
                started_at,
                finished_at,
            })
        })
    }
}
