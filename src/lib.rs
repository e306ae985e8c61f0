//! JRDBデータ取得ライブラリ
//!
//! - JRDB会員ページからBasic認証でLZH/ZIPをダウンロード
//! - 解凍したTXTを `<種別>/<年>/` に振り分け
//! - 固定長 (CP932) のTXTをUTF-8のCSVに変換
//!
//! # ダウンロード使用例
//!
//! ```rust,ignore
//! use jrdb_fetcher::{FetchRequest, JrdbConfig, JrdbService};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     // JRDB_USER / JRDB_PASSWORD (.env も可)
//!     let config = JrdbConfig::from_env().unwrap().with_concurrency(2);
//!     let mut service = JrdbService::new(config);
//!
//!     let result = service.call(FetchRequest::corner("Paci")).await.unwrap();
//!     println!("TXT: {:?}", result.paths);
//! }
//! ```
//!
//! # CSV変換使用例
//!
//! ```rust,ignore
//! use jrdb_fetcher::convert::{Converter, FileType};
//!
//! let converter = Converter::new(FileType::Kyi, encoding_rs::SHIFT_JIS);
//! let written = converter
//!     .convert_all("./data/jrdb_txt".as_ref(), "./data/jrdb_csv".as_ref())
//!     .unwrap();
//! println!("CSV: {:?}", written);
//! ```

pub mod archive;
pub mod config;
pub mod convert;
pub mod error;
pub mod fetch;
pub mod organize;
pub mod service;
pub mod traits;

pub use config::JrdbConfig;
pub use convert::FileType;
pub use error::JrdbError;
pub use fetch::{CornerScraper, MasterScraper};
pub use service::{FetchRequest, FetchResult, JrdbService};
pub use traits::Scraper;
