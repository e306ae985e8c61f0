//! jrdb-fetcher コマンド
//!
//! ```text
//! jrdb-fetcher download Ov Paci
//! jrdb-fetcher master
//! jrdb-fetcher convert KYI SED
//! jrdb-fetcher run
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tower::Service;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use jrdb_fetcher::config::{load_dotenv, PASSWORD_ENV, USER_ENV};
use jrdb_fetcher::{FetchRequest, FetchResult, FileType, JrdbConfig, JrdbError, JrdbService};

#[derive(Debug, Parser)]
#[command(name = "jrdb-fetcher", version, about = "JRDBデータのダウンロード・解凍・CSV変換")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// JRDB会員ID
    #[arg(long, env = USER_ENV, global = true, hide_env_values = true)]
    user: Option<String>,

    /// JRDB会員パスワード
    #[arg(long, env = PASSWORD_ENV, global = true, hide_env_values = true)]
    password: Option<String>,

    /// 会員データのベースURL
    #[arg(long, env = "JRDB_BASE_URL", global = true)]
    base_url: Option<String>,

    /// 解凍したTXTの保存先
    #[arg(long, env = "JRDB_TXT_DIR", global = true)]
    txt_dir: Option<PathBuf>,

    /// CSVの出力先
    #[arg(long, env = "JRDB_CSV_DIR", global = true)]
    csv_dir: Option<PathBuf>,

    /// 同時ダウンロード数
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// HTTPタイムアウト (秒)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// TXTの文字コード
    #[arg(long, global = true)]
    encoding: Option<String>,

    /// 処理結果をJSONで標準出力に出す
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 単体データコーナーから一括ダウンロード
    Download {
        /// 種別 (例: Ov, Paci)
        #[arg(required = true)]
        kinds: Vec<String>,
    },
    /// 騎手・調教師・抹消馬マスタをダウンロード
    Master,
    /// TXTをCSVに変換
    Convert {
        /// ファイル種別 (例: KYI, SED)
        #[arg(required = true)]
        types: Vec<FileType>,
    },
    /// ダウンロード → マスタ取得 → CSV変換
    Run {
        /// 単体データコーナーの種別
        #[arg(long, num_args = 1.., default_values = ["Ov", "Paci"])]
        kinds: Vec<String>,

        /// 省略時は全種別 (TXTが無い種別はスキップ)
        #[arg(long, num_args = 1..)]
        types: Vec<FileType>,
    },
}

impl GlobalArgs {
    fn to_config(&self) -> JrdbConfig {
        let mut config = JrdbConfig::new(
            self.user.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        );
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(dir) = &self.txt_dir {
            config = config.with_txt_dir(dir);
        }
        if let Some(dir) = &self.csv_dir {
            config = config.with_csv_dir(dir);
        }
        if let Some(n) = self.concurrency {
            config = config.with_concurrency(n);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(label) = &self.encoding {
            config = config.with_encoding(label.as_str());
        }
        config
    }
}

fn require_credentials(config: &JrdbConfig) -> Result<(), JrdbError> {
    if config.user.is_empty() {
        return Err(JrdbError::MissingCredentials(USER_ENV));
    }
    if config.password.is_empty() {
        return Err(JrdbError::MissingCredentials(PASSWORD_ENV));
    }
    Ok(())
}

/// 変換対象 (未指定なら全種別のうちTXTディレクトリがあるもの)
fn convert_targets(types: Vec<FileType>, config: &JrdbConfig) -> Vec<FileType> {
    if !types.is_empty() {
        return types;
    }
    FileType::ALL
        .into_iter()
        .filter(|file_type| {
            let present = config.txt_dir.join(file_type.as_str()).is_dir();
            if !present {
                debug!("TXTが無いためスキップ: {}", file_type);
            }
            present
        })
        .collect()
}

async fn call_all(
    service: &mut JrdbService,
    requests: impl IntoIterator<Item = FetchRequest>,
    results: &mut Vec<FetchResult>,
) -> Result<(), JrdbError> {
    for request in requests {
        results.push(service.call(request).await?);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<Vec<FetchResult>, JrdbError> {
    let config = cli.global.to_config();
    debug!("設定: {:?}", config);
    let mut service = JrdbService::new(config.clone());
    let mut results = Vec::new();

    match cli.command {
        Command::Download { kinds } => {
            require_credentials(&config)?;
            call_all(&mut service, kinds.into_iter().map(FetchRequest::corner), &mut results)
                .await?;
        }
        Command::Master => {
            require_credentials(&config)?;
            call_all(&mut service, [FetchRequest::Master], &mut results).await?;
        }
        Command::Convert { types } => {
            call_all(&mut service, types.into_iter().map(FetchRequest::convert), &mut results)
                .await?;
        }
        Command::Run { kinds, types } => {
            require_credentials(&config)?;
            call_all(&mut service, kinds.into_iter().map(FetchRequest::corner), &mut results)
                .await?;
            call_all(&mut service, [FetchRequest::Master], &mut results).await?;
            // ダウンロード後のTXTを見て対象を決める
            let targets = convert_targets(types, &config);
            call_all(&mut service, targets.into_iter().map(FetchRequest::convert), &mut results)
                .await?;
        }
    }
    Ok(results)
}

#[tokio::main]
async fn main() -> ExitCode {
    // .envがあれば読み込む (clapのenvより先に)
    let dotenv = load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,jrdb_fetcher=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match dotenv {
        Ok(Some(path)) => debug!(".envを読み込みました: {:?}", path),
        Ok(None) => {}
        Err(e) => warn!(".envの読み込みに失敗しました: {}", e),
    }

    let cli = Cli::parse();
    let json = cli.global.json;

    match run(cli).await {
        Ok(results) => {
            if json {
                match serde_json::to_string_pretty(&results) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        error!("JSON出力エラー: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for result in &results {
                    println!("{}: {}件", result.label, result.paths.len());
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["jrdb-fetcher", "--user", "u", "--password", "p"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_defaults() {
        let cli = parse(&["run"]);
        match cli.command {
            Command::Run { kinds, types } => {
                assert_eq!(kinds, vec!["Ov".to_string(), "Paci".to_string()]);
                assert!(types.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_convert_types() {
        let cli = parse(&["convert", "KYI", "sed"]);
        match cli.command {
            Command::Convert { types } => assert_eq!(types, vec![FileType::Kyi, FileType::Sed]),
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["jrdb-fetcher", "convert", "XYZ"]).is_err());
        assert!(Cli::try_parse_from(["jrdb-fetcher", "download"]).is_err());
    }

    #[test]
    fn test_flags_to_config() {
        let cli = parse(&[
            "download",
            "Ov",
            "--base-url",
            "http://localhost:8080/member/data",
            "--txt-dir",
            "/tmp/txt",
            "--csv-dir",
            "/tmp/csv",
            "--concurrency",
            "2",
            "--timeout",
            "5",
            "--encoding",
            "windows-31j",
        ]);
        let config = cli.global.to_config();

        assert_eq!(config.user, "u");
        assert_eq!(config.password, "p");
        assert_eq!(config.base_url, "http://localhost:8080/member/data/");
        assert_eq!(config.txt_dir, PathBuf::from("/tmp/txt"));
        assert_eq!(config.csv_dir, PathBuf::from("/tmp/csv"));
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.encoding, "windows-31j");
    }

    #[test]
    fn test_require_credentials() {
        assert!(require_credentials(&JrdbConfig::new("u", "p")).is_ok());
        assert!(matches!(
            require_credentials(&JrdbConfig::new("", "p")),
            Err(JrdbError::MissingCredentials(USER_ENV))
        ));
        assert!(matches!(
            require_credentials(&JrdbConfig::new("u", "")),
            Err(JrdbError::MissingCredentials(PASSWORD_ENV))
        ));
    }

    #[tokio::test]
    async fn test_convert_works_without_credentials() {
        let tmp = TempDir::new().unwrap();
        let txt_dir = tmp.path().join("txt");
        let cli = Cli::try_parse_from([
            "jrdb-fetcher",
            "--user",
            "",
            "--password",
            "",
            "--txt-dir",
            txt_dir.to_str().unwrap(),
            "--csv-dir",
            tmp.path().join("csv").to_str().unwrap(),
            "convert",
            "KYI",
        ])
        .unwrap();

        let results = run(cli).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].paths.is_empty());
    }

    #[tokio::test]
    async fn test_download_requires_credentials() {
        let cli = Cli::try_parse_from([
            "jrdb-fetcher",
            "--user",
            "",
            "--password",
            "p",
            "master",
        ])
        .unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(matches!(err, JrdbError::MissingCredentials(USER_ENV)));
    }

    #[test]
    fn test_convert_targets() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("KYI").join("2024")).unwrap();
        std::fs::create_dir_all(tmp.path().join("SED")).unwrap();
        let config = JrdbConfig::new("u", "p").with_txt_dir(tmp.path());

        // 未指定ならTXTディレクトリのある種別だけ
        assert_eq!(
            convert_targets(Vec::new(), &config),
            vec![FileType::Kyi, FileType::Sed]
        );
        // 指定があればそのまま
        assert_eq!(
            convert_targets(vec![FileType::Bac], &config),
            vec![FileType::Bac]
        );
    }
}
