//! 固定長TXT (CP932) -> UTF-8 CSV 変換モジュール

mod converter;
mod layouts;
mod record;
mod types;

pub use converter::Converter;
pub use record::{RecordDecoder, REPEATED_SEPARATOR};
pub use types::{Field, FieldKind, FileType};
