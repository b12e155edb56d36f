//! エラー型の定義
//!
//! このモジュールは、変換ライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;

/// このクレート専用のResult型
///
/// エラー型としてデフォルトで[`UserDictError`]を使用します。
pub type Result<T, E = UserDictError> = std::result::Result<T, E>;

/// ユーザー辞書変換のエラー型
///
/// 入力XMLの読み込みからCSVの書き出し・検証までに発生し得るすべてのエラーを表現します。
/// どのバリアントも回復されず、変換処理全体を中断させます。
#[derive(Debug, thiserror::Error)]
pub enum UserDictError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 必須要素の欠落エラー
    ///
    /// [`MissingFieldError`]のエラーバリアント。
    #[error(transparent)]
    MissingField(MissingFieldError),

    /// 整数パースエラー
    ///
    /// [`ParseIntError`](std::num::ParseIntError)のエラーバリアント。
    #[error(transparent)]
    ParseInt(std::num::ParseIntError),

    /// UTF-8エンコーディングエラー
    ///
    /// [`std::str::Utf8Error`]のエラーバリアント。
    #[error(transparent)]
    Utf8(std::str::Utf8Error),

    /// XMLパースエラー
    ///
    /// [`quick_xml::Error`]のエラーバリアント。
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl UserDictError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// 必須要素の欠落エラーを生成します
    ///
    /// # 引数
    ///
    /// * `entry` - 問題のあるエントリの識別子
    /// * `field` - 欠落している要素名
    pub(crate) fn missing_field<S>(entry: S, field: &'static str) -> Self
    where
        S: Into<String>,
    {
        Self::MissingField(MissingFieldError {
            entry: entry.into(),
            field,
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// エントリに必須の要素が存在しない場合に使用されるエラー
#[derive(Debug)]
pub struct MissingFieldError {
    /// エントリの識別子 (`ent_seq` または最初の表記)
    pub(crate) entry: String,

    /// 欠落している要素名
    pub(crate) field: &'static str,
}

impl MissingFieldError {
    /// 欠落している要素名を返します。
    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl fmt::Display for MissingFieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MissingFieldError: entry {}: required element <{}> is missing",
            self.entry, self.field
        )
    }
}

impl Error for MissingFieldError {}

impl From<std::num::ParseIntError> for UserDictError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::ParseInt(error)
    }
}

impl From<std::str::Utf8Error> for UserDictError {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::Utf8(error)
    }
}
