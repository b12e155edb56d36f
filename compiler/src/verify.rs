//! ユーザー辞書の検証モジュール
//!
//! 生成済みのユーザー辞書CSVが辞書コンパイラの想定する形式に
//! なっているかを確認します。

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;

use jmnedict_userdict::errors::UserDictError;
use jmnedict_userdict::verify_userdict;

/// 検証コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "verify",
    about = "A program to check a generated user dictionary (CSV)."
)]
pub struct Args {
    /// User dictionary file to be checked.
    #[clap(value_name = "CSV_PATH")]
    userdict_in: PathBuf,
}

/// 検証中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 不正な行
    #[error("Verification failed: {0}")]
    UserDict(#[from] UserDictError),
}

/// 検証コマンドを実行する
///
/// # エラー
///
/// ファイルを開けない場合や不正な行が見つかった場合、`VerifyError`を返します。
pub fn run(args: Args) -> Result<(), VerifyError> {
    let rdr = BufReader::new(File::open(&args.userdict_in)?);
    let num_records = verify_userdict(rdr)?;
    println!(
        "{} contains {num_records} valid records",
        args.userdict_in.display()
    );
    Ok(())
}
