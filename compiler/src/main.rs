//! JMnedictユーザー辞書コンパイラのメインエントリーポイント
//!
//! このモジュールは、JMnedictからMeCab形式のユーザー辞書を生成するための
//! サブコマンドを提供します。XMLの変換、生成したCSVの検証、
//! 名前種別とラベルの対応表の表示を1つのCLIツールにまとめています。

mod convert;
mod types;
mod verify;

use clap::Parser;
use thiserror::Error;

use crate::{convert::ConvertError, verify::VerifyError};

/// コマンドライン引数の構造体
///
/// `clap`を使用してコマンドライン引数をパースします。
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// JMnedictのXMLをユーザー辞書CSVに変換します
    ///
    /// 名前種別による絞り込みを指定でき、エントリの (表記 × 種別) ごとに1行を出力します。
    Convert(convert::Args),

    /// 生成したユーザー辞書CSVを検証します
    ///
    /// 各行の列数と、文脈ID・コストが数値であることを確認します。
    Verify(verify::Args),

    /// 名前種別とカテゴリラベルの対応表を表示します
    Types(types::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// 変換中のエラー
    #[error(transparent)]
    Convert(#[from] ConvertError),
    /// 検証中のエラー
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

/// メイン関数
///
/// コマンドライン引数をパースし、指定されたサブコマンドを実行します。
///
/// # エラー
///
/// 各サブコマンドの実行中にエラーが発生した場合、そのエラーが返されます。
fn main() -> Result<(), CompileError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Convert(args) => Ok(convert::run(args)?),
        Command::Verify(args) => Ok(verify::run(args)?),
        Command::Types(args) => {
            types::run(args);
            Ok(())
        }
    }
}
