//! 名前種別の対応表を表示するモジュール

use clap::Parser;

use jmnedict_userdict::name_type::{GENERAL_LABEL, NAME_TYPE_LABELS};

/// 対応表表示コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "types",
    about = "Prints the name types and the category labels they are mapped to."
)]
pub struct Args {}

/// 対応表をタブ区切りで標準出力に書き出す
pub fn run(_args: Args) {
    for (tag, label) in NAME_TYPE_LABELS {
        println!("{tag}\t{label}");
    }
    println!("*\t{GENERAL_LABEL}");
}
