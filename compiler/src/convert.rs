//! JMnedictの変換モジュール
//!
//! このモジュールは、JMnedictのXMLファイルを読み込み、
//! MeCab/Kuromoji形式のユーザー辞書CSVを出力する機能を提供します。
//! 拡張子が`.zst`の入力はzstdで展開しながら読み込みます。

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use jmnedict_userdict::errors::UserDictError;
use jmnedict_userdict::{convert_with_stats, parse_entries, InclusionFilter};

/// 変換コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "convert",
    about = "A program to convert JMnedict into a MeCab-compatible user dictionary."
)]
pub struct Args {
    /// XML file to process (plain or in zstd).
    #[clap(value_name = "INPUT_XML", default_value = "JMnedict.xml")]
    input_xml: PathBuf,

    /// Comma-separated list of JMnedict entry types to include (DTD entity names,
    /// e.g. surname,masc,fem,given).
    ///
    /// If this argument is not specified, all entries are converted.
    #[clap(long = "include", value_name = "TYPES", value_delimiter = ',')]
    included_types: Option<Vec<String>>,

    /// File to which the user dictionary (CSV) is output.
    ///
    /// Defaults to the input path with its extension replaced by `.csv`.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
}

/// 変換処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 変換エラー
    #[error("Conversion failed: {0}")]
    UserDict(#[from] UserDictError),
}

/// 入力パスから既定の出力パスを決定する
///
/// `.zst`を取り除いたうえで、拡張子を`.csv`に置き換えます。
fn default_output_path(input: &Path) -> PathBuf {
    let input = if input.extension().is_some_and(|ext| ext == "zst") {
        input.with_extension("")
    } else {
        input.to_path_buf()
    };
    input.with_extension("csv")
}

/// 入力ファイルを開く
///
/// 拡張子が`.zst`の場合はzstdのデコーダーを挟みます。
fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "zst") {
        Ok(Box::new(BufReader::new(zstd::Decoder::new(file)?)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// 変換コマンドを実行する
///
/// XML全体をエントリの一覧として読み込んだ後、出力ファイルへ行を書き込みます。
///
/// # エラー
///
/// ファイルの読み書きや変換に失敗した場合、`ConvertError`を返します。
pub fn run(args: Args) -> Result<(), ConvertError> {
    let filter = args
        .included_types
        .map(InclusionFilter::new)
        .transpose()?;
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input_xml));

    println!("XML parsing: {}", args.input_xml.display());
    // 読み込みと変換の所要時間を別々に報告するため、先にすべてのエントリを読み込む
    let start = Instant::now();
    let entries = parse_entries(open_input(&args.input_xml)?)?;
    println!(
        "Parsed {} entries in {:.2} seconds",
        entries.len(),
        start.elapsed().as_secs_f64()
    );

    let start = Instant::now();
    let file = File::create(&output)?;
    let stats = convert_with_stats(entries.into_iter().map(Ok), file, filter.as_ref())?;
    println!(
        "Processed {} entries in {:.2} seconds",
        stats.entries_processed,
        start.elapsed().as_secs_f64()
    );
    log::info!(
        "entries_processed={} entries_written={} records_written={}",
        stats.entries_processed,
        stats.entries_written,
        stats.records_written
    );
    println!(
        "Wrote {} records from {} entries to {}",
        stats.records_written,
        stats.entries_written,
        output.display()
    );
    Ok(())
}
