//! 生成されたユーザー辞書CSVの検証
//!
//! 辞書コンパイラに渡す前に、各行が13列であること、表層形が空でないこと、
//! 文脈IDとコストが数値として解釈できることを確認します。

use std::io::BufRead;

use crate::emitter::BOM;
use crate::errors::{Result, UserDictError};
use crate::utils;

/// ユーザー辞書の1行の列数
pub const NUM_COLUMNS: usize = 13;

/// ユーザー辞書CSVを検証します。
///
/// 先頭のバイトオーダーマークと空行は無視されます。
///
/// # 引数
///
/// * `rdr` - ユーザー辞書CSVのリーダー
///
/// # 戻り値
///
/// 検証した行数
///
/// # エラー
///
/// 不正な行が見つかった場合、行番号を含む[`UserDictError::InvalidFormat`]を返します。
pub fn verify_userdict<R>(rdr: R) -> Result<usize>
where
    R: BufRead,
{
    let mut num_records = 0;
    for (i, line) in rdr.lines().enumerate() {
        let line = line?;
        let line = if i == 0 {
            line.strip_prefix(BOM).unwrap_or(&line)
        } else {
            &line
        };
        if line.is_empty() {
            continue;
        }
        verify_row(line).map_err(|msg| {
            UserDictError::invalid_format("userdict", format!("line {}: {msg}, {line:?}", i + 1))
        })?;
        num_records += 1;
    }
    Ok(num_records)
}

fn verify_row(line: &str) -> std::result::Result<(), String> {
    let fields = utils::parse_csv_row(line).map_err(|e| e.to_string())?;
    if fields.len() != NUM_COLUMNS {
        return Err(format!(
            "a row must have {NUM_COLUMNS} columns, found {}",
            fields.len()
        ));
    }
    if fields[0].is_empty() {
        return Err("the surface is empty".to_string());
    }
    fields[1]
        .parse::<u16>()
        .map_err(|e| format!("invalid left id: {e}"))?;
    fields[2]
        .parse::<u16>()
        .map_err(|e| format!("invalid right id: {e}"))?;
    fields[3]
        .parse::<i16>()
        .map_err(|e| format!("invalid cost: {e}"))?;
    Ok(())
}
