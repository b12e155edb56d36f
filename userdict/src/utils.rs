//! CSV処理のユーティリティ

use csv_core::ReadFieldResult;

use crate::errors::{Result, UserDictError};

/// ユーザー辞書CSVの1行をフィールドに分割する
///
/// [`verify_userdict`](crate::verify::verify_userdict)が列数と各列の値を
/// 確認するために使います。ダブルクォートで囲まれたフィールド内のカンマは
/// 区切りとして扱いません。
///
/// # 引数
///
/// * `row` - 解析するCSV形式の文字列
///
/// # 戻り値
///
/// 解析されたフィールドを格納する文字列のベクター
///
/// # エラー
///
/// 1つのフィールドが大きすぎる場合にエラーを返します。
///
/// # 例
///
/// ```
/// # use jmnedict_userdict::utils::parse_csv_row;
/// let fields = parse_csv_row("名詞,トスカーナ").unwrap();
/// assert_eq!(fields, vec!["名詞", "トスカーナ"]);
///
/// let fields_with_quote = parse_csv_row("名詞,\"1,2-ジクロロエタン\"").unwrap();
/// assert_eq!(fields_with_quote, vec!["名詞", "1,2-ジクロロエタン"]);
/// ```
pub fn parse_csv_row(row: &str) -> Result<Vec<String>> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty | ReadFieldResult::End => true,
            ReadFieldResult::Field { .. } => false,
            ReadFieldResult::OutputFull => {
                return Err(UserDictError::invalid_format("csv", "Field too large"))
            }
        };
        fields.push(std::str::from_utf8(&output[..nout])?.to_string());
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    Ok(fields)
}
