//! # jmnedict-userdict
//!
//! JMnedict (日本語固有名詞辞書) を、MeCab/Kuromoji形式のユーザー辞書CSVに変換します。
//!
//! ## 概要
//!
//! XML文書を一度だけ読み込んで各エントリの表記・読み・名前種別を取り出し、
//! 種別による包含フィルタを適用したうえで、(表記 × 種別) ごとに1行を出力します。
//! 出力される行の品詞は常に`名詞,固有名詞`で、品詞細分類2には名前種別に
//! 対応するラベル (`名字`、`地名`など) が入ります。
//!
//! - 読みは各エントリの最初のものだけを使います
//! - 出力の先頭にはバイトオーダーマークが付きます
//! - フィールドのエスケープは行いません
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jmnedict_userdict::{convert_with_stats, EntryReader, InclusionFilter};
//!
//! let xml = r#"<JMnedict>
//! <entry>
//! <ent_seq>5000001</ent_seq>
//! <k_ele><keb>中野</keb></k_ele>
//! <k_ele><keb>仲野</keb></k_ele>
//! <r_ele><reb>なかの</reb></r_ele>
//! <trans><name_type>&surname;</name_type><trans_det>Nakano</trans_det></trans>
//! </entry>
//! <entry>
//! <ent_seq>5000002</ent_seq>
//! <k_ele><keb>東京</keb></k_ele>
//! <r_ele><reb>とうきょう</reb></r_ele>
//! <trans><name_type>&place;</name_type><trans_det>Tokyo</trans_det></trans>
//! </entry>
//! </JMnedict>"#;
//!
//! let filter = InclusionFilter::new(["surname"])?;
//! let mut out = vec![];
//! let stats = convert_with_stats(EntryReader::new(xml.as_bytes()), &mut out, Some(&filter))?;
//!
//! assert_eq!(stats.entries_processed, 2);
//! assert_eq!(stats.records_written, 2);
//! assert_eq!(
//!     String::from_utf8(out)?,
//!     "\u{feff}中野,500,500,1200,名詞,固有名詞,名字,中野,*,*,*,なかの,なかの\n\
//!      仲野,500,500,1200,名詞,固有名詞,名字,仲野,*,*,*,なかの,なかの\n",
//! );
//! # Ok(())
//! # }
//! ```

/// エントリ列からユーザー辞書への変換
pub mod converter;

/// ユーザー辞書CSVの書き出し
pub mod emitter;

/// 辞書エントリのデータモデル
pub mod entry;

/// エラー型の定義
pub mod errors;

/// 名前種別タグとラベルの対応表
pub mod name_type;

/// JMnedict XMLの読み込み
pub mod parser;

/// 出力するエントリの選択
pub mod selector;

/// CSV処理のユーティリティ
pub mod utils;

/// 生成されたユーザー辞書の検証
pub mod verify;


// Re-exports
pub use converter::{convert, convert_with_stats, ConvertStats, Converter};
pub use emitter::{RecordWriter, UserDictRecord};
pub use entry::{Entry, Translation};
pub use parser::{parse_entries, EntryReader};
pub use selector::{select, InclusionFilter, Selection};
pub use verify::verify_userdict;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
