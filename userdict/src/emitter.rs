//! ユーザー辞書CSVの書き出し
//!
//! 選択されたエントリを、MeCab/Kuromoji形式のユーザー辞書の行に展開します。
//! 1行は次のフィールドから成ります。
//!
//! | 列 | 内容 |
//! |---|---|
//! | 1 | 表層形 (表記) |
//! | 2-4 | 左文脈ID / 右文脈ID / コスト |
//! | 5-8 | 品詞, 品詞細分類1-3 |
//! | 9-11 | 活用型, 活用形, 原形 (`*`) |
//! | 12 | 読み |
//! | 13 | 発音 (読みと同じ) |
//!
//! 区切り文字のエスケープは行いません。

use std::fmt;
use std::io::{BufWriter, Write};

use crate::errors::Result;
use crate::name_type;
use crate::selector::Selection;

/// 左文脈ID
pub const LEFT_ID: u16 = 500;

/// 右文脈ID
pub const RIGHT_ID: u16 = 500;

/// 単語コスト
pub const WORD_COST: i16 = 1200;

/// 品詞
pub const POS_NOUN: &str = "名詞";

/// 品詞細分類1
pub const POS_PROPER_NOUN: &str = "固有名詞";

/// 活用型・活用形・原形のプレースホルダ
pub const CONJUGATION_PLACEHOLDER: &str = "*,*,*";

/// 出力の先頭に書き込むバイトオーダーマーク
pub const BOM: &str = "\u{feff}";

/// ユーザー辞書の1行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDictRecord<'a> {
    /// 表記
    pub surface: &'a str,

    /// カテゴリラベル (品詞細分類2)
    pub category: &'a str,

    /// 読み
    pub reading: &'a str,
}

impl<'a> UserDictRecord<'a> {
    /// 表記・種別タグ・読みから行を作成します。
    ///
    /// 種別タグは[`name_type::category_label`]でラベルに変換されます。
    pub fn new(surface: &'a str, name_type: &str, reading: &'a str) -> Self {
        Self {
            surface,
            category: name_type::category_label(name_type),
            reading,
        }
    }

    fn has_delimiter(&self) -> bool {
        [self.surface, self.category, self.reading]
            .iter()
            .any(|field| field.contains(','))
    }
}

impl fmt::Display for UserDictRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{surface},{LEFT_ID},{RIGHT_ID},{WORD_COST},{POS_NOUN},{POS_PROPER_NOUN},{category},{surface},{CONJUGATION_PLACEHOLDER},{reading},{reading}",
            surface = self.surface,
            category = self.category,
            reading = self.reading,
        )
    }
}

/// ユーザー辞書の行を出力先に書き込むライター
///
/// 作成時にバイトオーダーマークを書き込み、以後は行を追記するだけです。
pub struct RecordWriter<W>
where
    W: Write,
{
    wtr: BufWriter<W>,
    records_written: usize,
}

impl<W> RecordWriter<W>
where
    W: Write,
{
    /// 新しいライターを作成し、バイトオーダーマークを書き込みます。
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合にエラーを返します。
    pub fn new(wtr: W) -> Result<Self> {
        let mut wtr = BufWriter::new(wtr);
        wtr.write_all(BOM.as_bytes())?;
        Ok(Self {
            wtr,
            records_written: 0,
        })
    }

    /// 1行を書き込みます。
    pub fn write_record(&mut self, record: &UserDictRecord) -> Result<()> {
        if record.has_delimiter() {
            log::warn!("A field contains the delimiter and is written unescaped: {record}");
        }
        writeln!(&mut self.wtr, "{record}")?;
        self.records_written += 1;
        Ok(())
    }

    /// 選択されたエントリを (種別タグ × 表記) の行に展開して書き込みます。
    ///
    /// 読みはエントリの最初の読みをすべての行で共有します。
    ///
    /// # 戻り値
    ///
    /// 書き込んだ行数
    ///
    /// # エラー
    ///
    /// 1行以上を出力するエントリに読みが無い場合、
    /// [`UserDictError::MissingField`](crate::errors::UserDictError::MissingField)を返します。
    pub fn write_selection(&mut self, selection: &Selection) -> Result<usize> {
        let spellings = selection.entry.spellings();
        if spellings.is_empty() || selection.name_types.is_empty() {
            return Ok(0);
        }
        let reading = selection.entry.first_reading()?;
        for name_type in &selection.name_types {
            for surface in spellings {
                self.write_record(&UserDictRecord::new(surface, name_type, reading))?;
            }
        }
        Ok(spellings.len() * selection.name_types.len())
    }

    /// これまでに書き込んだ行数
    #[inline]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// バッファをフラッシュし、内部のライターを返します。
    ///
    /// # エラー
    ///
    /// フラッシュに失敗した場合にエラーを返します。
    pub fn into_inner(self) -> Result<W> {
        Ok(self.wtr.into_inner().map_err(|e| e.into_error())?)
    }
}
