//! エントリ列からユーザー辞書への変換
//!
//! エントリを順に選択・展開し、行を出力先へ逐次書き込みます。
//! 出力全体をメモリに保持することはありません。

use std::io::Write;

use crate::emitter::RecordWriter;
use crate::entry::Entry;
use crate::errors::Result;
use crate::selector::{self, InclusionFilter};

/// 変換の集計結果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// 処理したエントリ数 (訳語グループを持つエントリのみ数えます)
    pub entries_processed: usize,

    /// 選択されたエントリ数
    pub entries_written: usize,

    /// 書き込んだ行数
    pub records_written: usize,
}

/// エントリを1件ずつ受け取り、ユーザー辞書の行を書き込む変換器
pub struct Converter<'f, W>
where
    W: Write,
{
    writer: RecordWriter<W>,
    filter: Option<&'f InclusionFilter>,
    stats: ConvertStats,
}

impl<'f, W> Converter<'f, W>
where
    W: Write,
{
    /// 新しい変換器を作成します。
    ///
    /// # 引数
    ///
    /// * `wtr` - 出力先
    /// * `filter` - 包含フィルタ。`None`の場合はすべてのエントリを出力します
    pub fn new(wtr: W, filter: Option<&'f InclusionFilter>) -> Result<Self> {
        Ok(Self {
            writer: RecordWriter::new(wtr)?,
            filter,
            stats: ConvertStats::default(),
        })
    }

    /// エントリを1件処理します。
    pub fn process(&mut self, entry: &Entry) -> Result<()> {
        if entry.translations().is_empty() {
            log::debug!("Skipped an entry without translations: {}", entry.label());
            return Ok(());
        }
        self.stats.entries_processed += 1;
        if let Some(selection) = selector::select(entry, self.filter) {
            self.stats.records_written += self.writer.write_selection(&selection)?;
            self.stats.entries_written += 1;
        }
        Ok(())
    }

    /// これまでの集計結果
    #[inline]
    pub fn stats(&self) -> ConvertStats {
        self.stats
    }

    /// 出力をフラッシュし、集計結果と出力先を返します。
    pub fn finish(self) -> Result<(ConvertStats, W)> {
        let wtr = self.writer.into_inner()?;
        Ok((self.stats, wtr))
    }
}

/// エントリ列をユーザー辞書に変換します。
///
/// # 引数
///
/// * `entries` - エントリ列 ([`EntryReader`](crate::parser::EntryReader)など)
/// * `wtr` - 出力先
/// * `filter` - 包含フィルタ
///
/// # 戻り値
///
/// 処理したエントリ数 (書き込んだ行数ではありません)
///
/// # エラー
///
/// エントリの読み込み・書き込みに失敗した場合、その時点で変換を中断してエラーを返します。
///
/// # 例
///
/// ```
/// use jmnedict_userdict::{convert, Entry, InclusionFilter, Translation};
///
/// let entry = Entry::new(["山田"], ["やまだ"])
///     .with_translation(Translation::new(["surname"]));
///
/// let mut out = vec![];
/// let processed = convert([Ok(entry)], &mut out, None)?;
/// assert_eq!(processed, 1);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "\u{feff}山田,500,500,1200,名詞,固有名詞,名字,山田,*,*,*,やまだ,やまだ\n",
/// );
/// # Ok::<(), jmnedict_userdict::errors::UserDictError>(())
/// ```
pub fn convert<I, W>(entries: I, wtr: W, filter: Option<&InclusionFilter>) -> Result<usize>
where
    I: IntoIterator<Item = Result<Entry>>,
    W: Write,
{
    Ok(convert_with_stats(entries, wtr, filter)?.entries_processed)
}

/// [`convert`]と同じ変換を行い、集計結果をすべて返します。
pub fn convert_with_stats<I, W>(
    entries: I,
    wtr: W,
    filter: Option<&InclusionFilter>,
) -> Result<ConvertStats>
where
    I: IntoIterator<Item = Result<Entry>>,
    W: Write,
{
    let mut converter = Converter::new(wtr, filter)?;
    for entry in entries {
        converter.process(&entry?)?;
    }
    let (stats, _) = converter.finish()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::entry::Translation;

    #[test]
    fn test_stats() {
        let entries = vec![
            Entry::new(["山田"], ["やまだ"]).with_translation(Translation::new(["surname"])),
            Entry::new(["東京"], ["とうきょう"]).with_translation(Translation::new(["place"])),
            Entry::new(["某"], ["なにがし"]),
        ];
        let filter = InclusionFilter::new(["place"]).unwrap();
        let mut converter = Converter::new(vec![], Some(&filter)).unwrap();
        for entry in &entries {
            converter.process(entry).unwrap();
        }
        assert_eq!(
            converter.stats(),
            ConvertStats {
                entries_processed: 2,
                entries_written: 1,
                records_written: 1,
            }
        );
        let (_, out) = converter.finish().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\u{feff}東京,500,500,1200,名詞,固有名詞,地名,東京,*,*,*,とうきょう,とうきょう\n"
        );
    }

    #[test]
    fn test_convert_stops_on_error() {
        let entries = vec![
            Ok(Entry::new(["山田"], ["やまだ"]).with_translation(Translation::new(["surname"]))),
            Ok(Entry::new(["無"], Vec::<String>::new())
                .with_translation(Translation::new(["surname"]))),
            Ok(Entry::new(["東京"], ["とうきょう"]).with_translation(Translation::new(["place"]))),
        ];
        assert!(convert(entries, vec![], None).is_err());
    }
}
