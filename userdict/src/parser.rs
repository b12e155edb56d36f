//! JMnedict形式のXMLを読み込むモジュール
//!
//! `quick-xml`のイベントを順に読み、`<entry>`ごとに[`Entry`]を組み立てます。
//! 文書全体のDOMは構築せず、各エントリが自身の表記・読み・種別タグを
//! 直接所有する形に一度だけ変換します。
//!
//! 名前種別はDTDエンティティ参照 (`<name_type>&surname;</name_type>`) のまま
//! 書かれているため、エンティティを展開せず生のテキストからタグ名を取り出します。

use std::io::BufRead;

use quick_xml::events::{BytesText, Event};
use quick_xml::Reader;

use crate::entry::{Entry, Translation};
use crate::errors::{Result, UserDictError};
use crate::name_type;

/// テキストを保持する葉要素
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Leaf {
    EntSeq,
    Keb,
    Reb,
    NameType,
}

/// 1エントリ分のイベントから[`Entry`]を組み立てる
#[derive(Default)]
struct EntryBuilder {
    entry: Entry,
    leaf: Option<Leaf>,
    text: String,
    kanji_mark: usize,
    reading_mark: usize,
}

impl EntryBuilder {
    fn open(&mut self, name: &[u8]) {
        match name {
            b"ent_seq" => self.open_leaf(Leaf::EntSeq),
            b"keb" => self.open_leaf(Leaf::Keb),
            b"reb" => self.open_leaf(Leaf::Reb),
            b"name_type" => self.open_leaf(Leaf::NameType),
            b"k_ele" => self.kanji_mark = self.entry.spellings.len(),
            b"r_ele" => self.reading_mark = self.entry.readings.len(),
            b"trans" => self.entry.translations.push(Translation::default()),
            _ => (),
        }
    }

    fn open_leaf(&mut self, leaf: Leaf) {
        self.leaf = Some(leaf);
        self.text.clear();
    }

    fn text(&mut self, text: &BytesText) -> Result<()> {
        match self.leaf {
            Some(Leaf::NameType) => {
                let raw: &[u8] = text;
                let raw = std::str::from_utf8(raw)?;
                self.text.push_str(name_type::tag_from_raw(raw));
            }
            Some(_) => self.text.push_str(&text.unescape()?),
            None => (),
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> Result<()> {
        match name {
            b"ent_seq" | b"keb" | b"reb" | b"name_type" => self.commit_leaf(),
            b"k_ele" if self.entry.spellings.len() == self.kanji_mark => {
                Err(UserDictError::missing_field(self.entry.label(), "keb"))
            }
            b"r_ele" if self.entry.readings.len() == self.reading_mark => {
                Err(UserDictError::missing_field(self.entry.label(), "reb"))
            }
            _ => Ok(()),
        }
    }

    fn commit_leaf(&mut self) -> Result<()> {
        let text = std::mem::take(&mut self.text);
        match self.leaf.take() {
            Some(Leaf::EntSeq) => {
                self.entry.seq = Some(text.trim().parse()?);
            }
            Some(Leaf::Keb) => {
                if !text.is_empty() {
                    self.entry.spellings.push(text);
                }
            }
            Some(Leaf::Reb) => {
                if !text.is_empty() {
                    self.entry.readings.push(text);
                }
            }
            Some(Leaf::NameType) => {
                let Some(translation) = self.entry.translations.last_mut() else {
                    return Err(UserDictError::invalid_format(
                        "jmnedict",
                        format!(
                            "<name_type> must be inside <trans>, entry {}",
                            self.entry.label()
                        ),
                    ));
                };
                if text.is_empty() {
                    log::debug!("Skipped an empty <name_type> in entry {}", self.entry.label());
                } else {
                    translation.name_types.push(text);
                }
            }
            None => (),
        }
        Ok(())
    }
}

/// JMnedict XMLから[`Entry`]を順に読み出すリーダー
///
/// [`Iterator`]として使うと、各要素は`Result<Entry>`になります。
/// 最初のエラーで変換を中断することを想定しています。
///
/// # 例
///
/// ```
/// use jmnedict_userdict::parser::EntryReader;
///
/// let xml = "<JMnedict><entry><ent_seq>1</ent_seq>\
///            <k_ele><keb>山田</keb></k_ele>\
///            <r_ele><reb>やまだ</reb></r_ele>\
///            <trans><name_type>&surname;</name_type></trans>\
///            </entry></JMnedict>";
/// let entries: Vec<_> = EntryReader::new(xml.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].spellings(), ["山田"]);
/// assert_eq!(entries[0].name_types(), vec!["surname"]);
/// ```
pub struct EntryReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R> EntryReader<R>
where
    R: BufRead,
{
    /// 新しいリーダーを作成します。
    ///
    /// # 引数
    ///
    /// * `rdr` - JMnedict XMLのリーダー
    pub fn new(rdr: R) -> Self {
        let mut reader = Reader::from_reader(rdr);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: vec![],
        }
    }

    /// 次のエントリを読み込みます。
    ///
    /// # 戻り値
    ///
    /// 次のエントリ。文書の終端に達した場合は`None`
    ///
    /// # エラー
    ///
    /// XMLが不正な場合や、`<k_ele>`/`<r_ele>`に`<keb>`/`<reb>`が無い場合にエラーを返します。
    pub fn read_entry(&mut self) -> Result<Option<Entry>> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) if e.name().as_ref() == b"entry" => break,
                Event::Eof => return Ok(None),
                _ => (),
            }
        }

        let mut builder = EntryBuilder::default();
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => builder.open(e.name().as_ref()),
                Event::Empty(e) => {
                    builder.open(e.name().as_ref());
                    builder.close(e.name().as_ref())?;
                }
                Event::Text(t) => builder.text(&t)?,
                Event::End(e) => {
                    if e.name().as_ref() == b"entry" {
                        return Ok(Some(builder.entry));
                    }
                    builder.close(e.name().as_ref())?;
                }
                Event::Eof => {
                    return Err(UserDictError::invalid_format(
                        "jmnedict",
                        "unexpected end of document inside <entry>",
                    ));
                }
                _ => (),
            }
        }
    }
}

impl<R> Iterator for EntryReader<R>
where
    R: BufRead,
{
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_entry().transpose()
    }
}

/// JMnedict XML全体を読み込み、エントリの一覧を返します。
///
/// # エラー
///
/// 最初に見つかったエラーを返します。
pub fn parse_entries<R>(rdr: R) -> Result<Vec<Entry>>
where
    R: BufRead,
{
    EntryReader::new(rdr).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_entry() {
        let xml = "<JMnedict><entry>\
                   <ent_seq>5000123</ent_seq>\
                   <k_ele><keb>中野</keb></k_ele>\
                   <k_ele><keb>仲野</keb></k_ele>\
                   <r_ele><reb>なかの</reb></r_ele>\
                   <trans><name_type>&surname;</name_type><trans_det>Nakano</trans_det></trans>\
                   </entry></JMnedict>";
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(
            entries,
            vec![Entry::new(["中野", "仲野"], ["なかの"])
                .with_seq(5000123)
                .with_translation(Translation::new(["surname"]))]
        );
    }

    #[test]
    fn test_parse_without_kanji() {
        let xml = "<JMnedict><entry>\
                   <r_ele><reb>ゆい</reb></r_ele>\
                   <trans><name_type>&fem;</name_type></trans>\
                   </entry></JMnedict>";
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].spellings().is_empty());
        assert_eq!(entries[0].readings(), ["ゆい"]);
    }

    #[test]
    fn test_parse_empty_trans() {
        let xml = "<JMnedict><entry>\
                   <k_ele><keb>某</keb></k_ele>\
                   <r_ele><reb>なにがし</reb></r_ele>\
                   <trans/>\
                   </entry></JMnedict>";
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(entries[0].translations().len(), 1);
        assert!(entries[0].name_types().is_empty());
    }

    #[test]
    fn test_parse_plain_name_type() {
        let xml = "<JMnedict><entry>\
                   <k_ele><keb>東京</keb></k_ele>\
                   <r_ele><reb>とうきょう</reb></r_ele>\
                   <trans><name_type>place</name_type></trans>\
                   </entry></JMnedict>";
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(entries[0].name_types(), vec!["place"]);
    }

    #[test]
    fn test_parse_unescapes_text() {
        let xml = "<JMnedict><entry>\
                   <k_ele><keb>A&amp;B</keb></k_ele>\
                   <r_ele><reb>エーアンドビー</reb></r_ele>\
                   <trans><name_type>&company;</name_type></trans>\
                   </entry></JMnedict>";
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(entries[0].spellings(), ["A&B"]);
    }

    #[test]
    fn test_parse_missing_keb() {
        let xml = "<JMnedict><entry>\
                   <ent_seq>42</ent_seq>\
                   <k_ele></k_ele>\
                   <r_ele><reb>なし</reb></r_ele>\
                   </entry></JMnedict>";
        match parse_entries(xml.as_bytes()) {
            Err(UserDictError::MissingField(e)) => assert_eq!(e.field(), "keb"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_reb() {
        let xml = "<JMnedict><entry>\
                   <k_ele><keb>無</keb></k_ele>\
                   <r_ele><re_pri>news1</re_pri></r_ele>\
                   </entry></JMnedict>";
        match parse_entries(xml.as_bytes()) {
            Err(UserDictError::MissingField(e)) => assert_eq!(e.field(), "reb"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_name_type_outside_trans() {
        let xml = "<JMnedict><entry>\
                   <k_ele><keb>外</keb></k_ele>\
                   <r_ele><reb>そと</reb></r_ele>\
                   <name_type>&place;</name_type>\
                   </entry></JMnedict>";
        assert!(matches!(
            parse_entries(xml.as_bytes()),
            Err(UserDictError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_invalid_seq() {
        let xml = "<JMnedict><entry><ent_seq>abc</ent_seq></entry></JMnedict>";
        assert!(matches!(
            parse_entries(xml.as_bytes()),
            Err(UserDictError::ParseInt(_))
        ));
    }

    #[test]
    fn test_parse_truncated() {
        let xml = "<JMnedict><entry><k_ele><keb>途中</keb></k_ele>";
        assert!(parse_entries(xml.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_no_entries() {
        let xml = "<?xml version=\"1.0\"?><JMnedict></JMnedict>";
        assert!(parse_entries(xml.as_bytes()).unwrap().is_empty());
    }
}
