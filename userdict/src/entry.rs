//! 辞書エントリのデータモデル
//!
//! XML文書を一度だけ読み、各エントリが自身の表記・読み・種別タグを
//! 直接所有するフラットなレコードとして保持します。

use crate::errors::{Result, UserDictError};

/// 訳語グループ (`<trans>`)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Translation {
    pub(crate) name_types: Vec<String>,
}

impl Translation {
    /// 種別タグの列から訳語グループを作成します。
    pub fn new<I, S>(name_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name_types: name_types.into_iter().map(Into::into).collect(),
        }
    }

    /// この訳語グループの種別タグ
    #[inline]
    pub fn name_types(&self) -> &[String] {
        &self.name_types
    }
}

/// 辞書エントリ (`<entry>`)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) seq: Option<u32>,
    pub(crate) spellings: Vec<String>,
    pub(crate) readings: Vec<String>,
    pub(crate) translations: Vec<Translation>,
}

impl Entry {
    /// 表記と読みからエントリを作成します。
    ///
    /// # 引数
    ///
    /// * `spellings` - 表記 (`<keb>`) の列
    /// * `readings` - 読み (`<reb>`) の列
    pub fn new<I, J, S, T>(spellings: I, readings: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            seq: None,
            spellings: spellings.into_iter().map(Into::into).collect(),
            readings: readings.into_iter().map(Into::into).collect(),
            translations: vec![],
        }
    }

    /// エントリ番号を設定します。
    pub fn with_seq(mut self, seq: u32) -> Self {
        self.seq = Some(seq);
        self
    }

    /// 訳語グループを追加します。
    pub fn with_translation(mut self, translation: Translation) -> Self {
        self.translations.push(translation);
        self
    }

    /// エントリ番号 (`<ent_seq>`)
    #[inline]
    pub fn seq(&self) -> Option<u32> {
        self.seq
    }

    /// 表記の一覧
    #[inline]
    pub fn spellings(&self) -> &[String] {
        &self.spellings
    }

    /// 読みの一覧
    #[inline]
    pub fn readings(&self) -> &[String] {
        &self.readings
    }

    /// 訳語グループの一覧
    #[inline]
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    /// すべての訳語グループの種別タグを、初出順に重複なく返します。
    pub fn name_types(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = vec![];
        for tag in self.translations.iter().flat_map(|t| t.name_types.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag.as_str());
            }
        }
        tags
    }

    /// 最初の読みを返します。
    ///
    /// 2番目以降の読みは使われません。
    ///
    /// # エラー
    ///
    /// 読みが一つも無い場合、[`UserDictError::MissingField`]を返します。
    pub fn first_reading(&self) -> Result<&str> {
        self.readings
            .first()
            .map(String::as_str)
            .ok_or_else(|| UserDictError::missing_field(self.label(), "reb"))
    }

    /// 診断メッセージ用の識別子
    pub(crate) fn label(&self) -> String {
        match (self.seq, self.spellings.first()) {
            (Some(seq), _) => seq.to_string(),
            (None, Some(spelling)) => spelling.clone(),
            (None, None) => "<unknown>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_types_dedup() {
        let entry = Entry::new(["東"], ["あずま"])
            .with_translation(Translation::new(["surname", "place"]))
            .with_translation(Translation::new(["surname", "given"]));
        assert_eq!(entry.name_types(), vec!["surname", "place", "given"]);
    }

    #[test]
    fn test_name_types_empty() {
        let entry = Entry::new(["東"], ["あずま"]).with_translation(Translation::default());
        assert!(entry.name_types().is_empty());
    }

    #[test]
    fn test_first_reading() {
        let entry = Entry::new(["角"], ["かど", "すみ"]);
        assert_eq!(entry.first_reading().unwrap(), "かど");
    }

    #[test]
    fn test_first_reading_missing() {
        let entry = Entry::new(["角"], Vec::<String>::new()).with_seq(5000001);
        match entry.first_reading() {
            Err(UserDictError::MissingField(e)) => {
                assert_eq!(e.field(), "reb");
                assert_eq!(e.entry, "5000001");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(Entry::new(["角"], ["かど"]).label(), "角");
        assert_eq!(Entry::new(["角"], ["かど"]).with_seq(7).label(), "7");
        assert_eq!(Entry::default().label(), "<unknown>");
    }
}
