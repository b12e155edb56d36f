//! 出力するエントリと種別タグの選択
//!
//! 種別タグによる包含フィルタを適用し、エントリごとに
//! 出力に使う種別タグの一覧を決定します。

use hashbrown::HashSet;

use crate::entry::Entry;
use crate::errors::{Result, UserDictError};

/// 種別タグによる包含フィルタ
///
/// タグは正規化されず、文字列の完全一致で照合されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionFilter {
    tags: HashSet<String>,
}

impl InclusionFilter {
    /// タグの一覧からフィルタを作成します。
    ///
    /// # 引数
    ///
    /// * `tags` - 出力対象とする種別タグ (例: `"surname"`)
    ///
    /// # エラー
    ///
    /// タグが一つも無い場合、[`UserDictError::InvalidArgument`]を返します。
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: HashSet<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            return Err(UserDictError::invalid_argument(
                "tags",
                "an inclusion filter must contain at least one name type",
            ));
        }
        Ok(Self { tags })
    }

    /// タグがフィルタに含まれるかどうかを返します。
    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// フィルタに含まれるタグの数
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// 常に`false`を返します。空のフィルタは作成できません。
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// 出力対象として選ばれたエントリ
#[derive(Debug, PartialEq, Eq)]
pub struct Selection<'a> {
    /// 選ばれたエントリ
    pub entry: &'a Entry,

    /// 出力に使う種別タグ
    ///
    /// フィルタが無い場合はエントリのすべてのタグ、
    /// ある場合はフィルタとの共通部分です。
    pub name_types: Vec<&'a str>,
}

/// エントリを出力するかどうかを判定します。
///
/// # 引数
///
/// * `entry` - 判定するエントリ
/// * `filter` - 包含フィルタ。`None`の場合はすべてのエントリを選択します
///
/// # 戻り値
///
/// 出力する場合は選択結果、しない場合は`None`。
/// 訳語グループを持たないエントリは常に`None`です。
pub fn select<'a>(entry: &'a Entry, filter: Option<&InclusionFilter>) -> Option<Selection<'a>> {
    if entry.translations().is_empty() {
        return None;
    }
    let mut name_types = entry.name_types();
    if let Some(filter) = filter {
        name_types.retain(|tag| filter.contains(tag));
        if name_types.is_empty() {
            return None;
        }
    }
    Some(Selection { entry, name_types })
}
