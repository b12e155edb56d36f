//! 名前種別タグとカテゴリラベルの対応表
//!
//! JMnedictの`<name_type>`に現れる種別タグ(DTDエンティティ名)を、
//! ユーザー辞書の品詞細分類3に書き込むラベルへ変換します。
//! 対応表はプロセス全体で一度だけ構築され、以後変更されません。

use std::sync::OnceLock;

use hashbrown::HashMap;

/// 対応表に存在しないタグに割り当てられるラベル
pub const GENERAL_LABEL: &str = "一般";

/// 既知の種別タグとラベルの組
///
/// `unclass`や`ok`などここに無いタグはすべて[`GENERAL_LABEL`]になります。
pub const NAME_TYPE_LABELS: [(&str, &str); 11] = [
    ("surname", "名字"),
    ("place", "地名"),
    ("company", "商号"),
    ("product", "ブランド"),
    ("work", "著作物"),
    ("masc", "男性名"),
    ("fem", "女性名"),
    ("person", "氏名"),
    ("given", "下の名前"),
    ("station", "駅名"),
    ("organization", "組織の名称・呼称"),
];

fn label_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| NAME_TYPE_LABELS.iter().copied().collect())
}

/// 種別タグに対応するカテゴリラベルを返します。
///
/// # 引数
///
/// * `tag` - 種別タグ (例: `"surname"`)
///
/// # 戻り値
///
/// 既知のタグであればそのラベル、それ以外は[`GENERAL_LABEL`]
///
/// # 例
///
/// ```
/// use jmnedict_userdict::name_type::category_label;
///
/// assert_eq!(category_label("surname"), "名字");
/// assert_eq!(category_label("unclass"), "一般");
/// ```
pub fn category_label(tag: &str) -> &'static str {
    label_table().get(tag).copied().unwrap_or(GENERAL_LABEL)
}

/// `<name_type>`の生テキストから種別タグを取り出します。
///
/// JMnedictではタグは未解決のエンティティ参照 (`&surname;`) として現れるため、
/// 前後の`&`と`;`を取り除きます。それ以外の形はそのまま返します。
pub(crate) fn tag_from_raw(raw: &str) -> &str {
    raw.strip_prefix('&')
        .and_then(|s| s.strip_suffix(';'))
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(category_label("surname"), "名字");
        assert_eq!(category_label("place"), "地名");
        assert_eq!(category_label("company"), "商号");
        assert_eq!(category_label("product"), "ブランド");
        assert_eq!(category_label("work"), "著作物");
        assert_eq!(category_label("masc"), "男性名");
        assert_eq!(category_label("fem"), "女性名");
        assert_eq!(category_label("person"), "氏名");
        assert_eq!(category_label("given"), "下の名前");
        assert_eq!(category_label("station"), "駅名");
        assert_eq!(category_label("organization"), "組織の名称・呼称");
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(category_label("unclass"), GENERAL_LABEL);
        assert_eq!(category_label("ok"), GENERAL_LABEL);
        assert_eq!(category_label(""), GENERAL_LABEL);
        assert_eq!(category_label("Surname"), GENERAL_LABEL);
        assert_eq!(category_label("&surname;"), GENERAL_LABEL);
    }

    #[test]
    fn test_table_has_no_duplicates() {
        assert_eq!(label_table().len(), NAME_TYPE_LABELS.len());
    }

    #[test]
    fn test_tag_from_raw() {
        assert_eq!(tag_from_raw("&surname;"), "surname");
        assert_eq!(tag_from_raw("surname"), "surname");
        assert_eq!(tag_from_raw("&surname"), "&surname");
        assert_eq!(tag_from_raw("&;"), "");
    }
}
