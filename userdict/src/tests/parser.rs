use crate::entry::{Entry, Translation};
use crate::parser::*;

const JMNEDICT_XML: &str = include_str!("./resources/jmnedict_sample.xml");

/// DTD宣言を含む文書からエントリを読み込むテスト
#[test]
fn test_parse_sample() {
    let entries = parse_entries(JMNEDICT_XML.as_bytes()).unwrap();
    assert_eq!(entries.len(), 6);
    assert_eq!(
        entries[2],
        Entry::new(["清水"], ["しみず", "きよみず"])
            .with_seq(5000003)
            .with_translation(Translation::new(["place", "surname"]))
            .with_translation(Translation::new(["station"]))
    );
    assert_eq!(entries[3].seq(), Some(5000004));
    assert!(entries[3].spellings().is_empty());
    assert!(entries[4].name_types().is_empty());
    assert_eq!(entries[5].name_types(), vec!["company", "unclass"]);
}

/// イテレータとして逐次読み込むテスト
#[test]
fn test_entry_reader_iterates_in_order() {
    let seqs: Vec<_> = EntryReader::new(JMNEDICT_XML.as_bytes())
        .map(|entry| entry.unwrap().seq().unwrap())
        .collect();
    assert_eq!(
        seqs,
        vec![5000001, 5000002, 5000003, 5000004, 5000005, 5000006]
    );
}

/// 終端に達した後は何も返さないことのテスト
#[test]
fn test_entry_reader_exhausted() {
    let mut reader = EntryReader::new(JMNEDICT_XML.as_bytes());
    while reader.read_entry().unwrap().is_some() {}
    assert!(reader.read_entry().unwrap().is_none());
    assert!(reader.next().is_none());
}
