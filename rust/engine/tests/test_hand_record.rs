mod common;

use std::fs;
use std::path::PathBuf;

use common::{check_call_down, four_seat_table};
use lowball_engine::logger::{HandLogger, HandRecord};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

#[test]
fn settled_hand_record_writes_one_jsonl_line() {
    let mut table = four_seat_table(70);
    table.deal().unwrap();
    check_call_down(&mut table);
    let result = table.showdown().unwrap();

    let path = tmp_path("lowball_hands");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&result.record).expect("write");
    assert_eq!(logger.written(), 1);
    drop(logger);

    let text = fs::read_to_string(&path).expect("read file");
    assert!(text.ends_with('\n'));
    assert!(!text.contains('\r'));
    let parsed: HandRecord = serde_json::from_str(text.trim_end()).expect("parse");
    assert!(parsed.ts.is_some());
    assert_eq!(parsed.seed, Some(70));
    assert_eq!(parsed.table_id, table.id());
    assert_eq!(parsed.hands.len(), 4);
    assert_eq!(parsed.showdown.unwrap().pot, 8);
    let _ = fs::remove_file(&path);
}

#[test]
fn hand_ids_follow_the_table_hand_counter() {
    let mut table = four_seat_table(71);
    for n in 1..=2u32 {
        table.deal().unwrap();
        check_call_down(&mut table);
        let record = table.showdown().unwrap().record;
        assert!(record.hand_id.ends_with(&format!("-{:06}", n)));
    }
}
