//! SAUCE reading against a real art file

use chrono::NaiveDate;
use webbs::sauce::{self, AspectRatio, CharacterFormat, LetterSpacing, SauceDataType};

use super::helpers::load_fixture;

#[test]
fn fixture_record_fields() {
    let bytes = load_fixture("menu.ans");
    let record = sauce::read(&bytes).expect("fixture carries a record");

    assert_eq!(record.title, "Main Menu");
    assert_eq!(record.author, "sysop");
    assert_eq!(record.group, "WEBBS");
    assert_eq!(record.date, NaiveDate::from_ymd_opt(1996, 3, 14));
    assert_eq!(record.year(), Some(1996));
    assert_eq!(record.data_type, SauceDataType::Character);
    assert_eq!(record.character_format(), Some(CharacterFormat::Ansi));
    assert_eq!((record.width, record.height), (Some(20), Some(4)));
    assert_eq!(record.font.as_deref(), Some("IBM VGA"));
    assert_eq!(record.comment_count, 1);

    let flags = record.ansi_flags().expect("ANSI files carry flags");
    assert!(flags.non_blink);
    assert_eq!(flags.letter_spacing, LetterSpacing::Legacy);
    assert_eq!(flags.aspect_ratio, AspectRatio::Legacy);
}

#[test]
fn tail_alone_parses_identically() {
    let bytes = load_fixture("menu.ans");
    let tail = &bytes[bytes.len() - sauce::RECORD_LEN..];
    assert_eq!(sauce::read(tail), sauce::read(&bytes));
}

#[test]
fn comments_come_from_comnt_block() {
    let bytes = load_fixture("menu.ans");
    let record = sauce::read(&bytes).unwrap();
    assert_eq!(
        sauce::comments(&bytes, &record),
        vec!["Drawn for the integration tests".to_string()]
    );
}

#[test]
fn content_excludes_metadata() {
    let bytes = load_fixture("menu.ans");
    let art = sauce::content(&bytes);
    let record = sauce::read(&bytes).unwrap();
    assert_eq!(art.len() as u32, record.file_size);
    assert!(art.ends_with(b"\x1b[0m\r\n"));
}

#[test]
fn plain_text_has_no_record() {
    let bytes = load_fixture("plain.txt");
    assert_eq!(sauce::read(&bytes), None);
    assert_eq!(sauce::content(&bytes), bytes.as_slice());
}
