//! Grid documents through the encoder and decoder

use webbs::ansi::{decode_grid, encode, encode_to_string};
use webbs::grid::{BoxStyle, Cell, GridDocument, Pen};
use webbs::{sauce, Color};

use super::helpers::load_fixture;

fn main_menu() -> GridDocument {
    let mut doc = GridDocument::new(80, 25).unwrap();
    doc.fill(Cell::new(' ', Color::White, Color::Blue));
    doc.draw_box(0, 0, 79, 24, BoxStyle::Double, Pen::new(Color::BrightCyan, Color::Blue));
    doc.draw_box(30, 2, 49, 4, BoxStyle::Single, Pen::new(Color::Yellow, Color::Blue));
    doc.place_text(33, 3, "WEBBS  MAIN", Pen::new(Color::BrightWhite, Color::Blue));
    doc.place_text(4, 8, "[M] Message boards", Pen::new(Color::BrightGreen, Color::Blue));
    doc.place_text(4, 9, "[F] File areas", Pen::new(Color::BrightGreen, Color::Blue));
    doc.place_text(4, 10, "[G] Goodbye", Pen::new(Color::BrightRed, Color::Blue));
    doc.flood_fill(60, 15, Cell::new('░', Color::BrightBlack, Color::Blue));
    doc
}

#[test]
fn full_screen_round_trip() {
    let doc = main_menu();
    let bytes = encode(&doc);
    assert_eq!(decode_grid(&bytes, 80, 25).unwrap(), doc);
}

#[test]
fn utf8_and_cp437_encodings_agree() {
    let doc = main_menu();
    let text = encode_to_string(&doc);
    let bytes = encode(&doc);
    let via_codepage: String = bytes
        .iter()
        .map(|&b| {
            if b.is_ascii() {
                b as char
            } else {
                webbs::codepage::to_char(b)
            }
        })
        .collect();
    assert_eq!(via_codepage, text);
}

#[test]
fn encoder_emits_minimal_color_changes() {
    let doc = main_menu();
    let text = encode_to_string(&doc);
    // One SGR per color change, not per cell.
    assert!(text.matches("\x1b[").count() < 80 * 25 / 4);
}

#[test]
fn decode_fixture_onto_sauce_sized_grid() {
    let bytes = load_fixture("menu.ans");
    let record = sauce::read(&bytes).unwrap();
    let (width, height) = (
        usize::from(record.width.unwrap()),
        usize::from(record.height.unwrap()),
    );
    let doc = decode_grid(sauce::content(&bytes), width, height).unwrap();

    assert_eq!(doc.row_text(0).unwrap().trim_end(), "╔════╗");
    assert_eq!(doc.row_text(1).unwrap().trim_end(), "║MAIN║");
    assert_eq!(doc.row_text(2).unwrap().trim_end(), "╚════╝");
    assert_eq!(doc.cell(0, 0).unwrap().fg, Color::BrightYellow);
    assert_eq!(doc.cell(1, 1).unwrap().fg, Color::Cyan);
    assert_eq!(doc.cell(19, 3), Some(&Cell::default()));
}
