#![allow(clippy::unwrap_used)]

use rstest::rstest;
use sdef2swift::{ErrorCode, TextSize};
use sdef2swift::parser::{enum_blocks, interface_blocks, segment};

const MUSIC_H: &str = include_str!("fixtures/Music.h");

#[test]
fn test_fixture_block_counts() {
    let segments = segment(MUSIC_H).unwrap();
    assert_eq!(segments.enums.len(), 3);
    assert_eq!(segments.interfaces.len(), 7);
}

#[test]
fn test_blocks_are_in_document_order() {
    let segments = segment(MUSIC_H).unwrap();
    let starts: Vec<_> = segments.interfaces.iter().map(|b| b.offset).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    assert!(segments.interfaces[0].text.starts_with("@protocol MusicGenericMethods"));
    assert!(segments.interfaces[6].text.starts_with("@interface MusicWindow"));
}

#[test]
fn test_block_text_matches_offset() {
    for block in segment(MUSIC_H).unwrap().enums {
        assert_eq!(&MUSIC_H[block.range()], block.text);
        assert!(block.text.starts_with("enum "));
        assert!(block.text.ends_with("};"));
    }
}

#[rstest]
#[case::indented("  enum A {\n\tAB = 'ab'\n};\n")]
#[case::typedef("typedef enum A A;\n")]
#[case::mid_line("x enum A {\n\tAB = 'ab'\n};\n")]
fn test_enum_must_start_a_line(#[case] source: &str) {
    assert!(enum_blocks(source).unwrap().is_empty());
}

#[rstest]
#[case::class_forward("@class A, B;\n")]
#[case::indented("  @interface A\n@end\n")]
#[case::in_comment("// @interface A\n")]
fn test_interface_must_start_a_line(#[case] source: &str) {
    assert!(interface_blocks(source).unwrap().is_empty());
}

#[test]
fn test_enum_ends_at_first_terminator() {
    let source = "enum A {\n\tAB = 'ab'\n};\n};\n";
    let blocks = enum_blocks(source).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text, "enum A {\n\tAB = 'ab'\n};");
}

#[test]
fn test_interface_ends_at_first_end() {
    let source = "@interface A\n- (void) a;\n@end\n- (void) b;\n@end\n";
    let blocks = interface_blocks(source).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text, "@interface A\n- (void) a;\n@end");
}

#[rstest]
#[case::enum_without_close("enum A {\n\tAB = 'ab'\n", ErrorCode::E0101)]
#[case::enum_without_open("enum A\n\tAB = 'ab'\n", ErrorCode::E0101)]
#[case::interface_without_end("@interface A : SBObject\n- (void) a;\n", ErrorCode::E0102)]
#[case::protocol_without_body("@protocol A", ErrorCode::E0102)]
fn test_unterminated_blocks(#[case] source: &str, #[case] code: ErrorCode) {
    let err = segment(source).unwrap_err();
    assert_eq!(err.code, code);
    assert!(err.has_hint());
    assert_eq!(err.range.start(), TextSize::new(0));
}
