use super::*;
use crate::parser::{parse_enum, parse_function, parse_interface, parse_property};

fn rewritten(mut ty: crate::syntax::TypeRef, target: &str) -> crate::syntax::TypeRef {
    ty.set_target(target);
    ty
}

#[test]
fn test_enum() {
    let declaration = parse_enum(
        "enum MusicEPlS {\n\tMusicEPlSStopped = 'kPSS',\n\tMusicEPlSPlaying = 'kPSP'\n};",
    )
    .unwrap();
    assert_eq!(
        Emitter::new(&EmitOptions::default()).emit_enum(&declaration),
        "@objc public enum MusicEPlS : AEKeyword {\n    case stopped = 0x6b505353\n    case playing = 0x6b505350\n};\n"
    );
}

#[test]
fn test_enum_unknown_member_has_empty_code() {
    let declaration = parse_enum("enum E {\n\tEA = 1\n};").unwrap();
    assert_eq!(
        Emitter::new(&EmitOptions::default()).emit_enum(&declaration),
        "@objc public enum E : AEKeyword {\n    case a = \n};\n"
    );
}

#[test]
fn test_readonly_property_has_getter_only() {
    let mut property = parse_property("@property (copy, readonly) NSString *name;").unwrap();
    property.ty = rewritten(property.ty, "NSString");
    assert_eq!(
        Emitter::new(&EmitOptions::default()).emit_property(&property),
        "    @objc optional var name: NSString { get }"
    );
}

#[test]
fn test_writable_property_has_setter() {
    let mut property = parse_property("@property NSInteger data;").unwrap();
    property.ty = rewritten(property.ty, "NSInteger");
    assert_eq!(
        Emitter::new(&EmitOptions::default()).emit_property(&property),
        "    @objc optional var data: NSInteger { get }\n    @objc optional func setData(_ data: NSInteger)"
    );
}

#[test]
fn test_zero_argument_function() {
    let function = parse_function("- (void) run;").unwrap();
    assert_eq!(
        Emitter::new(&EmitOptions::default()).emit_function(&function),
        "    @objc optional func run();"
    );
}

#[test]
fn test_function_labels() {
    let function = parse_function(
        "- (MusicTrack *) add:(NSArray<NSURL *> *)x to:(SBObject *)to withName:(NSString *)name;",
    )
    .unwrap();
    assert_eq!(
        Emitter::new(&EmitOptions::default()).emit_function(&function),
        "    @objc optional func add(x: NSArray<NSURL *> *, to: SBObject *, withName name: NSString *) -> MusicTrack *;"
    );
}

#[test]
fn test_interface_with_and_without_parent() {
    let mut child = parse_interface(
        "@interface MusicTrack : MusicItem\n- (void) reveal;\n@end",
    )
    .unwrap();
    let options = EmitOptions::default();
    let emitter = Emitter::new(&options);
    assert_eq!(
        emitter.emit_interface(&child),
        "@objc public protocol MusicTrack : MusicItem {\n    @objc optional func reveal();\n}\nextension SBObject: MusicTrack {}\n"
    );

    child.inherits = None;
    assert_eq!(
        emitter.emit_interface(&child),
        "@objc public protocol MusicTrack {\n    @objc optional func reveal();\n}\nextension SBObject: MusicTrack {}\n"
    );
}

#[test]
fn test_header_orders_enums_first() {
    let header = crate::parser::parse(
        "@protocol P\n- (void) close;\n@end\nenum E {\n\tEOne = 'one '\n};\n",
    )
    .unwrap();
    let out = emit(&header);
    assert!(out.starts_with("@objc public enum E : AEKeyword {\n    case one = 0x6f6e6520\n};\n"));
    assert!(out.ends_with("extension SBObject: P {}\n"));
}

#[test]
fn test_tab_indentation_and_names() {
    let options = EmitOptions {
        insert_spaces: false,
        object_type: "SBElementArray".to_string(),
        ..EmitOptions::default()
    };
    let declaration = parse_interface("@protocol P\n- (void) close;\n@end").unwrap();
    assert_eq!(
        Emitter::new(&options).emit_interface(&declaration),
        "@objc public protocol P {\n\t@objc optional func close();\n}\nextension SBElementArray: P {}\n"
    );
}

#[test]
fn test_indent() {
    let options = EmitOptions::default();
    assert_eq!(options.indent(0), "");
    assert_eq!(options.indent(2), "        ");
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("data"), "Data");
    assert_eq!(capitalize(""), "");
}
