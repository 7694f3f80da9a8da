#![allow(clippy::unwrap_used)]

use rstest::rstest;
use sdef2swift::emit::{EmitOptions, Emitter};
use sdef2swift::parser::{parse_function, parse_property};
use sdef2swift::syntax::{Argument, FunctionDeclaration, TypeRef};

fn emitter_line(function: &FunctionDeclaration) -> String {
    Emitter::new(&EmitOptions::default()).emit_function(function)
}

#[rstest]
#[case::zero_argument("- (void) run;", "    @objc optional func run();")]
#[case::returns("- (BOOL) exists;", "    @objc optional func exists() -> BOOL;")]
#[case::first_parameter("- (void) playOnce:(BOOL)once;", "    @objc optional func playOnce(once: BOOL);")]
#[case::label_equals_name(
    "- (void) add:(NSURL *)x to:(SBObject *)to;",
    "    @objc optional func add(x: NSURL *, to: SBObject *);"
)]
#[case::label_differs(
    "- (id) make:(NSString *)new_ withProperties:(NSDictionary *)props;",
    "    @objc optional func make(new_: NSString *, withProperties props: NSDictionary *) -> id;"
)]
fn test_function_lines(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(emitter_line(&parse_function(line).unwrap()), expected);
}

#[test]
fn test_rewritten_types_are_printed() {
    let mut function = parse_function("- (id) subscribe:(NSString *)x;").unwrap();
    function.return_type.set_target("Any");
    if let Some(param) = function.arguments[0].param.as_mut() {
        param.ty.set_target("String");
    }
    assert_eq!(
        emitter_line(&function),
        "    @objc optional func subscribe(x: String) -> Any;"
    );
}

#[test]
fn test_void_check_uses_rewritten_type() {
    let mut function = parse_function("- (SBObject *) reveal;").unwrap();
    function.return_type.set_target("void");
    assert_eq!(emitter_line(&function), "    @objc optional func reveal();");
}

#[test]
fn test_label_only_arguments_after_first_are_skipped() {
    let function = FunctionDeclaration {
        return_type: TypeRef::new("void"),
        arguments: vec![
            Argument::with_param("open", TypeRef::new("NSURL"), "file"),
            Argument::label_only("quietly"),
        ],
    };
    assert_eq!(emitter_line(&function), "    @objc optional func open(file: NSURL);");
}

#[rstest]
#[case::readonly(
    "@property (copy, readonly) NSString *version;",
    "    @objc optional var version: NSString * { get }"
)]
#[case::writable(
    "@property (copy) NSString *name;",
    "    @objc optional var name: NSString * { get }\n    @objc optional func setName(_ name: NSString *)"
)]
#[case::bool_flag(
    "@property BOOL selected;",
    "    @objc optional var selected: BOOL { get }\n    @objc optional func setSelected(_ selected: BOOL)"
)]
fn test_property_lines(#[case] line: &str, #[case] expected: &str) {
    let property = parse_property(line).unwrap();
    assert_eq!(
        Emitter::new(&EmitOptions::default()).emit_property(&property),
        expected
    );
}

#[test]
fn test_custom_void_and_raw_type() {
    let options = EmitOptions {
        tab_size: 2,
        enum_raw_type: "OSType".to_string(),
        void_type: "Void".to_string(),
        ..EmitOptions::default()
    };
    let emitter = Emitter::new(&options);

    let mut function = parse_function("- (void) run;").unwrap();
    function.return_type.set_target("Void");
    assert_eq!(emitter.emit_function(&function), "  @objc optional func run();");

    let declaration = sdef2swift::parser::parse_enum("enum A {\n\tAB = 'ab'\n};").unwrap();
    assert_eq!(
        emitter.emit_enum(&declaration),
        "@objc public enum A : OSType {\n  case b = 0x6162\n};\n"
    );
}
