#![allow(clippy::unwrap_used)]

use rstest::rstest;
use sdef2swift::parser::parse;
use sdef2swift::semantic::{Heuristics, TypeCatalog, TypeRewriteTable, normalize_inheritance};
use sdef2swift::{ConvertError, ErrorCode};

const MUSIC_H: &str = include_str!("fixtures/Music.h");

#[rstest]
#[case::collection("NSArray<MusicTrack *> *", "[MusicTrack]")]
#[case::element_array("SBElementArray<MusicWindow *> *", "[MusicWindow]")]
#[case::padded(" NSArray<NSURL *> * ", "[NSURL]")]
#[case::pointer("NSString *", "NSString")]
#[case::value("NSInteger", "NSInteger")]
#[case::no_pointer_after_generic("NSArray<NSURL *>", "NSArray<NSURL >")]
#[case::no_container("<NSURL *> *", "<NSURL >")]
#[case::multiword("long long", "long long")]
fn test_infer(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(TypeRewriteTable::infer(raw), expected);
}

#[rstest]
#[case("long long", "Int64")]
#[case("long", "Int")]
#[case("id", "Any")]
#[case("BOOL", "Bool")]
#[case("double", "Double")]
fn test_aliases_override_inference(#[case] key: &str, #[case] expected: &str) {
    let header = parse(MUSIC_H).unwrap();
    let table = TypeCatalog::collect(&header.interfaces).build(&Heuristics::default());
    assert_eq!(table.get(key), Some(expected));
}

#[test]
fn test_fixture_catalog_is_first_seen() {
    let header = parse(MUSIC_H).unwrap();
    let catalog = TypeCatalog::collect(&header.interfaces);
    let keys: Vec<_> = catalog.iter().take(6).collect();
    assert_eq!(
        keys,
        vec!["void", "BOOL", "NSDictionary *", "MusicEKnd", "NSString *", "SBObject *"]
    );
}

#[test]
fn test_collection_rewritten_at_every_site() {
    let mut header = parse(
        "@interface MusicPlaylist : MusicItem\n\
         @property (copy, readonly) NSArray<MusicTrack *> *selection;\n\
         - (void) merge:(NSArray<MusicTrack *> *)x with:(NSArray<MusicTrack *> *)with;\n\
         @end\n",
    )
    .unwrap();
    let table = TypeCatalog::collect(&header.interfaces).build(&Heuristics::default());
    table.apply(&mut header.interfaces).unwrap();

    let playlist = &header.interfaces[0];
    let function = &playlist.functions[0];
    let sites = [
        &playlist.properties[0].ty,
        &function.arguments[0].param.as_ref().unwrap().ty,
        &function.arguments[1].param.as_ref().unwrap().ty,
    ];
    for ty in sites {
        assert_eq!(ty.target(), Some("[MusicTrack]"));
        assert_eq!(ty.rendered(), "[MusicTrack]");
    }
}

#[test]
fn test_every_fixture_type_is_rewritten() {
    let mut header = parse(MUSIC_H).unwrap();
    let table = TypeCatalog::collect(&header.interfaces).build(&Heuristics::default());
    table.apply(&mut header.interfaces).unwrap();

    for interface in &header.interfaces {
        for property in &interface.properties {
            assert!(property.ty.is_rewritten(), "{}.{}", interface.name, property.name);
            assert!(!property.ty.rendered().contains('*'));
        }
        for function in &interface.functions {
            assert!(function.return_type.is_rewritten());
        }
    }
}

#[test]
fn test_lookup_fault_names_type_and_site() {
    let mut header = parse(
        "@interface MusicTrack : MusicItem\n@property (copy) NSString *album;\n@end\n",
    )
    .unwrap();
    let table = TypeRewriteTable::default();
    let err = table.apply(&mut header.interfaces).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0301);
    assert!(matches!(err, ConvertError::TypeLookup { .. }));
    assert_eq!(
        err.to_string(),
        "E0301: no rewrite entry for type `NSString *` referenced by property `album` of `MusicTrack`"
    );
}

#[test]
fn test_fixture_inheritance() {
    let mut header = parse(MUSIC_H).unwrap();
    normalize_inheritance(&mut header.interfaces, &Heuristics::default());

    let parent = |name: &str| {
        header
            .interface(name)
            .and_then(|i| i.inherits.as_deref())
            .map(str::to_string)
    };
    assert_eq!(parent("MusicApplication"), None);
    assert_eq!(parent("MusicItem").as_deref(), Some("MusicGenericMethods"));
    assert_eq!(parent("MusicTrack").as_deref(), Some("MusicItem"));
    assert_eq!(parent("MusicGenericMethods"), None);
}

#[test]
fn test_custom_heuristics() {
    let mut heuristics = Heuristics::none();
    heuristics
        .primitive_aliases
        .insert("NSInteger".to_string(), "Int".to_string());
    heuristics
        .inheritance_collapse
        .insert("SBObject <MusicGenericMethods>".to_string(), "Generic".to_string());

    let mut header = parse(MUSIC_H).unwrap();
    let table = TypeCatalog::collect(&header.interfaces).build(&heuristics);
    assert_eq!(table.get("NSInteger"), Some("Int"));
    assert_eq!(table.get("BOOL"), Some("BOOL"));

    normalize_inheritance(&mut header.interfaces, &heuristics);
    let application = header.interface("MusicApplication").unwrap();
    assert_eq!(application.inherits.as_deref(), Some("SBApplication"));
    let item = header.interface("MusicItem").unwrap();
    assert_eq!(item.inherits.as_deref(), Some("Generic"));
}
