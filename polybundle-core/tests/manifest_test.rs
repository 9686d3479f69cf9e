use polybundle_core::manifest::{BrowserField, EntryField, FieldTypeError, Manifest};

#[test]
fn test_parse_manifest() {
    let json = r#"{
  "name": "@emotion/css",
  "version": "10.0.0",
  "main": "dist/css.cjs.js",
  "module": "dist/css.esm.js",
  "umd:main": "dist/css.umd.min.js",
  "browser": { "./dist/css.cjs.js": "./dist/css.browser.cjs.js" },
  "dependencies": { "@emotion/serialize": "^0.11.0" }
}"#;

    let manifest = Manifest::from_json(json).unwrap();
    assert_eq!(manifest.name(), Ok(Some("@emotion/css")));
    assert_eq!(manifest.entry(EntryField::Main), Ok(Some("dist/css.cjs.js")));
    assert_eq!(manifest.entry(EntryField::Module), Ok(Some("dist/css.esm.js")));
    assert_eq!(
        manifest.entry(EntryField::UmdMain),
        Ok(Some("dist/css.umd.min.js"))
    );
    assert_eq!(manifest.has_browser(), Ok(true));
    assert_eq!(manifest.extra.len(), 2);
    assert!(manifest.extra.contains_key("version"));
    assert!(manifest.extra.contains_key("dependencies"));
}

#[test]
fn test_parse_manifest_defaults() {
    let manifest = Manifest::from_json("{}").unwrap();
    assert_eq!(manifest, Manifest::default());
    assert_eq!(manifest.name(), Ok(None));
    assert_eq!(manifest.entry(EntryField::Main), Ok(None));
    assert_eq!(manifest.has_browser(), Ok(false));
}

#[test]
fn test_null_fields_are_absent() {
    let manifest = Manifest::from_json(r#"{"main": null, "browser": null}"#).unwrap();
    assert_eq!(manifest.entry(EntryField::Main), Ok(None));
    assert_eq!(manifest.has_browser(), Ok(false));
}

#[test]
fn test_falsy_entries_are_absent() {
    for json in [r#"{"main": ""}"#, r#"{"main": false}"#, r#"{"main": 0}"#] {
        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.entry(EntryField::Main), Ok(None), "{}", json);
    }
}

#[test]
fn test_wrong_field_type_is_reported_on_access() {
    let manifest = Manifest::from_json(r#"{"name": 123, "main": ["a.js"]}"#).unwrap();
    assert_eq!(
        manifest.entry(EntryField::Main),
        Err(FieldTypeError {
            field: "main",
            expected: "string"
        })
    );
    assert_eq!(
        manifest.name(),
        Err(FieldTypeError {
            field: "name",
            expected: "string"
        })
    );
    // Fields that were not read stay usable.
    assert_eq!(manifest.entry(EntryField::Module), Ok(None));

    for json in [r#"{"browser": 1}"#, r#"{"browser": ["a.js"]}"#] {
        let manifest = Manifest::from_json(json).unwrap();
        let err = manifest.has_browser().unwrap_err();
        assert_eq!(err.field, "browser", "{}", json);
    }
}

#[test]
fn test_empty_name_is_declared() {
    let manifest = Manifest::from_json(r#"{"name": ""}"#).unwrap();
    assert_eq!(manifest.name(), Ok(Some("")));
}

#[test]
fn test_non_object_document_is_rejected() {
    assert!(Manifest::from_json("[]").is_err());
    assert!(Manifest::from_json(r#""name""#).is_err());
}

#[test]
fn test_browser_shapes() {
    let cases = [
        (r#"{"browser": true}"#, true),
        (r#"{"browser": false}"#, false),
        (r#"{"browser": ""}"#, false),
        (r#"{"browser": 0}"#, false),
        (r#"{"browser": "dist/browser.js"}"#, true),
        (r#"{"browser": {}}"#, true),
    ];

    for (json, expected) in cases {
        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.has_browser(), Ok(expected), "{}", json);
    }
}

#[test]
fn test_browser_replacements() {
    let manifest = Manifest::from_json(
        r#"{
  "main": "dist/a.cjs.js",
  "module": "dist/a.esm.js",
  "browser": { "./dist/a.cjs.js": "./dist/a.browser.cjs.js", "./dist/a.esm.js": false }
}"#,
    )
    .unwrap();

    assert_eq!(
        manifest.entry_for_target(EntryField::Main, true),
        Ok(Some("./dist/a.browser.cjs.js"))
    );
    assert_eq!(
        manifest.entry_for_target(EntryField::Main, false),
        Ok(Some("dist/a.cjs.js"))
    );
    assert_eq!(
        manifest.entry_for_target(EntryField::Module, true),
        Ok(Some("dist/a.esm.js"))
    );

    let browser = manifest.browser().unwrap().unwrap();
    assert!(matches!(browser, BrowserField::Overrides(_)));
    assert_eq!(browser.replacement_for("dist/missing.js"), None);
}

#[test]
fn test_round_trip_keeps_unknown_keys() {
    let json = r#"{"name":"a","umd:main":"dist/a.umd.js","sideEffects":false}"#;
    let manifest = Manifest::from_json(json).unwrap();

    let value = serde_json::to_value(&manifest).unwrap();
    assert_eq!(value["umd:main"], "dist/a.umd.js");
    assert_eq!(value["sideEffects"], false);
    assert!(value.get("main").is_none());
}
