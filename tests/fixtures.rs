//! Test harness for the parser against fixture files.
//!
//! Documents under tests/fixtures/ok/ must parse; each result is also
//! rendered to canonical comment-free JSON and parsed again, and the two
//! values must agree. Documents under tests/fixtures/bad/ must fail.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use jsonc::{parse, parse_latin1, parse_utf16, IndexMap, Value};

/// All .jsonc fixtures under a subdirectory of tests/fixtures/.
fn fixture_files(subdir: &str) -> Vec<PathBuf> {
    let pattern = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(subdir)
        .join("*.jsonc");
    let mut files: Vec<PathBuf> = glob(pattern.to_str().unwrap())
        .expect("fixture pattern is well formed")
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();
    files
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().to_string()
}

/// Render a value as strict JSON: no comments, ASCII only, everything
/// past ASCII written as \u escapes.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Integer(n) => out.push_str(&n.to_string()),
        // Debug for finite doubles keeps a fraction or exponent, both of
        // which scan back.
        Value::Float(f) => out.push_str(&format!("{:?}", f)),
        Value::String(s) => write_quoted(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_quoted(key, out);
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

fn write_quoted(text: &str, out: &mut String) {
    out.push('"');
    for unit in text.encode_utf16() {
        match unit {
            0x22 => out.push_str("\\\""),
            0x5C => out.push_str("\\\\"),
            0x20..=0x7E => out.push(unit as u8 as char),
            _ => out.push_str(&format!("\\u{:04x}", unit)),
        }
    }
    out.push('"');
}

/// Run a single ok fixture: it must parse, parse the same way twice, and
/// survive a canonical round-trip.
fn run_ok_test(path: &Path) -> Result<(), String> {
    let name = file_name(path);
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", name, e))?;

    let value = parse(&content).map_err(|e| format!("{}: Unexpected parse error: {}", name, e))?;

    let again = parse(&content).map_err(|e| format!("{}: Second parse failed: {}", name, e))?;
    if value != again {
        return Err(format!("{}: Two parses of the same input disagree", name));
    }

    let mut canonical = String::new();
    write_canonical(&value, &mut canonical);
    let reparsed = parse(&canonical).map_err(|e| {
        format!(
            "{}: Canonical form failed to parse: {}\n    canonical: {}",
            name, e, canonical
        )
    })?;
    if value != reparsed {
        return Err(format!(
            "{}: Round-trip mismatch\n    canonical: {}",
            name, canonical
        ));
    }

    println!("  {} => {}", name, canonical);
    Ok(())
}

/// Run a single bad fixture: it must fail to parse.
fn run_bad_test(path: &Path) -> Result<(), String> {
    let name = file_name(path);
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", name, e))?;

    match parse(&content) {
        Ok(value) => Err(format!(
            "{}: Expected parse error, but got success: {:?}",
            name, value
        )),
        Err(_) => {
            println!("  {} => error (as expected)", name);
            Ok(())
        }
    }
}

#[test_log::test]
fn test_ok_fixtures() {
    let files = fixture_files("ok");
    assert!(!files.is_empty(), "no ok fixtures found");

    println!("\nRunning {} ok fixtures:", files.len());

    let mut failed = 0;
    let mut errors: Vec<String> = Vec::new();

    for file in &files {
        if let Err(e) = run_ok_test(file) {
            failed += 1;
            errors.push(e);
        }
    }

    if !errors.is_empty() {
        println!("\nErrors:");
        for error in &errors {
            println!("  - {}", error);
        }
    }

    assert!(failed == 0, "{} ok fixtures failed", failed);
}

#[test_log::test]
fn test_bad_fixtures() {
    let files = fixture_files("bad");
    assert!(!files.is_empty(), "no bad fixtures found");

    println!("\nRunning {} bad fixtures:", files.len());

    let mut failed = 0;
    let mut errors: Vec<String> = Vec::new();

    for file in &files {
        if let Err(e) = run_bad_test(file) {
            failed += 1;
            errors.push(e);
        }
    }

    if !errors.is_empty() {
        println!("\nErrors:");
        for error in &errors {
            println!("  - {}", error);
        }
    }

    assert!(failed == 0, "{} bad fixtures failed", failed);
}

/// Exercise Value accessors and Debug formatting for coverage.
fn exercise_value_accessors(value: &Value) {
    let _ = value.is_null();
    let _ = value.as_bool();
    let _ = value.as_integer();
    let _ = value.as_float();
    let _ = value.as_str();
    let _ = value.as_array();
    let _ = value.as_object();
    let _ = format!("{:?}", value);

    if let Some(items) = value.as_array() {
        for item in items {
            exercise_value_accessors(item);
        }
    }
    if let Some(entries) = value.as_object() {
        for item in entries.values() {
            exercise_value_accessors(item);
        }
    }
}

#[test]
fn test_value_accessor_coverage() {
    for file in &fixture_files("ok") {
        let content = match fs::read_to_string(file) {
            Ok(c) => c,
            Err(_) => continue,
        };
        let value = match parse(&content) {
            Ok(v) => v,
            Err(_) => continue,
        };
        exercise_value_accessors(&value);
    }

    let _ = Value::from(true);
    let _ = Value::from(42i32);
    let _ = Value::from(1.5f64);
    let _ = Value::from("hello");
    let _ = Value::from(String::from("world"));
    let _ = Value::from(vec![Value::Null]);
    let _ = Value::from(IndexMap::from([("key".to_string(), Value::Null)]));
}

// Entry point coverage for the three input encodings.

#[test]
fn test_latin1_entry_point() {
    let value = parse_latin1(b"{\"caf\xE9\": [1, 2]} // menu").unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(
        object.get("café"),
        Some(&Value::Array(vec![Value::Integer(1), Value::Integer(2)]))
    );
}

#[test]
fn test_latin1_high_bytes_decode_as_latin1() {
    let value = parse_latin1(b"\"\xE9\xFF\"").unwrap();
    assert_eq!(value.as_str(), Some("éÿ"));
}

#[test]
fn test_utf16_entry_point() {
    let wide: Vec<u16> = "/* hi */ {\"list\": [null, true]}".encode_utf16().collect();
    let value = parse_utf16(&wide).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(
        object.get("list"),
        Some(&Value::Array(vec![Value::Null, Value::Bool(true)]))
    );
}

#[test]
fn test_str_entry_point_widens_non_ascii() {
    let value = parse("\"日本語\"").unwrap();
    assert_eq!(value.as_str(), Some("日本語"));
}

#[test]
fn test_supplementary_characters_survive() {
    // Astral characters travel as surrogate pairs on the wide path.
    let value = parse("[\"😀\", \"\\ud83d\\ude00\"]").unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items[0], Value::String("😀".into()));
    assert_eq!(items[0], items[1]);
}

#[test]
fn test_utf16_rejects_raw_lone_surrogate_in_string() {
    let mut wide: Vec<u16> = "\"x\"".encode_utf16().collect();
    wide.insert(1, 0xD800);
    assert!(parse_utf16(&wide).is_err());
}
