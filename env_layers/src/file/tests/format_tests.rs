//! Extension detection and per-format parsing.

use anyhow::{Result, ensure};
use camino::Utf8Path;
use rstest::rstest;
use serde::Deserialize;
use serde::de::value::{Error as ValueError, I128Deserializer, U128Deserializer};
use serde_json::{Value, json};

use super::to_anyhow;
use crate::file::value::ParsedValue;
use crate::file::{ConfigFormat, has_supported_extension};
use crate::{Document, build_environment};

#[rstest]
#[case("base.yml", Some(ConfigFormat::Yaml))]
#[case("base.yaml", Some(ConfigFormat::Yaml))]
#[case("BASE.YAML", Some(ConfigFormat::Yaml))]
#[case("dir/base.Yml", Some(ConfigFormat::Yaml))]
#[case("settings.json", Some(ConfigFormat::Json))]
#[case("settings.toml", Some(ConfigFormat::Toml))]
#[case("settings.ini", None)]
#[case("yml", None)]
#[case("archive.yml.bak", None)]
fn detects_format_from_extension(#[case] path: &str, #[case] expected: Option<ConfigFormat>) {
    let path = Utf8Path::new(path);
    assert_eq!(ConfigFormat::from_path(path), expected);
    assert_eq!(has_supported_extension(path), expected.is_some());
}

#[rstest]
#[case(ConfigFormat::Json, r#"{"name": "app", "web": {"dns": "d1"}}"#)]
#[case(ConfigFormat::Toml, "name = \"app\"\n[web]\ndns = \"d1\"\n")]
fn parses_nested_mappings(#[case] format: ConfigFormat, #[case] data: &str) -> Result<()> {
    let value = to_anyhow(format.parse(Utf8Path::new("config"), data))?;
    ensure!(
        value == json!({"name": "app", "web": {"dns": "d1"}}),
        "unexpected value: {value}"
    );
    Ok(())
}

#[rstest]
#[case(ConfigFormat::Json)]
#[case(ConfigFormat::Toml)]
#[case(ConfigFormat::Yaml)]
fn blank_input_parses_to_null(#[case] format: ConfigFormat) -> Result<()> {
    let value = to_anyhow(format.parse(Utf8Path::new("blank"), "  \n"))?;
    ensure!(value == Value::Null, "expected null, got {value}");
    Ok(())
}

#[rstest]
#[case(ConfigFormat::Json, "{\"name\": ")]
#[case(ConfigFormat::Toml, "name = ")]
fn malformed_input_names_the_path(#[case] format: ConfigFormat, #[case] data: &str) {
    let err = format
        .parse(Utf8Path::new("broken.conf"), data)
        .expect_err("malformed input must fail");
    let message = err.to_string();
    assert!(message.contains("broken.conf"), "got: {message}");
}

#[rstest]
#[case::toml(
    ConfigFormat::Toml,
    "[release]\nshipped = 1979-05-27T07:32:00Z\nday = 1979-05-27\nratio = 0.5\nbuild = 42\nstable = true\nupper = inf\nunknown = nan\n",
    &[
        ("RELEASE_SHIPPED", "1979-05-27T07:32:00Z"),
        ("RELEASE_DAY", "1979-05-27"),
        ("RELEASE_RATIO", "0.5"),
        ("RELEASE_BUILD", "42"),
        ("RELEASE_STABLE", "true"),
        ("RELEASE_UPPER", "inf"),
        ("RELEASE_UNKNOWN", "NaN"),
    ]
)]
#[case::json(
    ConfigFormat::Json,
    r#"{"release": {"ratio": 0.5, "build": 18446744073709551615, "stable": false, "notes": null}}"#,
    &[
        ("RELEASE_RATIO", "0.5"),
        ("RELEASE_BUILD", "18446744073709551615"),
        ("RELEASE_STABLE", "false"),
        ("RELEASE_NOTES", ""),
    ]
)]
fn non_string_scalars_stay_single_leaves(
    #[case] format: ConfigFormat,
    #[case] data: &str,
    #[case] expected: &[(&str, &str)],
) -> Result<()> {
    let value = to_anyhow(format.parse(Utf8Path::new("release"), data))?;
    let document = Document::try_from(value)?;
    let pairs = build_environment([document]).to_string_pairs();
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    ensure!(pairs == expected, "unexpected variables: {pairs:?}");
    Ok(())
}

#[test]
fn wide_integers_outside_u64_become_strings() -> Result<()> {
    let wide = u128::from(u64::MAX) + 1;
    let ParsedValue(unsigned) =
        ParsedValue::deserialize(U128Deserializer::<ValueError>::new(wide))?;
    ensure!(unsigned == json!("18446744073709551616"), "got {unsigned}");

    let negative: i128 = i128::from(i64::MIN) - 1;
    let ParsedValue(signed) = ParsedValue::deserialize(I128Deserializer::<ValueError>::new(negative))?;
    ensure!(signed == json!("-9223372036854775809"), "got {signed}");

    let fits = u128::from(u64::MAX);
    let ParsedValue(narrow) = ParsedValue::deserialize(U128Deserializer::<ValueError>::new(fits))?;
    ensure!(narrow == json!(u64::MAX), "got {narrow}");
    Ok(())
}
