//! Loading documents from disk, including the missing-file policy.

use anyhow::{Result, ensure};
use serde_json::json;

use super::{Workspace, to_anyhow};
use crate::EnvLayersError;
use crate::file::{load_document, load_documents};

#[test]
fn loads_json_document() -> Result<()> {
    let ws = Workspace::new()?;
    let path = ws.write("base.json", r#"{"name": "application", "ports": [80, 443]}"#)?;
    let doc = to_anyhow(load_document(&path))?;
    ensure!(
        doc.into_value() == json!({"name": "application", "ports": [80, 443]}),
        "unexpected document"
    );
    Ok(())
}

#[test]
fn empty_file_is_an_empty_document() -> Result<()> {
    let ws = Workspace::new()?;
    let path = ws.write("empty.toml", "")?;
    let doc = to_anyhow(load_document(&path))?;
    ensure!(doc.is_empty(), "expected empty document");
    Ok(())
}

#[test]
fn missing_file_is_an_error() -> Result<()> {
    let ws = Workspace::new()?;
    let path = ws.path("absent.json");
    let err = load_document(&path).expect_err("missing file must fail");
    match err.as_ref() {
        EnvLayersError::File { path: reported, source } => {
            ensure!(reported == &path, "unexpected path {reported}");
            ensure!(
                source.to_string().contains("does not exist"),
                "unexpected source {source}"
            );
        }
        other => anyhow::bail!("expected File error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn missing_parent_directory_is_an_error() -> Result<()> {
    let ws = Workspace::new()?;
    let path = ws.root().join("nested/absent.json");
    let err = load_document(&path).expect_err("missing directory must fail");
    ensure!(
        matches!(err.as_ref(), EnvLayersError::File { .. }),
        "expected File error, got {err:?}"
    );
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<()> {
    let ws = Workspace::new()?;
    let path = ws.write("notes.txt", "name: app")?;
    let err = load_document(&path).expect_err("unsupported format must fail");
    ensure!(
        matches!(err.as_ref(), EnvLayersError::UnsupportedFormat { .. }),
        "expected UnsupportedFormat, got {err:?}"
    );
    Ok(())
}

#[test]
fn top_level_sequence_is_rejected() -> Result<()> {
    let ws = Workspace::new()?;
    let path = ws.write("list.json", "[1, 2, 3]")?;
    let err = load_document(&path).expect_err("sequence must be rejected");
    match err.as_ref() {
        EnvLayersError::InvalidDocument { origin, found } => {
            ensure!(origin.ends_with("list.json"), "unexpected origin {origin}");
            ensure!(*found == "a sequence", "unexpected kind {found}");
        }
        other => anyhow::bail!("expected InvalidDocument, got {other:?}"),
    }
    Ok(())
}

#[test]
fn documents_load_in_order() -> Result<()> {
    let ws = Workspace::new()?;
    let first = ws.write("a.json", r#"{"order": 1}"#)?;
    let second = ws.write("b.toml", "order = 2")?;
    let docs = to_anyhow(load_documents(&[first, second]))?;
    let orders: Vec<_> = docs
        .into_iter()
        .map(|doc| doc.into_value()["order"].clone())
        .collect();
    ensure!(orders == vec![json!(1), json!(2)], "unexpected order {orders:?}");
    Ok(())
}

#[test]
fn every_failure_is_reported() -> Result<()> {
    let ws = Workspace::new()?;
    let good = ws.write("good.json", "{}")?;
    let paths = vec![ws.path("one.json"), good, ws.path("two.json")];
    let err = load_documents(&paths).expect_err("two files are missing");
    match err.as_ref() {
        EnvLayersError::Aggregate(errors) => {
            ensure!(errors.len() == 2, "expected two errors, got {}", errors.len());
        }
        other => anyhow::bail!("expected Aggregate, got {other:?}"),
    }
    Ok(())
}

#[test]
fn single_failure_is_not_wrapped() -> Result<()> {
    let ws = Workspace::new()?;
    let err = load_documents(&[ws.path("only.json")]).expect_err("file is missing");
    ensure!(
        matches!(err.as_ref(), EnvLayersError::File { .. }),
        "expected File error, got {err:?}"
    );
    Ok(())
}
