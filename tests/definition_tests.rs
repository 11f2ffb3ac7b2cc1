//! Integration tests for loading TOML tree definitions from disk

use cmdtree::config::{ConfigError, TreeDefinition};
use cmdtree::driver::{RunOutcome, run};
use cmdtree::parser::Context;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to write a definition file into a temp dir
fn write_definition(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("cli.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_fixture() {
    let def = TreeDefinition::load(Path::new("tests/fixtures/git.toml")).unwrap();
    let tree = def.build().unwrap();

    assert_eq!(tree.node(tree.root()).name(), "git");
    assert_eq!(tree.command_count(), 5);
    let add = tree.node(tree.find(&["remote", "add"]).unwrap());
    assert!(add.has_option("mirror"));
    assert!(add.has_flag("f"));
}

#[test]
fn test_load_from_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(
        &dir,
        r#"
name = "deploy"

[commands.push]
options = { env = "Target environment" }
arguments = [{ name = "services", list = true }]
"#,
    );

    let tree = TreeDefinition::load(&path).unwrap().build().unwrap();
    let push = tree.find(&["push"]).unwrap();
    assert!(tree.node(push).arguments()[0].is_list());
    assert!(tree.node(push).arguments()[0].is_required());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = TreeDefinition::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_shape_names_command() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(
        &dir,
        r#"
name = "app"

[commands.copy]
arguments = [
    { name = "files", list = true },
    { name = "dest" },
]
"#,
    );

    let err = TreeDefinition::load(&path).unwrap().build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid command 'app.copy': cannot add argument '<dest>' to command 'copy' after list argument '<files>'"
    );
}

#[test]
fn test_loaded_tree_runs_bound_logic() {
    let def = TreeDefinition::load(Path::new("tests/fixtures/git.toml")).unwrap();
    let mut tree = def.build().unwrap();
    let remove = tree.find(&["remote", "remove"]).unwrap();
    tree.bind_logic(remove, |context: &Context| {
        context.argument("name").and_then(|v| v.as_single()) == Some("origin")
    });

    assert_eq!(
        run(&tree, &["git", "remote", "remove", "origin"]),
        Ok(RunOutcome::Completed { node: remove })
    );
    assert_eq!(
        run(&tree, &["git", "remote", "remove", "upstream"]),
        Ok(RunOutcome::Failed { node: remove })
    );
}
