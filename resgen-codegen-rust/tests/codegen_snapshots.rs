//! Snapshot tests for Rust code generation.
//!
//! These tests verify that the generated Rust code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use resgen_codegen::pipeline::Pipeline;
use resgen_codegen_rust::{Generator, LanguageCodegen};
use resgen_manifest::Manifest;

const MIXED: &str = r#"
[generator]
shard_capacity = 2

[[resource]]
type = "drawable"
name = "icon_home"
variants = [{ path = "drawable/icon_home.xml" }]

[[resource]]
type = "drawable"
name = "banner"
variants = [
    { qualifiers = ["en", "xxhdpi"], path = "drawable-en-xxhdpi/banner.png" },
    { path = "drawable/banner.png" },
]

[[resource]]
type = "drawable"
name = "type"
variants = [{ path = "drawable/type.xml" }]

[[resource]]
type = "string"
name = "app_name"
variants = [{ path = "values/strings.xml" }]
"#;

/// Run the pipeline and return files sorted by path for deterministic snapshots.
fn generate_files(manifest_toml: &str) -> Vec<(String, String)> {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let mut ctx = Pipeline::new().run(manifest).expect("Pipeline failed");
    let emissions = ctx.take_emissions().unwrap();
    let generator = Generator::new(&emissions, &ctx.manifest.generator).unwrap();

    let mut result: Vec<(String, String)> = generator
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect();
    result.sort_by(|a, b| a.0.cmp(&b.0));
    result
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_generated_paths() {
    let files = generate_files(MIXED);
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        [
            "res/drawable0.rs",
            "res/drawable1.rs",
            "res/mod.rs",
            "res/string0.rs"
        ]
    );
}

#[test]
fn test_mod_rs() {
    let files = generate_files(MIXED);
    let mod_rs = get_file(&files, "res/mod.rs").expect("mod.rs not found");
    insta::assert_snapshot!("mod_rs", mod_rs);
}

#[test]
fn test_drawable_shard_with_variants() {
    let files = generate_files(MIXED);
    let shard = get_file(&files, "res/drawable0.rs").expect("drawable0.rs not found");
    insta::assert_snapshot!("drawable0_rs", shard);
}

#[test]
fn test_keyword_key_shard() {
    let files = generate_files(MIXED);
    let shard = get_file(&files, "res/drawable1.rs").expect("drawable1.rs not found");
    insta::assert_snapshot!("drawable1_rs", shard);
}

#[test]
fn test_keyed_string_shard() {
    let files = generate_files(MIXED);
    let shard = get_file(&files, "res/string0.rs").expect("string0.rs not found");
    insta::assert_snapshot!("string0_rs", shard);
}

#[test]
fn test_empty_manifest() {
    let files = generate_files("");
    assert_eq!(files.len(), 1);
    let mod_rs = get_file(&files, "res/mod.rs").expect("mod.rs not found");
    insta::assert_snapshot!("empty_mod_rs", mod_rs);
}

#[test]
fn test_custom_module_and_runtime() {
    let files = generate_files(
        r#"
        [generator]
        module = "assets"
        runtime = "crate::runtime"

        [[resource]]
        type = "font"
        name = "inter"
        variants = [{ path = "font/inter.ttf" }]
        "#,
    );

    let mod_rs = get_file(&files, "assets/mod.rs").expect("mod.rs not found");
    assert!(mod_rs.contains("use crate::runtime::FontResource;\n"));
    assert!(mod_rs.contains("mod font0;\n"));

    let shard = get_file(&files, "assets/font0.rs").expect("font0.rs not found");
    assert!(shard.contains("use crate::runtime::{FontResource, ResourceItem};\n"));
    assert!(shard.contains("use super::ResFont;\n"));
}
