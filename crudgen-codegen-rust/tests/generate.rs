//! On-disk generation tests.

use std::fs;

use crudgen_codegen::{Error, LanguageCodegen};
use crudgen_codegen_rust::{Generator, generate};
use crudgen_core::{GENERATED_HEADER, RouterLayout};
use crudgen_ir::{Field, FieldType, Schema};
use tempfile::TempDir;

fn schemas() -> Vec<Schema> {
    vec![
        Schema::new("User")
            .with_table("users")
            .with_field(Field::new("ID", FieldType::UInt).with_tag("id"))
            .with_field(Field::new("Name", FieldType::String).with_tag("name"))
            .with_field(Field::new("Email", FieldType::String).with_tag("email"))
            .with_field(Field::new("CreatedAt", FieldType::Timestamp).with_tag("created_at"))
            .with_field(Field::new("UpdatedAt", FieldType::Timestamp).with_tag("updated_at")),
        Schema::new("Post")
            .with_table("posts")
            .with_field(Field::new("ID", FieldType::UInt).with_tag("id"))
            .with_field(Field::new("Content", FieldType::String).with_tag("content"))
            .with_field(Field::new("AuthorId", FieldType::UInt).with_tag("author_id"))
            .with_field(Field::new("TimeStamp", FieldType::Timestamp).with_tag("timestamp")),
    ]
}

#[test]
fn test_per_model_layout_keeps_only_last_router() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("api/rest");

    let report = Generator::new(&schemas())
        .with_layout(RouterLayout::PerModel)
        .generate(&out)
        .unwrap();

    assert!(out.join("handlers/user.rs").is_file());
    assert!(out.join("handlers/post.rs").is_file());

    let main = fs::read_to_string(out.join("main.rs")).unwrap();
    assert!(main.contains(".nest(\"/posts\", post_routes())"));
    assert!(!main.contains("user_routes"));

    // main.rs was written twice but is reported once.
    let mains = report
        .written
        .iter()
        .filter(|p| p.ends_with("main.rs"))
        .count();
    assert_eq!(mains, 1);
    assert_eq!(report.written.len(), 5);
}

#[test]
fn test_combined_layout_registers_every_model() {
    let temp = TempDir::new().unwrap();

    let report = generate(&schemas(), temp.path()).unwrap();

    let main = fs::read_to_string(temp.path().join("main.rs")).unwrap();
    assert!(main.contains(".nest(\"/users\", user_routes())"));
    assert!(main.contains(".nest(\"/posts\", post_routes())"));
    assert_eq!(
        report.written,
        [
            temp.path().join("models.rs"),
            temp.path().join("handlers/mod.rs"),
            temp.path().join("handlers/user.rs"),
            temp.path().join("handlers/post.rs"),
            temp.path().join("main.rs"),
        ]
    );
}

#[test]
fn test_regenerating_into_same_directory_is_byte_identical() {
    let temp = TempDir::new().unwrap();

    let first = generate(&schemas(), temp.path()).unwrap();
    let before: Vec<Vec<u8>> = first
        .written
        .iter()
        .map(|path| fs::read(path).unwrap())
        .collect();

    let second = generate(&schemas(), temp.path()).unwrap();
    assert_eq!(second.written, first.written);

    for (path, bytes) in first.written.iter().zip(&before) {
        assert_eq!(&fs::read(path).unwrap(), bytes, "{} changed", path.display());
    }
}

#[test]
fn test_generation_matches_across_directories() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let a = generate(&schemas(), first.path()).unwrap();
    generate(&schemas(), second.path()).unwrap();

    for path in &a.written {
        let relative = path.strip_prefix(first.path()).unwrap();
        assert_eq!(
            fs::read(path).unwrap(),
            fs::read(second.path().join(relative)).unwrap(),
            "{} differs",
            relative.display()
        );
    }
}

#[test]
fn test_generated_files_carry_header() {
    let temp = TempDir::new().unwrap();
    let report = generate(&schemas(), temp.path()).unwrap();

    for path in &report.written {
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with(GENERATED_HEADER), "{}", path.display());
    }
}

#[test]
fn test_update_overrides_identifier_before_binding() {
    let temp = TempDir::new().unwrap();
    generate(&schemas(), temp.path()).unwrap();

    let handler = fs::read_to_string(temp.path().join("handlers/user.rs")).unwrap();
    let assign = handler.find("    user.id = id;\n").unwrap();
    let update = handler.find("sqlx::query(\"UPDATE users SET").unwrap();
    assert!(assign < update);
    assert!(handler.contains(
        "UPDATE users SET id = $1, name = $2, email = $3, created_at = $4, updated_at = $5 WHERE id = $6"
    ));
}

#[test]
fn test_render_failure_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let mut schemas = schemas();
    schemas.push(Schema::new("Audit").with_field(Field::new("Message", FieldType::String)));

    let err = generate(&schemas, temp.path()).unwrap_err();

    assert!(err.written.is_empty());
    assert!(matches!(err.source, Error::Template { ref model, .. } if model == "Audit"));
    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn test_write_failure_reports_written_files() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("handlers/post.rs")).unwrap();

    let err = generate(&schemas(), temp.path()).unwrap_err();

    assert!(matches!(err.source, Error::Io { ref path, .. } if path.ends_with("handlers/post.rs")));
    assert_eq!(
        err.written,
        [
            temp.path().join("models.rs"),
            temp.path().join("handlers/mod.rs"),
            temp.path().join("handlers/user.rs"),
        ]
    );
    assert!(!temp.path().join("main.rs").exists());
}
