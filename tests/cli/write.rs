use anyhow::Result;
use pretty_assertions::assert_eq;
use transcan::core::content_hash;

use crate::{CliTest, stderr, stdout};

const SOURCE: &str = r#"<?php
$this->trans('Hello');
$this->trans('World');
$this->trans("it's here");
"#;

#[test]
fn test_write_keeps_existing_and_applies_overlay() -> Result<()> {
    let test = CliTest::with_file("src/a.php", SOURCE)?;
    test.write_file(
        "I18n/messages/fr_FR.php",
        "<?php\n\nreturn array(\n    'Hello' => 'Bonjour',\n);\n",
    )?;
    test.write_file(
        "overlay.json",
        &serde_json::json!({
            content_hash("World"): "Monde",
            content_hash("it's here"): "c'est ici",
        })
        .to_string(),
    )?;

    let output = test
        .write_command()
        .args(["src", "--locale", "fr_FR", "--overlay", "overlay.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Wrote 3 translations to"));

    assert_eq!(
        test.read_file("I18n/messages/fr_FR.php")?,
        "<?php\n\nreturn array(\n    'Hello' => 'Bonjour',\n    'World' => 'Monde',\n    \
         'it\\'s here' => 'c\\'est ici',\n);\n"
    );

    Ok(())
}

#[test]
fn test_write_overlay_can_clear_translation() -> Result<()> {
    let test = CliTest::with_file("src/a.php", SOURCE)?;
    test.write_file(
        "I18n/messages/fr_FR.php",
        "<?php\n\nreturn array(\n    'Hello' => 'Bonjour',\n    'World' => 'Monde',\n);\n",
    )?;
    test.write_file(
        "overlay.json",
        &serde_json::json!({ content_hash("Hello"): "" }).to_string(),
    )?;

    let output = test
        .write_command()
        .args(["src", "-l", "fr_FR", "--overlay", "overlay.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("I18n/messages/fr_FR.php")?,
        "<?php\n\nreturn array(\n    'World' => 'Monde',\n);\n"
    );

    Ok(())
}

#[test]
fn test_write_creates_catalog_directory() -> Result<()> {
    let test = CliTest::with_file("templates/index.tpl", "{intl l='Home'}")?;
    test.write_file(
        "overlay.json",
        &serde_json::json!({ content_hash("Home"): "Accueil" }).to_string(),
    )?;

    let output = test
        .write_command()
        .args([
            "templates",
            "--mode",
            "template",
            "--domain",
            "front",
            "--output",
            "out/i18n/fr_FR.php",
            "--overlay",
            "overlay.json",
        ])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("out/i18n/fr_FR.php")?,
        "<?php\n\nreturn array(\n    'Home' => 'Accueil',\n);\n"
    );

    Ok(())
}

#[test]
fn test_write_without_translations_writes_empty_catalog() -> Result<()> {
    let test = CliTest::with_file("src/a.php", SOURCE)?;

    let output = test.write_command().arg("src").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Wrote 0 translations to"));
    assert!(out.contains("note: 3 untranslated strings skipped"));
    assert_eq!(
        test.read_file("I18n/messages/en_US.php")?,
        "<?php\n\nreturn array(\n);\n"
    );

    Ok(())
}

#[test]
fn test_write_no_create_fails_on_missing_directory() -> Result<()> {
    let test = CliTest::with_file("src/a.php", SOURCE)?;

    let output = test
        .write_command()
        .args(["src", "--output", "missing/dir/fr_FR.php", "--no-create"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Failed to open translation file"));
    assert!(err.contains("fr_FR.php"));
    assert!(!test.root().join("missing").exists());

    Ok(())
}

#[test]
fn test_write_invalid_overlay_fails() -> Result<()> {
    let test = CliTest::with_file("src/a.php", SOURCE)?;
    test.write_file("overlay.json", "[1, 2, 3]")?;

    let output = test
        .write_command()
        .args(["src", "--overlay", "overlay.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse overlay file"));

    Ok(())
}

#[test]
fn test_written_catalog_with_backslashes_loads_on_next_run() -> Result<()> {
    let test = CliTest::with_file(
        "src/a.php",
        r#"<?php $this->trans("a\'b"); $this->trans('Dir');"#,
    )?;
    test.write_file(
        "overlay.json",
        &serde_json::json!({
            content_hash(r"a\'b"): "x",
            content_hash("Dir"): r"C:\",
        })
        .to_string(),
    )?;

    let output = test
        .write_command()
        .args(["src", "--overlay", "overlay.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("I18n/messages/en_US.php")?,
        "<?php\n\nreturn array(\n    'Dir' => 'C:\\\\',\n    'a\\\\\\'b' => 'x',\n);\n"
    );

    let output = test.scan_command().arg("src").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("  = translation: C:\\\n"));
    assert!(out.contains("(0 untranslated)"));

    Ok(())
}
