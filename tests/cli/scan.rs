use anyhow::Result;
use serde_json::Value;
use transcan::core::content_hash;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_scan_php_strings() -> Result<()> {
    let test = CliTest::with_file(
        "src/Controller/Cart.php",
        r#"<?php
class Cart {
    public function add() {
        return $this->trans('Add to cart');
    }
    public function remove() {
        return $this->trans("Remove item");
    }
}
"#,
    )?;
    test.write_file(
        "src/Controller/Order.php",
        "<?php $this->trans('Add to cart');",
    )?;

    let output = test.scan_command().arg("src").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains(
        "\"Add to cart\"\n  = translation: (untranslated)\n  \
         = files: src/Controller/Cart.php, src/Controller/Order.php\n"
    ));
    assert!(out.contains("\"Remove item\""));
    insta::assert_snapshot!(
        out.lines().last().unwrap_or_default(),
        @"✓ Found 2 strings in 2 files (2 untranslated)"
    );

    Ok(())
}

#[test]
fn test_scan_uses_existing_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "src/a.php",
        "<?php $this->trans('Hello'); $this->trans('Bye');",
    )?;
    test.write_file(
        "I18n/messages/en_US.php",
        "<?php\n\nreturn array(\n    'Hello' => 'Hi there',\n);\n",
    )?;

    let output = test.scan_command().arg("src").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("\"Hello\"\n  = translation: Hi there\n"));
    assert!(out.contains("(1 untranslated)"));

    Ok(())
}

#[test]
fn test_scan_template_mode() -> Result<()> {
    let test = CliTest::with_file(
        "templates/front/index.html",
        r#"<h1>{intl l="Welcome" d="front"}</h1><p>{intl l='Total: $total'}</p>"#,
    )?;
    test.write_file("templates/front/style.css", "{intl l='Never'}")?;

    let output = test
        .scan_command()
        .args(["templates", "--mode", "template"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("\"Welcome\""));
    assert!(out.contains("\"Total: $total\" ($)"));
    assert!(!out.contains("Never"));
    assert!(out.contains("Found 2 strings in 1 file "));

    Ok(())
}

#[test]
fn test_scan_invalid_mode() -> Result<()> {
    let test = CliTest::with_file("src/a.php", "<?php $this->trans('Hello');")?;

    let output = test.scan_command().args(["src", "--mode", "css"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid value for walk mode: css"));
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_scan_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("does/not/exist").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    insta::assert_snapshot!(
        stdout(&output).trim(),
        @"✓ Found 0 strings in 0 files (0 untranslated)"
    );

    Ok(())
}

#[test]
fn test_scan_json_format() -> Result<()> {
    let test = CliTest::with_file("src/a.php", "<?php $this->trans('it\\'s here');")?;

    let output = test
        .scan_command()
        .args(["src", "--format", "json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(value["mode"], "php");
    assert_eq!(value["count"], 1);
    let entry = &value["strings"][content_hash("it's here")];
    assert_eq!(entry["text"], "it's here");
    assert_eq!(entry["translation"], "");
    assert_eq!(entry["dollar"], false);
    assert_eq!(entry["files"][0], "src/a.php");

    Ok(())
}

#[test]
fn test_scan_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transcanrc.json",
        r#"{
         "locale": "fr_FR",
         "domain": "core",
         "catalogsRoot": "translations",
         "ignores": ["**/vendor/**"]
     }"#,
    )?;
    test.write_file("src/a.php", "<?php $this->trans('Hello');")?;
    test.write_file("src/vendor/lib.php", "<?php $this->trans('Vendored');")?;
    test.write_file(
        "translations/core/fr_FR.php",
        "<?php\n\nreturn array(\n    'Hello' => 'Bonjour',\n);\n",
    )?;

    let output = test.scan_command().arg("src").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("translation: Bonjour"));
    assert!(!out.contains("Vendored"));

    Ok(())
}

#[test]
fn test_scan_cli_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transcanrc.json", r#"{ "locale": "fr_FR" }"#)?;
    test.write_file("src/a.php", "<?php $this->trans('Hello');")?;
    test.write_file(
        "I18n/messages/de_DE.php",
        "<?php\n\nreturn array(\n    'Hello' => 'Hallo',\n);\n",
    )?;

    let output = test
        .scan_command()
        .args(["src", "--locale", "de_DE"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("translation: Hallo"));

    Ok(())
}

#[test]
fn test_scan_malformed_catalog_fails() -> Result<()> {
    let test = CliTest::with_file("src/a.php", "<?php $this->trans('Hello');")?;
    test.write_file("I18n/messages/en_US.php", "<?php echo 'not a catalog';")?;

    let output = test.scan_command().arg("src").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load existing translations"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());

    let out = stdout(&output);
    for command in ["scan", "write", "init"] {
        assert!(out.contains(command), "help should list '{}'", command);
    }

    Ok(())
}
