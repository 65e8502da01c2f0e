mod common;

use std::io::Write;

use auth::JwtError;
use common::payload;
use common::TestCli;
use common::IAT;
use common::SECRET;
use supabase_jwt::CliError;
use tempfile::NamedTempFile;

#[test]
fn test_config_file_overrides_claims() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "[token]\nissuer = \"supabase-demo\"\nttl_seconds = 86400")
        .expect("Failed to write config");
    let path = file.path().to_str().expect("Temp path is not UTF-8");

    let output = TestCli::new().run(&["--secret", SECRET, "--type", "anon", "--config", path]);
    output.result.expect("Token generation failed");

    let claims = payload(output.stdout.trim_end());
    assert_eq!(claims.iss, "supabase-demo");
    assert_eq!(claims.iat, IAT);
    assert_eq!(claims.exp, IAT + 86_400);
}

#[test]
fn test_overflowing_ttl_writes_nothing() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "[token]\nttl_seconds = 9223372036854775807").expect("Failed to write config");
    let path = file.path().to_str().expect("Temp path is not UTF-8");

    let output = TestCli::new().run(&["--secret", SECRET, "--type", "anon", "--config", path]);

    assert!(matches!(
        output.result,
        Err(CliError::Token(JwtError::ExpiryOverflow { .. }))
    ));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_config_file_writes_nothing() {
    let output = TestCli::new().run(&[
        "--secret",
        SECRET,
        "--type",
        "anon",
        "--config",
        "/nonexistent/supabase-jwt.toml",
    ]);

    assert!(matches!(output.result, Err(CliError::Config(_))));
    assert!(output.stdout.is_empty());
}
