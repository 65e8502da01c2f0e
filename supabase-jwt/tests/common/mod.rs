#![allow(dead_code)]

use std::process::Command;
use std::process::Output;

use auth::Claims;
use auth::FixedClock;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use supabase_jwt::CliError;

pub const SECRET: &str = "testsecret";
pub const IAT: i64 = 1_700_000_000;

/// Drives `supabase_jwt::run` in-process with a frozen clock.
pub struct TestCli {
    pub clock: FixedClock,
}

/// Result of one in-process invocation.
pub struct CliOutput {
    pub result: Result<(), CliError>,
    pub stdout: String,
}

impl TestCli {
    pub fn new() -> Self {
        Self {
            clock: FixedClock(IAT),
        }
    }

    pub fn run(&self, args: &[&str]) -> CliOutput {
        let mut stdout = Vec::new();
        let argv = std::iter::once("supabase-jwt").chain(args.iter().copied());
        let result = supabase_jwt::run(argv, self.clock, &mut stdout);

        CliOutput {
            result,
            stdout: String::from_utf8(stdout).expect("Output is not UTF-8"),
        }
    }

    /// Run with `--secret SECRET --type <role_type>` and return the token.
    pub fn issue(&self, role_type: &str) -> String {
        let output = self.run(&["--secret", SECRET, "--type", role_type]);
        output.result.expect("Token generation failed");
        output.stdout.trim_end_matches('\n').to_string()
    }
}

/// Spawn the compiled binary.
pub fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_supabase-jwt"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to spawn supabase-jwt")
}

pub fn segments(token: &str) -> Vec<&str> {
    token.split('.').collect()
}

pub fn decode_segment(segment: &str) -> Vec<u8> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .expect("Segment is not base64url")
}

pub fn payload(token: &str) -> Claims {
    let json = decode_segment(segments(token)[1]);
    serde_json::from_slice(&json).expect("Payload is not claims JSON")
}
