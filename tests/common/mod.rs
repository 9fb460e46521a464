#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use mockito::{Mock, Server, ServerGuard};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CREDENTIAL: &str = "ghu_integration";
pub const SESSION_TOKEN: &str = "tid=0123456789abcdef;exp=1700000000";

/// Isolated working directory, PATH directory and stub Copilot server.
pub struct TestEnv {
    _tmp: TempDir,
    pub work: PathBuf,
    pub bin: PathBuf,
    pub server: ServerGuard,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let work = tmp.path().join("work");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&work).expect("create work dir");
        fs::create_dir_all(&bin).expect("create bin dir");
        Self {
            _tmp: tmp,
            work,
            bin,
            server: Server::new(),
        }
    }

    /// Command with a clean environment: only PATH, the authority override and the credential.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("copilot-models");
        cmd.current_dir(&self.work)
            .env_clear()
            .env("PATH", &self.bin)
            .env("COPILOT_AUTHORITY_URL", self.server.url())
            .env("GITHUB_TOKEN", CREDENTIAL);
        cmd
    }

    pub fn output_file(&self) -> PathBuf {
        self.work.join("models.json")
    }

    pub fn mock_token_ok(&mut self) -> Mock {
        let body = json!({
            "token": SESSION_TOKEN,
            "expires_at": 1_700_000_000,
            "endpoints": {
                "api": self.server.url(),
                "telemetry": "https://telemetry.invalid"
            }
        });
        self.server
            .mock("GET", "/copilot_internal/v2/token")
            .match_header("authorization", format!("token {CREDENTIAL}").as_str())
            .match_header("editor-version", "vscode/1.97.2")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }

    pub fn mock_models_ok(&mut self, data: &Value) -> Mock {
        self.server
            .mock("GET", "/models")
            .match_header("authorization", format!("Bearer {SESSION_TOKEN}").as_str())
            .match_header("content-type", "application/json")
            .match_header("user-agent", "VSCode/1.97.2")
            .with_status(200)
            .with_body(json!({ "data": data, "object": "list" }).to_string())
            .create()
    }

    /// Put an executable shell script named `name` on the command's PATH.
    #[cfg(unix)]
    pub fn install_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
        path
    }
}

pub fn sample_models() -> Value {
    json!([
        {
            "id": "gpt-4o",
            "name": "GPT-4o",
            "vendor": "Azure OpenAI",
            "capabilities": { "limits": { "max_prompt_tokens": 64000 }, "type": "chat" }
        },
        {
            "id": "claude-sonnet-4",
            "name": "Claude Sonnet 4",
            "vendor": "Anthropic",
            "preview": false
        }
    ])
}

pub fn read_json(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("read output file");
    serde_json::from_str(&raw).expect("output file is valid json")
}
