use std::{env, fs};

use mediq_server::config::loader::load_config;

#[test]
fn config_parsing_and_env_overrides_and_validation() {
    // Create a temporary TOML configuration file
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("mediq.toml");

    let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8001
body_limit_bytes = 1048576

[logging]
level = "debug"

[analysis]
model_path = "models/custom.onnx"

[integrations]
openai_api_key = "changeme"
"#;
    fs::write(&path, toml_content).expect("write toml");

    // 1) Valid config parses
    let cfg = load_config(path.to_str()).expect("should parse config");
    assert_eq!(cfg.server.port, 8001);
    assert_eq!(cfg.server.body_limit_bytes, 1_048_576);
    assert_eq!(cfg.logging.level.to_ascii_lowercase(), "debug");
    assert_eq!(cfg.analysis.model_path, "models/custom.onnx");
    assert_eq!(cfg.integrations.openai_api_key.as_deref(), Some("changeme"));

    // 2) Env override should win over file
    unsafe {
        env::set_var("MEDIQ__ANALYSIS__MODEL_PATH", "models/override.onnx");
    }
    let cfg_env = load_config(path.to_str()).expect("should parse config with env overrides");
    assert_eq!(cfg_env.analysis.model_path, "models/override.onnx");
    // cleanup env var
    unsafe {
        env::remove_var("MEDIQ__ANALYSIS__MODEL_PATH");
    }

    // 3) Invalid config (bad log level) should error
    let invalid_path = dir.path().join("invalid.toml");
    let invalid_toml = r#"
[logging]
level = "verbose"
"#;
    fs::write(&invalid_path, invalid_toml).expect("write invalid toml");
    let err = load_config(invalid_path.to_str()).expect_err("expected validation error");
    assert!(err.contains("logging.level"));

    // 4) Missing file falls back to defaults
    let missing = dir.path().join("does-not-exist.toml");
    let cfg_default = load_config(missing.to_str()).expect("defaults apply");
    assert_eq!(cfg_default.server.port, 8000);
}
