use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::output::{print_success, print_warning};

/// Integration keys the server consults at startup.
const API_KEY_VARS: &[&str] = &["OPENAI_API_KEY", "DEEPL_API_KEY", "RXNORM_API_KEY"];

/// Placeholder values commonly left in .env templates.
const PLACEHOLDER_VALUES: &[&str] = &["changeme", "your-api-key-here", "todo", "xxx"];

/// Check environment variables and process dependencies. Warnings only; the
/// server always has mock fallbacks, so nothing here is fatal.
pub fn doctor(server_binary: &str) -> Result<()> {
    let model_path = env::var("MEDIQ__ANALYSIS__MODEL_PATH")
        .unwrap_or_else(|_| "models/skin_lesion.onnx".to_string());
    if Path::new(&model_path).exists() {
        print_success(&format!("model file present: {model_path}"));
    } else {
        print_warning(&format!(
            "model file not found at {model_path}, server will run in mock mode"
        ));
    }

    for var in API_KEY_VARS {
        match env::var(var) {
            Ok(value) if !is_placeholder(&value) => {
                print_success(&format!("{var} is set"));
            }
            Ok(_) => {
                print_warning(&format!("{var} holds a placeholder value"));
            }
            Err(_) => {
                print_warning(&format!("{var} is not set"));
            }
        }
    }

    match find_in_path(server_binary) {
        Some(path) => print_success(&format!("{server_binary} found at {}", path.display())),
        None => print_warning(&format!("{server_binary} not found on PATH")),
    }

    Ok(())
}

fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || PLACEHOLDER_VALUES
            .iter()
            .any(|p| trimmed.eq_ignore_ascii_case(p))
}

fn find_in_path(binary: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}
