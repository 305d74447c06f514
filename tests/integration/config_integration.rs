//! Integration tests for layered configuration loading

use crate::integration::test_utils::isolated_env;
use reminisce::config::{ConfigLoader, ReminisceConfig, TemplateLanguage, TranslationProvider};
use reminisce::QuestionEngine;
use tempfile::TempDir;

fn write_workspace_file(workspace: &TempDir, name: &str, body: &str) {
    let config_dir = workspace.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join(name), body).unwrap();
}

#[test]
fn test_defaults_without_any_files() {
    let _env = isolated_env();
    let workspace = TempDir::new().unwrap();

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config, ReminisceConfig::default());
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let env = isolated_env();
    let global_dir = env.home.path().join(".config").join("reminisce");
    std::fs::create_dir_all(&global_dir).unwrap();
    std::fs::write(
        global_dir.join("config.toml"),
        r#"
[translation]
timeout_ms = 1200

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let workspace = TempDir::new().unwrap();
    write_workspace_file(
        &workspace,
        "config.toml",
        r#"
[translation]
timeout_ms = 800
"#,
    );

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.translation.timeout_ms, 800);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_environment_specific_file_and_env_vars() {
    let mut env = isolated_env();
    let workspace = TempDir::new().unwrap();
    write_workspace_file(
        &workspace,
        "config.toml",
        r#"
[translation]
provider = "libretranslate"
endpoint = "http://localhost:5000"
"#,
    );
    write_workspace_file(
        &workspace,
        "production.toml",
        r#"
[translation]
endpoint = "https://translate.internal"
"#,
    );

    env.set("REMINISCE_ENV", "production");
    env.set("REMINISCE__TRANSLATION__TIMEOUT_MS", "1500");

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.translation.provider, TranslationProvider::LibreTranslate);
    assert_eq!(
        config.translation.endpoint.as_deref(),
        Some("https://translate.internal")
    );
    assert_eq!(config.translation.timeout_ms, 1500);
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn test_english_config_drives_engine() {
    let _env = isolated_env();
    let workspace = TempDir::new().unwrap();
    write_workspace_file(
        &workspace,
        "config.toml",
        r#"
[translation]
target_language = "en"

[questions]
language = "en"
"#,
    );

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.questions.language, TemplateLanguage::English);
    let config = config.validated().unwrap();

    let engine = QuestionEngine::from_config(&config).unwrap();
    assert_eq!(engine.translate("beach").await, "beach");
    let set = engine
        .generate(reminisce::AnalysisResult::default())
        .await;
    assert_eq!(set.questions[0].text, "When was this photo taken?");
}

#[test]
fn test_templates_file_override() {
    let _env = isolated_env();
    let workspace = TempDir::new().unwrap();
    let templates_path = workspace.path().join("templates.toml");
    let mut templates = reminisce::questions::QuestionTemplates::korean();
    templates.filler = "자유롭게 말씀해주세요.".to_string();
    std::fs::write(&templates_path, toml::to_string(&templates).unwrap()).unwrap();

    write_workspace_file(
        &workspace,
        "config.toml",
        &format!(
            "[questions]\ntemplates_file = {:?}\n",
            templates_path.to_string_lossy()
        ),
    );

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert!(config.validate().is_ok());
    let loaded = config.questions.load_templates().unwrap();
    assert_eq!(loaded.filler, "자유롭게 말씀해주세요.");
}

#[test]
fn test_invalid_provider_is_rejected_at_load() {
    let _env = isolated_env();
    let workspace = TempDir::new().unwrap();
    write_workspace_file(
        &workspace,
        "config.toml",
        r#"
[translation]
provider = "babelfish"
"#,
    );

    assert!(ConfigLoader::load(workspace.path()).is_err());
}
