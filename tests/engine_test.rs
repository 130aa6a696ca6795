//! Drives the invoker through `/bin/sh` so no Wolfram installation is needed.
//! With `sh -c <body> argv0 -code <script>`, `$1` is `-code` and `$2` the script.
#![cfg(unix)]

use mma_doc::config::MmaDocConfig;
use mma_doc::engine::Engine;
use mma_doc::errors::EngineError;

fn shell_engine(body: &str) -> Engine {
    Engine::new("sh").with_extra_args(["-c", body, "fake-engine"])
}

#[tokio::test]
async fn test_stdout_is_trimmed() {
    let engine = shell_engine("printf '  some text  \\n'");
    assert_eq!(engine.run("?Plot").await.unwrap(), "some text");
}

#[tokio::test]
async fn test_script_passed_after_code_flag() {
    let engine = shell_engine("printf '%s|%s' \"$1\" \"$2\"");
    let out = engine.run("<< A`; ?Plot").await.unwrap();
    assert_eq!(out, "-code|<< A`; ?Plot");
}

#[tokio::test]
async fn test_nonzero_exit_reports_stderr() {
    let engine = shell_engine("printf boom >&2; exit 3");
    let err = engine.run("?Plot").await.unwrap_err();
    match &err {
        EngineError::Exited { status, stderr } => {
            assert_eq!(*status, Some(3));
            assert_eq!(stderr, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "Error executing Mathematica command: boom");
}

#[tokio::test]
async fn test_run_text_flattens_exit_failure() {
    let engine = shell_engine("printf boom >&2; exit 1");
    assert_eq!(
        engine.run_text("?Plot").await,
        "Error executing Mathematica command: boom"
    );
}

#[tokio::test]
async fn test_missing_executable() {
    let engine = Engine::new("/nonexistent/mma-doc-engine");
    let err = engine.run("?Plot").await.unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
    assert!(engine.run_text("?Plot").await.starts_with("Error: "));
}

#[tokio::test]
async fn test_engine_from_config() {
    let config = MmaDocConfig {
        executable: "sh".to_string(),
        extra_args: vec![
            "-c".to_string(),
            "printf configured".to_string(),
            "fake-engine".to_string(),
        ],
    };
    let engine = Engine::from_config(&config);
    assert_eq!(engine.executable(), "sh");
    assert_eq!(engine.run("?Plot").await.unwrap(), "configured");
}
