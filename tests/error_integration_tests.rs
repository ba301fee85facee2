//! Integration tests for error handling
//!
//! Each automation failure mode is injected through the mock channel and
//! must come back as a single text item, never as a protocol error, with no
//! script file left behind.

mod common;

use common::mcp_harness::{BridgeTestContext, ContentValidator};
use illustrator_mcp::{
    automation::{MockChannel, MockOperation},
    error::AutomationError,
};

/// (mock, expected text) pairs for `view`
fn view_failures() -> Vec<(MockChannel, &'static str)> {
    vec![
        (
            MockChannel::new().without_windows(),
            "Failed to capture screenshot: no window found with title containing 'Adobe Illustrator'",
        ),
        (
            MockChannel::new().with_failure(MockOperation::Activate, "RPC server is unavailable"),
            "Failed to capture screenshot: activate_window task failed: RPC server is unavailable",
        ),
        (
            MockChannel::new().with_failure(MockOperation::GrabScreen, "no monitors available"),
            "Failed to capture screenshot: screen capture failed: no monitors available",
        ),
        (
            MockChannel::new().with_screen_size(0, 0),
            "Failed to capture screenshot: failed to encode image as jpeg: raster has zero width or height",
        ),
    ]
}

#[tokio::test]
async fn test_view_failures_become_text() {
    for (mock, expected) in view_failures() {
        let ctx = BridgeTestContext::new_with_configured_mock(mock);
        let result = ctx.view().await.expect("view failures are not protocol errors");

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(ContentValidator::validate_single_text(&result).unwrap(), expected);
    }
}

#[tokio::test]
async fn test_run_failure_becomes_text() {
    let mock = MockChannel::new().with_failure(
        MockOperation::RunScript,
        "Exception calling \"DoJavaScriptFile\": Error 8: Syntax error",
    );
    let ctx = BridgeTestContext::new_with_configured_mock(mock);

    let result = ctx.run("var = ;").await.unwrap();
    let text = ContentValidator::validate_single_text(&result).unwrap();

    assert_eq!(
        text,
        "Failed to execute script: script execution failed: Exception calling \"DoJavaScriptFile\": \
         Error 8: Syntax error"
    );
    assert!(ctx.leftover_scripts().is_empty());
}

#[tokio::test]
async fn test_view_failure_does_not_affect_run() {
    let mock = MockChannel::new().with_failure(MockOperation::GrabScreen, "denied");
    let ctx = BridgeTestContext::new_with_configured_mock(mock);

    assert!(
        ContentValidator::validate_single_text(&ctx.view().await.unwrap())
            .unwrap()
            .starts_with("Failed to capture screenshot:")
    );
    assert_eq!(
        ContentValidator::validate_single_text(&ctx.run("app.redraw();").await.unwrap()).unwrap(),
        "Script executed successfully"
    );
}

#[test]
fn test_every_error_has_remediation_hint() {
    let errors = vec![
        AutomationError::WindowNotFound {
            title: "Adobe Illustrator".to_string(),
        },
        AutomationError::ScriptFailed {
            reason: "x".to_string(),
        },
        AutomationError::CaptureFailed {
            reason: "x".to_string(),
        },
        AutomationError::EncodingFailed {
            format: "jpeg".to_string(),
            reason: "x".to_string(),
        },
        AutomationError::BackendNotAvailable {
            platform: "linux".to_string(),
        },
        AutomationError::TaskFailed {
            operation: "grab_screen".to_string(),
            reason:    "cancelled".to_string(),
        },
        AutomationError::Io(std::io::Error::other("disk full")),
    ];

    for error in errors {
        assert!(!error.remediation_hint().is_empty(), "{:?} has no hint", error);
    }
}
