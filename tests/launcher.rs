#![cfg(unix)]

use pixelframe::launcher::{run, run_until, LaunchConfig, LaunchError};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

fn shell(script: &str) -> LaunchConfig {
    LaunchConfig {
        command: vec!["sh".to_string(), "-c".to_string(), script.to_string()],
        open_browser: false,
        settle: Duration::ZERO,
        ..LaunchConfig::default()
    }
}

#[tokio::test]
async fn opens_url_printed_on_local_line() {
    let config = shell("echo 'VITE v5.0.0  ready in 200 ms'; echo '  Local:   http://localhost:4321/'; echo bye");
    let outcome = run(&config).await.unwrap();
    assert_eq!(outcome.url.as_deref(), Some("http://localhost:4321/"));
    assert!(!outcome.interrupted);
}

#[tokio::test]
async fn scans_stderr_too() {
    let config = shell("echo '  Local:   http://127.0.0.1:9000/' 1>&2");
    let outcome = run(&config).await.unwrap();
    assert_eq!(outcome.url.as_deref(), Some("http://127.0.0.1:9000/"));
}

#[tokio::test]
async fn falls_back_to_default_url() {
    let config = shell("echo 'starting'");
    let outcome = run(&config).await.unwrap();
    assert_eq!(outcome.url.as_deref(), Some("http://localhost:5173"));
}

#[tokio::test]
async fn failing_server_is_an_error() {
    let config = shell("echo 'boom'; exit 3");
    match run(&config).await {
        Err(LaunchError::ChildFailed(status)) => assert_eq!(status.code(), Some(3)),
        other => panic!("expected ChildFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_runner_is_reported() {
    let config = LaunchConfig {
        command: vec!["pixelframe-no-such-runner".to_string()],
        open_browser: false,
        settle: Duration::ZERO,
        ..LaunchConfig::default()
    };
    match run(&config).await {
        Err(LaunchError::RunnerNotFound { program, .. }) => assert_eq!(program, "pixelframe-no-such-runner"),
        other => panic!("expected RunnerNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn interrupt_stops_a_running_server() {
    let config = shell("echo '  Local:   http://localhost:4173/'; exec sleep 30");
    let (stop, stopped) = oneshot::channel::<()>();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        let _ = stop.send(());
    });

    let started = Instant::now();
    let outcome = run_until(&config, async {
        let _ = stopped.await;
    })
    .await
    .unwrap();

    assert!(outcome.interrupted);
    assert_eq!(outcome.url.as_deref(), Some("http://localhost:4173/"));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn interrupt_before_any_output_still_stops_the_server() {
    let config = shell("exec sleep 30");
    let started = Instant::now();
    let outcome = run_until(&config, async {}).await.unwrap();

    assert!(outcome.interrupted);
    assert_eq!(outcome.url, None);
    assert!(started.elapsed() < Duration::from_secs(10));
}
