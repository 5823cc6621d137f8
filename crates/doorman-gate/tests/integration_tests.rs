//! Integration tests for the gate worker
//!
//! These drive full mount lifecycles under a paused tokio clock, so timer
//! behavior is deterministic and instant.

use doorman_domain::{Classification, GateView, InteractionKind, SignalSnapshot};
use doorman_gate::{GateConfig, GateWorker};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};

fn crawler_signals() -> SignalSnapshot {
    SignalSnapshot {
        user_agent: Some("Mozilla/5.0 (compatible; Googlebot/2.1)".to_string()),
        ..SignalSnapshot::desktop()
    }
}

#[tokio::test(start_paused = true)]
async fn key_interaction_reveals_after_delay() {
    let (events, receiver) = mpsc::channel(4);
    let worker = GateWorker::new(GateConfig::production());

    // One key press at t=200ms.
    tokio::spawn(async move {
        sleep(Duration::from_millis(200)).await;
        events.send(InteractionKind::KeyDown).await.ok();
    });

    let start = Instant::now();
    let state = worker
        .run(&SignalSnapshot::desktop(), receiver)
        .await
        .unwrap();

    assert_eq!(state.classification(), Classification::Human);
    assert!(state.content_visible());
    // Content appears when the reveal delay elapses, not at the key press.
    assert_eq!(start.elapsed(), Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn touch_interaction_reveals_after_delay() {
    let (events, receiver) = mpsc::channel(4);
    let worker = GateWorker::new(GateConfig::production());

    events.send(InteractionKind::TouchStart).await.unwrap();

    let state = worker
        .run(&SignalSnapshot::desktop(), receiver)
        .await
        .unwrap();
    assert_eq!(state.classification(), Classification::Human);
    assert!(state.content_visible());
}

#[tokio::test(start_paused = true)]
async fn four_pointer_moves_classify_human() {
    let (events, receiver) = mpsc::channel(8);
    let worker = GateWorker::new(GateConfig::production());

    for _ in 0..4 {
        events.send(InteractionKind::PointerMove).await.unwrap();
    }

    let state = worker
        .run(&SignalSnapshot::desktop(), receiver)
        .await
        .unwrap();
    assert_eq!(state.classification(), Classification::Human);
    assert!(state.content_visible());
}

#[tokio::test(start_paused = true)]
async fn three_pointer_moves_are_not_enough() {
    let (events, receiver) = mpsc::channel(8);
    let worker = GateWorker::new(GateConfig::production());

    tokio::spawn(async move {
        for _ in 0..3 {
            events.send(InteractionKind::PointerMove).await.ok();
        }
        // Leave the mount up past the reveal delay, then unmount.
        sleep(Duration::from_millis(1500)).await;
        drop(events);
    });

    let state = worker
        .run(&SignalSnapshot::desktop(), receiver)
        .await
        .unwrap();

    // The timer revealed, but the visitor was never classified human.
    assert_eq!(state.classification(), Classification::Unknown);
    assert!(state.content_revealed());
    assert!(!state.content_visible());
}

#[tokio::test(start_paused = true)]
async fn timer_alone_keeps_placeholder_forever() {
    let (events, receiver) = mpsc::channel(4);
    let worker = GateWorker::new(GateConfig::production());

    tokio::spawn(async move {
        // No interaction at all; unmount at t=5s.
        sleep(Duration::from_secs(5)).await;
        drop(events);
    });

    let start = Instant::now();
    let state = worker
        .run(&SignalSnapshot::desktop(), receiver)
        .await
        .unwrap();

    assert_eq!(start.elapsed(), Duration::from_secs(5));
    assert_eq!(state.classification(), Classification::Unknown);
    assert!(state.content_revealed());
    assert!(matches!(state.view(), GateView::Placeholder(_)));
}

#[tokio::test(start_paused = true)]
async fn unmount_before_reveal_tears_down_cleanly() {
    let (events, receiver) = mpsc::channel(4);
    drop(events);

    let worker = GateWorker::new(GateConfig::production());
    let state = worker
        .run(&SignalSnapshot::desktop(), receiver)
        .await
        .unwrap();

    assert_eq!(state.classification(), Classification::Unknown);
    assert!(!state.content_revealed());
}

#[tokio::test(start_paused = true)]
async fn crawler_is_never_revealed() {
    let (events, receiver) = mpsc::channel(4);
    let worker = GateWorker::new(GateConfig::production());

    // Interaction queued before the verdict changes nothing.
    events.send(InteractionKind::KeyDown).await.unwrap();

    let state = worker.run(&crawler_signals(), receiver).await.unwrap();

    assert_eq!(state.classification(), Classification::Bot);
    assert!(!state.content_revealed());
    match state.view() {
        GateView::Placeholder(placeholder) => {
            assert_eq!(placeholder.heading, "Loading...");
            assert!(placeholder.hint.is_some());
        }
        GateView::Content => panic!("Crawler mount must hold the placeholder"),
    }
}

#[tokio::test(start_paused = true)]
async fn development_bypass_reveals_on_mount() {
    let config = GateConfig {
        development_build: true,
        ..GateConfig::production()
    };
    let (_events, receiver) = mpsc::channel(4);
    let worker = GateWorker::new(config);

    let start = Instant::now();
    let state = worker
        .run(&SignalSnapshot::desktop(), receiver)
        .await
        .unwrap();

    // No heuristics, no waiting.
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(state.classification(), Classification::Human);
    assert!(state.content_visible());
}

#[tokio::test(start_paused = true)]
async fn disabled_gate_reveals_even_for_crawlers() {
    let config = GateConfig {
        disabled: true,
        ..GateConfig::production()
    };
    let (_events, receiver) = mpsc::channel(4);
    let worker = GateWorker::new(config);

    let state = worker.run(&crawler_signals(), receiver).await.unwrap();
    assert!(state.content_visible());
}

#[tokio::test(start_paused = true)]
async fn custom_reveal_delay_is_honored() {
    let config = GateConfig {
        reveal_delay_ms: 250,
        ..GateConfig::production()
    };
    let (events, receiver) = mpsc::channel(4);
    let worker = GateWorker::new(config);

    events.send(InteractionKind::KeyDown).await.unwrap();

    let start = Instant::now();
    let state = worker
        .run(&SignalSnapshot::desktop(), receiver)
        .await
        .unwrap();

    assert_eq!(start.elapsed(), Duration::from_millis(250));
    assert!(state.content_visible());
}
