#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use hearth_tracker::{TimeTracker, TrackerConfig};
use tokio::time;

#[tokio::test(start_paused = true)]
async fn three_seconds_mounted_counts_three() {
    let tracker = TimeTracker::default().mount().unwrap();
    time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(tracker.unmount(), 3);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_further_increments() {
    let ticks = Arc::new(AtomicU64::new(0));
    let tracker = {
        let ticks = Arc::clone(&ticks);
        TimeTracker::default()
            .mount_with(move |_| {
                ticks.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap()
    };
    let observer = tracker.subscribe();

    time::sleep(Duration::from_millis(2_500)).await;
    drop(tracker);
    time::sleep(Duration::from_secs(10)).await;

    assert_eq!(*observer.borrow(), 2);
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn remount_restarts_from_zero_without_stale_timer() {
    let ticks = Arc::new(AtomicU64::new(0));
    let tracker = TimeTracker::default();

    let first = {
        let ticks = Arc::clone(&ticks);
        tracker
            .mount_with(move |_| {
                ticks.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap()
    };
    time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(first.unmount(), 1);

    let second = tracker.mount().unwrap();
    assert_eq!(second.elapsed(), 0);
    time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(second.elapsed(), 2);
    assert_eq!(ticks.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn repeated_mount_cycles_do_not_leak_timers() {
    let ticks = Arc::new(AtomicU64::new(0));
    let tracker = TimeTracker::default();
    for _ in 0..5 {
        let mounted = {
            let ticks = Arc::clone(&ticks);
            tracker
                .mount_with(move |_| {
                    ticks.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap()
        };
        time::sleep(Duration::from_millis(1_200)).await;
        drop(mounted);
    }
    time::sleep(Duration::from_secs(30)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 5);
}

#[tokio::test(start_paused = true)]
async fn custom_period_drives_the_cadence() {
    let tracker = TimeTracker::new(TrackerConfig::with_period(Duration::from_millis(250)))
        .unwrap()
        .mount()
        .unwrap();
    time::sleep(Duration::from_millis(1_100)).await;
    assert_eq!(tracker.elapsed(), 4);
}
