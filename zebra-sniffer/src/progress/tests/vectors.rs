//! Fixed test vectors for sync progress.

use crate::progress::{mock::MockSyncProgress, Progress, SyncProgress};

#[test]
fn genesis_is_never_synced() {
    let _init_guard = crate::tests::init();

    let progress = Progress::new(0, 0);

    assert!(!progress.is_bootstrapped());
    for delta in [0, 1, crate::DEFAULT_DELTA, i64::MAX] {
        assert!(!progress.is_synced(delta), "delta: {delta}");
    }
}

#[test]
fn synced_boundaries() {
    let _init_guard = crate::tests::init();

    // (current, highest, delta, synced)
    let cases = [
        (1, 100, crate::DEFAULT_DELTA, false),
        (5, 100, 0, false),
        (10, 10, 0, true),
        (200, 10, 0, true),
        (100, 5, 0, true),
        (90, 100, 10, true),
        (89, 100, 10, false),
        (0, 5, 5, true),
        (0, 6, 5, false),
        (10, 0, 0, true),
        (10, 10, -1, false),
        (11, 10, -1, true),
        (0, u64::MAX, i64::MAX, false),
        (u64::MAX, u64::MAX, i64::MAX, true),
        (u64::MAX, 1, i64::MIN, true),
    ];

    for (current, highest, delta, synced) in cases {
        assert_eq!(
            Progress::new(current, highest).is_synced(delta),
            synced,
            "current: {current}, highest: {highest}, delta: {delta}",
        );
    }
}

#[test]
fn watch_channel_reports_latest_progress() {
    let _init_guard = crate::tests::init();

    let (sender, receiver) = Progress::channel();
    assert_eq!(receiver.progress(), Progress::default());

    sender.send_replace(Progress::new(7, 9));
    assert_eq!(receiver.progress(), Progress::new(7, 9));

    // Readers keep the last snapshot after the syncer shuts down.
    drop(sender);
    assert_eq!(receiver.progress(), Progress::new(7, 9));
}

#[test]
fn mock_clones_share_progress() {
    let _init_guard = crate::tests::init();

    let mock = MockSyncProgress::new(1, 2);
    let handle = mock.clone();

    mock.set_progress(3, 4);
    assert_eq!(handle.progress(), Progress::new(3, 4));
}
