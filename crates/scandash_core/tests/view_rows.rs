use scandash_core::{
    update, AppState, BannerView, Msg, ScanMode, ScanStatusRecord, TargetRecord,
    DEFAULT_SCAN_INTERVAL_MINUTES,
};

fn target(id: u64, domain: &str) -> TargetRecord {
    TargetRecord {
        id,
        domain: domain.to_string(),
        brand: Some("Acme".to_string()),
        status: "ORIGINAL (CSE)".to_string(),
        is_verified: true,
        is_active: true,
        scan_interval_minutes: Some(10),
    }
}

#[test]
fn rows_are_sorted_ascending_by_id_regardless_of_input_order() {
    let (state, _) = update(
        AppState::new(),
        Msg::TargetsFetched(vec![
            target(42, "z.com"),
            target(3, "m.com"),
            target(17, "a.com"),
            target(1, "q.com"),
        ]),
    );

    let ids: Vec<u64> = state.view().rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1, 3, 17, 42]);
    assert!(ids.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn empty_sequence_renders_zero_rows() {
    let (state, _) = update(
        AppState::new(),
        Msg::TargetsFetched(vec![target(1, "a.com"), target(2, "b.com")]),
    );
    assert_eq!(state.view().rows.len(), 2);

    let (state, _) = update(state, Msg::TargetsFetched(Vec::new()));
    assert!(state.view().rows.is_empty());
}

#[test]
fn absent_brand_renders_empty_string_and_absent_interval_renders_default() {
    let record = TargetRecord {
        id: 9,
        domain: "bare.com".to_string(),
        brand: None,
        status: "INCOMPLETE".to_string(),
        is_verified: false,
        is_active: false,
        scan_interval_minutes: None,
    };
    let (state, _) = update(AppState::new(), Msg::TargetsFetched(vec![record]));

    let view = state.view();
    let row = &view.rows[0];
    assert_eq!(row.brand, "");
    assert_eq!(row.scan_interval_minutes, DEFAULT_SCAN_INTERVAL_MINUTES);
    assert_eq!(row.scan_interval_minutes, 5);
}

#[test]
fn report_link_is_keyed_by_id() {
    let (state, _) = update(AppState::new(), Msg::TargetsFetched(vec![target(23, "r.com")]));
    assert_eq!(state.view().rows[0].report_href, "/reports/targets/23/html");
}

#[test]
fn banner_running_wins_over_stopped() {
    let banner = BannerView::from_record(&ScanStatusRecord {
        running: true,
        stopped: false,
        current_target: Some("a.com".to_string()),
    });

    assert_eq!(banner.mode, ScanMode::Scanning);
    assert!(banner.text.contains("a.com"));
    assert!(!banner.text.contains("stopped"));

    // The flags are not mutually exclusive at the source; running still
    // takes precedence when both are set.
    let both = BannerView::from_record(&ScanStatusRecord {
        running: true,
        stopped: true,
        current_target: None,
    });
    assert_eq!(both.mode, ScanMode::Scanning);
}

#[test]
fn banner_stopped_when_not_running() {
    let banner = BannerView::from_record(&ScanStatusRecord {
        running: false,
        stopped: true,
        current_target: None,
    });
    assert_eq!(banner.mode, ScanMode::Stopped);
    assert_eq!(banner.text, "Scanning stopped");
}

#[test]
fn banner_idle_as_fallback() {
    let banner = BannerView::from_record(&ScanStatusRecord {
        running: false,
        stopped: false,
        current_target: None,
    });
    assert_eq!(banner.mode, ScanMode::Idle);
    assert_eq!(banner.text, "Idle, no scans in progress");
}

#[test]
fn banner_rendering_is_idempotent() {
    let status = ScanStatusRecord {
        running: true,
        stopped: false,
        current_target: Some("a.com".to_string()),
    };
    assert_eq!(BannerView::from_record(&status), BannerView::from_record(&status));
}

#[test]
fn banner_absent_until_first_status_poll() {
    let state = AppState::new();
    assert!(state.view().banner.is_none());

    let (state, _) = update(state, Msg::StatusFetched(ScanStatusRecord::default()));
    assert!(state.view().banner.is_some());
}
