use dayline_core::activity::Activity;
use dayline_core::lanes::LaneLayout;
use dayline_core::time::Weekday;
use uuid::Uuid;

/// Assert that within every lane, consecutive activities never overlap.
pub fn assert_no_lane_overlaps(activities: &[Activity], layout: &LaneLayout) {
    for lane in 0..layout.lane_count() {
        let mut members: Vec<&Activity> = activities
            .iter()
            .filter(|a| layout.lane_of(a.id) == Some(lane))
            .collect();
        members.sort_by_key(|a| a.start);
        for pair in members.windows(2) {
            assert!(
                pair[1].start >= pair[0].end,
                "lane {lane}: {:?} ({}-{}) overlaps {:?} ({}-{})",
                pair[0].title,
                pair[0].start,
                pair[0].end,
                pair[1].title,
                pair[1].start,
                pair[1].end
            );
        }
    }
}

/// Assert the layout uses exactly `expected` lanes.
pub fn assert_lane_count(layout: &LaneLayout, expected: usize) {
    assert_eq!(
        layout.lane_count(),
        expected,
        "layout uses {} lanes, expected {}",
        layout.lane_count(),
        expected
    );
}

/// Assert a specific activity landed in `expected`.
pub fn assert_lane_of(layout: &LaneLayout, id: Uuid, expected: usize) {
    assert_eq!(
        layout.lane_of(id),
        Some(expected),
        "activity {id} in lane {:?}, expected {expected}",
        layout.lane_of(id)
    );
}

/// Assert the lane count is minimal: it must equal the maximum number of
/// activities overlapping at any instant, computed by an event sweep over
/// the day-filtered set. Only meaningful for well-formed (start < end)
/// intervals.
pub fn assert_min_lane_count(activities: &[Activity], layout: &LaneLayout, day: Weekday) {
    let mut events: Vec<(u16, i32)> = Vec::new();
    for activity in activities.iter().filter(|a| a.applies_on(day)) {
        events.push((activity.start.minutes(), 1));
        events.push((activity.end.minutes(), -1));
    }
    // Ends sort before starts at the same minute: touching intervals do
    // not overlap.
    events.sort_by_key(|&(minute, delta)| (minute, delta));

    let mut depth = 0;
    let mut max_depth = 0;
    for (_, delta) in events {
        depth += delta;
        max_depth = max_depth.max(depth);
    }

    assert_eq!(
        layout.lane_count(),
        max_depth as usize,
        "lane count {} != max overlap depth {}",
        layout.lane_count(),
        max_depth
    );
}
