//! Integration tests for Vimshottari timeline construction.
//!
//! Exercises the full path from birth inputs (Moon longitude plus civil
//! instant) through balance, the Mahadasha chain, sub-period tiling and
//! snapshot queries, with the well-known structural properties of the
//! system asserted across all 27 nakshatras.

use hora_dasha::nakshatra::{NAKSHATRA_SPAN, nakshatra_from_longitude};
use hora_dasha::vimshottari::{
    DAYS_PER_YEAR, DashaLevel, TOTAL_CYCLE_YEARS, TimelineConfig, add_years, birth_balance,
    build_timeline, find_active_period, graha_years, mahadasha_level, rotate_from, snapshot_at,
    snapshot_from_timeline, timeline_for_birth, verify_tiling,
};
use hora_dasha::{DashaError, Graha, timeline_report};
use hora_time::UtcTime;

/// 1990-01-01T00:00:00Z.
const BIRTH_JD: f64 = 2_447_892.5;

/// Moon at 5 degrees sidereal: early Ashwini, second pada.
const MOON_LON: f64 = 5.0;

/// Moon at 5 deg sits 0.375 into Ashwini, so Ketu's 7 years open with a
/// 4.375-year balance and the timeline continues into a full Shukra period.
#[test]
fn known_birth_produces_the_classical_opening() {
    let info = nakshatra_from_longitude(MOON_LON);
    assert_eq!(info.number, 1, "5 deg lies in the first nakshatra");

    let bal = birth_balance(MOON_LON).unwrap();
    assert_eq!(bal.lord, Graha::Ketu);
    assert!((bal.balance_years - 4.375).abs() < 1e-12);

    let timeline =
        build_timeline(BIRTH_JD, MOON_LON, &TimelineConfig { depth: 1, cycles: 1 }).unwrap();
    let mahas = &timeline.levels[0];
    assert_eq!(mahas.len(), 9);
    assert_eq!(mahas[0].graha, Graha::Ketu);
    assert_eq!(mahas[0].start_jd, BIRTH_JD);
    assert!(
        (mahas[0].duration_days() - 4.375 * DAYS_PER_YEAR).abs() < 1e-8,
        "opening balance should span 1597.97 days, got {}",
        mahas[0].duration_days()
    );
    assert_eq!(mahas[1].graha, Graha::Shukra);
    assert!((mahas[1].duration_days() - 20.0 * DAYS_PER_YEAR).abs() < 1e-8);
}

/// The nine Mahadashas of one cycle jointly cover the balance plus the
/// eight remaining full weights, whatever the birth nakshatra.
#[test]
fn one_cycle_spans_the_balance_plus_remaining_weights() {
    for i in 0..27 {
        let lon = (i as f64 + 0.31) * NAKSHATRA_SPAN;
        let bal = birth_balance(lon).unwrap();
        let level0 = mahadasha_level(BIRTH_JD, lon, 1).unwrap();

        let covered = level0.last().map(|p| p.end_jd - BIRTH_JD).unwrap();
        let expected =
            (bal.balance_years + TOTAL_CYCLE_YEARS - graha_years(bal.lord)) * DAYS_PER_YEAR;
        assert!(
            (covered - expected).abs() < 1e-6,
            "nakshatra {i}: cycle should cover {expected} days, got {covered}"
        );
    }
}

/// A birth exactly at a nakshatra start owns the lord's full weight, and
/// its cycle then covers the complete 120 years.
#[test]
fn segment_start_birth_covers_the_full_cycle() {
    let lon = 3.0 * NAKSHATRA_SPAN; // Rohini start: exact in floats.
    let level0 = mahadasha_level(BIRTH_JD, lon, 1).unwrap();
    assert_eq!(level0[0].graha, Graha::Chandra);
    let covered = level0.last().map(|p| p.end_jd - BIRTH_JD).unwrap();
    assert!(
        (covered - TOTAL_CYCLE_YEARS * DAYS_PER_YEAR).abs() < 1e-6,
        "a full-balance birth covers 43830 days, got {covered}"
    );
}

/// Children tile their parents exactly at every level and depth.
#[test]
fn every_level_tiles_its_parents() {
    for lon in [5.0, 47.9, 133.33, 221.0, 310.7, 359.9] {
        let timeline = build_timeline(BIRTH_JD, lon, &TimelineConfig::default()).unwrap();
        verify_tiling(&timeline)
            .unwrap_or_else(|err| panic!("lon {lon}: tiling breach: {err}"));
    }
}

/// The last child of every parent ends exactly on the parent end, with no
/// float residue.
#[test]
fn last_children_snap_onto_parent_ends() {
    let timeline = build_timeline(BIRTH_JD, MOON_LON, &TimelineConfig::default()).unwrap();
    for level_idx in 1..timeline.levels.len() {
        let parents = &timeline.levels[level_idx - 1];
        let children = &timeline.levels[level_idx];
        for (pidx, parent) in parents.iter().enumerate() {
            let last_end = children
                .iter()
                .filter(|c| c.parent_idx == pidx as u32)
                .last()
                .map(|c| c.end_jd)
                .unwrap();
            assert_eq!(
                last_end, parent.end_jd,
                "level {level_idx} parent {pidx}: last child must end on the parent end"
            );
        }
    }
}

/// Every parent's first child is ruled by the parent's own graha.
#[test]
fn sub_periods_self_start() {
    let timeline = build_timeline(BIRTH_JD, 97.3, &TimelineConfig::default()).unwrap();
    for level_idx in 1..timeline.levels.len() {
        let parents = &timeline.levels[level_idx - 1];
        let children = &timeline.levels[level_idx];
        for (pidx, parent) in parents.iter().enumerate() {
            let first = children.iter().find(|c| c.parent_idx == pidx as u32).unwrap();
            assert_eq!(
                first.graha, parent.graha,
                "level {level_idx} parent {pidx}: first child must share the parent ruler"
            );
            assert_eq!(first.order, 1);
        }
    }
}

/// Sibling durations divide the parent in the canonical weight
/// proportions, except the last which also absorbs the snap residue.
#[test]
fn children_divide_parents_proportionally() {
    let timeline =
        build_timeline(BIRTH_JD, MOON_LON, &TimelineConfig { depth: 2, cycles: 1 }).unwrap();
    let parent = &timeline.levels[0][3]; // Chandra, full 10 years.
    assert_eq!(parent.graha, Graha::Chandra);
    let seq = rotate_from(parent.graha);
    let children: Vec<_> =
        timeline.levels[1].iter().filter(|c| c.parent_idx == 3).collect();
    assert_eq!(children.len(), 9);
    for (i, child) in children.iter().enumerate() {
        assert_eq!(child.graha, seq[i], "children follow the rotated canonical order");
        let expected = parent.duration_days() * graha_years(seq[i]) / TOTAL_CYCLE_YEARS;
        assert!(
            (child.duration_days() - expected).abs() < 1e-6,
            "child {i} should span {expected} days, got {}",
            child.duration_days()
        );
    }
}

/// A 16-year Mahadasha yields nine Antardashas; the opening one repeats
/// the Mahadasha ruler for 16 * 16 / 120 years.
#[test]
fn sixteen_year_period_opens_with_its_own_sub_period() {
    // Punarvasu (index 6) is ruled by Guru, so a birth at its start opens
    // a full 16-year Guru mahadasha.
    let lon = 6.0 * NAKSHATRA_SPAN + 1e-9;
    let timeline =
        build_timeline(BIRTH_JD, lon, &TimelineConfig { depth: 2, cycles: 1 }).unwrap();
    let maha = &timeline.levels[0][0];
    assert_eq!(maha.graha, Graha::Guru);

    let antars: Vec<_> = timeline.levels[1].iter().filter(|c| c.parent_idx == 0).collect();
    assert_eq!(antars.len(), 9, "a mahadasha holds nine antardashas");
    assert_eq!(antars[0].graha, Graha::Guru);
    let expected_years = 16.0 * 16.0 / TOTAL_CYCLE_YEARS;
    assert!(
        (antars[0].duration_years() - expected_years).abs() < 1e-6,
        "Guru antardasha in Guru mahadasha should run {expected_years}y, got {}y",
        antars[0].duration_years()
    );
}

/// Identical inputs produce bitwise identical timelines.
#[test]
fn construction_is_deterministic() {
    let config = TimelineConfig::default();
    let a = build_timeline(BIRTH_JD, 211.125, &config).unwrap();
    let b = build_timeline(BIRTH_JD, 211.125, &config).unwrap();
    assert_eq!(a, b, "two builds from the same inputs must agree exactly");
}

/// Depth route: each requested depth materializes exactly that many
/// levels, and out-of-range depths are refused.
#[test]
fn depth_is_honored_and_validated() {
    for depth in 1..=3u8 {
        let timeline =
            build_timeline(BIRTH_JD, MOON_LON, &TimelineConfig { depth, cycles: 1 }).unwrap();
        assert_eq!(timeline.levels.len(), depth as usize);
    }
    for depth in [0u8, 4, 9] {
        let result = build_timeline(BIRTH_JD, MOON_LON, &TimelineConfig { depth, cycles: 1 });
        assert!(
            matches!(result, Err(DashaError::InvalidInput(_))),
            "depth {depth} must be rejected"
        );
    }
}

/// Chaining two cycles doubles the Mahadasha count and replays the birth
/// lord at full weight from entry ten onward.
#[test]
fn multiple_cycles_chain_seamlessly() {
    let timeline =
        build_timeline(BIRTH_JD, MOON_LON, &TimelineConfig { depth: 1, cycles: 2 }).unwrap();
    let mahas = &timeline.levels[0];
    assert_eq!(mahas.len(), 18);
    assert_eq!(mahas[9].graha, Graha::Ketu);
    assert!((mahas[9].duration_days() - 7.0 * DAYS_PER_YEAR).abs() < 1e-8);
    for pair in mahas.windows(2) {
        assert_eq!(pair[1].start_jd, pair[0].end_jd, "cycles must chain without a seam");
    }
}

/// The lazy snapshot agrees period-for-period with a lookup in the fully
/// materialized tree.
#[test]
fn snapshot_agrees_with_the_materialized_tree() {
    let config = TimelineConfig::default();
    let timeline = build_timeline(BIRTH_JD, MOON_LON, &config).unwrap();
    for years in [0.0, 2.5, 4.375, 24.4, 60.0, 110.0] {
        let query_jd = add_years(BIRTH_JD, years);
        let lazy = snapshot_at(BIRTH_JD, MOON_LON, &config, query_jd).unwrap();
        let looked_up = snapshot_from_timeline(&timeline, query_jd);
        assert_eq!(lazy.periods, looked_up.periods, "snapshots diverge {years}y after birth");
        assert_eq!(lazy.periods.len(), 3);
    }
}

/// An instant before birth or on the horizon end is outside the tree.
#[test]
fn out_of_horizon_queries_fail() {
    let config = TimelineConfig::default();
    let level0 = mahadasha_level(BIRTH_JD, MOON_LON, 1).unwrap();
    let horizon_end = level0.last().map(|p| p.end_jd).unwrap();

    for query_jd in [BIRTH_JD - 0.001, horizon_end, horizon_end + 5000.0] {
        let result = snapshot_at(BIRTH_JD, MOON_LON, &config, query_jd);
        assert!(
            matches!(result, Err(DashaError::InvalidInput(_))),
            "query at jd {query_jd} should be out of horizon"
        );
    }
    assert!(
        find_active_period(&level0, horizon_end - 1e-6).is_some(),
        "just inside the horizon end is still covered"
    );
}

/// Civil-instant entry points validate their dates before computing.
#[test]
fn civil_wrappers_validate_dates() {
    let config = TimelineConfig::default();
    let good = UtcTime::new(1990, 1, 1, 0, 0, 0.0);
    let timeline = timeline_for_birth(&good, MOON_LON, &config).unwrap();
    assert_eq!(timeline.birth_jd, BIRTH_JD);

    let bad = UtcTime::new(1990, 13, 1, 0, 0, 0.0);
    assert!(matches!(
        timeline_for_birth(&bad, MOON_LON, &config),
        Err(DashaError::Time(_))
    ));
}

/// Non-finite longitudes are refused at every entry point.
#[test]
fn non_finite_longitudes_are_refused() {
    let config = TimelineConfig::default();
    for lon in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(birth_balance(lon).is_err());
        assert!(build_timeline(BIRTH_JD, lon, &config).is_err());
        assert!(snapshot_at(BIRTH_JD, lon, &config, BIRTH_JD + 1.0).is_err());
    }
}

/// The report layer preserves tiling in calendar form: children abut on
/// dates and the whole cycle closes on the last Mahadasha's end date.
#[test]
fn report_preserves_structure() {
    let timeline = build_timeline(BIRTH_JD, MOON_LON, &TimelineConfig::default()).unwrap();
    let report = timeline_report(&timeline);

    assert_eq!(report.periods.len(), 9);
    for node in &report.periods {
        assert_eq!(node.children.len(), 9);
        for pair in node.children.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "sibling dates must abut");
        }
        assert_eq!(node.children[0].start, node.start);
        assert_eq!(node.children[8].end, node.end);
    }

    let levels: Vec<_> = report.periods[0]
        .children
        .iter()
        .flat_map(|antar| antar.children.iter().map(|p| p.level))
        .collect();
    assert_eq!(levels.len(), 81);
    assert!(levels.iter().all(|&l| l == "Pratyantardasha"));
}

/// Snapshots drill depth-first down the same spans the report renders.
#[test]
fn snapshot_levels_descend() {
    let snap = snapshot_at(
        BIRTH_JD,
        MOON_LON,
        &TimelineConfig::default(),
        add_years(BIRTH_JD, 50.0),
    )
    .unwrap();
    assert_eq!(
        snap.periods.iter().map(|p| p.level).collect::<Vec<_>>(),
        vec![DashaLevel::Mahadasha, DashaLevel::Antardasha, DashaLevel::Pratyantardasha]
    );
    for pair in snap.periods.windows(2) {
        assert!(pair[1].start_jd >= pair[0].start_jd && pair[1].end_jd <= pair[0].end_jd);
    }
}
