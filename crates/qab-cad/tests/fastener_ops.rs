//! End-to-end fastener operations against the recording workplane

use approx::assert_relative_eq;
use glam::Vec3;
use qab_cad::{
    BoltRecord, CadError, CboreParams, CutFeature, FastenerCatalogs, Fasteners, HoleDepth,
    NullWorkplane, OperationError, PocketDirection, RecordingWorkplane, Workplane,
};
use qab_core::{Catalog, NutRecord, hex_flat_offset};

fn stock() -> RecordingWorkplane {
    RecordingWorkplane::new(Vec3::new(50.0, 25.0, 25.0))
}

#[test]
fn test_nutcatch_parallel_scenario() {
    let nuts = Catalog::new()
        .with_record("M3", "hexagon", NutRecord::new(5.5, 2.4))
        .unwrap();
    let catalogs = FastenerCatalogs::new(nuts, Catalog::new());
    let fasteners = Fasteners::new(&catalogs);

    let wp = fasteners.nutcatch_parallel(&stock(), "M3", None).unwrap();

    assert_eq!(wp.cuts().len(), 1);
    let Some(CutFeature::Pocket {
        profile,
        depth,
        direction,
    }) = wp.last_cut()
    else {
        panic!("expected a pocket");
    };
    assert_eq!(profile.len(), 6);
    assert_relative_eq!(profile.max_radius(), 5.5 / 3f32.sqrt(), epsilon = 1e-4);
    assert_relative_eq!(profile.height(), 5.5, epsilon = 1e-4);
    assert_relative_eq!(*depth, 2.4);
    assert_eq!(*direction, PocketDirection::Inward);
}

#[test]
fn test_sidecut_defaults_to_largest_dimension() {
    let catalogs = FastenerCatalogs::builtin().unwrap();
    let fasteners = Fasteners::new(&catalogs);

    let wp = fasteners
        .nutcatch_sidecut(&stock(), ("M3", "hexagon_lock"), None, None)
        .unwrap();
    let Some(CutFeature::Pocket {
        profile,
        depth,
        direction,
    }) = wp.last_cut()
    else {
        panic!("expected a pocket");
    };
    assert_eq!(profile.len(), 5);
    assert_relative_eq!(profile.bounds().1.y, 50.0);
    assert_relative_eq!(profile.width(), 5.5, epsilon = 1e-5);
    assert_relative_eq!(*depth, 4.0);
    assert_eq!(*direction, PocketDirection::Forward);
}

#[test]
fn test_sidecut_explicit_depth() {
    let catalogs = FastenerCatalogs::builtin().unwrap();
    let fasteners = Fasteners::new(&catalogs);

    let wp = fasteners
        .nutcatch_sidecut(&stock(), "M3", Some(0.1), Some(1.0))
        .unwrap();
    let Some(CutFeature::Pocket { profile, depth, .. }) = wp.last_cut() else {
        panic!("expected a pocket");
    };
    assert_relative_eq!(profile.bounds().1.y, 1.0);
    assert!(1.0 > hex_flat_offset(5.5));
    assert_relative_eq!(*depth, 2.5, epsilon = 1e-5);
}

#[test]
fn test_sidecut_rejects_non_positive_depth() {
    let catalogs = FastenerCatalogs::builtin().unwrap();
    let fasteners = Fasteners::new(&catalogs);

    let err = fasteners
        .nutcatch_sidecut(&stock(), "M3", None, Some(0.0))
        .unwrap_err();
    assert!(err.is_invalid_dimension());
}

#[test]
fn test_bolt_hole_clearance() {
    let catalogs = FastenerCatalogs::builtin().unwrap();
    let fasteners = Fasteners::new(&catalogs);
    let record = catalogs.bolts.get("M3", "headless").unwrap();

    let wp = fasteners
        .bolt_hole(&stock(), "M3", None, Some(0.1))
        .unwrap();
    assert_eq!(
        wp.last_cut(),
        Some(&CutFeature::Hole {
            diameter: record.diameter + 0.1,
            depth: HoleDepth::ThroughAll,
        })
    );
}

#[test]
fn test_cbore_uses_head_length() {
    let catalogs = FastenerCatalogs::builtin().unwrap();
    let fasteners = Fasteners::new(&catalogs);
    let record = catalogs.bolts.get("M3", "socket_head").unwrap();

    let wp = fasteners
        .cbore_bolt_hole(&stock(), "M3", CboreParams::default())
        .unwrap();
    let Some(CutFeature::CboreHole { cbore_depth, .. }) = wp.last_cut() else {
        panic!("expected a counterbored hole");
    };
    assert_eq!(Some(*cbore_depth), record.head_length);
}

#[test]
fn test_csk_hole() {
    let catalogs = FastenerCatalogs::builtin().unwrap();
    let fasteners = Fasteners::new(&catalogs);

    let wp = fasteners
        .csk_bolt_hole(&stock(), "M5", Some(12.0), None)
        .unwrap();
    let Some(CutFeature::CskHole {
        csk_diameter,
        csk_angle,
        depth,
        ..
    }) = wp.last_cut()
    else {
        panic!("expected a countersunk hole");
    };
    assert_relative_eq!(*csk_diameter, 11.2);
    assert_relative_eq!(*csk_angle, 90.0);
    assert_eq!(*depth, HoleDepth::Blind(12.0));
}

#[test]
fn test_chained_operations_leave_inputs_untouched() {
    let catalogs = FastenerCatalogs::builtin().unwrap();
    let fasteners = Fasteners::new(&catalogs);

    let base = stock();
    let with_nut = fasteners.nutcatch_parallel(&base, "M5", None).unwrap();
    let with_hole = fasteners.csk_bolt_hole(&with_nut, "M5", None, None).unwrap();
    let done = fasteners
        .cbore_bolt_hole(&with_hole, "M8", CboreParams::default())
        .unwrap();

    assert!(base.cuts().is_empty());
    assert_eq!(with_nut.cuts().len(), 1);
    assert_eq!(done.cuts().len(), 3);
    let names: Vec<_> = done.cuts().iter().map(CutFeature::type_name).collect();
    assert_eq!(names, vec!["Pocket", "CskHole", "CboreHole"]);
}

#[test]
fn test_unknown_fastener() {
    let catalogs = FastenerCatalogs::builtin().unwrap();
    let fasteners = Fasteners::new(&catalogs);

    let err = fasteners
        .nutcatch_parallel(&stock(), ("M3", "square"), None)
        .unwrap_err();
    assert!(err.is_not_found());

    let err = fasteners
        .bolt_hole(&stock(), "M99", None, None)
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_explicit_bolt_bypasses_catalog() {
    let catalogs = FastenerCatalogs::default();
    let fasteners = Fasteners::new(&catalogs);

    let wp = fasteners
        .cbore_bolt_hole(
            &stock(),
            BoltRecord::socket_head(3.0, 5.5, 3.0),
            CboreParams::default().with_head_clearance(0.5),
        )
        .unwrap();
    assert_eq!(
        wp.last_cut(),
        Some(&CutFeature::CboreHole {
            diameter: 3.0,
            cbore_diameter: 6.0,
            cbore_depth: 3.0,
            depth: HoleDepth::ThroughAll,
        })
    );
}

#[test]
fn test_kernel_errors_are_wrapped() {
    let catalogs = FastenerCatalogs::builtin().unwrap();
    let fasteners = Fasteners::new(&catalogs);

    let err = fasteners
        .bolt_hole(&NullWorkplane, "M3", None, None)
        .unwrap_err();
    assert!(matches!(
        err,
        OperationError::Cad(CadError::KernelNotAvailable(_))
    ));

    // The sidecut needs the solid's size before it can plan the cut
    let err = fasteners
        .nutcatch_sidecut(&NullWorkplane, "M3", None, None)
        .unwrap_err();
    assert!(matches!(err, OperationError::Cad(_)));
    assert!(NullWorkplane.largest_dimension().is_err());
}
