//! End-to-end runs of the default pipeline on known initial states.

use gale_core::{FieldName, TickId};
use gale_engine::{DiscSource, Preset, PressureEvolver, SimConfig, SourceTarget, TickEngine};
use gale_test_utils::small_config;

#[test]
fn pressure_spreads_from_corner_cells() {
    let config = SimConfig {
        dt: 1.0 / 25.0,
        reference_pressure: 0.0,
        ..small_config(5)
    };
    let pressure = PressureEvolver::from_config(&config);
    let mut engine = TickEngine::with_evolvers(config, vec![Box::new(pressure)]).unwrap();
    // A unit disc covers exactly one cell; 25 · dt lifts it to 1.0.
    for centre in [(1.0, 1.0), (5.0, 5.0)] {
        let cells = engine.add_disc_source(&DiscSource {
            target: SourceTarget::Pressure,
            value: 25.0,
            centre,
            radius: 1.0,
        });
        assert_eq!(cells, 1);
    }
    assert_eq!(engine.probe(0, 0).unwrap().pressure, 1.0);
    assert_eq!(engine.probe(4, 4).unwrap().pressure, 1.0);

    let report = engine.step_once().unwrap();
    assert_eq!(report.tick, TickId(1));

    let pressure = engine.field(FieldName::Pressure);
    assert!(pressure.first_non_finite().is_none());
    let corner = engine.probe(0, 0).unwrap().pressure;
    assert!(corner < 1.0, "corner stayed at {corner}");
    assert!(corner > 0.0);
    assert!(engine.probe(1, 0).unwrap().pressure > 0.0);
}

#[test]
fn no_forcing_means_no_wind() {
    let config = SimConfig {
        pgf_modifier: 0.0,
        ..small_config(100)
    };
    let mut engine = TickEngine::new(config).unwrap();
    engine.apply_preset(Preset::A);
    engine.start();
    assert_eq!(engine.run(10), Ok(10));

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.u.max_abs_interior(), 0.0);
    assert_eq!(snapshot.v.max_abs_interior(), 0.0);
}

#[test]
fn pressure_dipole_deflects_wind_oppositely_across_equator() {
    let config = SimConfig {
        reference_pressure: 0.0,
        ..small_config(100)
    };
    let mut engine = TickEngine::new(config).unwrap();
    engine.apply_preset(Preset::A);
    engine.start();
    assert_eq!(engine.run(20), Ok(20));

    let snapshot = engine.snapshot();
    assert!(snapshot.u.first_non_finite().is_none());
    assert!(snapshot.v.first_non_finite().is_none());
    assert!(snapshot.u.max_abs_interior() > 0.0);
    assert!(snapshot.v.max_abs_interior() > 0.0);

    let n = engine.store().n();
    let cv = snapshot.coriolis_v;
    let (mut pairs, mut opposite) = (0usize, 0usize);
    let (mut south, mut north) = (0usize, 0usize);
    for i in 1..n / 2 {
        let mirror = n - i;
        for j in 1..=n {
            let (a, b) = (cv.get(i, j), cv.get(mirror, j));
            if a != 0.0 {
                south += 1;
            }
            if b != 0.0 {
                north += 1;
            }
            if a.abs() > 1e-12 && b.abs() > 1e-12 {
                pairs += 1;
                if a * b < 0.0 {
                    opposite += 1;
                }
            }
        }
    }
    assert!(south > 0 && north > 0);
    assert!(pairs > 1000, "only {pairs} deflected pairs");
    assert!(
        opposite as f64 >= 0.9 * pairs as f64,
        "{opposite} of {pairs} mirrored pairs deflect oppositely"
    );
}
