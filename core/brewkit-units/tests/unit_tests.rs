use brewkit_units::{Measurement, PhysicalQuantity, Unit, UnitError};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

// ── Canonical conversions ────────────────────────────────────────

#[test]
fn pounds_to_kilograms() {
    assert_close(Unit::Pounds.to_canonical(1.0), 0.453_592_37, 1e-12);
}

#[test]
fn gallons_to_liters() {
    assert_close(Unit::UsGallons.to_canonical(5.0), 18.927_058_92, 1e-9);
}

#[test]
fn fahrenheit_to_celsius() {
    assert_close(Unit::Fahrenheit.to_canonical(212.0), 100.0, 1e-9);
    assert_close(Unit::Fahrenheit.to_canonical(32.0), 0.0, 1e-9);
    assert_close(Unit::Fahrenheit.from_canonical(67.0), 152.6, 1e-9);
}

#[test]
fn kelvin_to_celsius() {
    assert_close(Unit::Kelvin.to_canonical(273.15), 0.0, 1e-9);
}

#[test]
fn hours_to_minutes() {
    assert_close(Unit::Hours.to_canonical(1.5), 90.0, 1e-12);
    assert_close(Unit::Seconds.from_canonical(2.0), 120.0, 1e-9);
}

#[test]
fn ebc_to_srm() {
    assert_close(Unit::Ebc.to_canonical(20.0), 10.16, 1e-9);
}

#[test]
fn plato_and_specific_gravity_agree_approximately() {
    assert_close(Unit::Plato.to_canonical(12.0), 1.048, 0.001);
    assert_close(Unit::Plato.from_canonical(1.048), 12.0, 0.1);
}

#[test]
fn windisch_kolbach_to_lintner() {
    assert_close(Unit::WindischKolbach.to_canonical(250.0), 76.0, 1e-9);
}

#[test]
fn canonical_units_are_identity() {
    for q in PhysicalQuantity::ALL {
        let unit = q.canonical_unit();
        assert!(unit.is_canonical());
        assert_close(unit.to_canonical(42.5), 42.5, 1e-12);
        assert_close(unit.from_canonical(42.5), 42.5, 1e-12);
    }
}

#[test]
fn every_unit_has_a_symbol() {
    for unit in Unit::ALL {
        assert!(!unit.symbol().is_empty());
    }
}

// ── Measurement ──────────────────────────────────────────────────

#[test]
fn measurement_convert_between_units() {
    let m = Measurement::new(2.0, Unit::Kilograms);
    let g = m.convert_to(Unit::Grams).unwrap();
    assert_eq!(g.unit, Unit::Grams);
    assert_close(g.amount, 2000.0, 1e-9);
}

#[test]
fn measurement_convert_across_quantities_fails() {
    let m = Measurement::new(2.0, Unit::Kilograms);
    assert_eq!(
        m.convert_to(Unit::Liters).unwrap_err(),
        UnitError::QuantityMismatch {
            from: Unit::Kilograms,
            to: Unit::Liters,
        }
    );
}

#[test]
fn measurement_to_canonical() {
    let m = Measurement::new(90.0, Unit::Seconds).to_canonical();
    assert_eq!(m.unit, Unit::Minutes);
    assert_close(m.amount, 1.5, 1e-12);
}

#[test]
fn measurement_display_honours_precision() {
    let m = Measurement::new(5.26, Unit::Kilograms);
    assert_eq!(format!("{m:.1}"), "5.3 kg");
    assert_eq!(format!("{m}"), "5.26 kg");
}

// ── PhysicalQuantity ─────────────────────────────────────────────

#[test]
fn quantity_parses_from_name() {
    assert_eq!("volume".parse::<PhysicalQuantity>().unwrap(), PhysicalQuantity::Volume);
    assert_eq!(
        "Diastatic Power".parse::<PhysicalQuantity>().unwrap(),
        PhysicalQuantity::DiastaticPower
    );
    assert!("loudness".parse::<PhysicalQuantity>().is_err());
}

#[test]
fn quantity_display_matches_name() {
    for q in PhysicalQuantity::ALL {
        assert_eq!(q.to_string(), q.name());
        assert_eq!(q.to_string().parse::<PhysicalQuantity>().unwrap(), q);
    }
}
