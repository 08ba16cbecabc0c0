// pf-core/src/units.rs

use uom::si::f64::{ElectricCurrent as UomElectricCurrent, Ratio as UomRatio};

// Public canonical unit types (SI, f64)
pub type Current = UomElectricCurrent;
/// Per-unit quantities are dimensionless ratios to the nominal base.
pub type PerUnit = UomRatio;

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn per_unit(v: f64) -> PerUnit {
    use uom::si::ratio::ratio;
    PerUnit::new::<ratio>(v)
}

#[inline]
pub fn as_amps(i: Current) -> f64 {
    use uom::si::electric_current::ampere;
    i.get::<ampere>()
}

#[inline]
pub fn as_per_unit(v: PerUnit) -> f64 {
    use uom::si::ratio::ratio;
    v.get::<ratio>()
}
