use wire_gauge::gauge::{compute, Awg};
use wire_gauge::resolver::nearest;
use wire_gauge::units::{Measurement, UnitSystem};

fn main() {
    println!("awg, diameter, area, diameter_in, area_in2, kcmil");
    for awg in Awg::all() {
        let r = compute(awg);
        println!(
            "{:>3}, {:.4}, {:.4}, {:.4}, {:.5}, {:.4}",
            r.awg(),
            r.diameter(),
            r.area(),
            r.diameter_inches(),
            r.area_square_inches(),
            r.area_kcmils(),
        );
    }

    // A few common lookups from catalogue dimensions.
    let lookups = [
        Measurement::Diameter(1.6, UnitSystem::Millimeters),
        Measurement::Area(2.5, UnitSystem::Millimeters),
        Measurement::Diameter(0.064, UnitSystem::Inches),
        Measurement::Kcmil(16.5),
    ];
    for m in lookups {
        println!("{m:?} -> AWG {}", nearest(m));
    }
}
