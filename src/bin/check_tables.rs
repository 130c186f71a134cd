//! Compare engine duty values with published reference checkpoints
//!
//! Prints a diff table for hand-checking the rate tables after an
//! update, plus the continuity gap of every bracket schedule.

use property_costs::duty::{self, brackets::continuity_gap, RateBracket};
use property_costs::Jurisdiction;

fn main() {
    env_logger::init();

    // Reference duty values at published checkpoints
    let reference: &[(Jurisdiction, f64, f64)] = &[
        (Jurisdiction::Nsw, 500_000.0, 16_912.00),
        (Jurisdiction::Nsw, 1_000_000.0, 39_412.00),
        (Jurisdiction::Vic, 500_000.0, 25_070.00),
        (Jurisdiction::Vic, 750_000.0, 40_070.00),
        (Jurisdiction::Qld, 350_000.0, 10_675.00),
        (Jurisdiction::Qld, 700_000.0, 24_525.00),
        (Jurisdiction::Sa, 400_000.0, 16_330.00),
        (Jurisdiction::Wa, 500_000.0, 17_765.00),
        (Jurisdiction::Tas, 500_000.0, 18_247.50),
        (Jurisdiction::Nt, 400_000.0, 16_514.31),
        (Jurisdiction::Nt, 600_000.0, 29_700.00),
        (Jurisdiction::Act, 450_000.0, 9_700.00),
    ];

    println!("Engine vs published reference values");
    println!("{:<6} {:<12} {:<14} {:<14} {:<12}", "State", "Price", "Engine", "Reference", "Diff");

    let mut worst: f64 = 0.0;
    for &(jurisdiction, price, expected) in reference {
        let engine = duty::stamp_duty(price, jurisdiction);
        let diff = engine - expected;
        worst = worst.max(diff.abs());
        println!(
            "{:<6} {:<12.0} {:<14.2} {:<14.2} {:<12.4}",
            jurisdiction.code(),
            price,
            engine,
            expected,
            diff
        );
    }
    println!("Worst deviation: {:.4}", worst);

    println!("\nBracket continuity (worst gap per schedule):");
    let tables: &[(&str, &[RateBracket])] = &[
        ("NSW", &duty::nsw::BRACKETS),
        ("VIC", &duty::vic::BRACKETS),
        ("VIC PPR", &duty::vic::PPR_BRACKETS),
        ("QLD", &duty::qld::BRACKETS),
        ("SA", &duty::sa::BRACKETS),
        ("WA", &duty::wa::BRACKETS),
        ("TAS", &duty::tas::BRACKETS),
        ("ACT", &duty::act::GENERAL_BRACKETS),
        ("ACT OO", &duty::act::OWNER_OCCUPIER_BRACKETS),
        ("ACT INV", &duty::act::INVESTOR_BRACKETS),
    ];
    for (name, table) in tables {
        println!("  {:<8} {:.9}", name, continuity_gap(table));
    }

    println!("\nRate tables effective {}", duty::tables_effective());
}
