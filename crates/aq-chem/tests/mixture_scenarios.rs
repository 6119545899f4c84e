//! End-to-end mixing scenarios for aq-chem.

use aq_chem::{
    ColorCategory, ReactionOutcome, Severity, Species, Substance, color_category, compute_mixture,
    describe_reaction, describe_status,
};
use aq_core::units::{liters, milliliters};

#[test]
fn lone_hydrochloric_acid() {
    // 0.1 M HCl, 100 mL, nothing else.
    let acid = Substance::new(Species::HCl, 0.1, milliliters(100.0)).unwrap();
    let none = Substance::none();

    let report = compute_mixture(&acid, &none);
    assert!((report.total_volume_liters() - 0.1).abs() < 1e-12);
    assert!((report.protons - 0.100_000_1).abs() < 1e-9);
    assert!((report.hydroxide - 1e-7).abs() < 1e-20);
    assert!((report.ph - 1.0).abs() < 1e-5);

    assert_eq!(color_category(report.ph), ColorCategory::Acid);
    let status = describe_status(report.ph, &acid, &none);
    assert_eq!(status.severity, Severity::Info);
    assert_eq!(status.text, "Acidic solution.");
    assert_eq!(describe_reaction(&acid, &none), ReactionOutcome::NoReaction);
}

#[test]
fn equal_moles_of_naoh_and_hcl_neutralize() {
    // 0.1 M NaOH, 50 mL against 0.1 M HCl, 50 mL: equal moles.
    let base = Substance::new(Species::NaOH, 0.1, milliliters(50.0)).unwrap();
    let acid = Substance::new(Species::HCl, 0.1, milliliters(50.0)).unwrap();

    let report = compute_mixture(&base, &acid);
    assert!((report.total_volume_liters() - 0.1).abs() < 1e-12);
    assert!((report.ph - 7.0).abs() < 1e-6);
    assert_eq!(color_category(report.ph), ColorCategory::Neutral);

    let status = describe_status(report.ph, &base, &acid);
    assert_eq!(status.severity, Severity::Info);
    assert_eq!(status.text, "Neutral solution.");

    match describe_reaction(&base, &acid) {
        ReactionOutcome::Neutralization { acid, base, salt } => {
            assert_eq!(acid, Species::HCl);
            assert_eq!(base, Species::NaOH);
            assert_eq!(salt, "NaCl");
        }
        other => panic!("expected neutralization, got {other:?}"),
    }
    assert_eq!(
        describe_reaction(&base, &acid).to_string(),
        "HCl + NaOH \u{2192} NaCl + H\u{2082}O"
    );
}

#[test]
fn unbalanced_neutralization_leaves_excess_base() {
    // Twice the moles of base: pOH of the excess sets the pH.
    let base = Substance::new(Species::KOH, 0.2, milliliters(50.0)).unwrap();
    let acid = Substance::new(Species::HCl, 0.1, milliliters(50.0)).unwrap();

    let report = compute_mixture(&base, &acid);
    assert!(report.ph > 7.0);
    assert_eq!(color_category(report.ph), ColorCategory::Base);

    let status = describe_status(report.ph, &base, &acid);
    assert_eq!(status.text, "Excess base after neutralization.");
}

#[test]
fn absurdly_concentrated_acid_warns() {
    // 1000 M in a milliliter: pH goes deeply negative.
    let acid = Substance::new(Species::HCl, 1000.0, milliliters(1.0)).unwrap();
    let none = Substance::none();

    let report = compute_mixture(&acid, &none);
    assert!(report.ph < 0.0);

    let status = describe_status(report.ph, &acid, &none);
    assert_eq!(status.severity, Severity::Warning);
    assert_eq!(status.text, "Unusually high acid concentration.");
}

#[test]
fn salt_in_water_is_an_inert_mixture() {
    let salt = Substance::new(Species::NaCl, 1.0, milliliters(100.0)).unwrap();
    let water = Substance::water(liters(0.1)).unwrap();

    let report = compute_mixture(&salt, &water);
    assert_eq!(report.ph, 7.0);
    assert_eq!(color_category(report.ph), ColorCategory::Neutral);
    assert_eq!(describe_reaction(&salt, &water), ReactionOutcome::InertMixture);
}

#[test]
fn two_empty_slots_read_as_neutral_water() {
    let report = compute_mixture(&Substance::none(), &Substance::none());
    assert_eq!(report.total_volume_liters(), 0.0);
    assert_eq!(report.protons, 1e-7);
    assert_eq!(report.hydroxide, 1e-7);
    assert_eq!(report.ph, 7.0);
    assert_eq!(
        describe_reaction(&Substance::none(), &Substance::none()),
        ReactionOutcome::NoReaction
    );
}
