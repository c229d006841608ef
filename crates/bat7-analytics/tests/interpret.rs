mod common;

use bat7_analytics::aggregate;
use bat7_analytics::interpret::{assess_levels, interpret_aptitude, interpret_statistics};
use bat7_aptitudes::banding::{CatalogLevel, PerformanceBand};
use bat7_aptitudes::get_aptitude;
use common::{code, record};

#[test]
fn four_way_band_picks_catalog_variant() {
    let verbal = get_aptitude("V").unwrap();

    let high = interpret_aptitude(&code("V"), 60).unwrap();
    assert_eq!(high.level, PerformanceBand::MediumHigh);
    assert_eq!(high.characteristics, verbal.high_characteristics().to_vec());

    let low = interpret_aptitude(&code("V"), 30).unwrap();
    assert_eq!(low.level, PerformanceBand::MediumLow);
    assert_eq!(low.characteristics, verbal.low_characteristics().to_vec());
}

#[test]
fn unknown_code_has_no_interpretation() {
    assert!(interpret_aptitude(&code("ZZ"), 90).is_none());
}

#[test]
fn statistics_interpretation_skips_gaps() {
    let stats = aggregate(&[
        record("V", 20, Some(80), 0),
        record("N", 15, None, 0),
        record("ZZ", 3, Some(10), 0),
    ]);
    let interpretations = interpret_statistics(&stats);
    assert_eq!(interpretations.len(), 1);
    let verbal = &interpretations[&code("V")];
    assert_eq!(verbal.level, PerformanceBand::High);
    assert_eq!(verbal.percentile, 80);
    assert_eq!(verbal.name, "Verbal Aptitude");
}

#[test]
fn percentile_70_reads_differently_under_each_scheme() {
    let stats = aggregate(&[record("R", 18, Some(70), 0)]);

    let interpretations = interpret_statistics(&stats);
    assert_eq!(interpretations[&code("R")].level, PerformanceBand::MediumHigh);

    let profile = assess_levels(&stats);
    assert_eq!(profile.strengths.len(), 1);
    assert_eq!(profile.strengths[0].level, CatalogLevel::High);
    assert!(profile.weaknesses.is_empty());
}

#[test]
fn two_way_profile_splits_at_70() {
    let stats = aggregate(&[
        record("V", 20, Some(85), 0),
        record("N", 15, Some(69), 0),
        record("E", 12, Some(40), 0),
        record("O", 30, None, 0),
    ]);
    let profile = assess_levels(&stats);

    let strengths: Vec<_> = profile.strengths.iter().map(|a| a.code.as_str()).collect();
    let weaknesses: Vec<_> = profile.weaknesses.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(strengths, vec!["V"]);
    assert_eq!(weaknesses, vec!["E", "N"]);

    let spatial = get_aptitude("E").unwrap();
    assert_eq!(
        profile.weaknesses[0].characteristics,
        spatial.low_characteristics().to_vec()
    );
}
