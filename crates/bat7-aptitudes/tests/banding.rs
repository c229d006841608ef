use bat7_aptitudes::banding::{
    CatalogLevel, PerformanceBand, band_four_way, band_two_way, is_weakness,
};

#[test]
fn four_way_boundaries() {
    assert_eq!(band_four_way(100), PerformanceBand::High);
    assert_eq!(band_four_way(75), PerformanceBand::High);
    assert_eq!(band_four_way(74), PerformanceBand::MediumHigh);
    assert_eq!(band_four_way(50), PerformanceBand::MediumHigh);
    assert_eq!(band_four_way(49), PerformanceBand::MediumLow);
    assert_eq!(band_four_way(25), PerformanceBand::MediumLow);
    assert_eq!(band_four_way(24), PerformanceBand::Low);
    assert_eq!(band_four_way(0), PerformanceBand::Low);
}

#[test]
fn two_way_boundaries() {
    assert_eq!(band_two_way(70), CatalogLevel::High);
    assert_eq!(band_two_way(69), CatalogLevel::Low);
    assert_eq!(band_two_way(0), CatalogLevel::Low);
    assert_eq!(band_two_way(100), CatalogLevel::High);
}

#[test]
fn percentile_75_is_high_under_both_schemes() {
    assert_eq!(band_four_way(75), PerformanceBand::High);
    assert_eq!(band_two_way(75), CatalogLevel::High);
}

#[test]
fn percentile_70_differs_between_schemes() {
    assert_eq!(band_four_way(70), PerformanceBand::MediumHigh);
    assert_eq!(band_two_way(70), CatalogLevel::High);
}

#[test]
fn schemes_disagree_between_50_and_69() {
    // Medium-High collapses to the catalog's "high" text, yet the two-way
    // rule calls the same percentile low.
    for pc in 50..70 {
        assert_eq!(band_four_way(pc).catalog_level(), CatalogLevel::High);
        assert_eq!(band_two_way(pc), CatalogLevel::Low);
    }
}

#[test]
fn catalog_level_collapses_four_bands() {
    assert_eq!(PerformanceBand::High.catalog_level(), CatalogLevel::High);
    assert_eq!(PerformanceBand::MediumHigh.catalog_level(), CatalogLevel::High);
    assert_eq!(PerformanceBand::MediumLow.catalog_level(), CatalogLevel::Low);
    assert_eq!(PerformanceBand::Low.catalog_level(), CatalogLevel::Low);
}

#[test]
fn weakness_threshold_is_inclusive() {
    assert!(is_weakness(25));
    assert!(is_weakness(0));
    assert!(!is_weakness(26));
}

#[test]
fn band_labels() {
    assert_eq!(PerformanceBand::MediumHigh.label(), "Medium-High");
    assert_eq!(PerformanceBand::MediumLow.label(), "Medium-Low");
    assert_eq!(CatalogLevel::Low.label(), "Low");
}
