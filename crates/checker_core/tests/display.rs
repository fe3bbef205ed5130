use checker_core::{classify_level, format_similarity, LevelSeverity};

#[test]
fn similarity_formats_with_two_decimals() {
    assert_eq!(format_similarity(0.8765), "87.65%");
    assert_eq!(format_similarity(1.0), "100.00%");
    assert_eq!(format_similarity(0.0), "0.00%");
    assert_eq!(format_similarity(0.42), "42.00%");
}

#[test]
fn known_levels_map_to_their_severity() {
    assert_eq!(classify_level("Tidak Plagiarisme"), LevelSeverity::Safe);
    assert_eq!(classify_level("Plagiarisme Ringan"), LevelSeverity::Low);
    assert_eq!(classify_level("Plagiarisme Sedang"), LevelSeverity::Medium);
    assert_eq!(classify_level("Plagiarisme Tinggi"), LevelSeverity::High);
    assert_eq!(
        classify_level("Plagiarisme Sangat Tinggi"),
        LevelSeverity::Critical
    );
    assert_eq!(classify_level("Plagiarisme Berat"), LevelSeverity::Critical);
}

#[test]
fn unknown_levels_fall_back_to_neutral() {
    assert_eq!(classify_level("unknown-label"), LevelSeverity::Neutral);
    assert_eq!(classify_level(""), LevelSeverity::Neutral);
}
