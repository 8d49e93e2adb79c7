use super::*;

#[test]
fn reference_filenames() {
    assert_eq!(
        extract_timestamp("2024-03-15 143052.jpg"),
        "2024-03-15 14:30:52"
    );
    assert_eq!(extract_timestamp("obraz1.jpg"), UNKNOWN_TIMESTAMP);
}

#[test]
fn match_may_appear_anywhere() {
    assert_eq!(
        extract_timestamp("S2A_tile_2023-07-01 091500_rgb.png"),
        "2023-07-01 09:15:00"
    );
    assert_eq!(
        extract_timestamp("prefix-2021-12-31235959.tif"),
        "2021-12-31 23:59:59"
    );
}

#[test]
fn whitespace_between_date_and_time_is_optional_and_repeatable() {
    assert_eq!(
        extract_timestamp("2024-01-02\t \t010203.png"),
        "2024-01-02 01:02:03"
    );
    assert_eq!(
        extract_timestamp("2024-01-02010203"),
        "2024-01-02 01:02:03"
    );
}

#[test]
fn out_of_range_digits_pass_through() {
    assert_eq!(
        extract_timestamp("2024-99-99 999999.jpg"),
        "2024-99-99 99:99:99"
    );
}

#[test]
fn leftmost_match_wins_and_extra_digits_are_ignored() {
    assert_eq!(
        extract_timestamp("2020-01-01 0000001 2022-02-02 111111"),
        "2020-01-01 00:00:00"
    );
}

#[test]
fn near_misses_fall_back_to_sentinel() {
    for name in [
        "",
        "2024-03-15.jpg",
        "2024-03-15 14305.jpg",
        "24-03-15 143052.jpg",
        "2024/03/15 143052.jpg",
        "2024-03-15_143052.jpg",
        "２０２４-03-15 143052.jpg",
    ] {
        assert_eq!(extract_timestamp(name), UNKNOWN_TIMESTAMP, "{name:?}");
    }
}

#[test]
fn non_ascii_names_are_handled() {
    assert_eq!(
        extract_timestamp("zdjęcie 2024-05-06 070809 łódź.png"),
        "2024-05-06 07:08:09"
    );
}
