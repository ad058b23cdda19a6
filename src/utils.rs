/// Utility functions
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ProductDate;

/// Sentinel-1 naming convention: `S1A`/`S1B`, anything, then an
/// underscore-prefixed 8-digit acquisition date.
static TITLE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"S1[AB].*?_(\d{4})(\d{2})(\d{2})").expect("title date pattern is valid")
});

/// Pull the acquisition date out of a product title.
///
/// Digit groups are returned verbatim without calendar validation; any
/// title that does not match the naming convention yields the sentinel
/// date. Never fails.
pub fn extract_date(title: &str) -> ProductDate {
    match TITLE_DATE.captures(title) {
        Some(caps) => ProductDate::new(&caps[1], &caps[2], &caps[3]),
        None => ProductDate::sentinel(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_date_from_real_title() {
        let title = "S1A_IW_SLC__1SDV_20210501T120000_20210501T120030_037698_0472AE_5A12";
        assert_eq!(extract_date(title), ProductDate::new("2021", "05", "01"));
    }

    #[test]
    fn s1b_titles_match_too() {
        let title = "S1B_IW_GRDH_1SDV_20190214T000000";
        assert_eq!(extract_date(title), ProductDate::new("2019", "02", "14"));
    }

    #[test]
    fn first_dated_group_wins() {
        // Non-greedy match stops at the first 8-digit run after an underscore.
        let title = "S1A_IW_SLC__1SDV_20210501T000000_20211231T000000";
        assert_eq!(extract_date(title), ProductDate::new("2021", "05", "01"));
    }

    #[test]
    fn digits_are_taken_verbatim() {
        // No calendar validation: month 99 passes through untouched.
        let title = "S1A_X_19999913_rest";
        assert_eq!(extract_date(title), ProductDate::new("1999", "99", "13"));
    }

    #[test]
    fn unmatched_title_yields_sentinel() {
        assert_eq!(extract_date("S2A_MSIL1C_20210501"), ProductDate::sentinel());
        assert_eq!(extract_date("not a product"), ProductDate::sentinel());
        assert_eq!(extract_date(""), ProductDate::sentinel());
        // Date run present but no underscore prefix.
        assert_eq!(extract_date("S1A20210501"), ProductDate::sentinel());
    }
}
