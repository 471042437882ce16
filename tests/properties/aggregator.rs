//! Property tests for the overall status verdict.

use proptest::prelude::*;

use site_health::{overall_status, CheckStatus, StatusCounts};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: two or more critical results always make the site critical.
    #[test]
    fn property_two_criticals_are_critical(
        critical in 2usize..50,
        recommended in 0usize..50,
        good in 0usize..200,
    ) {
        let counts = StatusCounts::new(critical, recommended, good);
        prop_assert_eq!(overall_status(&counts), Some(CheckStatus::Critical));
    }

    /// PROPERTY: below two criticals, the verdict depends only on the good share.
    #[test]
    fn property_good_share_decides_verdict(
        critical in 0usize..2,
        recommended in 0usize..50,
        good in 0usize..200,
    ) {
        let counts = StatusCounts::new(critical, recommended, good);
        prop_assume!(counts.total > 0);

        let expected = if good * 100 >= 80 * counts.total {
            CheckStatus::Good
        } else {
            CheckStatus::Recommended
        };
        prop_assert_eq!(overall_status(&counts), Some(expected));
    }

    /// PROPERTY: adding a good result never makes a non-critical verdict worse.
    #[test]
    fn property_more_good_never_worse(
        critical in 0usize..2,
        recommended in 0usize..50,
        good in 0usize..200,
    ) {
        let before = overall_status(&StatusCounts::new(critical, recommended, good));
        let after = overall_status(&StatusCounts::new(critical, recommended, good + 1));

        if before == Some(CheckStatus::Good) {
            prop_assert_eq!(after, Some(CheckStatus::Good));
        }
    }
}

#[test]
fn no_results_has_no_verdict() {
    assert_eq!(overall_status(&StatusCounts::new(0, 0, 0)), None);
}
