use proptest::prelude::*;
use swipe_core::similarity::calculate_similarity;

proptest! {
    #[test]
    fn scores_stay_in_unit_range(a in "[A-Z ]{0,12}", b in "[A-Z ]{0,12}") {
        let s = calculate_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "{} vs {} = {}", a, b, s);
    }

    #[test]
    fn single_letter_score_is_exact(letter in "[A-Z]", key in "[A-Z]{1,8}") {
        let expected = if key.starts_with(letter.as_str()) { 0.9 } else { 0.0 };
        prop_assert_eq!(calculate_similarity(&letter, &key), expected);
    }

    #[test]
    fn case_does_not_change_the_score(a in "[a-z]{1,10}", b in "[a-z]{1,10}") {
        prop_assert_eq!(
            calculate_similarity(&a, &b),
            calculate_similarity(&a.to_uppercase(), &b.to_uppercase())
        );
    }

    #[test]
    fn identical_keys_reach_the_maximum(key in "[A-Z]{2,10}") {
        prop_assert!((calculate_similarity(&key, &key) - 0.76).abs() < 1e-9);
    }
}
