//! Case-insensitive substring matching for card names
//!
//! Both operands go through Unicode default case folding (no locale
//! tailoring), so results are identical on every host. `ß` folds to `ss`,
//! final sigma `ς` folds to `σ`, and a Turkish dotted capital `İ` folds
//! to `i̇`, not `i`.

use caseless::default_case_fold_str;

/// Whether `haystack` contains `needle`, ignoring case
///
/// An empty needle is contained in every haystack.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    // Folding pure ASCII is ASCII lowercasing, so skip the allocation
    if haystack.is_ascii() && needle.is_ascii() {
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }

    default_case_fold_str(haystack).contains(&default_case_fold_str(needle))
}
