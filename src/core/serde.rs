/*!
 * Serde Helper Functions
 * Skip-serializing predicates for `#[serde(skip_serializing_if = "...")]`
 */

/// Skip serializing if value is zero
#[inline]
pub const fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

/// Skip serializing if value is zero
#[inline]
pub const fn is_zero_usize(value: &usize) -> bool {
    *value == 0
}
