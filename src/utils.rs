//! Const-evaluable helpers for comparing table keys and sizing probe budgets.
//!
//! Trait methods cannot run in `const` context, so tables keyed by strings or
//! byte strings need free `const fn`s to be checked by [`assert_sorted!`].
//!
//! [`assert_sorted!`]: crate::assert_sorted

use std::cmp::Ordering;

/// Lexicographic byte comparison usable in `const` context.
pub const fn const_bytes_cmp(a: &[u8], b: &[u8]) -> Ordering {
    let len = if a.len() < b.len() { a.len() } else { b.len() };
    let mut i = 0;
    while i < len {
        if a[i] < b[i] {
            return Ordering::Less;
        }
        if a[i] > b[i] {
            return Ordering::Greater;
        }
        i += 1;
    }
    if a.len() < b.len() {
        Ordering::Less
    } else if a.len() > b.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// String comparison usable in `const` context. Agrees with `str::cmp`.
pub const fn const_str_cmp(a: &str, b: &str) -> Ordering {
    const_bytes_cmp(a.as_bytes(), b.as_bytes())
}

/// `a <= b` for strings, in `const` context.
pub const fn const_str_le(a: &str, b: &str) -> bool {
    !matches!(const_str_cmp(a, b), Ordering::Greater)
}

/// [`const_str_le`] over table elements, for `[&str; N]` tables.
pub const fn const_str_le_ref(a: &&str, b: &&str) -> bool {
    const_str_le(a, b)
}

/// Worst-case comparator calls for a bisection over `len` entries:
/// `floor(log2(len)) + 1`, zero for an empty table.
pub const fn max_probes(len: usize) -> u32 {
    if len == 0 {
        0
    } else {
        usize::BITS - len.leading_zeros()
    }
}

/// `ceil(log2(n))`, with `ceil_log2(0) == ceil_log2(1) == 0`.
pub const fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}
