//! Exact integer square roots.

/// Returns the largest `r` such that `r * r <= n`.
pub fn floor_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // 2^ceil(bits / 2) is always >= sqrt(n), so Newton's iteration descends monotonically from it.
    let bits = u64::BITS - n.leading_zeros();
    let mut x = 1u64 << bits.div_ceil(2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Returns the smallest `u` such that `u * u >= n`.
pub fn ceil_sqrt(n: u64) -> u64 {
    let root = floor_sqrt(n);
    if root * root == n {
        root
    } else {
        root + 1
    }
}
