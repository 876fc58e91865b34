/// 64-bit FNV-1a, used for stable body fingerprints.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Lowercase hex fingerprint of `bytes`.
pub(crate) fn fingerprint_hex(bytes: &[u8]) -> String {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(bytes);
    format!("{:016x}", h.finish())
}

/// Format a coordinate for markup output.
///
/// At most three decimals, trailing zeros trimmed, never `-0`. Keeps serialized documents
/// byte-stable across platforms.
pub(crate) fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Round half away from zero to a whole percentage in `[0, 100]`.
pub(crate) fn percent(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 || !part.is_finite() {
        return 0;
    }
    ((part / whole) * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
