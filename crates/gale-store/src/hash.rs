//! FNV-1a checksum over field values.

use gale_grid::GridField;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Hash every value of `field` (halo included) by its bit pattern.
///
/// The interior size is folded in first, so equal data on differently
/// sized grids hashes differently.
pub fn field_hash(field: &GridField) -> u64 {
    values_hash(field.n(), field.as_slice())
}

pub(crate) fn values_hash(n: usize, values: &[f64]) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, n as u64);
    for &v in values {
        hash = fnv1a_u64(hash, v.to_bits());
    }
    hash
}
