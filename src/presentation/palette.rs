// Device colour palette - stable key -> colour mapping for chart consumers

pub const PALETTE: [&str; 12] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899",
    "#14B8A6", "#F97316", "#6366F1", "#84CC16", "#06B6D4", "#A855F7",
];

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Same key, same colour, across requests and restarts.
pub fn color_for(key: &str) -> &'static str {
    PALETTE[(fnv1a(key.as_bytes()) % PALETTE.len() as u64) as usize]
}

/// 64-bit FNV-1a. `DefaultHasher` is not stable across releases, so it can't be used here.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME)
    })
}
