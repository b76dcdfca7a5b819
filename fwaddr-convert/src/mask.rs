//! Dotted-decimal subnet mask to CIDR prefix length lookup.

use serde::{Deserialize, Serialize};

/// Prefix length used when a mask is not in the mask table.
pub const FALLBACK_PREFIX_LEN: u8 = 32;

/// All 33 contiguous IPv4 netmasks, longest prefix first.
const MASK_TABLE: [(&str, u8); 33] = [
    ("255.255.255.255", 32),
    ("255.255.255.254", 31),
    ("255.255.255.252", 30),
    ("255.255.255.248", 29),
    ("255.255.255.240", 28),
    ("255.255.255.224", 27),
    ("255.255.255.192", 26),
    ("255.255.255.128", 25),
    ("255.255.255.0", 24),
    ("255.255.254.0", 23),
    ("255.255.252.0", 22),
    ("255.255.248.0", 21),
    ("255.255.240.0", 20),
    ("255.255.224.0", 19),
    ("255.255.192.0", 18),
    ("255.255.128.0", 17),
    ("255.255.0.0", 16),
    ("255.254.0.0", 15),
    ("255.252.0.0", 14),
    ("255.248.0.0", 13),
    ("255.240.0.0", 12),
    ("255.224.0.0", 11),
    ("255.192.0.0", 10),
    ("255.128.0.0", 9),
    ("255.0.0.0", 8),
    ("254.0.0.0", 7),
    ("252.0.0.0", 6),
    ("248.0.0.0", 5),
    ("240.0.0.0", 4),
    ("224.0.0.0", 3),
    ("192.0.0.0", 2),
    ("128.0.0.0", 1),
    ("0.0.0.0", 0),
];

/// What to do with a mask string that is not in the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskPolicy {
    /// Treat the address as a single host (`/32`) and keep going.
    #[default]
    Host,
    /// Reject the row.
    Strict,
}

/// Look up the prefix length for a dotted-decimal mask.
///
/// Matching is exact: `"255.255.255.0 "` or `"/24"` are not recognised.
pub fn cidr_of(mask: &str) -> Option<u8> {
    MASK_TABLE
        .iter()
        .find(|(dotted, _)| *dotted == mask)
        .map(|(_, len)| *len)
}

/// Render the `/NN` suffix used in address object names, falling back to `/32`.
pub fn cidr_suffix(mask: &str) -> String {
    format!("/{}", cidr_of(mask).unwrap_or(FALLBACK_PREFIX_LEN))
}
