pub const MISMATCHES_CMD: &str = "mismatches-by-length";
pub const SOFTCLIP_CMD: &str = "softclip-distribution";

pub const READ_LENGTH_LABEL: &str = "ReadLength";
pub const NM_LABEL: &str = "NM";
pub const SOFTCLIP_LABEL: &str = "SoftClips";
pub const READ_COUNTS_LABEL: &str = "ReadCounts";
