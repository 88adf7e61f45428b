/// Slices the seven 4-bit pixel patterns out of one aligned 4-byte group
/// (2 auxiliary-bank bytes, 2 main-bank bytes).
///
/// Bit 7 of every source byte is unused; the remaining 28 bits split into
/// seven patterns in aux0, main0, aux1, main1 shift order, straddling byte
/// boundaries. The patterns are in shift order, not palette order; callers
/// apply [`crate::utils::palette_index`] before the palette lookup.
#[inline(always)]
pub(crate) const fn group_patterns(aux0: u8, aux1: u8, main0: u8, main1: u8) -> [u8; 7] {
    [
        aux0 & 0x0F,
        ((main0 & 0x01) << 3) | ((aux0 & 0x70) >> 4),
        (main0 & 0x1E) >> 1,
        ((aux1 & 0x03) << 2) | ((main0 & 0x60) >> 5),
        (aux1 & 0x3C) >> 2,
        ((main1 & 0x07) << 1) | ((aux1 & 0x40) >> 6),
        (main1 & 0x78) >> 3,
    ]
}
