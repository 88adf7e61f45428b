use crate::consts::{BANK_LEN, BYTES_PER_LINE, LINES};

/// Computes the byte offset within a bank where scan line `line` starts.
///
/// This is the HGR/DHGR hardware interleave: 8-line strides of 0x400, folded
/// into 8-line groups 0x80 apart, in three 64-line thirds 0x28 apart. Valid
/// for `line` in `0..192`.
#[inline]
pub const fn line_base_offset(line: usize) -> usize {
    let line_of_eight = line % 8;
    let group_of_eight = (line % 64) / 8;
    let group_of_sixty_four = line / 64;

    line_of_eight * 0x0400 + group_of_eight * 0x0080 + group_of_sixty_four * 0x0028
}

/// Converts an extracted 4-bit pixel pattern into its palette index.
///
/// The video shift registers emit pixel bits serially, low bit first, so the
/// pattern sliced out of the byte stream is bit-mirrored relative to the
/// logical color number: reversing the byte and keeping the top nibble of
/// the result yields the index into [`crate::consts::PALETTE`].
#[inline]
pub const fn palette_index(pattern: u8) -> u8 {
    pattern.reverse_bits() >> 4
}

// Every line's 40 bytes fit inside the bank.
const _: () = assert!(line_base_offset(LINES - 1) + BYTES_PER_LINE <= BANK_LEN);
