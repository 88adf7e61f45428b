//! Decoder for Apple II Double Hi-Res (DHGR) color screen dumps.
//!
//! DHGR is the Apple IIe/IIc 16-color graphics mode. A screen dump (commonly
//! saved with an `.A2FC` extension) is a raw concatenation of the two 8 KiB
//! memory banks backing the mode, with no header:
//!
//! ```plain
//! .- A2FC screen dump -----------------------------.
//! | 0x0000..0x2000 | auxiliary bank ($2000-$3FFF)  |
//! | 0x2000..0x4000 | main bank      ($2000-$3FFF)  |
//! `------------------------------------------------`
//! ```
//!
//! Bytes beyond 0x4000 are ignored. Decoding produces a fixed 560×384 RGB24
//! raster: each of the 192 scan lines carries 140 color samples, replicated
//! 4× horizontally and 2× vertically to match the display aspect of the
//! original mode.
//!
//! # Scan-line addressing
//!
//! Scan lines are not stored contiguously. Both banks use the classic HGR
//! interleave: line `r` starts at
//!
//! ```plain
//! (r % 8) * 0x0400 + ((r % 64) / 8) * 0x0080 + (r / 64) * 0x0028
//! ```
//!
//! so consecutive lines sit 1 KiB apart, 8-line groups are folded back by
//! 0x80 steps, and the three 64-line thirds of the screen are offset by
//! 0x28. The formula is a hardware memory-map artifact and is reproduced
//! literally, not derived.
//!
//! # Pixel packing
//!
//! Each line is 40 bytes per bank, read as 20 aligned groups of 2 aux + 2
//! main bytes. The hardware shifts out the low 7 bits of alternating
//! aux/main bytes, so each group carries seven 4-bit pixel patterns that
//! straddle byte boundaries:
//!
//! ```plain
//! .- 4-byte group (bit 7 of every byte unused) ----------.
//! |            |  6  5  4  3  2  1  0  (bit)             |
//! |------------+-----------------------------------------|
//! | aux[n]     |  p1[2:0]      | p0[3:0]                 |
//! | main[n]    |  p3[1:0]  | p2[3:0]            | p1[3]  |
//! | aux[n+1]   |  p5[0] | p4[3:0]           | p3[3:2]    |
//! | main[n+1]  |  p6[3:0]            | p5[3:1]           |
//! `------------------------------------------------------`
//! ```
//!
//! The serial shift order leaves each pattern bit-mirrored relative to the
//! palette index, so every pattern goes through [`utils::palette_index`]
//! before the lookup in [`consts::PALETTE`].
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod decode;
pub mod utils;

pub use decode::DhgrDecodeContext;

pub mod consts {
    /// Visible scan lines of the DHGR mode.
    pub const LINES: usize = 192;

    /// Color samples per scan line (seven per 4-byte group, 20 groups).
    pub const SAMPLES_PER_LINE: usize = 140;

    /// Bytes per scan line, per bank.
    pub const BYTES_PER_LINE: usize = 40;

    /// Size of one memory bank ($2000-$3FFF).
    pub const BANK_LEN: usize = 0x2000;

    /// Minimum screen dump size: auxiliary bank followed by main bank.
    pub const SNAPSHOT_LEN: usize = 2 * BANK_LEN;

    /// Output raster width: 140 samples replicated 4×.
    pub const WIDTH: usize = 4 * SAMPLES_PER_LINE;

    /// Output raster height: 192 lines replicated 2×.
    pub const HEIGHT: usize = 2 * LINES;

    /// RGB24, no alpha, no row padding.
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Bytes per output raster row.
    pub const ROW_STRIDE: usize = WIDTH * BYTES_PER_PIXEL;

    /// Total output raster size in bytes (560 × 384 × 3).
    pub const RASTER_LEN: usize = ROW_STRIDE * HEIGHT;

    /// The fixed 16-entry DHGR palette, indexed by decoded color index.
    ///
    /// The mode has no programmable palette; these are the conventional RGB
    /// renditions of the 16 hardware colors.
    pub const PALETTE: [[u8; 3]; 16] = [
        [0, 0, 0],       // 0 - black
        [206, 15, 49],   // 1 - magenta
        [156, 99, 1],    // 2 - brown
        [255, 70, 0],    // 3 - orange
        [0, 99, 49],     // 4 - dark green
        [82, 82, 82],    // 5 - gray 1
        [0, 221, 2],     // 6 - green
        [255, 253, 4],   // 7 - yellow
        [2, 19, 156],    // 8 - dark blue
        [206, 49, 206],  // 9 - violet
        [173, 173, 173], // A - gray 2
        [255, 156, 156], // B - pink
        [49, 49, 255],   // C - blue
        [99, 156, 255],  // D - light blue
        [49, 253, 156],  // E - aqua
        [255, 255, 255], // F - white
    ];
}
