use crate::{
    consts::{
        BANK_LEN, BYTES_PER_LINE, LINES, PALETTE, RASTER_LEN, ROW_STRIDE, SNAPSHOT_LEN,
    },
    utils::{line_base_offset, palette_index},
};
use itertools::Itertools;
use snafu::{ensure, Snafu};

#[cfg(feature = "alloc")]
mod alloc_api;
#[cfg(feature = "alloc")]
pub use alloc_api::*;

mod ops;

/// Decode state: the precomputed scan-line address table.
///
/// The table depends on no input data, so a single context can be shared
/// process-wide ([`new`](Self::new) is `const`) or rebuilt per decode, both
/// are cheap. The context is never written after construction.
pub struct DhgrDecodeContext {
    base_offsets: [usize; LINES],
}

impl DhgrDecodeContext {
    pub const fn new() -> Self {
        let mut base_offsets = [0; LINES];
        let mut line = 0;
        while line < LINES {
            base_offsets[line] = line_base_offset(line);
            line += 1;
        }

        Self { base_offsets }
    }
}

impl Default for DhgrDecodeContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Snafu)]
#[snafu(module)]
pub enum DecodeError {
    #[snafu(display("screen dump is {len} bytes, need at least {SNAPSHOT_LEN}"))]
    InputTooShort { len: usize },
    #[snafu(display("output buffer is {len} bytes, need {RASTER_LEN}"))]
    OutputTooSmall { len: usize },
}

impl DhgrDecodeContext {
    /// Decodes a DHGR screen dump into a caller-provided RGB24 buffer.
    ///
    /// Returns the number of bytes written, which is always
    /// [`RASTER_LEN`](crate::consts::RASTER_LEN) on success. The raster is
    /// row-major, top row first, 560×384, 3 bytes per pixel.
    pub fn decode(data: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
        let state = DhgrDecodeContext::new();
        state.decode_to_slice(data, output)
    }

    /// Decodes a DHGR screen dump into a caller-provided RGB24 buffer,
    /// reusing this context's address table.
    ///
    /// Fails before touching either buffer if the input is shorter than the
    /// two-bank minimum or the output cannot hold the full raster; on
    /// failure no bytes are written. Input bytes past 0x4000 are ignored.
    pub fn decode_to_slice(&self, data: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
        ensure!(
            data.len() >= SNAPSHOT_LEN,
            decode_error::InputTooShortSnafu { len: data.len() }
        );
        ensure!(
            output.len() >= RASTER_LEN,
            decode_error::OutputTooSmallSnafu { len: output.len() }
        );

        let (aux, main) = data.split_at(BANK_LEN);
        let main = &main[..BANK_LEN];
        for line in 0..LINES {
            self.decode_line(line, aux, main, output);
        }

        Ok(RASTER_LEN)
    }

    /// Decodes one scan line into output rows `2 * line` and `2 * line + 1`.
    fn decode_line(&self, line: usize, aux: &[u8], main: &[u8], output: &mut [u8]) {
        let base = self.base_offsets[line];
        let aux_line = &aux[base..base + BYTES_PER_LINE];
        let main_line = &main[base..base + BYTES_PER_LINE];

        let row_start = 2 * line * ROW_STRIDE;
        let mut out_idx = row_start;
        for ((aux0, aux1), (main0, main1)) in aux_line
            .iter()
            .copied()
            .tuples()
            .zip(main_line.iter().copied().tuples())
        {
            for pattern in ops::group_patterns(aux0, aux1, main0, main1) {
                let [r, g, b] = PALETTE[usize::from(palette_index(pattern))];
                // One color sample covers four output columns.
                for _ in 0..4 {
                    output[out_idx] = r;
                    output[out_idx + 1] = g;
                    output[out_idx + 2] = b;
                    out_idx += 3;
                }
            }
        }

        // Line doubling.
        output.copy_within(row_start..row_start + ROW_STRIDE, row_start + ROW_STRIDE);
    }
}
