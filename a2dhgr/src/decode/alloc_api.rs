use crate::{
    consts::{RASTER_LEN, SNAPSHOT_LEN},
    decode::DhgrDecodeContext,
};
use alloc::vec::Vec;
use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum DecodeToVecError {
    #[snafu(display("screen dump is {len} bytes, need at least {SNAPSHOT_LEN}"))]
    InputTooShort { len: usize },
}

impl DhgrDecodeContext {
    /// Decodes a DHGR screen dump, appending the 560×384 RGB24 raster to
    /// `w`.
    pub fn decode_to_vec(data: &[u8], w: &mut Vec<u8>) -> Result<(), DecodeToVecError> {
        let state = DhgrDecodeContext::new();
        state.decode_to_vec_with_state(data, w)
    }

    /// Decodes a DHGR screen dump with this context's address table,
    /// appending the raster to `w`.
    ///
    /// On failure `w` is left untouched.
    pub fn decode_to_vec_with_state(
        &self,
        data: &[u8],
        w: &mut Vec<u8>,
    ) -> Result<(), DecodeToVecError> {
        if data.len() < SNAPSHOT_LEN {
            return Err(DecodeToVecError::InputTooShort { len: data.len() });
        }

        let start = w.len();
        w.resize(start + RASTER_LEN, 0);
        // Lengths are validated above, the slice decode cannot fail.
        let written = self
            .decode_to_slice(data, &mut w[start..])
            .unwrap_or_else(|_| unreachable!());
        debug_assert_eq!(written, RASTER_LEN);

        Ok(())
    }
}
