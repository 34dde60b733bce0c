use crate::error::{Error, Result};

/// Copies `rows` packed rows of `row_size` bytes from `source` into `dest`,
/// starting each row `row_pitch` bytes after the previous one.
///
/// Graphics backends often require row pitches aligned to 256 bytes or more;
/// the bytes between rows are not written.
pub fn copy_with_stride(
    source: &[u8],
    dest: &mut [u8],
    row_size: usize,
    rows: usize,
    row_pitch: usize,
) -> Result<()> {
    if rows == 0 || row_size == 0 {
        return Ok(());
    }

    if row_pitch < row_size {
        return Err(Error::StrideTooSmall {
            row_pitch,
            row_size,
        });
    }

    let required = (rows - 1) * row_pitch + row_size;
    if dest.len() < required {
        return Err(Error::DestinationTooSmall {
            len: dest.len(),
            required,
        });
    }

    debug_assert!(source.len() >= rows * row_size);
    for (row, src) in source.chunks_exact(row_size).take(rows).enumerate() {
        let start = row * row_pitch;
        dest[start..start + row_size].copy_from_slice(src);
    }
    Ok(())
}
