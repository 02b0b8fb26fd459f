//! Raw limb persistence.
//!
//! Layout: face length as a little-endian `u32`, then each limb as a
//! little-endian `u64`.

use std::io::{self, Read, Write};

use aligned_vec::avec;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::bitset::{Bitset, Limbs};
use crate::constants::CACHE_LINE_SIZE;

impl Bitset {
    /// Writes the face length and limbs to `writer`.
    ///
    /// # Returns
    ///
    /// `io::ErrorKind::InvalidInput` if the face length does not fit in a `u32`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let face_length = u32::try_from(self.face_length()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("face length {} does not fit in u32", self.face_length()),
            )
        })?;

        writer.write_u32::<LittleEndian>(face_length)?;
        for &limb in self.limbs() {
            writer.write_u64::<LittleEndian>(limb)?;
        }
        Ok(())
    }

    /// Reads a bitset written by [`Bitset::write_to`].
    ///
    /// Limbs are read one at a time, so the buffer only grows with data that
    /// actually arrives; a short stream fails with `UnexpectedEof`.
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let face_length = reader.read_u32::<LittleEndian>()? as usize;
        let mut limbs = Limbs::new(CACHE_LINE_SIZE);
        for _ in 0..face_length {
            limbs.push(reader.read_u64::<LittleEndian>()?);
        }
        Ok(Bitset::from_aligned_limbs(limbs))
    }

    /// Reads a bitset written by [`Bitset::write_to`] into `self`.
    ///
    /// # Returns
    ///
    /// `io::ErrorKind::InvalidData` if the stored face length differs from
    /// `self.face_length()`. `self` is unchanged on any error.
    pub fn read_limbs_into<R: Read>(&mut self, reader: &mut R) -> io::Result<()> {
        let face_length = reader.read_u32::<LittleEndian>()? as usize;
        if face_length != self.face_length() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "stored face length {face_length} does not match {}",
                    self.face_length()
                ),
            ));
        }
        let mut scratch = avec![[CACHE_LINE_SIZE]|0u64; face_length];
        reader.read_u64_into::<LittleEndian>(&mut scratch)?;
        self.limbs_mut().copy_from_slice(&scratch);
        Ok(())
    }
}
