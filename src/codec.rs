//! Raw byte encoding of hashes
//!
//! A hash is written as its 32 bytes in natural order: no length prefix,
//! no compression and no endianness conversion.

use crate::model::{Hash, HASH_LEN};
use crate::Result;
use std::io::{Read, Write};

/// Write a hash's raw bytes to `w`
pub fn write_hash<W: Write + ?Sized>(w: &mut W, hash: &Hash) -> Result<()> {
    w.write_all(hash.as_bytes())?;
    Ok(())
}

/// Read exactly one hash worth of raw bytes from `r`
pub fn read_hash<R: Read + ?Sized>(r: &mut R) -> Result<Hash> {
    let mut buf = [0u8; HASH_LEN];
    r.read_exact(&mut buf)?;
    Ok(Hash::from_bytes(buf))
}

/// Split a buffer of concatenated raw hashes into individual hashes
pub fn read_hashes(data: &[u8]) -> Result<Vec<Hash>> {
    if data.len() % HASH_LEN != 0 {
        return Err(crate::Error::InvalidHash(format!(
            "input length {} is not a multiple of {}",
            data.len(),
            HASH_LEN
        )));
    }
    data.chunks_exact(HASH_LEN).map(Hash::from_slice).collect()
}
