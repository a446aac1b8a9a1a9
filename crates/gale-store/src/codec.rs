//! Binary encode/decode for a single field.
//!
//! All integers and floats are little-endian. Strings are prefixed with a
//! `u32` byte length.

use std::io::{Read, Write};

use gale_grid::GridField;

use crate::error::StorageError;
use crate::hash::values_hash;
use crate::{FORMAT_VERSION, MAGIC};

/// Longest field name accepted by [`decode_field`].
const MAX_NAME_LEN: usize = 256;
const PREALLOC_LIMIT: usize = 1 << 16;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), StorageError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), StorageError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), StorageError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), StorageError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> Result<(), StorageError> {
    write_u32_le(w, s.len() as u32)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, StorageError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, StorageError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, StorageError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, StorageError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string of at most `max_len` bytes.
pub fn read_length_prefixed_str(r: &mut dyn Read, max_len: usize) -> Result<String, StorageError> {
    let len = read_u32_le(r)? as usize;
    if len > max_len {
        return Err(StorageError::Malformed {
            detail: format!("string length {len} exceeds {max_len}"),
        });
    }
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| StorageError::Malformed {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

// ── Field encode/decode ─────────────────────────────────────────

/// Encode `field` under `name`.
pub fn encode_field(w: &mut dyn Write, name: &str, field: &GridField) -> Result<(), StorageError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_length_prefixed_str(w, name)?;
    write_u32_le(w, field.n() as u32)?;
    for &v in field.as_slice() {
        write_f64_le(w, v)?;
    }
    write_u64_le(w, values_hash(field.n(), field.as_slice()))?;
    Ok(())
}

/// Encode `field` into a fresh byte vector.
pub fn encode_field_to_vec(name: &str, field: &GridField) -> Result<Vec<u8>, StorageError> {
    let side = field.side();
    let mut buf = Vec::with_capacity(MAGIC.len() + 1 + 4 + name.len() + 4 + side * side * 8 + 8);
    encode_field(&mut buf, name, field)?;
    Ok(buf)
}

/// Decode one field, returning its stored name and data.
///
/// The whole field is read and its checksum verified before anything is
/// returned.
pub fn decode_field(r: &mut dyn Read) -> Result<(String, GridField), StorageError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(StorageError::InvalidMagic);
    }

    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion { found: version });
    }

    let name = read_length_prefixed_str(r, MAX_NAME_LEN)?;

    let n = read_u32_le(r)? as usize;
    if n == 0 || n > GridField::MAX_N {
        return Err(StorageError::Malformed {
            detail: format!("grid size {n} out of range"),
        });
    }
    let side = n + 2;
    // Grow with the data actually read; the header alone is untrusted.
    let mut values = Vec::with_capacity((side * side).min(PREALLOC_LIMIT));
    for _ in 0..side * side {
        values.push(read_f64_le(r)?);
    }

    let stored = read_u64_le(r)?;
    let computed = values_hash(n, &values);
    if stored != computed {
        return Err(StorageError::ChecksumMismatch { stored, computed });
    }

    let field = GridField::from_raw(n, values)?;
    Ok((name, field))
}
