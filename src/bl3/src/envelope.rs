//! GVAS container codec for savegame and profile files.
//!
//! A save artifact is a `GVAS` header (versions, engine build, custom format
//! table, savegame type) followed by one length-prefixed payload. The payload
//! is obfuscated with a rolling XOR keyed by two fixed 32-byte tables, which
//! differ between savegames and profiles. All multi-byte integers are
//! little-endian.

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("bad magic; this is not a GVAS save file")]
    BadMagic,

    #[error("{0} trailing bytes after the payload")]
    TrailingData(usize),

    #[error("string field is not valid UTF-8")]
    BadString,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Which obfuscation tables apply to the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Savegame,
    Profile,
}

const SAVEGAME_PREFIX_MAGIC: [u8; 32] = [
    0x71, 0x34, 0x36, 0xB3, 0x56, 0x63, 0x25, 0x5F, //
    0xEA, 0xE2, 0x83, 0x73, 0xF4, 0x98, 0xB8, 0x18, //
    0x2E, 0xE5, 0x42, 0x2E, 0x50, 0xA2, 0x0F, 0x49, //
    0x87, 0x24, 0xE6, 0x65, 0x9A, 0xF0, 0x7C, 0xD7,
];

const SAVEGAME_XOR_MAGIC: [u8; 32] = [
    0x7C, 0x07, 0x69, 0x83, 0x31, 0x7E, 0x0C, 0x82, //
    0x5F, 0x2E, 0x36, 0x7F, 0x76, 0xB4, 0xA2, 0x71, //
    0x38, 0x2B, 0x6E, 0x87, 0x39, 0x05, 0x02, 0xC6, //
    0xCD, 0xD8, 0xB1, 0xCC, 0xA1, 0x33, 0xF9, 0xB6,
];

const PROFILE_PREFIX_MAGIC: [u8; 32] = [
    0xD8, 0x04, 0xB9, 0x08, 0x5C, 0x4E, 0x2B, 0xC0, //
    0x61, 0x9F, 0x7C, 0x8D, 0x5D, 0x34, 0x00, 0x56, //
    0xE7, 0x7B, 0x4E, 0xC0, 0xA4, 0xD6, 0xA7, 0x01, //
    0x14, 0x15, 0xA9, 0x93, 0x1F, 0x27, 0x2C, 0x8F,
];

const PROFILE_XOR_MAGIC: [u8; 32] = [
    0xE8, 0xDC, 0x3A, 0x66, 0xF7, 0xEF, 0x85, 0xE0, //
    0xBD, 0x4A, 0xA9, 0x73, 0x57, 0x99, 0x30, 0x8C, //
    0x94, 0x63, 0x59, 0xA8, 0xC9, 0xAE, 0xD9, 0x58, //
    0x7D, 0x51, 0xB0, 0x1E, 0xBE, 0xD0, 0x77, 0x43,
];

impl FileKind {
    fn magic_tables(self) -> (&'static [u8; 32], &'static [u8; 32]) {
        match self {
            FileKind::Savegame => (&SAVEGAME_PREFIX_MAGIC, &SAVEGAME_XOR_MAGIC),
            FileKind::Profile => (&PROFILE_PREFIX_MAGIC, &PROFILE_XOR_MAGIC),
        }
    }
}

/// Reverse the payload obfuscation in place.
///
/// The scan runs from the last byte down to the first: each byte is XORed
/// with an already-decoded earlier byte (or the prefix table for the first
/// 32), further XORed with the rolling table. The direction matters; byte
/// `i` must still hold its decoded value when byte `i + 32` is processed.
pub fn deobfuscate(payload: &mut [u8], kind: FileKind) {
    let (prefix, xor) = kind.magic_tables();
    for i in (0..payload.len()).rev() {
        let k = if i < 32 { prefix[i] } else { payload[i - 32] };
        payload[i] ^= k ^ xor[i % 32];
    }
}

/// Apply the payload obfuscation in place; exact inverse of [`deobfuscate`].
pub fn obfuscate(payload: &mut [u8], kind: FileKind) {
    let (prefix, xor) = kind.magic_tables();
    for i in 0..payload.len() {
        let k = if i < 32 { prefix[i] } else { payload[i - 32] };
        payload[i] ^= k ^ xor[i % 32];
    }
}

/// Everything in the container other than the payload itself.
///
/// Carried through load and store untouched so a no-op edit round-trips
/// byte-identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvasHeader {
    pub sg_version: u32,
    pub pkg_version: u32,
    pub engine_major: u16,
    pub engine_minor: u16,
    pub engine_patch: u16,
    pub engine_build: u32,
    pub build_id: Option<String>,
    pub fmt_version: u32,
    pub custom_format_data: Vec<([u8; 16], u32)>,
    pub sg_type: Option<String>,
}

impl GvasHeader {
    /// Parse a whole file, returning the header and the deobfuscated payload.
    pub fn read(file_data: &[u8], kind: FileKind) -> Result<(Self, Vec<u8>), EnvelopeError> {
        let mut df = Cursor::new(file_data);

        let mut magic = [0u8; 4];
        df.read_exact(&mut magic)?;
        if &magic != b"GVAS" {
            return Err(EnvelopeError::BadMagic);
        }

        let sg_version = df.read_u32::<LittleEndian>()?;
        let pkg_version = df.read_u32::<LittleEndian>()?;
        let engine_major = df.read_u16::<LittleEndian>()?;
        let engine_minor = df.read_u16::<LittleEndian>()?;
        let engine_patch = df.read_u16::<LittleEndian>()?;
        let engine_build = df.read_u32::<LittleEndian>()?;
        let build_id = read_str(&mut df)?;
        let fmt_version = df.read_u32::<LittleEndian>()?;
        let fmt_count = df.read_u32::<LittleEndian>()?;
        let mut custom_format_data = Vec::with_capacity(fmt_count as usize);
        for _ in 0..fmt_count {
            let mut guid = [0u8; 16];
            df.read_exact(&mut guid)?;
            let entry = df.read_u32::<LittleEndian>()?;
            custom_format_data.push((guid, entry));
        }
        let sg_type = read_str(&mut df)?;

        let payload_len = df.read_u32::<LittleEndian>()?;
        let mut payload = vec![0u8; payload_len as usize];
        df.read_exact(&mut payload)?;

        let trailing = file_data.len() - df.position() as usize;
        if trailing > 0 {
            return Err(EnvelopeError::TrailingData(trailing));
        }

        deobfuscate(&mut payload, kind);

        let header = GvasHeader {
            sg_version,
            pkg_version,
            engine_major,
            engine_minor,
            engine_patch,
            engine_build,
            build_id,
            fmt_version,
            custom_format_data,
            sg_type,
        };
        Ok((header, payload))
    }

    /// Emit a whole file: header, then the obfuscated, length-prefixed
    /// payload. `payload` is the plain (deobfuscated) record bytes.
    pub fn write(&self, payload: &[u8], kind: FileKind) -> Result<Vec<u8>, EnvelopeError> {
        let mut df = Vec::new();

        df.write_all(b"GVAS")?;
        df.write_u32::<LittleEndian>(self.sg_version)?;
        df.write_u32::<LittleEndian>(self.pkg_version)?;
        df.write_u16::<LittleEndian>(self.engine_major)?;
        df.write_u16::<LittleEndian>(self.engine_minor)?;
        df.write_u16::<LittleEndian>(self.engine_patch)?;
        df.write_u32::<LittleEndian>(self.engine_build)?;
        write_str(&mut df, self.build_id.as_deref())?;
        df.write_u32::<LittleEndian>(self.fmt_version)?;
        df.write_u32::<LittleEndian>(self.custom_format_data.len() as u32)?;
        for (guid, entry) in &self.custom_format_data {
            df.write_all(guid)?;
            df.write_u32::<LittleEndian>(*entry)?;
        }
        write_str(&mut df, self.sg_type.as_deref())?;

        let mut data = payload.to_vec();
        obfuscate(&mut data, kind);
        df.write_u32::<LittleEndian>(data.len() as u32)?;
        df.write_all(&data)?;

        Ok(df)
    }
}

/// Read a length-prefixed string: length 0 means absent, length 1 means
/// empty, anything longer carries UTF-8 plus a trailing NUL.
fn read_str(df: &mut Cursor<&[u8]>) -> Result<Option<String>, EnvelopeError> {
    let len = df.read_u32::<LittleEndian>()?;
    match len {
        0 => Ok(None),
        1 => Ok(Some(String::new())),
        _ => {
            let mut buf = vec![0u8; len as usize];
            df.read_exact(&mut buf)?;
            buf.pop();
            String::from_utf8(buf)
                .map(Some)
                .map_err(|_| EnvelopeError::BadString)
        }
    }
}

fn write_str(df: &mut Vec<u8>, value: Option<&str>) -> Result<(), EnvelopeError> {
    match value {
        None => df.write_u32::<LittleEndian>(0)?,
        Some("") => df.write_u32::<LittleEndian>(1)?,
        Some(s) => {
            df.write_u32::<LittleEndian>(s.len() as u32 + 1)?;
            df.write_all(s.as_bytes())?;
            df.write_all(b"\0")?;
        }
    }
    Ok(())
}
