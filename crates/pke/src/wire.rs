//! Transcoding between the compact C1C3C2 layout and the structured record.
//!
//! Compact: `0x04 || X1(F) || Y1(F) || Tag(H) || CipherText`
//!
//! Structured (DER):
//!
//! ```text
//! SEQUENCE {
//!     INTEGER      X1,
//!     INTEGER      Y1,
//!     OCTET STRING Tag,
//!     OCTET STRING CipherText
//! }
//! ```
//!
//! INTEGER encodings are minimal, so X1 and Y1 lose any leading zero bytes on
//! the way in and are re-padded to F bytes on the way out.

use eccrypt_algorithms::ec::codec::{decode_coordinate, encode_coordinate};
use eccrypt_api::{TAG_SIZE, UNCOMPRESSED_POINT_MARKER};
use eccrypt_internal::endian::{u32_from_be_slice, u32_to_be_minimal};
use num_bigint::BigUint;

use crate::error::{Error, Result};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;
const TAG_OCTET_STRING: u8 = 0x04;

/// Smallest valid compact ciphertext for field size `f` (empty payload).
pub fn min_compact_len(field_size: usize) -> usize {
    1 + 2 * field_size + TAG_SIZE
}

/// The four fields of a ciphertext, independent of layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuredCiphertext {
    pub x1: BigUint,
    pub y1: BigUint,
    pub tag: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl StructuredCiphertext {
    /// Splits a compact C1C3C2 ciphertext into its fields.
    pub fn from_compact(compact: &[u8], field_size: usize) -> Result<Self> {
        if compact.len() < min_compact_len(field_size) {
            return Err(Error::MalformedInput("ciphertext shorter than the fixed fields"));
        }
        if compact[0] != UNCOMPRESSED_POINT_MARKER {
            return Err(Error::MalformedInput("missing 0x04 marker"));
        }

        let body = &compact[1..];
        let (x1, rest) = body.split_at(field_size);
        let (y1, rest) = rest.split_at(field_size);
        let (tag, ciphertext) = rest.split_at(TAG_SIZE);
        Ok(Self {
            x1: decode_coordinate(x1),
            y1: decode_coordinate(y1),
            tag: tag.to_vec(),
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Reassembles `0x04 || X1(F) || Y1(F) || Tag || CipherText`.
    pub fn to_compact(&self, field_size: usize) -> Result<Vec<u8>> {
        if self.tag.len() != TAG_SIZE {
            return Err(Error::MalformedInput("tag has the wrong length"));
        }
        let x1 = encode_coordinate(&self.x1, field_size)
            .map_err(|_| Error::MalformedInput("X1 wider than the field"))?;
        let y1 = encode_coordinate(&self.y1, field_size)
            .map_err(|_| Error::MalformedInput("Y1 wider than the field"))?;

        let mut out = Vec::with_capacity(min_compact_len(field_size) + self.ciphertext.len());
        out.push(UNCOMPRESSED_POINT_MARKER);
        out.extend_from_slice(&x1);
        out.extend_from_slice(&y1);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        Ok(out)
    }

    /// Serialize to DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        write_tlv(&mut body, TAG_INTEGER, &integer_content(&self.x1))?;
        write_tlv(&mut body, TAG_INTEGER, &integer_content(&self.y1))?;
        write_tlv(&mut body, TAG_OCTET_STRING, &self.tag)?;
        write_tlv(&mut body, TAG_OCTET_STRING, &self.ciphertext)?;

        let mut der = Vec::with_capacity(body.len() + 6);
        write_tlv(&mut der, TAG_SEQUENCE, &body)?;
        Ok(der)
    }

    /// Parse from DER. The input must be exactly one SEQUENCE of the four fields.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut outer = DerReader::new(der);
        let body = outer.read(TAG_SEQUENCE)?;
        if !outer.is_empty() {
            return Err(Error::MalformedInput("trailing data after SEQUENCE"));
        }

        let mut fields = DerReader::new(body);
        let x1 = parse_integer(fields.read(TAG_INTEGER)?)?;
        let y1 = parse_integer(fields.read(TAG_INTEGER)?)?;
        let tag = fields.read(TAG_OCTET_STRING)?.to_vec();
        let ciphertext = fields.read(TAG_OCTET_STRING)?.to_vec();
        if !fields.is_empty() {
            return Err(Error::MalformedInput("unexpected extra field in SEQUENCE"));
        }

        Ok(Self {
            x1,
            y1,
            tag,
            ciphertext,
        })
    }
}

/// Re-expresses a compact C1C3C2 ciphertext as the DER record.
pub fn to_structured(compact: &[u8], field_size: usize) -> Result<Vec<u8>> {
    StructuredCiphertext::from_compact(compact, field_size)?.to_der()
}

/// Re-expresses a DER record as a compact C1C3C2 ciphertext.
pub fn to_compact(der: &[u8], field_size: usize) -> Result<Vec<u8>> {
    StructuredCiphertext::from_der(der)?.to_compact(field_size)
}

// Minimal non-negative INTEGER content: leading 0x00 only when the high bit is set.
fn integer_content(v: &BigUint) -> Vec<u8> {
    let bytes = v.to_bytes_be();
    if bytes[0] & 0x80 != 0 {
        let mut padded = Vec::with_capacity(bytes.len() + 1);
        padded.push(0x00);
        padded.extend_from_slice(&bytes);
        padded
    } else {
        bytes
    }
}

fn parse_integer(content: &[u8]) -> Result<BigUint> {
    match content {
        [] => Err(Error::MalformedInput("empty INTEGER")),
        [first, ..] if first & 0x80 != 0 => Err(Error::MalformedInput("negative INTEGER")),
        [0x00, second, ..] if second & 0x80 == 0 => {
            Err(Error::MalformedInput("non-minimal INTEGER encoding"))
        }
        _ => Ok(BigUint::from_bytes_be(content)),
    }
}

fn write_tlv(out: &mut Vec<u8>, tag: u8, content: &[u8]) -> Result<()> {
    let len = u32::try_from(content.len())
        .map_err(|_| Error::MalformedInput("field too large for DER length"))?;

    out.push(tag);
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let len_bytes = u32_to_be_minimal(len);
        out.push(0x80 | len_bytes.len() as u8);
        out.extend_from_slice(&len_bytes);
    }
    out.extend_from_slice(content);
    Ok(())
}

struct DerReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }

    fn next_byte(&mut self) -> Result<u8> {
        let b = *self
            .data
            .get(self.pos)
            .ok_or(Error::MalformedInput("DER data truncated"))?;
        self.pos += 1;
        Ok(b)
    }

    fn read_length(&mut self) -> Result<usize> {
        let first = self.next_byte()?;
        if first < 0x80 {
            return Ok(first as usize);
        }

        let count = (first & 0x7f) as usize;
        if count == 0 {
            return Err(Error::MalformedInput("indefinite DER length"));
        }
        if count > 4 || self.data.len() - self.pos < count {
            return Err(Error::MalformedInput("DER length out of range"));
        }
        let len_bytes = &self.data[self.pos..self.pos + count];
        self.pos += count;

        if len_bytes[0] == 0 {
            return Err(Error::MalformedInput("non-minimal DER length"));
        }
        let len = u32_from_be_slice(len_bytes)
            .ok_or(Error::MalformedInput("DER length out of range"))?;
        if len < 0x80 {
            return Err(Error::MalformedInput("non-minimal DER length"));
        }
        Ok(len as usize)
    }

    /// Reads one TLV with the given tag and returns its content.
    fn read(&mut self, expected_tag: u8) -> Result<&'a [u8]> {
        if self.next_byte()? != expected_tag {
            return Err(Error::MalformedInput("unexpected DER tag"));
        }
        let len = self.read_length()?;
        if self.data.len() - self.pos < len {
            return Err(Error::MalformedInput("DER content truncated"));
        }
        let content = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(content)
    }
}
