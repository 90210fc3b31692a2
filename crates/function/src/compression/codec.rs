// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The payload format shared by COMPRESS, UNCOMPRESS and
//! UNCOMPRESSED_LENGTH: a 4-byte little-endian length of the original data,
//! then a zlib stream, then a `.` if the stream's last byte is a space.
//! Empty data is stored as an empty payload.

use std::io::Write;

use flate2::{Compression, Decompress, FlushDecompress, Status, write::ZlibEncoder};

const PREFIX_LEN: usize = 4;

const TRAILING_SPACE: u8 = b' ';

const SUFFIX: u8 = b'.';

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
	#[error("payload of {0} bytes is too short to hold a compressed value")]
	TooShort(usize),

	#[error("input of {0} bytes does not fit the length prefix")]
	TooLarge(usize),

	#[error("uncompressed data exceeds {0} bytes")]
	OutputTooLarge(u64),

	#[error("compressed stream is truncated")]
	Truncated,

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Decompress(#[from] flate2::DecompressError),
}

pub fn compress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
	if data.is_empty() {
		return Ok(Vec::new());
	}
	let len = u32::try_from(data.len()).map_err(|_| CodecError::TooLarge(data.len()))?;

	let deflated = deflate(data)?;
	let mut payload = Vec::with_capacity(PREFIX_LEN + deflated.len() + 1);
	payload.extend_from_slice(&len.to_le_bytes());
	payload.extend_from_slice(&deflated);
	if deflated.last() == Some(&TRAILING_SPACE) {
		payload.push(SUFFIX);
	}
	Ok(payload)
}

/// Inflates a payload. The length prefix is informational and never used
/// to size or truncate the output.
pub fn uncompress(payload: &[u8], limit: u64) -> Result<Vec<u8>, CodecError> {
	if payload.is_empty() {
		return Ok(Vec::new());
	}
	if payload.len() <= PREFIX_LEN {
		return Err(CodecError::TooShort(payload.len()));
	}
	inflate(&payload[PREFIX_LEN..], limit)
}

pub fn uncompressed_length(payload: &[u8]) -> Result<u32, CodecError> {
	if payload.is_empty() {
		return Ok(0);
	}
	if payload.len() <= PREFIX_LEN {
		return Err(CodecError::TooShort(payload.len()));
	}
	let mut prefix = [0u8; PREFIX_LEN];
	prefix.copy_from_slice(&payload[..PREFIX_LEN]);
	Ok(u32::from_le_bytes(prefix))
}

pub fn deflate(data: &[u8]) -> Result<Vec<u8>, CodecError> {
	let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2 + 16), Compression::default());
	encoder.write_all(data)?;
	Ok(encoder.finish()?)
}

/// Inflates a zlib stream. Anything after the end-of-stream marker is
/// ignored; a stream that stops before it is an error.
pub fn inflate(data: &[u8], limit: u64) -> Result<Vec<u8>, CodecError> {
	let mut decoder = Decompress::new(true);
	let mut out = Vec::with_capacity(data.len().saturating_mul(4).clamp(64, 1 << 20));

	loop {
		if out.len() == out.capacity() {
			out.reserve(out.capacity());
		}

		let consumed = decoder.total_in() as usize;
		let produced = decoder.total_out();
		let status = decoder.decompress_vec(&data[consumed..], &mut out, FlushDecompress::None)?;

		if decoder.total_out() > limit {
			return Err(CodecError::OutputTooLarge(limit));
		}

		match status {
			Status::StreamEnd => return Ok(out),
			Status::Ok | Status::BufError => {
				if decoder.total_in() as usize == consumed && decoder.total_out() == produced {
					return Err(CodecError::Truncated);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const NO_LIMIT: u64 = u32::MAX as u64;

	mod compress {
		use super::*;

		#[test]
		fn test_empty() {
			assert!(compress(b"").unwrap().is_empty());
		}

		#[test]
		fn test_prefix_is_original_length() {
			let payload = compress(b"hello hello hello").unwrap();
			assert_eq!(&payload[..4], &17u32.to_le_bytes());
		}

		#[test]
		fn test_body_is_zlib() {
			let payload = compress(b"abc").unwrap();
			// zlib header for the default level
			assert_eq!(payload[4], 0x78);
		}

		#[test]
		fn test_suffix_rule() {
			let mut inputs: Vec<Vec<u8>> =
				(1..200usize).map(|len| (0..len).map(|i| (i * 31 % 251) as u8).collect()).collect();
			// adler-32 low byte is 0x20, so the stream ends in a space
			inputs.push(b"payload5".to_vec());

			let mut suffixed = 0;
			for data in inputs {
				let deflated = deflate(&data).unwrap();
				let payload = compress(&data).unwrap();
				if deflated.last() == Some(&b' ') {
					suffixed += 1;
					assert_eq!(payload.len(), 4 + deflated.len() + 1);
					assert_eq!(payload.last(), Some(&b'.'));
				} else {
					assert_eq!(payload.len(), 4 + deflated.len());
				}
				assert_eq!(uncompress(&payload, NO_LIMIT).unwrap(), data);
			}
			assert!(suffixed > 0);
		}
	}

	mod uncompress {
		use super::*;

		#[test]
		fn test_round_trip() {
			let data = b"The quick brown fox jumps over the lazy dog. ".repeat(50);
			assert_eq!(uncompress(&compress(&data).unwrap(), NO_LIMIT).unwrap(), data);
		}

		#[test]
		fn test_empty() {
			assert!(uncompress(b"", NO_LIMIT).unwrap().is_empty());
		}

		#[test]
		fn test_too_short() {
			for len in 1..=4 {
				let payload = vec![1u8; len];
				assert!(matches!(uncompress(&payload, NO_LIMIT), Err(CodecError::TooShort(l)) if l == len));
			}
		}

		#[test]
		fn test_garbage_body() {
			assert!(uncompress(b"\x05\x00\x00\x00garbage", NO_LIMIT).is_err());
		}

		#[test]
		fn test_truncated_stream() {
			let payload = compress(&b"abcdefgh".repeat(100)).unwrap();
			let truncated = &payload[..payload.len() - 3];
			assert!(uncompress(truncated, NO_LIMIT).is_err());
		}

		#[test]
		fn test_prefix_is_ignored() {
			let mut payload = compress(b"abc").unwrap();
			payload[..4].copy_from_slice(&1u32.to_le_bytes());
			assert_eq!(uncompress(&payload, NO_LIMIT).unwrap(), b"abc");
		}

		#[test]
		fn test_limit() {
			let payload = compress(&vec![0u8; 10_000]).unwrap();
			assert!(matches!(uncompress(&payload, 1_000), Err(CodecError::OutputTooLarge(1_000))));
		}
	}

	mod length {
		use super::*;

		#[test]
		fn test_reads_prefix() {
			let payload = compress(&vec![7u8; 1234]).unwrap();
			assert_eq!(uncompressed_length(&payload).unwrap(), 1234);
		}

		#[test]
		fn test_empty_and_short() {
			assert_eq!(uncompressed_length(b"").unwrap(), 0);
			assert!(matches!(uncompressed_length(b"abcd"), Err(CodecError::TooShort(4))));
		}

		#[test]
		fn test_does_not_validate_body() {
			assert_eq!(uncompressed_length(b"\x0a\x00\x00\x00x").unwrap(), 10);
		}
	}
}
