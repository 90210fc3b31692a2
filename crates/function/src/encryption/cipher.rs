// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! AES in ECB mode with PKCS#7 padding.

use aes::{
	Aes128,
	cipher::{BlockDecrypt, BlockEncrypt, KeyInit, generic_array::GenericArray},
};
use cryptofn_core::BlockEncryptionMode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
	#[error("invalid key length {0}")]
	InvalidKeyLength(usize),

	#[error("ciphertext length {0} is not a positive multiple of the block size")]
	InvalidLength(usize),

	#[error("invalid padding")]
	InvalidPadding,
}

pub fn encrypt(mode: BlockEncryptionMode, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
	match mode {
		BlockEncryptionMode::Aes128Ecb => {
			let cipher = Aes128::new_from_slice(key).map_err(|_| CipherError::InvalidKeyLength(key.len()))?;
			let mut buffer = pad(plaintext, mode.block_size());
			for chunk in buffer.chunks_exact_mut(mode.block_size()) {
				cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
			}
			Ok(buffer)
		}
	}
}

pub fn decrypt(mode: BlockEncryptionMode, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
	match mode {
		BlockEncryptionMode::Aes128Ecb => {
			let block_size = mode.block_size();
			if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
				return Err(CipherError::InvalidLength(ciphertext.len()));
			}
			let cipher = Aes128::new_from_slice(key).map_err(|_| CipherError::InvalidKeyLength(key.len()))?;
			let mut buffer = ciphertext.to_vec();
			for chunk in buffer.chunks_exact_mut(block_size) {
				cipher.decrypt_block(GenericArray::from_mut_slice(chunk));
			}
			unpad(&mut buffer, block_size)?;
			Ok(buffer)
		}
	}
}

/// Always appends between 1 and `block_size` bytes.
fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
	let padding = block_size - data.len() % block_size;
	let mut buffer = Vec::with_capacity(data.len() + padding);
	buffer.extend_from_slice(data);
	buffer.resize(data.len() + padding, padding as u8);
	buffer
}

fn unpad(buffer: &mut Vec<u8>, block_size: usize) -> Result<(), CipherError> {
	let Some(&last) = buffer.last() else {
		return Err(CipherError::InvalidPadding);
	};
	let padding = last as usize;
	if padding == 0 || padding > block_size || padding > buffer.len() {
		return Err(CipherError::InvalidPadding);
	}
	if !buffer[buffer.len() - padding..].iter().all(|b| *b == last) {
		return Err(CipherError::InvalidPadding);
	}
	buffer.truncate(buffer.len() - padding);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	const MODE: BlockEncryptionMode = BlockEncryptionMode::Aes128Ecb;

	fn hex_decode(s: &str) -> Vec<u8> {
		hex::decode(s).unwrap()
	}

	#[test]
	fn test_fips_197_single_block() {
		// FIPS-197 appendix C.1; the second block is pure padding.
		let key = hex_decode("000102030405060708090a0b0c0d0e0f");
		let plaintext = hex_decode("00112233445566778899aabbccddeeff");
		let ciphertext = encrypt(MODE, &plaintext, &key).unwrap();
		assert_eq!(ciphertext.len(), 32);
		assert_eq!(hex::encode(&ciphertext[..16]), "69c4e0d86a7b0430d8cdb78070b4c55a");
		assert_eq!(decrypt(MODE, &ciphertext, &key).unwrap(), plaintext);
	}

	#[test]
	fn test_output_length() {
		let key = [7u8; 16];
		assert_eq!(encrypt(MODE, b"", &key).unwrap().len(), 16);
		assert_eq!(encrypt(MODE, b"fifteen bytes!!", &key).unwrap().len(), 16);
		assert_eq!(encrypt(MODE, b"sixteen bytes!!!", &key).unwrap().len(), 32);
	}

	#[test]
	fn test_empty_round_trip() {
		let key = [1u8; 16];
		let ciphertext = encrypt(MODE, b"", &key).unwrap();
		assert_eq!(decrypt(MODE, &ciphertext, &key).unwrap(), b"");
	}

	#[test]
	fn test_decrypt_rejects_bad_length() {
		let key = [0u8; 16];
		assert_eq!(decrypt(MODE, b"", &key), Err(CipherError::InvalidLength(0)));
		assert_eq!(decrypt(MODE, &[0u8; 17], &key), Err(CipherError::InvalidLength(17)));
	}

	#[test]
	fn test_decrypt_with_wrong_key_fails_or_differs() {
		let ciphertext = encrypt(MODE, b"secret message", &[1u8; 16]).unwrap();
		match decrypt(MODE, &ciphertext, &[2u8; 16]) {
			Ok(plaintext) => assert_ne!(plaintext, b"secret message"),
			Err(err) => assert_eq!(err, CipherError::InvalidPadding),
		}
	}

	#[test]
	fn test_invalid_key_length() {
		assert_eq!(encrypt(MODE, b"x", &[0u8; 5]), Err(CipherError::InvalidKeyLength(5)));
	}

	#[test]
	fn test_unpad() {
		let mut buffer = vec![b'a', 3, 3, 3];
		unpad(&mut buffer, 16).unwrap();
		assert_eq!(buffer, b"a");

		let mut zero = vec![b'a', 0];
		assert_eq!(unpad(&mut zero, 16), Err(CipherError::InvalidPadding));

		let mut mixed = vec![b'a', 1, 2];
		assert_eq!(unpad(&mut mixed, 16), Err(CipherError::InvalidPadding));
	}
}
