// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use cryptofn_core::FunctionConfig;

use crate::{
	builtin::Builtin,
	compression::{Compress, Uncompress, UncompressedLength},
	encryption::{AesDecrypt, AesEncrypt, Password, RandomBytes},
	hash::{Md5, Sha1, Sha2},
};

/// The SQL names this crate answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
	AesDecrypt,
	AesEncrypt,
	Compress,
	Decode,
	DesDecrypt,
	DesEncrypt,
	Encode,
	Encrypt,
	Md5,
	OldPassword,
	Password,
	RandomBytes,
	Sha1,
	Sha2,
	Uncompress,
	UncompressedLength,
	ValidatePasswordStrength,
}

impl FunctionName {
	pub const ALL: [FunctionName; 17] = [
		FunctionName::AesDecrypt,
		FunctionName::AesEncrypt,
		FunctionName::Compress,
		FunctionName::Decode,
		FunctionName::DesDecrypt,
		FunctionName::DesEncrypt,
		FunctionName::Encode,
		FunctionName::Encrypt,
		FunctionName::Md5,
		FunctionName::OldPassword,
		FunctionName::Password,
		FunctionName::RandomBytes,
		FunctionName::Sha1,
		FunctionName::Sha2,
		FunctionName::Uncompress,
		FunctionName::UncompressedLength,
		FunctionName::ValidatePasswordStrength,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			FunctionName::AesDecrypt => "AES_DECRYPT",
			FunctionName::AesEncrypt => "AES_ENCRYPT",
			FunctionName::Compress => "COMPRESS",
			FunctionName::Decode => "DECODE",
			FunctionName::DesDecrypt => "DES_DECRYPT",
			FunctionName::DesEncrypt => "DES_ENCRYPT",
			FunctionName::Encode => "ENCODE",
			FunctionName::Encrypt => "ENCRYPT",
			FunctionName::Md5 => "MD5",
			FunctionName::OldPassword => "OLD_PASSWORD",
			FunctionName::Password => "PASSWORD",
			FunctionName::RandomBytes => "RANDOM_BYTES",
			FunctionName::Sha1 => "SHA1",
			FunctionName::Sha2 => "SHA2",
			FunctionName::Uncompress => "UNCOMPRESS",
			FunctionName::UncompressedLength => "UNCOMPRESSED_LENGTH",
			FunctionName::ValidatePasswordStrength => "VALIDATE_PASSWORD_STRENGTH",
		}
	}

	/// The evaluator behind this name, or `None` for names that are
	/// recognised but have no implementation.
	pub fn builtin(&self, config: &FunctionConfig) -> Option<Builtin> {
		let builtin = match self {
			FunctionName::AesDecrypt => Builtin::AesDecrypt(AesDecrypt::new(config.block_encryption_mode)),
			FunctionName::AesEncrypt => Builtin::AesEncrypt(AesEncrypt::new(config.block_encryption_mode)),
			FunctionName::Compress => Builtin::Compress(Compress::new(config.max_blob_width)),
			FunctionName::Md5 => Builtin::Md5(Md5::new()),
			FunctionName::Password => Builtin::Password(Password::new()),
			FunctionName::RandomBytes => Builtin::RandomBytes(RandomBytes::new()),
			FunctionName::Sha1 => Builtin::Sha1(Sha1::new()),
			FunctionName::Sha2 => Builtin::Sha2(Sha2::new()),
			FunctionName::Uncompress => Builtin::Uncompress(Uncompress::new(config.max_blob_width)),
			FunctionName::UncompressedLength => Builtin::UncompressedLength(UncompressedLength::new()),
			FunctionName::Decode
			| FunctionName::DesDecrypt
			| FunctionName::DesEncrypt
			| FunctionName::Encode
			| FunctionName::Encrypt
			| FunctionName::OldPassword
			| FunctionName::ValidatePasswordStrength => return None,
		};
		Some(builtin)
	}
}

impl Display for FunctionName {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
