// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod aes;
pub mod cipher;
pub mod key;
pub mod password;
pub mod random;

pub use self::aes::{AesDecrypt, AesEncrypt};
pub use password::Password;
pub use random::RandomBytes;
