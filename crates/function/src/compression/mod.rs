// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod codec;
pub mod compress;
pub mod length;
pub mod uncompress;

pub use compress::Compress;
pub use length::UncompressedLength;
pub use uncompress::Uncompress;
