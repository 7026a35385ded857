//! Decoder configuration
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

/// Preferences applied to one decode pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Emit a "Type N" group with the handle and length for structure types the decoder does not know.
    pub show_undefined_types: bool,
}

impl DecoderConfig {
    /// Sets whether unknown structure types produce output.
    pub const fn with_show_undefined_types(mut self, show: bool) -> Self {
        self.show_undefined_types = show;
        self
    }
}
