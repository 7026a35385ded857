//! SMBIOS structure table decoder
//!
//! Walks a System Management BIOS structure table and turns each structure into a group of labeled, human readable
//! fields. Output goes to a caller supplied [`ResultSink`]; the decoder keeps no state between passes.
//!
//! ```
//! use smbios_decoder::{decode_table, CollectingSink, DecoderConfig, SmbiosVersion, Termination};
//!
//! let table = [
//!     1, 0x08, 0x01, 0x00, 1, 2, 0, 0, // System information, handle 1
//!     b'O', b'E', b'M', 0, b'B', b'o', b'x', 0, 0, //
//!     0x7F, 0x04, 0xFF, 0xFF, 0, 0, // End of table
//! ];
//!
//! let mut sink = CollectingSink::new();
//! let summary = decode_table(&table, SmbiosVersion::new(3, 0), &DecoderConfig::default(), &mut sink);
//!
//! assert_eq!(summary.termination, Termination::EndOfTable);
//! assert_eq!(sink.value(sink.groups()[0].id, "Product name"), Some("Box"));
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

extern crate alloc;

pub mod bitfields;
pub mod config;
pub mod decoders;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod provider;
pub mod sink;
pub mod strings;
pub mod tables;
pub mod walker;

pub use config::DecoderConfig;
pub use error::SmbiosError;
pub use provider::{RawTableProvider, SmbiosTable, TableProvider};
pub use sink::{CollectingSink, GroupId, ResultSink};
pub use walker::{SmbiosVersion, Termination};

use sink::CountingSink;

/// Counters for one decode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Structures read from the table, End-of-Table excluded.
    pub structures: usize,
    /// Groups opened in the sink.
    pub groups: usize,
    /// Fields emitted into the sink.
    pub fields: usize,
    /// Why the walk stopped.
    pub termination: Termination,
}

/// Decodes every structure of `table` into `sink`.
///
/// Layout problems never fail the pass: the walk stops at the first unusable structure, everything emitted before
/// it stays valid, and the reason is reported in [`DecodeSummary::termination`].
pub fn decode_table(
    table: &[u8],
    version: SmbiosVersion,
    config: &DecoderConfig,
    sink: &mut dyn ResultSink,
) -> DecodeSummary {
    decode_table_with_cancel(table, version, config, sink, || false)
}

/// Same as [`decode_table`], but polls `cancel` before each structure and stops once it returns true.
///
/// A structure whose decode has started is always finished.
pub fn decode_table_with_cancel(
    table: &[u8],
    version: SmbiosVersion,
    config: &DecoderConfig,
    sink: &mut dyn ResultSink,
    mut cancel: impl FnMut() -> bool,
) -> DecodeSummary {
    let mut counting = CountingSink::new(sink);
    let mut structures = 0;
    let mut walker = walker::walk(table, version);

    let termination = loop {
        if cancel() {
            log::debug!("SMBIOS decode cancelled after {} structures at offset {:#x}", structures, walker.position());
            break Termination::Cancelled;
        }
        let Some(structure) = walker.next() else {
            break walker.termination().unwrap_or(Termination::BufferExhausted);
        };
        structures += 1;
        dispatch::dispatch(&structure, &mut counting, config);
    };

    let summary = DecodeSummary { structures, groups: counting.groups, fields: counting.fields, termination };
    log::debug!(
        "SMBIOS {}.{} decode: {} structures, {} groups, {} fields, {:?}",
        version.major,
        version.minor,
        summary.structures,
        summary.groups,
        summary.fields,
        summary.termination
    );
    summary
}

/// Fetches the table from `provider` and decodes it into `sink`.
pub fn decode_from_provider(
    provider: &dyn TableProvider,
    config: &DecoderConfig,
    sink: &mut dyn ResultSink,
) -> Result<DecodeSummary, SmbiosError> {
    let table = provider.get_table()?;
    Ok(decode_table(&table.data, table.version, config, sink))
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use mockall::Sequence;

    use super::*;
    use crate::{provider::MockTableProvider, sink::MockResultSink};

    const TABLE: [u8; 23] = [
        8, 0x09, 0x01, 0x00, 0, 0x00, 0, 0x0B, 0x1F, 0, 0, // Port connector, handle 1
        0xC8, 0x04, 0x02, 0x00, 0, 0, // Unknown type 200, handle 2
        0x7F, 0x04, 0x03, 0x00, 0, 0, // End of table
    ];

    #[test]
    fn test_decode_from_provider_sequence() {
        let mut provider = MockTableProvider::new();
        provider
            .expect_get_table()
            .times(1)
            .returning(|| Ok(SmbiosTable::new(TABLE.to_vec(), SmbiosVersion::new(3, 0))));

        let mut sink = MockResultSink::new();
        let mut seq = Sequence::new();
        sink.expect_begin_group()
            .withf(|label| label == "Port connector")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| GroupId(0));
        sink.expect_add_field()
            .withf(|group, name, _| *group == GroupId(0) && name == "Handle")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_add_field().times(3).in_sequence(&mut seq).return_const(());

        let summary = decode_from_provider(&provider, &DecoderConfig::default(), &mut sink).unwrap();

        assert_eq!(
            summary,
            DecodeSummary { structures: 2, groups: 1, fields: 4, termination: Termination::EndOfTable }
        );
    }

    #[test]
    fn test_decode_from_provider_propagates_error() {
        let mut provider = MockTableProvider::new();
        provider.expect_get_table().returning(|| Err(SmbiosError::TableUnavailable));
        let mut sink = MockResultSink::new();

        let result = decode_from_provider(&provider, &DecoderConfig::default(), &mut sink);

        assert_eq!(result, Err(SmbiosError::TableUnavailable));
    }

    #[test]
    fn test_cancel_between_structures() {
        let mut sink = CollectingSink::new();
        let mut polls = 0;

        let summary =
            decode_table_with_cancel(&TABLE, SmbiosVersion::new(3, 0), &DecoderConfig::default(), &mut sink, || {
                polls += 1;
                polls > 1
            });

        assert_eq!(summary.termination, Termination::Cancelled);
        assert_eq!(summary.structures, 1);
        assert_eq!(sink.group_labels(), vec!["Port connector"]);
    }
}
