//! Bit-packed sub-records found inside SMBIOS structure bodies
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use bitfield_struct::bitfield;

/// Cache configuration word (type 7, offset 0x05).
#[bitfield(u16)]
pub struct CacheConfiguration {
    /// Cache level minus one.
    #[bits(3)]
    pub level: u8,
    pub socketed: bool,
    #[bits(1)]
    __reserved_low: u8,
    #[bits(2)]
    pub location: u8,
    pub enabled: bool,
    #[bits(2)]
    pub mode: u8,
    #[bits(6)]
    __reserved_high: u8,
}

/// 16-bit cache size (type 7, offsets 0x07 and 0x09).
#[bitfield(u16)]
pub struct CacheSize {
    #[bits(15)]
    pub size: u16,
    /// Set for 64KiB units, clear for 1KiB units.
    pub granularity_64k: bool,
}

impl CacheSize {
    /// Size in bytes.
    pub fn bytes(self) -> u64 {
        scaled_cache_size(self.size() as u64, self.granularity_64k())
    }
}

/// 32-bit cache size (type 7, offsets 0x13 and 0x17), used when the 16-bit size is 0xFFFF.
#[bitfield(u32)]
pub struct CacheSize2 {
    #[bits(31)]
    pub size: u32,
    /// Set for 64KiB units, clear for 1KiB units.
    pub granularity_64k: bool,
}

impl CacheSize2 {
    /// Size in bytes.
    pub fn bytes(self) -> u64 {
        scaled_cache_size(self.size() as u64, self.granularity_64k())
    }
}

fn scaled_cache_size(size: u64, granularity_64k: bool) -> u64 {
    if granularity_64k {
        size * 0x10000
    } else {
        size * 0x400
    }
}

/// Extended firmware ROM size (type 0, offset 0x18).
#[bitfield(u16)]
pub struct ExtendedRomSize {
    #[bits(14)]
    pub size: u16,
    /// 0 for MiB, 1 for GiB. Other values are reserved.
    #[bits(2)]
    pub unit: u8,
}

impl ExtendedRomSize {
    /// Size in bytes, or `None` for a reserved unit.
    pub fn bytes(self) -> Option<u64> {
        match self.unit() {
            0 => Some(self.size() as u64 * 0x10_0000),
            1 => Some(self.size() as u64 * 0x4000_0000),
            _ => None,
        }
    }
}

/// Processor voltage byte (type 4, offset 0x11).
///
/// With `current` set, bits 6:0 hold the current voltage in tenths of a volt. Otherwise the low bits are the
/// legacy capability mask.
#[bitfield(u8)]
pub struct ProcessorVoltage {
    pub capable_5000mv: bool,
    pub capable_3300mv: bool,
    pub capable_2900mv: bool,
    #[bits(4)]
    __reserved: u8,
    pub current: bool,
}

impl ProcessorVoltage {
    /// Current voltage in tenths of a volt.
    pub fn tenths_of_volt(self) -> u8 {
        self.into_bits() & 0x7F
    }
}

/// Processor status byte (type 4, offset 0x18).
#[bitfield(u8)]
pub struct ProcessorStatus {
    #[bits(3)]
    pub status: u8,
    #[bits(3)]
    __reserved_low: u8,
    pub populated: bool,
    __reserved_high: bool,
}

/// Installed or enabled size of a memory module (type 6, offsets 0x09 and 0x0A).
#[bitfield(u8)]
pub struct MemoryModuleSize {
    /// Size as a power of two in MiB, or one of the sentinel values 0x7D..0x7F.
    #[bits(7)]
    pub size: u8,
    pub double_bank: bool,
}

/// Memory module voltage capabilities (type 5, offset 0x0D).
#[bitfield(u8)]
pub struct MemoryModuleVoltage {
    pub requires_5000mv: bool,
    pub requires_3300mv: bool,
    pub requires_2900mv: bool,
    #[bits(5)]
    __reserved: u8,
}

/// PCI device and function number packed in one byte (types 9 and 41).
#[bitfield(u8)]
pub struct DeviceFunction {
    #[bits(3)]
    pub function: u8,
    #[bits(5)]
    pub device: u8,
}

/// A 7-bit type code with a flag in the top bit.
///
/// Used for the chassis type and lock bit (type 3, offset 0x05), the onboard device type and enabled bit (types
/// 10 and 41), and the contained element type of a chassis, where the flag selects an SMBIOS structure type.
#[bitfield(u8)]
pub struct FlaggedType {
    #[bits(7)]
    pub value: u8,
    pub flag: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_configuration() {
        // L2, socketed, external, enabled, write back
        let config = CacheConfiguration::from(0b01_1_01_0_1_001);

        assert_eq!(config.level(), 1);
        assert!(config.socketed());
        assert_eq!(config.location(), 1);
        assert!(config.enabled());
        assert_eq!(config.mode(), 1);

        let disabled = CacheConfiguration::from(0x0180 & !0x0080);
        assert!(!disabled.enabled());
    }

    #[test]
    fn test_cache_size_granularity() {
        assert_eq!(CacheSize::from(0x8002).bytes(), 131072);
        assert_eq!(CacheSize::from(0x0800).bytes(), 2097152);
        assert_eq!(CacheSize2::from(0x8000_0010).bytes(), 16 * 0x10000);
        assert_eq!(CacheSize2::from(0x0000_4000).bytes(), 16 * 1024 * 1024);
    }

    #[test]
    fn test_extended_rom_size() {
        assert_eq!(ExtendedRomSize::from(0x0010).bytes(), Some(16 * 1024 * 1024));
        assert_eq!(ExtendedRomSize::from(0x4002).bytes(), Some(2 * 1024 * 1024 * 1024));
        assert_eq!(ExtendedRomSize::from(0x8001).bytes(), None);
    }

    #[test]
    fn test_processor_voltage() {
        let legacy = ProcessorVoltage::from(0b0000_0011);
        assert!(!legacy.current());
        assert!(legacy.capable_5000mv());
        assert!(legacy.capable_3300mv());
        assert!(!legacy.capable_2900mv());

        let current = ProcessorVoltage::from(0x80 | 12);
        assert!(current.current());
        assert_eq!(current.tenths_of_volt(), 12);
    }

    #[test]
    fn test_packed_bytes() {
        let status = ProcessorStatus::from(0x41);
        assert!(status.populated());
        assert_eq!(status.status(), 1);

        let size = MemoryModuleSize::from(0x83);
        assert_eq!(size.size(), 3);
        assert!(size.double_bank());

        let devfn = DeviceFunction::from(0x1A);
        assert_eq!(devfn.device(), 3);
        assert_eq!(devfn.function(), 2);

        let onboard = FlaggedType::from(0x85);
        assert_eq!(onboard.value(), 5);
        assert!(onboard.flag());
    }
}
