//! Static enumeration and flag tables used to label SMBIOS field values
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use crate::format::{EnumTable, FlagTable};

// Firmware (type 0)

/// Firmware characteristics, bits 0..31 of the 64-bit characteristics field.
pub const FIRMWARE_CHARACTERISTICS: &FlagTable = &[
    (1 << 3, "Not supported"),
    (1 << 4, "ISA"),
    (1 << 5, "MCA"),
    (1 << 6, "EISA"),
    (1 << 7, "PCI"),
    (1 << 8, "PCMCIA"),
    (1 << 9, "PNP"),
    (1 << 10, "APM"),
    (1 << 11, "Upgradeable"),
    (1 << 12, "Shadowing"),
    (1 << 13, "VL-VESA"),
    (1 << 14, "ESCD"),
    (1 << 15, "Boot from CD"),
    (1 << 16, "Selectable boot"),
    (1 << 17, "ROM socketed"),
    (1 << 18, "PCMCIA boot"),
    (1 << 19, "EDD"),
    (1 << 20, "NEC 9800 floppy"),
    (1 << 21, "Toshiba floppy"),
    (1 << 22, "5.25\" 360KB floppy"),
    (1 << 23, "5.25\" 1.2MB floppy"),
    (1 << 24, "3.5\" 720KB floppy"),
    (1 << 25, "3.5\" 2.88MB floppy"),
    (1 << 26, "Print screen"),
    (1 << 27, "8042 keyboard"),
    (1 << 28, "Serial"),
    (1 << 29, "Printer"),
    (1 << 30, "CGA video"),
    (1 << 31, "NEC PC-98"),
];

/// Firmware characteristics extension bytes 1 and 2, read as one little-endian word.
pub const FIRMWARE_CHARACTERISTICS_EXTENDED: &FlagTable = &[
    (1 << 0, "ACPI"),
    (1 << 1, "USB legacy"),
    (1 << 2, "AGP"),
    (1 << 3, "I2O boot"),
    (1 << 4, "LS-120 boot"),
    (1 << 5, "Zip boot"),
    (1 << 6, "1394 boot"),
    (1 << 7, "Smart battery"),
    (1 << 8, "BIOS boot"),
    (1 << 9, "Function key network boot"),
    (1 << 10, "Content distribution"),
    (1 << 11, "UEFI"),
    (1 << 12, "Virtual machine"),
    (1 << 13, "Manufacturing mode"),
];

// System (type 1)

pub const WAKE_UP_TYPES: &EnumTable = &[
    (0x00, "Reserved"),
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "APM timer"),
    (0x04, "Modem ring"),
    (0x05, "LAN remote"),
    (0x06, "Power switch"),
    (0x07, "PCI PME"),
    (0x08, "AC power restored"),
];

// Baseboard (type 2)

pub const BASEBOARD_FEATURES: &FlagTable = &[
    (1 << 0, "Hosting"),
    (1 << 1, "Daughter"),
    (1 << 2, "Removable"),
    (1 << 3, "Replaceable"),
    (1 << 4, "Hot swappable"),
];

pub const BOARD_TYPES: &EnumTable = &[
    (0x01, "Unknown"),
    (0x02, "Other"),
    (0x03, "Server blade"),
    (0x04, "Connectivity switch"),
    (0x05, "System management module"),
    (0x06, "Processor module"),
    (0x07, "I/O module"),
    (0x08, "Memory module"),
    (0x09, "Daughter board"),
    (0x0A, "Motherboard"),
    (0x0B, "Processor memory module"),
    (0x0C, "Processor I/O module"),
    (0x0D, "Interconnect"),
];

// Chassis (type 3)

pub const CHASSIS_TYPES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Desktop"),
    (0x04, "Low-profile desktop"),
    (0x05, "Pizza box"),
    (0x06, "Mini tower"),
    (0x07, "Tower"),
    (0x08, "Portable"),
    (0x09, "Laptop"),
    (0x0A, "Notebook"),
    (0x0B, "Hand held"),
    (0x0C, "Docking station"),
    (0x0D, "All-in-one"),
    (0x0E, "Sub notebook"),
    (0x0F, "Space saving"),
    (0x10, "Lunch box"),
    (0x11, "Main server"),
    (0x12, "Expansion"),
    (0x13, "Sub chassis"),
    (0x14, "Bus expansion"),
    (0x15, "Peripheral"),
    (0x16, "RAID"),
    (0x17, "Rack mount"),
    (0x18, "Sealed-case"),
    (0x19, "Multi-system"),
    (0x1A, "Compact PCI"),
    (0x1B, "Advanced TCA"),
    (0x1C, "Blade"),
    (0x1D, "Blade enclosure"),
    (0x1E, "Tablet"),
    (0x1F, "Convertible"),
    (0x20, "Detachable"),
    (0x21, "Gateway"),
    (0x22, "Embedded"),
    (0x23, "Mini"),
    (0x24, "Stick"),
];

/// Boot-up, power supply and thermal state.
pub const CHASSIS_STATES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Safe"),
    (0x04, "Warning"),
    (0x05, "Critical"),
    (0x06, "Non-recoverable"),
];

pub const CHASSIS_SECURITY_STATES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "None"),
    (0x04, "Locked out"),
    (0x05, "Enabled"),
];

// Processor (type 4)

pub const PROCESSOR_TYPES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Central"),
    (0x04, "Math"),
    (0x05, "DSP"),
    (0x06, "Video"),
];

/// Bits 2:0 of the processor status byte.
pub const PROCESSOR_STATUSES: &EnumTable = &[
    (0x00, "Unknown"),
    (0x01, "Enabled"),
    (0x02, "Disabled by user"),
    (0x03, "Disabled by firmware"),
    (0x04, "Idle"),
    (0x07, "Other"),
];

pub const PROCESSOR_CHARACTERISTICS: &FlagTable = &[
    (1 << 1, "Unknown"),
    (1 << 2, "64-bit capable"),
    (1 << 3, "Multi-core"),
    (1 << 4, "Hardware threaded"),
    (1 << 5, "Execute protection"),
    (1 << 6, "Enhanced virtualization"),
    (1 << 7, "Power performance control"),
    (1 << 8, "128-bit capable"),
    (1 << 9, "ARM64 SOC"),
];

// Memory controller (type 5) and memory module (type 6)

pub const MEMORY_ERROR_DETECTION_METHODS: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "None"),
    (0x04, "8-bit parity"),
    (0x05, "32-bit ECC"),
    (0x06, "64-bit ECC"),
    (0x07, "128-bit ECC"),
    (0x08, "CRC"),
];

pub const MEMORY_ERROR_CORRECTION_CAPABILITIES: &FlagTable = &[
    (1 << 0, "Other"),
    (1 << 1, "Unknown"),
    (1 << 2, "None"),
    (1 << 3, "Single-bit"),
    (1 << 4, "Double-bit"),
    (1 << 5, "Scrubbing"),
];

pub const MEMORY_INTERLEAVES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "One-way"),
    (0x04, "Two-way"),
    (0x05, "Four-way"),
    (0x06, "Eight-way"),
    (0x07, "Sixteen-way"),
];

pub const MEMORY_SPEEDS: &FlagTable = &[
    (1 << 0, "Other"),
    (1 << 1, "Unknown"),
    (1 << 2, "70ns"),
    (1 << 3, "60ns"),
    (1 << 4, "50ns"),
];

/// Memory module types, shared by the controller's supported types and the module's current type.
pub const MEMORY_MODULE_TYPES: &FlagTable = &[
    (1 << 0, "Other"),
    (1 << 1, "Unknown"),
    (1 << 2, "Standard"),
    (1 << 3, "Fast-page mode"),
    (1 << 4, "EDO"),
    (1 << 5, "Parity"),
    (1 << 6, "ECC"),
    (1 << 7, "SIMM"),
    (1 << 8, "DIMM"),
    (1 << 9, "Burst EDO"),
    (1 << 10, "SDRAM"),
];

pub const MEMORY_MODULE_ERROR_STATUS: &FlagTable =
    &[(1 << 0, "Uncorrectable errors"), (1 << 1, "Correctable errors"), (1 << 2, "See event log")];

// Cache (type 7)

pub const CACHE_LOCATIONS: &EnumTable =
    &[(0x00, "Internal"), (0x01, "External"), (0x02, "Reserved"), (0x03, "Unknown")];

pub const CACHE_MODES: &EnumTable =
    &[(0x00, "Write through"), (0x01, "Write back"), (0x02, "Varies with memory address"), (0x03, "Unknown")];

pub const CACHE_SRAM_TYPES: &FlagTable = &[
    (1 << 0, "Other"),
    (1 << 1, "Unknown"),
    (1 << 2, "Non-burst"),
    (1 << 3, "Burst"),
    (1 << 4, "Pipeline burst"),
    (1 << 5, "Synchronous"),
    (1 << 6, "Asynchronous"),
];

pub const CACHE_ERROR_CORRECTION_TYPES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "None"),
    (0x04, "Parity"),
    (0x05, "Single-bit ECC"),
    (0x06, "Multi-bit ECC"),
];

pub const SYSTEM_CACHE_TYPES: &EnumTable =
    &[(0x01, "Other"), (0x02, "Unknown"), (0x03, "Instruction"), (0x04, "Data"), (0x05, "Unified")];

pub const CACHE_ASSOCIATIVITIES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Direct mapped"),
    (0x04, "2-way"),
    (0x05, "4-way"),
    (0x06, "Full"),
    (0x07, "8-way"),
    (0x08, "16-way"),
    (0x09, "12-way"),
    (0x0A, "24-way"),
    (0x0B, "32-way"),
    (0x0C, "48-way"),
    (0x0D, "64-way"),
    (0x0E, "20-way"),
];

// Port connector (type 8)

/// Internal and external connector types.
pub const CONNECTOR_TYPES: &EnumTable = &[
    (0x00, "None"),
    (0x01, "Centronics"),
    (0x02, "Mini Centronics"),
    (0x03, "Proprietary"),
    (0x04, "DB-25 pin male"),
    (0x05, "DB-25 pin female"),
    (0x06, "DB-15 pin male"),
    (0x07, "DB-15 pin female"),
    (0x08, "DB-9 pin male"),
    (0x09, "DB-9 pin female"),
    (0x0A, "RJ-11"),
    (0x0B, "RJ-45"),
    (0x0C, "50-pin miniSCSI"),
    (0x0D, "Mini-DIN"),
    (0x0E, "Micro-DIN"),
    (0x0F, "PS/2"),
    (0x10, "Infrared"),
    (0x11, "HP-HIL"),
    (0x12, "USB"),
    (0x13, "SSA-SCSI"),
    (0x14, "Circular DIN-8 male"),
    (0x15, "Circular DIN-8 female"),
    (0x16, "On board IDE"),
    (0x17, "On board floppy"),
    (0x18, "9-pin dual inline"),
    (0x19, "25-pin dual inline"),
    (0x1A, "50-pin dual inline"),
    (0x1B, "68-pin dual inline"),
    (0x1C, "On board input CD-ROM"),
    (0x1D, "Mini Centronics type-14"),
    (0x1E, "Mini Centronics type-26"),
    (0x1F, "Mini-jack"),
    (0x20, "BNC"),
    (0x21, "1394"),
    (0x22, "SAS/SATA"),
    (0x23, "USB-C"),
    (0xA0, "PC-98"),
    (0xA1, "PC-98 hireso"),
    (0xA2, "PC-H98"),
    (0xA3, "PC-98 note"),
    (0xA4, "PC-98 full"),
    (0xFF, "Other"),
];

pub const PORT_TYPES: &EnumTable = &[
    (0x00, "None"),
    (0x01, "Parallel port XT/AT"),
    (0x02, "Parallel port PS/2"),
    (0x03, "Parallel port ECP"),
    (0x04, "Parallel port EPP"),
    (0x05, "Parallel port ECP/EPP"),
    (0x06, "Serial port XT/AT"),
    (0x07, "Serial port 16450"),
    (0x08, "Serial port 16550"),
    (0x09, "Serial port 16550A"),
    (0x0A, "SCSI"),
    (0x0B, "MIDI"),
    (0x0C, "Joy stick"),
    (0x0D, "Keyboard"),
    (0x0E, "Mouse"),
    (0x0F, "SSA SCSI"),
    (0x10, "USB"),
    (0x11, "FireWire"),
    (0x12, "PCMCIA type I"),
    (0x13, "PCMCIA type II"),
    (0x14, "PCMCIA type III"),
    (0x15, "Card bus"),
    (0x16, "Access bus"),
    (0x17, "SCSI II"),
    (0x18, "SCSI wide"),
    (0x19, "PC-98"),
    (0x1A, "PC-98-Hireso"),
    (0x1B, "PC-H98"),
    (0x1C, "Video"),
    (0x1D, "Audio"),
    (0x1E, "Modem"),
    (0x1F, "Network"),
    (0x20, "SATA"),
    (0x21, "SAS"),
    (0x22, "MFDP (Display port)"),
    (0x23, "Thunderbolt"),
    (0xA0, "8251"),
    (0xA1, "8251 FIFO"),
    (0xFF, "Other"),
];

// System slot (type 9)

pub const SLOT_TYPES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "ISA"),
    (0x04, "MCA"),
    (0x05, "EISA"),
    (0x06, "PCI"),
    (0x07, "PCMCIA"),
    (0x08, "VL-VESA"),
    (0x09, "Proprietary"),
    (0x0A, "Processor card slot"),
    (0x0B, "Memory card slot"),
    (0x0C, "Riser card slot"),
    (0x0D, "NuBus"),
    (0x0E, "PCI - 66MHz capable"),
    (0x0F, "AGP"),
    (0x10, "AGP 2X"),
    (0x11, "AGP 4X"),
    (0x12, "PCI-X"),
    (0x13, "AGP 8X"),
    (0x14, "M.2 socket 1-DP (A)"),
    (0x15, "M.2 socket 1-SD (E)"),
    (0x16, "M.2 socket 2 (B)"),
    (0x17, "M.2 socket 3 (M)"),
    (0x18, "MXM type I"),
    (0x19, "MXM type II"),
    (0x1A, "MXM type III (standard)"),
    (0x1B, "MXM type III (HE)"),
    (0x1C, "MXM type IV"),
    (0x1D, "MXM 3.0 type A"),
    (0x1E, "MXM 3.0 type B"),
    (0x1F, "PCI express gen 2 SFF-8639 (U.2)"),
    (0x20, "PCI express gen 3 SFF-8639 (U.2)"),
    (0x21, "PCI express mini 52-pin (CEM spec. 2.0) with keep-outs"),
    (0x22, "PCI express mini 52-pin (CEM spec. 2.0) without keep-outs"),
    (0x23, "PCI express mini 76-pin (CEM spec. 2.0)"),
    (0x24, "PCI express gen 4 SFF-8639 (U.2)"),
    (0x25, "PCI express gen 5 SFF-8639 (U.2)"),
    (0x26, "OCP NIC 3.0 (SFF)"),
    (0x27, "OCP NIC 3.0 (LFF)"),
    (0x28, "OCP NIC prior to 3.0"),
    (0x30, "CXL flexbus 1.0"),
    (0xA0, "PC-98/C20"),
    (0xA1, "PC-98/C24"),
    (0xA2, "PC-98/E"),
    (0xA3, "PC-98/Local bus"),
    (0xA4, "PC-98/Card"),
    (0xA5, "PCI express"),
    (0xA6, "PCI express x1"),
    (0xA7, "PCI express x2"),
    (0xA8, "PCI express x4"),
    (0xA9, "PCI express x8"),
    (0xAA, "PCI express x16"),
    (0xAB, "PCI express gen 2"),
    (0xAC, "PCI express gen 2 x1"),
    (0xAD, "PCI express gen 2 x2"),
    (0xAE, "PCI express gen 2 x4"),
    (0xAF, "PCI express gen 2 x8"),
    (0xB0, "PCI express gen 2 x16"),
    (0xB1, "PCI express gen 3"),
    (0xB2, "PCI express gen 3 x1"),
    (0xB3, "PCI express gen 3 x2"),
    (0xB4, "PCI express gen 3 x4"),
    (0xB5, "PCI express gen 3 x8"),
    (0xB6, "PCI express gen 3 x16"),
    (0xB7, "PCI express gen 4"),
    (0xB8, "PCI express gen 4 x1"),
    (0xB9, "PCI express gen 4 x2"),
    (0xBA, "PCI express gen 4 x4"),
    (0xBB, "PCI express gen 4 x8"),
    (0xBC, "PCI express gen 4 x16"),
    (0xBD, "PCI express gen 5"),
    (0xBE, "PCI express gen 5 x1"),
    (0xBF, "PCI express gen 5 x2"),
    (0xC0, "PCI express gen 5 x4"),
    (0xC1, "PCI express gen 5 x8"),
    (0xC2, "PCI express gen 5 x16"),
    (0xC3, "PCI express gen 6"),
    (0xC4, "EDSFF E1.S, E1.L"),
    (0xC5, "EDSFF E3.S, E3.L"),
];

/// Slot data bus width, also used for the physical width of the slot.
pub const SLOT_BUS_WIDTHS: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "8 bit"),
    (0x04, "16 bit"),
    (0x05, "32 bit"),
    (0x06, "64 bit"),
    (0x07, "128 bit"),
    (0x08, "1x or x1"),
    (0x09, "2x or x2"),
    (0x0A, "4x or x4"),
    (0x0B, "8x or x8"),
    (0x0C, "12x or x12"),
    (0x0D, "16x or x16"),
    (0x0E, "32x or x32"),
];

pub const SLOT_USAGES: &EnumTable =
    &[(0x01, "Other"), (0x02, "Unknown"), (0x03, "Available"), (0x04, "In use"), (0x05, "Unavailable")];

pub const SLOT_LENGTHS: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Short"),
    (0x04, "Long"),
    (0x05, "2.5\" drive"),
    (0x06, "3.5\" drive"),
];

pub const SLOT_CHARACTERISTICS: &FlagTable = &[
    (1 << 0, "Unknown"),
    (1 << 1, "5 V"),
    (1 << 2, "3.3 V"),
    (1 << 3, "Shared"),
    (1 << 4, "Card-16"),
    (1 << 5, "CardBus"),
    (1 << 6, "Zoom video"),
    (1 << 7, "Modem ring resume"),
];

pub const SLOT_CHARACTERISTICS_2: &FlagTable = &[
    (1 << 0, "PME signal"),
    (1 << 1, "Hot-plug"),
    (1 << 2, "SMBus signal"),
    (1 << 3, "PCIe bifurcation"),
    (1 << 4, "Surprise removal"),
    (1 << 5, "Flexbus CXL 1.0"),
    (1 << 6, "Flexbus CXL 2.0"),
    (1 << 7, "Flexbus CXL 3.0"),
];

pub const SLOT_HEIGHTS: &EnumTable =
    &[(0x00, "Not applicable"), (0x01, "Other"), (0x02, "Unknown"), (0x03, "Full height"), (0x04, "Low profile")];

// Onboard devices (types 10 and 41)

pub const ONBOARD_DEVICE_TYPES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Video"),
    (0x04, "SCSI controller"),
    (0x05, "Ethernet"),
    (0x06, "Token ring"),
    (0x07, "Sound"),
    (0x08, "PATA controller"),
    (0x09, "SATA controller"),
    (0x0A, "SAS controller"),
    (0x0B, "Wireless LAN"),
    (0x0C, "Bluetooth"),
    (0x0D, "WWAN"),
    (0x0E, "eMMC"),
    (0x0F, "NVMe controller"),
    (0x10, "UFS controller"),
];

/// Processor family, including the values only reachable through the 16-bit family 2 field.
pub const PROCESSOR_FAMILIES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Intel 8086"),
    (0x04, "Intel 80286"),
    (0x05, "Intel 386"),
    (0x06, "Intel 486"),
    (0x07, "Intel 8087"),
    (0x08, "Intel 80287"),
    (0x09, "Intel 80387"),
    (0x0A, "Intel 80487"),
    (0x0B, "Intel Pentium"),
    (0x0C, "Intel Pentium Pro"),
    (0x0D, "Intel Pentium II"),
    (0x0E, "Intel Pentium MMX"),
    (0x0F, "Intel Celeron"),
    (0x10, "Intel Pentium II Xeon"),
    (0x11, "Intel Pentium III"),
    (0x12, "M1"),
    (0x13, "M2"),
    (0x14, "Intel Celeron M"),
    (0x15, "Intel Pentium 4 HT"),
    (0x18, "AMD Duron"),
    (0x19, "AMD K5"),
    (0x1A, "AMD K6"),
    (0x1B, "AMD K6-2"),
    (0x1C, "AMD K6-3"),
    (0x1D, "AMD Athlon"),
    (0x1E, "AMD 29000"),
    (0x1F, "AMD K6-2 Plus"),
    (0x20, "PowerPC"),
    (0x21, "PowerPC 601"),
    (0x22, "PowerPC 603"),
    (0x23, "PowerPC 603 Plus"),
    (0x24, "PowerPC 604"),
    (0x25, "PowerPC 620"),
    (0x26, "PowerPC x704"),
    (0x27, "PowerPC 750"),
    (0x28, "Intel Core Duo"),
    (0x29, "Intel Core Duo Mobile"),
    (0x2A, "Intel Core Solo Mobile"),
    (0x2B, "Intel Atom"),
    (0x2C, "Intel Core M"),
    (0x2D, "Intel Core m3"),
    (0x2E, "Intel Core m5"),
    (0x2F, "Intel Core m7"),
    (0x30, "Alpha"),
    (0x31, "Alpha 21064"),
    (0x32, "Alpha 21066"),
    (0x33, "Alpha 21164"),
    (0x34, "Alpha 21164PC"),
    (0x35, "Alpha 21164a"),
    (0x36, "Alpha 21264"),
    (0x37, "Alpha 21364"),
    (0x38, "AMD Turion II Ultra Dual Core Mobile M"),
    (0x39, "AMD Turion II Dual Core Mobile M"),
    (0x3A, "AMD Athlon II Dual Core M"),
    (0x3B, "AMD Opteron 6100 Series"),
    (0x3C, "AMD Opteron 4100 Series"),
    (0x3D, "AMD Opteron 6200 Series"),
    (0x3E, "AMD Opteron 4200 Series"),
    (0x3F, "AMD FX Series"),
    (0x40, "MIPS"),
    (0x41, "MIPS R4000"),
    (0x42, "MIPS R4200"),
    (0x43, "MIPS R4400"),
    (0x44, "MIPS R4600"),
    (0x45, "MIPS R10000"),
    (0x46, "AMD C Series"),
    (0x47, "AMD E Series"),
    (0x48, "AMD A Series"),
    (0x49, "AMD G Series"),
    (0x4A, "AMD Z Series"),
    (0x4B, "AMD R Series"),
    (0x4C, "AMD Opteron 4300"),
    (0x4D, "AMD Opteron 6300"),
    (0x4E, "AMD Opteron 3300"),
    (0x4F, "AMD FirePro Series"),
    (0x50, "SPARC"),
    (0x51, "SuperSPARC"),
    (0x52, "microSPARC II"),
    (0x53, "microSPARC IIep"),
    (0x54, "UltraSPARC"),
    (0x55, "UltraSPARC II"),
    (0x56, "UltraSPARC IIi"),
    (0x57, "UltraSPARC III"),
    (0x58, "UltraSPARC IIIi"),
    (0x60, "Motorola 68040"),
    (0x61, "Motorola 68xxx"),
    (0x62, "Motorola 68000"),
    (0x63, "Motorola 68010"),
    (0x64, "Motorola 68020"),
    (0x65, "Motorola 68030"),
    (0x66, "AMD Athlon X4 Quad Core"),
    (0x67, "AMD Opteron X1000 Series"),
    (0x68, "AMD Opteron X2000 Series"),
    (0x69, "AMD Opteron A Series"),
    (0x6A, "AMD Opteron X3000 Series"),
    (0x6B, "AMD Zen"),
    (0x70, "Hobbit"),
    (0x78, "Crusoe TM5000"),
    (0x79, "Crusoe TM3000"),
    (0x7A, "Efficeon TM8000"),
    (0x80, "Weitek"),
    (0x82, "Itanium"),
    (0x83, "AMD Athlon 64"),
    (0x84, "AMD Opteron"),
    (0x85, "AMD Sempron"),
    (0x86, "AMD Turion 64 Mobile"),
    (0x87, "Dual Core AMD Opteron"),
    (0x88, "AMD Athlon 64 X2 Dual Core"),
    (0x89, "AMD Turion 64 X2 Mobile"),
    (0x8A, "Quad Core AMD Opteron"),
    (0x8B, "Third Generation AMD Opteron"),
    (0x8C, "AMD Phenom FX Quad Core"),
    (0x8D, "AMD Phenom X4 Quad Core"),
    (0x8E, "AMD Phenom X2 Dual Core"),
    (0x8F, "AMD Athlon X2 Dual Core"),
    (0x90, "PA-RISC"),
    (0x91, "PA-RISC 8500"),
    (0x92, "PA-RISC 8000"),
    (0x93, "PA-RISC 7300LC"),
    (0x94, "PA-RISC 7200"),
    (0x95, "PA-RISC 7100LC"),
    (0x96, "PA-RISC 7100"),
    (0xA0, "V30"),
    (0xA1, "Quad Core Intel Xeon 3200 Series"),
    (0xA2, "Dual Core Intel Xeon 3000 Series"),
    (0xA3, "Quad Core Intel Xeon 5300 Series"),
    (0xA4, "Dual-core Intel Xeon 5100 Series"),
    (0xA5, "Dual-core Intel Xeon 5000 Series"),
    (0xA6, "Dual-core Intel Xeon LV"),
    (0xA7, "Dual-core Intel Xeon ULV"),
    (0xA8, "Dual-core Intel Xeon 7100 Series"),
    (0xA9, "Quad-core Intel Xeon 5400 Series"),
    (0xAA, "Quad-core Intel Xeon"),
    (0xAB, "Dual-core Intel Xeon 5200 Series"),
    (0xAC, "Dual-core Intel Xeon 7200 Series"),
    (0xAD, "Quad-core Intel Xeon 7300 Series"),
    (0xAE, "Quad-core Intel Xeon 7400 Series"),
    (0xAF, "Multi-core Intel Xeon 7400 Series"),
    (0xB0, "Pentium III Xeon"),
    (0xB1, "Pentium III SpeedStep"),
    (0xB2, "Pentium 4"),
    (0xB3, "Intel Xeon"),
    (0xB4, "AS400"),
    (0xB5, "Intel Xeon MP"),
    (0xB6, "AMD Athlon XP"),
    (0xB7, "AMD Athlon MP"),
    (0xB8, "Intel Itanium 2"),
    (0xB9, "Intel Pentium M"),
    (0xBA, "Intel Celeron D"),
    (0xBB, "Intel Pentium D"),
    (0xBC, "Intel Pentium Ex"),
    (0xBD, "Intel Core Solo"),
    (0xBF, "Intel Core 2"),
    (0xC0, "Intel Core 2 Solo"),
    (0xC1, "Intel Core 2 Extreme"),
    (0xC2, "Intel Core 2 Quad"),
    (0xC3, "Intel Core 2 Extreme Mobile"),
    (0xC4, "Intel Core 2 Duo Mobile"),
    (0xC5, "Intel Core 2 Solo Mobile"),
    (0xC6, "Intel Core i7"),
    (0xC7, "Dual-core Intel Celeron"),
    (0xC8, "IBM 390"),
    (0xFA, "Intel i860"),
    (0xFB, "Intel i960"),
    (0x0100, "ARMv7"),
    (0x0101, "ARMv8"),
    (0x0102, "ARMv9"),
    (0x0104, "SH3"),
    (0x0105, "SH4"),
    (0x0118, "ARM"),
    (0x0119, "StrongARM"),
    (0x012C, "6x86"),
    (0x012D, "MediaGX"),
    (0x012E, "MII"),
    (0x0140, "WinChip"),
    (0x015E, "DSP"),
    (0x01F4, "Video"),
    (0x0200, "RISC-V RV32"),
    (0x0201, "RISC-V RV64"),
    (0x0202, "RISC-V RV128"),
    (0x0258, "LoongArch"),
    (0x0259, "Loongson 1"),
    (0x025A, "Loongson 2"),
    (0x025B, "Loongson 3"),
    (0x025C, "Loongson 2K"),
    (0x025D, "Loongson 3A"),
    (0x025E, "Loongson 3B"),
    (0x025F, "Loongson 3C"),
    (0x0260, "Loongson 3D"),
    (0x0261, "Loongson 3E"),
    (0x0262, "Dual-core Loongson 2K"),
    (0x026C, "Quad-core Loongson 3A"),
    (0x026D, "Multi-core Loongson 3A"),
    (0x026E, "Quad-core Loongson 3B"),
    (0x026F, "Multi-core Loongson 3B"),
    (0x0270, "Multi-core Loongson 3C"),
    (0x0271, "Multi-core Loongson 3D"),
    (0x0300, "Intel Core 3"),
    (0x0301, "Intel Core 5"),
    (0x0302, "Intel Core 7"),
    (0x0303, "Intel Core 9"),
    (0x0304, "Intel Core Ultra 3"),
    (0x0305, "Intel Core Ultra 5"),
    (0x0306, "Intel Core Ultra 7"),
    (0x0307, "Intel Core Ultra 9"),
];

/// Processor socket or upgrade method.
pub const PROCESSOR_UPGRADES: &EnumTable = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Daughter board"),
    (0x04, "ZIF socket"),
    (0x05, "PiggyBack"),
    (0x06, "None"),
    (0x07, "LIF socket"),
    (0x08, "Slot 1"),
    (0x09, "Slot 2"),
    (0x0A, "Socket 370"),
    (0x0B, "Slot A"),
    (0x0C, "Slot M"),
    (0x0D, "Socket 423"),
    (0x0E, "Socket A"),
    (0x0F, "Socket 478"),
    (0x10, "Socket 754"),
    (0x11, "Socket 940"),
    (0x12, "Socket 939"),
    (0x13, "Socket mPGA604"),
    (0x14, "Socket LGA771"),
    (0x15, "Socket LGA775"),
    (0x16, "Socket S1"),
    (0x17, "Socket AM2"),
    (0x18, "Socket F1207"),
    (0x19, "Socket LGA1366"),
    (0x1A, "Socket G34"),
    (0x1B, "Socket AM3"),
    (0x1C, "Socket C32"),
    (0x1D, "Socket LGA1156"),
    (0x1E, "Socket LGA1567"),
    (0x1F, "Socket PGA988A"),
    (0x20, "Socket BGA1288"),
    (0x21, "Socket rPGA988B"),
    (0x22, "Socket BGA1023"),
    (0x23, "Socket BGA1224"),
    (0x24, "Socket LGA1155"),
    (0x25, "Socket LGA1356"),
    (0x26, "Socket LGA2011"),
    (0x27, "Socket FS1"),
    (0x28, "Socket FS2"),
    (0x29, "Socket FM1"),
    (0x2A, "Socket FM2"),
    (0x2B, "Socket LGA2011-3"),
    (0x2C, "Socket LGA1356-3"),
    (0x2D, "Socket LGA1150"),
    (0x2E, "Socket BGA1168"),
    (0x2F, "Socket BGA1234"),
    (0x30, "Socket BGA1364"),
    (0x31, "Socket AM4"),
    (0x32, "Socket LGA1151"),
    (0x33, "Socket BGA1356"),
    (0x34, "Socket BGA1440"),
    (0x35, "Socket BGA1515"),
    (0x36, "Socket LGA3647-1"),
    (0x37, "Socket SP3"),
    (0x38, "Socket SP3r2"),
    (0x39, "Socket LGA2066"),
    (0x3A, "Socket BGA1392"),
    (0x3B, "Socket BGA1510"),
    (0x3C, "Socket BGA1528"),
    (0x3D, "Socket LGA4189"),
    (0x3E, "Socket LGA1200"),
    (0x3F, "Socket LGA4677"),
    (0x40, "Socket LGA1700"),
    (0x41, "Socket BGA1744"),
    (0x42, "Socket BGA1781"),
    (0x43, "Socket BGA1211"),
    (0x44, "Socket BGA2422"),
    (0x45, "Socket LGA1211"),
    (0x46, "Socket LGA2422"),
    (0x47, "Socket LGA5773"),
    (0x48, "Socket BGA5773"),
    (0x49, "Socket AM5"),
    (0x4A, "Socket SP5"),
    (0x4B, "Socket SP6"),
    (0x4C, "Socket BGA883"),
    (0x4D, "Socket BGA1190"),
    (0x4E, "Socket BGA4129"),
    (0x4F, "Socket LGA4710"),
    (0x50, "Socket LGA7529"),
    (0x51, "Socket BGA1964"),
    (0x52, "Socket BGA1792"),
    (0x53, "Socket BGA2049"),
    (0x54, "Socket BGA2551"),
    (0x55, "Socket LGA1851"),
    (0x56, "Socket BGA2114"),
    (0x57, "Socket BGA2833"),
];
