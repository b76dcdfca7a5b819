//! Host inventory to FortiGate address object conversion.
//!
//! Reads a CSV inventory of hosts and networks and renders two FortiGate
//! configuration blocks: `config firewall address` with one object per row,
//! and `config firewall addrgrp` grouping objects whose hostnames share a
//! prefix once trailing digits are removed (`web01`, `web02` → `web`).
//!
//! # Modules
//!
//! - [`inventory`] — CSV reading with configurable header names
//! - [`mask`] — dotted-decimal mask to CIDR lookup and unknown-mask policy
//! - [`prefix`] — group name derivation from hostnames
//! - [`convert`] — address/group building and text rendering
//! - [`settings`] — TOML settings with embedded defaults
//! - [`summary`] — post-conversion counts
//! - [`template`] — sample CSV and usage text
//!
//! # Examples
//!
//! ```
//! use fwaddr_convert::convert::convert_to_text;
//! use fwaddr_convert::inventory::{read_inventory, InputRow};
//! use fwaddr_convert::mask::MaskPolicy;
//! use fwaddr_convert::settings::ColumnNames;
//!
//! let csv = "hostname,ip address,Subnetmask,comment\n\
//!            web01,10.0.0.1,255.255.255.255,\n\
//!            web02,10.0.0.2,255.255.255.255,\n";
//! let rows = read_inventory(csv.as_bytes(), &ColumnNames::default()).unwrap();
//! assert_eq!(rows[0], InputRow::new("web01", "10.0.0.1", "255.255.255.255", ""));
//!
//! let text = convert_to_text(&rows, MaskPolicy::Host).unwrap();
//! assert!(text.contains("edit \"web\"\n        set member \"web01_10.0.0.1/32\" \"web02_10.0.0.2/32\""));
//! ```

pub mod convert;
pub mod error;
pub mod inventory;
pub mod mask;
pub mod prefix;
pub mod settings;
pub mod summary;
pub mod template;

pub use error::ConvertError;
