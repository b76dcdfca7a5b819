//! Address object and address group generation.
//!
//! Rows become address objects one-to-one, in input order. Each object is also
//! filed under the group named by its hostname prefix (see [`group_prefix`]);
//! only groups with at least two members are written out.
//!
//! ## Output
//!
//! ```text
//! config firewall address
//! edit "web01_10.0.0.1/32"
//!         set subnet 10.0.0.1 255.255.255.255
//! next
//! end
//! config firewall addrgrp
//! edit "web"
//!         set member "web01_10.0.0.1/32" "web02_10.0.0.2/32"
//! next
//! end
//! ```

use crate::error::ConvertError;
use crate::inventory::InputRow;
use crate::mask::{cidr_of, MaskPolicy, FALLBACK_PREFIX_LEN};
use crate::prefix::group_prefix;

const ADDRESS_HEADER: &str = "config firewall address";
const GROUP_HEADER: &str = "config firewall addrgrp";
const INDENT: &str = "        ";

/// One `config firewall address` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    pub name: String,
    pub ip_address: String,
    pub subnet_mask: String,
    pub comment: Option<String>,
}

/// Address names sharing a hostname prefix, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub prefix: String,
    pub members: Vec<String>,
}

impl GroupEntry {
    /// Singleton prefixes are tracked but never emitted.
    pub fn is_materialized(&self) -> bool {
        self.members.len() > 1
    }
}

/// A row whose mask fell back to `/32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMask {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    pub hostname: String,
    pub mask: String,
}

/// Result of converting one inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub addresses: Vec<AddressEntry>,
    /// All prefixes in first-seen order, including singletons.
    pub groups: Vec<GroupEntry>,
    pub unknown_masks: Vec<UnknownMask>,
}

impl Conversion {
    pub fn materialized_groups(&self) -> impl Iterator<Item = &GroupEntry> {
        self.groups.iter().filter(|g| g.is_materialized())
    }

    /// `config firewall address` block, newline terminated.
    pub fn render_addresses(&self) -> String {
        let mut lines = vec![ADDRESS_HEADER.to_string()];
        for entry in &self.addresses {
            lines.push(format!("edit \"{}\"", entry.name));
            lines.push(format!(
                "{INDENT}set subnet {} {}",
                entry.ip_address, entry.subnet_mask
            ));
            if let Some(comment) = &entry.comment {
                lines.push(format!("{INDENT}set comment \"{comment}\""));
            }
            lines.push("next".to_string());
        }
        lines.push("end".to_string());
        lines.join("\n") + "\n"
    }

    /// `config firewall addrgrp` block, newline terminated.
    pub fn render_groups(&self) -> String {
        let mut lines = vec![GROUP_HEADER.to_string()];
        for group in self.materialized_groups() {
            let members = group
                .members
                .iter()
                .map(|m| format!("\"{m}\""))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("edit \"{}\"", group.prefix));
            lines.push(format!("{INDENT}set member {members}"));
            lines.push("next".to_string());
        }
        lines.push("end".to_string());
        lines.join("\n") + "\n"
    }

    /// Address block followed by group block.
    pub fn render(&self) -> String {
        self.render_addresses() + &self.render_groups()
    }
}

/// Build address objects and groups from inventory rows.
///
/// # Errors
///
/// With [`MaskPolicy::Strict`], the first row whose mask is not in the mask
/// table fails the whole conversion. Matching is on the exact string, so
/// `255.255.255.000` is not recognised.
pub fn convert_rows(rows: &[InputRow], policy: MaskPolicy) -> Result<Conversion, ConvertError> {
    let mut out = Conversion::default();

    for (idx, row) in rows.iter().enumerate() {
        let row_no = idx + 1;
        let prefix_len = match cidr_of(&row.subnet_mask) {
            Some(len) => len,
            None => {
                if policy == MaskPolicy::Strict {
                    return Err(ConvertError::UnknownMask {
                        row: row_no,
                        hostname: row.hostname.clone(),
                        mask: row.subnet_mask.clone(),
                    });
                }
                tracing::debug!(
                    row = row_no,
                    hostname = %row.hostname,
                    mask = %row.subnet_mask,
                    "unknown subnet mask, treating as /{FALLBACK_PREFIX_LEN}"
                );
                out.unknown_masks.push(UnknownMask {
                    row: row_no,
                    hostname: row.hostname.clone(),
                    mask: row.subnet_mask.clone(),
                });
                FALLBACK_PREFIX_LEN
            }
        };

        let name = format!("{}_{}/{prefix_len}", row.hostname, row.ip_address);
        add_to_group(&mut out.groups, group_prefix(&row.hostname), &name);
        tracing::debug!(row = row_no, %name, "address object");

        out.addresses.push(AddressEntry {
            name,
            ip_address: row.ip_address.clone(),
            subnet_mask: row.subnet_mask.clone(),
            comment: row.comment.clone(),
        });
    }

    tracing::info!(
        addresses = out.addresses.len(),
        groups = out.materialized_groups().count(),
        "conversion complete"
    );
    Ok(out)
}

/// Render the full configuration text for a set of rows.
pub fn convert_to_text(rows: &[InputRow], policy: MaskPolicy) -> Result<String, ConvertError> {
    Ok(convert_rows(rows, policy)?.render())
}

fn add_to_group(groups: &mut Vec<GroupEntry>, prefix: &str, name: &str) {
    match groups.iter_mut().find(|g| g.prefix == prefix) {
        Some(group) => group.members.push(name.to_string()),
        None => groups.push(GroupEntry {
            prefix: prefix.to_string(),
            members: vec![name.to_string()],
        }),
    }
}
