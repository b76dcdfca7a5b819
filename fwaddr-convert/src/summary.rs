use serde::Serialize;

use crate::convert::Conversion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub addresses: usize,
    pub groups: usize,
    pub grouped_members: usize,
    pub unknown_masks: usize,
}

pub fn summarize(conv: &Conversion) -> ConversionSummary {
    ConversionSummary {
        addresses: conv.addresses.len(),
        groups: conv.materialized_groups().count(),
        grouped_members: conv.materialized_groups().map(|g| g.members.len()).sum(),
        unknown_masks: conv.unknown_masks.len(),
    }
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary addresses={} groups={} grouped_members={} unknown_masks={}",
        summary.addresses, summary.groups, summary.grouped_members, summary.unknown_masks
    )
}
