//! Parsers for the two `areca.cli64` output formats.
//!
//! The vendor CLI prints human-readable reports, not a wire format, so both
//! parsers here are deliberately forgiving: any line that does not match the
//! expected shape is skipped, and malformed input degrades to a smaller (or
//! empty) result rather than an error. A failed poll must never take the
//! exporter down.
//!
//! `sys info` looks like:
//!
//! ```text
//! The System Information
//! ===========================================
//! Main Processor     : 800MHz
//! Controller Name    : ARC-1882
//! Firmware Version   : V1.52 2014-11-07
//! ===========================================
//! GuiErrMsg<0x00>: Success.
//! ```
//!
//! `rsf info` is a fixed-column table:
//!
//! ```text
//!  #  Name             Disks TotalCap  FreeCap DiskChannels State
//! ===============================================================
//!  1  Raid Set # 00        4  8000.0GB     0.0GB 1234         Normal
//! ===============================================================
//! GuiErrMsg<0x00>: Success.
//! ```
//!
//! Data rows are picked out by their column layout alone. The header line is
//! never consulted: ancient firmware revisions reorder and rename columns,
//! while the column order of the data rows themselves has stayed fixed.

use crate::areca::types::{ControllerInfo, RaidSetRecord};

/// Key/value separator in `sys info` output. Only the first occurrence
/// splits the line; values may contain further colons (timestamps do).
const KV_DELIMITER: &str = ": ";

/// Normalized prefix of the CLI's trailing status line. The raw spelling
/// varies (`GuiErrMsg<0x00>: Success.`, sometimes with a literal NUL byte),
/// but after key normalization it always starts with this.
const STATUS_KEY_PREFIX: &str = "guierrmsg";

/// Number of bound fields in a raid-set row.
const RSF_FIELD_COUNT: usize = 7;

/// Tokens contributed by the inline `Raid Set # NN` name column. Dropped
/// before positional binding so the variable-width name does not shift the
/// remaining columns.
const RSF_NOISE_TOKENS: [&str; 3] = ["Raid", "Set", "#"];

/// Parse `sys info` output into the controller's identity labels.
///
/// Every line containing `": "` contributes one entry: the text before the
/// first occurrence becomes the key (trimmed, lowercased, whitespace runs
/// replaced with `_`), the text after it becomes the value (trimmed,
/// otherwise verbatim). Later duplicates overwrite earlier ones. Lines
/// without the delimiter, and the CLI's own `GuiErrMsg` status line, are
/// dropped.
pub fn parse_sys_info(output: &[u8]) -> ControllerInfo {
    String::from_utf8_lossy(output)
        .lines()
        .filter_map(|line| line.split_once(KV_DELIMITER))
        .filter_map(|(key, value)| {
            let key = normalize_key(key);
            if key.starts_with(STATUS_KEY_PREFIX) {
                return None;
            }
            Some((key, value.trim().to_string()))
        })
        .collect()
}

/// Lowercase a raw key and collapse each whitespace run to one underscore,
/// yielding a valid Prometheus label name for the keys the CLI emits.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Parse `rsf info` output into raid-set records, preserving row order.
///
/// A line is a candidate data row iff its second byte is an ASCII digit:
/// the CLI right-aligns the one- or two-digit set index in the leftmost two
/// columns, so data rows (and only data rows) put a digit there. Headers,
/// `=` separator lines, and the status trailer all fail the test.
///
/// Candidate rows are split on whitespace, the name-column filler tokens
/// are dropped, and the first [`RSF_FIELD_COUNT`] remaining tokens bind
/// positionally to the record fields. Rows yielding fewer tokens are
/// skipped; surplus tokens are ignored.
pub fn parse_rsf_info(output: &[u8]) -> Vec<RaidSetRecord> {
    output
        .split(|&byte| byte == b'\n')
        .filter(|line| line.len() >= 2 && line[1].is_ascii_digit())
        .filter_map(parse_rsf_row)
        .collect()
}

fn parse_rsf_row(line: &[u8]) -> Option<RaidSetRecord> {
    let text = String::from_utf8_lossy(line);
    let fields: Vec<&str> = text
        .split_whitespace()
        .filter(|token| !RSF_NOISE_TOKENS.contains(token))
        .collect();
    if fields.len() < RSF_FIELD_COUNT {
        return None;
    }

    let id = fields[0];
    // fields[1] is the numeric tail of the name column and is discarded;
    // the exported name is rebuilt from the set index instead, which keeps
    // it stable across firmware renames of the set.
    Some(RaidSetRecord {
        id: id.to_string(),
        name: format!("Raid Set # {}", id),
        disks: fields[2].to_string(),
        total_capacity: fields[3].to_string(),
        free_capacity: fields[4].to_string(),
        disk_channels: fields[5].to_string(),
        state: fields[6].to_string(),
    })
}
