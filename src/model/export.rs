//! Plain text roster export format.
//!
//! One record per line, fields separated by `;`:
//!
//! ```text
//! # comment lines are ignored
//! Thrall;shaman;1;2
//! Varian;warrior;protection
//! ```
//!
//! Fields are `name;class;spec[;status]`. The spec may be given as an index into the class's
//! spec list or as the spec's name.

use crate::model::{
    class::ClassSpecTable,
    player::{InviteStatus, PlayerEntry, SpecRef},
};

const FIELD_SEPARATOR: char = ';';
const COMMENT_PREFIX: char = '#';

/// Renders a roster as export text, every record terminated by a newline.
///
/// With `with_status` the invite status code is appended as a fourth field, which is the
/// form builds are saved in.
pub fn render_export(roster: &[PlayerEntry], with_status: bool) -> String {
    let mut output = String::new();

    for entry in roster {
        output.push_str(&format!("{};{};{}", entry.name, entry.class, entry.spec.id));
        if with_status {
            let status = entry.status.map(|s| s.to_string()).unwrap_or_default();
            output.push(FIELD_SEPARATOR);
            output.push_str(&status);
        }
        output.push('\n');
    }

    output
}

/// Parses export text back into roster entries.
///
/// Parsing is forgiving: whitespace is stripped, class and spec are matched
/// case-insensitively and the name is capitalized. Comment lines and lines with fewer than
/// three fields are ignored. A spec that is neither a valid index nor a known spec name
/// falls back to the first spec, a missing or unknown status to accepted.
pub fn parse_export(text: &str, table: &ClassSpecTable) -> Vec<PlayerEntry> {
    text.lines()
        .filter_map(|line| parse_line(line, table))
        .collect()
}

fn parse_line(line: &str, table: &ClassSpecTable) -> Option<PlayerEntry> {
    let line = line.trim().to_lowercase();
    if line.starts_with(COMMENT_PREFIX) {
        return None;
    }

    let line: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 3 {
        return None;
    }

    let name = capitalize(fields[0]);
    let class = fields[1].to_string();
    let spec_id = match fields[2].parse::<usize>() {
        Ok(id) => id,
        Err(_) => table.find_spec_by_name(&class, fields[2]).unwrap_or(0),
    };
    let status = fields
        .get(3)
        .and_then(|code| code.parse::<u8>().ok())
        .and_then(|code| InviteStatus::new(code).normalize())
        .unwrap_or_default();

    Some(PlayerEntry {
        name,
        class,
        spec: SpecRef {
            id: spec_id,
            ilvl: None,
        },
        status: Some(status),
    })
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
