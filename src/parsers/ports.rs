use once_cell::sync::Lazy;
use regex::Regex;

/// One group in a port-configuration cell, e.g. `4*10G SFP+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortGroup {
    pub port_type: String,
    pub count: u32,
    pub combo: bool,
}

impl PortGroup {
    /// Count as it should appear in an output value, combo marker kept.
    pub fn display_count(&self) -> String {
        if self.combo {
            format!("{} (combo)", self.count)
        } else {
            self.count.to_string()
        }
    }
}

static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*[*x×]\s*(.+)$").expect("Invalid port group regex"));

/// Parse a port-configuration cell like
/// `24*10/100/1000Base-T, 4*10G SFP+ (combo)` into typed count groups.
/// Text that does not follow the `N*TYPE` shape yields no groups.
pub fn parse_port_groups(text: &str) -> Vec<PortGroup> {
    let mut groups = Vec::new();

    for part in text.split(|c| c == ',' || c == ';') {
        let part = part.trim();
        let Some(caps) = GROUP_RE.captures(part) else {
            continue;
        };
        let Ok(count) = caps[1].parse::<u32>() else {
            continue;
        };

        let mut port_type = caps[2].trim().to_string();
        let combo = port_type.to_lowercase().contains("combo");

        // Drop trailing parentheticals ("(combo)", "(fixed)") and the
        // redundant "port(s)" suffix; the type itself is the field key.
        if let Some(idx) = port_type.find('(') {
            port_type.truncate(idx);
        }
        let lowered = port_type.to_lowercase();
        for suffix in ["ports", "port", "端口"] {
            if let Some(stripped) = lowered.strip_suffix(suffix) {
                port_type.truncate(stripped.len());
                break;
            }
        }
        let port_type = port_type.trim().to_string();
        if port_type.is_empty() {
            continue;
        }

        groups.push(PortGroup {
            port_type,
            count,
            combo,
        });
    }

    groups
}
