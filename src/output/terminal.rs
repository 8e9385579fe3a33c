//! Terminal output.
//!
//! Renders reports as colored text. Every function returns a `String`; the
//! caller decides where it goes.

use crate::models::{byte_to_bin_str, ip_to_bin_str, SubnetFacts, MAX_LENGTH};
use crate::parsing::ParseError;
use crate::processing::{InputReport, SubnetReport};
use colored::Colorize;

/// Width of the key column in the summary block.
const LABEL_WIDTH: usize = 15;

/// Format a key as a left-aligned, colon-terminated label.
///
/// # Arguments
/// * `key` - The label text
/// * `width` - The minimum width of the label before the colon
pub fn format_label(key: &str, width: usize) -> String {
    format!("{key:<width$}:")
}

fn ordinal(n: usize) -> String {
    match n {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{n}th"),
    }
}

fn next_subnet_text(facts: &SubnetFacts) -> String {
    match facts.next_subnet {
        Some(next) => next.to_string(),
        None => "none (end of the IPv4 address space)".to_string(),
    }
}

/// The banner printed above each input.
pub fn render_header(report: &InputReport) -> String {
    format!(
        "{}",
        format!("========== {}   INPUT='{}' ==========", report.label, report.input)
            .bright_blue()
            .bold()
    )
}

/// The key/value summary of a subnet.
pub fn render_summary(facts: &SubnetFacts) -> String {
    let rows: Vec<(&str, String)> = vec![
        ("Network", facts.network.to_string()),
        ("CIDR", format!("/{}", facts.prefix)),
        ("Netmask", facts.netmask.to_string()),
        ("Wildcard", facts.wildcard.to_string()),
        ("First Host", facts.first_host.to_string()),
        ("Last Host", facts.last_host.to_string()),
        ("Broadcast", facts.broadcast.to_string()),
        ("Next Subnet", next_subnet_text(facts)),
        ("Total Addresses", facts.total_addresses.to_string()),
        ("Usable Hosts", facts.usable_hosts.to_string()),
    ];

    rows.iter()
        .map(|(key, value)| {
            let label = format_label(key, LABEL_WIDTH);
            let label = if key.contains("Host") {
                label.bright_green().bold()
            } else {
                label.bright_cyan().bold()
            };
            format!("{label} {value}")
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// The step-by-step binary explanation of how the facts were derived.
pub fn render_explanation(report: &SubnetReport) -> String {
    let facts = &report.facts;
    let breakdown = &report.breakdown;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{}", "----- DETAILED EXPLANATION -----".bright_magenta().bold()));
    lines.push(format!("{} {}", "Input IP       :".bright_cyan().bold(), facts.address));
    lines.push(format!("{} {}", "Normalized CIDR:".bright_cyan().bold(), facts.cidr()));
    lines.push(format!("{} {}", "Netmask        :".bright_cyan().bold(), facts.netmask));
    lines.push(String::new());

    lines.push(format!("{}", "                ADDRESS".bright_blue().bold()));
    lines.push(format!("{}", ip_to_bin_str(facts.address).bright_cyan()));
    lines.push(format!("{}", "                SUBMASK".bright_blue().bold()));
    lines.push(format!("{}", ip_to_bin_str(facts.netmask).bright_cyan()));
    lines.push(String::new());

    match breakdown.transition {
        Some(t) => {
            lines.push(format!(
                "{} {}",
                "Transition byte index (0-based):".bright_green().bold(),
                t.index
            ));
            lines.push(format!(
                "{} {}",
                "Bits set in transition byte    :".bright_green().bold(),
                t.ones
            ));
            lines.push(format!(
                "{} {} = {}",
                "Transition byte value          :".bright_green().bold(),
                byte_to_bin_str(t.mask_octet),
                t.mask_octet
            ));
        }
        None => lines.push(format!(
            "{}",
            "No partial transition byte (prefix multiple of 8 or /0).".bright_yellow().bold()
        )),
    }
    lines.push(String::new());

    lines.push(format!(
        "{}",
        "Step 1: Network Address (IP AND Netmask)".bright_blue().bold()
    ));
    for row in &breakdown.octets {
        let marker = if row.is_transition {
            format!("{}", "  <- transition".bright_yellow())
        } else {
            String::new()
        };
        lines.push(format!(
            "{} {:3} ({})  AND  {:3} ({})  =  {}{}",
            format!("{} byte:", ordinal(row.index + 1)).bright_cyan().bold(),
            row.ip,
            row.ip_bits,
            row.mask,
            row.mask_bits,
            format!("{:3} ({})", row.network, row.network_bits).bright_green(),
            marker
        ));
    }
    lines.push(format!(
        "{} {}",
        "Full network IP:".bright_green().bold(),
        facts.network.to_string().bright_green()
    ));
    lines.push(String::new());

    lines.push(format!("{}", "Step 2: First Host".bright_blue().bold()));
    lines.push(match facts.prefix {
        MAX_LENGTH => format!(
            "- /32 is a single host, the only address is the host -> {}",
            facts.first_host.to_string().bright_green()
        ),
        31 => format!(
            "- /31 is a point-to-point link, first host = network IP -> {}",
            facts.first_host.to_string().bright_green()
        ),
        _ => format!(
            "- First host = network IP + 1 -> {}",
            facts.first_host.to_string().bright_green()
        ),
    });
    lines.push(String::new());

    lines.push(format!("{}", "Step 3: Last Host".bright_blue().bold()));
    if facts.is_point_to_point() {
        lines.push(format!(
            "- Last host = broadcast -> {}",
            facts.last_host.to_string().bright_green()
        ));
        lines.push(format!(
            "- Usable hosts = Total addresses = {}",
            facts.usable_hosts.to_string().bright_green()
        ));
    } else {
        lines.push(format!(
            "- Last host = broadcast - 1 -> {}",
            facts.last_host.to_string().bright_green()
        ));
        lines.push(format!(
            "- Usable hosts = Total addresses - 2 = {} - 2 = {}",
            facts.total_addresses,
            facts.usable_hosts.to_string().bright_green()
        ));
    }
    lines.push(String::new());

    lines.push(format!("{}", "Step 4: Broadcast Address".bright_blue().bold()));
    lines.push(format!(
        "- Broadcast = all host bits set to 1 -> {}",
        facts.broadcast.to_string().bright_green()
    ));
    if !facts.is_point_to_point() {
        lines.push(format!(
            "- Also: broadcast = last host + 1 -> {} + 1 = {}",
            facts.last_host,
            facts.broadcast.to_string().bright_green()
        ));
    }
    lines.push(String::new());

    lines.push(format!("{}", "Step 5: Next Subnet".bright_blue().bold()));
    lines.push("- Next subnet starts at network address + block size".to_string());
    lines.push(format!("  = {} + {}", facts.network, facts.total_addresses));
    lines.push(format!("  = {}", next_subnet_text(facts).bright_green()));
    lines.push(format!("{}", "----- END EXPLANATION -----".bright_magenta().bold()));

    lines.join("\n")
}

/// A rejected input, shown distinctly from successful output.
pub fn render_failure(label: &str, error: &ParseError) -> String {
    format!(
        "{} [{}] {}",
        format!("{label} ERROR:").bright_red().bold(),
        error.kind(),
        error.to_string().bright_red()
    )
}

/// Render every report, separated by blank lines.
pub fn render_reports(reports: &[InputReport], explain: bool) -> String {
    reports
        .iter()
        .map(|report| match &report.outcome {
            Ok(subnet) => {
                let mut block = format!(
                    "{}\n{}",
                    render_header(report),
                    render_summary(&subnet.facts)
                );
                if explain {
                    block.push_str("\n\n");
                    block.push_str(&render_explanation(subnet));
                }
                block
            }
            Err(e) => render_failure(&report.label, e),
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}
