//! Command-line argument definitions and the small sub-syntaxes (`-t`, `-l`,
//! `-D`) the spec layers on top of plain flags.

use std::path::PathBuf;

use clap::Parser;

use crate::error::{CrackError, Result};

/// GPU-oriented Markov password candidate generator and dictionary matcher.
#[derive(Parser, Debug)]
#[command(name = "mpcrack", version, about, long_about = None)]
pub struct Args {
    /// Verbose output (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enumerate compute platforms/devices and exit.
    #[arg(long)]
    pub list_platforms: bool,

    /// Platform index and optional device indices: `plat[:dev[,dev]]`.
    #[arg(short = 'D', long, default_value = "0")]
    pub devices: String,

    /// Global work size per device.
    #[arg(short, long, default_value_t = crate::config::DEFAULT_GWS)]
    pub gws: u32,

    /// Wordlist, one entry per line.
    #[arg(short, long, required_unless_present = "list_platforms")]
    pub dictionary: Option<PathBuf>,

    /// Max hash-table load factor.
    #[arg(long, default_value_t = crate::config::DEFAULT_LOAD_FACTOR)]
    pub load_factor: f64,

    /// Print plaintexts of recovered entries.
    #[arg(short, long)]
    pub print: bool,

    /// Markov statistics file.
    #[arg(short, long, required_unless_present = "list_platforms")]
    pub statistics: Option<PathBuf>,

    /// Per-position character budgets: `glob[:p0,p1,...]`.
    #[arg(short, long, default_value_t = crate::config::DEFAULT_THRESHOLD.to_string())]
    pub thresholds: String,

    /// Length range `min:max`, 1 <= min <= max <= 64.
    #[arg(short, long, default_value = "1:50")]
    pub length: String,

    /// Mask, syntax per the mask metacharacter table; defaults to all-printable.
    #[arg(short, long)]
    pub mask: Option<String>,

    /// Markov model type.
    #[arg(short = 'M', long, default_value = "classic")]
    pub model: String,
}

/// Parsed `-D/--devices`: a platform index and an optional explicit device list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSelector {
    pub platform: usize,
    pub devices: Option<Vec<usize>>,
}

pub fn parse_devices(s: &str) -> Result<DeviceSelector> {
    let mut parts = s.splitn(2, ':');
    let platform_str = parts.next().unwrap_or("");
    let platform: usize = platform_str
        .parse()
        .map_err(|_| CrackError::UsageError(format!("invalid platform index '{platform_str}'")))?;
    let devices = match parts.next() {
        None => None,
        Some(list) => {
            let mut out = Vec::new();
            for piece in list.split(',') {
                let d: usize = piece.parse().map_err(|_| {
                    CrackError::UsageError(format!("invalid device index '{piece}'"))
                })?;
                out.push(d);
            }
            Some(out)
        }
    };
    Ok(DeviceSelector { platform, devices })
}

/// Parsed `-l/--length`: an inclusive `[min, max]` range.
pub fn parse_length(s: &str, max_pass_length: usize) -> Result<(usize, usize)> {
    let (min_str, max_str) = s
        .split_once(':')
        .ok_or_else(|| CrackError::UsageError(format!("length '{s}' must be 'min:max'")))?;
    let min: usize = min_str
        .parse()
        .map_err(|_| CrackError::UsageError(format!("invalid min length '{min_str}'")))?;
    let max: usize = max_str
        .parse()
        .map_err(|_| CrackError::UsageError(format!("invalid max length '{max_str}'")))?;
    if min < 1 || max > max_pass_length || min > max {
        return Err(CrackError::UsageError(format!(
            "length range must satisfy 1 <= min <= max <= {max_pass_length}"
        )));
    }
    Ok((min, max))
}

/// Parsed `-t/--thresholds`: a global default plus `(position, value)`
/// overrides.
pub fn parse_thresholds(s: &str) -> Result<(u32, Vec<(usize, u32)>)> {
    let (global_str, overrides_str) = match s.split_once(':') {
        Some((g, rest)) => (g, Some(rest)),
        None => (s, None),
    };
    let global: u32 = global_str
        .parse()
        .map_err(|_| CrackError::UsageError(format!("invalid global threshold '{global_str}'")))?;
    let mut overrides = Vec::new();
    if let Some(rest) = overrides_str {
        for (position, value) in rest.split(',').enumerate() {
            let v: u32 = value
                .parse()
                .map_err(|_| CrackError::UsageError(format!("invalid threshold override '{value}'")))?;
            overrides.push((position, v));
        }
    }
    Ok((global, overrides))
}
