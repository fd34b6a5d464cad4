//! Environment-driven tuning for region searches
//!
//! - `QR_ALIGN_ALLOWANCE_FACTORS`: comma-separated allowance factors tried in
//!   order, e.g. `4,8,16`
//! - `QR_ALIGN_MIN_WINDOW_MODULES`: smallest window side worth searching, in
//!   modules (1..=16)

use std::sync::OnceLock;

const DEFAULT_ALLOWANCE_FACTORS: [u32; 3] = [4, 8, 16];
const DEFAULT_MIN_WINDOW_MODULES: usize = 3;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_factor_list(raw: &str) -> Vec<u32> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<u32>().ok())
        .filter(|&factor| factor > 0)
        .collect()
}

/// Settings for [`AlignmentFinder::find_in_region`](crate::detector::alignment::AlignmentFinder::find_in_region)
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSearchConfig {
    /// Half-widths of successive search windows, in module sizes
    pub allowance_factors: Vec<u32>,
    /// Windows narrower or shorter than this many modules are skipped
    pub min_window_modules: f32,
}

impl Default for RegionSearchConfig {
    fn default() -> Self {
        Self {
            allowance_factors: DEFAULT_ALLOWANCE_FACTORS.to_vec(),
            min_window_modules: DEFAULT_MIN_WINDOW_MODULES as f32,
        }
    }
}

impl RegionSearchConfig {
    /// Read the `QR_ALIGN_*` variables, falling back to defaults for
    /// anything missing or malformed
    pub fn from_env() -> Self {
        let allowance_factors = std::env::var("QR_ALIGN_ALLOWANCE_FACTORS")
            .ok()
            .map(|raw| parse_factor_list(&raw))
            .filter(|factors| !factors.is_empty())
            .unwrap_or_else(|| DEFAULT_ALLOWANCE_FACTORS.to_vec());
        let min_window_modules =
            parse_env_usize("QR_ALIGN_MIN_WINDOW_MODULES", DEFAULT_MIN_WINDOW_MODULES).clamp(1, 16);

        Self {
            allowance_factors,
            min_window_modules: min_window_modules as f32,
        }
    }

    /// Process-wide settings, read from the environment once
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<RegionSearchConfig> = OnceLock::new();
        GLOBAL.get_or_init(Self::from_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegionSearchConfig::default();
        assert_eq!(config.allowance_factors, vec![4, 8, 16]);
        assert_eq!(config.min_window_modules, 3.0);
    }

    #[test]
    fn test_parse_factor_list() {
        assert_eq!(parse_factor_list("4, 8,16"), vec![4, 8, 16]);
        assert_eq!(parse_factor_list("2,x,0,5"), vec![2, 5]);
        assert!(parse_factor_list("").is_empty());
    }
}
