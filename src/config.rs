// src/config.rs
use quality_probe_domain::{
    GlobPattern, SnapshotOptions, Thresholds,
    analytics::{ComplexityTarget, MiBands},
};
use quality_probe_shared_kernel::{DomainResult, PresentationError, Result};
use quality_probe_usecase::ProbeRequest;

use crate::{
    args::{OutputFormat, ScanArgs},
    parsers::parse_finite_f64,
};

pub const ENV_FAIL_MI_BELOW: &str = "QUALITY_PROBE_FAIL_MI_BELOW";
pub const ENV_FAIL_TYPING_BELOW: &str = "QUALITY_PROBE_FAIL_TYPING_BELOW";

/// Fully resolved settings of a `scan` run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub request: ProbeRequest,
    pub format: OutputFormat,
    pub complexity_target: ComplexityTarget,
}

impl ScanConfig {
    /// Resolve from process arguments and the real environment.
    pub fn from_args(args: ScanArgs) -> Result<Self> {
        Self::resolve(args, |name| std::env::var(name).ok())
    }

    /// Resolve with an injectable environment lookup.
    ///
    /// Floors come from the flag, else the environment, else the default.
    pub fn resolve(args: ScanArgs, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let top_k = match args.top {
            Some(0) => {
                return Err(PresentationError::InvalidValue {
                    flag: "--top".to_string(),
                    value: "0".to_string(),
                    reason: "must be at least 1".to_string(),
                }
                .into());
            }
            Some(n) => n,
            None => SnapshotOptions::DEFAULT_TOP_K,
        };

        let mi_floor = resolve_floor(args.fail_mi_below, ENV_FAIL_MI_BELOW, Thresholds::DEFAULT_MI_FLOOR, &env)?;
        let typing_floor =
            resolve_floor(args.fail_typing_below, ENV_FAIL_TYPING_BELOW, Thresholds::DEFAULT_TYPING_FLOOR_PCT, &env)?;
        let thresholds = Thresholds::new(mi_floor, typing_floor)?;

        let mi_bands = match args.watch_floor {
            Some(watch) => MiBands::new(watch, MiBands::DEFAULT_HIGH_FLOOR.max(watch))?,
            None => MiBands::default(),
        };
        let hotspot_exclusions =
            args.hotspot_exclude.iter().map(|p| GlobPattern::new(p)).collect::<DomainResult<Vec<_>>>()?;

        let options = SnapshotOptions { top_k, mi_bands, hotspot_exclusions, ..SnapshotOptions::default() };
        let complexity_target = args.complexity_target.map_or_else(ComplexityTarget::default, ComplexityTarget::new);

        let request = ProbeRequest {
            measurements: args.measurements,
            root: args.root,
            options,
            thresholds,
            save_to: args.output,
        };
        Ok(Self { request, format: args.format, complexity_target })
    }
}

fn resolve_floor(
    flag: Option<f64>,
    name: &str,
    default: f64,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<f64> {
    if let Some(value) = flag {
        return Ok(value);
    }
    match env(name) {
        Some(raw) if !raw.trim().is_empty() => parse_finite_f64(&raw).map_err(|reason| {
            PresentationError::InvalidEnvironment { name: name.to_string(), value: raw, reason }.into()
        }),
        _ => Ok(default),
    }
}
