use std::path::Path;

use log::{debug, info};
use quality_probe_domain::{
    FileMetric, FunctionMetric, Snapshot, SnapshotFormat, build_snapshot, check, evaluate, serialize,
};
use quality_probe_ports::{FileRecordDto, FunctionRecordDto, MeasurementSource, SnapshotStore};
use quality_probe_shared_kernel::{ApplicationError, DomainResult, ErrorContext, Result};

use crate::dto::{ProbeOutput, ProbeRequest};

const FALLBACK_ROOT: &str = ".";

pub struct RunProbe<'a> {
    source: &'a dyn MeasurementSource,
    store: Option<&'a dyn SnapshotStore>,
}

impl<'a> RunProbe<'a> {
    pub fn new(source: &'a dyn MeasurementSource) -> Self {
        Self { source, store: None }
    }

    pub fn with_store(mut self, store: &'a dyn SnapshotStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn run(&self, request: &ProbeRequest) -> Result<ProbeOutput> {
        let set = self.source.collect(&request.measurements).map_err(|e| {
            ApplicationError::MeasurementCollectionFailed {
                reason: request.measurements.display().to_string(),
                source: Some(Box::new(e)),
            }
        })?;
        debug!("collected {} file and {} function records", set.files.len(), set.functions.len());

        let files = set.files.into_iter().map(file_to_domain).collect::<DomainResult<Vec<_>>>()?;
        let functions = set.functions.into_iter().map(function_to_domain).collect::<DomainResult<Vec<_>>>()?;
        let root = request.root.clone().or(set.root).unwrap_or_else(|| FALLBACK_ROOT.to_string());

        let snapshot = build_snapshot(root, &files, &functions, &request.options)?;
        let verdict = check(&snapshot, &request.thresholds);
        let snapshot = evaluate(snapshot, &request.thresholds);
        info!(
            "snapshot of {} files: avg MI {:.1}, typing {:.1}%, passed={}",
            snapshot.file_count(),
            snapshot.avg_mi(),
            snapshot.typing_coverage_pct(),
            verdict.passed
        );

        if let Some(target) = &request.save_to {
            self.save(&snapshot, target)?;
        }

        Ok(ProbeOutput { snapshot, verdict })
    }

    fn save(&self, snapshot: &Snapshot, target: &Path) -> Result<()> {
        let Some(store) = self.store else {
            return Err(ApplicationError::SnapshotFailed {
                reason: format!("no snapshot store configured for {}", target.display()),
                source: None,
            }
            .into());
        };
        let format = SnapshotFormat::from_extension(target.extension().and_then(|e| e.to_str()));
        let text = serialize(snapshot, format)?;
        store
            .save(target, &text)
            .with_context(|| format!("saving snapshot to {}", target.display()))?;
        info!("saved {format} snapshot to {}", target.display());
        Ok(())
    }
}

fn file_to_domain(dto: FileRecordDto) -> DomainResult<FileMetric> {
    FileMetric::new(dto.path, dto.sloc, dto.maintainability_index, dto.cc_grade)
}

fn function_to_domain(dto: FunctionRecordDto) -> DomainResult<FunctionMetric> {
    FunctionMetric::new(dto.file_path, dto.qualified_name, dto.line_number, dto.cognitive_complexity, dto.is_typed)
}
