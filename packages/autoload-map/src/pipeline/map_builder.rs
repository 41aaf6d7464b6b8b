//! Map builder: scan, filter, extract, resolve
//!
//! For every configured mode (in order) and every root of that mode (in
//! order), walk the root, extract the declared classes of each accepted
//! file and run each class through the collision resolver against the
//! mode's check list. One in-progress map per mode is shared by all of its
//! roots, so later roots can only displace earlier entries through the
//! resolver.

use super::output::BuildOutput;
use crate::config::{ConfigResult, ScanStrategy, ValidatedBuildConfig};
use crate::features::activation::{ActivationFilter, ComponentResolver};
use crate::features::class_extraction::{ClassExtractor, PhpClassExtractor};
use crate::features::collision::{ClassCandidate, CollisionResolver, Decision};
use crate::features::path_filter::PathFilterSet;
use crate::features::walker::{AcceptAll, DirectoryWalker, WalkOutcome};
use crate::shared::models::{
    ActiveComponentList, AutoloadMap, CandidateFile, GenerationMode, ReferenceMaps,
};
use crate::shared::ports::{BuildObserver, ProgressPhase};
use std::path::PathBuf;
use tracing::{debug, info, warn};

struct PreparedRoot {
    path: PathBuf,
    filters: PathFilterSet,
}

struct PreparedMode {
    mode: GenerationMode,
    activation_check: bool,
    check_against: Vec<GenerationMode>,
    roots: Vec<PreparedRoot>,
}

pub struct MapBuilder {
    strategy: ScanStrategy,
    active: ActiveComponentList,
    components: ComponentResolver,
    walker: DirectoryWalker,
    modes: Vec<PreparedMode>,
    extractor: Box<dyn ClassExtractor>,
}

impl MapBuilder {
    /// Compile every root's filter set up front; any failure here is fatal
    /// and happens before a single directory is read.
    pub fn new(validated: ValidatedBuildConfig) -> ConfigResult<Self> {
        let config = validated.config();
        let strategy = config.strategy;

        let mut components = ComponentResolver::new(config.component_markers.iter().cloned());
        if let Some(root) = &config.install_root {
            components = components.with_install_root(root.clone());
        }

        let mut modes = Vec::with_capacity(config.modes.len());
        for mode in &config.modes {
            let mut roots = Vec::with_capacity(mode.roots.len());
            for root in &mode.roots {
                roots.push(PreparedRoot {
                    path: root.clone(),
                    filters: strategy.filters_for_root(
                        root,
                        &config.include_patterns,
                        &config.extra_excludes,
                    )?,
                });
            }
            modes.push(PreparedMode {
                mode: mode.mode,
                activation_check: strategy.checks_activation(mode.effective_activation_check()),
                check_against: mode.effective_check_against(),
                roots,
            });
        }

        Ok(Self {
            strategy,
            active: validated.active_components().clone(),
            components,
            walker: DirectoryWalker::new().follow_links(config.follow_links),
            modes,
            extractor: Box::new(PhpClassExtractor::new()),
        })
    }

    pub fn with_extractor(mut self, extractor: impl ClassExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn build(
        &self,
        reference: &ReferenceMaps,
        observer: &mut dyn BuildObserver,
    ) -> BuildOutput {
        let resolver = CollisionResolver::new(
            &self.active,
            &self.components,
            self.strategy.collision_policy(),
        );
        let mut output = BuildOutput::default();

        info!(
            "Building autoload maps ({:?} strategy, {} modes)",
            self.strategy,
            self.modes.len()
        );

        for mode in &self.modes {
            let mut in_progress = AutoloadMap::new();

            for root in &mode.roots {
                let candidates = self.scan_root(mode, root, observer, &mut output);

                observer.start_phase(ProgressPhase::ClassSearch);
                for candidate in &candidates {
                    self.register_classes(
                        &resolver,
                        mode,
                        candidate,
                        &mut in_progress,
                        reference,
                        observer,
                        &mut output,
                    );
                    observer.update_phase(ProgressPhase::ClassSearch);
                }
                observer.stop_phase(ProgressPhase::ClassSearch);
            }

            info!("{} autoload map: {} classes", mode.mode, in_progress.len());
            output.maps.insert(mode.mode, in_progress);
        }

        output
    }

    fn scan_root(
        &self,
        mode: &PreparedMode,
        root: &PreparedRoot,
        observer: &mut dyn BuildObserver,
        output: &mut BuildOutput,
    ) -> Vec<CandidateFile> {
        let outcome: WalkOutcome = if mode.activation_check {
            let mut filter = ActivationFilter::new(&self.components, &self.active);
            let outcome = self.walker.walk(&root.path, &root.filters, &mut filter, observer);
            debug!(
                "{}: {} files skipped as inactive",
                root.path.display(),
                filter.rejected()
            );
            outcome
        } else {
            self.walker
                .walk(&root.path, &root.filters, &mut AcceptAll, observer)
        };

        output.files_scanned += outcome.count;
        output.scan_errors.extend(outcome.errors);

        outcome
            .matches
            .into_iter()
            .map(|path| {
                let component = self.components.resolve(&path);
                CandidateFile { path, component }
            })
            .collect()
    }

    /// A class enters the map only if no check rejects it. Override records
    /// are kept only for classes that actually enter the map.
    #[allow(clippy::too_many_arguments)]
    fn register_classes(
        &self,
        resolver: &CollisionResolver<'_>,
        mode: &PreparedMode,
        candidate: &CandidateFile,
        in_progress: &mut AutoloadMap,
        reference: &ReferenceMaps,
        observer: &mut dyn BuildObserver,
        output: &mut BuildOutput,
    ) {
        let classes = match self.extractor.extract_file(&candidate.path) {
            Ok(classes) => classes,
            Err(err) => {
                warn!("{}", err);
                observer.log(&err.to_string());
                output.extraction_errors.push(err);
                return;
            }
        };

        for class_name in classes {
            let class = ClassCandidate {
                class_name: &class_name,
                file: &candidate.path,
                component: &candidate.component,
            };

            let decisions: Vec<Decision> = mode
                .check_against
                .iter()
                .map(|check_mode| {
                    resolver.resolve(&class, *check_mode, mode.mode, &*in_progress, reference)
                })
                .collect();

            let rejected = decisions
                .iter()
                .any(|decision| matches!(decision, Decision::Reject(_)));

            for decision in decisions {
                match decision {
                    Decision::Accept => {}
                    Decision::Reject(record) => {
                        debug!("{}", record);
                        observer.log(&record.to_string());
                        output.collisions.push(record);
                    }
                    Decision::Overwrite(record) if !rejected => {
                        warn!("{}", record);
                        observer.log(&record.to_string());
                        output.collisions.push(record);
                    }
                    Decision::Overwrite(_) => {}
                }
            }

            if !rejected {
                in_progress.insert(class_name.clone(), candidate.path.clone());
            }
        }
    }
}
