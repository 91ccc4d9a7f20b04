//! EvolutionEngine — the generation orchestrator.
//!
//! One run walks `AnalyzingGaps → SelectingTargets → [per category:
//! Prompting → Generating → Validating → AllocatingIds → externally
//! validating] → Merging → Persisted`. Per-category faults degrade to
//! "fewer cases produced"; only a configuration fault before any work or
//! a failed persistence write aborts the run.

use chrono::Utc;
use crucible_core::case::{Case, Category, Provenance};
use crucible_core::config::EvolveConfig;
use crucible_core::constants::{PROMPT_EXEMPLARS, TOP_GAP_CATEGORIES};
use crucible_core::errors::{CrucibleError, CrucibleResult, ProviderError};
use crucible_core::models::{CategoryResult, RunReport};
use crucible_core::traits::{CaseGenerator, SanityValidator};
use crucible_core::Corpus;
use crucible_provider::extract_array;
use crucible_store::CorpusStore;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{gaps, ids, prompt, schema};

/// Knobs for one evolution run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit single-category override: `(category, count)`. When unset,
    /// the top gap categories are targeted.
    pub target: Option<(Category, usize)>,
    /// Execute every stage but skip the merge and the persistence write.
    pub dry_run: bool,
}

/// The generation orchestrator. Generic over the generator and the
/// optional external sanity validator so tests can substitute both seams.
pub struct EvolutionEngine<'a, G, V> {
    config: EvolveConfig,
    generator: &'a G,
    validator: Option<&'a V>,
}

impl<'a, G, V> EvolutionEngine<'a, G, V>
where
    G: CaseGenerator,
    V: SanityValidator,
{
    pub fn new(config: EvolveConfig, generator: &'a G, validator: Option<&'a V>) -> Self {
        Self {
            config,
            generator,
            validator,
        }
    }

    /// Execute one run. Exactly one corpus write happens per non-dry run,
    /// after all batches are computed in memory; a run that accepts zero
    /// cases is an informational outcome, not a failure.
    pub async fn run(&self, store: &CorpusStore, options: &RunOptions) -> CrucibleResult<RunReport> {
        if !self.generator.available() {
            return Err(CrucibleError::Configuration(
                "no provider credential configured".to_string(),
            ));
        }

        let run_id = Uuid::new_v4().to_string();
        let today = Utc::now().format("%Y-%m-%d").to_string();
        info!(%run_id, dry_run = options.dry_run, "evolution run started");

        let mut corpus = store.load()?;

        debug!(%run_id, "analyzing gaps");
        let gap_report = gaps::analyze(&corpus, self.config.target_per_category);

        let targets = self.select_targets(options, &gap_report)?;
        if targets.is_empty() {
            info!(%run_id, "no deficient categories, nothing to evolve");
        }

        let mut existing = corpus.existing_ids();
        let mut accepted_all: Vec<Case> = Vec::new();
        let mut results: Vec<CategoryResult> = Vec::new();

        for (category, requested) in targets {
            match self
                .process_category(&category, requested, &corpus, &mut existing, &today)
                .await
            {
                Ok((cases, rejected)) => {
                    let failure = if cases.is_empty() {
                        Some("zero records survived validation".to_string())
                    } else {
                        None
                    };
                    info!(
                        category = %category,
                        requested,
                        accepted = cases.len(),
                        rejected,
                        "category complete"
                    );
                    results.push(CategoryResult {
                        category,
                        requested,
                        accepted: cases.len(),
                        rejected,
                        failure,
                    });
                    accepted_all.extend(cases);
                }
                Err(e) => {
                    // Non-fatal by contract: this category yields zero
                    // cases and the run continues.
                    warn!(category = %category, error = %e, "category failed");
                    results.push(CategoryResult {
                        category,
                        requested,
                        accepted: 0,
                        rejected: 0,
                        failure: Some(e.to_string()),
                    });
                }
            }
        }

        let merged = if options.dry_run {
            info!(%run_id, surfaced = accepted_all.len(), "dry run, corpus untouched");
            0
        } else {
            let count = accepted_all.len();
            corpus.merge(accepted_all.clone(), &today);
            store.save(&corpus)?;
            info!(%run_id, merged = count, "evolution run persisted");
            count
        };

        Ok(RunReport {
            run_id,
            dry_run: options.dry_run,
            categories: results,
            merged,
            cases: accepted_all,
        })
    }

    /// Target selection: the explicit override, or the top gap categories
    /// each capped at the per-run batch size.
    fn select_targets(
        &self,
        options: &RunOptions,
        gap_report: &crucible_core::models::GapReport,
    ) -> CrucibleResult<Vec<(Category, usize)>> {
        if let Some((category, count)) = &options.target {
            if !category.is_fixed() {
                return Err(CrucibleError::Configuration(format!(
                    "category `{category}` is outside the fixed enumeration and cannot be targeted"
                )));
            }
            if *count == 0 {
                return Err(CrucibleError::Configuration(
                    "explicit count must be at least 1".to_string(),
                ));
            }
            return Ok(vec![(category.clone(), *count)]);
        }

        Ok(gap_report
            .top_deficits(TOP_GAP_CATEGORIES)
            .map(|c| (c.category.clone(), c.gap.min(self.config.batch_cap)))
            .filter(|(_, n)| *n > 0)
            .collect())
    }

    /// One category through the pipeline: prompt, generate, extract,
    /// screen, allocate ids, attach provenance, optionally validate.
    async fn process_category(
        &self,
        category: &Category,
        requested: usize,
        corpus: &Corpus,
        existing: &mut HashSet<String>,
        today: &str,
    ) -> Result<(Vec<Case>, usize), ProviderError> {
        let exemplars = corpus.recent_of(category, PROMPT_EXEMPLARS);
        let rendered = prompt::render(category, &exemplars, requested);

        debug!(category = %category, "calling provider");
        let raw = self.generator.generate(&rendered).await?;
        let records = extract_array(&raw)?;

        let screened = schema::screen(records);
        let rejected = screened.rejected.len();

        let mut cases: Vec<Case> = screened.accepted.iter().map(schema::materialize).collect();
        // Generation is per-category by construction; normalize so the id
        // prefix and the stored category can never disagree.
        for case in &mut cases {
            case.category = category.clone();
        }

        let fresh_ids = ids::allocate(category, existing, cases.len());
        for (case, id) in cases.iter_mut().zip(fresh_ids) {
            existing.insert(id.clone());
            case.id = id;
            case.provenance = Provenance::evolved(today, self.generator.provider_id());
        }

        if let Some(validator) = self.validator {
            for case in &mut cases {
                let verdict = validator.check(&case.question).await;
                if !verdict.passed {
                    // Advisory by contract: recorded, never exclusionary.
                    warn!(id = %case.id, "external validation failed, keeping case");
                }
                case.provenance.validated = Some(verdict.passed);
                case.provenance.validation_result = Some(verdict.result);
            }
        }

        Ok((cases, rejected))
    }
}
