//! Day-keyed production index for the booking calendar.
//!
//! The registry is a read-only snapshot: the caller supplies a fresh
//! production list on every build, and the registry never writes anything
//! back. Lookups by day are O(1); a week view touches at most 7 buckets.
use std::collections::HashMap;

use chrono::NaiveDate;
use log::{info, warn};

use shared::DisplayCategory;

use crate::domain::models::production::{
    Production, ProductionMapper, ProductionStatus, ScheduleError,
};

/// Day-keyed index over an immutable production snapshot.
///
/// Bucket placement follows the sheet `date` of each production, and every
/// bucket holds a deterministic order: `start_time` ascending, then `id`
/// ascending to break ties among shoots starting at the same instant. Input
/// order never leaks into the output. Duplicate ids are the caller's
/// problem - the registry indexes whatever it is given and never
/// deduplicates.
#[derive(Debug, Clone, Default)]
pub struct ProductionRegistry {
    buckets: HashMap<NaiveDate, Vec<Production>>,
    total: usize,
}

/// Outcome of a registry build: the index plus everything it refused.
///
/// Partial-failure semantics: a bad record is excluded and reported, the
/// good records are still indexed. The build itself never fails.
#[derive(Debug, Clone)]
pub struct RegistryBuild {
    pub registry: ProductionRegistry,
    pub rejected: Vec<(Production, ScheduleError)>,
}

/// Build outcome for a wire batch, with rejections in wire shape so the
/// caller can surface them without touching domain types.
#[derive(Debug, Clone)]
pub struct DtoRegistryBuild {
    pub registry: ProductionRegistry,
    pub rejected: Vec<shared::RejectedProduction>,
}

impl ProductionRegistry {
    /// Index a production list by sheet date.
    ///
    /// Productions whose interval is degenerate (`end_time <= start_time`)
    /// are excluded from every bucket and returned in the rejection list.
    pub fn build(productions: Vec<Production>) -> RegistryBuild {
        let supplied = productions.len();
        let mut buckets: HashMap<NaiveDate, Vec<Production>> = HashMap::new();
        let mut rejected = Vec::new();

        for production in productions {
            match production.validate_interval() {
                Ok(()) => {
                    buckets.entry(production.date).or_default().push(production);
                }
                Err(error) => {
                    warn!("🎬 REGISTRY: Rejected production {}: {}", production.id, error);
                    rejected.push((production, error));
                }
            }
        }

        let mut total = 0;
        for bucket in buckets.values_mut() {
            bucket.sort_by(|a, b| {
                a.start_time
                    .cmp(&b.start_time)
                    .then_with(|| a.id.cmp(&b.id))
            });
            total += bucket.len();
        }

        info!(
            "🎬 REGISTRY: Indexed {} of {} productions across {} days ({} rejected)",
            total,
            supplied,
            buckets.len(),
            rejected.len()
        );

        RegistryBuild {
            registry: ProductionRegistry { buckets, total },
            rejected,
        }
    }

    /// Index a wire batch: parse each record, then build.
    ///
    /// Unparseable dates and degenerate intervals end up in the same
    /// rejection list; neither aborts the batch.
    pub fn build_from_dtos(dtos: Vec<shared::Production>) -> DtoRegistryBuild {
        let mut parsed = Vec::with_capacity(dtos.len());
        let mut rejected = Vec::new();

        for dto in dtos {
            match ProductionMapper::from_dto(&dto) {
                Ok(production) => parsed.push(production),
                Err(error) => {
                    warn!("🎬 REGISTRY: Skipping unparseable production {}: {}", dto.id, error);
                    rejected.push(shared::RejectedProduction {
                        production: dto,
                        reason: error.to_string(),
                    });
                }
            }
        }

        let build = Self::build(parsed);
        for (production, error) in build.rejected {
            rejected.push(shared::RejectedProduction {
                production: ProductionMapper::to_dto(&production),
                reason: error.to_string(),
            });
        }

        DtoRegistryBuild {
            registry: build.registry,
            rejected,
        }
    }

    /// Productions filed under the given day, in bucket order.
    ///
    /// Total: a day with no productions yields an empty slice, never an
    /// error.
    pub fn by_day(&self, date: NaiveDate) -> &[Production] {
        self.buckets
            .get(&date)
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// Map a status onto its indicator category. Unknown statuses are a
    /// recoverable condition and classify as `Unknown`.
    pub fn classify(status: &ProductionStatus) -> DisplayCategory {
        status.display_category()
    }

    /// Days that have at least one production.
    pub fn days(&self) -> impl Iterator<Item = &NaiveDate> {
        self.buckets.keys()
    }

    /// Number of indexed productions.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[cfg(test)]
    fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
