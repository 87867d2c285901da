pub mod config;
pub mod diff;
pub mod filters;
pub mod ranking;
pub mod reduce;
pub mod selector;

use std::collections::BTreeSet;

use tracing::debug;

use crate::record::PackageRecord;
use crate::types::identifiers::RecordId;
use crate::types::resolution::{
    Resolution, ResolveError, ResolvedRecord, SelectorReport, VersionComparison,
};
use crate::version::{NameParser, NixVersioning, VersionComparator};

pub use config::{current_platform, ConfigError, ResolveConfig};
pub use filters::{filter_by_system, sort_by_name};
pub use ranking::{compare_priority, priority, tie_break};
pub use reduce::{reduce_newest, Reduction};
pub use selector::{match_selector, parse_selectors, Match, Selector, SelectorMatches};

/// Records emitted so far, across selectors. A record is emitted at most
/// once, at the position of the first selector that produced it.
#[derive(Debug, Default)]
struct Emitted<'a> {
    seen: BTreeSet<RecordId>,
    records: Vec<ResolvedRecord<'a>>,
}

impl<'a> Emitted<'a> {
    fn extend(mut self, matches: Vec<Match<'a>>) -> Self {
        for m in matches {
            if self.seen.insert(m.id) {
                self.records.push(ResolvedRecord {
                    id: m.id,
                    record: m.record,
                });
            }
        }
        self
    }
}

pub struct Resolver<P, C> {
    parser: P,
    comparator: C,
    config: ResolveConfig,
}

impl Default for Resolver<NixVersioning, NixVersioning> {
    fn default() -> Self {
        Self {
            parser: NixVersioning,
            comparator: NixVersioning,
            config: ResolveConfig::default(),
        }
    }
}

impl<P, C> Resolver<P, C>
where
    P: NameParser,
    C: VersionComparator,
{
    pub fn new(parser: P, comparator: C, config: ResolveConfig) -> Self {
        Self {
            parser,
            comparator,
            config,
        }
    }

    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Select the candidates matched by `selectors`.
    ///
    /// Output follows selector order, then candidate order. Fails if a
    /// non-wildcard selector matched nothing.
    #[tracing::instrument(
        skip_all,
        fields(selectors = selectors.len(), candidates = candidates.len(), newest_only = self.config.newest_only)
    )]
    pub fn resolve<'a, S: AsRef<str>>(
        &self,
        selectors: &[S],
        candidates: &'a [PackageRecord],
    ) -> Result<Resolution<'a>, ResolveError> {
        let selectors = parse_selectors(selectors, &self.parser);

        let mut reports = Vec::with_capacity(selectors.len());
        let mut ambiguous = BTreeSet::new();
        let mut emitted = Emitted::default();

        for selector in &selectors {
            let matched = match_selector(selector, candidates, &self.parser);
            let hits = matched.hits();
            debug!(selector = selector.as_str(), hits, "matched selector");

            let matches = if self.config.newest_only {
                let reduction =
                    reduce_newest(matched.matches, &self.config.platform, &self.comparator);
                ambiguous.extend(reduction.ambiguous);
                reduction.winners
            } else {
                matched.matches
            };

            emitted = emitted.extend(matches);
            reports.push(SelectorReport {
                selector: selector.as_str().to_string(),
                hits,
            });
        }

        let unmatched = selectors
            .iter()
            .zip(&reports)
            .find(|(selector, report)| report.hits == 0 && !selector.is_wildcard());
        if let Some((selector, _)) = unmatched {
            return Err(ResolveError::SelectorUnmatched {
                selector: selector.as_str().to_string(),
            });
        }

        Ok(Resolution {
            records: emitted.records,
            selectors: reports,
            ambiguous: ambiguous.into_iter().collect(),
        })
    }

    /// Classify `record`'s version against the same-named records in `reference`.
    pub fn classify(&self, record: &PackageRecord, reference: &[PackageRecord]) -> VersionComparison {
        diff::classify(record, reference, &self.parser, &self.comparator)
    }
}
