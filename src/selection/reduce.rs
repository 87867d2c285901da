use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::selection::ranking::{tie_break, Ranked};
use crate::selection::selector::Match;
use crate::version::VersionComparator;

/// Result of a newest-only reduction over one selector's matches.
#[derive(Debug, Clone, Default)]
pub struct Reduction<'a> {
    /// At most one match per base name, in candidate order.
    pub winners: Vec<Match<'a>>,
    /// Base names where the winner was picked among full ties.
    pub ambiguous: BTreeSet<String>,
}

type Fold<'a> = (BTreeMap<String, Ranked<'a>>, BTreeSet<String>);

fn step<'a, C: VersionComparator>(
    (mut best, mut ambiguous): Fold<'a>,
    candidate: Ranked<'a>,
    platform: &str,
    comparator: &C,
) -> Fold<'a> {
    let base = candidate.matched.name.base.clone();
    let decision = best
        .get(&base)
        .map(|current| tie_break(&candidate, current, platform, comparator));

    match decision {
        None | Some(Ordering::Greater) => {
            // a new winner is never ambiguous
            ambiguous.remove(&base);
            best.insert(base, candidate);
        }
        Some(Ordering::Equal) => {
            ambiguous.insert(base);
        }
        Some(Ordering::Less) => {}
    }

    (best, ambiguous)
}

/// Collapse same-named matches to a single winner.
///
/// Ties that survive every criterion keep the first-seen match and are
/// reported in [`Reduction::ambiguous`].
pub fn reduce_newest<'a, C: VersionComparator>(
    matches: Vec<Match<'a>>,
    platform: &str,
    comparator: &C,
) -> Reduction<'a> {
    let (best, ambiguous) = matches
        .into_iter()
        .map(Ranked::new)
        .fold((BTreeMap::new(), BTreeSet::new()), |acc, candidate| {
            step(acc, candidate, platform, comparator)
        });

    for name in &ambiguous {
        warn!(package = %name, "multiple packages named `{name}`; using the first one");
    }

    let mut winners: Vec<Match<'a>> = best.into_values().map(|ranked| ranked.matched).collect();
    winners.sort_by_key(|m| m.id);

    Reduction { winners, ambiguous }
}
