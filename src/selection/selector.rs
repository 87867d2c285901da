use crate::record::PackageRecord;
use crate::types::identifiers::RecordId;
use crate::version::{NameParser, PackageName};

pub const WILDCARD: &str = "*";

/// A parsed selector: base-name pattern plus optional exact version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    raw: String,
    pattern: PackageName,
}

impl Selector {
    pub fn parse<P: NameParser>(raw: &str, parser: &P) -> Self {
        Self {
            raw: raw.to_string(),
            pattern: parser.parse(raw),
        }
    }

    /// Matches every record, any version.
    pub fn wildcard() -> Self {
        Self {
            raw: WILDCARD.to_string(),
            pattern: PackageName::new(WILDCARD, ""),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn pattern(&self) -> &PackageName {
        &self.pattern
    }

    /// Wildcard selectors are allowed to match nothing.
    pub fn is_wildcard(&self) -> bool {
        self.raw == WILDCARD
    }

    pub fn matches(&self, name: &PackageName) -> bool {
        if self.pattern.base != WILDCARD && self.pattern.base != name.base {
            return false;
        }
        !self.pattern.has_version() || self.pattern.version == name.version
    }
}

/// One selector per argument; no arguments means "everything".
pub fn parse_selectors<S, P>(args: &[S], parser: &P) -> Vec<Selector>
where
    S: AsRef<str>,
    P: NameParser,
{
    if args.is_empty() {
        return vec![Selector::wildcard()];
    }
    args.iter()
        .map(|arg| Selector::parse(arg.as_ref(), parser))
        .collect()
}

/// A candidate that satisfied a selector.
#[derive(Debug, Clone)]
pub struct Match<'a> {
    pub id: RecordId,
    pub record: &'a PackageRecord,
    pub name: PackageName,
}

/// Every match of one selector, in candidate order.
#[derive(Debug, Clone, Default)]
pub struct SelectorMatches<'a> {
    pub matches: Vec<Match<'a>>,
}

impl<'a> SelectorMatches<'a> {
    pub fn hits(&self) -> usize {
        self.matches.len()
    }
}

pub fn match_selector<'a, P: NameParser>(
    selector: &Selector,
    candidates: &'a [PackageRecord],
    parser: &P,
) -> SelectorMatches<'a> {
    let matches = candidates
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let name = parser.parse(&record.name);
            selector.matches(&name).then(|| Match {
                id: RecordId::new(position),
                record,
                name,
            })
        })
        .collect();

    SelectorMatches { matches }
}
