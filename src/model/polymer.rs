use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::link::Link;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a polymer chain requires at least one link")]
pub struct EmptyChainError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid polymer string '{0}': {1}")]
pub struct ParsePolymerError(String, String);

/// An immutable chain conformation: one link per bond, head to tail.
///
/// A conformational change is modeled as a transition to a *different*
/// `Polymer`; the link sequence is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Polymer {
    links: Vec<Link>,
}

impl Polymer {
    pub fn new(links: impl Into<Vec<Link>>) -> Result<Self, EmptyChainError> {
        let links = links.into();
        if links.is_empty() {
            return Err(EmptyChainError);
        }
        Ok(Self { links })
    }

    /// The fully contracted conformation: every link slack, all reptons in
    /// a single lattice cell.
    pub fn curled_up(link_count: usize) -> Result<Self, EmptyChainError> {
        Self::new(vec![Link::Slack; link_count])
    }

    #[inline]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Returns a copy with the link at `index` replaced.
    pub fn with_link(&self, index: usize, link: Link) -> Polymer {
        let mut links = self.links.clone();
        links[index] = link;
        Polymer { links }
    }

    /// Returns a copy with the interior pair `p` replaced, where pair `p`
    /// covers links `p - 1` and `p` (pairs are indexed `1..link_count`).
    pub fn with_pair(&self, pair: usize, first: Link, second: Link) -> Polymer {
        debug_assert!(pair >= 1 && pair < self.links.len());
        let mut links = self.links.clone();
        links[pair - 1] = first;
        links[pair] = second;
        Polymer { links }
    }

    /// Returns `true` if two adjacent links form a hernia: taut, opposite,
    /// folding the chain back into the cell it came from.
    pub fn is_hernia(first: Link, second: Link) -> bool {
        first.is_taut() && second == first.opposite()
    }

    pub fn contains_hernia(&self) -> bool {
        self.links
            .windows(2)
            .any(|w| Self::is_hernia(w[0], w[1]))
    }

    /// Returns `true` if two consecutive slack links exist anywhere in the
    /// chain (the precondition for hernia creation).
    pub fn contains_slack_pair(&self) -> bool {
        self.links
            .windows(2)
            .any(|w| w[0].is_slack() && w[1].is_slack())
    }
}

impl fmt::Display for Polymer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for link in &self.links {
            f.write_str(link.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Polymer {
    type Err = ParsePolymerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePolymerError(
                s.to_string(),
                "at least one link is required".to_string(),
            ));
        }
        let mut links = Vec::with_capacity(s.len());
        for c in s.chars() {
            let link = Link::from_str(c.encode_utf8(&mut [0; 4]))
                .map_err(|e| ParsePolymerError(s.to_string(), e.to_string()))?;
            links.push(link);
        }
        Ok(Polymer { links })
    }
}
