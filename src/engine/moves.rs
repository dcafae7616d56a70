//! The elementary-move set of the stochastic lattice model.
//!
//! Moves are evaluated per link pair. Pairs are indexed `0..=n`: pair 0 sits
//! before the first link, pair `n` after the last, and pairs `1..n` cover
//! the interior link pairs `(links[p-1], links[p])`. End pairs admit the
//! end-reaction moves; interior pairs admit reptation, the hernia moves,
//! and barrier crossing. Every function here is pure: identical inputs give
//! identical candidates and rates, in a fixed deterministic order.

use super::error::Error;
use crate::model::link::Link;
use crate::model::polymer::Polymer;

/// The four hernia pair configurations, in the fixed enumeration order.
pub const HERNIA_PAIRS: [(Link, Link); 4] = [
    (Link::Up, Link::Down),
    (Link::Down, Link::Up),
    (Link::Left, Link::Right),
    (Link::Right, Link::Left),
];

/// Classification of an elementary move, used to attach rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Interior slack exchange: a slack link hops past its taut neighbor.
    Reptation,
    /// Two interior slacks fold out into a hernia.
    HerniaCreation,
    /// An interior hernia retracts into two slacks.
    HerniaAnnihilation,
    /// An interior hernia re-emerges pointing along another direction.
    HerniaRedirection,
    /// A perpendicular taut pair flips across the lattice barrier.
    BarrierCrossing,
    /// A slack end link extends into an adjacent cell.
    EndExtension,
    /// A taut end link retracts into its cell.
    EndContraction,
    /// A taut end link swings to another adjacent cell.
    EndWiggle,
}

impl MoveKind {
    /// Returns `true` for the end-reaction moves, which carry the end rate
    /// `c`; interior moves carry the hopping rate `h`.
    pub fn is_end_move(&self) -> bool {
        matches!(
            self,
            MoveKind::EndExtension | MoveKind::EndContraction | MoveKind::EndWiggle
        )
    }
}

/// The two model parameters, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRates {
    hop: f64,
    end: f64,
}

impl MoveRates {
    /// Creates the rate table for hopping rate `h` and end-reaction rate
    /// `c`. Both must be finite and non-negative.
    pub fn new(h: f64, c: f64) -> Result<Self, Error> {
        if !h.is_finite() || h < 0.0 {
            return Err(Error::invalid_parameter(
                "h",
                format!("hopping rate must be finite and non-negative, got {h}"),
            ));
        }
        if !c.is_finite() || c < 0.0 {
            return Err(Error::invalid_parameter(
                "c",
                format!("end-reaction rate must be finite and non-negative, got {c}"),
            ));
        }
        Ok(Self { hop: h, end: c })
    }

    #[inline]
    pub fn rate_of(&self, kind: MoveKind) -> f64 {
        if kind.is_end_move() { self.end } else { self.hop }
    }
}

/// Enumerates every state reachable from `polymer` by exactly one
/// elementary move, as `(target, kind)` candidates.
///
/// Candidates are produced pair by pair from the head end to the tail end,
/// each pair's moves in a fixed order, so the output order is fully
/// deterministic. The same target may appear more than once (through
/// different moves); rates for duplicates add.
pub fn elementary_moves(polymer: &Polymer) -> Vec<(Polymer, MoveKind)> {
    let n = polymer.link_count();
    let mut out = Vec::new();

    end_moves(polymer, 0, &mut out);
    for pair in 1..n {
        interior_moves(polymer, pair, &mut out);
    }
    end_moves(polymer, n, &mut out);

    out
}

/// The instantaneous transition rate from `from` to `to`: the sum of the
/// rates of all elementary moves connecting them, 0.0 when no move does.
pub fn transition_rate(from: &Polymer, to: &Polymer, rates: &MoveRates) -> f64 {
    elementary_moves(from)
        .into_iter()
        .filter(|(target, _)| target == to)
        .map(|(_, kind)| rates.rate_of(kind))
        .sum()
}

fn end_moves(polymer: &Polymer, pair: usize, out: &mut Vec<(Polymer, MoveKind)>) {
    // For a single-link chain both virtual end pairs border the same link,
    // and its end moves are counted once per end.
    let index = if pair == 0 { 0 } else { polymer.link_count() - 1 };
    let link = polymer.links()[index];

    if link.is_slack() {
        for taut in Link::TAUT {
            out.push((polymer.with_link(index, taut), MoveKind::EndExtension));
        }
    } else {
        out.push((
            polymer.with_link(index, Link::Slack),
            MoveKind::EndContraction,
        ));
        for taut in Link::TAUT {
            if taut != link {
                out.push((polymer.with_link(index, taut), MoveKind::EndWiggle));
            }
        }
    }
}

fn interior_moves(polymer: &Polymer, pair: usize, out: &mut Vec<(Polymer, MoveKind)>) {
    let first = polymer.links()[pair - 1];
    let second = polymer.links()[pair];

    if first.is_slack() && second.is_slack() {
        for (a, b) in HERNIA_PAIRS {
            out.push((polymer.with_pair(pair, a, b), MoveKind::HerniaCreation));
        }
    } else if Polymer::is_hernia(first, second) {
        out.push((
            polymer.with_pair(pair, Link::Slack, Link::Slack),
            MoveKind::HerniaAnnihilation,
        ));
        for (a, b) in HERNIA_PAIRS {
            if (a, b) != (first, second) {
                out.push((polymer.with_pair(pair, a, b), MoveKind::HerniaRedirection));
            }
        }
    } else if (first.is_slack() || second.is_slack()) && first != second {
        out.push((
            polymer.with_pair(pair, second, first),
            MoveKind::Reptation,
        ));
    } else if first.perpendicular_to(second) {
        out.push((
            polymer.with_pair(pair, second, first),
            MoveKind::BarrierCrossing,
        ));
    }
}
