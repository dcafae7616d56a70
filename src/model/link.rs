use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid link symbol: '{0}' (expected one of U, D, L, R, S)")]
pub struct ParseLinkError(String);

/// A single chain link on the 2D square lattice.
///
/// Taut links connect reptons in adjacent cells; a [`Slack`](Link::Slack)
/// link places both of its reptons in the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Link {
    Up,
    Down,
    Left,
    Right,
    Slack,
}

impl Link {
    /// All link values, in the fixed enumeration order used by the
    /// depth-first state search.
    pub const ALL: [Link; 5] = [Link::Up, Link::Down, Link::Left, Link::Right, Link::Slack];

    /// The four taut links, in the fixed enumeration order.
    pub const TAUT: [Link; 4] = [Link::Up, Link::Down, Link::Left, Link::Right];

    #[inline]
    pub fn is_slack(&self) -> bool {
        matches!(self, Link::Slack)
    }

    #[inline]
    pub fn is_taut(&self) -> bool {
        !self.is_slack()
    }

    /// The link pointing in the opposite lattice direction.
    /// Slack is its own opposite.
    pub fn opposite(&self) -> Link {
        match self {
            Link::Up => Link::Down,
            Link::Down => Link::Up,
            Link::Left => Link::Right,
            Link::Right => Link::Left,
            Link::Slack => Link::Slack,
        }
    }

    /// Returns `true` if both links are taut and point along different
    /// lattice axes.
    pub fn perpendicular_to(&self, other: Link) -> bool {
        self.is_taut() && other.is_taut() && self.axis() != other.axis()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Link::Up => "U",
            Link::Down => "D",
            Link::Left => "L",
            Link::Right => "R",
            Link::Slack => "S",
        }
    }

    fn axis(&self) -> u8 {
        match self {
            Link::Up | Link::Down => 0,
            Link::Left | Link::Right => 1,
            Link::Slack => 2,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Link {
    type Err = ParseLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Link::Up),
            "D" => Ok(Link::Down),
            "L" => Ok(Link::Left),
            "R" => Ok(Link::Right),
            "S" => Ok(Link::Slack),
            _ => Err(ParseLinkError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn link_from_str_valid() {
        assert_eq!(Link::from_str("U").unwrap(), Link::Up);
        assert_eq!(Link::from_str("D").unwrap(), Link::Down);
        assert_eq!(Link::from_str("L").unwrap(), Link::Left);
        assert_eq!(Link::from_str("R").unwrap(), Link::Right);
        assert_eq!(Link::from_str("S").unwrap(), Link::Slack);
    }

    #[test]
    fn link_from_str_invalid() {
        let err = Link::from_str("X").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid link symbol: 'X' (expected one of U, D, L, R, S)"
        );
        assert!(Link::from_str("u").is_err());
        assert!(Link::from_str("").is_err());
    }

    #[test]
    fn link_symbol_display_round_trip() {
        for link in Link::ALL {
            assert_eq!(Link::from_str(link.symbol()).unwrap(), link);
            assert_eq!(link.to_string(), link.symbol());
        }
    }

    #[test]
    fn slack_and_taut_are_disjoint() {
        assert!(Link::Slack.is_slack());
        assert!(!Link::Slack.is_taut());
        for link in Link::TAUT {
            assert!(link.is_taut());
            assert!(!link.is_slack());
        }
    }

    #[test]
    fn opposites() {
        assert_eq!(Link::Up.opposite(), Link::Down);
        assert_eq!(Link::Down.opposite(), Link::Up);
        assert_eq!(Link::Left.opposite(), Link::Right);
        assert_eq!(Link::Right.opposite(), Link::Left);
        assert_eq!(Link::Slack.opposite(), Link::Slack);
    }

    #[test]
    fn perpendicularity() {
        assert!(Link::Up.perpendicular_to(Link::Left));
        assert!(Link::Right.perpendicular_to(Link::Down));
        assert!(!Link::Up.perpendicular_to(Link::Down));
        assert!(!Link::Left.perpendicular_to(Link::Left));
        assert!(!Link::Slack.perpendicular_to(Link::Up));
        assert!(!Link::Up.perpendicular_to(Link::Slack));
    }
}
