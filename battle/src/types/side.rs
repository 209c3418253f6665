//! Battle sides

/// One of the two sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// Both sides, P1 first
    pub const BOTH: [Side; 2] = [Side::P1, Side::P2];

    /// The other side
    pub fn opponent(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Array index for per-side storage
    pub fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }

    /// Human-facing label ("Player 1" / "Player 2")
    pub fn label(self) -> &'static str {
        match self {
            Side::P1 => "Player 1",
            Side::P2 => "Player 2",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::P1.opponent(), Side::P2);
        assert_eq!(Side::P2.opponent(), Side::P1);
    }

    #[test]
    fn test_side_index() {
        assert_eq!(Side::P1.index(), 0);
        assert_eq!(Side::P2.index(), 1);
        for side in Side::BOTH {
            assert_eq!(Side::BOTH[side.index()], side);
        }
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::P1.to_string(), "Player 1");
        assert_eq!(Side::P2.to_string(), "Player 2");
    }
}
