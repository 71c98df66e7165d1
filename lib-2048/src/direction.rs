#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// WASD, either case.
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'w' | 'W' => Some(Self::Up),
            's' | 'S' => Some(Self::Down),
            'd' | 'D' => Some(Self::Right),
            'a' | 'A' => Some(Self::Left),
            _ => None,
        }
    }

    /// Direction of a swipe from its start to end offset, with `dy` growing downwards.
    ///
    /// The axis with the larger absolute delta wins; a tie counts as vertical.
    pub fn from_swipe(dx: f64, dy: f64) -> Self {
        if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Self::Right
            } else {
                Self::Left
            }
        } else if dy > 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_keys() {
        assert_eq!(Direction::from_key('w'), Some(Direction::Up));
        assert_eq!(Direction::from_key('D'), Some(Direction::Right));
        assert_eq!(Direction::from_key('s'), Some(Direction::Down));
        assert_eq!(Direction::from_key('A'), Some(Direction::Left));
        assert_eq!(Direction::from_key('x'), None);
    }

    #[test]
    fn swipe_dominant_axis() {
        assert_eq!(Direction::from_swipe(30.0, -5.0), Direction::Right);
        assert_eq!(Direction::from_swipe(-30.0, 29.0), Direction::Left);
        assert_eq!(Direction::from_swipe(3.0, 40.0), Direction::Down);
        assert_eq!(Direction::from_swipe(3.0, -40.0), Direction::Up);
    }

    #[test]
    fn swipe_tie_is_vertical() {
        assert_eq!(Direction::from_swipe(10.0, 10.0), Direction::Down);
        assert_eq!(Direction::from_swipe(0.0, 0.0), Direction::Up);
    }

    #[test]
    fn discriminants_index_all() {
        for (i, direction) in Direction::iter().enumerate() {
            assert_eq!(direction as usize, i);
        }
    }
}
