use crate::{Movement, Side};

/// Logical keys understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Confirm,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Key {
    /// Paddle and direction controlled by this key
    pub fn paddle_control(self) -> Option<(Side, Movement)> {
        match self {
            Key::LeftUp => Some((Side::Left, Movement::Up)),
            Key::LeftDown => Some((Side::Left, Movement::Down)),
            Key::RightUp => Some((Side::Right, Movement::Up)),
            Key::RightDown => Some((Side::Right, Movement::Down)),
            Key::Confirm => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_controls() {
        assert_eq!(
            Key::LeftUp.paddle_control(),
            Some((Side::Left, Movement::Up))
        );
        assert_eq!(
            Key::RightDown.paddle_control(),
            Some((Side::Right, Movement::Down))
        );
        assert_eq!(Key::Confirm.paddle_control(), None);
    }
}
