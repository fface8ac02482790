//! Tests for cardinal direction algebra

#[cfg(test)]
mod tests {
    use cubemaze::spatial::Direction;
    use cubemaze::spatial::direction::{Axis, Sign};

    // Tests opposite pairs every direction with its reverse
    // Verified by mapping Up to Left
    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    // Tests axis and sign describe each direction uniquely
    // Verified by swapping the signs of Up and Down
    #[test]
    fn test_axis_sign_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(
                Direction::from_axis(direction.axis(), direction.sign()),
                direction
            );
        }
        assert_eq!(Direction::from_axis(Axis::Y, Sign::Positive), Direction::Up);
        assert_eq!(Direction::from_axis(Axis::X, Sign::Negative), Direction::Left);
        assert_eq!(Axis::X.other(), Axis::Y);
        assert_eq!(Sign::Negative.negated(), Sign::Positive);
    }

    // Tests perpendicular directions lie on the other axis
    #[test]
    fn test_perpendicular() {
        assert_eq!(
            Direction::Up.perpendicular(),
            [Direction::Left, Direction::Right]
        );
        assert_eq!(
            Direction::Left.perpendicular(),
            [Direction::Up, Direction::Down]
        );
        for direction in Direction::ALL {
            for side in direction.perpendicular() {
                assert_eq!(side.axis(), direction.axis().other());
            }
        }
    }

    // Tests offsets point up towards smaller y
    // Verified by flipping the y offset of Up
    #[test]
    fn test_offsets() {
        assert_eq!(Direction::Up.offset(), [0, -1]);
        assert_eq!(Direction::Right.offset(), [1, 0]);
        for direction in Direction::ALL {
            let [dx, dy] = direction.offset();
            let [ox, oy] = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["up", "right", "down", "left"]);
    }
}
