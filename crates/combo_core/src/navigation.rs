//! Circular highlight stepping

/// Direction of a keyboard navigation step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

/// Compute the highlight after one step through `count` rows
///
/// Wraps at both ends. From no highlight, `Next` lands on the first row and
/// `Previous` on the last. Returns `current` unchanged when there are no rows.
pub fn step(current: Option<usize>, count: usize, direction: Direction) -> Option<usize> {
    if count == 0 {
        return current;
    }

    let next = match (direction, current) {
        (Direction::Next, None) => 0,
        (Direction::Next, Some(index)) => (index + 1) % count,
        (Direction::Previous, None) => count - 1,
        (Direction::Previous, Some(index)) => (index % count + count - 1) % count,
    };
    Some(next)
}
