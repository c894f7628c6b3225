//! Hover highlight for a grid of cards.

/// Which card in a grid is hover-highlighted. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    pub fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Clear the highlight if `index` still holds it. A late `mouseleave` from
    /// a card the pointer already left must not clear its neighbour.
    pub fn leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_marks_only_that_card() {
        let mut hover = HoverState::default();
        hover.enter(2);
        let marked: Vec<usize> = (0..6).filter(|&i| hover.is_hovered(i)).collect();
        assert_eq!(marked, [2]);
    }

    #[test]
    fn test_moving_between_cards() {
        let mut hover = HoverState::default();
        hover.enter(0);
        hover.leave(0);
        hover.enter(1);
        assert!(hover.is_hovered(1));

        // enter fired before the previous card's leave
        hover.enter(3);
        hover.leave(1);
        assert!(hover.is_hovered(3));
        assert!(!hover.is_hovered(1));
    }

    #[test]
    fn test_leave_clears() {
        let mut hover = HoverState::default();
        hover.enter(4);
        hover.leave(4);
        assert_eq!(hover, HoverState::default());
    }
}
