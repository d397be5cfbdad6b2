use crate::ipod::screens::PLAYER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub screen: String,
    pub selected: usize,
}

/// Screen history of the iPod menu. Forward navigation pushes, back pops
/// exactly one level.
#[derive(Debug, Clone)]
pub struct Navigation {
    current: String,
    selected: usize,
    history: Vec<HistoryEntry>,
    exiting: Option<String>,
}

impl Navigation {
    pub fn new(root: &str) -> Self {
        Self {
            current: root.to_string(),
            selected: 0,
            history: Vec::new(),
            exiting: None,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The screen sliding out after a forward navigation, until its
    /// transition timer fires.
    pub fn exiting(&self) -> Option<&str> {
        self.exiting.as_deref()
    }

    pub fn push(&mut self, target: &str) {
        let previous = std::mem::replace(&mut self.current, target.to_string());
        self.history.push(HistoryEntry {
            screen: previous.clone(),
            selected: self.selected,
        });
        self.exiting = Some(previous);

        if target != PLAYER {
            self.selected = 0;
        }
    }

    /// Restores the previous screen and its selection. Returns the screen
    /// that was left.
    pub fn pop(&mut self) -> Option<String> {
        let previous = self.history.pop()?;
        if self.exiting.as_deref() == Some(previous.screen.as_str()) {
            self.exiting = None;
        }
        self.selected = previous.selected;
        Some(std::mem::replace(&mut self.current, previous.screen))
    }

    pub fn clear_exiting(&mut self) {
        self.exiting = None;
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    /// Moves the selection by `direction`, clamped to `len` items. Returns
    /// whether it moved.
    pub fn step(&mut self, direction: i32, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let target = (self.selected as i64 + direction as i64).clamp(0, len as i64 - 1) as usize;
        let moved = target != self.selected;
        self.selected = target;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_resets_selection_and_marks_exit() {
        let mut nav = Navigation::new("main");
        nav.select(3);
        nav.push("music");

        assert_eq!(nav.current(), "music");
        assert_eq!(nav.selected(), 0);
        assert_eq!(nav.exiting(), Some("main"));
        assert_eq!(
            nav.history(),
            &[HistoryEntry {
                screen: "main".into(),
                selected: 3
            }]
        );
    }

    #[test]
    fn entering_player_keeps_selection() {
        let mut nav = Navigation::new("music-album");
        nav.select(5);
        nav.push(PLAYER);
        assert_eq!(nav.selected(), 5);
    }

    #[test]
    fn pop_on_empty_history_is_noop() {
        let mut nav = Navigation::new("main");
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.current(), "main");
    }

    #[test]
    fn pop_clears_exit_mark_of_restored_screen() {
        let mut nav = Navigation::new("main");
        nav.push("music");
        assert_eq!(nav.pop().as_deref(), Some("music"));
        assert_eq!(nav.exiting(), None);
    }

    #[test]
    fn step_clamps() {
        let mut nav = Navigation::new("main");
        assert!(!nav.step(-1, 4));
        assert!(nav.step(1, 4));
        nav.select(3);
        assert!(!nav.step(1, 4));
        assert!(!nav.step(1, 0));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn back_restores_exact_state(
                path in proptest::collection::vec((0usize..4, 0usize..20), 0..8),
                target in 0usize..4,
                selected in 0usize..20,
            ) {
                let screens = ["main", "music", "videos", "contact"];
                let mut nav = Navigation::new("main");
                for (screen, sel) in path {
                    nav.push(screens[screen]);
                    nav.select(sel);
                }
                nav.select(selected);
                let before = (nav.current().to_string(), nav.selected(), nav.history().len());

                nav.push(screens[target]);
                nav.pop();

                prop_assert_eq!((nav.current().to_string(), nav.selected(), nav.history().len()), before);
            }
        }
    }
}
