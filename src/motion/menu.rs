//! Open/close coordination for a single dropdown.
//!
//! A desktop dropdown is open while the pointer is over its trigger *or* its
//! panel. Browsers deliver `mouseleave` on the trigger before `mouseenter` on
//! the panel, so a leave that empties the hover set only moves the menu to
//! [`MenuState::PendingClose`]; the owner commits the close later through
//! [`DropdownMenu::settle`]. Re-entering either region in between keeps the
//! panel open without a visible close.

use std::rc::Rc;

use yew::functional::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverRegion {
    Trigger,
    Panel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
    PendingClose { epoch: u32 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownMenu {
    state: MenuState,
    over_trigger: bool,
    over_panel: bool,
    epoch: u32,
}

impl DropdownMenu {
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The panel is rendered while open or waiting to close.
    pub fn is_open(&self) -> bool {
        !matches!(self.state, MenuState::Closed)
    }

    fn hovered(&self) -> bool {
        self.over_trigger || self.over_panel
    }

    fn set_hover(&mut self, region: HoverRegion, value: bool) {
        match region {
            HoverRegion::Trigger => self.over_trigger = value,
            HoverRegion::Panel => self.over_panel = value,
        }
    }

    pub fn pointer_enter(&mut self, region: HoverRegion) {
        self.set_hover(region, true);
        self.state = MenuState::Open;
    }

    /// Returns the epoch the owner must pass to [`settle`](Self::settle)
    /// once the hover-close delay has elapsed.
    pub fn pointer_leave(&mut self, region: HoverRegion) -> Option<u32> {
        self.set_hover(region, false);
        if self.hovered() || self.state != MenuState::Open {
            return None;
        }
        self.epoch = self.epoch.wrapping_add(1);
        self.state = MenuState::PendingClose { epoch: self.epoch };
        Some(self.epoch)
    }

    /// Commits a pending close. Stale epochs are ignored so an old timer
    /// cannot cut a newer pending close short.
    pub fn settle(&mut self, epoch: u32) -> bool {
        match self.state {
            MenuState::PendingClose { epoch: pending } if pending == epoch => {
                self.state = MenuState::Closed;
                true
            }
            _ => false,
        }
    }

    /// Tap on the trigger (mobile).
    pub fn toggle(&mut self) {
        self.state = if self.is_open() { MenuState::Closed } else { MenuState::Open };
    }

    /// Link selected inside the panel. The panel unmounts without a
    /// `mouseleave`, so the hover set is cleared along with the state.
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
        self.over_trigger = false;
        self.over_panel = false;
    }

    /// Scroll-hide. Only a fresh pointer-enter or tap can reopen the menu.
    pub fn force_close(&mut self) {
        self.close();
    }

    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Enter(region) => self.pointer_enter(region),
            MenuAction::Leave(region) => {
                self.pointer_leave(region);
            }
            MenuAction::Settle(epoch) => {
                self.settle(epoch);
            }
            MenuAction::Close => self.close(),
        }
    }
}

/// Transitions for a dropdown that lives in its own reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Enter(HoverRegion),
    Leave(HoverRegion),
    Settle(u32),
    Close,
}

impl Reducible for DropdownMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_from_trigger_to_panel_never_closes() {
        let mut menu = DropdownMenu::default();
        menu.pointer_enter(HoverRegion::Trigger);
        let epoch = menu.pointer_leave(HoverRegion::Trigger).unwrap();
        assert!(menu.is_open());
        menu.pointer_enter(HoverRegion::Panel);
        assert_eq!(menu.state(), MenuState::Open);
        assert!(!menu.settle(epoch));
        assert!(menu.is_open());
    }

    #[test]
    fn leaving_both_regions_closes_after_settle() {
        let mut menu = DropdownMenu::default();
        menu.pointer_enter(HoverRegion::Trigger);
        menu.pointer_enter(HoverRegion::Panel);
        assert_eq!(menu.pointer_leave(HoverRegion::Trigger), None);
        let epoch = menu.pointer_leave(HoverRegion::Panel).unwrap();
        assert!(menu.settle(epoch));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut menu = DropdownMenu::default();
        menu.pointer_enter(HoverRegion::Trigger);
        let first = menu.pointer_leave(HoverRegion::Trigger).unwrap();
        menu.pointer_enter(HoverRegion::Trigger);
        let second = menu.pointer_leave(HoverRegion::Trigger).unwrap();
        assert!(!menu.settle(first));
        assert!(menu.is_open());
        assert!(menu.settle(second));
    }

    #[test]
    fn force_close_needs_fresh_enter() {
        let mut menu = DropdownMenu::default();
        menu.pointer_enter(HoverRegion::Trigger);
        menu.force_close();
        assert!(!menu.is_open());
        // the pointer eventually leaves the trigger it was resting on
        assert_eq!(menu.pointer_leave(HoverRegion::Trigger), None);
        assert!(!menu.is_open());
        menu.pointer_enter(HoverRegion::Trigger);
        assert!(menu.is_open());
    }

    #[test]
    fn toggle_flips_and_close_resets() {
        let mut menu = DropdownMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn close_forgets_the_panel_hover() {
        let mut menu = DropdownMenu::default();
        menu.pointer_enter(HoverRegion::Trigger);
        menu.pointer_leave(HoverRegion::Trigger);
        menu.pointer_enter(HoverRegion::Panel);
        // link clicked inside the panel; the panel unmounts without a leave
        menu.close();
        menu.pointer_enter(HoverRegion::Trigger);
        let epoch = menu.pointer_leave(HoverRegion::Trigger);
        assert!(matches!(menu.state(), MenuState::PendingClose { .. }));
        assert!(menu.settle(epoch.unwrap()));
        assert!(!menu.is_open());
    }

    #[test]
    fn reducer_applies_back_to_back_transitions() {
        let menu = Rc::new(DropdownMenu::default());
        let menu = menu.reduce(MenuAction::Enter(HoverRegion::Trigger));
        let menu = menu.reduce(MenuAction::Leave(HoverRegion::Trigger));
        let epoch = match menu.state() {
            MenuState::PendingClose { epoch } => epoch,
            other => panic!("expected a pending close, got {other:?}"),
        };
        let menu = menu.reduce(MenuAction::Settle(epoch));
        assert_eq!(menu.state(), MenuState::Closed);

        let unchanged = menu.clone().reduce(MenuAction::Settle(epoch));
        assert!(Rc::ptr_eq(&menu, &unchanged));
    }
}
