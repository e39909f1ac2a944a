use std::rc::Rc;

use log::debug;
use yew::functional::Reducible;

use super::menu::{DropdownMenu, HoverRegion};
use super::scroll::ScrollTracker;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ServicesEnter(HoverRegion),
    ServicesLeave(HoverRegion),
    ServicesSettle(u32),
    ToggleMobileMenu,
    ToggleMobileServices,
    /// Any link inside the mobile panel or a services dropdown.
    SelectLink,
}

/// Navbar visibility plus every menu the navbar owns. Kept in one reducer so
/// scroll-hide and the dropdowns cannot drift apart.
#[derive(Clone, Debug, PartialEq)]
pub struct NavbarMachine {
    tracker: ScrollTracker,
    pub visible: bool,
    pub scrolled: bool,
    pub mobile_open: bool,
    pub services: DropdownMenu,
    pub mobile_services: DropdownMenu,
}

impl Default for NavbarMachine {
    fn default() -> Self {
        Self {
            tracker: ScrollTracker::default(),
            visible: true,
            scrolled: false,
            mobile_open: false,
            services: DropdownMenu::default(),
            mobile_services: DropdownMenu::default(),
        }
    }
}

impl NavbarMachine {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Scrolled(offset) => {
                let sample = self.tracker.sample(offset);
                self.scrolled = sample.scrolled;
                if sample.hides_navbar() {
                    if self.visible {
                        debug!("navbar hidden at offset {}", sample.offset);
                    }
                    self.visible = false;
                    self.services.force_close();
                    self.mobile_services.force_close();
                } else {
                    if !self.visible {
                        debug!("navbar shown at offset {}", sample.offset);
                    }
                    self.visible = true;
                }
            }
            NavAction::ServicesEnter(region) => self.services.pointer_enter(region),
            NavAction::ServicesLeave(region) => {
                self.services.pointer_leave(region);
            }
            NavAction::ServicesSettle(epoch) => {
                if self.services.settle(epoch) {
                    debug!("services menu closed");
                }
            }
            NavAction::ToggleMobileMenu => self.mobile_open = !self.mobile_open,
            NavAction::ToggleMobileServices => self.mobile_services.toggle(),
            NavAction::SelectLink => {
                self.mobile_open = false;
                self.services.close();
                self.mobile_services.close();
            }
        }
    }
}

impl Reducible for NavbarMachine {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
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
    use crate::motion::menu::MenuState;

    fn run(actions: &[NavAction]) -> NavbarMachine {
        let mut machine = NavbarMachine::default();
        for action in actions {
            machine.apply(*action);
        }
        machine
    }

    #[test]
    fn scroll_down_hides_and_up_shows() {
        let mut machine = run(&[NavAction::Scrolled(50.0), NavAction::Scrolled(250.0)]);
        assert!(!machine.visible);
        assert!(machine.scrolled);
        machine.apply(NavAction::Scrolled(200.0));
        assert!(machine.visible);
    }

    #[test]
    fn scroll_hide_closes_open_dropdowns() {
        let machine = run(&[
            NavAction::ServicesEnter(HoverRegion::Trigger),
            NavAction::ToggleMobileServices,
            NavAction::Scrolled(400.0),
        ]);
        assert_eq!(machine.services.state(), MenuState::Closed);
        assert!(!machine.mobile_services.is_open());
    }

    #[test]
    fn forced_close_survives_further_scrolling() {
        let mut machine = run(&[
            NavAction::ServicesEnter(HoverRegion::Trigger),
            NavAction::Scrolled(400.0),
            NavAction::Scrolled(300.0),
            NavAction::Scrolled(0.0),
        ]);
        assert!(machine.visible);
        assert!(!machine.services.is_open());
        machine.apply(NavAction::ServicesEnter(HoverRegion::Trigger));
        assert!(machine.services.is_open());
    }

    #[test]
    fn selecting_a_service_closes_everything_at_once() {
        let mut machine = run(&[NavAction::ToggleMobileMenu, NavAction::ToggleMobileServices]);
        assert!(machine.mobile_open && machine.mobile_services.is_open());
        machine.apply(NavAction::SelectLink);
        assert!(!machine.mobile_open);
        assert!(!machine.mobile_services.is_open());
        assert!(!machine.services.is_open());
    }

    #[test]
    fn desktop_selection_then_hover_closes_again() {
        let mut machine = run(&[
            NavAction::ServicesEnter(HoverRegion::Trigger),
            NavAction::ServicesLeave(HoverRegion::Trigger),
            NavAction::ServicesEnter(HoverRegion::Panel),
            NavAction::SelectLink,
        ]);
        assert_eq!(machine.services.state(), MenuState::Closed);

        machine.apply(NavAction::ServicesEnter(HoverRegion::Trigger));
        machine.apply(NavAction::ServicesLeave(HoverRegion::Trigger));
        let epoch = match machine.services.state() {
            MenuState::PendingClose { epoch } => epoch,
            other => panic!("expected a pending close, got {other:?}"),
        };
        machine.apply(NavAction::ServicesSettle(epoch));
        assert_eq!(machine.services.state(), MenuState::Closed);
    }

    #[test]
    fn desktop_and_mobile_services_are_independent() {
        let machine = run(&[NavAction::ToggleMobileServices]);
        assert!(machine.mobile_services.is_open());
        assert!(!machine.services.is_open());
    }

    #[test]
    fn reduce_keeps_rc_when_nothing_changes() {
        let machine = Rc::new(NavbarMachine::default());
        let next = machine.clone().reduce(NavAction::ServicesSettle(7));
        assert!(Rc::ptr_eq(&machine, &next));
    }
}
