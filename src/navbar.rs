//! Shadow and hide/show styling for the fixed navigation bar.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

const SHADOW_OFFSET: f64 = 50.0;
const HIDE_OFFSET: f64 = 100.0;

/// Scroll state folded over successive offsets. Shadow and hide/show are
/// independent outputs; both may be set at once.
#[derive(Debug, Default)]
pub struct NavbarMotion {
    last_offset: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavbarStyle {
    pub shadow: bool,
    pub hidden: bool,
}

impl NavbarMotion {
    pub fn new() -> Self {
        NavbarMotion::default()
    }

    /// Folds one scroll offset into the state and yields the styling for it.
    /// Hiding requires downward movement past the hide threshold.
    pub fn observe(&mut self, offset: f64) -> NavbarStyle {
        let style = NavbarStyle {
            shadow: offset > SHADOW_OFFSET,
            hidden: offset > self.last_offset && offset > HIDE_OFFSET,
        };
        self.last_offset = offset;
        style
    }
}

pub(crate) fn init_scroll_effect(document: &Document) {
    let Ok(Some(navbar)) = document.query_selector(".navbar") else {
        return;
    };
    let motion = Rc::new(RefCell::new(NavbarMotion::new()));
    dom::listen(&dom::window(), "scroll", move |_event| {
        let offset = dom::window().scroll_y().unwrap_or(0.0);
        let style = motion.borrow_mut().observe(offset);

        let class_list = navbar.class_list();
        if style.shadow {
            let _ = class_list.add_1("shadow");
        } else {
            let _ = class_list.remove_1("shadow");
        }

        if let Some(element) = navbar.dyn_ref::<HtmlElement>() {
            let transform = if style.hidden {
                "translateY(-100%)"
            } else {
                "translateY(0)"
            };
            let _ = element.style().set_property("transform", transform);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_follows_the_fifty_unit_threshold() {
        let mut motion = NavbarMotion::new();
        assert!(!motion.observe(0.0).shadow);
        assert!(!motion.observe(50.0).shadow);
        assert!(motion.observe(51.0).shadow);
        assert!(!motion.observe(10.0).shadow);
    }

    #[test]
    fn scroll_sequence_from_the_page_behaves() {
        let mut motion = NavbarMotion::new();
        let styles: Vec<NavbarStyle> = [0.0, 60.0, 150.0, 140.0]
            .into_iter()
            .map(|offset| motion.observe(offset))
            .collect();
        let shadows: Vec<bool> = styles.iter().map(|s| s.shadow).collect();
        let hiddens: Vec<bool> = styles.iter().map(|s| s.hidden).collect();
        assert_eq!(shadows, [false, true, true, true]);
        // 140 < 150 means scrolling up again, so the bar comes back
        assert_eq!(hiddens, [false, false, true, false]);
    }

    #[test]
    fn shallow_downward_scroll_keeps_the_bar_visible() {
        let mut motion = NavbarMotion::new();
        motion.observe(20.0);
        let style = motion.observe(80.0);
        assert!(!style.hidden, "still above the hide threshold");
    }

    #[test]
    fn hidden_and_shadowed_can_coexist() {
        let mut motion = NavbarMotion::new();
        motion.observe(110.0);
        let style = motion.observe(200.0);
        assert!(style.shadow && style.hidden);
    }
}
