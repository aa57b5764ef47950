//! Count-up animation for the statistics display elements.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom;

const TICK_MS: i32 = 30;
const STEPS: u32 = 50;

/// Interpolation for one counter: a float accumulator stepping by
/// `target / 50`, displayed as its floor until the target is reached.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    current: f64,
    target: i64,
    step: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tick {
    Running(i64),
    /// Terminal value; the timer driving the counter stops here.
    Done(i64),
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        CountUp {
            current: 0.0,
            target,
            step: target as f64 / STEPS as f64,
        }
    }

    pub fn tick(&mut self) -> Tick {
        self.current += self.step;
        if self.current >= self.target as f64 {
            Tick::Done(self.target)
        } else {
            Tick::Running(self.current.floor() as i64)
        }
    }
}

/// Animates every `.stat-number` element from zero up to the integer already
/// in its text content. Each element runs on its own interval timer.
pub(crate) fn animate_numbers(document: &Document) {
    dom::for_each(document, ".stat-number", |element| {
        let Some(target) = element
            .text_content()
            .and_then(|text| text.trim().parse::<i64>().ok())
        else {
            return;
        };
        run_count_up(element, target);
    });
}

fn run_count_up(element: Element, target: i64) {
    let mut counter = CountUp::new(target);
    let handle = Rc::new(Cell::new(0));
    let handle_inner = handle.clone();
    let closure = Closure::wrap(Box::new(move || match counter.tick() {
        Tick::Running(value) => element.set_text_content(Some(&value.to_string())),
        Tick::Done(value) => {
            element.set_text_content(Some(&value.to_string()));
            dom::window().clear_interval_with_handle(handle_inner.get());
        }
    }) as Box<dyn FnMut()>);
    match dom::window().set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        TICK_MS,
    ) {
        Ok(id) => {
            handle.set(id);
            // cleared by handle from inside the tick once the target is hit
            closure.forget();
        }
        Err(err) => log::debug!("failed to start counter timer: {err:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_exact_target_and_stops() {
        let mut counter = CountUp::new(100);
        let mut ticks = 0;
        let settled = loop {
            ticks += 1;
            assert!(ticks <= 1000, "counter never settled");
            match counter.tick() {
                Tick::Running(value) => assert!(value < 100),
                Tick::Done(value) => break value,
            }
        };
        assert_eq!(settled, 100);
        assert_eq!(ticks, 50);
        // stays settled at the same value afterwards
        assert_eq!(counter.tick(), Tick::Done(100));
    }

    #[test]
    fn displayed_values_never_decrease() {
        let mut counter = CountUp::new(7);
        let mut last = 0;
        loop {
            match counter.tick() {
                Tick::Running(value) => {
                    assert!(value >= last);
                    last = value;
                }
                Tick::Done(value) => {
                    assert!(value >= last);
                    break;
                }
            }
        }
    }

    #[test]
    fn zero_target_settles_immediately() {
        assert_eq!(CountUp::new(0).tick(), Tick::Done(0));
    }
}
