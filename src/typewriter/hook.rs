//! Yew bindings for the reveal state machine.
//!
//! Each fragment of typed text gets its own session; the hooks arm one
//! `gloo_timers` timeout per pending step and publish the live
//! `(text, is_done)` pair through component state. Timeouts are armed
//! fire-and-forget: a fire that outlives its session is rejected by the
//! token check inside `step`, so teardown never races a timer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use super::session::{RevealSession, StartOutcome, Step, StepOutcome};

/// Live output of one reveal session, rendered as-is by the caller.
#[derive(Clone, PartialEq)]
pub struct Typewriter {
    pub text: String,
    pub is_done: bool,
}

/// Reveal `text` one character every `cadence_ms`, after an initial
/// `initial_delay_ms`. The reveal restarts whenever the arguments change
/// and is cancelled when the component unmounts.
#[hook]
pub fn use_typewriter(text: String, cadence_ms: u32, initial_delay_ms: u32) -> Typewriter {
    use_reveal(true, text, cadence_ms, initial_delay_ms)
}

/// Like [`use_typewriter`], but the session belongs to a chain: it only
/// starts once `predecessor_done` turns true. Until then the fragment
/// publishes an empty text, so the caller renders nothing for it.
#[hook]
pub fn use_typewriter_after(
    predecessor_done: bool,
    text: String,
    cadence_ms: u32,
    initial_delay_ms: u32,
) -> Typewriter {
    use_reveal(predecessor_done, text, cadence_ms, initial_delay_ms)
}

#[hook]
fn use_reveal(armed: bool, text: String, cadence_ms: u32, initial_delay_ms: u32) -> Typewriter {
    let session = use_mut_ref(RevealSession::new);
    let revealed = use_state(String::new);
    let done = use_state(|| false);

    {
        let session = session.clone();
        let revealed = revealed.clone();
        let done = done.clone();
        use_effect_with_deps(
            move |(armed, text, cadence_ms, initial_delay_ms): &(bool, String, u32, u32)| {
                if *armed {
                    debug!("starting reveal of {} chars", text.chars().count());
                    let outcome = session
                        .borrow_mut()
                        .start(text, *cadence_ms, *initial_delay_ms);
                    match outcome {
                        StartOutcome::Unchanged => {}
                        StartOutcome::Immediate => {
                            revealed.set(String::new());
                            done.set(true);
                        }
                        StartOutcome::Scheduled(step) => {
                            revealed.set(String::new());
                            done.set(false);
                            arm_step(&session, &revealed, &done, step);
                        }
                    }
                } else {
                    session.borrow_mut().cancel();
                    revealed.set(String::new());
                    done.set(false);
                }

                // Unmount or argument change: invalidate whatever step is
                // still pending before the next session arms its own.
                move || session.borrow_mut().cancel()
            },
            (armed, text, cadence_ms, initial_delay_ms),
        );
    }

    Typewriter {
        text: (*revealed).clone(),
        is_done: *done,
    }
}

fn arm_step(
    session: &Rc<RefCell<RevealSession>>,
    revealed: &UseStateHandle<String>,
    done: &UseStateHandle<bool>,
    step: Step,
) {
    let session = session.clone();
    let revealed = revealed.clone();
    let done = done.clone();
    Timeout::new(step.delay_ms, move || {
        let outcome = session.borrow_mut().step(step.token);
        match outcome {
            StepOutcome::Stale => {}
            StepOutcome::Advanced(next) => {
                revealed.set(session.borrow().revealed_text().to_string());
                arm_step(&session, &revealed, &done, next);
            }
            StepOutcome::Completed => {
                revealed.set(session.borrow().revealed_text().to_string());
                done.set(true);
            }
        }
    })
    .forget();
}
