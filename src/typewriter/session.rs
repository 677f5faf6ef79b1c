//! Reveal state machine behind the typewriter effect.
//!
//! A [`RevealSession`] discloses one target string a character at a time.
//! It owns no timers: `start` and `step` hand the caller back at most one
//! [`Step`] to arm, and a fired timer calls `step` with the token it was
//! armed with. Tokens carry the session generation, so a timer armed for a
//! session that has since been restarted or cancelled resolves to
//! [`StepOutcome::Stale`] and mutates nothing.

/// Lifecycle state of a reveal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealStatus {
    #[default]
    Idle,
    Delaying,
    Revealing,
    Done,
}

/// Identity of the session a scheduled step was armed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepToken {
    generation: u64,
}

/// One timer the caller must arm: call `step(token)` after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub token: StepToken,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Same text, cadence and delay as the running session: nothing to do,
    /// the pending step (if any) stays live.
    Unchanged,
    /// Empty text: the session is already done, nothing to schedule.
    Immediate,
    /// The session is delaying; arm the contained step.
    Scheduled(Step),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step belonged to a superseded or cancelled session.
    Stale,
    /// One more character is revealed; arm the contained step.
    Advanced(Step),
    /// The final character is revealed; the session is done.
    Completed,
}

#[derive(Debug, Default)]
pub struct RevealSession {
    source_text: String,
    cadence_ms: u32,
    initial_delay_ms: u32,
    cursor_index: usize,
    byte_cursor: usize,
    status: RevealStatus,
    generation: u64,
}

impl RevealSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)initialize the session for `text`. Restarting with the same
    /// arguments is a visible no-op; anything else supersedes the previous
    /// session and invalidates its pending step before the new one is
    /// handed out.
    pub fn start(&mut self, text: &str, cadence_ms: u32, initial_delay_ms: u32) -> StartOutcome {
        if self.status != RevealStatus::Idle
            && self.source_text == text
            && self.cadence_ms == cadence_ms
            && self.initial_delay_ms == initial_delay_ms
        {
            return StartOutcome::Unchanged;
        }

        self.generation += 1;
        self.source_text.clear();
        self.source_text.push_str(text);
        self.cadence_ms = cadence_ms;
        self.initial_delay_ms = initial_delay_ms;
        self.cursor_index = 0;
        self.byte_cursor = 0;

        if self.source_text.is_empty() {
            self.status = RevealStatus::Done;
            return StartOutcome::Immediate;
        }

        self.status = RevealStatus::Delaying;
        StartOutcome::Scheduled(Step {
            token: StepToken { generation: self.generation },
            delay_ms: initial_delay_ms,
        })
    }

    /// Advance by one character, if `token` still belongs to the live
    /// session. Reveals are strictly sequential: each step discloses
    /// exactly the next unrevealed character.
    pub fn step(&mut self, token: StepToken) -> StepOutcome {
        if token.generation != self.generation {
            return StepOutcome::Stale;
        }
        match self.status {
            RevealStatus::Delaying | RevealStatus::Revealing => {}
            RevealStatus::Idle | RevealStatus::Done => return StepOutcome::Stale,
        }

        if let Some(ch) = self.source_text[self.byte_cursor..].chars().next() {
            self.byte_cursor += ch.len_utf8();
            self.cursor_index += 1;
        }

        if self.byte_cursor >= self.source_text.len() {
            self.status = RevealStatus::Done;
            StepOutcome::Completed
        } else {
            self.status = RevealStatus::Revealing;
            StepOutcome::Advanced(Step {
                token,
                delay_ms: self.cadence_ms,
            })
        }
    }

    /// Park the session in `Idle` and invalidate any pending step. Safe to
    /// call repeatedly and on a session that already finished; the revealed
    /// text is left exactly as it was.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.status = RevealStatus::Idle;
    }

    /// The revealed prefix of the source text.
    pub fn revealed_text(&self) -> &str {
        &self.source_text[..self.byte_cursor]
    }

    /// Number of characters revealed so far.
    pub fn revealed_chars(&self) -> usize {
        self.cursor_index
    }

    pub fn is_done(&self) -> bool {
        self.status == RevealStatus::Done
    }

    pub fn status(&self) -> RevealStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(outcome: StartOutcome) -> Step {
        match outcome {
            StartOutcome::Scheduled(step) => step,
            other => panic!("expected a scheduled step, got {:?}", other),
        }
    }

    fn advanced(outcome: StepOutcome) -> Step {
        match outcome {
            StepOutcome::Advanced(step) => step,
            other => panic!("expected an advanced step, got {:?}", other),
        }
    }

    /// Drive the session to completion, returning each intermediate
    /// revealed prefix (one entry per timer fire).
    fn run_to_done(session: &mut RevealSession, first: Step) -> Vec<String> {
        let mut snapshots = Vec::new();
        let mut pending = Some(first);
        while let Some(step) = pending.take() {
            match session.step(step.token) {
                StepOutcome::Advanced(next) => {
                    snapshots.push(session.revealed_text().to_string());
                    pending = Some(next);
                }
                StepOutcome::Completed => {
                    snapshots.push(session.revealed_text().to_string());
                }
                StepOutcome::Stale => panic!("live step resolved stale"),
            }
        }
        snapshots
    }

    #[test]
    fn test_reveals_hi_step_by_step() {
        let mut session = RevealSession::new();
        let step = scheduled(session.start("HI", 15, 0));
        assert_eq!(step.delay_ms, 0);
        assert_eq!(session.revealed_text(), "");
        assert_eq!(session.status(), RevealStatus::Delaying);
        assert!(!session.is_done());

        let next = advanced(session.step(step.token));
        assert_eq!(session.revealed_text(), "H");
        assert_eq!(next.delay_ms, 15);
        assert_eq!(session.status(), RevealStatus::Revealing);

        assert_eq!(session.step(next.token), StepOutcome::Completed);
        assert_eq!(session.revealed_text(), "HI");
        assert!(session.is_done());

        // A duplicate fire of the consumed step must not re-run: the
        // session is done and schedules nothing further.
        assert_eq!(session.step(next.token), StepOutcome::Stale);
        assert_eq!(session.revealed_text(), "HI");
    }

    #[test]
    fn test_empty_text_is_done_without_scheduling() {
        let mut session = RevealSession::new();
        assert_eq!(session.start("", 15, 300), StartOutcome::Immediate);
        assert_eq!(session.revealed_text(), "");
        assert!(session.is_done());
    }

    #[test]
    fn test_initial_delay_then_cadence() {
        let mut session = RevealSession::new();
        let first = scheduled(session.start("abc", 40, 250));
        assert_eq!(first.delay_ms, 250);

        let second = advanced(session.step(first.token));
        assert_eq!(second.delay_ms, 40);
        let third = advanced(session.step(second.token));
        assert_eq!(third.delay_ms, 40);
        assert_eq!(session.step(third.token), StepOutcome::Completed);
    }

    #[test]
    fn test_revealed_is_prefix_and_monotonic() {
        let mut session = RevealSession::new();
        let text = "Auto-qualifies and researches potential customers.";
        let first = scheduled(session.start(text, 15, 0));

        let mut last_len = 0;
        for snapshot in run_to_done(&mut session, first) {
            assert!(text.starts_with(&snapshot));
            assert!(snapshot.chars().count() > last_len);
            last_len = snapshot.chars().count();
        }
        assert_eq!(session.revealed_text(), text);
        assert_eq!(session.revealed_chars(), text.chars().count());
    }

    #[test]
    fn test_start_is_idempotent_for_identical_arguments() {
        let mut session = RevealSession::new();
        let step = scheduled(session.start("hello", 20, 100));

        // Same triple again: no restart, no second timer.
        assert_eq!(session.start("hello", 20, 100), StartOutcome::Unchanged);
        assert_eq!(session.status(), RevealStatus::Delaying);

        // The step armed by the first call is still the live one.
        advanced(session.step(step.token));
        assert_eq!(session.revealed_text(), "h");

        // Mid-reveal idempotence holds too, without rewinding progress.
        assert_eq!(session.start("hello", 20, 100), StartOutcome::Unchanged);
        assert_eq!(session.revealed_text(), "h");
    }

    #[test]
    fn test_restart_with_new_text_invalidates_pending_step() {
        let mut session = RevealSession::new();
        let step_a = scheduled(session.start("A", 10, 50));
        let step_b = scheduled(session.start("B", 10, 50));

        // A's timer fires after the restart: it must not write anything.
        assert_eq!(session.step(step_a.token), StepOutcome::Stale);
        assert_eq!(session.revealed_text(), "");

        // Only B's sequence is ever observed.
        assert_eq!(session.step(step_b.token), StepOutcome::Completed);
        assert_eq!(session.revealed_text(), "B");
        assert!(session.is_done());
    }

    #[test]
    fn test_cancel_prevents_pending_step_from_firing() {
        let mut session = RevealSession::new();
        let first = scheduled(session.start("typed", 10, 0));
        let second = advanced(session.step(first.token));
        assert_eq!(session.revealed_text(), "t");

        session.cancel();
        assert_eq!(session.status(), RevealStatus::Idle);

        // The already-armed timer fires anyway; nothing may change.
        assert_eq!(session.step(second.token), StepOutcome::Stale);
        assert_eq!(session.revealed_text(), "t");
        assert!(!session.is_done());
    }

    #[test]
    fn test_cancel_is_idempotent_and_harmless_after_done() {
        let mut session = RevealSession::new();
        let first = scheduled(session.start("ok", 5, 0));
        run_to_done(&mut session, first);
        assert!(session.is_done());

        session.cancel();
        session.cancel();
        assert_eq!(session.status(), RevealStatus::Idle);
        assert_eq!(session.revealed_text(), "ok");
    }

    #[test]
    fn test_restart_after_cancel_reveals_from_zero() {
        let mut session = RevealSession::new();
        let first = scheduled(session.start("again", 10, 0));
        advanced(session.step(first.token));
        session.cancel();

        // Same arguments, but the session was cancelled: a fresh reveal.
        let restarted = scheduled(session.start("again", 10, 0));
        assert_eq!(restarted.delay_ms, 10);
        let snapshots = run_to_done(&mut session, restarted);
        assert_eq!(snapshots.first().map(String::as_str), Some("a"));
        assert_eq!(session.revealed_text(), "again");
    }

    #[test]
    fn test_status_walks_the_lifecycle() {
        let mut session = RevealSession::new();
        assert_eq!(session.status(), RevealStatus::Idle);

        let first = scheduled(session.start("go", 10, 0));
        assert_eq!(session.status(), RevealStatus::Delaying);

        let second = advanced(session.step(first.token));
        assert_eq!(session.status(), RevealStatus::Revealing);

        session.step(second.token);
        assert_eq!(session.status(), RevealStatus::Done);
    }

    #[test]
    fn test_multibyte_text_reveals_whole_characters() {
        let mut session = RevealSession::new();
        let text = "héllo wörld";
        let first = scheduled(session.start(text, 5, 0));

        for snapshot in run_to_done(&mut session, first) {
            // Slicing happened on a char boundary or revealed_text would
            // have panicked; the prefix must also parse back cleanly.
            assert!(text.starts_with(&snapshot));
        }
        assert_eq!(session.revealed_chars(), text.chars().count());
        assert_eq!(session.revealed_text(), text);
    }

    #[test]
    fn test_label_completes_before_dependent_body_starts() {
        // The composition rule from the product card: the body session is
        // only started once the label session reports done.
        let mut label = RevealSession::new();
        let mut body = RevealSession::new();
        let body_text = "Auto-qualifies and researches potential customers.";

        let mut pending = Some(scheduled(label.start("Lead Intelligence", 15, 0)));
        while let Some(step) = pending.take() {
            assert_eq!(body.revealed_text(), "");
            assert_eq!(body.status(), RevealStatus::Idle);
            if let StepOutcome::Advanced(next) = label.step(step.token) {
                pending = Some(next);
            }
        }
        assert!(label.is_done());
        assert_eq!(label.revealed_text(), "Lead Intelligence");

        let first = scheduled(body.start(body_text, 15, 0));
        assert_eq!(body.revealed_text(), "");
        let snapshots = run_to_done(&mut body, first);
        assert_eq!(snapshots.first().map(String::as_str), Some("A"));
        assert_eq!(body.revealed_text(), body_text);
    }
}
