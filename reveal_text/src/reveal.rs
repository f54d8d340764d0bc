// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental reveal of queued runs over two cached surfaces.

use core::fmt;
use std::collections::VecDeque;

use crate::layout::TextRun;
use crate::surface::Surface;

/// Animates queued [`TextRun`]s as a character-by-character reveal.
///
/// Runs reveal strictly in queue order. A run that completes is baked onto
/// the settled surface exactly once; each [`render`](Self::render) then
/// costs one clear, one blit of the settled surface and at most one partial
/// string draw, however many runs have already finished.
pub struct RevealRenderer<F, S> {
    queue: VecDeque<TextRun<F>>,
    /// Seconds remaining before the head run's next character appears.
    /// `None` until the current head receives its first update; always
    /// reset when the head is dequeued, so leftover reveal time never
    /// rolls into the next run.
    credit: Option<f32>,
    settled: S,
    live: S,
}

impl<F, S: Surface<F>> RevealRenderer<F, S> {
    /// Creates a renderer over two equally sized transparent surfaces.
    pub fn new(settled: S, live: S) -> Self {
        Self {
            queue: VecDeque::new(),
            credit: None,
            settled,
            live,
        }
    }

    /// Appends `run` to the reveal queue.
    ///
    /// Nothing is drawn until [`update`](Self::update) and
    /// [`render`](Self::render) are called.
    pub fn enqueue(&mut self, run: TextRun<F>) {
        self.queue.push_back(run);
    }

    /// Returns true when no run is queued or revealing.
    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the surface holding every fully revealed run.
    pub fn settled_surface(&self) -> &S {
        &self.settled
    }

    /// Advances the head run by `dt` seconds and bakes any runs that
    /// complete.
    ///
    /// Fractional reveal time is carried across calls so the reveal rate
    /// does not drift with the frame rate.
    pub fn update(&mut self, dt: f32) {
        if let Some(head) = self.queue.front_mut() {
            let speed = head.seconds_per_char();
            if speed > 0.0 && !head.is_complete() {
                let credit = self.credit.get_or_insert(speed);
                *credit -= dt;
                while *credit <= 0.0 && !head.is_complete() {
                    let count = 1 + (-*credit / speed).floor() as usize;
                    head.advance_shown(count);
                    *credit += count as f32 * speed;
                }
            }
        }
        self.settle();
    }

    /// Force-completes and bakes every queued run immediately.
    pub fn flush(&mut self) {
        if self.queue.is_empty() {
            self.credit = None;
            return;
        }
        log::debug!("flushing {} queued runs", self.queue.len());
        self.settled.begin();
        while let Some(mut run) = self.queue.pop_front() {
            run.reveal_all();
            self.settled
                .draw_text(run.font(), run.text(), run.position(), run.color());
        }
        self.settled.end();
        self.credit = None;
    }

    /// Composites the settled surface and the head run's revealed prefix
    /// onto the live surface and returns it.
    ///
    /// Reveal state is untouched: calling this any number of times between
    /// updates yields the same output.
    pub fn render(&mut self) -> &S {
        self.live.begin();
        self.live.clear();
        self.live.blit(&self.settled);
        if let Some(head) = self.queue.front() {
            self.live
                .draw_text(head.font(), head.visible_text(), head.position(), head.color());
        }
        self.live.end();
        &self.live
    }

    /// Empties the queue and clears both surfaces to transparent.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.credit = None;
        self.settled.begin();
        self.settled.clear();
        self.settled.end();
        self.live.begin();
        self.live.clear();
        self.live.end();
    }

    /// Bakes every complete run at the head of the queue onto the settled
    /// surface and dequeues it, unseeding the reveal credit each time.
    fn settle(&mut self) {
        if !self.queue.front().is_some_and(|run| run.is_complete()) {
            return;
        }
        self.settled.begin();
        while self.queue.front().is_some_and(|run| run.is_complete()) {
            let run = self
                .queue
                .pop_front()
                .expect("head exists and is complete");
            log::debug!("baking completed run {:?}", run.text());
            self.settled
                .draw_text(run.font(), run.text(), run.position(), run.color());
            self.credit = None;
        }
        self.settled.end();
    }
}

impl<F, S> fmt::Debug for RevealRenderer<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealRenderer")
            .field("queued", &self.queue.len())
            .field("credit", &self.credit)
            .finish_non_exhaustive()
    }
}
