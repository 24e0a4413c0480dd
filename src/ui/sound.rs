//! Audible feedback: the terminal bell on swaps and at the end of a run

use crate::playback::StepObserver;
use crate::step::{Step, StepKind};
use std::io::{self, Write};

const BELL: &[u8] = b"\x07";

/// Rings the terminal bell through the wrapped writer
pub struct BellObserver<W: Write> {
    out: W,
    rings: usize,
}

impl BellObserver<io::Stdout> {
    pub fn stdout() -> Self {
        BellObserver::new(io::stdout())
    }
}

impl<W: Write> BellObserver<W> {
    pub fn new(out: W) -> Self {
        BellObserver { out, rings: 0 }
    }

    pub fn rings(&self) -> usize {
        self.rings
    }

    fn ring(&mut self) {
        // A terminal that cannot ring is not worth interrupting playback for
        if self.out.write_all(BELL).and_then(|_| self.out.flush()).is_ok() {
            self.rings += 1;
        }
    }
}

impl<W: Write> StepObserver for BellObserver<W> {
    fn on_step(&mut self, step: &Step) {
        if step.is(StepKind::Swap) {
            self.ring();
        }
    }

    fn on_complete(&mut self) {
        self.ring();
    }
}
