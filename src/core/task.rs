/// Something scheduled that can be called off.
///
/// Cancelling a task that already fired or was already cancelled must be a
/// no-op.
pub trait Cancel {
    fn cancel(&self);
}

/// Holds at most one outstanding task. Starting a new one cancels the
/// previous one first, so two activities sharing a slot never overlap.
#[derive(Debug)]
pub struct TaskSlot<T: Cancel> {
    active: Option<T>,
}

impl<T: Cancel> Default for TaskSlot<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: Cancel> TaskSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, task: Option<T>) {
        self.cancel();
        self.active = task;
    }

    /// Replace the handle of a task that re-arms itself (e.g. a frame
    /// callback requesting the next frame). The old handle has fired, so it
    /// is not cancelled.
    pub fn renew(&mut self, task: Option<T>) {
        self.active = task;
    }

    pub fn cancel(&mut self) {
        if let Some(t) = self.active.take() {
            t.cancel();
        }
    }

    /// Drop the handle of a one-shot task that has just fired.
    pub fn finish(&mut self) {
        self.active = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
