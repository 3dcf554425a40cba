use log::info;

const MILESTONE_WEEKS: usize = 52;

/// Track progress of the weekly walk
pub struct WeekProgress {
    total: usize,
    processed: usize,
}

impl WeekProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
        }
    }

    pub fn increment(&mut self) {
        self.processed += 1;
        self.log_progress();
    }

    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.processed)
    }

    fn log_progress(&self) {
        if should_log(self.processed, self.total) {
            info!(
                "  → Progress: {}/{} weeks ({} remaining)",
                self.processed,
                self.total,
                self.remaining()
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % MILESTONE_WEEKS == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
