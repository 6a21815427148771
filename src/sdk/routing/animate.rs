use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use geo_types::LineString;

use super::state::RouteStore;

/// The first `floor(progress * n)` coordinates of `line`: empty at progress
/// zero, the full geometry at progress one.
pub fn reveal_prefix(line: &LineString<f64>, progress: f64) -> LineString<f64> {
    let total = line.0.len();
    let count = (progress.clamp(0.0, 1.0) * total as f64).floor() as usize;
    LineString::new(line.0[..count.min(total)].to_vec())
}

struct AnimationTask {
    cancel: Arc<AtomicBool>,
    worker: JoinHandle<()>,
}

/// Starts, supersedes and cancels route reveal animations. Clones share one
/// task slot, so whichever context starts a new animation tears down the
/// previous one first.
#[derive(Clone, Default)]
pub struct RouteAnimator {
    current: Arc<Mutex<Option<AnimationTask>>>,
}

impl RouteAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins revealing `geometry` over `duration`, superseding any
    /// animation already in flight. Frames are committed to the store under
    /// `token` and mirrored to `frames` when a sink is attached.
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        &self,
        store: RouteStore,
        token: u64,
        geometry: LineString<f64>,
        duration: Duration,
        frame_interval: Duration,
        frames: Option<Sender<LineString<f64>>>,
    ) {
        self.cancel();

        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let worker = thread::spawn(move || {
            run(store, token, geometry, duration, frame_interval, frames, flag)
        });
        *self.current.lock().unwrap() = Some(AnimationTask { cancel, worker });
    }

    /// Stops the current animation and waits for its worker to exit.
    pub fn cancel(&self) {
        let task = self.current.lock().unwrap().take();
        if let Some(task) = task {
            task.cancel.store(true, Ordering::Relaxed);
            let _ = task.worker.join();
        }
    }

    /// Blocks until the current animation has played out.
    pub fn wait(&self) {
        let task = self.current.lock().unwrap().take();
        if let Some(task) = task {
            let _ = task.worker.join();
        }
    }
}

fn run(
    store: RouteStore,
    token: u64,
    geometry: LineString<f64>,
    duration: Duration,
    frame_interval: Duration,
    frames: Option<Sender<LineString<f64>>>,
    cancel: Arc<AtomicBool>,
) {
    let started = Instant::now();
    loop {
        if cancel.load(Ordering::Relaxed) {
            return;
        }

        let progress = if duration.is_zero() {
            1.0
        } else {
            (started.elapsed().as_secs_f64() / duration.as_secs_f64()).min(1.0)
        };

        let frame = reveal_prefix(&geometry, progress);
        if !store.commit_frame(token, frame.clone()) {
            // Endpoints changed under us; this animation is stale.
            return;
        }
        if let Some(tx) = &frames {
            let _ = tx.send(frame);
        }

        if progress >= 1.0 {
            return;
        }
        thread::sleep(frame_interval);
    }
}
