//! Fixed-rate frame loop driving the scene and the simulation.

use crate::draw::{Canvas, RenderError};
use crate::road::RoadStyle;
use crate::scene::{DrawContext, Scene};
use crate::sim::Simulation;
use anyhow::{Context, Result};
use log::{debug, info};
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Owns everything one frame needs and runs frames until told to stop.
pub struct App<C: Canvas> {
    scene: Scene,
    simulation: Simulation,
    style: RoadStyle,
    canvas: C,
    frame_time: Duration,
    should_quit: Arc<AtomicBool>,
}

impl<C: Canvas> App<C> {
    pub fn new(scene: Scene, simulation: Simulation, style: RoadStyle, canvas: C, fps: u32) -> Self {
        Self {
            scene,
            simulation,
            style,
            canvas,
            frame_time: Duration::from_secs(1) / fps.max(1),
            should_quit: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops the loop at the top of the next frame once set.
    pub fn quit_flag(&self) -> Arc<AtomicBool> {
        self.should_quit.clone()
    }

    /// Sets the quit flag on SIGINT and SIGTERM.
    pub fn install_signal_handlers(&self) -> Result<()> {
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, self.should_quit.clone())
                .context("Failed to register signal handler")?;
        }
        Ok(())
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Runs frames until the quit flag is set or `max_frames` have been drawn.
    ///
    /// Each frame draws the scene, then advances the simulation by one tick,
    /// then sleeps for whatever is left of the frame budget. Returns the
    /// number of frames drawn. A draw error stops the loop immediately.
    pub fn run(&mut self, max_frames: Option<u64>) -> Result<u64, RenderError> {
        let mut frames = 0;
        loop {
            // Acquire pairs with the Release store done by signal handlers.
            if self.should_quit.load(Ordering::Acquire) {
                info!("Quit requested - stopping after {} frames", frames);
                break;
            }
            if max_frames.is_some_and(|max| frames >= max) {
                break;
            }

            let started = Instant::now();
            self.render_frame()?;
            self.simulation.jump_to_next_tick();
            frames += 1;

            if max_frames.is_some_and(|max| frames >= max) {
                break;
            }
            match self.frame_time.checked_sub(started.elapsed()) {
                Some(rest) => thread::sleep(rest),
                None => debug!("Frame {} overran its budget", frames),
            }
        }
        Ok(frames)
    }

    fn render_frame(&mut self) -> Result<(), RenderError> {
        let mut ctx = DrawContext {
            canvas: &mut self.canvas,
            style: &self.style,
            road: self.simulation.road(),
            cars: self.simulation.cars(),
        };
        self.scene.draw(&mut ctx)
    }
}
