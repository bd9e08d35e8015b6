//! Frame-by-frame animation over a rolling window of control points.
//!
//! The host calls [`AnimationController::tick`] (or `render`) once every
//! `interpolation_timestep_ms`. Each call runs to completion; all mutable
//! state lives in the controller, so no locking is involved.

use crate::config::CurveConfig;
use crate::curve::{evaluate_curve, CurveDescriptor};
use crate::error::Result;
use crate::interpolate::{blend, ControlWindow};
use crate::random::RandomSource;
use crate::render::{draw_closed_curve, fit_to_viewport, CurveSurface, StrokeStyle};
use glam::DVec2;

/// Output of one tick, before scaling.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Blend parameter in `[0, 1]`.
    pub t: f64,
    pub frame_index: u32,
    pub points: Vec<DVec2>,
}

pub struct AnimationController<R: RandomSource> {
    config: CurveConfig,
    window: ControlWindow,
    frame_index: u32,
    segments_completed: u64,
    rng: R,
}

impl<R: RandomSource> AnimationController<R> {
    /// Fill the window and arm an immediate rollover for the first tick.
    pub fn new(config: CurveConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let window =
            ControlWindow::new((0..config.mode.window_len()).map(|_| config.generate(&mut rng)));
        log::info!(
            "[curve] dimensions={} steps={} decay={} mode={} window={}",
            config.dimensions,
            config.steps,
            config.decay,
            config.mode.name(),
            window.len()
        );
        Ok(Self {
            frame_index: config.interpolation_resolution,
            config,
            window,
            segments_completed: 0,
            rng,
        })
    }

    #[inline]
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    #[inline]
    pub fn window(&self) -> &ControlWindow {
        &self.window
    }

    #[inline]
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Rollovers performed so far, including the one on the first tick.
    #[inline]
    pub fn segments_completed(&self) -> u64 {
        self.segments_completed
    }

    /// Move to the next frame, rolling the window over when a segment ends.
    ///
    /// Frames run `0..=interpolation_resolution`, so `t` reaches exactly 1.0
    /// on the last frame of a segment before the next rollover.
    pub fn advance(&mut self) -> f64 {
        if self.frame_index >= self.config.interpolation_resolution {
            let next = self.config.generate(&mut self.rng);
            self.window.push_evict(next);
            self.segments_completed += 1;
            self.frame_index = 0;
            log::debug!("[curve] segment {} started", self.segments_completed);
        } else {
            self.frame_index += 1;
        }
        self.t()
    }

    #[inline]
    pub fn t(&self) -> f64 {
        self.frame_index as f64 / self.config.interpolation_resolution as f64
    }

    /// Coefficients for the current window at `t`.
    pub fn blended(&self, t: f64) -> CurveDescriptor {
        // The window always holds mode.window_len() points.
        blend(self.config.mode, &self.window, t)
            .unwrap_or_else(|| self.window.points()[self.window.len() - 1].clone())
    }

    pub fn tick(&mut self) -> Frame {
        let t = self.advance();
        let curve = self.blended(t);
        Frame {
            t,
            frame_index: self.frame_index,
            points: evaluate_curve(&curve, self.config.theta_resolution),
        }
    }

    /// Tick, fit the curve to `surface` and draw it.
    pub fn render<S: CurveSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        style: &StrokeStyle,
    ) -> Result<Frame> {
        let viewport = surface.viewport()?;
        let mut frame = self.tick();
        frame.points = fit_to_viewport(&frame.points, viewport, self.config.padding);
        draw_closed_curve(surface, &frame.points, style);
        Ok(frame)
    }
}
