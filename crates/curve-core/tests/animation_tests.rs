// Host-side integration tests for curve generation and the animation loop.

use curve_core::*;
use glam::DVec2;
use std::f64::consts::{SQRT_2, TAU};

/// Random source whose normal draws are always the same value.
struct ConstantGaussian(f64);

impl RandomSource for ConstantGaussian {
    fn uniform(&mut self) -> f64 {
        0.5
    }

    fn gaussian(&mut self, mean: f64, stdev: f64) -> f64 {
        self.0 * stdev + mean
    }
}

fn fixture_config(mode: InterpolationMode) -> CurveConfig {
    CurveConfig {
        dimensions: 5,
        steps: 2,
        decay: 1.5,
        theta_resolution: 2000,
        interpolation_resolution: 100,
        interpolation_timestep_ms: 100,
        mode,
        padding: 20.0,
    }
}

fn assert_point(actual: DVec2, expected: DVec2) {
    assert!(
        (actual - expected).length() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn constant_fixture_matches_reference_points() {
    let config = fixture_config(InterpolationMode::Cubic);
    let curve = config.generate(&mut ConstantGaussian(1.0));
    assert_eq!(curve.angles(), &[-9.0, -4.0, 1.0, 6.0]);

    // 1 / (|2·5 + 1| + 0.5)^1.5
    let m = 1.0 / 11.5_f64.powf(1.5);
    for magnitude in curve.magnitudes() {
        assert!((magnitude - m).abs() < 1e-15);
    }

    let points = evaluate_curve(&curve, config.theta_resolution);
    assert_eq!(points.len(), 2000);
    assert_point(points[0], DVec2::new(4.0 * m, 0.0));
    assert_point(points[250], DVec2::new((SQRT_2 - 1.0) * m, -m));
    assert_point(points[500], DVec2::ZERO);
    assert_point(points[1000], DVec2::ZERO);
    assert_point(points[1500], DVec2::ZERO);
}

#[test]
fn controller_reproduces_fixture_in_both_modes() {
    for mode in [InterpolationMode::Linear, InterpolationMode::Cubic] {
        let config = fixture_config(mode);
        let reference = evaluate_curve(
            &config.generate(&mut ConstantGaussian(1.0)),
            config.theta_resolution,
        );
        let mut anim = AnimationController::new(config, ConstantGaussian(1.0)).unwrap();
        for _ in 0..3 {
            let frame = anim.tick();
            for i in [0, 250, 500, 1000, 1500] {
                assert_point(frame.points[i], reference[i]);
            }
        }
    }
}

#[test]
fn generated_curves_close_on_themselves() {
    let mut rng = RngSource::seeded(2024);
    let curve = generate(2, 5, 1.5, &mut rng);
    assert_point(evaluate_point(&curve, 0.0), evaluate_point(&curve, TAU));
}

#[test]
fn rollover_shifts_window_and_appends_next_curve() {
    for mode in [InterpolationMode::Linear, InterpolationMode::Cubic] {
        let config = CurveConfig {
            theta_resolution: 32,
            interpolation_resolution: 7,
            ..fixture_config(mode)
        };
        let n = mode.window_len();

        // Same seed, drawn in the order the controller draws.
        let mut shadow = RngSource::seeded(99);
        let expected: Vec<CurveDescriptor> =
            (0..n + 2).map(|_| config.generate(&mut shadow)).collect();

        let mut anim = AnimationController::new(config.clone(), RngSource::seeded(99)).unwrap();
        assert_eq!(anim.window().points(), &expected[..n]);

        anim.tick();
        let old = anim.window().clone();
        assert_eq!(old.points(), &expected[1..n + 1]);

        for _ in 0..config.interpolation_resolution {
            anim.tick();
            assert_eq!(anim.window(), &old);
        }
        anim.tick();
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(&anim.window().points()[..n - 1], &old.points()[1..]);
        assert_eq!(anim.window().points()[n - 1], expected[n + 1]);
    }
}

#[test]
fn linear_mode_passes_through_control_points() {
    let config = CurveConfig {
        theta_resolution: 16,
        interpolation_resolution: 4,
        ..fixture_config(InterpolationMode::Linear)
    };
    let mut anim = AnimationController::new(config, RngSource::seeded(5)).unwrap();

    let first = anim.tick();
    let window = anim.window().clone();
    assert_eq!(first.points, evaluate_curve(&window.points()[0], 16));

    let last = (0..4).map(|_| anim.tick()).last().unwrap();
    assert_eq!(last.t, 1.0);
    assert_eq!(last.points, evaluate_curve(&window.points()[1], 16));
}

#[test]
fn cubic_segments_join_continuously() {
    let config = CurveConfig {
        theta_resolution: 16,
        interpolation_resolution: 10,
        ..fixture_config(InterpolationMode::Cubic)
    };
    let mut anim = AnimationController::new(config, RngSource::seeded(8)).unwrap();
    let frames: Vec<Frame> = (0..12).map(|_| anim.tick()).collect();
    // frame 10 is t = 1.0 of the first segment, frame 11 is t = 0.0 of the next
    assert_eq!(frames[10].t, 1.0);
    assert_eq!(frames[11].t, 0.0);
    for (a, b) in frames[10].points.iter().zip(&frames[11].points) {
        assert!((*a - *b).length() < 1e-12);
    }
}

struct NullSurface {
    viewport: Viewport,
    strokes: usize,
    max_abs: f64,
}

impl CurveSurface for NullSurface {
    fn viewport(&self) -> curve_core::Result<Viewport> {
        Ok(self.viewport)
    }
    fn clear(&mut self, _color: Rgb) {}
    fn set_stroke(&mut self, _style: &StrokeStyle) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, p: DVec2) {
        self.max_abs = self.max_abs.max(p.x.abs()).max(p.y.abs());
    }
    fn line_to(&mut self, p: DVec2) {
        self.max_abs = self.max_abs.max(p.x.abs()).max(p.y.abs());
    }
    fn stroke(&mut self) {
        self.strokes += 1;
    }
}

#[test]
fn rendered_frames_fit_viewport() {
    let config = CurveConfig {
        theta_resolution: 400,
        interpolation_resolution: 5,
        ..fixture_config(InterpolationMode::Cubic)
    };
    let padding = config.padding;
    let mut anim = AnimationController::new(config, RngSource::seeded(77)).unwrap();
    let mut surface = NullSurface {
        viewport: Viewport::new(640, 480).unwrap(),
        strokes: 0,
        max_abs: 0.0,
    };
    for _ in 0..12 {
        let frame = anim.render(&mut surface, &StrokeStyle::default()).unwrap();
        let (lo, hi) = frame
            .points
            .iter()
            .flat_map(|p| [p.x, p.y])
            .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        assert!(hi - lo <= 480.0 - padding + 1e-9);
        assert!(frame.points.iter().all(|p| p.is_finite()));
    }
    assert_eq!(surface.strokes, 12);
    assert!(surface.max_abs <= 480.0 - padding + 1e-9);
}

#[test]
fn centred_curve_stays_inside_half_viewport() {
    let circle = CurveDescriptor::from_terms([(1.0, 1.0)]);
    let viewport = Viewport::new(300, 200).unwrap();
    let scaled = fit_to_viewport(&evaluate_curve(&circle, 360), viewport, 20.0);
    for p in scaled {
        assert!(p.x.abs() <= 100.0 && p.y.abs() <= 100.0);
    }
}

#[test]
fn all_zero_coefficients_render_finite_points() {
    let mut anim = AnimationController::new(
        fixture_config(InterpolationMode::Linear),
        ConstantGaussian(0.0),
    )
    .unwrap();
    let mut surface = NullSurface {
        viewport: Viewport::new(100, 100).unwrap(),
        strokes: 0,
        max_abs: 0.0,
    };
    let frame = anim.render(&mut surface, &StrokeStyle::default()).unwrap();
    assert!(frame.points.iter().all(|p| *p == DVec2::ZERO));
}
