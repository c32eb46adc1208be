//! Shared-element layout transitions
//!
//! A FLIP (first, last, invert, play) helper that makes one element appear
//! to morph out of another across a state change. The caller measures both
//! bounding boxes, applies the inverse [`Transform`] to the element that was
//! just laid out, then animates it back to identity with a spring easing.
//! Nothing here knows about cards or modals.

use std::fmt::Write as _;
use std::time::Duration;

const EPSILON: f64 = 1e-6;

/// An axis-aligned box in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// True when the box has no area to scale against.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > EPSILON && self.height > EPSILON)
    }
}

/// Translate-then-scale transform with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// The transform that draws an element laid out at `to` over `from`.
    ///
    /// Degenerate boxes on either side produce the identity, which turns the
    /// transition into a hard cut.
    pub fn between(from: Rect, to: Rect) -> Self {
        if from.is_degenerate() || to.is_degenerate() {
            return Self::IDENTITY;
        }
        Self {
            translate_x: from.x - to.x,
            translate_y: from.y - to.y,
            scale_x: from.width / to.width,
            scale_y: from.height / to.height,
        }
    }

    /// Where an element laid out at `rect` is drawn under this transform.
    pub fn apply(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x + self.translate_x,
            y: rect.y + self.translate_y,
            width: rect.width * self.scale_x,
            height: rect.height * self.scale_y,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.translate_x.abs() < EPSILON
            && self.translate_y.abs() < EPSILON
            && (self.scale_x - 1.0).abs() < EPSILON
            && (self.scale_y - 1.0).abs() < EPSILON
    }

    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        if self.is_identity() {
            return "none".to_string();
        }
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4}, {:.4})",
            self.translate_x, self.translate_y, self.scale_x, self.scale_y
        )
    }
}

/// Damped harmonic oscillator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target below which the spring counts as settled
    pub rest_delta: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 20.0,
            mass: 1.0,
            rest_delta: 0.001,
        }
    }
}

impl SpringConfig {
    /// Upper bound on any transition.
    pub const MAX_DURATION: Duration = Duration::from_secs(2);

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalized position at `t` seconds, moving from 0 at rest to 1.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-4 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time after which the response stays within `rest_delta` of 1.
    pub fn settle_duration(&self) -> Duration {
        let max_ms = Self::MAX_DURATION.as_millis() as u64;
        let mut last_unsettled = 0;
        for ms in 0..=max_ms {
            let x = self.position(ms as f64 / 1000.0);
            if (1.0 - x).abs() > self.rest_delta {
                last_unsettled = ms;
            }
        }
        Duration::from_millis((last_unsettled + 1).min(max_ms))
    }

    /// The response curve as a CSS `linear()` easing with `samples` stops.
    pub fn css_easing(&self, samples: usize) -> String {
        self.easing_over(self.settle_duration(), samples)
    }

    fn easing_over(&self, duration: Duration, samples: usize) -> String {
        let samples = samples.max(2);
        let total = duration.as_secs_f64();
        let mut out = String::from("linear(");
        for i in 0..samples {
            let value = if i + 1 == samples {
                1.0
            } else {
                self.position(total * i as f64 / (samples - 1) as f64)
            };
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{:.3}", value);
        }
        out.push(')');
        out
    }

    /// CSS `transition` value animating `transform` along this spring.
    ///
    /// Samples the whole curve; callers rendering every frame should keep
    /// the result.
    pub fn css_transition(&self) -> String {
        let duration = self.settle_duration();
        format!(
            "transform {}ms {}",
            duration.as_millis(),
            self.easing_over(duration, EASING_SAMPLES)
        )
    }
}

const EASING_SAMPLES: usize = 40;

/// Ticket identifying one transition intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionTicket(u64);

impl std::fmt::Display for TransitionTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Hands out tickets; only the newest is current.
///
/// Deferred work (delayed cleanup, second-frame style flips) checks its
/// ticket before acting so that a newer intent wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionGate {
    latest: u64,
}

impl TransitionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> TransitionTicket {
        self.latest += 1;
        TransitionTicket(self.latest)
    }

    pub fn is_current(&self, ticket: TransitionTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Where a shared-layout element is in its enter/exit cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutPhase {
    /// Mounted but not yet measured
    Measuring,
    /// Drawn over the source box, no transition yet
    Inverted(Transform),
    /// Animating to its own layout box
    Playing,
    /// Animating back to the source box; no longer interactive
    Leaving(Transform),
}

impl LayoutPhase {
    /// Inline style for the element in this phase, given the spring's
    /// [`SpringConfig::css_transition`] value.
    pub fn style(&self, transition: &str) -> String {
        match self {
            LayoutPhase::Measuring => "visibility: hidden;".to_string(),
            LayoutPhase::Inverted(t) => format!(
                "transform-origin: 0 0; transform: {}; transition: none;",
                t.to_css()
            ),
            LayoutPhase::Playing => format!(
                "transform-origin: 0 0; transform: none; transition: {};",
                transition
            ),
            LayoutPhase::Leaving(t) => format!(
                "transform-origin: 0 0; transform: {}; transition: {}; pointer-events: none;",
                t.to_css(),
                transition
            ),
        }
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self, LayoutPhase::Leaving(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_between_same_rect_is_identity() {
        let r = Rect::new(10.0, 20.0, 300.0, 200.0);
        let t = Transform::between(r, r);
        assert!(t.is_identity());
        assert_eq!(t.to_css(), "none");
    }

    #[test]
    fn test_transform_between_maps_target_onto_source() {
        let card = Rect::new(40.0, 100.0, 320.0, 300.0);
        let modal = Rect::new(200.0, 50.0, 640.0, 600.0);
        let t = Transform::between(card, modal);
        assert_eq!(t.translate_x, -160.0);
        assert_eq!(t.translate_y, 50.0);
        assert_eq!(t.scale_x, 0.5);
        assert_eq!(t.scale_y, 0.5);

        // Top-left origin: the modal's corner lands on the card's corner and
        // its size shrinks to the card's size.
        assert_eq!(modal.x + t.translate_x, card.x);
        assert_eq!(modal.width * t.scale_x, card.width);
        assert_eq!(
            t.to_css(),
            "translate(-160.00px, 50.00px) scale(0.5000, 0.5000)"
        );
    }

    #[test]
    fn test_degenerate_rects_yield_identity() {
        let card = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(Transform::between(card, Rect::default()).is_identity());
        assert!(Transform::between(Rect::new(5.0, 5.0, 0.0, 10.0), card).is_identity());
    }

    #[test]
    fn test_spring_starts_at_zero_and_settles_at_one() {
        let spring = SpringConfig::default();
        assert_eq!(spring.position(0.0), 0.0);
        assert!((spring.position(2.0) - 1.0).abs() < spring.rest_delta);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let spring = SpringConfig::default();
        let peak = (0..1000)
            .map(|ms| spring.position(ms as f64 / 1000.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_critical_and_overdamped_never_overshoot() {
        for damping in [2.0 * 300.0_f64.sqrt(), 80.0] {
            let spring = SpringConfig {
                damping,
                ..SpringConfig::default()
            };
            for ms in 0..2000 {
                let x = spring.position(ms as f64 / 1000.0);
                assert!(x <= 1.0 + 1e-9, "damping {damping} overshot at {ms}ms: {x}");
            }
        }
    }

    #[test]
    fn test_reference_spring_settle_duration() {
        let settle = SpringConfig::default().settle_duration();
        assert!(settle > Duration::from_millis(300), "{settle:?}");
        assert!(settle < Duration::from_millis(1200), "{settle:?}");
    }

    #[test]
    fn test_css_easing_endpoints() {
        let easing = SpringConfig::default().css_easing(10);
        assert!(easing.starts_with("linear(0.000, "));
        assert!(easing.ends_with(", 1.000)"));
        assert_eq!(easing.matches(", ").count(), 9);
    }

    #[test]
    fn test_gate_only_latest_is_current() {
        let mut gate = TransitionGate::new();
        let first = gate.begin();
        assert!(gate.is_current(first));
        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
        assert_eq!(second.to_string(), "t2");
    }

    #[test]
    fn test_phase_styles() {
        let transition = SpringConfig::default().css_transition();
        assert_eq!(LayoutPhase::Measuring.style(&transition), "visibility: hidden;");

        let inverted = LayoutPhase::Inverted(Transform::IDENTITY).style(&transition);
        assert!(inverted.contains("transition: none"));

        let playing = LayoutPhase::Playing.style(&transition);
        assert!(playing.contains("transform: none"));
        assert!(playing.contains("linear("));

        let leaving = LayoutPhase::Leaving(Transform::IDENTITY);
        assert!(leaving.is_leaving());
        assert!(leaving.style(&transition).contains("pointer-events: none"));
    }

    #[test]
    fn test_css_transition_matches_settle_and_easing() {
        let spring = SpringConfig::default();
        let expected = format!(
            "transform {}ms {}",
            spring.settle_duration().as_millis(),
            spring.css_easing(EASING_SAMPLES)
        );
        assert_eq!(spring.css_transition(), expected);
    }

    #[test]
    fn test_exit_from_layout_box_lands_on_source_mid_enter() {
        let card = Rect::new(40.0, 100.0, 320.0, 300.0);
        let modal = Rect::new(200.0, 50.0, 640.0, 600.0);
        let enter = Transform::between(card, modal);
        assert_eq!(enter.apply(modal), card);

        // Halfway through the enter spring, the box the target reports.
        let half = Transform {
            translate_x: enter.translate_x * 0.5,
            translate_y: enter.translate_y * 0.5,
            scale_x: 1.0 + (enter.scale_x - 1.0) * 0.5,
            scale_y: 1.0 + (enter.scale_y - 1.0) * 0.5,
        };
        let visual = half.apply(modal);
        assert_eq!(visual, Rect::new(120.0, 75.0, 480.0, 450.0));

        // The exit transform is applied to the untransformed layout box, so it
        // must be computed from that box and not from the visual one.
        let wrong = Transform::between(card, visual).apply(modal);
        assert_ne!(wrong, card);
        let exit = Transform::between(card, modal);
        assert_eq!(exit.apply(modal), card);
    }
}
