//! Easing curves.
//!
//! Every curve maps a normalized time `t` in [0,1] to an eased fraction.
//! `BackOut` may overshoot above 1.0 on purpose; all other curves stay in
//! [0,1]. `Bezier` follows the CSS `cubic-bezier(x1, y1, x2, y2)` timing
//! convention: the x curve is inverted by binary search, then y is sampled.

/// An easing curve selection. `Copy` so steps can embed it freely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicOut,
    SineInOut,
    /// Overshooting ease-out; the parameter is the overshoot amount
    /// (1.7 gives the familiar springy settle).
    BackOut(f32),
    /// CSS-style cubic bezier timing, control points (x1, y1, x2, y2).
    Bezier(f32, f32, f32, f32),
}

impl Ease {
    /// Evaluate the curve at `t`, clamping the input to [0,1].
    pub fn eval(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::SineInOut => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + overshoot * (t - 1.0).powi(2)
            }
            Ease::Bezier(x1, y1, x2, y2) => bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic Bezier basis function.
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1], compute
/// the eased y by inverting the x bezier via binary search.
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Fast path: Bezier(0,0,1,1) is exactly linear.
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic x in [0,1] assumed for x1/x2 in [0,1].
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
