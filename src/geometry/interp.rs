use crate::foundation::core::Point;

/// Evaluate the single Bezier curve whose control polygon is `control` at `samples`
/// evenly spaced parameters in `[0, 1]`.
///
/// The curve has degree `control.len() - 1`; de Casteljau's scheme keeps high degrees stable.
pub fn bezier_samples(control: &[Point], samples: usize) -> Vec<Point> {
    match control {
        [] => Vec::new(),
        [p] => vec![*p; samples],
        _ => {
            let mut scratch = Vec::with_capacity(control.len());
            (0..samples)
                .map(|i| {
                    let t = if samples > 1 {
                        i as f64 / (samples - 1) as f64
                    } else {
                        0.0
                    };
                    de_casteljau(control, t, &mut scratch)
                })
                .collect()
        }
    }
}

fn de_casteljau(control: &[Point], t: f64, scratch: &mut Vec<Point>) -> Point {
    scratch.clear();
    scratch.extend_from_slice(control);
    let mut n = scratch.len();
    while n > 1 {
        for i in 0..n - 1 {
            scratch[i] = scratch[i].lerp(scratch[i + 1], t);
        }
        n -= 1;
    }
    scratch[0]
}

/// Natural cubic spline `y(x)` through knots with strictly ascending `x`.
#[derive(Clone, Debug)]
pub struct NaturalSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative at each knot; zero at both ends.
    m: Vec<f64>,
}

impl NaturalSpline {
    /// Fit through `knots`. Knots whose `x` does not exceed the previous kept knot are
    /// dropped. Returns `None` when no knot survives.
    pub fn fit(knots: &[Point]) -> Option<Self> {
        let mut xs = Vec::with_capacity(knots.len());
        let mut ys = Vec::with_capacity(knots.len());
        for k in knots {
            if xs.last().is_none_or(|last| k.x > *last) {
                xs.push(k.x);
                ys.push(k.y);
            }
        }
        if xs.is_empty() {
            return None;
        }

        let n = xs.len();
        let mut m = vec![0.0; n];
        if n > 2 {
            // Tridiagonal system for interior second derivatives (Thomas algorithm).
            let h = xs.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
            let mut c_prime = vec![0.0; n];
            let mut d_prime = vec![0.0; n];
            for i in 1..n - 1 {
                let a = h[i - 1];
                let b = 2.0 * (h[i - 1] + h[i]);
                let c = h[i];
                let d = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
                let denom = b - a * c_prime[i - 1];
                c_prime[i] = c / denom;
                d_prime[i] = (d - a * d_prime[i - 1]) / denom;
            }
            for i in (1..n - 1).rev() {
                m[i] = d_prime[i] - c_prime[i] * m[i + 1];
            }
        }

        Some(Self { xs, ys, m })
    }

    /// Knot range `(min_x, max_x)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluate at `x`; outside the knot range the end segments are extended.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if n == 1 {
            return self.ys[0];
        }
        let seg = match self.xs.partition_point(|k| *k <= x) {
            0 => 0,
            i if i >= n => n - 2,
            i => i - 1,
        };
        let (x0, x1) = (self.xs[seg], self.xs[seg + 1]);
        let (y0, y1) = (self.ys[seg], self.ys[seg + 1]);
        let (m0, m1) = (self.m[seg], self.m[seg + 1]);
        let h = x1 - x0;
        let a = (x1 - x) / h;
        let b = (x - x0) / h;
        a * y0 + b * y1 + ((a * a * a - a) * m0 + (b * b * b - b) * m1) * h * h / 6.0
    }

    /// Evaluate at `samples` evenly spaced `x` over the knot range.
    pub fn samples(&self, samples: usize) -> Vec<Point> {
        let (lo, hi) = self.domain();
        (0..samples)
            .map(|i| {
                let x = if samples > 1 {
                    lo + (hi - lo) * (i as f64 / (samples - 1) as f64)
                } else {
                    lo
                };
                Point::new(x, self.eval(x))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/interp.rs"]
mod tests;
