//! Nelder-Mead simplex minimisation
//!
//! Derivative-free and deterministic: the same objective and starting
//! point always walk the same simplex path. Non-finite objective values are
//! treated as `+inf`, so the search backs away from regions where the
//! objective blows up.
//!
//! The search stops when the objective values across the simplex agree
//! within `tolerance` and every vertex lies within `x_tolerance` of the best
//! one. A converged search is restarted from its best point with a fresh
//! simplex, since a collapsed simplex can stall short of the minimum.

use serde::{Deserialize, Serialize};

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Result of a minimisation
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum {
    /// Best point found
    pub point: Vec<f64>,
    /// Objective value at `point`
    pub value: f64,
    /// Iterations performed
    pub iterations: usize,
    /// Whether the simplex met the tolerance before the budget ran out
    pub converged: bool,
}

/// Nelder-Mead minimiser settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NelderMead {
    /// Iteration budget
    pub max_iterations: usize,
    /// Relative spread of objective values across the simplex at convergence
    pub tolerance: f64,
    /// Largest coordinate distance from the best vertex at convergence
    pub x_tolerance: f64,
    /// Edge length of the initial simplex along each axis
    pub initial_step: f64,
    /// Fresh simplices started from a converged point
    pub restarts: usize,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            max_iterations: 5_000,
            tolerance: 1e-10,
            x_tolerance: 1e-6,
            initial_step: 0.1,
            restarts: 1,
        }
    }
}

impl NelderMead {
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
            ..Self::default()
        }
    }

    /// Minimise `objective` starting from `start`
    ///
    /// `iterations` counts every simplex step, restarts included.
    pub fn minimize<F>(&self, objective: F, start: &[f64]) -> Minimum
    where
        F: Fn(&[f64]) -> f64,
    {
        let mut best = self.search(&objective, start, self.max_iterations);
        for _ in 0..self.restarts {
            if !best.converged || best.iterations >= self.max_iterations {
                break;
            }
            let next = self.search(&objective, &best.point, self.max_iterations - best.iterations);
            let iterations = best.iterations + next.iterations;
            let improved = next.value < best.value;
            best = if improved {
                Minimum { iterations, ..next }
            } else {
                Minimum {
                    iterations,
                    converged: next.converged,
                    ..best
                }
            };
            if !improved {
                break;
            }
        }
        best
    }

    fn search<F>(&self, objective: &F, start: &[f64], budget: usize) -> Minimum
    where
        F: Fn(&[f64]) -> f64,
    {
        let eval = |x: &[f64]| {
            let v = objective(x);
            if v.is_finite() {
                v
            } else {
                f64::INFINITY
            }
        };

        let dim = start.len();
        if dim == 0 {
            return Minimum {
                point: Vec::new(),
                value: eval(start),
                iterations: 0,
                converged: true,
            };
        }

        let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
        simplex.push(start.to_vec());
        for axis in 0..dim {
            let mut vertex = start.to_vec();
            vertex[axis] += if start[axis].abs() > 1.0 {
                self.initial_step * start[axis].abs()
            } else {
                self.initial_step
            };
            simplex.push(vertex);
        }
        let mut values: Vec<f64> = simplex.iter().map(|v| eval(v)).collect();

        let mut iterations = 0;
        let mut converged = false;

        while iterations < budget {
            // Order vertices best to worst
            let mut order: Vec<usize> = (0..=dim).collect();
            order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
            simplex = order.iter().map(|&i| simplex[i].clone()).collect();
            values = order.iter().map(|&i| values[i]).collect();

            let best = values[0];
            let worst = values[dim];
            let width = simplex[1..]
                .iter()
                .flat_map(|v| v.iter().zip(simplex[0].iter()).map(|(x, b)| (x - b).abs()))
                .fold(0.0, f64::max);
            if best.is_finite()
                && worst.is_finite()
                && (worst - best).abs() <= self.tolerance * (1.0 + best.abs())
                && width <= self.x_tolerance
            {
                converged = true;
                break;
            }

            iterations += 1;

            let centroid: Vec<f64> = (0..dim)
                .map(|j| simplex[..dim].iter().map(|v| v[j]).sum::<f64>() / dim as f64)
                .collect();
            let towards = |coef: f64| -> Vec<f64> {
                centroid
                    .iter()
                    .zip(simplex[dim].iter())
                    .map(|(c, w)| c + coef * (c - w))
                    .collect()
            };

            let reflected = towards(REFLECTION);
            let f_reflected = eval(&reflected);

            if f_reflected < values[0] {
                let expanded = towards(REFLECTION * EXPANSION);
                let f_expanded = eval(&expanded);
                if f_expanded < f_reflected {
                    simplex[dim] = expanded;
                    values[dim] = f_expanded;
                } else {
                    simplex[dim] = reflected;
                    values[dim] = f_reflected;
                }
                continue;
            }

            if f_reflected < values[dim - 1] {
                simplex[dim] = reflected;
                values[dim] = f_reflected;
                continue;
            }

            // Outside contraction when the reflection beat the worst vertex,
            // inside contraction otherwise
            let (contracted, f_contracted) = if f_reflected < values[dim] {
                let point = towards(REFLECTION * CONTRACTION);
                let value = eval(&point);
                (point, value)
            } else {
                let point = towards(-CONTRACTION);
                let value = eval(&point);
                (point, value)
            };

            if f_contracted < values[dim].min(f_reflected) {
                simplex[dim] = contracted;
                values[dim] = f_contracted;
                continue;
            }

            let anchor = simplex[0].clone();
            for i in 1..=dim {
                for (x, a) in simplex[i].iter_mut().zip(anchor.iter()) {
                    *x = a + SHRINK * (*x - a);
                }
                values[i] = eval(&simplex[i]);
            }
        }

        let best_index = (0..=dim)
            .min_by(|&a, &b| values[a].total_cmp(&values[b]))
            .unwrap_or(0);

        Minimum {
            point: simplex[best_index].clone(),
            value: values[best_index],
            iterations,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_bowl() {
        let optimizer = NelderMead::default();
        let result = optimizer.minimize(
            |x| (x[0] - 3.0).powi(2) + 2.0 * (x[1] + 1.0).powi(2),
            &[0.0, 0.0],
        );

        assert!(result.converged);
        assert!((result.point[0] - 3.0).abs() < 1e-3);
        assert!((result.point[1] + 1.0).abs() < 1e-3);
        assert!(result.value < 1e-6);
    }

    #[test]
    fn test_rosenbrock() {
        let optimizer = NelderMead::new(20_000, 1e-14);
        let result = optimizer.minimize(
            |x| (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2),
            &[-1.2, 1.0],
        );

        assert!((result.point[0] - 1.0).abs() < 1e-2);
        assert!((result.point[1] - 1.0).abs() < 1e-2);
    }

    #[test]
    fn test_non_finite_region_is_avoided() {
        let optimizer = NelderMead::default();
        let result = optimizer.minimize(
            |x| {
                if x[0] < 0.0 {
                    f64::NAN
                } else {
                    (x[0] - 0.5).powi(2)
                }
            },
            &[0.05],
        );

        assert!(result.value.is_finite());
        assert!((result.point[0] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_symmetric_simplex_does_not_stop_early() {
        // The first simplex straddles the minimum with equal values at both vertices
        let optimizer = NelderMead {
            initial_step: 1.0,
            ..NelderMead::default()
        };
        let result = optimizer.minimize(|x| (x[0] - 0.5).powi(2), &[0.0]);

        assert!(result.converged);
        assert!((result.point[0] - 0.5).abs() < 1e-5, "x = {}", result.point[0]);
        assert!(result.value < 1e-10);
    }

    #[test]
    fn test_plateau_converges() {
        let optimizer = NelderMead::default();
        let result = optimizer.minimize(|x| (3.0 - x[0]).max(0.0), &[0.0]);

        assert!(result.converged);
        assert_eq!(result.value, 0.0);
        assert!(result.point[0] >= 3.0);
    }

    #[test]
    fn test_zero_dimensional_problem() {
        let result = NelderMead::default().minimize(|_| 7.0, &[]);
        assert_eq!(result.value, 7.0);
        assert_eq!(result.iterations, 0);
        assert!(result.converged);
    }

    #[test]
    fn test_budget_exhaustion_reports_not_converged() {
        let optimizer = NelderMead::new(3, 1e-16);
        let result = optimizer.minimize(|x| x[0] * x[0] + x[1] * x[1], &[5.0, 5.0]);
        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_deterministic() {
        let optimizer = NelderMead::default();
        let f = |x: &[f64]| (x[0] - 1.0).powi(2) + (x[0] * x[1] - 2.0).powi(2);
        assert_eq!(optimizer.minimize(f, &[0.1, 0.1]), optimizer.minimize(f, &[0.1, 0.1]));
    }
}
