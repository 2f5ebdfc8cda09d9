//! Opt-in diagnostics for the oracle contract. The minimizer never calls these; they sample
//! random subsets and report the first counterexample found.

use log::{debug, warn};
use rand::Rng;
use crate::error::SfmResult;
use crate::oracle::{checked_evaluate, SetFunction};
use crate::set_ops::set_difference;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerifyConfig {
    pub samples: usize,     // number of random subsets (or subset pairs) to check
    pub tolerance: f64,     // allowed violation (absolute), 0 for exact comparisons
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig {
            samples: 1000,
            tolerance: 1e-9,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    /// f(A) != f(V \ A)
    Asymmetric {
        subset: Vec<usize>,
        value: f64,
        complement_value: f64,
    },
    /// f(A) + f(B) < f(A ∪ B) + f(A ∩ B)
    NotSubmodular {
        a: Vec<usize>,
        b: Vec<usize>,
        lhs: f64,
        rhs: f64,
    },
}

/// draws a uniformly random subset of 'ground' (every element with probability 1/2)
fn random_subset<R: Rng + ?Sized>(ground: &[usize], rng: &mut R) -> Vec<usize> {
    ground.iter().copied().filter(|_| rng.gen_bool(0.5)).collect()
}

/// compares f(A) with f(V \ A) for 'config.samples' random subsets A
pub fn check_symmetry<P, F, R>(ground: &[usize], f: &F, params: &P, config: &VerifyConfig,
                               rng: &mut R) -> SfmResult<Option<Violation>>
where
    P: ?Sized,
    F: SetFunction<P> + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..config.samples {
        let subset = random_subset(ground, rng);
        let complement = set_difference(ground, &subset);
        let value = checked_evaluate(f, &subset, ground, params)?;
        let complement_value = checked_evaluate(f, &complement, ground, params)?;
        if (value - complement_value).abs() > config.tolerance {
            warn!("oracle is not symmetric: f({subset:?}) = {value}, f({complement:?}) = {complement_value}");
            return Ok(Some(Violation::Asymmetric { subset, value, complement_value }));
        }
    }
    debug!("no symmetry violation in {} samples", config.samples);
    Ok(None)
}

/// checks f(A) + f(B) >= f(A ∪ B) + f(A ∩ B) for 'config.samples' random pairs (A, B)
pub fn check_submodularity<P, F, R>(ground: &[usize], f: &F, params: &P, config: &VerifyConfig,
                                    rng: &mut R) -> SfmResult<Option<Violation>>
where
    P: ?Sized,
    F: SetFunction<P> + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..config.samples {
        let a = random_subset(ground, rng);
        let b = random_subset(ground, rng);
        let a_only = set_difference(&a, &b);
        let intersection = set_difference(&a, &a_only);
        let mut union = a_only;
        union.extend_from_slice(&b);
        union.sort_unstable();

        let lhs = checked_evaluate(f, &a, ground, params)? + checked_evaluate(f, &b, ground, params)?;
        let rhs = checked_evaluate(f, &union, ground, params)?
            + checked_evaluate(f, &intersection, ground, params)?;
        if lhs + config.tolerance < rhs {
            warn!("oracle is not submodular: A = {a:?}, B = {b:?}, f(A) + f(B) = {lhs} < {rhs}");
            return Ok(Some(Violation::NotSubmodular { a, b, lhs, rhs }));
        }
    }
    debug!("no submodularity violation in {} samples", config.samples);
    Ok(None)
}
