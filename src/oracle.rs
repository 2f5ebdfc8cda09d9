use crate::error::OracleError;

/// set function oracle f(subset, V, params)
/// -> callers promise symmetry (f(A) = f(V \ A)) and submodularity
/// (f(A) + f(B) >= f(A ∪ B) + f(A ∩ B)); neither property is checked while minimizing
pub trait SetFunction<P: ?Sized = ()> {
    /// evaluates f on 'subset' (a materialized list of distinct elements of 'ground')
    fn evaluate(&self, subset: &[usize], ground: &[usize], params: &P) -> Result<f64, OracleError>;
}

impl<P: ?Sized, F> SetFunction<P> for F
where
    F: Fn(&[usize], &[usize], &P) -> f64,
{
    fn evaluate(&self, subset: &[usize], ground: &[usize], params: &P) -> Result<f64, OracleError> {
        Ok(self(subset, ground, params))
    }
}

/// evaluates 'f' and turns NaN/ infinite values into an error
pub(crate) fn checked_evaluate<P, F>(f: &F, subset: &[usize], ground: &[usize], params: &P) -> Result<f64, OracleError>
where
    P: ?Sized,
    F: SetFunction<P> + ?Sized,
{
    let value = f.evaluate(subset, ground, params)?;
    if !value.is_finite() {
        return Err(OracleError::NonFinite { subset: subset.to_vec(), value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    impl SetFunction for Unreachable {
        fn evaluate(&self, _: &[usize], _: &[usize], _: &()) -> Result<f64, OracleError> {
            Err(OracleError::Failed(String::from("service down")))
        }
    }

    #[test]
    fn closure_oracle_test() {
        let f = |s: &[usize], v: &[usize], scale: &f64| *scale * (s.len() * (v.len() - s.len())) as f64;
        assert_eq!(checked_evaluate(&f, &[0, 2], &[0, 1, 2, 3], &0.5), Ok(2.0));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let f = |s: &[usize], _: &[usize], _: &()| if s.len() > 1 { f64::NAN } else { 1.0 };
        assert_eq!(checked_evaluate(&f, &[1], &[0, 1], &()), Ok(1.0));
        match checked_evaluate(&f, &[0, 1], &[0, 1], &()) {
            Err(OracleError::NonFinite { subset, value }) => {
                assert_eq!(subset, vec![0, 1]);
                assert!(value.is_nan());
            },
            other => panic!("expected a non-finite error, got {other:?}"),
        }
        let g = |_: &[usize], _: &[usize], _: &()| f64::NEG_INFINITY;
        assert!(matches!(checked_evaluate(&g, &[0], &[0, 1], &()), Err(OracleError::NonFinite { .. })));
    }

    #[test]
    fn oracle_errors_pass_through() {
        assert_eq!(checked_evaluate(&Unreachable, &[0], &[0, 1], &()),
                   Err(OracleError::Failed(String::from("service down"))));
    }
}
