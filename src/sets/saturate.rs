/*
    Least fixpoint driver shared by the FIRST and FOLLOW computations
*/

use log::{debug, trace};

// Yields the initial state and every state `step` produces from it, ending
// with the first state that `step` maps to an equal one.
pub struct Saturation<S, F> {
    step: F,
    previous: Option<S>,
    pending: Option<S>,
    iterations: usize,
}

impl<S, F> Saturation<S, F>
where
    S: PartialEq + Clone,
    F: FnMut(&S) -> S,
{
    pub fn new(step: F, initial: S) -> Self {
        Saturation {
            step,
            previous: None,
            pending: Some(initial),
            iterations: 0,
        }
    }
}

impl<S, F> Iterator for Saturation<S, F>
where
    S: PartialEq + Clone,
    F: FnMut(&S) -> S,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        let state = self.pending.take()?;

        if self.previous.as_ref() == Some(&state) {
            debug!("saturated after {} iterations", self.iterations);
            return None;
        }

        self.pending = Some((self.step)(&state));
        self.iterations += 1;
        trace!("iteration {} computed", self.iterations);

        self.previous = Some(state.clone());
        Some(state)
    }
}

// Applies `step` until two consecutive states are equal and returns that state.
// `step` has to be monotonic and bounded for this to terminate.
pub fn saturate<S, F>(step: F, initial: S) -> S
where
    S: PartialEq + Clone,
    F: FnMut(&S) -> S,
{
    let seed = initial.clone();
    Saturation::new(step, initial).fold(seed, |_, state| state)
}
