use rand::Rng;
use rand_distr::Geometric;

/// Iterates over the successes of independent Bernoulli trials `0..stop` with success
/// probability `p` in increasing order. Instead of drawing every trial, the gaps between
/// successes are drawn from a geometric distribution.
#[derive(Debug)]
pub struct GeometricJumper<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    /// `None` for `p = 1`, where every trial succeeds
    distr: Option<Geometric>,
    cur: u64,
    stop: u64,
}

impl<'a, R> GeometricJumper<'a, R>
where
    R: Rng,
{
    /// Creates a new jumper over `0..stop`.
    /// ** Panics if `p` is not within `[0, 1]` **
    pub fn new(rng: &'a mut R, prob: f64, stop: u64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "invalid probability {prob}");

        let (distr, stop) = if prob == 0.0 {
            (None, 0)
        } else if prob == 1.0 {
            (None, stop)
        } else {
            let distr = Geometric::new(prob).expect("probability was checked above");
            (Some(distr), stop)
        };

        Self {
            rng,
            distr,
            cur: 0,
            stop,
        }
    }
}

impl<'a, R> Iterator for GeometricJumper<'a, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur >= self.stop {
            return None;
        }

        let skip = match &self.distr {
            Some(distr) => self.rng.sample(distr),
            None => 0,
        };

        self.cur = self.cur.saturating_add(skip);
        if self.cur >= self.stop {
            self.cur = self.stop;
            return None;
        }

        self.cur += 1;
        Some(self.cur - 1)
    }
}
