use rand::seq::SliceRandom;
use rand::Rng;

use crate::entities::Freelancer;

/// Draws a uniform count in `[min, max]` and returns that many distinct
/// entries of `pool`, in shuffled order. Clamped to the pool size.
pub(crate) fn pick_applicants<'a, R: Rng>(
    pool: &'a [Freelancer],
    min: usize,
    max: usize,
    rng: &mut R,
) -> Vec<&'a Freelancer> {
    let count = rng.gen_range(min..=max).min(pool.len());

    let mut shuffled = pool.iter().collect::<Vec<_>>();
    shuffled.shuffle(rng);
    shuffled.truncate(count);

    shuffled
}
