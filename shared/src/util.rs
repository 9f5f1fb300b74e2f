/**
 * file: util.rs
 * desc: Misc. numeric helpers used when summarizing and scaling abundances.
 */
use num_traits::Float;

/**
 * sums
 */

/**
 * Total abundance mass of a set of abundance values.
 */
pub fn total<T>(vs: &[T]) -> T
where
    T: Float,
{
    vs.iter().fold(T::zero(), |ac: T, v| ac + *v)
}

/**
 * Take a fixed fraction of the total mass and truncate it toward zero. Negative or NaN
 * results clamp to zero.
 *
 * args
 *  vs:       abundance values
 *  fraction: fraction of the total to keep, e.g. 0.05
 *
 * returns
 *  the truncated fraction of the total
 */
pub fn truncated_fraction<T>(vs: &[T], fraction: f64) -> u64
where
    T: Float,
{
    let mass = total(vs).to_f64().unwrap_or(0.0) * fraction;

    if mass.is_nan() || mass <= 0.0 {
        return 0;
    }

    mass.trunc() as u64
}

/**
 * Scale an abundance to a number of reads, given the total number of reads to simulate and the
 * total abundance mass the abundance is relative to.
 *
 * args
 *  total_reads:     total number of reads across all genomes
 *  abundance:       abundance of a single genome
 *  total_abundance: sum of all genome abundances
 *
 * returns
 *  number of reads, rounded to the nearest integer
 */
pub fn scale_reads(total_reads: usize, abundance: f64, total_abundance: f64) -> usize {
    if total_abundance <= 0.0 || abundance <= 0.0 {
        return 0;
    }

    (total_reads as f64 * abundance / total_abundance).round() as usize
}

/**
 * maths
 */

pub fn mean<T>(vs: &[T]) -> T
where
    T: Float,
{
    if vs.is_empty() {
        return T::zero();
    }

    total(vs) / num_traits::cast(vs.len()).unwrap_or_else(T::one)
}

pub fn variance<T>(vs: &[T]) -> T
where
    T: Float,
{
    if vs.is_empty() {
        return T::zero();
    }

    let avg = mean(vs);

    vs.iter()
        .fold(T::zero(), |ac: T, v| ac + (*v - avg) * (*v - avg))
        / num_traits::cast(vs.len()).unwrap_or_else(T::one)
}

pub fn std_deviation<T>(vs: &[T]) -> T
where
    T: Float,
{
    variance(vs).sqrt()
}
