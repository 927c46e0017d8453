// file: seed.rs
// desc: pick a fresh maze seed

use rand::Rng;

use crate::request_url::ApiVersion;

/// Exclusive upper bound on seeds for an API revision.
pub fn seed_bound(version: ApiVersion) -> f64 {
    match version {
        ApiVersion::PathStyle => 2f64.powi(63),
        ApiVersion::QueryStyle => 2f64.powi(64),
    }
}

/// Uniform `f64` in [0, 1) scaled by the version bound and rounded.
///
/// The unit draw carries 53 bits, so only a sparse subset of [0, bound) is
/// reachable and large seeds are multiples of a power of two. The largest
/// draw is `bound - bound * 2^-53`, still below the bound, so the cast never
/// saturates. Treat this as the contract; widening it changes the seed space
/// existing links were generated from.
pub fn generate_seed<R: Rng + ?Sized>(version: ApiVersion, rng: &mut R) -> u64 {
    let unit: f64 = rng.random();
    (unit * seed_bound(version)).round() as u64
}
