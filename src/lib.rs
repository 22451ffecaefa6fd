//! The scrypt sequential memory-hard key derivation function (RFC 7914).
#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::inline_always
)]

mod error;
mod params;
mod romix;
mod salsa;

pub use error::Error;
pub use params::Params;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

/// Derives `output.len()` bytes of key material from `password` and `salt`.
///
/// Identical inputs always produce identical output. An empty `output`
/// slice is accepted and left empty.
#[allow(clippy::cast_possible_truncation)]
pub fn scrypt(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    output: &mut [u8],
) -> Result<(), Error> {
    if output.len() / 32 > 0xffff_ffff {
        return Err(Error::ParameterTooLarge("output length"));
    }
    let n = params.n as usize;
    let r128 = (params.r as usize) * 128;
    let p_r128 = (params.p as usize) * r128;
    let n_r128 = n * r128;
    let mut b = vec![0; p_r128];
    pbkdf2_hmac::<Sha256>(password, salt, 1, &mut b);
    let mut v = vec![0; n_r128];
    let mut t = vec![0; r128];
    for lane in b.chunks_mut(r128) {
        romix::ro_mix(lane, &mut v, &mut t, n);
    }
    pbkdf2_hmac::<Sha256>(password, &b, 1, output);
    b.zeroize();
    v.zeroize();
    t.zeroize();
    Ok(())
}
