use crate::error::Error;

/// Validated scrypt cost parameters.
///
/// `n` is the CPU/memory cost (a power of two), `r` the block size
/// multiplier, `p` the parallelization count. Every bound is checked here,
/// before any allocation happens.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub(crate) n: u64,
    pub(crate) r: u32,
    pub(crate) p: u32,
}

impl Params {
    pub fn new(n: u64, r: u32, p: u32) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidCostParameter("N is zero"));
        }
        if !n.is_power_of_two() {
            return Err(Error::InvalidCostParameter("N is not a power of two"));
        }
        if r == 0 {
            return Err(Error::InvalidCostParameter("r is zero"));
        }
        if p == 0 {
            return Err(Error::InvalidCostParameter("p is zero"));
        }
        let n_mem = usize::try_from(n).map_err(|_| Error::ParameterTooLarge("N"))?;
        let r_mem = usize::try_from(r).map_err(|_| Error::ParameterTooLarge("r"))?;
        let p_mem = usize::try_from(p).map_err(|_| Error::ParameterTooLarge("p"))?;
        let r128 = r_mem
            .checked_mul(128)
            .ok_or(Error::ParameterTooLarge("128 * r"))?;
        r128.checked_mul(p_mem)
            .ok_or(Error::ParameterTooLarge("128 * r * p"))?;
        r128.checked_mul(n_mem)
            .ok_or(Error::ParameterTooLarge("128 * r * N"))?;
        if u64::from(n.trailing_zeros()) >= u64::from(r) * 16 {
            return Err(Error::ParameterTooLarge("N exceeds 2^(128 * r / 8)"));
        }
        if u64::from(r) * u64::from(p) >= 0x4000_0000 {
            return Err(Error::ParameterTooLarge("r * p exceeds 2^30"));
        }
        Ok(Self { n, r, p })
    }
}

#[cfg(test)]
mod tests {
    use super::Params;
    use crate::error::Error;

    #[test]
    fn accepts_reference_parameters() {
        for (n, r, p) in [(16, 1, 1), (1024, 8, 16), (16384, 8, 1), (1 << 20, 8, 1)] {
            assert!(Params::new(n, r, p).is_ok());
        }
    }

    #[test]
    fn rejects_invalid_cost() {
        for (n, r, p) in [(0, 1, 1), (3, 1, 1), (48, 1, 1), (16, 0, 1), (16, 1, 0)] {
            assert!(matches!(
                Params::new(n, r, p),
                Err(Error::InvalidCostParameter(_))
            ));
        }
    }

    #[test]
    fn rejects_oversized_parameters() {
        // N >= 2^(128 * r / 8)
        assert!(matches!(
            Params::new(1 << 16, 1, 1),
            Err(Error::ParameterTooLarge(_))
        ));
        assert!(Params::new(1 << 15, 1, 1).is_ok());
        // r * p >= 2^30
        assert!(matches!(
            Params::new(2, 1 << 15, 1 << 15),
            Err(Error::ParameterTooLarge(_))
        ));
        // table size overflows the address space
        assert!(matches!(
            Params::new(1 << 62, 8, 1),
            Err(Error::ParameterTooLarge(_))
        ));
    }
}
