// Seeded xorshift64* generator for particle spawns.
//
// Not cryptographically secure. Host runs pass a fixed seed so they are
// reproducible; the browser seeds it from wall-clock time.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 random bits -> [0,1).
        let x = self.next_u64() >> 11;
        (x as f64) / ((1u64 << 53) as f64)
    }

    #[inline]
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64_01()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Prng::new(42);
        let mut b = Prng::new(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut rng = Prng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn ranges_are_half_open() {
        let mut rng = Prng::new(7);
        for _ in 0..10_000 {
            let v = rng.gen_range_f64(-0.25, 0.25);
            assert!((-0.25..0.25).contains(&v));
            let u = rng.next_f64_01();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
