use rand::Rng;
use std::collections::HashMap;
use std::f64::consts::PI;

/// LuaJIT seeds its generator with a shortened pi.
const LUA_SEED_PI: f64 = 3.14159265358979;
const ROUND13_SCALE: u128 = 10_000_000_000_000;
const SEED_ALPHABET: &[u8] = b"123456789ABCDEFGHIJKLMNPQRSTUVWXYZ";
pub const SEED_LENGTH: usize = 8;

fn fract(value: f64) -> f64 {
    value - value.floor()
}

/// Round to 13 decimal places the way `%.13f` does: from the exact binary
/// value, ties to even. The result is the double nearest that decimal.
fn round13(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let bits = value.to_bits();
    let fraction = bits & 0x000F_FFFF_FFFF_FFFF;
    let (mantissa, exponent) = match ((bits >> 52) & 0x7FF) as i32 {
        0 => (fraction, 1),
        exponent => (fraction | (1 << 52), exponent),
    };
    // value == mantissa * 2^-shift
    let shift = 1075 - exponent;
    if shift <= 0 {
        return value;
    }
    if shift >= 128 {
        return 0.0_f64.copysign(value);
    }
    let scaled = u128::from(mantissa) * ROUND13_SCALE;
    let mut units = scaled >> shift;
    let rest = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    if rest > half || (rest == half && units & 1 == 1) {
        units += 1;
    }
    (units as f64 / ROUND13_SCALE as f64).copysign(value)
}

/// Hash a string into `[0, 1)` the way the game derives stream seeds.
pub fn pseudohash(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut num = 1.0_f64;
    for i in (1..=bytes.len()).rev() {
        num = fract(1.1239285023 / num * f64::from(bytes[i - 1]) * PI + PI * i as f64);
    }
    num
}

/// Draw a fresh seed string from the game's seed alphabet.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SEED_LENGTH)
        .map(|_| SEED_ALPHABET[rng.gen_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}

/// LuaJIT's Tausworthe generator, seeded from a double.
#[derive(Debug, Clone)]
pub struct LuaRandom {
    state: [u64; 4],
}

impl LuaRandom {
    pub fn new(seed: f64) -> Self {
        let mut state = [0u64; 4];
        let mut d = seed;
        let mut r: u64 = 0x1109_0601;
        for lane in state.iter_mut() {
            let m = 1u64 << (r & 255);
            r >>= 8;
            d = d * LUA_SEED_PI + 2.7182818284590;
            let mut bits = d.to_bits();
            if bits < m {
                bits += m;
            }
            *lane = bits;
        }
        let mut rng = Self { state };
        for _ in 0..10 {
            rng.next_u64();
        }
        rng
    }

    fn next_u64(&mut self) -> u64 {
        let mut r = 0u64;
        let mut z = self.state[0];
        z = (((z << 31) ^ z) >> 45) ^ ((z & (u64::MAX << 1)) << 18);
        r ^= z;
        self.state[0] = z;
        z = self.state[1];
        z = (((z << 19) ^ z) >> 30) ^ ((z & (u64::MAX << 6)) << 28);
        r ^= z;
        self.state[1] = z;
        z = self.state[2];
        z = (((z << 24) ^ z) >> 48) ^ ((z & (u64::MAX << 9)) << 7);
        r ^= z;
        self.state[2] = z;
        z = self.state[3];
        z = (((z << 21) ^ z) >> 39) ^ ((z & (u64::MAX << 17)) << 8);
        r ^= z;
        self.state[3] = z;
        r
    }

    /// Uniform double in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        let bits = (self.next_u64() & 0x000F_FFFF_FFFF_FFFF) | 0x3FF0_0000_0000_0000;
        f64::from_bits(bits) - 1.0
    }

    pub fn randint(&mut self, min: i64, max: i64) -> i64 {
        (self.random() * (max - min + 1) as f64) as i64 + min
    }
}

/// Named stream cursors for one seed. Every call advances exactly the
/// stream it names.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: String,
    hashed_seed: f64,
    nodes: HashMap<String, f64>,
}

impl RngState {
    pub fn from_seed(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            hashed_seed: pseudohash(seed),
            nodes: HashMap::new(),
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Advance `id` and return the seed for its next draw.
    pub fn node(&mut self, id: &str) -> f64 {
        let seed = &self.seed;
        let value = self
            .nodes
            .entry(id.to_string())
            .or_insert_with(|| pseudohash(&format!("{id}{seed}")));
        *value = round13(fract(*value * 1.72431234 + 2.134453429141));
        (*value + self.hashed_seed) / 2.0
    }

    pub fn random(&mut self, id: &str) -> f64 {
        LuaRandom::new(self.node(id)).random()
    }

    pub fn randint(&mut self, id: &str, min: i64, max: i64) -> i64 {
        LuaRandom::new(self.node(id)).randint(min, max)
    }

    /// Index into a collection of `len` elements, drawn from `id`.
    pub fn index(&mut self, id: &str, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let roll = self.randint(id, 0, len as i64 - 1);
        (roll.max(0) as usize).min(len - 1)
    }

    /// Fisher-Yates with one generator seeded from `id`, matching the
    /// game's `pseudoshuffle`.
    pub fn shuffle<T>(&mut self, id: &str, items: &mut [T]) {
        let mut rng = LuaRandom::new(self.node(id));
        for i in (2..=items.len()).rev() {
            let j = ((rng.random() * i as f64) as usize).min(i - 1);
            items.swap(i - 1, j);
        }
    }
}
