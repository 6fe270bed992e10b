//! Character-by-character reveal of refined text.
//!
//! Purely presentational: the text written is exactly the text given, only
//! the timing varies.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::time::Duration;

/// Per-character delay policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    pub base: Duration,
    pub pause: Duration,
    /// Chance that a character is followed by `pause` instead of `base`
    pub pause_probability: f64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(30),
            pause: Duration::from_millis(100),
            pause_probability: 0.1,
        }
    }
}

impl Pacing {
    pub fn delay<R: Rng>(&self, rng: &mut R) -> Duration {
        if rng.gen_bool(self.pause_probability.clamp(0.0, 1.0)) {
            self.pause
        } else {
            self.base
        }
    }
}

pub struct Typewriter<W: Write> {
    out: W,
    pacing: Option<Pacing>,
    rng: StdRng,
}

impl<W: Write> Typewriter<W> {
    /// A typewriter with the default pacing.
    pub fn new(out: W) -> Self {
        Self {
            out,
            pacing: Some(Pacing::default()),
            rng: StdRng::from_entropy(),
        }
    }

    /// Write everything at once.
    pub fn instant(out: W) -> Self {
        Self {
            pacing: None,
            ..Self::new(out)
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Reveal `text`, then end the line.
    pub async fn type_out(&mut self, text: &str) -> io::Result<()> {
        let Some(pacing) = self.pacing else {
            writeln!(self.out, "{}", text)?;
            return self.out.flush();
        };

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            tokio::time::sleep(pacing.delay(&mut self.rng)).await;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_delay_is_base_or_pause() {
        let pacing = Pacing::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut pauses = 0;
        for _ in 0..1000 {
            let delay = pacing.delay(&mut rng);
            assert!(delay == pacing.base || delay == pacing.pause);
            if delay == pacing.pause {
                pauses += 1;
            }
        }
        // ~10% with a wide margin
        assert!((40..=200).contains(&pauses), "pauses = {pauses}");
    }

    #[test]
    fn test_never_pause() {
        let pacing = Pacing {
            pause_probability: 0.0,
            ..Pacing::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..100).all(|_| pacing.delay(&mut rng) == pacing.base));
    }

    #[tokio::test(start_paused = true)]
    async fn test_type_out_writes_text_exactly() {
        let mut writer = Typewriter::new(Vec::new()).with_rng(StdRng::seed_from_u64(3));
        let start = Instant::now();
        writer.type_out("héllo").await.unwrap();

        // five characters, each at least the base delay
        assert!(start.elapsed() >= Duration::from_millis(150));
        assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "héllo\n");
    }

    #[tokio::test]
    async fn test_instant_has_no_delay() {
        let mut writer = Typewriter::instant(Vec::new());
        writer.type_out("done").await.unwrap();
        assert_eq!(writer.into_inner(), b"done\n");
    }
}
