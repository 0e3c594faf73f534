use rand::SeedableRng;
use rand::rngs::StdRng;
use tour_common::Transcript;

/// Per-chapter execution state.
///
/// Each chapter gets a fresh context, so nothing written by one chapter is
/// visible to the next.
pub struct Context {
    transcript: Transcript,
    rng: StdRng,
}

impl Context {
    pub fn new(seed: u64) -> Self {
        Self {
            transcript: Transcript::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn say(&mut self, line: impl Into<String>) {
        self.transcript.say(line);
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn finish(self) -> Transcript {
        self.transcript
    }
}
