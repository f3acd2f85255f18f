// src/view/messages.rs
// =============================================================================
// The canned loading and error messages, and how one gets picked.
//
// Each view picks its loading and error message once, when it is created.
// Picking goes through the MessagePicker trait so tests can pin the choice.
//
// Rust concepts:
// - Traits with a default method: implementors only write `pick`, and
//   `choose` comes for free
// - rand's StdRng: a seedable generator, so a seed gives a repeatable run
// =============================================================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shown while a repository tree is being walked.
pub const TREE_LOADING_MESSAGES: &[&str] = &[
    "Hold on tight, we're chasing down your data... it's a bit of a free spirit!",
    "Your data is in the oven... we'll deliver it fresh and hot!",
    "Loading... we've sent our fastest electrons to fetch your info!",
    "Grabbing your data... it's in a bit of a traffic jam on the information superhighway.",
    "Your data is coming... it's just doing some stretches first.",
    "Hold up, we're untangling the internet cables... almost there!",
    "Loading... because good things come to those who wait. And wait. And wait.",
    "Your data is en route... it insisted on taking the scenic route.",
    "Just a sec... we're convincing your data to leave its comfy server.",
    "Loading... like a turtle racing a snail. But we'll get there!",
];

/// Shown while the repository list is being fetched.
pub const LIST_LOADING_MESSAGES: &[&str] = &[
    "Hold on tight, we're fetching your repositories... they're on their way!",
    "Loading your repos... we've sent out the search party!",
    "Fetching repositories... our server is doing some heavy lifting!",
    "Hang tight! We're digging through the internet to get your repos.",
    "Gathering your repositories... they're almost here!",
    "Your repositories are on the way... just a little longer!",
    "Getting things ready... we're polishing your repositories!",
    "Your repos are coming... they're just finding their way!",
    "Loading... like a snail racing a tortoise. Almost there!",
    "We're fetching your repositories... it's a bit of a marathon!",
];

/// Shown for any failure, whatever the cause.
pub const ERROR_MESSAGES: &[&str] = &[
    "Uh-oh! Our servers are having a bit of a moment. Please try again!",
    "Looks like the data took a wrong turn. We're working on getting it back on track!",
    "Yikes! We hit a snag. Maybe give it another shot?",
    "Well, this is embarrassing... Let's pretend this never happened and try again.",
    "Our data elves are taking a break. Try refreshing the page!",
    "Hmmm, something's off. Could you try that again?",
    "The system had a hiccup. How about we give it another go?",
    "Oops! Our bad. We'll have this fixed in no time!",
    "Error 404: Sense of humor not found. Oh, and your data too. Try again?",
];

/// Chooses an index into a list of `len` messages.
pub trait MessagePicker {
    /// Must return a value below `len` when `len > 0`.
    fn pick(&mut self, len: usize) -> usize;

    fn choose(&mut self, messages: &[&'static str]) -> &'static str {
        if messages.is_empty() {
            return "";
        }
        let index = self.pick(messages.len()) % messages.len();
        messages[index]
    }
}

/// Always picks the same index (wrapped to the list length).
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

#[cfg(test)]
impl MessagePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.0 % len
        }
    }
}

/// Picks uniformly at random from an OS-seeded StdRng.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Same seed, same sequence of picks.
    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl MessagePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}
