//! Picking colors "humanly": no color repeats within 2 picks of itself,
//! and a recently shown color stays unlikely for the next 5.
//!
//! Compare with plain uniform picks over 7 colors, where an immediate
//! repeat shows up roughly every 7 draws.

use human_random::{source_from_rng, ItemSampler, SamplerOptions};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let colors = vec![
        "red", "orange", "yellow", "green", "cyan", "blue", "purple",
    ];

    let options = SamplerOptions::default()
        .cooldown(2)
        .recovery(5)
        .multiplier(1.5)
        .normalize(true);

    let mut picker = ItemSampler::new(
        colors,
        options,
        source_from_rng(ChaCha8Rng::seed_from_u64(2022)),
    )?;

    for i in 0..20 {
        println!("{i:2}: {}", picker.next());
    }
    println!();
    println!("counters after the run: {:?}", picker.state());

    Ok(())
}
