#![no_main]

use arbitrary::Arbitrary;
use concordia::map::{check_network, check_residency};
use concordia::{City, Colonist, Network, Path, Transport};
use libfuzzer_sys::fuzz_target;

/// Structured input for movement fuzzing.
#[derive(Arbitrary, Debug)]
struct MoveInput {
    /// Number of cities (capped).
    cities: u8,
    /// Paths as (a, b, is_sea).
    paths: Vec<(u8, u8, bool)>,
    /// Colonist types (true = sea).
    colonists: Vec<bool>,
    /// Moves as (colonist index, a, b, is_sea, target).
    moves: Vec<(u8, u8, u8, bool, Option<u8>)>,
}

fn mode(is_sea: bool) -> Transport {
    if is_sea { Transport::Sea } else { Transport::Land }
}

fuzz_target!(|input: MoveInput| {
    let count = u32::from(input.cities.min(32)).max(1);
    let mut network = Network::new();
    for id in 0..count {
        if network.add_city(City::new(format!("City{id}"), id, 'C', None)).is_err() {
            return;
        }
    }
    for (a, b, sea) in input.paths.into_iter().take(64) {
        // Unknown endpoints are rejected, not inserted
        let _ = network.add_path(Path::new(u32::from(a), u32::from(b), mode(sea)));
    }

    let mut colonists: Vec<Colonist> = input
        .colonists
        .iter()
        .take(8)
        .zip(0u32..)
        .map(|(&sea, id)| Colonist::new(id, 1, mode(sea)))
        .collect();
    if colonists.is_empty() {
        return;
    }

    for (who, a, b, sea, target) in input.moves.into_iter().take(256) {
        let idx = usize::from(who) % colonists.len();
        let path = Path::new(u32::from(a), u32::from(b), mode(sea));
        let _ = network.move_colonist(&mut colonists[idx], &path, target.map(u32::from));
    }

    assert!(check_network(&network).is_empty());
    assert!(check_residency(&network, &colonists, &[]).is_empty());
});
