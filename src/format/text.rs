//! Human-readable network summary.

// format! into push_str keeps the layout readable
#![allow(clippy::format_push_string)]

use crate::game::Good;
use crate::map::{City, Network};

/// Render a network as plain text.
///
/// Output format:
/// ```text
/// === NETWORK: 3 cities, 2 paths ===
///
/// CITIES:
/// - [0] Roma (R) produces WINE
///   routes: SEA to Ostia [1], LAND to Antium [2]
///   colonists: 1
///   houses: none
///
/// GOODS:
/// - WINE: 1 city
/// ```
#[must_use]
pub fn render_summary(network: &Network) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "=== NETWORK: {} cities, {} paths ===\n\n",
        network.len(),
        network.path_count()
    ));

    output.push_str("CITIES:\n");
    for city in network.cities() {
        render_city(&mut output, network, city);
    }
    output.push('\n');

    render_goods(&mut output, network);

    output
}

/// Render one city block.
fn render_city(output: &mut String, network: &Network, city: &City) {
    let good = city.good().map_or("nothing", Good::token);
    output.push_str(&format!(
        "- [{}] {} ({}) produces {good}\n",
        city.id(),
        city.name(),
        city.letter()
    ));

    let routes: Vec<String> = network
        .paths_from(city.id())
        .filter_map(|path| {
            let other = path.other_endpoint(city.id()).ok()?;
            let name = network.city_by_id(other).map_or("?", City::name);
            Some(format!("{} to {name} [{other}]", path.mode()))
        })
        .collect();
    output.push_str(&format!("  routes: {}\n", join_or_none(&routes)));

    let colonists: Vec<String> = city.colonists().iter().map(ToString::to_string).collect();
    output.push_str(&format!("  colonists: {}\n", join_or_none(&colonists)));

    let houses: Vec<String> = city.houses().iter().map(ToString::to_string).collect();
    output.push_str(&format!("  houses: {}\n", join_or_none(&houses)));
}

/// Render how many cities produce each good.
fn render_goods(output: &mut String, network: &Network) {
    output.push_str("GOODS:\n");
    for good in Good::ALL {
        let count = network.cities().filter(|c| c.good() == Some(good)).count();
        if count > 0 {
            let noun = if count == 1 { "city" } else { "cities" };
            output.push_str(&format!("- {good}: {count} {noun}\n"));
        }
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Colonist;
    use crate::map::Path;

    fn create_test_network() -> Network {
        Network::from_parts(
            [
                City::new("Roma", 0, 'R', Some(Good::Wine)),
                City::new("Ostia", 1, 'O', Some(Good::Tools)),
                City::new("Antium", 2, 'A', Some(Good::Wine)),
            ],
            [Path::sea(0, 1), Path::land(0, 2)],
        )
        .unwrap()
    }

    #[test]
    fn test_render_header_and_cities() {
        let output = render_summary(&create_test_network());
        assert!(output.contains("=== NETWORK: 3 cities, 2 paths ==="));
        assert!(output.contains("- [0] Roma (R) produces WINE"));
        assert!(output.contains("routes: SEA to Ostia [1], LAND to Antium [2]"));
    }

    #[test]
    fn test_render_residents() {
        let mut network = create_test_network();
        let mut sailor = Colonist::sea(5, 1);
        network
            .move_colonist(&mut sailor, &Path::sea(0, 1), Some(1))
            .unwrap();

        let output = render_summary(&network);
        assert!(output.contains("colonists: 5"));
        assert!(output.contains("houses: none"));
    }

    #[test]
    fn test_render_goods_counts() {
        let output = render_summary(&create_test_network());
        assert!(output.contains("- WINE: 2 cities"));
        assert!(output.contains("- TOOLS: 1 city"));
        assert!(!output.contains("BRICK"));
    }
}
