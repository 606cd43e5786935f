//! File-level integration tests for loading, saving and playing on a map.
//!
//! Run with: cargo test network_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::io::Write;

use concordia::format::{
    LineError, check_writable, read_cities_into, read_routes_into, write_cities, write_routes,
};
use concordia::map::{check_network, check_residency};
use concordia::{
    City, Colonist, Good, House, LoadConfig, MoveRejection, Network, NetworkError, Path,
};
use tempfile::{NamedTempFile, tempdir};

const ITALIA: &str = "\
# Cities of the Italia board
Roma::0::R::WINE
Ostia::1::O::TOOLS
Antium::2::A::BRICK

  # the south
Capua::3::C::FOOD
Neapolis::4::N::CLOTH
";

const ITALIA_ROUTES: &str = "\
0::1::SEA
0::2::LAND
2::3::LAND
3::4::LAND
1::4::SEA
";

fn temp_file_with(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

fn load_italia() -> Network {
    let cities = temp_file_with(ITALIA.as_bytes());
    let routes = temp_file_with(ITALIA_ROUTES.as_bytes());
    let mut network = Network::new();
    read_cities_into(&mut network, cities.path(), LoadConfig::default()).unwrap();
    read_routes_into(&mut network, routes.path(), LoadConfig::default()).unwrap();
    network
}

#[test]
fn test_load_full_map() {
    let network = load_italia();
    assert_eq!(network.len(), 5);
    assert_eq!(network.path_count(), 5);
    assert_eq!(network.city_by_id(4).unwrap().name(), "Neapolis");
    assert!(check_network(&network).is_empty());

    let order: Vec<u32> = network.cities().map(City::id).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_city_round_trip() {
    let network = load_italia();
    let dir = tempdir().unwrap();
    let out = dir.path().join("cities.txt");

    write_cities(&out, network.cities()).unwrap();

    let mut reloaded = Network::new();
    let report = read_cities_into(&mut reloaded, &out, LoadConfig::strict()).unwrap();
    assert_eq!(report.loaded, 5);

    for (a, b) in network.cities().zip(reloaded.cities()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.id(), b.id());
        assert_eq!(a.letter(), b.letter());
        assert_eq!(a.good(), b.good());
    }
}

#[test]
fn test_route_round_trip() {
    let network = load_italia();
    let dir = tempdir().unwrap();
    let cities_out = dir.path().join("cities.txt");
    let routes_out = dir.path().join("routes.txt");

    write_cities(&cities_out, network.cities()).unwrap();
    write_routes(&routes_out, network.paths()).unwrap();

    let mut reloaded = Network::new();
    read_cities_into(&mut reloaded, &cities_out, LoadConfig::strict()).unwrap();
    read_routes_into(&mut reloaded, &routes_out, LoadConfig::strict()).unwrap();
    assert_eq!(network.paths(), reloaded.paths());
}

#[test]
fn test_write_creates_and_truncates() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("fresh.txt");
    assert!(!out.exists());

    let city = City::new("Roma", 0, 'R', None);
    write_cities(&out, [&city, &city]).unwrap();
    write_cities(&out, [&city]).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "Roma::0::R::-\n");
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("no-such-dir").join("cities.txt");
    let city = City::new("Roma", 0, 'R', None);

    let err = write_cities(&out, [&city]).unwrap_err();
    assert!(matches!(err, NetworkError::Io { .. }));
}

#[test]
fn test_unwritable_city_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("cities.txt");
    let cities = [
        City::new("Roma", 0, 'R', Some(Good::Wine)),
        City::new("#1 Antium", 1, 'A', None),
    ];

    let err = write_cities(&out, &cities).unwrap_err();

    assert!(matches!(err, NetworkError::UnrepresentableCity { city: 1, .. }));
    assert!(!out.exists());
}

#[test]
fn test_writable_cities_load_back_exactly() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("cities.txt");
    let candidates = [
        City::new("Roma", 0, 'R', Some(Good::Wine)),
        City::new("Ostia:", 1, 'O', Some(Good::Tools)),
        City::new("Capua ", 2, 'C', None),
        City::new("Neapolis", 3, ' ', None),
    ];
    let writable: Vec<City> = candidates
        .into_iter()
        .filter(|c| check_writable(c).is_ok())
        .collect();
    assert_eq!(writable.len(), 3);

    write_cities(&out, &writable).unwrap();

    let mut network = Network::new();
    let report = read_cities_into(&mut network, &out, LoadConfig::strict()).unwrap();
    assert_eq!(report.loaded, 3);
    let reloaded: Vec<City> = network.cities().cloned().collect();
    assert_eq!(reloaded, writable);
}

#[test]
fn test_one_bad_line_among_many() {
    let text = "Roma::0::R::WINE\nOstia::1::O\nAntium::2::A::BRICK\nCapua::3::C::FOOD\n";
    let file = temp_file_with(text.as_bytes());
    let mut network = Network::new();

    let report = read_cities_into(&mut network, file.path(), LoadConfig::lenient()).unwrap();

    assert_eq!(network.len(), 3);
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 2);
}

#[test]
fn test_duplicate_id_line_skipped() {
    let text = "Roma::0::R::WINE\nRoma Nova::0::N::FOOD\n";
    let file = temp_file_with(text.as_bytes());
    let mut network = Network::new();

    let report = read_cities_into(&mut network, file.path(), LoadConfig::lenient()).unwrap();

    assert_eq!(network.len(), 1);
    assert_eq!(network.city_by_id(0).unwrap().name(), "Roma");
    assert_eq!(report.skipped[0].reason, LineError::DuplicateCity(0));
}

#[test]
fn test_strict_load_keeps_earlier_cities() {
    let text = "Roma::0::R::WINE\nOstia::1::O::TOOLS\nAntium::two::A::BRICK\nCapua::3::C::FOOD\n";
    let file = temp_file_with(text.as_bytes());
    let mut network = Network::new();

    let err = read_cities_into(&mut network, file.path(), LoadConfig::strict()).unwrap_err();

    assert!(matches!(
        err,
        NetworkError::MalformedLine {
            line: 3,
            reason: LineError::InvalidId(_)
        }
    ));
    assert_eq!(network.len(), 2);
}

#[test]
fn test_read_failure_leaves_partial_load() {
    let mut bytes = b"Roma::0::R::WINE\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    bytes.extend_from_slice(b"Ostia::1::O::TOOLS\n");
    let file = temp_file_with(&bytes);
    let mut network = Network::new();

    let err = read_cities_into(&mut network, file.path(), LoadConfig::lenient()).unwrap_err();

    assert!(matches!(err, NetworkError::Io { .. }));
    assert_eq!(network.len(), 1);
    assert!(network.contains_city(0));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let mut network = Network::new();
    let err = read_cities_into(&mut network, dir.path().join("absent.txt"), LoadConfig::default())
        .unwrap_err();
    assert!(matches!(err, NetworkError::Io { .. }));
    assert!(network.is_empty());
}

#[test]
fn test_route_to_unloaded_city_skipped() {
    let cities = temp_file_with(b"Roma::0::R::WINE\nOstia::1::O::TOOLS\n");
    let routes = temp_file_with(b"0::1::SEA\n1::7::LAND\n0::1::CANAL\n");
    let mut network = Network::new();
    read_cities_into(&mut network, cities.path(), LoadConfig::default()).unwrap();

    let report = read_routes_into(&mut network, routes.path(), LoadConfig::default()).unwrap();

    assert_eq!(network.path_count(), 1);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.skipped[0].reason, LineError::UnknownCity(7));
    assert_eq!(report.skipped[1].reason, LineError::InvalidMode("CANAL".into()));
}

#[test]
fn test_rome_ostia_scenario() {
    let mut network = Network::from_parts(
        [
            City::new("Rome", 0, 'R', Some(Good::Wine)),
            City::new("Ostia", 1, 'O', Some(Good::Tools)),
        ],
        [Path::sea(0, 1)],
    )
    .unwrap();
    let sea = Path::sea(0, 1);

    let mut sailor = Colonist::sea(1, 1);
    network.move_colonist(&mut sailor, &sea, Some(0)).unwrap();
    assert_eq!(network.city_by_id(0).unwrap().colonists(), &[1]);

    let mut walker = Colonist::land(2, 1);
    let err = network.move_colonist(&mut walker, &sea, Some(0)).unwrap_err();
    assert!(matches!(
        err,
        NetworkError::IllegalMove(MoveRejection::WrongMode)
    ));
    assert_eq!(network.city_by_id(0).unwrap().colonists(), &[1]);
}

#[test]
fn test_journey_across_the_map() {
    let mut network = load_italia();
    let mut walker = Colonist::land(1, 1);
    let mut sailor = Colonist::sea(2, 2);
    let mut villa = House::new(1, 1);

    // Roma -> Antium -> Capua -> Neapolis by road.
    network
        .move_colonist(&mut walker, &Path::land(0, 2), Some(0))
        .unwrap();
    for path in [Path::land(0, 2), Path::land(2, 3), Path::land(3, 4)] {
        network.move_colonist(&mut walker, &path, None).unwrap();
    }
    assert_eq!(walker.location(), Some(4));

    // Ostia -> Neapolis by sea.
    network
        .move_colonist(&mut sailor, &Path::sea(1, 4), Some(1))
        .unwrap();
    network
        .move_colonist(&mut sailor, &Path::sea(1, 4), None)
        .unwrap();
    assert_eq!(sailor.location(), Some(4));

    // The road walker cannot take the sea lane back to Ostia.
    assert!(!walker.can_move_to(&network, &Path::sea(1, 4)));

    network.place_house(&mut villa, 4).unwrap();

    let neapolis = network.city_by_id(4).unwrap();
    assert_eq!(neapolis.colonists(), &[1, 2]);
    assert_eq!(neapolis.houses(), &[1]);
    assert!(check_residency(&network, &[walker, sailor], &[villa]).is_empty());
}
