use railclean::clean::{Fare, RouteStop, Schedule, Station, Train};
use railclean::{run, CleanConfig, CleanError};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::path::Path;

const OUTPUT_FILES: [&str; 9] = [
    "stations.json",
    "classes.json",
    "routes.json",
    "route_stops.json",
    "trains.json",
    "schedules.json",
    "pricing_profiles.json",
    "pricing_coefficients.json",
    "fares.json",
];

fn sample_dump() -> Value {
    json!({
        "stations": [
            {
                "id": 1,
                "ar_stationname": " القاهرة ",
                "en_stationname": "Cairo ",
                "lat": 30.06,
                "lng": 31.25,
                "disp": 1
            },
            {
                "id": 2,
                "ar_stationname": "بنها",
                "en_stationname": "Banha",
                "lat": 30.46,
                "lng": 31.18
            },
            {
                "id": 3,
                "ar_stationname": "طنطا",
                "en_stationname": "Tanta",
                "lat": null,
                "lng": null,
                "disp": 0
            },
            {"id": 4, "ar_stationname": "الإسكندرية", "en_stationname": "Alexandria", "disp": 1}
        ],
        "classes": [
            {"id": 1, "ar_classname": "مكيف", "en_classname": "A/C"},
            {"id": 2, "ar_classname": "تالتة", "en_classname": "Third"}
        ],
        "sections": [
            {"id": 14, "sectionid": 2, "stationid": 4, "dist": 0},
            {"id": 3, "sectionid": 1, "stationid": 3, "dist": 88},
            {"id": 1, "sectionid": 1, "stationid": 1, "dist": 0},
            {"id": 2, "sectionid": 1, "stationid": 2, "dist": 45.5},
            {"id": 15, "sectionid": 2, "stationid": 3, "dist": 120}
        ],
        "travels": [
            {
                "id": 900,
                "travelname": "903",
                "classid": 1,
                "sectionid": 1,
                "info": " VIP ",
                "profiles": "3, 7,9"
            },
            {"id": 901, "travelname": 81, "classid": 2, "sectionid": 2, "profiles": ""},
            {"id": 902, "travelname": "85", "classid": 2, "sectionid": 2}
        ],
        "travelsdata": [
            {"travelid": 901, "stationid": 3, "arriveschedule": 1500, "schedule": 1505, "note": ""},
            {
                "travelid": 900,
                "stationid": 2,
                "arriveschedule": 450,
                "schedule": 452,
                "note": "short stop"
            },
            {"travelid": 900, "stationid": 1, "arriveschedule": -1, "schedule": 420, "note": ""},
            {"travelid": 901, "stationid": 4, "arriveschedule": null, "schedule": 1380},
            {"travelid": 900, "stationid": 3, "arriveschedule": 510, "schedule": 512},
            {"travelid": 777, "stationid": 1, "arriveschedule": 60, "schedule": 61}
        ],
        "profiles": [
            {"id": 3, "profilename": "Express ", "rounding": 5},
            {"id": 7, "profilename": "Sleeper", "rounding": "1"}
        ],
        "profiles_coeffs": [
            {"id": 1, "profileid": 3, "intervaldistance": 50, "a": 0.1234565, "b": 2.0000005},
            {"id": 2, "profileid": 7, "intervaldistance": 100, "a": 1.5, "b": 0.0}
        ],
        "spread_sheet": [
            {"id": 1, "p": 3, "a": 1, "b": 2, "d": 45.5, "y": 30},
            {"id": 2, "p": 3, "a": 1, "b": 3, "d": 88, "y": 55.5}
        ]
    })
}

struct Fixture {
    _dir: tempfile::TempDir,
    config: CleanConfig,
}

fn fixture(dump: &Value) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let dump_path = dir.path().join("tut_full_dump.json");
    std::fs::write(&dump_path, serde_json::to_vec(dump).unwrap()).unwrap();
    let config = CleanConfig::new(dump_path, dir.path().join("output"));
    Fixture { _dir: dir, config }
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Vec<T> {
    let text = std::fs::read_to_string(dir.join(file)).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_full_run_writes_nine_files() {
    let fx = fixture(&sample_dump());
    let summary = run(&fx.config).unwrap();

    for file in OUTPUT_FILES {
        assert!(fx.config.output_dir.join(file).is_file(), "{} missing", file);
    }

    assert_eq!(summary.stations, 4);
    assert_eq!(summary.active_stations, 3);
    assert_eq!(summary.routes, 2);
    assert_eq!(summary.route_stops, 5);
    assert_eq!(summary.schedules, 6);
    assert_eq!(summary.total(), 4 + 2 + 2 + 5 + 3 + 6 + 2 + 2 + 2);
}

#[test]
fn test_output_contents() {
    let fx = fixture(&sample_dump());
    run(&fx.config).unwrap();
    let out = &fx.config.output_dir;

    let stations: Vec<Station> = read_table(out, "stations.json");
    assert_eq!(stations[0].name_ar, "القاهرة");
    assert_eq!(stations[0].name_en, "Cairo");
    assert!(stations[1].is_active);
    assert!(!stations[2].is_active);

    let stops: Vec<RouteStop> = read_table(out, "route_stops.json");
    let route_one: Vec<(i64, u32)> = stops
        .iter()
        .filter(|s| s.route_id == 1)
        .map(|s| (s.station_id, s.stop_order))
        .collect();
    assert_eq!(route_one, vec![(1, 1), (2, 2), (3, 3)]);
    assert_eq!(stops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    let trains: Vec<Train> = read_table(out, "trains.json");
    assert_eq!(trains[0].profile_ids, vec![3, 7, 9]);
    assert_eq!(trains[0].info, "VIP");
    assert_eq!(trains[1].train_number, "81");
    assert!(trains[1].profile_ids.is_empty());
    assert!(trains[2].profile_ids.is_empty());

    let schedules: Vec<Schedule> = read_table(out, "schedules.json");
    let order: Vec<(i64, i64, u32)> = schedules
        .iter()
        .map(|s| (s.train_id, s.station_id, s.stop_order))
        .collect();
    assert_eq!(
        order,
        vec![
            (777, 1, 1),
            (900, 1, 1),
            (900, 2, 2),
            (900, 3, 3),
            (901, 4, 1),
            (901, 3, 2),
        ]
    );
    assert_eq!(schedules[5].arrival_time.as_deref(), Some("01:00"));
    assert_eq!(schedules[4].arrival_time, None);

    let fares: Vec<Fare> = read_table(out, "fares.json");
    assert_eq!(fares.len(), 2);
    assert_eq!(fares[1].distance_km, json!(88));
    assert_eq!(fares[1].price, json!(55.5));
}

#[test]
fn test_coefficients_rounded_in_file() {
    let fx = fixture(&sample_dump());
    run(&fx.config).unwrap();

    let coefficients: Vec<Value> = read_table(&fx.config.output_dir, "pricing_coefficients.json");
    assert_eq!(coefficients[0]["coefficient_a"], json!(0.123456));
    assert_eq!(coefficients[0]["coefficient_b"], json!(2.000001));
}

#[test]
fn test_orphaned_schedule_is_reported_not_dropped() {
    let fx = fixture(&sample_dump());
    let summary = run(&fx.config).unwrap();

    let orphans = summary
        .integrity
        .dangling
        .iter()
        .find(|d| d.table == "schedules" && d.column == "train_id")
        .expect("orphaned schedule should be reported");
    assert_eq!(orphans.count, 1);
    assert_eq!(orphans.sample, vec![777]);

    // profile 9 of train 900 has no pricing profile
    assert!(summary
        .integrity
        .dangling
        .iter()
        .any(|d| d.column == "profile_ids" && d.sample == vec![9]));
}

#[test]
fn test_rerun_is_byte_identical() {
    let fx = fixture(&sample_dump());
    run(&fx.config).unwrap();
    let first: Vec<Vec<u8>> = OUTPUT_FILES
        .iter()
        .map(|f| std::fs::read(fx.config.output_dir.join(f)).unwrap())
        .collect();

    run(&fx.config).unwrap();
    for (file, before) in OUTPUT_FILES.iter().zip(first) {
        let after = std::fs::read(fx.config.output_dir.join(file)).unwrap();
        assert_eq!(before, after, "{} changed between runs", file);
    }
}

#[test]
fn test_non_ascii_written_literally() {
    let fx = fixture(&sample_dump());
    run(&fx.config).unwrap();

    let text = std::fs::read_to_string(fx.config.output_dir.join("classes.json")).unwrap();
    assert!(text.contains("\"name_ar\": \"مكيف\""));
    assert!(!text.contains("\\u"));
}

#[test]
fn test_missing_dump_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = CleanConfig::new(dir.path().join("absent.json"), dir.path().join("output"));

    let err = run(&config).unwrap_err();
    assert!(matches!(err, CleanError::Read { .. }));
    // The output directory is created before the dump is read
    assert!(config.output_dir.is_dir());
}

#[test]
fn test_malformed_dump_fails() {
    let dir = tempfile::tempdir().unwrap();
    let dump_path = dir.path().join("tut_full_dump.json");
    std::fs::write(&dump_path, "{\"stations\": [").unwrap();
    let config = CleanConfig::new(dump_path, dir.path().join("output"));

    assert!(matches!(run(&config), Err(CleanError::Parse { .. })));
}

#[test]
fn test_bad_row_aborts_after_earlier_tables() {
    let mut dump = sample_dump();
    dump["travelsdata"][0] = json!({"travelid": 901, "stationid": 3});
    let fx = fixture(&dump);

    let err = run(&fx.config).unwrap_err();
    match err {
        CleanError::MalformedRow { table, index, .. } => {
            assert_eq!(table, "travelsdata");
            assert_eq!(index, 0);
        }
        other => panic!("expected malformed row, got {:?}", other),
    }
    assert!(fx.config.output_dir.join("trains.json").exists());
    assert!(!fx.config.output_dir.join("schedules.json").exists());
}
