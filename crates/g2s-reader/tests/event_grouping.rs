use std::fs;
use std::path::PathBuf;

use g2s_reader::{count_runs, EventReader};
use tempfile::TempDir;

fn particle_line(run: i32, event: i32, species: i32, history: i64) -> String {
    format!("{run} {event} {species} 1 4.2E-03 0.1 0.2 0.3 0.94 0.0 0.0 0.1 {history} 2 1.5")
}

fn write_file(dir: &TempDir, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n")).expect("write input");
    path
}

#[test]
fn groups_lines_by_event_number() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "FinalEvents.dat",
        &[
            "# header comment".to_string(),
            particle_line(1, 1, 902, 0),
            particle_line(1, 1, 1, 0),
            particle_line(1, 1, 101, 1_000_002),
            particle_line(1, 2, 902, 0),
            particle_line(1, 2, 1, 0),
        ],
    );

    let events: Vec<_> = EventReader::open(&path, false)
        .expect("open")
        .collect::<Result<Vec<_>, _>>()
        .expect("events");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].len(), 3);
    assert_eq!(events[1].len(), 2);
    assert_eq!(events[0][2].species, 101);
    assert_eq!(events[0][2].history, 1_000_002);
    assert_eq!(events[1][0].event_number, 2);
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "FinalEvents.dat",
        &[
            "# one".to_string(),
            String::new(),
            particle_line(1, 1, 1, 0),
            "# interleaved".to_string(),
            particle_line(1, 1, 101, 0),
        ],
    );
    let events: Vec<_> = EventReader::open(&path, false)
        .expect("open")
        .collect::<Result<Vec<_>, _>>()
        .expect("events");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].len(), 2);
}

#[test]
fn malformed_lines_poison_only_their_event() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "FinalEvents.dat",
        &[
            particle_line(1, 1, 1, 0),
            "not a particle line at all".to_string(),
            particle_line(1, 1, 101, 0),
            particle_line(1, 2, 1, 0),
        ],
    );
    let blocks: Vec<_> = EventReader::open(&path, false).expect("open").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].is_err());
    let second = blocks[1].as_ref().expect("second event");
    assert_eq!(second[0].event_number, 2);
}

#[test]
fn run_count_comes_from_the_last_line() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "FinalEvents.dat",
        &[
            particle_line(1, 1, 1, 0),
            particle_line(7, 500, 1, 0),
            "# trailing comment".to_string(),
        ],
    );
    assert_eq!(count_runs(&path).expect("runs"), 7);
}

#[test]
fn prod_charge_column_is_optional_per_flag() {
    let dir = TempDir::new().expect("tempdir");
    let with_charge = format!("{} 1", particle_line(1, 1, 1, 0));
    let path = write_file(&dir, "FinalEvents.dat", &[with_charge]);

    let events: Vec<_> = EventReader::open(&path, true)
        .expect("open")
        .collect::<Result<Vec<_>, _>>()
        .expect("events");
    assert_eq!(events[0][0].prod_charge, Some(1));

    // The same file read without the flag has one column too many.
    let blocks: Vec<_> = EventReader::open(&path, false).expect("open").collect();
    assert!(blocks[0].is_err());
}
