//! Composing real images with status lines

use motd::{compose, image};

use crate::helpers::{fixtures_dir, load_fixture};

fn messages(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn arch_fixture_loads_trimmed() {
    let rows = image::load(&fixtures_dir().join("arch.txt")).unwrap();

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[1], "     /###\\");
    assert!(rows.iter().all(|row| row == row.trim_end()));
}

#[test]
fn status_lines_sit_beside_bottom_rows() {
    let rows = image::parse(&load_fixture("arch.txt"));
    let status = messages(&["Linux tardis 6.9.1", "7 updates available"]);

    let out: Vec<String> = compose("fortune\n", Some(&rows), &status, Some("<blue>"))
        .with_reset("<reset>")
        .collect();

    assert_eq!(out.len(), rows.len() + 3);
    assert_eq!(out[0], "fortune\n");
    assert_eq!(out[1], "<blue>");
    assert_eq!(out[2], "      /#\\");
    assert_eq!(out[6], "  /##(   )##\\");
    assert_eq!(out[7], " /###P   q#,^\\<reset>Linux tardis 6.9.1<blue>");
    assert_eq!(out[8], "/P^         ^q\\<reset>7 updates available<blue>");
    assert_eq!(out[9], "<reset>");
}

#[test]
fn every_message_appears_once_when_image_is_taller() {
    let rows = image::parse(&load_fixture("arch.txt"));

    for n in 0..=rows.len() {
        let status: Vec<String> = (0..n).map(|i| format!("status-{i}")).collect();
        let out: Vec<String> = compose("", Some(&rows), &status, None).collect();

        assert_eq!(out.len(), rows.len() + 3);
        for (k, message) in status.iter().enumerate() {
            let row = rows.len() - n + k;
            assert!(
                out[row + 2].ends_with(message.as_str()),
                "message {k} should be on image row {row}"
            );
            assert_eq!(out.iter().filter(|l| l.contains(message.as_str())).count(), 1);
        }
    }
}

#[test]
fn more_messages_than_rows_keeps_the_last_ones() {
    let rows = messages(&["A", "B"]);
    let status = messages(&["m1", "m2", "m3", "m4"]);

    let lines = compose("P", Some(&rows), &status, None).with_reset("|");
    assert_eq!(lines.dropped(), 2);

    let out: Vec<String> = lines.collect();
    assert_eq!(out, messages(&["P", "", "A|m3", "B|m4", "|"]));
}

#[test]
fn no_image_gives_one_line_per_message() {
    let status = messages(&["one", "two", "three"]);

    let out: Vec<String> = compose("", None, &status, None).with_reset("").collect();

    assert_eq!(out, messages(&["", "", "one", "two", "three", ""]));
}
