// Unit tests for the formatter
// Covers column alignment, verbosity rules and styling passthrough


use crate::formatter::{Styling, format_records, name_column_width};

use models::ErrorRecord;

fn record(name: &str, description: &str, framework: &str, header_file: &str) -> ErrorRecord {
    ErrorRecord::new(name, description, framework, header_file)
}

/// **VALUE**: Verifies an empty result set formats to nothing, whatever the verbosity.
///
/// **WHY THIS MATTERS**: "No match" from the service must print nothing,
/// not a blank line or a stray header.
#[test]
fn given_no_records_when_formatted_then_returns_no_lines() {
    // GIVEN: No records
    let records: Vec<ErrorRecord> = Vec::new();

    // WHEN / THEN
    assert!(format_records(&records, false, Styling::Plain).is_empty());
    assert!(format_records(&records, true, Styling::Plain).is_empty());
    assert!(format_records(&records, true, Styling::Ansi).is_empty());
    assert_eq!(name_column_width(&records), 0);
}

/// **VALUE**: Verifies the single-record, non-verbose header layout exactly.
///
/// **WHY THIS MATTERS**: This is the line users read most. Name, framework
/// and header must appear in that order.
///
/// **BUG THIS CATCHES**: Would catch reordered segments or lost parentheses.
#[test]
fn given_single_record_when_formatted_then_header_has_name_framework_header() {
    // GIVEN
    let records = vec![record("err", "", "CoreFoo", "CoreFoo.h")];

    // WHEN
    let lines = format_records(&records, false, Styling::Plain);

    // THEN: One line, segments in order, no padding beyond the name
    assert_eq!(lines, vec!["err CoreFoo(CoreFoo.h)".to_string()]);

    let line = &lines[0];
    let name_at = line.find("err").expect("name present");
    let framework_at = line.find("CoreFoo").expect("framework present");
    let header_at = line.find("(CoreFoo.h)").expect("header present");
    assert!(name_at < framework_at && framework_at < header_at);
}

/// **VALUE**: Verifies verbose output adds the indented description line.
#[test]
fn given_description_and_verbose_when_formatted_then_adds_indented_block() {
    // GIVEN
    let records = vec![record("err", "Something failed.", "CoreFoo", "CoreFoo.h")];

    // WHEN
    let lines = format_records(&records, true, Styling::Plain);

    // THEN
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "err CoreFoo(CoreFoo.h)");
    assert_eq!(lines[1], "    Something failed.");
}

/// **VALUE**: Verifies descriptions stay hidden unless verbose is requested.
///
/// **BUG THIS CATCHES**: Would catch the verbose flag being ignored or inverted.
#[test]
fn given_description_and_not_verbose_when_formatted_then_omits_block() {
    let records = vec![record("err", "Something failed.", "CoreFoo", "CoreFoo.h")];

    let lines = format_records(&records, false, Styling::Plain);

    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains("Something failed."));
}

/// **VALUE**: Verifies empty descriptions never produce a blank indented line.
#[test]
fn given_empty_description_and_verbose_when_formatted_then_omits_block() {
    let records = vec![
        record("a", "", "Fw", "A.h"),
        record("b", "Has text.", "Fw", "B.h"),
    ];

    let lines = format_records(&records, true, Styling::Plain);

    assert_eq!(
        lines,
        vec![
            "a Fw(A.h)".to_string(),
            "b Fw(B.h)".to_string(),
            "    Has text.".to_string(),
        ]
    );
}

/// **VALUE**: Verifies names are padded to the widest name so columns line up.
///
/// **WHY THIS MATTERS**: Multiple constants often share a code across
/// frameworks; aligned columns are the whole point of the layout.
///
/// **BUG THIS CATCHES**: Would catch padding on the wrong side, padding
/// computed per record, or sorting of records.
#[test]
fn given_names_of_different_length_when_formatted_then_pads_to_widest_in_input_order() {
    // GIVEN: Widest name is second
    let records = vec![
        record("paramErr", "", "CarbonCore", "MacErrors.h"),
        record("kAudioFileUnspecifiedError", "", "AudioToolbox", "AudioFile.h"),
        record("short", "", "Fw", "S.h"),
    ];

    // WHEN
    let lines = format_records(&records, false, Styling::Plain);

    // THEN: Width is the longest name, order preserved
    assert_eq!(name_column_width(&records), 26);
    assert_eq!(
        lines[0],
        format!("{:<26} CarbonCore(MacErrors.h)", "paramErr")
    );
    assert_eq!(
        lines[1],
        "kAudioFileUnspecifiedError AudioToolbox(AudioFile.h)"
    );
    assert_eq!(lines[2], format!("{:<26} Fw(S.h)", "short"));

    assert!(lines.iter().all(|line| line.chars().nth(26) == Some(' ')));
}

/// **VALUE**: Verifies the all-empty-names edge case (width 0, no padding).
#[test]
fn given_all_names_empty_when_formatted_then_framework_follows_immediately() {
    let records = vec![record("", "", "Fw", "F.h"), record("", "", "Other", "O.h")];

    let lines = format_records(&records, false, Styling::Plain);

    assert_eq!(name_column_width(&records), 0);
    assert_eq!(lines, vec![" Fw(F.h)".to_string(), " Other(O.h)".to_string()]);
}

/// **VALUE**: Verifies terminal styling wraps each segment in its own escape codes.
///
/// **BUG THIS CATCHES**: Would catch the padded name losing its padding
/// inside the colored segment, or a missing reset between segments.
#[test]
fn given_ansi_styling_when_formatted_then_segments_are_colored() {
    // GIVEN
    let records = vec![record("ab", "", "Fw", "F.h"), record("a", "", "Fw", "F.h")];

    // WHEN
    let lines = format_records(&records, false, Styling::Ansi);

    // THEN
    assert_eq!(
        lines[1],
        "\x1b[91ma \x1b[0m\x1b[36m Fw\x1b[0m\x1b[1m(F.h)\x1b[0m"
    );
}

/// **VALUE**: Verifies description blocks are never styled.
#[test]
fn given_ansi_styling_and_verbose_when_formatted_then_description_is_plain() {
    let records = vec![record("a", "Plain words.", "Fw", "F.h")];

    let lines = format_records(&records, true, Styling::Ansi);

    assert_eq!(lines[1], "    Plain words.");
}

/// **VALUE**: Verifies whitespace-only descriptions are treated as empty.
///
/// **BUG THIS CATCHES**: Would catch a bare `"    "` line being emitted for
/// a description the service filled with spaces or newlines.
#[test]
fn given_whitespace_only_description_and_verbose_when_formatted_then_omits_block() {
    let records = vec![record("err", " \n\t ", "CoreFoo", "CoreFoo.h")];

    let lines = format_records(&records, true, Styling::Plain);

    assert_eq!(lines, vec!["err CoreFoo(CoreFoo.h)".to_string()]);
}

/// **VALUE**: Verifies long descriptions become one multi-line block entry.
///
/// **WHY THIS MATTERS**: A debugger host appends each entry as one message;
/// the wrapped description must stay together after its header.
#[test]
fn given_long_description_when_formatted_then_block_holds_wrapped_lines() {
    // GIVEN: A description well past 70 columns
    let description = "The operation could not be completed because the requested \
        item was not found in the keychain or the caller lacks permission to read it.";
    let records = vec![record("errSecItemNotFound", description, "Security", "SecBase.h")];

    // WHEN
    let lines = format_records(&records, true, Styling::Plain);

    // THEN: Two entries; the second spans several indented lines
    assert_eq!(lines.len(), 2);
    let block: Vec<&str> = lines[1].split('\n').collect();
    assert!(block.len() > 1, "Description should wrap");
    assert!(block.iter().all(|line| line.starts_with("    ")));
    assert!(block.iter().all(|line| line.chars().count() <= 70));
    assert_eq!(
        block.iter().map(|line| line.trim()).collect::<Vec<_>>().join(" "),
        description
    );
}
