//! Multi-line text escaping as the renderer applies it: collapse, then escape.

use mdshape::markdown::{collapse_blank_runs, escape_line_breaks};

struct Case {
    name: &'static str,
    text: &'static str,
    expected: &'static str,
}

const CASES: &[Case] = &[
    Case {
        name: "empty",
        text: "",
        expected: "",
    },
    Case {
        name: "not needed",
        text: "some longer text that is on one line",
        expected: "some longer text that is on one line",
    },
    Case {
        name: "one newline",
        text: "A\nB",
        expected: "A  \nB",
    },
    Case {
        name: "two newlines",
        text: "A\n\nB",
        expected: "A  \n\\\nB",
    },
    Case {
        name: "many newlines",
        text: "line 1\n\n\n\nline 2",
        expected: "line 1  \n\\\nline 2",
    },
    Case {
        name: "multiple empty lines",
        text: "line1\nline2\n\nline3\n\n\n\n\nline4",
        expected: "line1  \nline2  \n\\\nline3  \n\\\nline4",
    },
    Case {
        name: "empty line with a space",
        text: "line 1\n  \nline 2",
        expected: "line 1  \n\\\nline 2",
    },
    Case {
        name: "content has a space",
        text: "a\n\n b",
        expected: "a  \n\\\nb",
    },
    Case {
        name: "content is indented",
        text: "line 1\n  line 2\n\tline 3",
        expected: "line 1  \nline 2  \nline 3",
    },
];

#[test]
fn test_escape_multiline_cases() {
    for case in CASES {
        let collapsed = collapse_blank_runs(case.text.as_bytes());
        let output = escape_line_breaks(&collapsed);

        assert_eq!(
            String::from_utf8_lossy(&output),
            case.expected,
            "case {:?}",
            case.name
        );
        assert_eq!(
            mdshape::escape_multiline(case.text),
            case.expected,
            "case {:?} through escape_multiline",
            case.name
        );
    }
}

#[test]
fn test_existing_backslashes_are_kept() {
    assert_eq!(mdshape::escape_multiline("a\\b\nc"), "a\\b  \nc");
}

#[test]
fn test_invalid_utf8_passes_through() {
    let input = b"\xff\xfe \n\n\n \xc3";
    let output = escape_line_breaks(&collapse_blank_runs(input));
    assert_eq!(output, b"\xff\xfe  \n\\\n\xc3");
}
