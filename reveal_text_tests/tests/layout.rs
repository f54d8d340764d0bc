// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout engine tests over the fixed-metrics test font.
//!
//! `FixedFont::standard()` advances 10 units per character, measures 16
//! units tall and spaces empty lines 20 units apart, so expected positions
//! are small integers.

use peniko::color::palette;
use peniko::kurbo::{Point, Rect};
use reveal_text::{BuildError, FormatError, RunBuilder};
use reveal_text_dev::FixedFont;

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 200.0, 100.0)
}

fn builder() -> RunBuilder<FixedFont> {
    RunBuilder::new(FixedFont::standard())
}

#[test]
fn plain_text_round_trip() {
    let mut builder = builder();
    let runs = builder.build("plain text", bounds()).unwrap();

    assert_eq!(runs.len(), 1);
    let run = &runs[0];
    assert_eq!(run.text(), "plain text");
    assert_eq!(run.position(), Point::ZERO);
    assert_eq!(run.color(), palette::css::WHITE);
    assert_eq!(run.seconds_per_char(), 0.0);
    assert!(run.is_complete(), "speed 0 text is instantly visible");
}

#[test]
fn runs_start_at_the_bounds_origin() {
    let mut builder = builder();
    let runs = builder
        .build("hi", Rect::new(5.0, 7.0, 205.0, 107.0))
        .unwrap();
    assert_eq!(runs[0].position(), Point::new(5.0, 7.0));
}

#[test]
fn directives_split_runs_and_change_style() {
    let mut builder = builder();
    let runs = builder.build("{c:red}Hi {c:blue}there", bounds()).unwrap();

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].text(), "Hi ");
    assert_eq!(runs[0].color(), palette::css::RED);
    assert_eq!(runs[0].position(), Point::ZERO);
    assert_eq!(runs[1].text(), "there");
    assert_eq!(runs[1].color(), palette::css::BLUE);
    assert_eq!(runs[1].position(), Point::new(30.0, 0.0));
}

#[test]
fn consecutive_directives_share_one_run() {
    let mut builder = builder();
    let runs = builder.build("{c:Red}{tpc:1}Hi", bounds()).unwrap();

    assert_eq!(runs.len(), 1, "no empty run between adjacent directives");
    let run = &runs[0];
    assert_eq!(run.text(), "Hi");
    assert_eq!(run.color(), palette::css::RED);
    assert_eq!(run.seconds_per_char(), 1.0);
    assert!(!run.is_complete());
}

#[test]
fn escaped_delimiters_are_literal() {
    let mut builder = builder();
    let runs = builder.build("a\\{b", bounds()).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text(), "a{b");

    let runs = builder.build("\\{c:red\\}", bounds()).unwrap();
    assert_eq!(runs[0].text(), "{c:red}");
    assert_eq!(runs[0].color(), palette::css::WHITE, "no directive applied");

    let runs = builder.build("\\\\", bounds()).unwrap();
    assert_eq!(runs[0].text(), "\\");
}

#[test]
fn trailing_escape_fails() {
    let mut builder = builder();
    let err = builder.build("a\\", bounds()).unwrap_err();
    assert!(
        matches!(err, BuildError::UnrecognizedEscape { line: 1, column: 2 }),
        "got {err:?}"
    );
}

#[test]
fn unknown_escape_fails() {
    let mut builder = builder();
    let err = builder.build("ab\ncd\\e", bounds()).unwrap_err();
    assert!(
        matches!(err, BuildError::UnrecognizedEscape { line: 2, column: 3 }),
        "got {err:?}"
    );
}

#[test]
fn lines_advance_by_run_height() {
    let mut builder = builder();
    let runs = builder.build("ab\ncd", bounds()).unwrap();
    assert_eq!(runs[0].position(), Point::ZERO);
    assert_eq!(runs[1].position(), Point::new(0.0, 16.0));
}

#[test]
fn empty_lines_advance_by_line_spacing() {
    let mut builder = builder();
    let runs = builder.build("ab\n\ncd", bounds()).unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[1].position(), Point::new(0.0, 36.0));
}

#[test]
fn directive_only_lines_advance_by_line_spacing() {
    let mut builder = builder();
    let runs = builder.build("{c:red}\nx", bounds()).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text(), "x");
    assert_eq!(runs[0].position(), Point::new(0.0, 20.0));
    assert_eq!(runs[0].color(), palette::css::RED, "state crosses lines");
}

#[test]
fn line_endings_are_normalized() {
    let mut builder = builder();
    for text in ["a\r\nb", "a\rb"] {
        let runs = builder.build(text, bounds()).unwrap();
        assert_eq!(runs.len(), 2, "{text:?}");
        assert_eq!(runs[1].position(), Point::new(0.0, 16.0));
    }
}

#[test]
fn center_alignment_shifts_by_half_the_free_space() {
    let mut builder = builder();
    let runs = builder.build("{a:centre}hi", bounds()).unwrap();
    // Line width 20 within bounds width 200.
    assert_eq!(runs[0].position(), Point::new(90.0, 0.0));
}

#[test]
fn right_alignment_shifts_by_the_free_space() {
    let mut builder = builder();
    let runs = builder.build("{a:right}hi", bounds()).unwrap();
    assert_eq!(runs[0].position(), Point::new(180.0, 0.0));
}

#[test]
fn alignment_applies_to_the_whole_line() {
    // The directive appears after the text, but alignment is a per-line
    // property resolved when the line is finished.
    let mut builder = builder();
    let runs = builder.build("ab{a:right}", bounds()).unwrap();
    assert_eq!(runs[0].position(), Point::new(180.0, 0.0));
}

#[test]
fn alignment_shifts_every_run_on_the_line() {
    let mut builder = builder();
    let runs = builder
        .build("{a:centre}{c:red}ab{c:blue}cd", bounds())
        .unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].position(), Point::new(80.0, 0.0));
    assert_eq!(runs[1].position(), Point::new(100.0, 0.0));
}

#[test]
fn alignment_persists_across_lines() {
    let mut builder = builder();
    let runs = builder.build("{a:right}ab\ncd", bounds()).unwrap();
    assert_eq!(runs[0].position(), Point::new(180.0, 0.0));
    assert_eq!(runs[1].position(), Point::new(180.0, 16.0));
}

#[test]
fn font_directive_switches_measurement() {
    let big = FixedFont {
        advance: 20.0,
        height: 32.0,
        spacing: 40.0,
    };
    let mut builder = builder();
    builder.register_font("big", big).unwrap();

    let runs = builder.build("ab{f:big}cd\ne", bounds()).unwrap();
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0].font(), &FixedFont::standard());
    assert_eq!(runs[1].font(), &big);
    assert_eq!(runs[1].position(), Point::new(20.0, 0.0));
    // The taller font dictates the first line's height.
    assert_eq!(runs[2].position(), Point::new(0.0, 32.0));
}

#[test]
fn font_names_are_case_insensitive() {
    let mut builder = builder();
    builder.register_font("Big", FixedFont::standard()).unwrap();
    assert!(builder.build("{f:BIG}x", bounds()).is_ok());

    let err = builder
        .register_font("big", FixedFont::standard())
        .unwrap_err();
    assert!(matches!(err, BuildError::DuplicateFontName(name) if name == "big"));
}

#[test]
fn unregistered_font_reference_fails() {
    let mut builder = builder();
    let err = builder.build("{f:nope}x", bounds()).unwrap_err();
    assert!(matches!(err, BuildError::UnregisteredFontReference(name) if name == "nope"));
}

#[test]
fn unknown_directive_fails_the_build() {
    let mut builder = builder();
    let err = builder.build("{sparkle:on}x", bounds()).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Format(FormatError::UnknownDirective(_))
    ));
}

#[test]
fn state_resets_between_builds_by_default() {
    let mut builder = builder();
    builder.build("{c:red}{tpc:1}x", bounds()).unwrap();
    let runs = builder.build("y", bounds()).unwrap();
    assert_eq!(runs[0].color(), palette::css::WHITE);
    assert_eq!(runs[0].seconds_per_char(), 0.0);
}

#[test]
fn preserved_state_seeds_the_next_build() {
    let mut builder = builder();
    builder.set_preserve_state(true);
    builder.build("{c:red}{tpc:2}x", bounds()).unwrap();

    let runs = builder.build("y", bounds()).unwrap();
    assert_eq!(runs[0].color(), palette::css::RED);
    assert_eq!(runs[0].seconds_per_char(), 2.0);
}

#[test]
fn failed_builds_commit_nothing() {
    let mut builder = builder();
    builder.set_preserve_state(true);
    builder.build("{c:red}ok", bounds()).unwrap();

    // The color changes before the failure, but the failed call must not
    // leak its partial state into the next one.
    assert!(builder.build("{c:blue}{f:nope}x", bounds()).is_err());
    let runs = builder.build("z", bounds()).unwrap();
    assert_eq!(runs[0].color(), palette::css::RED);
}

#[test]
fn empty_input_yields_no_runs() {
    let mut builder = builder();
    assert!(builder.build("", bounds()).unwrap().is_empty());
}
