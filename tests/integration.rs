//! Integration tests for almanac-tui.
//!
//! These tests exercise the public API from outside the crate: the headless
//! pilot, the picker's keyboard and mouse flows, and the snapshot helpers.

use almanac_tui::calendar::{Selection, SelectionMode};
use almanac_tui::date::{DateFormat, DateValue};
use almanac_tui::event::Key;
use almanac_tui::geometry::Region;
use almanac_tui::picker::{CommittedValue, DatePickerConfig, FocusZone, PickerEvent, View};
use almanac_tui::render::{CellStyle, Strip};
use almanac_tui::testing::{render_to_string, strips_to_string, PickerPilot};
use almanac_tui::theme::Theme;
use almanac_tui::widgets::DateInput;

// ---------------------------------------------------------------------------
// Single selection
// ---------------------------------------------------------------------------

#[test]
fn test_typing_commits_a_date() {
    let mut pilot = pilot();
    pilot.type_text("18032022");
    assert_eq!(pilot.picker().text(), "18/03/2022");
    assert_eq!(
        pilot.take_events(),
        vec![PickerEvent::Changed(Some(CommittedValue::Single(date(
            2022, 3, 18
        ))))]
    );
}

#[test]
fn test_keyboard_pick() {
    let mut pilot = pilot();
    pilot.press_key(Key::Tab); // -> toggle
    pilot.press_key(Key::Enter); // open, focus lands on the grid
    pilot.press_key(Key::Down); // one week ahead: 18 -> 25
    pilot.press_key(Key::Enter); // commit
    assert_eq!(pilot.picker().text(), "25/03/2022");
    assert!(!pilot.picker().is_open());
    assert_eq!(
        pilot.take_events(),
        vec![
            PickerEvent::Opened,
            PickerEvent::Closed,
            PickerEvent::Changed(Some(CommittedValue::Single(date(2022, 3, 25)))),
        ]
    );
}

#[test]
fn test_mouse_pick() {
    let mut pilot = pilot();
    pilot.click(33, 0); // toggle button
    pilot.click(15, 5); // the 18th in the March 2022 grid
    assert_eq!(pilot.picker().text(), "18/03/2022");
    assert_eq!(
        pilot.take_events(),
        vec![
            PickerEvent::Opened,
            PickerEvent::Closed,
            PickerEvent::Changed(Some(CommittedValue::Single(date(2022, 3, 18)))),
        ]
    );
}

#[test]
fn test_reopening_shows_the_committed_date() {
    let mut pilot = pilot();
    pilot.press_key(Key::Tab);
    pilot.press_key(Key::Enter);
    pilot.press_key(Key::Down);
    pilot.press_key(Key::Enter);
    pilot.take_events();

    pilot.press_key(Key::Enter); // focus parked on the toggle; reopen
    assert_eq!(pilot.take_events(), vec![PickerEvent::Opened]);
    assert_eq!(pilot.picker().controller().title(), "March 2022");
    assert_eq!(pilot.picker().controller().focused_day(), 25);
}

#[test]
fn test_alternate_display_format() {
    let mut pilot = pilot_with(DatePickerConfig::default().with_format(DateFormat::YearMonthDay));
    assert_eq!(pilot.picker().text(), "yyyy/mm/dd");
    pilot.type_text("20220318");
    assert_eq!(pilot.picker().text(), "2022/03/18");
    assert_eq!(
        pilot.picker().value(),
        Some(CommittedValue::Single(date(2022, 3, 18)))
    );
}

// ---------------------------------------------------------------------------
// Range selection
// ---------------------------------------------------------------------------

#[test]
fn test_reversed_range_is_reordered() {
    let mut pilot = pilot_with(DatePickerConfig::new(SelectionMode::Range));
    pilot.type_text("1803202210032022");
    assert_eq!(pilot.picker().text(), "10/03/2022 - 18/03/2022");
    assert_eq!(
        pilot.take_events(),
        vec![PickerEvent::Changed(Some(CommittedValue::Range {
            start: date(2022, 3, 10),
            end: date(2022, 3, 18),
        }))]
    );
}

#[test]
fn test_range_picked_in_the_calendar() {
    let mut pilot = pilot_with(DatePickerConfig::new(SelectionMode::Range));
    pilot.click(33, 0);
    assert_eq!(pilot.take_events(), vec![PickerEvent::Opened]);

    pilot.click(12, 4); // the 10th: start endpoint, popup stays open
    assert_eq!(pilot.take_events(), vec![]);
    assert!(pilot.picker().is_open());
    assert_eq!(pilot.picker().value(), None);

    pilot.click(15, 5); // the 18th: completes the range
    assert_eq!(
        pilot.take_events(),
        vec![
            PickerEvent::Closed,
            PickerEvent::Changed(Some(CommittedValue::Range {
                start: date(2022, 3, 10),
                end: date(2022, 3, 18),
            })),
        ]
    );
    assert_eq!(pilot.picker().text(), "10/03/2022 - 18/03/2022");
}

#[test]
fn test_third_click_restarts_the_range() {
    let mut pilot = pilot_with(DatePickerConfig::new(SelectionMode::Range));
    pilot.click(33, 0);
    pilot.click(12, 4);
    pilot.click(15, 5);
    pilot.take_events();

    pilot.click(33, 0); // reopen
    pilot.click(18, 3); // the 5th: drops the old range, starts a new one
    assert_eq!(pilot.take_events(), vec![PickerEvent::Opened]);
    assert!(pilot.picker().is_open());
    assert_eq!(pilot.picker().value(), None);
    assert_eq!(pilot.picker().text(), "05/03/2022 - dd/mm/yyyy");

    pilot.click(12, 4); // the 10th completes the replacement
    assert_eq!(
        pilot.take_events(),
        vec![
            PickerEvent::Closed,
            PickerEvent::Changed(Some(CommittedValue::Range {
                start: date(2022, 3, 5),
                end: date(2022, 3, 10),
            })),
        ]
    );
}

// ---------------------------------------------------------------------------
// Min/max bounds
// ---------------------------------------------------------------------------

#[test]
fn test_out_of_bounds_clicks_are_inert() {
    let mut pilot = pilot_with(
        DatePickerConfig::default()
            .with_min_date("2022-03-10")
            .with_max_date("2022-03-25"),
    );
    pilot.click(33, 0);
    pilot.take_events();

    pilot.click(18, 3); // the 5th sits before the minimum
    assert_eq!(pilot.take_events(), vec![]);
    assert!(pilot.picker().is_open());
    assert_eq!(pilot.picker().value(), None);

    pilot.click(12, 4); // the 10th is the minimum itself
    assert_eq!(
        pilot.take_events(),
        vec![
            PickerEvent::Closed,
            PickerEvent::Changed(Some(CommittedValue::Single(date(2022, 3, 10)))),
        ]
    );
}

#[test]
fn test_out_of_bounds_entry_fails_on_blur() {
    let mut pilot = pilot_with(DatePickerConfig::default().with_min_date("2022-03-10"));
    pilot.type_text("05032022");
    assert_eq!(pilot.take_events(), vec![]);

    pilot.blur();
    assert_eq!(pilot.take_events(), vec![PickerEvent::Invalid]);
    assert!(pilot.picker().is_invalid());
    assert_eq!(pilot.picker().value(), None);
}

// ---------------------------------------------------------------------------
// Clearing
// ---------------------------------------------------------------------------

#[test]
fn test_backspacing_to_the_mask_clears() {
    let mut pilot = pilot_with(
        DatePickerConfig::default().with_initial_value(Selection::Single(Some(date(2022, 3, 18)))),
    );
    pilot.press_key(Key::End);
    for _ in 0..10 {
        pilot.press_key(Key::Backspace);
    }
    assert_eq!(pilot.picker().text(), "dd/mm/yyyy");
    assert_eq!(pilot.picker().value(), None);
    assert_eq!(
        pilot.take_events(),
        vec![PickerEvent::Cleared, PickerEvent::Changed(None)]
    );
}

// ---------------------------------------------------------------------------
// Validation feedback
// ---------------------------------------------------------------------------

#[test]
fn test_invalid_blur_shows_feedback() {
    let mut pilot = pilot();
    pilot.type_text("31022022"); // February 31st does not exist
    pilot.blur();
    assert_eq!(pilot.take_events(), vec![PickerEvent::Invalid]);
    assert!(pilot.picker().is_invalid());
    // The typed text stays in the field for correction.
    assert_eq!(pilot.picker().text(), "31/02/2022");

    let text = pilot.render_to_text();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[1], "Please enter a valid date");
}

#[test]
fn test_valid_entry_clears_the_feedback() {
    let mut pilot = pilot();
    pilot.type_text("31022022");
    pilot.blur();
    pilot.take_events();

    pilot.press_key(Key::Home);
    pilot.type_text("28022022");
    assert!(!pilot.picker().is_invalid());
    assert_eq!(pilot.picker().text(), "28/02/2022");
    // Overtyping "31" digit by digit passes through the valid 21st, so
    // live editing commits twice.
    assert_eq!(
        pilot.take_events(),
        vec![
            PickerEvent::Changed(Some(CommittedValue::Single(date(2022, 2, 21)))),
            PickerEvent::Changed(Some(CommittedValue::Single(date(2022, 2, 28)))),
        ]
    );

    let text = pilot.render_to_text();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[1], "");
}

// ---------------------------------------------------------------------------
// Popup behavior
// ---------------------------------------------------------------------------

#[test]
fn test_escape_closes_without_committing() {
    let mut pilot = pilot();
    pilot.press_key(Key::Tab);
    pilot.press_key(Key::Enter);
    pilot.press_key(Key::Down);
    pilot.take_events();

    pilot.press_key(Key::Escape);
    assert_eq!(pilot.take_events(), vec![PickerEvent::Closed]);
    assert!(!pilot.picker().is_open());
    assert_eq!(pilot.picker().value(), None);
    assert_eq!(pilot.picker().focus_zone(), FocusZone::Toggle);
}

#[test]
fn test_popup_flips_above_when_out_of_room() {
    let mut pilot = pilot().place(Region::new(0, 22, 40, 2), Region::new(0, 0, 80, 24));
    pilot.click(33, 22);
    assert!(pilot.picker().is_open());

    let text = pilot.render_to_text();
    let lines: Vec<&str> = text.split('\n').collect();
    // No room below row 22, so the panel opens above the field.
    assert!(lines[14].contains("March 2022"));
    assert!(lines[20].contains("27 28 29 30 31"));
    assert!(lines[22].starts_with("dd/mm/yyyy"));
}

#[test]
fn test_title_cycles_the_views() {
    let mut pilot = pilot();
    pilot.press_key(Key::Tab);
    pilot.press_key(Key::Enter);
    pilot.press_key(Key::Tab); // grid -> prev
    pilot.press_key(Key::Tab); // prev -> title

    pilot.press_key(Key::Enter);
    assert_eq!(pilot.picker().view(), View::Month);
    assert_eq!(pilot.picker().controller().title(), "2022");

    pilot.press_key(Key::Enter);
    assert_eq!(pilot.picker().view(), View::Year);
    assert_eq!(pilot.picker().controller().title(), "2020 - 2031");

    pilot.press_key(Key::Enter); // the year view narrows back to months
    assert_eq!(pilot.picker().view(), View::Month);

    pilot.press_key(Key::Tab); // title -> next
    pilot.press_key(Key::Tab); // next -> grid
    pilot.press_key(Key::Enter); // commit March
    assert_eq!(pilot.picker().view(), View::Day);
    assert_eq!(pilot.picker().controller().title(), "March 2022");
}

#[test]
fn test_header_arrows_change_the_month() {
    let mut pilot = pilot();
    pilot.press_key(Key::Tab);
    pilot.press_key(Key::Enter);
    pilot.press_key(Key::Tab); // grid -> prev

    pilot.press_key(Key::Enter);
    assert_eq!(pilot.picker().controller().title(), "February 2022");

    pilot.press_key(Key::Tab); // prev -> title
    pilot.press_key(Key::Tab); // title -> next
    pilot.press_key(Key::Enter);
    pilot.press_key(Key::Enter);
    assert_eq!(pilot.picker().controller().title(), "April 2022");
}

// ---------------------------------------------------------------------------
// Focus cycle
// ---------------------------------------------------------------------------

#[test]
fn test_tab_cycles_the_closed_picker() {
    let mut pilot = pilot();
    assert_eq!(pilot.picker().focus_zone(), FocusZone::Input);
    pilot.press_key(Key::Tab);
    assert_eq!(pilot.picker().focus_zone(), FocusZone::Toggle);
    pilot.press_key(Key::Tab);
    assert_eq!(pilot.picker().focus_zone(), FocusZone::Clear);
    pilot.press_key(Key::Tab);
    assert_eq!(pilot.picker().focus_zone(), FocusZone::Input);
    pilot.press_key(Key::BackTab);
    assert_eq!(pilot.picker().focus_zone(), FocusZone::Clear);
}

// ---------------------------------------------------------------------------
// Snapshot helpers
// ---------------------------------------------------------------------------

#[test]
fn test_render_to_string_shows_the_mask() {
    let input = DateInput::new(DateFormat::DayMonthYear, false);
    let output = render_to_string(&input, 20, 1);
    assert!(output.starts_with("dd/mm/yyyy"));

    let range = DateInput::new(DateFormat::DayMonthYear, true);
    let output = render_to_string(&range, 30, 1);
    assert!(output.starts_with("dd/mm/yyyy - dd/mm/yyyy"));
}

#[test]
fn test_strips_to_string() {
    let mut strip = Strip::new(0, 0);
    strip.push_str("Test", CellStyle::default());
    let output = strips_to_string(&[strip], 10, 1);
    assert!(output.starts_with("Test"));
}

#[test]
fn test_custom_theme_resolution() {
    let theme = Theme::parse("input { color: teal; }\ninput.invalid { color: #f7768e; }")
        .expect("sheet parses");
    assert_eq!(theme.resolve("input", &["invalid"]).fg.as_deref(), Some("#f7768e"));
    assert_eq!(theme.resolve("input", &[]).fg.as_deref(), Some("teal"));
}

// ---------------------------------------------------------------------------
// Full flow
// ---------------------------------------------------------------------------

#[test]
fn test_full_lifecycle() {
    let mut pilot = pilot_with(
        DatePickerConfig::default()
            .with_min_date("2022-01-01")
            .with_max_date("2022-12-31"),
    );

    // Type a date, then nudge it a week ahead from the calendar.
    pilot.type_text("18032022");
    pilot.press_key(Key::Tab);
    pilot.press_key(Key::Enter);
    pilot.press_key(Key::Down);
    pilot.press_key(Key::Enter);
    assert_eq!(pilot.picker().text(), "25/03/2022");
    assert_eq!(
        pilot.take_events(),
        vec![
            PickerEvent::Changed(Some(CommittedValue::Single(date(2022, 3, 18)))),
            PickerEvent::Opened,
            PickerEvent::Closed,
            PickerEvent::Changed(Some(CommittedValue::Single(date(2022, 3, 25)))),
        ]
    );

    // Clear from the keyboard.
    pilot.press_key(Key::Tab); // toggle -> clear
    pilot.press_key(Key::Enter);
    assert_eq!(
        pilot.take_events(),
        vec![PickerEvent::Cleared, PickerEvent::Changed(None)]
    );
    assert_eq!(pilot.picker().value(), None);
    assert_eq!(pilot.picker().text(), "dd/mm/yyyy");
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(year: i32, month: u32, day: u32) -> DateValue {
    DateValue::new(year, month, day).unwrap()
}

fn today() -> DateValue {
    date(2022, 3, 18)
}

fn pilot() -> PickerPilot {
    pilot_with(DatePickerConfig::default())
}

fn pilot_with(config: DatePickerConfig) -> PickerPilot {
    PickerPilot::with_today(config, today()).unwrap()
}
