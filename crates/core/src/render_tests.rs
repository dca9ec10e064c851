use super::*;

fn configured(format: &str, repeat: bool, countdown: bool) -> Timer {
    let mut timer = Timer::new();
    timer.setup(format, repeat, countdown).unwrap();
    timer
}

fn running(format: &str, countdown: bool) -> Timer {
    let mut timer = configured(format, true, countdown);
    timer.start();
    timer.tick(0);
    timer
}

#[test]
fn status_reports_missing_setup() {
    let timer = Timer::new();
    assert_eq!(status(&timer), "Currently stopped and not properly set up.");
}

#[test]
fn status_reports_configured_state() {
    let timer = configured("A:10", true, true);
    assert_eq!(status(&timer), "Currently stopped.");
}

#[test]
fn status_previews_pending_actions() {
    let mut timer = configured("A:10", true, true);
    timer.start();
    assert_eq!(
        status(&timer),
        "Currently stopped. Will soon start running."
    );

    timer.tick(0);
    assert_eq!(status(&timer), "Currently running.");

    timer.pause();
    assert_eq!(status(&timer), "Currently running. Will soon pause.");

    timer.tick(0);
    timer.resume();
    timer.tick(0);
    timer.stop();
    assert_eq!(status(&timer), "Currently running. Will soon stop.");
}

#[test]
fn time_on_stopped_timer_is_fixed_message() {
    let timer = configured("A:10", true, true);
    assert_eq!(time(&timer, false), "Currently not running.");
    assert_eq!(time(&timer, true), "Currently not running.");
}

#[test]
fn time_shows_remaining_in_countdown_mode() {
    let mut timer = running("Focus:10", true);
    timer.tick(65);
    assert_eq!(
        time(&timer, false),
        "**On Focus period** \nRemaining:\t00:08:55"
    );
}

#[test]
fn time_remaining_at_eighty_five_seconds() {
    let mut timer = running("Focus:10", true);
    timer.tick(85);
    assert_eq!(
        time(&timer, false),
        "**On Focus period** \nRemaining:\t00:08:35"
    );
}

#[test]
fn time_shows_elapsed_when_countdown_is_off() {
    let mut timer = running("Focus:10", false);
    timer.tick(65);
    assert_eq!(
        time(&timer, false),
        "**On Focus period** \nElapsed:\t00:01:05"
    );
}

#[test]
fn extended_time_appends_pluralized_duration() {
    let timer = running("Focus:10", true);
    assert_eq!(
        time(&timer, true),
        "**On Focus period** (Duration: 10 minutes)\nRemaining:\t00:10:00"
    );

    let timer = running("Blink:1", true);
    assert_eq!(
        time(&timer, true),
        "**On Blink period** (Duration: 1 minute)\nRemaining:\t00:01:00"
    );
}

#[test]
fn paused_timer_gets_a_marker() {
    let mut timer = running("Focus:10", true);
    timer.tick(30);
    timer.pause();
    timer.tick(0);
    assert_eq!(
        time(&timer, false),
        "**On Focus period** \nRemaining:\t00:09:30\t**(PAUSED)**"
    );
}

#[test]
fn list_periods_marks_the_current_period() {
    let mut timer = running("A:10,B:5", true);
    timer.tick(0);
    assert_eq!(
        list_periods(&timer),
        "**Period list (Loop is ON):**\nA: 10 minutes\t-> _You are here!_\nB: 5 minutes"
    );
}

#[test]
fn list_periods_without_position_has_no_marker() {
    let timer = configured("A:10,B:5", false, true);
    assert_eq!(
        list_periods(&timer),
        "**Period list (Loop is OFF):**\nA: 10 minutes\nB: 5 minutes"
    );
}

#[test]
fn pluralize_handles_singular_and_plural() {
    assert_eq!(pluralize(0, "minute"), "0 minutes");
    assert_eq!(pluralize(1, "minute"), "1 minute");
    assert_eq!(pluralize(25, "minute"), "25 minutes");
}

#[test]
fn hms_formats_hours_minutes_seconds() {
    assert_eq!(hms(0), "00:00:00");
    assert_eq!(hms(59), "00:00:59");
    assert_eq!(hms(61), "00:01:01");
    assert_eq!(hms(3661), "01:01:01");
    assert_eq!(hms(360_000), "100:00:00");
}
