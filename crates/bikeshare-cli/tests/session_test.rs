use bikeshare_testing::{TestWorld, fixtures};
use bikeshare_types::City;

#[test]
fn test_full_report_for_chicago() {
    let world = TestWorld::new().with_all_cities();
    let result = world
        .run_script(&["chicago", "all", "all", "no", "no"])
        .expect("Failed to run bikeshare");

    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    assert!(out.contains("your selection: 'chicago', month:all, day_of_week:all"));
    assert!(out.contains("the most common month is 3 (march)"));
    assert!(out.contains("the most common day-of-week is monday"));
    assert!(out.contains("the most common start-hour is 8"));
    assert!(out.contains("the most commonly used start station is 'Clark St & Randolph St'"));
    assert!(out.contains("the most commonly used end station is 'Canal St & Adams St'"));
    assert!(out.contains("trip is 'from Clark St & Randolph St to Canal St & Adams St'"));
    assert!(out.contains("the travel time ranges from 5.0[min] to 30.0[min]"));
    assert!(out.contains("the mean travel time is 16.0[min]"));
    assert!(out.contains("   \\ Subscriber    4"));
    assert!(out.contains("   \\ Male      3"));
    assert!(out.contains("the earliest year of birth is 1961"));
    assert!(out.contains("the most recent year of birth is 1990"));
    assert!(out.contains("the most common year of birth is 1990"));
}

#[test]
fn test_washington_has_no_demographics() {
    let world = TestWorld::new().with_all_cities();
    let result = world
        .run_script(&["3", "1", "1", "2", "no"])
        .expect("Failed to run bikeshare");

    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    assert!(out.contains("your selection: 'washington', month:all, day_of_week:all"));
    assert!(out.contains("the most common month is 3 (march)"));
    assert!(out.contains("the travel time ranges from 6.0[min] to 10.6[min]"));
    assert!(out.contains("the mean travel time is 8.3[min]"));
    assert!(out.contains("gender data is unavailable for this city"));
    assert!(out.contains("birth year data is unavailable for this city"));
}

#[test]
fn test_filters_with_no_matching_trips() {
    let world = TestWorld::new().with_all_cities();
    let result = world
        .run_script(&["new york city", "february", "all", "no", "no"])
        .expect("Failed to run bikeshare");

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result
            .stdout()
            .matches("no trips match the selected filters")
            .count(),
        4
    );
}

#[test]
fn test_raw_data_paging() {
    let world = TestWorld::new().with_city_data(City::Chicago, &fixtures::generated(12));
    let result = world
        .run_script(&["chicago", "march", "all", "yes", "yes", "no"])
        .expect("Failed to run bikeshare");

    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    assert!(out.contains("station-009"));
    assert!(!out.contains("station-011"));
    assert!(out.contains("(current position = 10 / data length = 12 **"));
}

#[test]
fn test_restart_then_finish() {
    let world = TestWorld::new().with_all_cities();
    let result = world
        .run_script(&[
            "chicago", "all", "all", "no", "Yes", "washington", "june", "all", "no", "no",
        ])
        .expect("Failed to run bikeshare");

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout().matches("Would you like to restart?").count(),
        2
    );
    assert!(
        result
            .stdout()
            .contains("your selection: 'washington', month:june, day_of_week:all")
    );
}

#[test]
fn test_missing_data_file_is_fatal() {
    let world = TestWorld::new().with_city(City::Chicago);
    let result = world
        .run_script(&["washington", "all", "all"])
        .expect("Failed to run bikeshare");

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Error: Failed to load trip data for washington"));
}
