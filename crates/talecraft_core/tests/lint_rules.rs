use talecraft_core::{
    lint_adventure, Adventure, Choice, LintKind, Place, ADVENTURE_SUBJECT_ID,
};

fn place(id: &str) -> Place {
    Place {
        id: id.to_string(),
        title: format!("Place {id}"),
        description: String::new(),
        is_start: false,
        is_ending: false,
        choices: Vec::new(),
    }
}

fn choice(target: &str) -> Choice {
    Choice {
        text: "Onward".to_string(),
        next_place_id: target.to_string(),
    }
}

fn adventure(places: Vec<Place>) -> Adventure {
    Adventure {
        id: "a1".to_string(),
        title: "Test".to_string(),
        places,
    }
}

#[test]
fn missing_start_place_yields_single_adventure_level_error() {
    let mut ending = place("p1");
    ending.is_ending = true;

    let errors = lint_adventure(&adventure(vec![ending]));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LintKind::Place);
    assert_eq!(errors[0].subject_id, ADVENTURE_SUBJECT_ID);
    assert_eq!(errors[0].message, "Adventure has no starting place");
}

#[test]
fn non_ending_place_without_choices_is_flagged() {
    let mut start = place("p1");
    start.is_start = true;

    let errors = lint_adventure(&adventure(vec![start]));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].concerns_place("p1"));
    assert_eq!(errors[0].message, "Place has no choices and is not an ending");
}

#[test]
fn ending_place_with_choices_is_flagged() {
    let mut ending = place("p1");
    ending.is_start = true;
    ending.is_ending = true;
    ending.choices.push(choice("p1"));

    let errors = lint_adventure(&adventure(vec![ending]));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].concerns_place("p1"));
    assert_eq!(errors[0].message, "Ending place should not have choices");
}

#[test]
fn place_level_rules_are_mutually_exclusive() {
    let mut ending_without_choices = place("p1");
    ending_without_choices.is_start = true;
    ending_without_choices.is_ending = true;

    let errors = lint_adventure(&adventure(vec![ending_without_choices]));
    assert!(errors.is_empty());
}

#[test]
fn unset_choice_is_keyed_by_place_id_and_position() {
    let mut start = place("p1");
    start.is_start = true;
    start.choices.push(choice("p2"));
    start.choices.push(choice(""));
    let mut target = place("p2");
    target.is_ending = true;

    let errors = lint_adventure(&adventure(vec![start, target]));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LintKind::Choice);
    assert_eq!(errors[0].subject_id, "p1-1");
    assert!(errors[0].concerns_choice("p1", 1));
    assert!(!errors[0].concerns_choice("p1", 0));
    assert_eq!(errors[0].message, "Choice has no target place selected");
}

#[test]
fn findings_are_grouped_by_place_with_adventure_error_last() {
    let mut first = place("p1");
    first.choices.push(choice(""));
    let second = place("p2");

    let errors = lint_adventure(&adventure(vec![first, second]));
    let subjects: Vec<&str> = errors
        .iter()
        .map(|error| error.subject_id.as_str())
        .collect();
    // p1 has a choice defect, p2 has a place defect, no start anywhere.
    assert_eq!(subjects, vec!["p1-0", "p2", ADVENTURE_SUBJECT_ID]);
}

#[test]
fn place_defect_precedes_that_places_choice_defects() {
    let mut ending = place("p1");
    ending.is_start = true;
    ending.is_ending = true;
    ending.choices.push(choice(""));

    let errors = lint_adventure(&adventure(vec![ending]));
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].subject_id, "p1");
    assert_eq!(errors[0].message, "Ending place should not have choices");
    assert_eq!(errors[1].subject_id, "p1-0");
}

#[test]
fn lint_is_deterministic_for_equal_input() {
    let mut first = place("p1");
    first.choices.push(choice(""));
    let snapshot = adventure(vec![first, place("p2")]);

    assert_eq!(lint_adventure(&snapshot), lint_adventure(&snapshot));
}

#[test]
fn dangling_choice_targets_are_not_checked() {
    let mut start = place("p1");
    start.is_start = true;
    start.choices.push(choice("no-such-place"));

    // The original rule set deliberately skips reference resolution.
    let errors = lint_adventure(&adventure(vec![start]));
    assert!(errors.is_empty());
}

#[test]
fn duplicate_start_places_are_not_checked() {
    let mut first = place("p1");
    first.is_start = true;
    first.choices.push(choice("p2"));
    let mut second = place("p2");
    second.is_start = true;
    second.is_ending = true;

    let errors = lint_adventure(&adventure(vec![first, second]));
    assert!(errors.is_empty());
}

#[test]
fn empty_adventure_reports_only_missing_start() {
    let errors = lint_adventure(&adventure(Vec::new()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].subject_id, ADVENTURE_SUBJECT_ID);
}

#[test]
fn draft_with_empty_id_lints_like_the_worked_example() {
    let mut start = place("p1");
    start.is_start = true;
    let snapshot = Adventure {
        id: String::new(),
        title: "Test".to_string(),
        places: vec![start],
    };

    let errors = lint_adventure(&snapshot);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LintKind::Place);
    assert_eq!(errors[0].subject_id, "p1");
    assert_eq!(errors[0].message, "Place has no choices and is not an ending");
}
