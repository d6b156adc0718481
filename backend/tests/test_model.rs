//! Tests for Model construction and override application

use service_cost_core_rs::{CostFactor, GradeError, GradeTable, Model, DEFAULT_TIME_RATE};

fn grades_of(model: &Model) -> Vec<(String, String)> {
    model
        .cost_factors()
        .iter()
        .map(|f| (f.name.clone(), f.grade.clone()))
        .collect()
}

#[test]
fn test_model_defaults() {
    let model = Model::with_defaults("standard");

    assert_eq!(model.id(), "standard");
    assert_eq!(model.time_rate(), DEFAULT_TIME_RATE);
    assert_eq!(model.time_rate(), 300.0);
    assert_eq!(
        grades_of(&model),
        vec![
            ("Risk".to_string(), "low".to_string()),
            ("Inconvenience".to_string(), "high".to_string()),
        ]
    );
}

#[test]
fn test_construction_overrides_replace_seed_entries() {
    let model = Model::new(
        "model1234",
        Some(500.0),
        vec![
            CostFactor::new("Risk", "high"),
            CostFactor::new("Inconvenience", "medium"),
        ],
    );

    assert_eq!(model.time_rate(), 500.0);
    assert_eq!(
        grades_of(&model),
        vec![
            ("Risk".to_string(), "high".to_string()),
            ("Inconvenience".to_string(), "medium".to_string()),
        ]
    );
}

#[test]
fn test_construction_overrides_append_new_names_after_seed() {
    let model = Model::new(
        "site-visit",
        None,
        vec![
            CostFactor::new("Travel", "low"),
            CostFactor::new("Risk", "none"),
        ],
    );

    let names: Vec<&str> = model.cost_factors().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Risk", "Inconvenience", "Travel"]);
    assert_eq!(model.cost_factors().get("Risk").unwrap().grade, "none");
}

#[test]
fn test_construction_overrides_apply_in_order() {
    let model = Model::new(
        "m",
        None,
        vec![CostFactor::new("Risk", "high"), CostFactor::new("Risk", "medium")],
    );

    assert_eq!(model.cost_factors().len(), 2);
    assert_eq!(model.cost_factors().get("Risk").unwrap().grade, "medium");
}

#[test]
fn test_runtime_override_replaces_in_place_and_changes_multiplier() {
    let mut model = Model::with_defaults("standard");
    let len_before = model.cost_factors().len();

    model.add_or_update_cost_factor(CostFactor::new("Risk", "medium"));

    assert_eq!(model.cost_factors().len(), len_before);
    assert_eq!(model.cost_factors().position("Risk"), Some(0));
    let multiplier = model.cumulative_cost_factor(&GradeTable).unwrap();
    assert_eq!(multiplier, 1.3 * 2.0);
}

#[test]
fn test_runtime_and_construction_overrides_agree() {
    let built = Model::new("m", None, vec![CostFactor::new("Risk", "medium")]);

    let mut patched = Model::with_defaults("m");
    patched.add_or_update_cost_factor(CostFactor::new("Risk", "medium"));

    assert_eq!(built, patched);
}

#[test]
fn test_cumulative_cost_factor_propagates_unknown_grade() {
    let mut model = Model::with_defaults("m");
    model.add_or_update_cost_factor(CostFactor::new("Inconvenience", "extreme"));

    assert_eq!(
        model.cumulative_cost_factor(&GradeTable),
        Err(GradeError::UnknownGrade("extreme".to_string()))
    );
}
