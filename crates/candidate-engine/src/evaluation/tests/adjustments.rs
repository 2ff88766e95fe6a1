use crate::evaluation::adjust::{AdjustmentKind, ContextualAdjuster};
use crate::evaluation::features::EvaluationFeatures;

fn neutral_features() -> EvaluationFeatures {
    EvaluationFeatures {
        gcc_experience_years: 0.0,
        required_skill_count: 3,
        required_skill_match_rate: 0.8,
        experience_over_max_years: 0.0,
        salary_position: 0.7,
        years_since_graduation: None,
        short_stint_count: 0,
        has_career_progression: false,
        industry_continuity_count: 0,
    }
}

fn fired_ids(adjuster: &ContextualAdjuster, features: &EvaluationFeatures) -> Vec<String> {
    let (_, records) = adjuster.apply(70, features);
    records.into_iter().map(|r| r.rule_id).collect()
}

#[test]
fn neutral_features_fire_no_rules() {
    let adjuster = ContextualAdjuster::default();
    let (adjusted, records) = adjuster.apply(70, &neutral_features());
    assert_eq!(adjusted, 70);
    assert!(records.is_empty());
}

#[test]
fn gcc_bonuses_stack_at_five_years() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();
    features.gcc_experience_years = 6.0;

    let (adjusted, records) = adjuster.apply(70, &features);

    let ids: Vec<&str> = records.iter().map(|r| r.rule_id.as_str()).collect();
    assert!(ids.contains(&"GCC_EXP_BONUS"));
    assert!(ids.contains(&"GCC_EXP_MAJOR_BONUS"));
    assert_eq!(adjusted, 83);
}

#[test]
fn one_year_gcc_earns_only_the_minor_bonus() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();
    features.gcc_experience_years = 1.0;

    let ids = fired_ids(&adjuster, &features);
    assert!(ids.contains(&"GCC_EXP_BONUS".to_string()));
    assert!(!ids.contains(&"GCC_EXP_MAJOR_BONUS".to_string()));
}

#[test]
fn perfect_skill_match_bonus_requires_required_skills() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();
    features.required_skill_match_rate = 1.0;

    assert!(fired_ids(&adjuster, &features).contains(&"PERFECT_SKILLS".to_string()));

    features.required_skill_count = 0;
    assert!(!fired_ids(&adjuster, &features).contains(&"PERFECT_SKILLS".to_string()));
}

#[test]
fn critical_skill_gap_penalty_fires_below_sixty_percent() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();
    features.required_skill_match_rate = 0.5;

    let (adjusted, records) = adjuster.apply(70, &features);
    let gap = records
        .iter()
        .find(|r| r.rule_id == "CRITICAL_SKILL_GAP")
        .expect("gap penalty fired");
    assert_eq!(gap.kind, AdjustmentKind::Penalty);
    assert_eq!(adjusted, 62);
    assert_eq!(
        gap.triggered_by["required_skill_match_rate"],
        "0.50".to_string()
    );
}

#[test]
fn overqualification_bands_are_disjoint() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();

    features.experience_over_max_years = 1.5;
    let ids = fired_ids(&adjuster, &features);
    assert!(ids.contains(&"SLIGHT_OVERQUALIFIED_BONUS".to_string()));
    assert!(!ids.contains(&"SEVERE_OVERQUALIFIED_PENALTY".to_string()));

    features.experience_over_max_years = 6.0;
    let ids = fired_ids(&adjuster, &features);
    assert!(!ids.contains(&"SLIGHT_OVERQUALIFIED_BONUS".to_string()));
    assert!(ids.contains(&"SEVERE_OVERQUALIFIED_PENALTY".to_string()));
}

#[test]
fn salary_sweet_spot_and_flexibility_are_mutually_exclusive() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();

    features.salary_position = 0.50;
    let ids = fired_ids(&adjuster, &features);
    assert!(ids.contains(&"SALARY_SWEET_SPOT".to_string()));
    assert!(!ids.contains(&"SALARY_FLEXIBILITY".to_string()));

    features.salary_position = 0.30;
    let ids = fired_ids(&adjuster, &features);
    assert!(!ids.contains(&"SALARY_SWEET_SPOT".to_string()));
    assert!(ids.contains(&"SALARY_FLEXIBILITY".to_string()));
}

#[test]
fn recent_graduation_bonus_ignores_unknown_years() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();

    assert!(!fired_ids(&adjuster, &features).contains(&"RECENT_EDUCATION".to_string()));

    features.years_since_graduation = Some(2.0);
    assert!(fired_ids(&adjuster, &features).contains(&"RECENT_EDUCATION".to_string()));

    features.years_since_graduation = Some(7.0);
    assert!(!fired_ids(&adjuster, &features).contains(&"RECENT_EDUCATION".to_string()));
}

#[test]
fn job_hopping_penalty_needs_three_short_stints() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();

    features.short_stint_count = 2;
    assert!(!fired_ids(&adjuster, &features).contains(&"JOB_HOPPING".to_string()));

    features.short_stint_count = 3;
    assert!(fired_ids(&adjuster, &features).contains(&"JOB_HOPPING".to_string()));
}

#[test]
fn career_and_industry_bonuses_fire_together() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();
    features.has_career_progression = true;
    features.industry_continuity_count = 2;

    let (adjusted, records) = adjuster.apply(70, &features);
    assert_eq!(records.len(), 2);
    assert_eq!(adjusted, 76);
}

#[test]
fn adjusted_score_is_clamped_to_bounds() {
    let adjuster = ContextualAdjuster::default();

    let mut generous = neutral_features();
    generous.gcc_experience_years = 10.0;
    generous.required_skill_match_rate = 1.0;
    generous.has_career_progression = true;
    generous.industry_continuity_count = 3;
    let (top, _) = adjuster.apply(98, &generous);
    assert_eq!(top, 100);

    let mut harsh = neutral_features();
    harsh.required_skill_match_rate = 0.1;
    harsh.short_stint_count = 4;
    harsh.experience_over_max_years = 8.0;
    let (bottom, _) = adjuster.apply(5, &harsh);
    assert_eq!(bottom, 0);
}

#[test]
fn records_are_ordered_highest_priority_first() {
    let adjuster = ContextualAdjuster::default();
    let mut features = neutral_features();
    features.required_skill_match_rate = 0.5; // priority 20
    features.gcc_experience_years = 1.0; // priority 10
    features.salary_position = 0.30; // priority 6

    let (_, records) = adjuster.apply(70, &features);
    let ids: Vec<&str> = records.iter().map(|r| r.rule_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["CRITICAL_SKILL_GAP", "GCC_EXP_BONUS", "SALARY_FLEXIBILITY"]
    );
}
