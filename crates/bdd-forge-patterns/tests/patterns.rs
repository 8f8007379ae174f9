//! Behavioural tests for the shared keyword utilities.

use bdd_forge_patterns::{Language, LineKind, StepKeyword, classify_line, strip_step_keyword};

const FEATURE: &str = concat!(
    "# language: ru\n",
    "@smoke\n",
    "Функционал: Тест\n",
    "  Описание функционала\n",
    "Сценарий: Вход\n",
    "  Дано Я на странице входа\n",
    "  Когда Я ввожу текст \"qa\" в поле \"Имя\"\n",
    "  И нажимаю \"Войти\"\n",
    "  Тогда окно открылось\n",
);

#[test]
fn classifier_and_stripper_agree_on_step_lines() {
    for line in FEATURE.lines() {
        let is_step = matches!(classify_line(line), LineKind::Step(_));
        assert_eq!(is_step, strip_step_keyword(line).is_some(), "line: {line}");
    }
}

#[test]
fn resolves_conjunction_roles_across_a_scenario() {
    let mut prev = None;
    let roles: Vec<_> = FEATURE
        .lines()
        .filter_map(StepKeyword::match_line)
        .map(|found| found.keyword.resolve(&mut prev))
        .collect();
    assert_eq!(
        roles,
        vec![
            StepKeyword::Given,
            StepKeyword::When,
            StepKeyword::When,
            StepKeyword::Then,
        ]
    );
}

#[test]
fn headers_render_what_the_classifier_accepts() {
    for language in Language::ALL {
        let feature = format!("{} Demo", language.feature_header());
        assert_eq!(
            classify_line(&feature),
            LineKind::Feature {
                name: "Demo",
                language
            }
        );
        let scenario = format!("{} Case", language.scenario_header());
        assert_eq!(
            classify_line(&scenario),
            LineKind::Scenario {
                name: "Case",
                language
            }
        );
    }
}
