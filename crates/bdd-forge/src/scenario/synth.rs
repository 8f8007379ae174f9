//! Step text for each intent.

use bdd_forge_patterns::{Language, StepKeyword};
use tracing::debug;

use super::{Action, Assertion, Intent, WaitCondition};
use crate::error::{Error, Result};
use crate::feature::{FeatureDocument, ScenarioBlock};

const ACTIVE_WINDOW: &str = "открыто активное окно";

/// Build a single-scenario Russian document for `intent`.
///
/// The result renders with a `# language: ru` pragma and parses back into an
/// equal document.
///
/// # Errors
///
/// Returns [`Error::Validation`] when a required parameter is missing or
/// blank, a parameter spans several lines, an `input`/`select` action has no
/// value, a `value`/`count` assertion has no expected value, a `count`
/// expectation is not a non-negative integer, or a timeout or row limit is
/// zero.
///
/// ```
/// use bdd_forge::scenario::{Action, Intent, synthesize};
///
/// let doc = synthesize(&Intent::PerformAction {
///     action: Action::Click,
///     element: "Записать".into(),
///     value: None,
/// })?;
/// assert!(doc.to_string().starts_with("# language: ru\n"));
/// # Ok::<(), bdd_forge::Error>(())
/// ```
pub fn synthesize(intent: &Intent) -> Result<FeatureDocument> {
    let mut steps = Steps::default();
    let (feature, scenario) = match intent {
        Intent::ExploreForm { form } => {
            let form = optional("form", form.as_deref())?;
            steps.given(form.map_or_else(
                || ACTIVE_WINDOW.to_owned(),
                |form| format!("открыта форма \"{form}\""),
            ));
            steps.when("я анализирую элементы текущей формы");
            steps.then("я вывожу структуру формы в журнал");
            let scenario = form.map_or_else(
                || "Анализ активной формы".to_owned(),
                |form| format!("Анализ формы \"{form}\""),
            );
            ("Исследование формы", scenario)
        }
        Intent::ListElements { element_type } => {
            steps.given(ACTIVE_WINDOW);
            let kind = optional("element type", element_type.as_deref())?;
            steps.when(kind.map_or_else(
                || "я получаю список элементов формы".to_owned(),
                |kind| format!("я получаю список элементов формы с типом \"{kind}\""),
            ));
            steps.then("я вывожу список элементов в журнал");
            ("Список элементов формы", "Получение списка элементов".to_owned())
        }
        Intent::PerformAction {
            action,
            element,
            value,
        } => {
            let element = required("element", element)?;
            let value = optional("value", value.as_deref())?;
            steps.given(ACTIVE_WINDOW);
            steps.when(action_step(*action, element, value)?);
            steps.then("действие выполнено без ошибок");
            (
                "Действие с элементом формы",
                format!("Действие {action} над элементом \"{element}\""),
            )
        }
        Intent::TakeScreenshot { name } => {
            steps.given(ACTIVE_WINDOW);
            let name = optional("name", name.as_deref())?;
            steps.when(name.map_or_else(
                || "я делаю снимок экрана".to_owned(),
                |name| format!("я делаю снимок экрана с именем \"{name}\""),
            ));
            steps.then("снимок экрана сохранён");
            ("Снимок экрана", "Сохранение снимка экрана".to_owned())
        }
        Intent::WaitForCondition {
            condition,
            element,
            timeout_secs,
        } => {
            let element = required("element", element)?;
            if *timeout_secs == 0 {
                return Err(Error::validation("timeout must be at least one second"));
            }
            steps.given(ACTIVE_WINDOW);
            steps.when(format!(
                "я жду {} элемента \"{element}\" в течение {timeout_secs} секунд",
                condition_noun(*condition)
            ));
            steps.then("ожидание завершено успешно");
            (
                "Ожидание состояния элемента",
                format!("Ожидание {condition} для элемента \"{element}\""),
            )
        }
        Intent::ExtractTableData { table, max_rows } => {
            let table = required("table", table)?;
            steps.given(ACTIVE_WINDOW);
            steps.when(format!("я читаю данные таблицы \"{table}\""));
            match max_rows {
                Some(0) => return Err(Error::validation("max rows must be positive")),
                Some(limit) => steps.and(format!("я ограничиваю выборку {limit} строками")),
                None => {}
            }
            steps.then("я вывожу данные таблицы в журнал");
            ("Чтение данных таблицы", format!("Чтение таблицы \"{table}\""))
        }
        Intent::StartRecording { output } => {
            steps.given(ACTIVE_WINDOW);
            let output = optional("output", output.as_deref())?;
            steps.when(output.map_or_else(
                || "я начинаю запись действий пользователя".to_owned(),
                |output| format!("я начинаю запись действий пользователя в файл \"{output}\""),
            ));
            steps.then("запись действий запущена");
            ("Запись действий пользователя", "Запуск записи".to_owned())
        }
        Intent::AssertCondition {
            assertion,
            element,
            expected,
        } => {
            let element = required("element", element)?;
            let expected = optional("expected value", expected.as_deref())?;
            steps.given(ACTIVE_WINDOW);
            steps.then(assertion_step(*assertion, element, expected)?);
            (
                "Проверка состояния элемента",
                format!("Проверка {assertion} для элемента \"{element}\""),
            )
        }
        Intent::Navigate { section, command } => {
            let section = required("section", section)?;
            let command = optional("command", command.as_deref())?;
            steps.given("открыто главное окно");
            steps.when(format!("я перехожу в раздел \"{section}\""));
            if let Some(command) = command {
                steps.and(format!("я выполняю команду \"{command}\""));
            }
            steps.then("переход выполнен успешно");
            ("Навигация по приложению", format!("Переход в раздел \"{section}\""))
        }
    };
    debug!(
        intent = intent.name(),
        steps = steps.0.len(),
        "synthesized scenario"
    );
    Ok(FeatureDocument::new(
        feature,
        Language::Russian,
        vec![ScenarioBlock::new(scenario, steps.0)],
    ))
}

fn action_step(action: Action, element: &str, value: Option<&str>) -> Result<String> {
    let needs_value = || {
        value.ok_or_else(|| Error::validation(format!("action '{action}' requires a value")))
    };
    Ok(match action {
        Action::Click => format!("я нажимаю на элемент \"{element}\""),
        Action::DoubleClick => format!("я дважды нажимаю на элемент \"{element}\""),
        Action::Input => format!("я ввожу текст \"{}\" в поле \"{element}\"", needs_value()?),
        Action::Select => format!(
            "я выбираю значение \"{}\" в поле \"{element}\"",
            needs_value()?
        ),
        Action::Clear => format!("я очищаю поле \"{element}\""),
    })
}

fn assertion_step(assertion: Assertion, element: &str, expected: Option<&str>) -> Result<String> {
    let needs_expected = || {
        expected.ok_or_else(|| {
            Error::validation(format!(
                "assertion '{assertion}' requires an expected value"
            ))
        })
    };
    Ok(match assertion {
        Assertion::Exists => format!("элемент \"{element}\" присутствует на форме"),
        Assertion::Visible => format!("элемент \"{element}\" отображается на форме"),
        Assertion::Enabled => format!("элемент \"{element}\" доступен"),
        Assertion::Value => format!(
            "значение элемента \"{element}\" равно \"{}\"",
            needs_expected()?
        ),
        Assertion::Count => {
            let raw = needs_expected()?;
            let count: u64 = raw.parse().map_err(|_| {
                Error::validation(format!(
                    "count assertion expects a non-negative integer, got '{raw}'"
                ))
            })?;
            format!("количество строк таблицы \"{element}\" равно {count}")
        }
    })
}

const fn condition_noun(condition: WaitCondition) -> &'static str {
    match condition {
        WaitCondition::Appear => "появления",
        WaitCondition::Disappear => "исчезновения",
        WaitCondition::Enabled => "доступности",
        WaitCondition::Disabled => "недоступности",
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} must not be empty")));
    }
    single_line(field, trimmed)
}

fn optional<'a>(field: &str, value: Option<&'a str>) -> Result<Option<&'a str>> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => single_line(field, trimmed).map(Some),
        _ => Ok(None),
    }
}

fn single_line<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.contains(['\n', '\r']) {
        return Err(Error::validation(format!("{field} must fit on one line")));
    }
    Ok(value)
}

/// Keyword-prefixed Russian step lines.
#[derive(Default)]
struct Steps(Vec<String>);

impl Steps {
    fn push(&mut self, keyword: StepKeyword, body: impl AsRef<str>) {
        self.0.push(format!(
            "{} {}",
            keyword.literal(Language::Russian),
            body.as_ref()
        ));
    }

    fn given(&mut self, body: impl AsRef<str>) {
        self.push(StepKeyword::Given, body);
    }

    fn when(&mut self, body: impl AsRef<str>) {
        self.push(StepKeyword::When, body);
    }

    fn and(&mut self, body: impl AsRef<str>) {
        self.push(StepKeyword::And, body);
    }

    fn then(&mut self, body: impl AsRef<str>) {
        self.push(StepKeyword::Then, body);
    }
}
