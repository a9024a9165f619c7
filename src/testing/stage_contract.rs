use crate::stage::Stage;
use std::borrow::Cow;

/// Inputs a stage is checked against by [`assert_stage_contract!`].
///
/// Several built-in stages share one type (every [`RuleStage`] for example),
/// so the cases travel with the call instead of hanging off the type.
///
/// [`RuleStage`]: crate::stage::rule::RuleStage
#[derive(Debug, Clone, Copy)]
pub struct StageTestConfig {
    /// General samples; may or may not trigger changes.
    pub samples: &'static [&'static str],
    /// Samples the stage must return unchanged and still borrowed.
    pub should_pass_through: &'static [&'static str],
    /// Known input/output pairs.
    pub should_transform: &'static [(&'static str, &'static str)],
}

impl StageTestConfig {
    pub const DEFAULT: Self = Self {
        samples: &["سلام دنیا", "Hello World", ""],
        should_pass_through: &["سلام", "کتاب\u{200C}ها", ""],
        should_transform: &[],
    };
}

impl Default for StageTestConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes`: pass-through samples stay borrowed.
/// 2. `transforms_as_expected`: known pairs produce the expected output.
/// 3. `stage_is_idempotent`: a second `apply` changes nothing.
/// 4. `needs_apply_never_misses`: `needs_apply == false` means `apply` is a no-op.
/// 5. `handles_empty_string`
/// 6. `no_panic_on_mixed_scripts`
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::assert_stage_contract!(
            $stage,
            $crate::testing::stage_contract::StageTestConfig::DEFAULT
        )
    };
    ($stage:expr, $config:expr) => {{
        let stage = &$stage;
        let config = &$config;
        $crate::testing::stage_contract::zero_copy_when_no_changes(stage, config);
        $crate::testing::stage_contract::transforms_as_expected(stage, config);
        $crate::testing::stage_contract::stage_is_idempotent(stage, config);
        $crate::testing::stage_contract::needs_apply_never_misses(stage, config);
        $crate::testing::stage_contract::handles_empty_string(stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(stage);
    }};
}

/// Run the stage the way the pipeline does: `apply` only when `needs_apply`.
fn run<'a, S: Stage + ?Sized>(stage: &S, text: Cow<'a, str>) -> Cow<'a, str> {
    if stage.needs_apply(&text).unwrap() {
        stage.apply(text).unwrap()
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: Stage + ?Sized>(stage: &S, config: &StageTestConfig) {
    for &input in config.should_pass_through {
        let out = run(stage, Cow::Borrowed(input));
        assert_eq!(out, input, "stage `{}` changed pass-through `{input}`", stage.name());
        assert!(
            matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
            "zero-copy violated by stage `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn transforms_as_expected<S: Stage + ?Sized>(stage: &S, config: &StageTestConfig) {
    for &(input, expected) in config.should_transform {
        let out = run(stage, Cow::Borrowed(input));
        assert_eq!(out, expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: Stage + ?Sized>(stage: &S, config: &StageTestConfig) {
    let inputs = config
        .samples
        .iter()
        .chain(config.should_transform.iter().map(|(input, _)| input));
    for &input in inputs {
        let once = stage.apply(Cow::Borrowed(input)).unwrap();
        let twice = stage.apply(once.clone()).unwrap();
        assert_eq!(once, twice, "stage `{}` not idempotent on `{input}`", stage.name());
    }
}

pub fn needs_apply_never_misses<S: Stage + ?Sized>(stage: &S, config: &StageTestConfig) {
    let inputs = config
        .samples
        .iter()
        .chain(config.should_pass_through)
        .chain(config.should_transform.iter().map(|(input, _)| input));
    for &input in inputs {
        if stage.needs_apply(input).unwrap() {
            continue;
        }
        let out = stage.apply(Cow::Owned(input.to_owned())).unwrap();
        assert_eq!(
            out,
            input,
            "stage `{}` skipped `{input}` but apply() would rewrite it",
            stage.name()
        );
    }
}

pub fn handles_empty_string<S: Stage + ?Sized>(stage: &S) {
    assert_eq!(run(stage, Cow::Borrowed("")), "");
    assert_eq!(stage.apply(Cow::Borrowed("")).unwrap(), "");
}

pub fn no_panic_on_mixed_scripts<S: Stage + ?Sized>(stage: &S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский \"نقل\" ﻛﺘﺎﺏ ١٢٣ 456 «کتاب» می\u{200C}روم... !!",
    ));
}
