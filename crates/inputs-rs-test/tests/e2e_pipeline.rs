//! End-to-end tests: settings and declarations loaded from documents,
//! resolved into pipelines, applied by controls, and validated.
//!
//! Covers:
//! 1. Settings loading feeding control construction
//! 2. Declaration scenarios from raw input to model value
//! 3. Diagnostics captured through the test outbox
//! 4. Pipelines equivalent to hand-resolved chains

use inputs_rs_controls::{CheckboxModel, ControlConfig, NumberModel, TextKind, TextModel};
use inputs_rs_core::settings_loader;
use inputs_rs_model::resolver::UNKNOWN_FILTER;
use inputs_rs_model::{
    transform, FilterSpec, ModelModifiers, ModifierSpec, TransformConfig, TransformResolver,
};
use inputs_rs_test::{assert_equivalent, DiagnosticOutbox};
use inputs_rs_validation::{ValidationResult, ValidatorItem};

// ============================================================================
// Helpers
// ============================================================================

const SETTINGS: &str = r#"
    debug = false
    log_level = "warn"
    warn_on_unknown_presets = false
    number_allowed_characters = ".,"
"#;

fn parse_filters(json: &str) -> FilterSpec {
    serde_json::from_str(json).unwrap()
}

fn parse_modifiers(json: &str) -> ModifierSpec {
    serde_json::from_str(json).unwrap()
}

// ============================================================================
// Settings to controls
// ============================================================================

#[test]
fn test_settings_drive_number_controls() {
    let settings = settings_loader::from_toml_str(SETTINGS).unwrap();
    assert!(!settings.warn_on_unknown_presets);

    let config = ControlConfig::from_toml_str(r#"name = "price""#).unwrap();
    let mut price = config.into_number(&settings).unwrap();
    price.set_value(Some("EUR 1.299,00"));
    assert_eq!(price.value(), Some("1.299,00"));

    let mut plain = NumberModel::from_settings("qty", &settings).unwrap();
    plain.set_value(Some("x3"));
    assert_eq!(plain.value(), Some("3"));
}

#[test]
fn test_declared_controls_validate() {
    let settings = settings_loader::from_toml_str(SETTINGS).unwrap();
    let mut code = ControlConfig::from_toml_str(
        r#"
            name = "code"
            filters = ["letters", { pattern = "[^x]" }]
            modifiers = "uppercase"
            validators = ["required"]
        "#,
    )
    .unwrap()
    .into_text(TextKind::Text, &settings);

    assert_eq!(code.validate(), ValidationResult::failed());
    code.set_value(Some("xx-99"));
    assert_eq!(code.value(), Some(""));
    assert_eq!(code.validate(), ValidationResult::failed());
    code.set_value(Some("abx-1"));
    assert_eq!(code.value(), Some("AB"));
    assert_eq!(code.validate(), ValidationResult::passed());
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_numbers_only() {
    let mut input = TextModel::new("t").with_filters(parse_filters(r#""numbers""#));
    input.set_value(Some("abc123def"));
    assert_eq!(input.value(), Some("123"));
}

#[test]
fn test_scenario_conflicting_filters() {
    let mut input = TextModel::new("t").with_filters(parse_filters(r#"["numbers", "letters"]"#));
    input.set_value(Some("$updated-12345_"));
    assert_eq!(input.value(), Some(""));
}

#[test]
fn test_scenario_case_modifiers_in_order() {
    let mut input =
        TextModel::new("t").with_modifiers(parse_modifiers(r#"["lowercase", "uppercase"]"#));
    input.set_value(Some("UPDATED 12345"));
    assert_eq!(input.value(), Some("UPDATED 12345"));
}

#[test]
fn test_scenario_checkbox_required_with_message() {
    let input = CheckboxModel::new("c")
        .with_own_value("test")
        .with_value(Vec::<String>::new().into())
        .with_validators([
            ValidatorItem::Required,
            ValidatorItem::function(|v: &inputs_rs_core::CheckboxValue| {
                if v.is_checked(Some("test")) {
                    Ok(())
                } else {
                    Err("Wrong value")
                }
            }),
        ]);
    assert_eq!(
        input.validate(),
        Some(ValidationResult::with_messages(["Wrong value"]))
    );
}

#[test]
fn test_scenario_malformed_filters() {
    let outbox = DiagnosticOutbox::new();
    let mut input = TextModel::new("t")
        .with_resolver(TransformResolver::new(outbox.as_sink()))
        .with_filters(parse_filters("[42, null, null]"));

    assert!(input.pipeline().filters().is_empty());
    assert_eq!(outbox.count(UNKNOWN_FILTER), 3);

    input.set_value(Some("unchanged"));
    assert_eq!(input.value(), Some("unchanged"));
}

// ============================================================================
// Equivalence
// ============================================================================

#[test]
fn test_pipeline_matches_hand_resolved_chain() {
    let outbox = DiagnosticOutbox::new();
    let resolver = TransformResolver::new(outbox.as_sink());
    let filters = parse_filters(r#"["letters", { "pattern": "[^q]" }]"#);
    let modifiers = parse_modifiers(r#""uppercase""#);

    let pipeline = TransformConfig {
        filters: Some(filters.clone()),
        modifiers: Some(modifiers.clone()),
        model_modifiers: ModelModifiers::default(),
    }
    .into_pipeline(resolver.clone());

    let mut expected = resolver.resolve_filters(Some(&filters));
    expected.extend(resolver.resolve_modifiers(Some(&modifiers)));
    let actual: Vec<_> = pipeline.chain().cloned().collect();

    assert_equivalent(&actual, &expected, &["", "quiz 42", "Quartz-q", "ÅQå"]);
    assert_eq!(transform(Some("quiz 42"), &expected), "UIZ");
    assert!(outbox.is_empty());
}

#[test]
fn test_model_modifiers_follow_declared_modifiers() {
    let mut input = TextModel::new("t")
        .with_modifiers(parse_modifiers(r#""uppercase""#))
        .with_model_modifiers(ModelModifiers {
            lowercase: true,
            uppercase: false,
        });
    input.set_value(Some("MiXeD"));
    assert_eq!(input.value(), Some("mixed"));
}
