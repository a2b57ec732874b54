//! End-to-end composition of the built-in text decorators.

use field_decor::decorators::{
    InputTypeDecorator, PatternDecorator, PlaceholderDecorator, UncheckedValueDecorator,
};
use field_decor::{CompositionPipeline, ConfigMap, DecoratorSet, sequence};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn name_pipeline() -> CompositionPipeline {
    let mut pipeline = CompositionPipeline::new();
    pipeline
        .register(PatternDecorator::new("[A-Za-z]+").with_description("Letters only"))
        .register(PlaceholderDecorator::new("Enter name"));
    pipeline
}

#[rstest]
fn text_field_combines_placeholder_and_pattern(name_pipeline: CompositionPipeline) {
    let config = name_pipeline.build("text", ConfigMap::new());
    assert_eq!(
        config.into_value(),
        json!({
            "placeholder": "Enter name",
            "attributes": {
                "placeholder": "Enter name",
                "pattern": "[A-Za-z]+",
                "title": "Letters only"
            },
            "pattern": "[A-Za-z]+",
            "pattern_description": "Letters only"
        })
    );
}

#[rstest]
fn registration_order_does_not_matter(name_pipeline: CompositionPipeline) {
    let mut reversed = CompositionPipeline::new();
    reversed
        .register(PlaceholderDecorator::new("Enter name"))
        .register(PatternDecorator::new("[A-Za-z]+").with_description("Letters only"));

    let expected = name_pipeline.build("text", ConfigMap::new());
    assert_eq!(reversed.build("text", ConfigMap::new()), expected);
}

#[rstest]
fn unrelated_field_type_returns_base(name_pipeline: CompositionPipeline) {
    let base = ConfigMap::from_iter([(String::from("label"), json!("Agree"))]);
    let config = name_pipeline.build("checkbox", base.clone());
    assert_eq!(config, base);
}

#[test]
fn base_attributes_are_merged_not_replaced() {
    let mut pipeline = CompositionPipeline::new();
    pipeline.register(InputTypeDecorator::new("email"));
    let base = ConfigMap::try_from(json!({
        "label": "Email",
        "attributes": {"class": "regular-text"}
    }))
    .unwrap_or_else(|err| panic!("base must be a map: {err}"));

    let config = pipeline.build("text", base);
    assert_eq!(
        config.into_value(),
        json!({
            "label": "Email",
            "attributes": {"class": "regular-text", "type": "email"},
            "input_type": "email"
        })
    );
}

#[rstest]
#[case::known("url", "url")]
#[case::unknown("colour-wheel", "text")]
#[case::empty("", "text")]
fn input_type_falls_back_to_text(#[case] requested: &str, #[case] expected: &str) {
    let mut pipeline = CompositionPipeline::new();
    pipeline.register(InputTypeDecorator::new(requested));
    let config = pipeline.build("text", ConfigMap::new());
    assert_eq!(config.get("input_type"), Some(&json!(expected)));
}

#[test]
fn priority_override_reorders_same_key_writers() {
    let mut pipeline = CompositionPipeline::new();
    pipeline
        .register(PlaceholderDecorator::new("default priority"))
        .register(PlaceholderDecorator::new("runs first").with_priority(1));

    let ordered = sequence(pipeline.decorators().applicable("text"));
    assert_eq!(ordered.priorities(), [1, 20]);

    let config = pipeline.build("text", ConfigMap::new());
    assert_eq!(config.get("placeholder"), Some(&json!("default priority")));
}

#[test]
fn mixed_field_types_are_partitioned() {
    let mut set = DecoratorSet::new();
    set.push(PlaceholderDecorator::new("Name"));
    set.push(UncheckedValueDecorator::new("no"));
    set.push(PatternDecorator::new("[0-9]+"));
    let pipeline = CompositionPipeline::from(set);

    let checkbox = pipeline.build("checkbox", ConfigMap::new());
    assert_eq!(checkbox.into_value(), json!({"unchecked_value": "no"}));

    let text = pipeline.build("text", ConfigMap::new());
    assert!(!text.contains_key("unchecked_value"));
    assert_eq!(text.get("pattern"), Some(&json!("[0-9]+")));
}
