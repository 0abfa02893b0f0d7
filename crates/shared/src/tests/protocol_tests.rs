use super::*;

fn drop_shadow() -> Treatment {
    Treatment::DropShadow {
        offset_x: 3.0,
        offset_y: 3.0,
        blur_radius: 3.0,
        color: "black".into(),
    }
}

#[test]
fn drop_shadow_renders_as_css_filter() {
    assert_eq!(
        drop_shadow().css().as_deref(),
        Some("drop-shadow(3px, 3px, 3px, black)")
    );
}

#[test]
fn blur_brightness_keeps_fractional_radius() {
    let treatment = Treatment::BlurBrightness {
        blur_radius: 5.5,
        brightness_percent: 80.0,
    };
    assert_eq!(
        treatment.css().as_deref(),
        Some("blur(5.5px) brightness(80%)")
    );
}

#[test]
fn tautology_predicate_is_recognized() {
    assert!(Predicate::tautology().is_tautology());
    assert!(!Predicate::new("crash < 25").is_tautology());
    assert_eq!(Predicate::tautology().to_string(), "1 = 1");
}

#[test]
fn effect_serializes_with_where_clause_and_css_treatments() {
    let effect = LayerViewEffect {
        filter: FeatureFilter {
            where_clause: Predicate::new("crash < 25"),
        },
        included_effect: drop_shadow(),
        excluded_effect: Treatment::BlurBrightness {
            blur_radius: 5.5,
            brightness_percent: 80.0,
        },
    };

    let json = serde_json::to_value(&effect).expect("serialize effect");
    assert_eq!(json["filter"]["where"], "crash < 25");
    assert_eq!(json["includedEffect"], "drop-shadow(3px, 3px, 3px, black)");
    assert_eq!(json["excludedEffect"], "blur(5.5px) brightness(80%)");
}

#[test]
fn cleared_effect_omits_identity_treatments() {
    let effect = LayerViewEffect {
        filter: FeatureFilter {
            where_clause: Predicate::tautology(),
        },
        included_effect: Treatment::Identity,
        excluded_effect: Treatment::Identity,
    };

    assert!(effect.is_cleared());
    let json = serde_json::to_value(&effect).expect("serialize effect");
    assert_eq!(json, serde_json::json!({ "filter": { "where": "1 = 1" } }));
}

#[test]
fn treatment_deserializes_from_tagged_table() {
    let treatment: Treatment = serde_json::from_value(serde_json::json!({
        "kind": "blur_brightness",
        "blur_radius": 2.0,
        "brightness_percent": 50.0
    }))
    .expect("deserialize treatment");
    assert_eq!(treatment.css().as_deref(), Some("blur(2px) brightness(50%)"));
}
