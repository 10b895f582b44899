// Wire-shape tests for the exported field configuration document.
// The provisioning script consumes exactly this JSON.

use factory_board::field_configs;
use serde_json::json;

#[test]
fn test_document_has_exactly_the_three_export_keys() {
    let doc = serde_json::to_value(field_configs()).unwrap();
    let object = doc.as_object().unwrap();

    // serde_json maps iterate in sorted key order
    let keys: Vec<&String> = object.keys().collect();
    assert_eq!(keys, vec!["factoryStatus", "partnerStatus", "studyStage"]);
}

#[test]
fn test_serialized_document_preserves_board_order() {
    let text = serde_json::to_string(&field_configs()).unwrap();
    let factory = text.find("factoryStatus").unwrap();
    let stage = text.find("studyStage").unwrap();
    let partner = text.find("partnerStatus").unwrap();
    assert!(factory < stage);
    assert!(stage < partner);
}

#[test]
fn test_every_field_is_single_select() {
    let doc = serde_json::to_value(field_configs()).unwrap();
    for key in ["factoryStatus", "studyStage", "partnerStatus"] {
        assert_eq!(doc[key]["dataType"], "SINGLE_SELECT", "{} data type", key);
        assert!(doc[key]["options"].is_array());
    }
}

#[test]
fn test_field_display_names() {
    let doc = serde_json::to_value(field_configs()).unwrap();
    assert_eq!(doc["factoryStatus"]["name"], "Status");
    assert_eq!(doc["studyStage"]["name"], "Stage");
    assert_eq!(doc["partnerStatus"]["name"], "Site Status");
}

#[test]
fn test_option_objects_carry_name_color_description() {
    let doc = serde_json::to_value(field_configs()).unwrap();
    let first = &doc["factoryStatus"]["options"][0];
    let keys: Vec<&String> = first.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["color", "description", "name"]);
}

#[test]
fn test_partner_status_first_option_wire_value() {
    let doc = serde_json::to_value(field_configs()).unwrap();
    assert_eq!(
        doc["partnerStatus"]["options"][0],
        json!({
            "name": "Potential",
            "color": "RED",
            "description": "Potential status in partner_status workflow"
        })
    );
}

#[test]
fn test_option_arrays_keep_declaration_order() {
    let doc = serde_json::to_value(field_configs()).unwrap();

    let factory = doc["factoryStatus"]["options"].as_array().unwrap();
    assert_eq!(factory.first().unwrap()["name"], "Initiation");
    assert_eq!(factory.last().unwrap()["name"], "Blocked");

    let stage = doc["studyStage"]["options"].as_array().unwrap();
    assert_eq!(stage.first().unwrap()["name"], "Initiation");
    assert_eq!(stage.last().unwrap()["name"], "Results evaluation");
    assert_eq!(stage.last().unwrap()["color"], "DARK_GRAY");

    let partner = doc["partnerStatus"]["options"].as_array().unwrap();
    assert_eq!(partner.first().unwrap()["name"], "Potential");
    assert_eq!(partner.last().unwrap()["name"], "Blocked");
}
