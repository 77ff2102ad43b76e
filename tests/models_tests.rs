use copydesk::core::models::{
    BrainstormRequest, BrainstormResult, CopyRequest, CopyResult, IngestReceipt, Platform, Style,
    VisionAnalysis,
};
use serde_json::json;

#[test]
fn test_copy_request_wire_shape() {
    let req = CopyRequest {
        platform: Platform::Instagram,
        topic: "新品上市".to_string(),
        style: Style::Humorous,
        use_agent: true,
        use_search: false,
    };

    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        json!({
            "platform": "instagram",
            "topic": "新品上市",
            "style": "幽默風趣",
            "use_agent": true,
            "use_search": false
        })
    );
}

#[test]
fn test_platform_serializes_lowercase() {
    for (platform, expected) in [
        (Platform::Facebook, "facebook"),
        (Platform::Instagram, "instagram"),
        (Platform::Threads, "threads"),
    ] {
        assert_eq!(serde_json::to_value(platform).unwrap(), json!(expected));
        assert_eq!(platform.as_str(), expected);
    }
}

#[test]
fn test_style_presets_round_trip_display_strings() {
    for style in Style::PRESETS {
        let value = serde_json::to_value(style).unwrap();
        assert_eq!(value, json!(style.as_str()));
        let back: Style = serde_json::from_value(value).unwrap();
        assert_eq!(back, style);
    }
}

#[test]
fn test_copy_result_logs_default_to_empty() {
    // Single-shot generations omit the logs field entirely
    let result: CopyResult = serde_json::from_value(json!({"content": "hello"})).unwrap();
    assert_eq!(result.content, "hello");
    assert!(result.logs.is_empty());

    let result: CopyResult = serde_json::from_value(json!({
        "content": "hello",
        "logs": ["步驟一", "步驟二"]
    }))
    .unwrap();
    assert_eq!(result.logs.len(), 2);
    assert_eq!(result.logs[0], "步驟一");
}

#[test]
fn test_brainstorm_request_wire_shape() {
    let req = BrainstormRequest {
        idea: "推廣環保杯".to_string(),
        platform: Platform::Threads,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, json!({"idea": "推廣環保杯", "platform": "threads"}));
}

#[test]
fn test_response_payloads_deserialize() {
    let vision: VisionAnalysis =
        serde_json::from_value(json!({"analysis": "warm tones"})).unwrap();
    assert_eq!(vision.analysis, "warm tones");

    let brainstorm: BrainstormResult =
        serde_json::from_value(json!({"suggestions": "three angles"})).unwrap();
    assert_eq!(brainstorm.suggestions, "three angles");

    let receipt: IngestReceipt = serde_json::from_value(
        json!({"message": "Successfully processed 3 chunks from guide.pdf"}),
    )
    .unwrap();
    assert!(receipt.message.contains("guide.pdf"));
}

#[test]
fn test_extra_response_fields_are_ignored() {
    // The backend also returns context_used; the console does not care
    let result: CopyResult = serde_json::from_value(json!({
        "content": "貼文",
        "context_used": ["brand note"],
        "logs": []
    }))
    .unwrap();
    assert_eq!(result.content, "貼文");
}
