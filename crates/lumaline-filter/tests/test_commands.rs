use std::borrow::Cow;

use lumaline_filter::{
    handle_method_call, CommandError, CommandResponse, FilterEngine, FilterError, Frame,
    MethodCall,
};

fn call(engine: &mut FilterEngine, json: &str) -> Result<CommandResponse, CommandError> {
    let call: MethodCall = serde_json::from_str(json).map_err(|e| CommandError::InvalidArgument {
        method: String::new(),
        argument: String::new(),
        reason: e.to_string(),
    })?;
    handle_method_call(engine, call)
}

#[test]
fn session_over_method_calls() -> Result<(), FilterError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut engine = FilterEngine::new();
    let frame = Frame::from_size_pixel([20, 20].into(), [255, 255, 255, 255])?;

    assert_eq!(
        call(&mut engine, r#"{ "method": "initializeFilter" }"#),
        Ok(CommandResponse::Bool(true))
    );
    // still disabled
    assert!(matches!(engine.apply_filter(&frame), Cow::Borrowed(_)));

    assert_eq!(
        call(
            &mut engine,
            r#"{ "method": "setFilterEnabled", "arguments": { "enabled": true } }"#
        ),
        Ok(CommandResponse::Unit)
    );
    assert_eq!(
        call(&mut engine, r#"{ "method": "isFilterEnabled" }"#),
        Ok(CommandResponse::Bool(true))
    );
    assert!(matches!(engine.apply_filter(&frame), Cow::Owned(_)));

    assert_eq!(
        call(
            &mut engine,
            r#"{ "method": "setFilterParams",
                 "arguments": { "threshold1": 10, "threshold2": 20, "colorful": false } }"#
        ),
        Ok(CommandResponse::Unit)
    );
    let out = engine.apply_filter(&frame);
    assert!(out.as_slice().chunks_exact(4).all(|px| px == [0u8, 0, 0, 255]));

    assert_eq!(
        call(&mut engine, r#"{ "method": "releaseFilter", "arguments": null }"#),
        Ok(CommandResponse::Unit)
    );
    assert!(!engine.is_enabled());
    assert_eq!(*engine.apply_filter(&frame), frame);

    Ok(())
}

#[test]
fn unknown_method_is_not_implemented() {
    let mut engine = FilterEngine::new();
    let res = call(&mut engine, r#"{ "method": "initializeAIFilter" }"#);
    assert_eq!(
        res,
        Err(CommandError::NotImplemented("initializeAIFilter".to_string()))
    );
    assert!(!engine.is_initialized());
}

#[test]
fn responses_serialize_for_the_transport() -> Result<(), serde_json::Error> {
    let mut engine = FilterEngine::new();

    let init = handle_method_call(
        &mut engine,
        MethodCall::new("initializeFilter", serde_json::Value::Null),
    );
    assert_eq!(init, Ok(CommandResponse::Bool(true)));
    if let Ok(response) = init {
        assert_eq!(serde_json::to_string(&response)?, "true");
    }

    let release = handle_method_call(
        &mut engine,
        MethodCall::new("releaseFilter", serde_json::Value::Null),
    );
    if let Ok(response) = release {
        assert_eq!(serde_json::to_string(&response)?, "null");
    }
    Ok(())
}
