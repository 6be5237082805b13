//! JSON-RPC method dispatch.

use crate::{JSONRPC_VERSION, JsonRpcRequest, JsonRpcResponse, RpcError};

use serde_json::{Map, Value, json};

/// Process a decoded request into a response.
pub fn process_request(request: JsonRpcRequest) -> JsonRpcResponse {
    let JsonRpcRequest {
        jsonrpc,
        method,
        params,
        id,
    } = request;

    if jsonrpc != JSONRPC_VERSION {
        return JsonRpcResponse::failure(id, &RpcError::InvalidRequest);
    }

    let result = match method.as_str() {
        "getGreeting" => get_greeting(params.as_ref()),
        "getCurrentTime" => Ok(get_current_time()),
        "calculate" => calculate(params.as_ref()),
        "getSystemInfo" => Ok(get_system_info()),
        _ => Err(RpcError::MethodNotFound),
    };

    match result {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => {
            log::debug!("JSON-RPC method {method} failed: {e}");
            JsonRpcResponse::failure(id, &e)
        }
    }
}

fn params_object(params: Option<&Value>) -> Result<&Map<String, Value>, RpcError> {
    params
        .and_then(Value::as_object)
        .ok_or_else(|| RpcError::invalid_params("Invalid params"))
}

fn get_greeting(params: Option<&Value>) -> Result<Value, RpcError> {
    let name = params_object(params)?
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| RpcError::invalid_params("Missing or invalid 'name' parameter"))?;

    Ok(json!(format!("Hello {name} from Rust!")))
}

fn get_current_time() -> Value {
    json!(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Sum of both operands, each truncated toward zero.
fn calculate(params: Option<&Value>) -> Result<Value, RpcError> {
    let params = params_object(params)?;
    let operand = |key: &str| params.get(key).and_then(Value::as_f64);

    let (Some(a), Some(b)) = (operand("a"), operand("b")) else {
        return Err(RpcError::invalid_params(
            "Missing or invalid 'a' or 'b' parameters",
        ));
    };

    Ok(json!((a.trunc() as i64).saturating_add(b.trunc() as i64)))
}

fn get_system_info() -> Value {
    json!(format!(
        "{} v{} ({}/{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    ))
}
