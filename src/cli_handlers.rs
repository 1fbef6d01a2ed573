use crate::error::GraphError;
use crate::methods::{self, METHODS};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

/// Handle the sort command
pub fn handle_sort(input: Option<&Path>) -> Result<(), GraphError> {
    handle_call(methods::TOPOLOGICAL_SORT, input)
}

/// Handle the call command
pub fn handle_call(method: &str, input: Option<&Path>) -> Result<(), GraphError> {
    let request = read_request(input)?;
    info!(method, "calling method");

    let response = methods::call_method(method, &request)?;

    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}

/// Handle the methods command
pub fn handle_methods() -> Result<(), GraphError> {
    for method in METHODS {
        println!("{method}");
    }

    Ok(())
}

/// Read a JSON request from a file, or stdin for `None` / "-"
fn read_request(input: Option<&Path>) -> Result<Value, GraphError> {
    let text = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    Ok(serde_json::from_str(&text)?)
}
