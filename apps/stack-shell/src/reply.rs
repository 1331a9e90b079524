//! # Reply Rendering
//!
//! Turns the result of one command into one line of text or one JSON object.
//!
//! ```text
//! Text:   c                                  error[EMPTY_STACK]: cannot pop an empty stack
//! JSON:   {"ok":true,"result":{...}}         {"ok":false,"code":"EMPTY_STACK","message":"..."}
//! ```

use serde_json::json;

use crate::command::HELP;
use crate::config::OutputFormat;
use crate::error::{ShellError, ShellResult};
use crate::session::Output;

/// Renders a command result in the requested format.
pub fn render(result: &ShellResult<Output>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => render_json(result).to_string(),
    }
}

fn render_text(result: &ShellResult<Output>) -> String {
    match result {
        Ok(output) => match output {
            Output::Pushed { size } => format!("ok (size {})", size),
            Output::Value { value } => value.clone(),
            Output::Size { size } => size.to_string(),
            Output::Empty { empty } => empty.to_string(),
            Output::Cleared => "cleared".to_string(),
            Output::Contents { items } => format!("{:?}", items),
            Output::Help => HELP.to_string(),
            Output::Bye => "bye".to_string(),
        },
        Err(err) => render_error_text(err),
    }
}

fn render_error_text(err: &ShellError) -> String {
    format!("error[{}]: {}", err.code(), err)
}

fn render_json(result: &ShellResult<Output>) -> serde_json::Value {
    match result {
        Ok(Output::Help) => json!({ "ok": true, "result": { "kind": "help", "text": HELP } }),
        Ok(output) => json!({ "ok": true, "result": output }),
        Err(err) => json!({
            "ok": false,
            "code": err.code(),
            "message": err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifo_core::{Operation, StackError};

    fn empty_pop() -> ShellResult<Output> {
        Err(StackError::Empty {
            operation: Operation::Pop,
        }
        .into())
    }

    #[test]
    fn test_text_rendering() {
        let ok = Ok(Output::Value {
            value: "hello".to_string(),
        });
        assert_eq!(render(&ok, OutputFormat::Text), "hello");

        let contents = Ok(Output::Contents {
            items: vec!["b".to_string(), "a".to_string()],
        });
        assert_eq!(render(&contents, OutputFormat::Text), r#"["b", "a"]"#);

        let empty = Ok(Output::Contents { items: vec![] });
        assert_eq!(render(&empty, OutputFormat::Text), "[]");

        // Separators and quotes inside a value stay distinguishable.
        let tricky = Ok(Output::Contents {
            items: vec!["a, b".to_string(), "say \"hi\"".to_string()],
        });
        assert_eq!(
            render(&tricky, OutputFormat::Text),
            r#"["a, b", "say \"hi\""]"#
        );

        assert_eq!(
            render(&Ok(Output::Pushed { size: 2 }), OutputFormat::Text),
            "ok (size 2)"
        );
    }

    #[test]
    fn test_text_error_rendering() {
        assert_eq!(
            render(&empty_pop(), OutputFormat::Text),
            "error[EMPTY_STACK]: cannot pop an empty stack"
        );
    }

    #[test]
    fn test_json_rendering() {
        let rendered = render(&Ok(Output::Size { size: 3 }), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["result"]["kind"], "size");
        assert_eq!(value["result"]["size"], 3);
    }

    #[test]
    fn test_json_error_rendering() {
        let rendered = render(&empty_pop(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["code"], "EMPTY_STACK");
        assert_eq!(value["message"], "cannot pop an empty stack");
    }
}
