//! Newline-delimited JSON-RPC over stdin/stdout
//!
//! Drives the same dispatcher as the HTTP endpoint. Diagnostic logs go to
//! stderr; stdout carries nothing but responses.

use super::{dispatch::handle_message, helpers::rpc_error, models::PARSE_ERROR, state::GatewayState};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

/// Serves the gateway on the process's stdin/stdout until stdin closes.
pub async fn run_stdio(state: &GatewayState) -> std::io::Result<()> {
    info!("MCP gateway serving on stdio");
    serve_lines(state, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
    info!("stdin closed, shutting down");
    Ok(())
}

/// Reads one JSON-RPC message per line from `reader` and writes one response
/// line per message to `writer`.
pub async fn serve_lines<R, W>(state: &GatewayState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(line) {
            Ok(message) => handle_message(state, message).await,
            Err(e) => {
                warn!("Invalid JSON on stdin: {}", e);
                rpc_error(Value::Null, PARSE_ERROR, "Parse error")
            }
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::client::BackendClient;

    #[tokio::test]
    async fn answers_each_line_in_order() {
        let state =
            GatewayState::new(BackendClient::new("http://127.0.0.1:9".parse().unwrap(), None).unwrap());
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#,
            "\n\n",
            "not json\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"delete_user","arguments":{}}}"#,
            "\n",
        );

        let mut output = Vec::new();
        serve_lines(&state, input.as_bytes(), &mut output).await.unwrap();

        let responses: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "user-management-server");
        assert_eq!(responses[1]["error"]["code"], PARSE_ERROR);
        assert_eq!(responses[2]["id"], 2);
        assert_eq!(responses[2]["result"]["content"][0]["text"], "Error: User ID is required");
    }
}
